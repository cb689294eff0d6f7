use std::io::{BufRead, Write};

use anyhow::{bail, Context};
use tracing::{info, warn};

use crate::dto::{self, Settings};
use crate::error::AmountError;
use crate::words;

/// Parses raw text and converts it in one go.
pub fn convert_text(text: &str) -> Result<String, AmountError> {
    let amount = dto::parse_amount(text)?;
    words::convert_decimal(&amount)
}

/// Prompts until a valid amount is entered and returns its wording.
///
/// Rejected entries are reported on `errors` and the prompt repeats. Fails
/// when `input` runs dry or `max_attempts` is used up.
pub fn prompt_until_valid<R, W, E>(
    settings: &Settings,
    mut input: R,
    mut output: W,
    mut errors: E,
) -> anyhow::Result<String>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut attempts: u32 = 0;
    loop {
        if let Some(max) = settings.max_attempts {
            if attempts >= max {
                bail!("no valid amount after {max} attempts");
            }
        }
        attempts += 1;

        write!(output, "{}", settings.prompt)?;
        output.flush()?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("failed reading amount")?;
        if read == 0 {
            bail!("input closed before a valid amount was entered");
        }

        info!(attempt = attempts, input = line.trim(), "converting amount");
        match convert_text(&line) {
            Ok(text) => {
                writeln!(output, "Amount: {text}")?;
                return Ok(text);
            }
            Err(err) => {
                warn!(error = %err, "rejected amount");
                writeln!(errors, "Error: {err}")?;
            }
        }
    }
}
