use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use checkwords::{driver, dto, logging, words};

#[derive(Parser)]
#[command(about = "Write a dollar amount out in words, as on a bank check")]
struct Cli {
    /// Amount to convert, e.g. 1000002523.04; prompts when omitted
    #[arg(allow_negative_numbers = true)]
    amount: Option<String>,

    /// Convert whole dollars and cents given separately
    #[arg(
        long = "split",
        num_args = 2,
        value_names = ["DOLLARS", "CENTS"],
        allow_negative_numbers = true,
        conflicts_with = "amount"
    )]
    split: Option<Vec<i64>>,

    /// Location of the settings file
    #[arg(long = "settings", default_value = "checkwords.yaml")]
    settings_path: PathBuf,
}

fn run(cli: Cli, settings: &dto::Settings) -> anyhow::Result<String> {
    if let Some([dollars, cents]) = cli.split.as_deref() {
        return words::convert(*dollars, *cents)
            .with_context(|| format!("cannot convert {dollars} dollars and {cents} cents"));
    }

    match cli.amount {
        Some(amount) => driver::convert_text(&amount)
            .with_context(|| format!("cannot convert '{amount}'")),
        None => driver::prompt_until_valid(
            settings,
            io::stdin().lock(),
            io::stdout(),
            io::stderr(),
        ),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = dto::load_settings(&cli.settings_path)
        .with_context(|| format!("loading {:?}", cli.settings_path))?;
    logging::init_logging(&settings.log_level);

    let interactive = cli.amount.is_none() && cli.split.is_none();
    let text = run(cli, &settings)?;
    if !interactive {
        println!("Amount: {text}");
    }

    Ok(())
}
