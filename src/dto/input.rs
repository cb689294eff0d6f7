use std::str::FromStr;

use bigdecimal::BigDecimal;

use crate::error::AmountError;

/// Reads user-entered text as an exact decimal amount.
///
/// Accepts plain ("12.999") and scientific ("1e15") notation, with an
/// optional sign, a leading `$` and comma thousands separators
/// ("$1,234.56"). No digits are dropped; rounding happens later, once.
pub fn parse_amount(text: &str) -> Result<BigDecimal, AmountError> {
    let malformed = || AmountError::MalformedInput {
        input: text.to_string(),
    };

    let trimmed = text.trim();
    let (sign, unsigned) = if let Some(rest) = trimmed.strip_prefix('-') {
        ("-", rest)
    } else {
        ("", trimmed.strip_prefix('+').unwrap_or(trimmed))
    };
    let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);
    let digits = strip_separators(unsigned).ok_or_else(malformed)?;

    if digits.is_empty() || !digits.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(malformed());
    }

    BigDecimal::from_str(&format!("{sign}{digits}")).map_err(|_| malformed())
}

// Commas are only allowed between groups of three in the integer part.
fn strip_separators(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let split = text.find(|c: char| c == '.' || c == 'e' || c == 'E').unwrap_or(text.len());
    let (integer, rest) = text.split_at(split);
    let mut groups = integer.split(',');

    let first = groups.next()?;
    if first.is_empty() || first.len() > 3 {
        return None;
    }
    let mut result = first.to_string();
    for group in groups {
        if group.len() != 3 {
            return None;
        }
        result.push_str(group);
    }
    if rest.contains(',') {
        return None;
    }
    result.push_str(rest);
    Some(result)
}
