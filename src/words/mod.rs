//! Check-style English wording for dollar amounts.
//!
//! ```text
//! 1,000,002,523.04 => One billion two thousand five hundred twenty-three and 04/100 dollars
//! ```

mod group;
mod whole;

use bigdecimal::BigDecimal;
use tracing::trace;

use crate::error::AmountError;
use crate::model::Amount;

pub use group::format_group;
pub use whole::format_whole;

/// Converts a pre-split amount of whole dollars and cents.
pub fn convert(whole_dollars: i64, cents: i64) -> Result<String, AmountError> {
    let amount = Amount::new(whole_dollars, cents)?;
    Ok(to_words(&amount))
}

/// Converts an exact decimal amount, rounding half-up to the nearest cent first.
pub fn convert_decimal(amount: &BigDecimal) -> Result<String, AmountError> {
    let amount = Amount::from_decimal(amount)?;
    Ok(to_words(&amount))
}

/// Formats an already validated amount. Never fails.
pub fn to_words(amount: &Amount) -> String {
    let whole = format_whole(amount.whole_dollars()).join(" ");

    let mut text = capitalize(&whole);
    text.push_str(" and ");
    text.push_str(&format_cents(amount.cents()));
    text.push_str(" dollars");

    trace!(%amount, text = text.as_str(), "formatted amount");
    text
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn format_cents(cents: u8) -> String {
    format!("{cents:02}/100")
}

#[cfg(test)]
mod test {
    use std::str::FromStr;

    use proptest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::model::MAX_DOLLARS_EXCLUSIVE;

    fn d(value: &str) -> BigDecimal {
        BigDecimal::from_str(value).unwrap()
    }

    #[test]
    fn test_format_cents() {
        assert_eq!("00/100", format_cents(0));
        assert_eq!("04/100", format_cents(4));
        assert_eq!("99/100", format_cents(99));
    }

    #[test]
    fn test_capitalize_only_first_letter() {
        assert_eq!("Twenty-three", capitalize("twenty-three"));
        assert_eq!("One hundred", capitalize("one hundred"));
    }

    #[rstest]
    #[case(0, 0, "Zero and 00/100 dollars")]
    #[case(0, 1, "Zero and 01/100 dollars")]
    #[case(0, 99, "Zero and 99/100 dollars")]
    #[case(105, 0, "One hundred five and 00/100 dollars")]
    #[case(
        1_381_212,
        18,
        "One million three hundred eighty-one thousand two hundred twelve and 18/100 dollars"
    )]
    #[case(
        1_000_002_523,
        4,
        "One billion two thousand five hundred twenty-three and 04/100 dollars"
    )]
    fn test_convert(#[case] whole: i64, #[case] cents: i64, #[case] expected: &str) {
        assert_eq!(expected, convert(whole, cents).unwrap());
    }

    #[rstest]
    #[case("1", "One and 00/100 dollars")]
    #[case("10", "Ten and 00/100 dollars")]
    #[case("11", "Eleven and 00/100 dollars")]
    #[case("12", "Twelve and 00/100 dollars")]
    #[case("13", "Thirteen and 00/100 dollars")]
    #[case("20", "Twenty and 00/100 dollars")]
    #[case("23", "Twenty-three and 00/100 dollars")]
    #[case("100", "One hundred and 00/100 dollars")]
    #[case("137", "One hundred thirty-seven and 00/100 dollars")]
    #[case("1000", "One thousand and 00/100 dollars")]
    #[case("1000000", "One million and 00/100 dollars")]
    #[case("1e6", "One million and 00/100 dollars")]
    #[case("1000000000", "One billion and 00/100 dollars")]
    #[case("1000000000000", "One trillion and 00/100 dollars")]
    #[case("12.999", "Thirteen and 00/100 dollars")]
    #[case("0.004999999999999999999999999999", "Zero and 00/100 dollars")]
    #[case("1e-40", "Zero and 00/100 dollars")]
    #[case(
        "2523.04",
        "Two thousand five hundred twenty-three and 04/100 dollars"
    )]
    #[case(
        "999999999999999.99",
        "Nine hundred ninety-nine trillion nine hundred ninety-nine billion nine hundred ninety-nine million nine hundred ninety-nine thousand nine hundred ninety-nine and 99/100 dollars"
    )]
    fn test_convert_decimal(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(expected, convert_decimal(&d(input)).unwrap());
    }

    #[test]
    fn test_convert_errors() {
        assert!(matches!(
            convert(-1, 0),
            Err(AmountError::NegativeAmount { .. })
        ));
        assert!(matches!(
            convert(0, -1),
            Err(AmountError::NegativeAmount { .. })
        ));
        assert!(matches!(
            convert(0, 100),
            Err(AmountError::InvalidCents { cents: 100 })
        ));
        assert!(matches!(
            convert(1_000_000_000_000_000, 0),
            Err(AmountError::AmountTooLarge { .. })
        ));
        assert!(matches!(
            convert_decimal(&d("1000000000000000")),
            Err(AmountError::AmountTooLarge { .. })
        ));
    }

    fn group_at(whole: u64, power: u32) -> u64 {
        whole / 1000u64.pow(power) % 1000
    }

    proptest! {
        #[test]
        fn test_every_valid_pair_converts(
            whole in 0..MAX_DOLLARS_EXCLUSIVE as i64,
            cents in 0i64..100,
        ) {
            let text = convert(whole, cents).unwrap();
            let suffix = format!(" and {cents:02}/100 dollars");
            prop_assert!(text.ends_with(&suffix));
            prop_assert!(text.starts_with(|c: char| c.is_ascii_uppercase()));
        }

        #[test]
        fn test_words_follow_nonzero_groups(whole in 0..MAX_DOLLARS_EXCLUSIVE) {
            let text = convert(whole as i64, 0).unwrap();
            let words: Vec<&str> = text.split(' ').collect();

            for (index, scale) in ["thousand", "million", "billion", "trillion"].iter().enumerate() {
                let present = words.contains(scale);
                prop_assert_eq!(group_at(whole, index as u32 + 1) != 0, present);
            }

            let hundreds = (0..5).filter(|power| group_at(whole, *power) >= 100).count();
            prop_assert_eq!(hundreds, words.iter().filter(|word| **word == "hundred").count());
        }
    }
}
