use std::fmt;

use bigdecimal::{BigDecimal, RoundingMode, Signed, ToPrimitive, Zero};
use tracing::debug;

use crate::error::AmountError;

/// One quadrillion. Whole dollars must stay strictly below this.
pub const MAX_DOLLARS_EXCLUSIVE: u64 = 1_000_000_000_000_000;

/// A validated dollar amount split into whole dollars and cents.
///
/// Both fields are always within bounds; the only way to get an `Amount` is
/// through [`Amount::new`] or [`Amount::from_decimal`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Amount {
    whole_dollars: u64,
    cents: u8,
}

impl Amount {
    pub fn new(whole_dollars: i64, cents: i64) -> Result<Amount, AmountError> {
        if whole_dollars < 0 {
            return Err(AmountError::NegativeAmount {
                value: BigDecimal::from(whole_dollars),
            });
        }
        if cents < 0 {
            return Err(AmountError::NegativeAmount {
                value: BigDecimal::from(cents) / BigDecimal::from(100),
            });
        }
        if cents >= 100 {
            return Err(AmountError::InvalidCents { cents });
        }
        let whole = whole_dollars.unsigned_abs();
        if whole >= MAX_DOLLARS_EXCLUSIVE {
            return Err(too_large(BigDecimal::from(whole)));
        }

        Ok(Amount {
            whole_dollars: whole,
            cents: cents as u8,
        })
    }

    /// Rounds the exact value to the nearest cent, half-up, then validates
    /// the split parts.
    pub fn from_decimal(amount: &BigDecimal) -> Result<Amount, AmountError> {
        if amount.is_negative() {
            return Err(AmountError::NegativeAmount {
                value: amount.clone(),
            });
        }
        if amount.is_zero() {
            return Ok(Amount::default());
        }

        // The value lies in [10^(magnitude - 1), 10^magnitude). Settling the
        // extremes here keeps huge exponents away from the rescaling below.
        let (_, scale) = amount.as_bigint_and_exponent();
        let magnitude = i128::from(amount.digits()) - i128::from(scale);
        if magnitude > 15 {
            return Err(too_large(amount.clone()));
        }
        if magnitude < -2 {
            return Ok(Amount::default());
        }
        if *amount >= BigDecimal::from(MAX_DOLLARS_EXCLUSIVE) {
            return Err(too_large(amount.clone()));
        }

        let total_cents = (amount * BigDecimal::from(100))
            .with_scale_round(0, RoundingMode::HalfUp)
            .to_i64()
            .ok_or_else(|| too_large(amount.clone()))?;
        debug!(%amount, total_cents, "normalized decimal amount");

        // 999999999999999.995 rounds up to a full quadrillion and is caught here
        Amount::new(total_cents / 100, total_cents % 100)
    }

    pub fn whole_dollars(&self) -> u64 {
        self.whole_dollars
    }

    pub fn cents(&self) -> u8 {
        self.cents
    }
}

impl TryFrom<&BigDecimal> for Amount {
    type Error = AmountError;

    fn try_from(amount: &BigDecimal) -> Result<Self, Self::Error> {
        Amount::from_decimal(amount)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}.{1:02}", self.whole_dollars, self.cents)
    }
}

fn too_large(value: BigDecimal) -> AmountError {
    AmountError::AmountTooLarge {
        value,
        limit: BigDecimal::from(MAX_DOLLARS_EXCLUSIVE),
    }
}
