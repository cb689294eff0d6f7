use bigdecimal::BigDecimal;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("amount cannot be negative, got {value}")]
    NegativeAmount { value: BigDecimal },

    #[error("cents must be between 0 and 99, got {cents}")]
    InvalidCents { cents: i64 },

    #[error("amount must be less than {limit}, got {value}")]
    AmountTooLarge { value: BigDecimal, limit: BigDecimal },

    #[error("unable to read '{input}' as an amount")]
    MalformedInput { input: String },
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed reading settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
