pub mod driver;
pub mod dto;
pub mod error;
pub mod logging;
pub mod model;
pub mod words;

pub use error::{AmountError, SettingsError};
pub use model::Amount;
pub use words::{convert, convert_decimal};
