mod input;
mod settings;

pub use input::parse_amount;
pub use settings::{load_settings, Settings};
