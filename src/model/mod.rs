pub mod amount;

pub use amount::{Amount, MAX_DOLLARS_EXCLUSIVE};
