//! Configuration: environment-driven settings plus the business rules
//! (owner capacity, photo slots, upload limits) kept as named constants.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
