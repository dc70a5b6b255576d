//! Shared types used across handlers and domain inputs.

mod query;
mod response;

pub use query::blank_as_none;
pub use response::MessageResponse;
