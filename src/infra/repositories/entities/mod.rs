//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod owner;
pub mod profile;
pub mod property;
pub mod site_setting;
pub mod testimonial;
