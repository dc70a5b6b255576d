//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connection, migrations and repositories
//! - Object storage for listing photos

pub mod db;
pub mod repositories;
pub mod storage;

pub use db::{Database, Migrator};
pub use repositories::{
    OwnerRepository, OwnerStore, ProfileRepository, ProfileStore, PropertyRepository,
    PropertyStore, SettingsRepository, SettingsStore, TestimonialRepository, TestimonialStore,
};
pub use storage::{ObjectStorage, SupabaseStorage};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{
    MockOwnerRepository, MockProfileRepository, MockPropertyRepository, MockSettingsRepository,
    MockTestimonialRepository,
};
#[cfg(any(test, feature = "test-utils"))]
pub use storage::MockObjectStorage;
