//! Repository layer - Data access abstraction
//!
//! One trait per table, each with a SeaORM-backed `*Store` implementation.
//! Services depend on the traits only.

pub(crate) mod entities;
mod owner_repository;
mod profile_repository;
mod property_repository;
mod settings_repository;
mod testimonial_repository;

pub use owner_repository::{OwnerRepository, OwnerStore};
pub use profile_repository::{ProfileRepository, ProfileStore};
pub use property_repository::{PropertyRepository, PropertyStore};
pub use settings_repository::{SettingsRepository, SettingsStore};
pub use testimonial_repository::{TestimonialRepository, TestimonialStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use owner_repository::MockOwnerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_repository::MockProfileRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use property_repository::MockPropertyRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use settings_repository::MockSettingsRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use testimonial_repository::MockTestimonialRepository;
