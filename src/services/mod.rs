//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain rules and repositories. They depend on
//! repository traits, never on SeaORM directly.

pub mod container;
mod owner_service;
mod profile_service;
mod property_service;
mod session_service;
mod settings_service;
mod testimonial_service;
mod upload_service;

// Service Container
pub use container::{Backends, Services};

// Service traits and implementations
pub use owner_service::{OwnerRoster, OwnerService};
pub use profile_service::{ProfileDirectory, ProfileService};
pub use property_service::{PropertyCatalog, PropertyService};
pub use session_service::{Claims, JwtSessions, Session, SessionService};
pub use settings_service::{SettingsService, SiteSettingsManager};
pub use testimonial_service::{TestimonialBoard, TestimonialService};
pub use upload_service::{PhotoUploader, UploadService};

#[cfg(any(test, feature = "test-utils"))]
pub use owner_service::MockOwnerService;
#[cfg(any(test, feature = "test-utils"))]
pub use profile_service::MockProfileService;
#[cfg(any(test, feature = "test-utils"))]
pub use property_service::MockPropertyService;
#[cfg(any(test, feature = "test-utils"))]
pub use session_service::MockSessionService;
#[cfg(any(test, feature = "test-utils"))]
pub use settings_service::MockSettingsService;
#[cfg(any(test, feature = "test-utils"))]
pub use testimonial_service::MockTestimonialService;
#[cfg(any(test, feature = "test-utils"))]
pub use upload_service::MockUploadService;
