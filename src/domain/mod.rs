//! Domain layer - Listing-site entities and business rules
//!
//! Plain data types for the five backend tables plus the rules that do not
//! need I/O: role permissions, owner capacity, upload checks.

pub mod owner;
pub mod profile;
pub mod property;
pub mod role;
pub mod settings;
pub mod testimonial;
pub mod upload;

pub use owner::{ensure_capacity, NewOwner, Owner, OwnerChanges};
pub use profile::Profile;
pub use property::{NewProperty, PhotoSlot, Property, PropertyChanges, PropertyFilter, PropertyStatus};
pub use role::{Permission, Role};
pub use settings::{SettingsInput, SiteSettings};
pub use testimonial::{NewTestimonial, Testimonial, TestimonialChanges, TestimonialFilter};
pub use upload::{storage_key, ImageType, PhotoUpload, UploadForm, UploadedFile, UploadedPhoto};
