//! HTTP request handlers.

pub mod owner_handler;
pub mod profile_handler;
pub mod property_handler;
pub mod settings_handler;
pub mod testimonial_handler;
pub mod upload_handler;

pub use owner_handler::owner_routes;
pub use profile_handler::profile_routes;
pub use property_handler::property_routes;
pub use settings_handler::settings_routes;
pub use testimonial_handler::testimonial_routes;
pub use upload_handler::upload_routes;
