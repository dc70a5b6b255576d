//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::handlers::{
    owner_handler, profile_handler, property_handler, settings_handler, testimonial_handler,
    upload_handler,
};
use crate::domain::{
    NewOwner, NewProperty, NewTestimonial, Owner, OwnerChanges, PhotoSlot, Profile, Property,
    PropertyChanges, PropertyStatus, Role, SettingsInput, SiteSettings, Testimonial,
    TestimonialChanges, UploadedPhoto,
};
use crate::types::MessageResponse;

/// OpenAPI documentation for the listings API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Realty API",
        version = "0.1.0",
        description = "Property listings, owner bios, site settings and photo uploads for a real-estate site"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        profile_handler::get_current_profile,
        property_handler::list_properties,
        property_handler::get_property,
        property_handler::create_property,
        property_handler::update_property,
        property_handler::delete_property,
        owner_handler::list_owners,
        owner_handler::create_owner,
        owner_handler::update_owner,
        owner_handler::delete_owner,
        settings_handler::get_settings,
        settings_handler::save_settings,
        testimonial_handler::list_testimonials,
        testimonial_handler::create_testimonial,
        testimonial_handler::update_testimonial,
        testimonial_handler::delete_testimonial,
        testimonial_handler::toggle_testimonial,
        upload_handler::upload_photo,
    ),
    components(
        schemas(
            // Domain types
            Role,
            Profile,
            PropertyStatus,
            PhotoSlot,
            Property,
            NewProperty,
            PropertyChanges,
            Owner,
            NewOwner,
            OwnerChanges,
            SiteSettings,
            SettingsInput,
            Testimonial,
            NewTestimonial,
            TestimonialChanges,
            UploadedPhoto,
            MessageResponse,
            // Response envelopes
            profile_handler::ProfileResponse,
            property_handler::PropertiesResponse,
            property_handler::PropertyResponse,
            owner_handler::OwnersResponse,
            owner_handler::OwnerResponse,
            testimonial_handler::TestimonialsResponse,
            testimonial_handler::TestimonialResponse,
            upload_handler::UploadRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Current session"),
        (name = "Properties", description = "Property listings"),
        (name = "Owners", description = "Owner bios, at most three active"),
        (name = "Settings", description = "Company contact details"),
        (name = "Testimonials", description = "Client testimonials"),
        (name = "Uploads", description = "Listing photos")
    )
)]
pub struct ApiDoc;

/// Security scheme modifier for JWT Bearer authentication
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Supabase access token of the signed-in user"))
                        .build(),
                ),
            );
        }
    }
}
