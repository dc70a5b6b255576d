//! Singleton site settings: owner and company contact details.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// The single settings row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct SiteSettings {
    pub company_name: Option<String>,
    pub owner_name: Option<String>,
    /// Broker license number
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub instagram_url: Option<String>,
    pub facebook_url: Option<String>,
    pub about: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Settings write request. The whole row is replaced by this payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct SettingsInput {
    pub company_name: Option<String>,
    pub owner_name: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "contact@example.com")]
    pub email: Option<String>,
    pub address: Option<String>,
    #[validate(url(message = "instagram_url must be a valid URL"))]
    pub instagram_url: Option<String>,
    #[validate(url(message = "facebook_url must be a valid URL"))]
    pub facebook_url: Option<String>,
    pub about: Option<String>,
}

impl SiteSettings {
    /// Contact fields of this row, as they would be written
    pub fn to_input(&self) -> SettingsInput {
        SettingsInput {
            company_name: self.company_name.clone(),
            owner_name: self.owner_name.clone(),
            license_number: self.license_number.clone(),
            phone: self.phone.clone(),
            whatsapp: self.whatsapp.clone(),
            email: self.email.clone(),
            address: self.address.clone(),
            instagram_url: self.instagram_url.clone(),
            facebook_url: self.facebook_url.clone(),
            about: self.about.clone(),
        }
    }
}
