//! Property listing entity, its inputs and the listing filter.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::config::{DEFAULT_PROPERTY_STATUS, PHOTO_SLOT_2, PHOTO_SLOT_3, PHOTO_SLOT_MAIN};
use crate::types::blank_as_none;

/// Listing status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum PropertyStatus {
    #[default]
    Available,
    Reserved,
    Sold,
    Rented,
}

impl PropertyStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            PropertyStatus::Available => DEFAULT_PROPERTY_STATUS,
            PropertyStatus::Reserved => "reserved",
            PropertyStatus::Sold => "sold",
            PropertyStatus::Rented => "rented",
        }
    }
}

impl FromStr for PropertyStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(PropertyStatus::Available),
            "reserved" => Ok(PropertyStatus::Reserved),
            "sold" => Ok(PropertyStatus::Sold),
            "rented" => Ok(PropertyStatus::Rented),
            other => Err(format!("unknown property status '{}'", other)),
        }
    }
}

impl std::fmt::Display for PropertyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Photo slot on a property record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum PhotoSlot {
    #[serde(rename = "main")]
    Main,
    #[serde(rename = "photo_2")]
    Photo2,
    #[serde(rename = "photo_3")]
    Photo3,
}

impl PhotoSlot {
    pub fn as_str(self) -> &'static str {
        match self {
            PhotoSlot::Main => PHOTO_SLOT_MAIN,
            PhotoSlot::Photo2 => PHOTO_SLOT_2,
            PhotoSlot::Photo3 => PHOTO_SLOT_3,
        }
    }
}

impl FromStr for PhotoSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            PHOTO_SLOT_MAIN => Ok(PhotoSlot::Main),
            PHOTO_SLOT_2 => Ok(PhotoSlot::Photo2),
            PHOTO_SLOT_3 => Ok(PhotoSlot::Photo3),
            other => Err(format!(
                "photoType must be one of {}, {}, {} (got '{}')",
                PHOTO_SLOT_MAIN, PHOTO_SLOT_2, PHOTO_SLOT_3, other
            )),
        }
    }
}

impl std::fmt::Display for PhotoSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Property listing
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Property {
    pub id: Uuid,
    #[schema(example = "Two-bedroom apartment near the river")]
    pub title: String,
    pub description: Option<String>,
    pub status: PropertyStatus,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    #[schema(example = 350000.0)]
    pub price: Option<f64>,
    pub area_m2: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub main_photo_url: Option<String>,
    pub photo_2_url: Option<String>,
    pub photo_3_url: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Property {
    /// URL currently stored in a photo slot
    pub fn photo_url(&self, slot: PhotoSlot) -> Option<&str> {
        match slot {
            PhotoSlot::Main => self.main_photo_url.as_deref(),
            PhotoSlot::Photo2 => self.photo_2_url.as_deref(),
            PhotoSlot::Photo3 => self.photo_3_url.as_deref(),
        }
    }
}

/// Reject strings that are empty once trimmed.
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Property creation request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct NewProperty {
    #[validate(custom(function = "not_blank", message = "Title is required"))]
    #[schema(example = "Two-bedroom apartment near the river")]
    pub title: String,
    pub description: Option<String>,
    /// Defaults to `available`
    pub status: Option<PropertyStatus>,
    #[validate(range(min = 0, message = "Bedrooms cannot be negative"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, message = "Bathrooms cannot be negative"))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "Area cannot be negative"))]
    pub area_m2: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
}

/// Property update request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct PropertyChanges {
    #[validate(custom(function = "not_blank", message = "Title cannot be empty"))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<PropertyStatus>,
    #[validate(range(min = 0, message = "Bedrooms cannot be negative"))]
    pub bedrooms: Option<i32>,
    #[validate(range(min = 0, message = "Bathrooms cannot be negative"))]
    pub bathrooms: Option<i32>,
    #[validate(range(min = 0.0, message = "Price cannot be negative"))]
    pub price: Option<f64>,
    #[validate(range(min = 0.0, message = "Area cannot be negative"))]
    pub area_m2: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
}

impl PropertyChanges {
    /// True when the request carries no field to update
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.bedrooms.is_none()
            && self.bathrooms.is_none()
            && self.price.is_none()
            && self.area_m2.is_none()
            && self.address.is_none()
            && self.city.is_none()
            && self.neighborhood.is_none()
    }
}

/// Listing filter. Every present field narrows the result (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct PropertyFilter {
    /// Exact status match
    #[serde(default, deserialize_with = "blank_as_none")]
    pub status: Option<PropertyStatus>,
    /// Minimum bedrooms (inclusive)
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(range(min = 0, message = "bedrooms cannot be negative"))]
    pub bedrooms: Option<i32>,
    /// Minimum bathrooms (inclusive)
    #[serde(default, deserialize_with = "blank_as_none")]
    #[validate(range(min = 0, message = "bathrooms cannot be negative"))]
    pub bathrooms: Option<i32>,
    /// Maximum price (inclusive)
    #[serde(default, deserialize_with = "blank_as_none")]
    pub max_price: Option<f64>,
    /// Case-insensitive substring of the city
    #[serde(default, deserialize_with = "blank_as_none")]
    pub city: Option<String>,
    /// Case-insensitive substring of the neighborhood
    #[serde(default, deserialize_with = "blank_as_none")]
    pub neighborhood: Option<String>,
}
