//! Owner/team bio shown on the public site.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::property::not_blank;
use crate::errors::{AppError, AppResult};

/// Owner record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Owner {
    pub id: Uuid,
    #[schema(example = "Maria Silva")]
    pub name: String,
    /// Job title shown under the name
    #[schema(example = "Founder & broker")]
    pub role: Option<String>,
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
}

/// Owner creation request
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct NewOwner {
    #[validate(custom(function = "not_blank", message = "Name is required"))]
    pub name: String,
    pub role: Option<String>,
    pub bio: Option<String>,
    #[validate(url(message = "photo_url must be a valid URL"))]
    pub photo_url: Option<String>,
    /// Defaults to true
    pub is_active: Option<bool>,
    /// Defaults to 0
    pub display_order: Option<i32>,
}

/// Owner update request; only provided fields change
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct OwnerChanges {
    #[validate(custom(function = "not_blank", message = "Name cannot be empty"))]
    pub name: Option<String>,
    pub role: Option<String>,
    pub bio: Option<String>,
    #[validate(url(message = "photo_url must be a valid URL"))]
    pub photo_url: Option<String>,
    pub is_active: Option<bool>,
    pub display_order: Option<i32>,
}

impl OwnerChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.role.is_none()
            && self.bio.is_none()
            && self.photo_url.is_none()
            && self.is_active.is_none()
            && self.display_order.is_none()
    }
}

/// Admit one more active owner only while fewer than `limit` are active.
pub fn ensure_capacity(active: u64, limit: u64) -> AppResult<()> {
    if active >= limit {
        return Err(AppError::CapacityExceeded { limit });
    }
    Ok(())
}
