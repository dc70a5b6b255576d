//! Client testimonials.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::property::not_blank;
use crate::types::blank_as_none;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Testimonial {
    pub id: Uuid,
    #[schema(example = "João Pereira")]
    pub author_name: String,
    pub content: String,
    /// 1 to 5 stars
    pub rating: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct NewTestimonial {
    #[validate(custom(function = "not_blank", message = "Author name is required"))]
    pub author_name: String,
    #[validate(custom(function = "not_blank", message = "Content is required"))]
    pub content: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    /// Defaults to true
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct TestimonialChanges {
    #[validate(custom(function = "not_blank", message = "Author name cannot be empty"))]
    pub author_name: Option<String>,
    #[validate(custom(function = "not_blank", message = "Content cannot be empty"))]
    pub content: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i32>,
    pub is_active: Option<bool>,
}

impl TestimonialChanges {
    pub fn is_empty(&self) -> bool {
        self.author_name.is_none()
            && self.content.is_none()
            && self.rating.is_none()
            && self.is_active.is_none()
    }
}

/// `?active=true` lists only published testimonials
#[derive(Debug, Clone, Default, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct TestimonialFilter {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub active: Option<bool>,
}
