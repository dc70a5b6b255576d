//! Profile of an authenticated user.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::Role;

/// One row per authenticated user; `id` is the auth user id.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub role: Role,
    pub full_name: Option<String>,
}
