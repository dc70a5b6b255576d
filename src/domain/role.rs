//! Caller roles and the permissions they grant.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::config::{ROLE_ADMIN, ROLE_PHOTOGRAPHER, ROLE_VIEWER};

/// Role stored on a user's profile row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Photographer,
    #[default]
    Viewer,
}

/// Write capabilities checked by protected endpoints. Reads need none.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create and update properties
    EditListings,
    /// Delete properties
    DeleteListings,
    /// Upload listing photos
    UploadPhotos,
    /// Create, update and delete owners
    ManageOwners,
    /// Write the site settings row
    ManageSettings,
    /// Create, update, toggle and delete testimonials
    ManageTestimonials,
}

impl Role {
    /// Whether this role grants the given permission.
    pub fn permits(self, permission: Permission) -> bool {
        match self {
            Role::Admin => true,
            Role::Photographer => matches!(
                permission,
                Permission::EditListings | Permission::UploadPhotos
            ),
            Role::Viewer => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => ROLE_ADMIN,
            Role::Photographer => ROLE_PHOTOGRAPHER,
            Role::Viewer => ROLE_VIEWER,
        }
    }
}

/// Unknown values fall back to the least privileged role.
impl From<&str> for Role {
    fn from(s: &str) -> Self {
        match s {
            ROLE_ADMIN => Role::Admin,
            ROLE_PHOTOGRAPHER => Role::Photographer,
            _ => Role::Viewer,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
