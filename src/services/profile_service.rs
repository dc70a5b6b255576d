//! Profile service - Resolves the application role of a caller.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{Profile, Role};
use crate::errors::{AppResult, OptionExt};
use crate::infra::ProfileRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Profile service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ProfileService: Send + Sync {
    /// Profile of the caller; NotFound when no row exists
    async fn current(&self, user_id: Uuid) -> AppResult<Profile>;

    /// Role of the caller; callers without a profile are viewers
    async fn resolve_role(&self, user_id: Uuid) -> AppResult<Role>;
}

/// Concrete implementation of ProfileService
pub struct ProfileDirectory {
    profiles: Arc<dyn ProfileRepository>,
}

impl ProfileDirectory {
    pub fn new(profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileService for ProfileDirectory {
    async fn current(&self, user_id: Uuid) -> AppResult<Profile> {
        self.profiles
            .find_by_id(user_id)
            .await?
            .ok_or_not_found("Profile")
    }

    async fn resolve_role(&self, user_id: Uuid) -> AppResult<Role> {
        let role = match self.profiles.find_by_id(user_id).await? {
            Some(profile) => profile.role,
            None => {
                tracing::debug!(%user_id, "No profile row, treating caller as viewer");
                Role::Viewer
            }
        };
        Ok(role)
    }
}
