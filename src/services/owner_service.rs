//! Owner service - Owner bios with a cap on simultaneously active owners.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MAX_ACTIVE_OWNERS;
use crate::domain::{NewOwner, Owner, OwnerChanges};
use crate::errors::{AppError, AppResult};
use crate::infra::OwnerRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerService: Send + Sync {
    /// Active owners in display order
    async fn list_active(&self) -> AppResult<Vec<Owner>>;

    /// Create an owner; fails once the active limit is reached
    async fn create(&self, input: NewOwner) -> AppResult<Owner>;

    /// Partial update; reactivation is subject to the active limit
    async fn update(&self, id: Uuid, changes: OwnerChanges) -> AppResult<Owner>;

    /// Remove an owner
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of OwnerService
pub struct OwnerRoster {
    owners: Arc<dyn OwnerRepository>,
    max_active: u64,
}

impl OwnerRoster {
    pub fn new(owners: Arc<dyn OwnerRepository>) -> Self {
        Self {
            owners,
            max_active: MAX_ACTIVE_OWNERS,
        }
    }
}

#[async_trait]
impl OwnerService for OwnerRoster {
    async fn list_active(&self) -> AppResult<Vec<Owner>> {
        self.owners.list_active().await
    }

    async fn create(&self, input: NewOwner) -> AppResult<Owner> {
        let owner = self
            .owners
            .create_within_capacity(input, self.max_active)
            .await
            .map_err(|e| {
                if let AppError::CapacityExceeded { limit } = e {
                    tracing::info!(limit, "Owner creation rejected, active limit reached");
                }
                e
            })?;

        tracing::info!(owner_id = %owner.id, "Owner created");
        Ok(owner)
    }

    async fn update(&self, id: Uuid, changes: OwnerChanges) -> AppResult<Owner> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let owner = self
            .owners
            .update_within_capacity(id, changes, self.max_active)
            .await?;
        tracing::info!(owner_id = %id, "Owner updated");
        Ok(owner)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.owners.delete(id).await?;
        tracing::info!(owner_id = %id, "Owner deleted");
        Ok(())
    }
}
