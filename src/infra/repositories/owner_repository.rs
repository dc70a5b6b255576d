//! Owner repository implementation.
//!
//! Writes that can raise the number of active owners run inside a
//! SERIALIZABLE transaction so the count and the write see the same snapshot.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    AccessMode, ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection,
    DatabaseTransaction, EntityTrait, IsolationLevel, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};
use uuid::Uuid;

use super::entities::owner::{self, ActiveModel, Entity as OwnerEntity};
use crate::domain::{ensure_capacity, NewOwner, Owner, OwnerChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Owner repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait OwnerRepository: Send + Sync {
    /// Active owners ordered by display order
    async fn list_active(&self) -> AppResult<Vec<Owner>>;

    /// Find owner by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>>;

    /// Insert an owner unless `limit` owners are already active
    async fn create_within_capacity(&self, input: NewOwner, limit: u64) -> AppResult<Owner>;

    /// Update an owner; activating one is subject to the same limit
    async fn update_within_capacity(
        &self,
        id: Uuid,
        changes: OwnerChanges,
        limit: u64,
    ) -> AppResult<Owner>;

    /// Delete owner by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of OwnerRepository
pub struct OwnerStore {
    db: Arc<DatabaseConnection>,
}

impl OwnerStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn begin_serializable(&self) -> AppResult<DatabaseTransaction> {
        self.db
            .begin_with_config(
                Some(IsolationLevel::Serializable),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)
    }

    /// Commit on success, roll back on error.
    async fn finish<T>(txn: DatabaseTransaction, outcome: AppResult<T>) -> AppResult<T> {
        match outcome {
            Ok(value) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(value)
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

async fn count_active<C: ConnectionTrait>(conn: &C) -> AppResult<u64> {
    OwnerEntity::find()
        .filter(owner::Column::IsActive.eq(true))
        .count(conn)
        .await
        .map_err(AppError::from)
}

async fn insert_checked(txn: &DatabaseTransaction, input: NewOwner, limit: u64) -> AppResult<Owner> {
    ensure_capacity(count_active(txn).await?, limit)?;

    let active_model = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name.trim().to_string()),
        role: Set(input.role),
        bio: Set(input.bio),
        photo_url: Set(input.photo_url),
        is_active: Set(input.is_active.unwrap_or(true)),
        display_order: Set(input.display_order.unwrap_or(0)),
        created_at: Set(Utc::now()),
    };

    let model = active_model.insert(txn).await.map_err(AppError::from)?;
    Ok(Owner::from(model))
}

async fn update_checked(
    txn: &DatabaseTransaction,
    id: Uuid,
    changes: OwnerChanges,
    limit: u64,
) -> AppResult<Owner> {
    let current = OwnerEntity::find_by_id(id)
        .one(txn)
        .await?
        .ok_or_not_found("Owner")?;

    if changes.is_active == Some(true) && !current.is_active {
        ensure_capacity(count_active(txn).await?, limit)?;
    }

    let mut active: ActiveModel = current.into();
    if let Some(name) = changes.name {
        active.name = Set(name.trim().to_string());
    }
    if let Some(role) = changes.role {
        active.role = Set(Some(role));
    }
    if let Some(bio) = changes.bio {
        active.bio = Set(Some(bio));
    }
    if let Some(photo_url) = changes.photo_url {
        active.photo_url = Set(Some(photo_url));
    }
    if let Some(is_active) = changes.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(order) = changes.display_order {
        active.display_order = Set(order);
    }

    let model = active.update(txn).await.map_err(AppError::from)?;
    Ok(Owner::from(model))
}

#[async_trait]
impl OwnerRepository for OwnerStore {
    async fn list_active(&self) -> AppResult<Vec<Owner>> {
        let models = OwnerEntity::find()
            .filter(owner::Column::IsActive.eq(true))
            .order_by_asc(owner::Column::DisplayOrder)
            .order_by_asc(owner::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Owner::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Owner>> {
        let result = OwnerEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Owner::from))
    }

    async fn create_within_capacity(&self, input: NewOwner, limit: u64) -> AppResult<Owner> {
        let txn = self.begin_serializable().await?;
        let outcome = insert_checked(&txn, input, limit).await;
        Self::finish(txn, outcome).await
    }

    async fn update_within_capacity(
        &self,
        id: Uuid,
        changes: OwnerChanges,
        limit: u64,
    ) -> AppResult<Owner> {
        let txn = self.begin_serializable().await?;
        let outcome = update_checked(&txn, id, changes, limit).await;
        Self::finish(txn, outcome).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = OwnerEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Owner"));
        }

        Ok(())
    }
}
