//! Property service - Listing queries and role-gated property writes.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewProperty, Property, PropertyChanges, PropertyFilter};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::PropertyRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Properties matching the filter, newest first
    async fn list(&self, filter: PropertyFilter) -> AppResult<Vec<Property>>;

    /// Single property
    async fn get(&self, id: Uuid) -> AppResult<Property>;

    /// Create a property on behalf of `created_by`
    async fn create(&self, input: NewProperty, created_by: Uuid) -> AppResult<Property>;

    /// Partial update
    async fn update(&self, id: Uuid, changes: PropertyChanges) -> AppResult<Property>;

    /// Remove a property
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of PropertyService
pub struct PropertyCatalog {
    properties: Arc<dyn PropertyRepository>,
}

impl PropertyCatalog {
    pub fn new(properties: Arc<dyn PropertyRepository>) -> Self {
        Self { properties }
    }
}

#[async_trait]
impl PropertyService for PropertyCatalog {
    async fn list(&self, filter: PropertyFilter) -> AppResult<Vec<Property>> {
        let properties = self.properties.list(&filter).await?;
        tracing::debug!(count = properties.len(), ?filter, "Listed properties");
        Ok(properties)
    }

    async fn get(&self, id: Uuid) -> AppResult<Property> {
        self.properties
            .find_by_id(id)
            .await?
            .ok_or_not_found("Property")
    }

    async fn create(&self, input: NewProperty, created_by: Uuid) -> AppResult<Property> {
        let property = self.properties.create(input, Some(created_by)).await?;
        tracing::info!(property_id = %property.id, %created_by, "Property created");
        Ok(property)
    }

    async fn update(&self, id: Uuid, changes: PropertyChanges) -> AppResult<Property> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }

        let property = self.properties.update(id, changes).await?;
        tracing::info!(property_id = %id, "Property updated");
        Ok(property)
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.properties.delete(id).await?;
        tracing::info!(property_id = %id, "Property deleted");
        Ok(())
    }
}
