//! Testimonial repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::entities::testimonial::{self, ActiveModel, Entity as TestimonialEntity};
use crate::domain::{NewTestimonial, Testimonial, TestimonialChanges};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Testimonial repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TestimonialRepository: Send + Sync {
    /// Testimonials newest first, optionally restricted by active flag
    async fn list(&self, active: Option<bool>) -> AppResult<Vec<Testimonial>>;

    /// Find testimonial by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>>;

    /// Insert a new testimonial
    async fn create(&self, input: NewTestimonial) -> AppResult<Testimonial>;

    /// Apply the provided fields to an existing testimonial
    async fn update(&self, id: Uuid, changes: TestimonialChanges) -> AppResult<Testimonial>;

    /// Delete testimonial by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TestimonialRepository
pub struct TestimonialStore {
    db: Arc<DatabaseConnection>,
}

impl TestimonialStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TestimonialRepository for TestimonialStore {
    async fn list(&self, active: Option<bool>) -> AppResult<Vec<Testimonial>> {
        let mut query = TestimonialEntity::find();
        if let Some(active) = active {
            query = query.filter(testimonial::Column::IsActive.eq(active));
        }

        let models = query
            .order_by_desc(testimonial::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Testimonial::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Testimonial>> {
        let result = TestimonialEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Testimonial::from))
    }

    async fn create(&self, input: NewTestimonial) -> AppResult<Testimonial> {
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            author_name: Set(input.author_name.trim().to_string()),
            content: Set(input.content.trim().to_string()),
            rating: Set(input.rating),
            is_active: Set(input.is_active.unwrap_or(true)),
            created_at: Set(Utc::now()),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Testimonial::from(model))
    }

    async fn update(&self, id: Uuid, changes: TestimonialChanges) -> AppResult<Testimonial> {
        let mut active: ActiveModel = TestimonialEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found("Testimonial")?
            .into();

        if let Some(author) = changes.author_name {
            active.author_name = Set(author.trim().to_string());
        }
        if let Some(content) = changes.content {
            active.content = Set(content.trim().to_string());
        }
        if let Some(rating) = changes.rating {
            active.rating = Set(Some(rating));
        }
        if let Some(is_active) = changes.is_active {
            active.is_active = Set(is_active);
        }

        let model = active.update(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Testimonial::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = TestimonialEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Testimonial"));
        }

        Ok(())
    }
}
