//! Testimonial service.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{NewTestimonial, Testimonial, TestimonialChanges, TestimonialFilter};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::TestimonialRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Testimonial service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TestimonialService: Send + Sync {
    async fn list(&self, filter: TestimonialFilter) -> AppResult<Vec<Testimonial>>;

    async fn create(&self, input: NewTestimonial) -> AppResult<Testimonial>;

    async fn update(&self, id: Uuid, changes: TestimonialChanges) -> AppResult<Testimonial>;

    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Flip the active flag
    async fn toggle(&self, id: Uuid) -> AppResult<Testimonial>;
}

/// Concrete implementation of TestimonialService
pub struct TestimonialBoard {
    testimonials: Arc<dyn TestimonialRepository>,
}

impl TestimonialBoard {
    pub fn new(testimonials: Arc<dyn TestimonialRepository>) -> Self {
        Self { testimonials }
    }
}

#[async_trait]
impl TestimonialService for TestimonialBoard {
    async fn list(&self, filter: TestimonialFilter) -> AppResult<Vec<Testimonial>> {
        self.testimonials.list(filter.active).await
    }

    async fn create(&self, input: NewTestimonial) -> AppResult<Testimonial> {
        self.testimonials.create(input).await
    }

    async fn update(&self, id: Uuid, changes: TestimonialChanges) -> AppResult<Testimonial> {
        if changes.is_empty() {
            return Err(AppError::validation("No fields to update"));
        }
        self.testimonials.update(id, changes).await
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.testimonials.delete(id).await
    }

    async fn toggle(&self, id: Uuid) -> AppResult<Testimonial> {
        let current = self
            .testimonials
            .find_by_id(id)
            .await?
            .ok_or_not_found("Testimonial")?;

        let changes = TestimonialChanges {
            is_active: Some(!current.is_active),
            ..Default::default()
        };
        self.testimonials.update(id, changes).await
    }
}
