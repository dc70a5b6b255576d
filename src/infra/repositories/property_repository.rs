//! Property repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, Func, SimpleExpr},
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    Select, Set,
};
use uuid::Uuid;

use super::entities::property::{self, ActiveModel, Entity as PropertyEntity};
use crate::domain::{NewProperty, PhotoSlot, Property, PropertyChanges, PropertyFilter};
use crate::errors::{AppError, AppResult, OptionExt};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Property repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// List properties matching every present filter, newest first
    async fn list(&self, filter: &PropertyFilter) -> AppResult<Vec<Property>>;

    /// Find property by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>>;

    /// Insert a new property
    async fn create(&self, input: NewProperty, created_by: Option<Uuid>) -> AppResult<Property>;

    /// Apply the provided fields to an existing property
    async fn update(&self, id: Uuid, changes: PropertyChanges) -> AppResult<Property>;

    /// Delete property by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;

    /// Store a photo URL in one of the property's photo columns
    async fn set_photo_url(&self, id: Uuid, slot: PhotoSlot, url: String) -> AppResult<Property>;
}

/// Concrete implementation of PropertyRepository
pub struct PropertyStore {
    db: Arc<DatabaseConnection>,
}

impl PropertyStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_model(&self, id: Uuid) -> AppResult<property::Model> {
        PropertyEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await?
            .ok_or_not_found("Property")
    }
}

/// Build the listing query for a filter.
pub(crate) fn listing_query(filter: &PropertyFilter) -> Select<PropertyEntity> {
    let mut query = PropertyEntity::find();

    if let Some(status) = filter.status {
        query = query.filter(property::Column::Status.eq(status.as_str()));
    }
    if let Some(min) = filter.bedrooms {
        query = query.filter(property::Column::Bedrooms.gte(min));
    }
    if let Some(min) = filter.bathrooms {
        query = query.filter(property::Column::Bathrooms.gte(min));
    }
    if let Some(max) = filter.max_price {
        query = query.filter(property::Column::Price.lte(max));
    }
    if let Some(city) = filter.city.as_deref() {
        query = query.filter(contains_ignore_case(property::Column::City, city));
    }
    if let Some(neighborhood) = filter.neighborhood.as_deref() {
        query = query.filter(contains_ignore_case(property::Column::Neighborhood, neighborhood));
    }

    query.order_by_desc(property::Column::CreatedAt)
}

/// `LOWER(column) LIKE '%needle%'`
fn contains_ignore_case(column: property::Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column)))
        .like(format!("%{}%", escape_like(&needle.to_lowercase())))
}

/// Escape LIKE wildcards so user input matches literally.
fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[async_trait]
impl PropertyRepository for PropertyStore {
    async fn list(&self, filter: &PropertyFilter) -> AppResult<Vec<Property>> {
        let models = listing_query(filter)
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Property::from).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Property>> {
        let result = PropertyEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Property::from))
    }

    async fn create(&self, input: NewProperty, created_by: Option<Uuid>) -> AppResult<Property> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(input.title.trim().to_string()),
            description: Set(input.description),
            status: Set(input.status.unwrap_or_default().as_str().to_string()),
            bedrooms: Set(input.bedrooms),
            bathrooms: Set(input.bathrooms),
            price: Set(input.price),
            area_m2: Set(input.area_m2),
            address: Set(input.address),
            city: Set(input.city),
            neighborhood: Set(input.neighborhood),
            main_photo_url: Set(None),
            photo_2_url: Set(None),
            photo_3_url: Set(None),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let model = active_model.insert(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Property::from(model))
    }

    async fn update(&self, id: Uuid, changes: PropertyChanges) -> AppResult<Property> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        if let Some(title) = changes.title {
            active.title = Set(title.trim().to_string());
        }
        if let Some(description) = changes.description {
            active.description = Set(Some(description));
        }
        if let Some(status) = changes.status {
            active.status = Set(status.as_str().to_string());
        }
        if let Some(bedrooms) = changes.bedrooms {
            active.bedrooms = Set(Some(bedrooms));
        }
        if let Some(bathrooms) = changes.bathrooms {
            active.bathrooms = Set(Some(bathrooms));
        }
        if let Some(price) = changes.price {
            active.price = Set(Some(price));
        }
        if let Some(area) = changes.area_m2 {
            active.area_m2 = Set(Some(area));
        }
        if let Some(address) = changes.address {
            active.address = Set(Some(address));
        }
        if let Some(city) = changes.city {
            active.city = Set(Some(city));
        }
        if let Some(neighborhood) = changes.neighborhood {
            active.neighborhood = Set(Some(neighborhood));
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Property::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = PropertyEntity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Property"));
        }

        Ok(())
    }

    async fn set_photo_url(&self, id: Uuid, slot: PhotoSlot, url: String) -> AppResult<Property> {
        let mut active: ActiveModel = self.find_model(id).await?.into();

        match slot {
            PhotoSlot::Main => active.main_photo_url = Set(Some(url)),
            PhotoSlot::Photo2 => active.photo_2_url = Set(Some(url)),
            PhotoSlot::Photo3 => active.photo_3_url = Set(Some(url)),
        }
        active.updated_at = Set(Utc::now());

        let model = active.update(self.db.as_ref()).await.map_err(AppError::from)?;
        Ok(Property::from(model))
    }
}
