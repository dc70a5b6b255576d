//! Property database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Property;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub status: String,
    pub bedrooms: Option<i32>,
    pub bathrooms: Option<i32>,
    pub price: Option<f64>,
    #[sea_orm(column_name = "area_m2")]
    pub area_m2: Option<f64>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub neighborhood: Option<String>,
    pub main_photo_url: Option<String>,
    #[sea_orm(column_name = "photo_2_url")]
    pub photo_2_url: Option<String>,
    #[sea_orm(column_name = "photo_3_url")]
    pub photo_3_url: Option<String>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Property {
    fn from(model: Model) -> Self {
        Property {
            id: model.id,
            title: model.title,
            description: model.description,
            // Rows written outside this service may carry other labels
            status: model.status.parse().unwrap_or_default(),
            bedrooms: model.bedrooms,
            bathrooms: model.bathrooms,
            price: model.price,
            area_m2: model.area_m2,
            address: model.address,
            city: model.city,
            neighborhood: model.neighborhood,
            main_photo_url: model.main_photo_url,
            photo_2_url: model.photo_2_url,
            photo_3_url: model.photo_3_url,
            created_by: model.created_by,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
