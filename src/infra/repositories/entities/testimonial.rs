//! Testimonial database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Testimonial;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "testimonials")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub author_name: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub rating: Option<i32>,
    pub is_active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Testimonial {
    fn from(model: Model) -> Self {
        Testimonial {
            id: model.id,
            author_name: model.author_name,
            content: model.content,
            rating: model.rating,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
