//! Owner database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Owner;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "owners")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub role: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub bio: Option<String>,
    pub photo_url: Option<String>,
    pub is_active: bool,
    pub display_order: i32,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Owner {
    fn from(model: Model) -> Self {
        Owner {
            id: model.id,
            name: model.name,
            role: model.role,
            bio: model.bio,
            photo_url: model.photo_url,
            is_active: model.is_active,
            display_order: model.display_order,
            created_at: model.created_at,
        }
    }
}
