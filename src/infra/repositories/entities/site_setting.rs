//! Site settings database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::SiteSettings;

/// Holds at most one row, keyed by `SETTINGS_ROW_ID`
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub company_name: Option<String>,
    pub owner_name: Option<String>,
    pub license_number: Option<String>,
    pub phone: Option<String>,
    pub whatsapp: Option<String>,
    pub email: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub address: Option<String>,
    pub instagram_url: Option<String>,
    pub facebook_url: Option<String>,
    #[sea_orm(column_type = "Text", nullable)]
    pub about: Option<String>,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for SiteSettings {
    fn from(model: Model) -> Self {
        SiteSettings {
            company_name: model.company_name,
            owner_name: model.owner_name,
            license_number: model.license_number,
            phone: model.phone,
            whatsapp: model.whatsapp,
            email: model.email,
            address: model.address,
            instagram_url: model.instagram_url,
            facebook_url: model.facebook_url,
            about: model.about,
            updated_at: model.updated_at,
        }
    }
}
