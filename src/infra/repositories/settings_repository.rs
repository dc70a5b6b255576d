//! Site settings repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};

use super::entities::site_setting::{self, ActiveModel, Entity as SettingsEntity};
use crate::config::SETTINGS_ROW_ID;
use crate::domain::{SettingsInput, SiteSettings};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Settings repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// The settings row, if one was ever written
    async fn get(&self) -> AppResult<Option<SiteSettings>>;

    /// Create the row or overwrite it, in a single statement
    async fn upsert(&self, input: SettingsInput) -> AppResult<SiteSettings>;
}

/// Concrete implementation of SettingsRepository
pub struct SettingsStore {
    db: Arc<DatabaseConnection>,
}

impl SettingsStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SettingsRepository for SettingsStore {
    async fn get(&self) -> AppResult<Option<SiteSettings>> {
        let result = SettingsEntity::find_by_id(SETTINGS_ROW_ID)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(SiteSettings::from))
    }

    async fn upsert(&self, input: SettingsInput) -> AppResult<SiteSettings> {
        let row = ActiveModel {
            id: Set(SETTINGS_ROW_ID),
            company_name: Set(input.company_name),
            owner_name: Set(input.owner_name),
            license_number: Set(input.license_number),
            phone: Set(input.phone),
            whatsapp: Set(input.whatsapp),
            email: Set(input.email),
            address: Set(input.address),
            instagram_url: Set(input.instagram_url),
            facebook_url: Set(input.facebook_url),
            about: Set(input.about),
            updated_at: Set(Utc::now()),
        };

        let on_conflict = OnConflict::column(site_setting::Column::Id)
            .update_columns([
                site_setting::Column::CompanyName,
                site_setting::Column::OwnerName,
                site_setting::Column::LicenseNumber,
                site_setting::Column::Phone,
                site_setting::Column::Whatsapp,
                site_setting::Column::Email,
                site_setting::Column::Address,
                site_setting::Column::InstagramUrl,
                site_setting::Column::FacebookUrl,
                site_setting::Column::About,
                site_setting::Column::UpdatedAt,
            ])
            .to_owned();

        let model = SettingsEntity::insert(row)
            .on_conflict(on_conflict)
            .exec_with_returning(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(SiteSettings::from(model))
    }
}
