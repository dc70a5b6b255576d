//! Settings service - Read and replace the singleton site settings.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{SettingsInput, SiteSettings};
use crate::errors::AppResult;
use crate::infra::SettingsRepository;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Settings service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Current settings, `None` until the first write
    async fn get(&self) -> AppResult<Option<SiteSettings>>;

    /// Create or overwrite the settings row
    async fn save(&self, input: SettingsInput) -> AppResult<SiteSettings>;
}

/// Concrete implementation of SettingsService
pub struct SiteSettingsManager {
    settings: Arc<dyn SettingsRepository>,
}

impl SiteSettingsManager {
    pub fn new(settings: Arc<dyn SettingsRepository>) -> Self {
        Self { settings }
    }
}

#[async_trait]
impl SettingsService for SiteSettingsManager {
    async fn get(&self) -> AppResult<Option<SiteSettings>> {
        self.settings.get().await
    }

    async fn save(&self, input: SettingsInput) -> AppResult<SiteSettings> {
        let saved = self.settings.upsert(input).await?;
        tracing::info!("Site settings saved");
        Ok(saved)
    }
}
