//! Object storage for listing photos.
//!
//! Talks to the Supabase Storage REST API with the service-role key.

use async_trait::async_trait;
use serde::Deserialize;

use crate::config::Config;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Object storage abstraction
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Upload bytes under `key`, replacing any existing object
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<()>;

    /// Public URL of the object stored under `key`
    fn public_url(&self, key: &str) -> String;
}

/// Supabase Storage client
pub struct SupabaseStorage {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    service_key: String,
}

/// Error body returned by the storage API
#[derive(Debug, Deserialize)]
struct StorageErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl SupabaseStorage {
    pub fn new(base_url: &str, bucket: &str, service_key: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket: bucket.to_string(),
            service_key: service_key.to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            &config.supabase_url,
            &config.storage_bucket,
            config.service_role_key(),
        )
    }

    fn object_url(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> AppResult<()> {
        let response = self
            .http
            .post(self.object_url(key))
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
            .header("x-upsert", "true")
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| AppError::backend(format!("Storage request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!(key, "Object stored");
            return Ok(());
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<StorageErrorBody>(&text)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .unwrap_or_else(|| format!("Storage upload failed with status {}", status));

        tracing::warn!(key, %status, "Storage upload rejected: {}", message);
        Err(AppError::backend(message))
    }

    fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, key
        )
    }
}
