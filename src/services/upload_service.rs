//! Upload service - Stores listing photos and links them to their property.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::domain::{storage_key, UploadForm, UploadedPhoto};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{ObjectStorage, PropertyRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Upload service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UploadService: Send + Sync {
    /// Check the form, store the image and record its URL on the property
    async fn upload_photo(&self, form: UploadForm) -> AppResult<UploadedPhoto>;
}

/// Concrete implementation of UploadService
pub struct PhotoUploader {
    storage: Arc<dyn ObjectStorage>,
    properties: Arc<dyn PropertyRepository>,
}

impl PhotoUploader {
    pub fn new(storage: Arc<dyn ObjectStorage>, properties: Arc<dyn PropertyRepository>) -> Self {
        Self {
            storage,
            properties,
        }
    }
}

/// Database failures during an upload surface as backend errors.
fn backend_failure(err: AppError) -> AppError {
    match err {
        AppError::Database(e) => AppError::backend(e.to_string()),
        other => other,
    }
}

#[async_trait]
impl UploadService for PhotoUploader {
    async fn upload_photo(&self, form: UploadForm) -> AppResult<UploadedPhoto> {
        // Nothing reaches storage unless the form is valid
        let upload = form.into_upload()?;

        self.properties
            .find_by_id(upload.property_id)
            .await
            .map_err(backend_failure)?
            .ok_or_not_found("Property")?;

        let key = storage_key(
            upload.property_id,
            upload.slot,
            upload.image_type,
            Utc::now().timestamp_millis(),
        );
        let size = upload.bytes.len();

        self.storage
            .put(&key, upload.image_type.mime(), upload.bytes)
            .await?;

        let url = self.storage.public_url(&key);
        if let Err(err) = self
            .properties
            .set_photo_url(upload.property_id, upload.slot, url.clone())
            .await
        {
            tracing::warn!(
                property_id = %upload.property_id,
                key = %key,
                "Stored photo left unlinked: {}",
                err
            );
            return Err(backend_failure(err));
        }

        tracing::info!(
            property_id = %upload.property_id,
            slot = %upload.slot,
            size,
            "Photo uploaded"
        );

        Ok(UploadedPhoto {
            message: "Photo uploaded successfully".to_string(),
            url,
            photo_type: upload.slot,
        })
    }
}
