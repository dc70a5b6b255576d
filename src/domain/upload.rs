//! Listing photo uploads: accepted image types, input checks and storage keys.

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use super::PhotoSlot;
use crate::config::{ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES};
use crate::errors::{AppError, AppResult};

/// Accepted image formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageType {
    Jpeg,
    Png,
    Webp,
}

impl ImageType {
    /// Match a MIME type against the accepted formats.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime.trim().to_ascii_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageType::Jpeg),
            "image/png" => Some(ImageType::Png),
            "image/webp" => Some(ImageType::Webp),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImageType::Jpeg => "image/jpeg",
            ImageType::Png => "image/png",
            ImageType::Webp => "image/webp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ImageType::Jpeg => "jpg",
            ImageType::Png => "png",
            ImageType::Webp => "webp",
        }
    }
}

/// File part of an upload form
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Raw upload form fields, as collected from the multipart body
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub file: Option<UploadedFile>,
    pub property_id: Option<String>,
    pub photo_type: Option<String>,
}

/// A validated upload, ready to be stored
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub property_id: Uuid,
    pub slot: PhotoSlot,
    pub image_type: ImageType,
    pub bytes: Vec<u8>,
}

/// Result of a successful upload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadedPhoto {
    #[schema(example = "Photo uploaded successfully")]
    pub message: String,
    pub url: String,
    pub photo_type: PhotoSlot,
}

impl UploadForm {
    /// Check the form and turn it into an upload.
    ///
    /// Checks run in order: file present, property id present, image type,
    /// size, then the id and slot formats.
    pub fn into_upload(self) -> AppResult<PhotoUpload> {
        let file = self
            .file
            .filter(|f| !f.bytes.is_empty())
            .ok_or_else(|| AppError::validation("No file provided"))?;

        let property_id = self
            .property_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::validation("propertyId is required"))?;

        let image_type = file
            .content_type
            .as_deref()
            .and_then(ImageType::from_mime)
            .ok_or_else(|| {
                AppError::validation(format!(
                    "Invalid file type. Allowed types: {}",
                    ALLOWED_IMAGE_TYPES.join(", ")
                ))
            })?;

        if file.bytes.len() > MAX_UPLOAD_BYTES {
            return Err(AppError::validation(format!(
                "File too large. Maximum size is {} MB",
                MAX_UPLOAD_BYTES / (1024 * 1024)
            )));
        }

        let property_id = Uuid::parse_str(property_id)
            .map_err(|_| AppError::validation("propertyId must be a valid UUID"))?;

        let slot = match self.photo_type.as_deref().map(str::trim) {
            None | Some("") => PhotoSlot::Main,
            Some(raw) => raw.parse::<PhotoSlot>().map_err(AppError::Validation)?,
        };

        Ok(PhotoUpload {
            property_id,
            slot,
            image_type,
            bytes: file.bytes,
        })
    }
}

/// Object key for an upload: `{property_id}/{slot}-{unix_millis}.{ext}`
pub fn storage_key(property_id: Uuid, slot: PhotoSlot, image_type: ImageType, timestamp_millis: i64) -> String {
    format!(
        "{}/{}-{}.{}",
        property_id,
        slot.as_str(),
        timestamp_millis,
        image_type.extension()
    )
}
