//! Listing photo upload handler.

use axum::{
    extract::{
        multipart::{Multipart, MultipartRejection},
        DefaultBodyLimit, State,
    },
    response::Json,
    routing::post,
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::api::extractors::{guards, Authorized};
use crate::api::AppState;
use crate::config::UPLOAD_BODY_LIMIT_BYTES;
use crate::domain::{UploadForm, UploadedFile, UploadedPhoto};
use crate::errors::{AppError, AppResult};

/// Multipart form accepted by the upload endpoint (documentation only)
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
pub struct UploadRequest {
    /// JPEG, PNG or WebP image, at most 5 MiB
    #[schema(value_type = String, format = Binary)]
    file: Vec<u8>,
    /// Property the photo belongs to
    property_id: String,
    /// `main` (default), `photo_2` or `photo_3`
    photo_type: Option<String>,
}

/// Create upload routes
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(upload_photo))
        .layer(DefaultBodyLimit::max(UPLOAD_BODY_LIMIT_BYTES))
}

/// Upload a photo for a property
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "Uploads",
    request_body(content = UploadRequest, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Photo stored and linked", body = UploadedPhoto),
        (status = 400, description = "Missing field, bad type, too large or storage error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Role not allowed"),
        (status = 404, description = "Property not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn upload_photo(
    State(state): State<AppState>,
    auth: Authorized<guards::UploadPhotos>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<Json<UploadedPhoto>> {
    let multipart = multipart.map_err(|e| AppError::validation(e.body_text()))?;
    let form = read_form(multipart).await?;

    tracing::debug!(user_id = %auth.user.id, role = %auth.role, "Photo upload requested");

    let uploaded = state.services.uploads.upload_photo(form).await?;
    Ok(Json(uploaded))
}

/// Collect the known fields of the multipart body; others are ignored.
async fn read_form(mut multipart: Multipart) -> AppResult<UploadForm> {
    let mut form = UploadForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::validation(e.body_text()))?;
                form.file = Some(UploadedFile {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            }
            "propertyId" => {
                form.property_id = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(e.body_text()))?,
                );
            }
            "photoType" => {
                form.photo_type = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::validation(e.body_text()))?,
                );
            }
            _ => {}
        }
    }

    Ok(form)
}
