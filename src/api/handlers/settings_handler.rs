//! Site settings handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{guards, Authorized, ValidatedJson};
use crate::api::AppState;
use crate::domain::{SettingsInput, SiteSettings};
use crate::errors::AppResult;

/// Create settings routes
pub fn settings_routes() -> Router<AppState> {
    Router::new().route("/", get(get_settings).post(save_settings))
}

/// Current site settings, or `null` before the first write
#[utoipa::path(
    get,
    path = "/api/settings",
    tag = "Settings",
    responses(
        (status = 200, description = "Settings row or null", body = SiteSettings)
    )
)]
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<Option<SiteSettings>>> {
    let settings = state.services.settings.get().await?;
    Ok(Json(settings))
}

/// Create or replace the site settings
#[utoipa::path(
    post,
    path = "/api/settings",
    tag = "Settings",
    request_body = SettingsInput,
    responses(
        (status = 200, description = "Settings saved", body = SiteSettings),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn save_settings(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageSettings>,
    ValidatedJson(input): ValidatedJson<SettingsInput>,
) -> AppResult<Json<SiteSettings>> {
    let settings = state.services.settings.save(input).await?;
    Ok(Json(settings))
}
