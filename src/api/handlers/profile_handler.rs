//! Current session handlers.

use axum::{extract::State, response::Json, routing::get, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::CurrentUser;
use crate::api::AppState;
use crate::domain::Profile;
use crate::errors::AppResult;

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub profile: Profile,
}

/// Create session routes
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/me", get(get_current_profile))
}

/// Profile of the signed-in user
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Current profile", body = ProfileResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "No profile for this user")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_current_profile(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ProfileResponse>> {
    let profile = state.services.profiles.current(user.id).await?;
    Ok(Json(ProfileResponse { profile }))
}
