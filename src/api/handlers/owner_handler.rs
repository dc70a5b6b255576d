//! Owner bio handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::{guards, Authorized, IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{NewOwner, Owner, OwnerChanges};
use crate::errors::AppResult;
use crate::types::MessageResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnersResponse {
    pub owners: Vec<Owner>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OwnerResponse {
    pub owner: Owner,
}

/// Create owner routes
pub fn owner_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_owners).post(create_owner))
        .route("/:id", put(update_owner).delete(delete_owner))
}

/// List active owners in display order
#[utoipa::path(
    get,
    path = "/api/owners",
    tag = "Owners",
    responses(
        (status = 200, description = "Active owners", body = OwnersResponse)
    )
)]
pub async fn list_owners(State(state): State<AppState>) -> AppResult<Json<OwnersResponse>> {
    let owners = state.services.owners.list_active().await?;
    Ok(Json(OwnersResponse { owners }))
}

/// Create an owner
#[utoipa::path(
    post,
    path = "/api/owners",
    tag = "Owners",
    request_body = NewOwner,
    responses(
        (status = 201, description = "Owner created", body = OwnerResponse),
        (status = 400, description = "Validation error or too many active owners"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_owner(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageOwners>,
    ValidatedJson(input): ValidatedJson<NewOwner>,
) -> AppResult<(StatusCode, Json<OwnerResponse>)> {
    let owner = state.services.owners.create(input).await?;
    Ok((StatusCode::CREATED, Json(OwnerResponse { owner })))
}

/// Update an owner
#[utoipa::path(
    put,
    path = "/api/owners/{id}",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner id")),
    request_body = OwnerChanges,
    responses(
        (status = 200, description = "Owner updated", body = OwnerResponse),
        (status = 400, description = "Validation error or too many active owners"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Owner not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_owner(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageOwners>,
    IdPath(id): IdPath,
    ValidatedJson(changes): ValidatedJson<OwnerChanges>,
) -> AppResult<Json<OwnerResponse>> {
    let owner = state.services.owners.update(id, changes).await?;
    Ok(Json(OwnerResponse { owner }))
}

/// Delete an owner
#[utoipa::path(
    delete,
    path = "/api/owners/{id}",
    tag = "Owners",
    params(("id" = Uuid, Path, description = "Owner id")),
    responses(
        (status = 200, description = "Owner deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Owner not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_owner(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageOwners>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.owners.delete(id).await?;
    Ok(Json(MessageResponse::new("Owner deleted successfully")))
}
