//! Property listing handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::{guards, Authorized, IdPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{NewProperty, Property, PropertyChanges, PropertyFilter};
use crate::errors::AppResult;
use crate::types::MessageResponse;

/// List of properties
#[derive(Debug, Serialize, ToSchema)]
pub struct PropertiesResponse {
    pub properties: Vec<Property>,
}

/// Single property
#[derive(Debug, Serialize, ToSchema)]
pub struct PropertyResponse {
    pub property: Property,
}

/// Create property routes
pub fn property_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_properties).post(create_property))
        .route(
            "/:id",
            get(get_property)
                .put(update_property)
                .delete(delete_property),
        )
}

/// List properties, newest first
#[utoipa::path(
    get,
    path = "/api/properties",
    tag = "Properties",
    params(PropertyFilter),
    responses(
        (status = 200, description = "Matching properties", body = PropertiesResponse),
        (status = 400, description = "Malformed filter")
    )
)]
pub async fn list_properties(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<PropertyFilter>,
) -> AppResult<Json<PropertiesResponse>> {
    let properties = state.services.properties.list(filter).await?;
    Ok(Json(PropertiesResponse { properties }))
}

/// Get a property by id
#[utoipa::path(
    get,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property found", body = PropertyResponse),
        (status = 404, description = "Property not found")
    )
)]
pub async fn get_property(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<PropertyResponse>> {
    let property = state.services.properties.get(id).await?;
    Ok(Json(PropertyResponse { property }))
}

/// Create a property
#[utoipa::path(
    post,
    path = "/api/properties",
    tag = "Properties",
    request_body = NewProperty,
    responses(
        (status = 201, description = "Property created", body = PropertyResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Role not allowed")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_property(
    State(state): State<AppState>,
    auth: Authorized<guards::EditListings>,
    ValidatedJson(input): ValidatedJson<NewProperty>,
) -> AppResult<(StatusCode, Json<PropertyResponse>)> {
    let property = state.services.properties.create(input, auth.user.id).await?;
    Ok((StatusCode::CREATED, Json(PropertyResponse { property })))
}

/// Update a property
#[utoipa::path(
    put,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "Property id")),
    request_body = PropertyChanges,
    responses(
        (status = 200, description = "Property updated", body = PropertyResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Role not allowed"),
        (status = 404, description = "Property not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_property(
    State(state): State<AppState>,
    _auth: Authorized<guards::EditListings>,
    IdPath(id): IdPath,
    ValidatedJson(changes): ValidatedJson<PropertyChanges>,
) -> AppResult<Json<PropertyResponse>> {
    let property = state.services.properties.update(id, changes).await?;
    Ok(Json(PropertyResponse { property }))
}

/// Delete a property
#[utoipa::path(
    delete,
    path = "/api/properties/{id}",
    tag = "Properties",
    params(("id" = Uuid, Path, description = "Property id")),
    responses(
        (status = 200, description = "Property deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Role not allowed"),
        (status = 404, description = "Property not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_property(
    State(state): State<AppState>,
    _auth: Authorized<guards::DeleteListings>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.properties.delete(id).await?;
    Ok(Json(MessageResponse::new("Property deleted successfully")))
}
