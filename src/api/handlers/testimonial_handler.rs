//! Testimonial handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, patch, put},
    Router,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::api::extractors::{guards, Authorized, IdPath, ValidatedJson, ValidatedQuery};
use crate::api::AppState;
use crate::domain::{NewTestimonial, Testimonial, TestimonialChanges, TestimonialFilter};
use crate::errors::AppResult;
use crate::types::MessageResponse;

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TestimonialResponse {
    pub testimonial: Testimonial,
}

/// Create testimonial routes
pub fn testimonial_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_testimonials).post(create_testimonial))
        .route("/:id", put(update_testimonial).delete(delete_testimonial))
        .route("/:id/toggle", patch(toggle_testimonial))
}

/// List testimonials, newest first
#[utoipa::path(
    get,
    path = "/api/testimonials",
    tag = "Testimonials",
    params(TestimonialFilter),
    responses(
        (status = 200, description = "Testimonials", body = TestimonialsResponse)
    )
)]
pub async fn list_testimonials(
    State(state): State<AppState>,
    ValidatedQuery(filter): ValidatedQuery<TestimonialFilter>,
) -> AppResult<Json<TestimonialsResponse>> {
    let testimonials = state.services.testimonials.list(filter).await?;
    Ok(Json(TestimonialsResponse { testimonials }))
}

/// Create a testimonial
#[utoipa::path(
    post,
    path = "/api/testimonials",
    tag = "Testimonials",
    request_body = NewTestimonial,
    responses(
        (status = 201, description = "Testimonial created", body = TestimonialResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_testimonial(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageTestimonials>,
    ValidatedJson(input): ValidatedJson<NewTestimonial>,
) -> AppResult<(StatusCode, Json<TestimonialResponse>)> {
    let testimonial = state.services.testimonials.create(input).await?;
    Ok((StatusCode::CREATED, Json(TestimonialResponse { testimonial })))
}

/// Update a testimonial
#[utoipa::path(
    put,
    path = "/api/testimonials/{id}",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    request_body = TestimonialChanges,
    responses(
        (status = 200, description = "Testimonial updated", body = TestimonialResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Testimonial not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_testimonial(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageTestimonials>,
    IdPath(id): IdPath,
    ValidatedJson(changes): ValidatedJson<TestimonialChanges>,
) -> AppResult<Json<TestimonialResponse>> {
    let testimonial = state.services.testimonials.update(id, changes).await?;
    Ok(Json(TestimonialResponse { testimonial }))
}

/// Delete a testimonial
#[utoipa::path(
    delete,
    path = "/api/testimonials/{id}",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Testimonial deleted", body = MessageResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Testimonial not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn delete_testimonial(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageTestimonials>,
    IdPath(id): IdPath,
) -> AppResult<Json<MessageResponse>> {
    state.services.testimonials.delete(id).await?;
    Ok(Json(MessageResponse::new("Testimonial deleted successfully")))
}

/// Publish or hide a testimonial
#[utoipa::path(
    patch,
    path = "/api/testimonials/{id}/toggle",
    tag = "Testimonials",
    params(("id" = Uuid, Path, description = "Testimonial id")),
    responses(
        (status = 200, description = "Active flag flipped", body = TestimonialResponse),
        (status = 401, description = "Not authenticated"),
        (status = 403, description = "Admin only"),
        (status = 404, description = "Testimonial not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn toggle_testimonial(
    State(state): State<AppState>,
    _auth: Authorized<guards::ManageTestimonials>,
    IdPath(id): IdPath,
) -> AppResult<Json<TestimonialResponse>> {
    let testimonial = state.services.testimonials.toggle(id).await?;
    Ok(Json(TestimonialResponse { testimonial }))
}
