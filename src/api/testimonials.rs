//! Testimonial endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
};

use super::AuthenticatedUser;

/// Published testimonials for the public site
#[utoipa::path(
    get,
    path = "/testimonials",
    tag = "testimonials",
    responses(
        (status = 200, description = "Published testimonials", body = Vec<Testimonial>)
    )
)]
pub async fn list_testimonials(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.services.testimonials.list_published().await?;
    Ok(Json(testimonials))
}

/// All testimonials, published or not (admin)
#[utoipa::path(
    get,
    path = "/testimonials/all",
    tag = "testimonials",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All testimonials", body = Vec<Testimonial>)
    )
)]
pub async fn list_all_testimonials(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = state.services.testimonials.list_all().await?;
    Ok(Json(testimonials))
}

/// Create a testimonial (admin)
#[utoipa::path(
    post,
    path = "/testimonials",
    tag = "testimonials",
    security(("bearer_auth" = [])),
    request_body = CreateTestimonial,
    responses(
        (status = 201, description = "Testimonial created", body = Testimonial),
        (status = 400, description = "Invalid request")
    )
)]
pub async fn create_testimonial(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    let testimonial = state.services.testimonials.create(request).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// Update a testimonial (admin)
#[utoipa::path(
    put,
    path = "/testimonials/{id}",
    tag = "testimonials",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    request_body = UpdateTestimonial,
    responses(
        (status = 200, description = "Testimonial updated", body = Testimonial),
        (status = 404, description = "Testimonial not found")
    )
)]
pub async fn update_testimonial(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = state.services.testimonials.update(id, request).await?;
    Ok(Json(testimonial))
}

/// Delete a testimonial (admin)
#[utoipa::path(
    delete,
    path = "/testimonials/{id}",
    tag = "testimonials",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Testimonial ID")
    ),
    responses(
        (status = 204, description = "Testimonial deleted"),
        (status = 404, description = "Testimonial not found")
    )
)]
pub async fn delete_testimonial(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.testimonials.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
