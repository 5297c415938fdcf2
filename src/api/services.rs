//! Service catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::service::{CreateService, SalonService, UpdateService},
};

use super::AuthenticatedUser;

/// Active services for the public booking form
#[utoipa::path(
    get,
    path = "/services",
    tag = "services",
    responses(
        (status = 200, description = "Active services", body = Vec<SalonService>)
    )
)]
pub async fn list_services(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<SalonService>>> {
    let services = state.services.catalog.list_public().await?;
    Ok(Json(services))
}

/// All services, including deactivated ones (admin)
#[utoipa::path(
    get,
    path = "/services/all",
    tag = "services",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All services", body = Vec<SalonService>)
    )
)]
pub async fn list_all_services(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<SalonService>>> {
    let services = state.services.catalog.list_all().await?;
    Ok(Json(services))
}

/// Get a service
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "services",
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service", body = SalonService),
        (status = 404, description = "Service not found")
    )
)]
pub async fn get_service(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<SalonService>> {
    let service = state.services.catalog.get(id).await?;
    Ok(Json(service))
}

/// Create a service (admin)
#[utoipa::path(
    post,
    path = "/services",
    tag = "services",
    security(("bearer_auth" = [])),
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = SalonService),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Service name already exists")
    )
)]
pub async fn create_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<CreateService>,
) -> AppResult<(StatusCode, Json<SalonService>)> {
    let service = state.services.catalog.create(request).await?;
    Ok((StatusCode::CREATED, Json(service)))
}

/// Update a service (admin)
#[utoipa::path(
    put,
    path = "/services/{id}",
    tag = "services",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = SalonService),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Service name already exists")
    )
)]
pub async fn update_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateService>,
) -> AppResult<Json<SalonService>> {
    let service = state.services.catalog.update(id, request).await?;
    Ok(Json(service))
}

/// Delete a service (admin)
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "services",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Service ID")
    ),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    )
)]
pub async fn delete_service(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
