//! Opening-hours endpoints

use axum::{extract::State, Json};

use crate::{
    error::AppResult,
    models::schedule::{UpdateOpeningHours, WeeklySchedule},
};

use super::AuthenticatedUser;

/// Weekly opening hours (public, shown on the site and the booking form)
#[utoipa::path(
    get,
    path = "/hours",
    tag = "hours",
    responses(
        (status = 200, description = "Weekly opening hours", body = WeeklySchedule)
    )
)]
pub async fn get_hours(
    State(state): State<crate::AppState>,
) -> AppResult<Json<WeeklySchedule>> {
    let schedule = state.services.schedules.get_week().await?;
    Ok(Json(schedule))
}

/// Update weekly opening hours (admin)
#[utoipa::path(
    put,
    path = "/hours",
    tag = "hours",
    security(("bearer_auth" = [])),
    request_body = UpdateOpeningHours,
    responses(
        (status = 200, description = "Updated weekly opening hours", body = WeeklySchedule),
        (status = 400, description = "Malformed times or open >= close")
    )
)]
pub async fn update_hours(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Json(request): Json<UpdateOpeningHours>,
) -> AppResult<Json<WeeklySchedule>> {
    let schedule = state.services.schedules.update(request).await?;
    Ok(Json(schedule))
}
