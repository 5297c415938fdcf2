//! Statistics endpoints

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::AppResult;

use super::AuthenticatedUser;

/// Booking counters
#[derive(Serialize, ToSchema)]
pub struct BookingStats {
    pub pending: i64,
    pub confirmed: i64,
    pub cancelled: i64,
    /// Non-cancelled bookings from today onwards
    pub upcoming: i64,
}

/// Dashboard statistics response
#[derive(Serialize, ToSchema)]
pub struct StatsResponse {
    pub bookings: BookingStats,
}

/// Dashboard statistics (admin)
#[utoipa::path(
    get,
    path = "/stats",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard statistics", body = StatsResponse)
    )
)]
pub async fn get_stats(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<StatsResponse>> {
    let stats = state.services.stats.get_stats().await?;
    Ok(Json(stats))
}
