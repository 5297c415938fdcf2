//! Availability endpoints for the booking flow

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult},
    scheduling::parse_date,
    services::availability::DayAvailability,
};

/// Query parameters for the availability endpoints
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AvailabilityQuery {
    /// Date to query (YYYY-MM-DD)
    pub date: String,
    /// Service id or exact service name
    pub service: String,
    /// Booking id to exclude from occupancy (reschedule flow)
    pub exclude_booking: Option<i32>,
}

/// Free-slots response for the plain booking form
#[derive(Serialize, ToSchema)]
pub struct FreeSlotsResponse {
    /// Queried date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Bookable times (HH:MM) in ascending order
    pub times: Vec<String>,
}

fn parse_query_date(raw: &str) -> AppResult<NaiveDate> {
    let date = parse_date(raw)
        .ok_or_else(|| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
    // the booking form never offers past dates
    if date < Local::now().date_naive() {
        return Err(AppError::Validation("Date is in the past".to_string()));
    }
    Ok(date)
}

/// Full slot list for a date, occupied slots marked
#[utoipa::path(
    get,
    path = "/availability",
    tag = "availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Slots for the date", body = DayAvailability),
        (status = 400, description = "Malformed date or time")
    )
)]
pub async fn list_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<DayAvailability>> {
    let date = parse_query_date(&query.date)?;

    let availability = state
        .services
        .availability
        .day_availability(date, &query.service, query.exclude_booking)
        .await?;
    Ok(Json(availability))
}

/// Only the bookable times for a date
#[utoipa::path(
    get,
    path = "/availability/free",
    tag = "availability",
    params(AvailabilityQuery),
    responses(
        (status = 200, description = "Free times for the date", body = FreeSlotsResponse),
        (status = 400, description = "Malformed date or time")
    )
)]
pub async fn free_slots(
    State(state): State<crate::AppState>,
    Query(query): Query<AvailabilityQuery>,
) -> AppResult<Json<FreeSlotsResponse>> {
    let date = parse_query_date(&query.date)?;

    let times = state
        .services
        .availability
        .free_times(date, &query.service)
        .await?;
    Ok(Json(FreeSlotsResponse { date, times }))
}
