//! Booking endpoints: public submission and back-office management

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::sse::{Event, KeepAlive, Sse},
    Json,
};
use serde::Serialize;
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingQuery, CreateBooking, RescheduleBooking},
};

use super::AuthenticatedUser;

/// Response for a successful public booking submission
#[derive(Serialize, ToSchema)]
pub struct CreateBookingResponse {
    pub booking: Booking,
    /// Status message for the booking form
    pub message: String,
}

/// Submit a booking request (public booking form).
///
/// Availability is re-checked server side; the client-rendered slot list is
/// advisory only. A slot taken in the meantime answers 409 with the
/// `SlotTaken` code and the client should re-query availability.
#[utoipa::path(
    post,
    path = "/bookings",
    tag = "bookings",
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking created", body = CreateBookingResponse),
        (status = 400, description = "Malformed input"),
        (status = 409, description = "Slot already taken (retryable)"),
        (status = 422, description = "Time outside business hours")
    )
)]
pub async fn create_booking(
    State(state): State<crate::AppState>,
    Json(request): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<CreateBookingResponse>)> {
    let booking = state.services.bookings.create(request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateBookingResponse {
            booking,
            message: "Booking request received, awaiting confirmation".to_string(),
        }),
    ))
}

/// Look up a booking by the reference from the confirmation email (public)
#[utoipa::path(
    get,
    path = "/bookings/by-reference/{reference}",
    tag = "bookings",
    params(
        ("reference" = Uuid, Path, description = "Public booking reference")
    ),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 404, description = "Unknown reference")
    )
)]
pub async fn get_booking_by_reference(
    State(state): State<crate::AppState>,
    Path(reference): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get_by_reference(reference).await?;
    Ok(Json(booking))
}

/// Cancel a booking by its public reference (client self-service)
#[utoipa::path(
    post,
    path = "/bookings/by-reference/{reference}/cancel",
    tag = "bookings",
    params(
        ("reference" = Uuid, Path, description = "Public booking reference")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 404, description = "Unknown reference"),
        (status = 422, description = "Booking is already cancelled")
    )
)]
pub async fn cancel_booking_by_reference(
    State(state): State<crate::AppState>,
    Path(reference): Path<Uuid>,
) -> AppResult<Json<Booking>> {
    let booking = state
        .services
        .bookings
        .cancel_by_reference(reference)
        .await?;
    Ok(Json(booking))
}

/// List bookings with optional date/status filters (admin)
#[utoipa::path(
    get,
    path = "/bookings",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(BookingQuery),
    responses(
        (status = 200, description = "Bookings", body = Vec<Booking>)
    )
)]
pub async fn list_bookings(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<BookingQuery>,
) -> AppResult<Json<Vec<Booking>>> {
    let bookings = state.services.bookings.list(&query).await?;
    Ok(Json(bookings))
}

/// Get a booking (admin)
#[utoipa::path(
    get,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking", body = Booking),
        (status = 404, description = "Booking not found")
    )
)]
pub async fn get_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.get(id).await?;
    Ok(Json(booking))
}

/// Confirm a pending booking (admin)
#[utoipa::path(
    post,
    path = "/bookings/{id}/confirm",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking confirmed", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Booking is not pending")
    )
)]
pub async fn confirm_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.confirm(id).await?;
    Ok(Json(booking))
}

/// Cancel a booking (admin)
#[utoipa::path(
    post,
    path = "/bookings/{id}/cancel",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    responses(
        (status = 200, description = "Booking cancelled", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 422, description = "Booking is already cancelled")
    )
)]
pub async fn cancel_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.cancel(id).await?;
    Ok(Json(booking))
}

/// Reschedule a booking (admin). The booking is excluded from its own
/// occupancy, so keeping the current slot is accepted.
#[utoipa::path(
    put,
    path = "/bookings/{id}",
    tag = "bookings",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Booking ID")
    ),
    request_body = RescheduleBooking,
    responses(
        (status = 200, description = "Booking rescheduled", body = Booking),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Slot already taken (retryable)"),
        (status = 422, description = "Time outside business hours")
    )
)]
pub async fn reschedule_booking(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<RescheduleBooking>,
) -> AppResult<Json<Booking>> {
    let booking = state.services.bookings.reschedule(id, request).await?;
    Ok(Json(booking))
}

/// Server-sent events stream of booking changes for the back office.
/// Display freshness only; clients re-query the list on reconnect.
#[utoipa::path(
    get,
    path = "/bookings/feed",
    tag = "bookings",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "text/event-stream of booking changes")
    )
)]
pub async fn booking_feed(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let receiver = state.services.bookings.subscribe();
    let stream = BroadcastStream::new(receiver)
        .filter_map(|event| event.ok())
        .map(|event| Event::default().json_data(&event));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
