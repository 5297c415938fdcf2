//! Booking models

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::enums::BookingStatus;
use super::schedule::time_format;

// ---------------------------------------------------------------------------
// Booking
// ---------------------------------------------------------------------------

/// A client appointment
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Booking {
    pub id: i32,
    /// Public reference handed to the client in the confirmation email
    pub reference: Uuid,
    /// Appointment date (YYYY-MM-DD, local)
    pub date: NaiveDate,
    /// Appointment start time (HH:MM, on the 15-minute grid)
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "10:30")]
    pub time: NaiveTime,
    /// Service id as string, or the service name for legacy rows
    pub service_ref: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub notes: Option<String>,
    pub status: BookingStatus,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Public booking submission
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBooking {
    /// Appointment date (YYYY-MM-DD)
    pub date: String,
    /// Appointment time (HH:MM, on the 15-minute grid)
    pub time: String,
    /// Service id or exact service name
    pub service: String,
    #[validate(length(min = 2, max = 120, message = "Name must be 2 to 120 characters"))]
    pub client_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub client_email: String,
    pub client_phone: Option<String>,
    #[validate(length(max = 500, message = "Notes must be at most 500 characters"))]
    pub notes: Option<String>,
}

/// A validated booking ready for insertion (parsed from [`CreateBooking`])
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub service_ref: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: Option<String>,
    pub notes: Option<String>,
}

/// Reschedule request (admin)
#[derive(Debug, Deserialize, ToSchema)]
pub struct RescheduleBooking {
    /// New date (YYYY-MM-DD)
    pub date: String,
    /// New time (HH:MM, on the 15-minute grid)
    pub time: String,
}

/// Query parameters for the admin booking list
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookingQuery {
    /// Filter by date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Filter by status (pending|confirmed|cancelled)
    pub status: Option<String>,
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Kind of change pushed on the admin booking feed
#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum BookingEventKind {
    Created,
    Confirmed,
    Cancelled,
    Rescheduled,
}

/// A booking change, broadcast to connected back-office clients.
/// Display freshness only; carries no correctness obligation.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookingEvent {
    pub kind: BookingEventKind,
    pub booking: Booking,
}
