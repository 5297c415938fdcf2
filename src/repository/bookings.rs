//! Bookings repository for database operations

use chrono::{NaiveDate, NaiveTime};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{Booking, NewBooking},
        enums::BookingStatus,
    },
};

/// Name of the partial unique index guarding `(date, time)` for
/// non-cancelled bookings. The index, not this process, is the authority on
/// double bookings: of two racing submissions that both passed the advisory
/// availability check, the second insert fails here.
const SLOT_UNIQUE_INDEX: &str = "bookings_slot_key";

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get booking by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Get booking by public reference
    pub async fn get_by_reference(&self, reference: Uuid) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE reference = $1")
            .bind(reference)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Booking not found".to_string()))
    }

    /// List bookings, optionally filtered by date and status
    pub async fn list(
        &self,
        date: Option<NaiveDate>,
        status: Option<BookingStatus>,
    ) -> AppResult<Vec<Booking>> {
        let mut conditions = Vec::new();
        let mut idx = 1;

        if date.is_some() {
            conditions.push(format!("date = ${}", idx));
            idx += 1;
        }
        if status.is_some() {
            conditions.push(format!("status = ${}", idx));
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let query = format!(
            "SELECT * FROM bookings {} ORDER BY date, time",
            where_clause
        );

        let mut builder = sqlx::query_as::<_, Booking>(&query);
        if let Some(d) = date {
            builder = builder.bind(d);
        }
        if let Some(s) = status {
            builder = builder.bind(s);
        }

        let rows = builder.fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// All bookings on a date, regardless of status (the availability engine
    /// decides which statuses occupy slots)
    pub async fn on_date(&self, date: NaiveDate) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE date = $1 ORDER BY time"
        )
        .bind(date)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert a new booking in `Pending` state
    pub async fn create(&self, data: &NewBooking) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings
                (reference, date, time, service_ref, client_name, client_email, client_phone, notes, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(data.date)
        .bind(data.time)
        .bind(&data.service_ref)
        .bind(&data.client_name)
        .bind(&data.client_email)
        .bind(&data.client_phone)
        .bind(&data.notes)
        .bind(BookingStatus::Pending)
        .fetch_one(&self.pool)
        .await
        .map_err(map_slot_conflict)
    }

    /// Set a booking's lifecycle status
    pub async fn update_status(&self, id: i32, status: BookingStatus) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $1, modif_date = NOW() WHERE id = $2 RETURNING *"
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Move a booking to a new date and time
    pub async fn reschedule(&self, id: i32, date: NaiveDate, time: NaiveTime) -> AppResult<Booking> {
        sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET date = $1, time = $2, modif_date = NOW() WHERE id = $3 RETURNING *"
        )
        .bind(date)
        .bind(time)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_slot_conflict)?
        .ok_or_else(|| AppError::NotFound(format!("Booking {} not found", id)))
    }

    /// Count bookings in a given status
    pub async fn count_by_status(&self, status: BookingStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count non-cancelled bookings on or after a date
    pub async fn count_upcoming(&self, from: NaiveDate) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM bookings WHERE date >= $1 AND status <> $2"
        )
        .bind(from)
        .bind(BookingStatus::Cancelled)
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

/// Translate a violation of the slot uniqueness index into the retryable
/// conflict error; everything else stays a database error.
fn map_slot_conflict(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.constraint() == Some(SLOT_UNIQUE_INDEX) => {
            AppError::SlotTaken(
                "This time slot has just been taken, please pick another one".to_string(),
            )
        }
        _ => AppError::from(err),
    }
}
