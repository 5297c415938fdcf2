//! Statistics service for the admin dashboard

use chrono::Local;

use crate::{
    api::stats::{BookingStats, StatsResponse},
    error::AppResult,
    models::enums::BookingStatus,
    repository::Repository,
};

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Booking counts for the dashboard
    pub async fn get_stats(&self) -> AppResult<StatsResponse> {
        let pending = self
            .repository
            .bookings
            .count_by_status(BookingStatus::Pending)
            .await?;
        let confirmed = self
            .repository
            .bookings
            .count_by_status(BookingStatus::Confirmed)
            .await?;
        let cancelled = self
            .repository
            .bookings
            .count_by_status(BookingStatus::Cancelled)
            .await?;
        let upcoming = self
            .repository
            .bookings
            .count_upcoming(Local::now().date_naive())
            .await?;

        Ok(StatsResponse {
            bookings: BookingStats {
                pending,
                confirmed,
                cancelled,
                upcoming,
            },
        })
    }
}
