//! Availability service: gathers the engine's inputs and runs it
//!
//! The engine itself is pure; this service does the I/O (opening hours,
//! service catalog, bookings for the date) and hands everything over as
//! explicit parameters.

use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult},
    models::{booking::Booking, ServiceCatalog, WeeklySchedule},
    repository::Repository,
    scheduling::{AvailabilityContext, OccupancyPolicy, TimeSlot},
};

/// Availability for one date as served to the booking UI
#[derive(Debug, Serialize, ToSchema)]
pub struct DayAvailability {
    /// Queried date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Every candidate slot, occupied ones marked rather than dropped
    pub slots: Vec<TimeSlot>,
    /// Occupied grid points (HH:MM), for the informational display
    pub occupied: Vec<String>,
}

#[derive(Clone)]
pub struct AvailabilityService {
    repository: Repository,
    policy: OccupancyPolicy,
}

impl AvailabilityService {
    pub fn new(repository: Repository, policy: OccupancyPolicy) -> Self {
        Self { repository, policy }
    }

    /// Load the three engine inputs for a date.
    ///
    /// Inactive services stay in the catalog: legacy bookings may reference
    /// a deactivated service and their duration must still resolve.
    async fn load_inputs(
        &self,
        date: NaiveDate,
    ) -> AppResult<(WeeklySchedule, ServiceCatalog, Vec<Booking>)> {
        let rows = self.repository.schedules.get_week().await?;
        let schedule = WeeklySchedule::from_rows(&rows);
        let services = self.repository.services.list(true).await?;
        let catalog = ServiceCatalog::new(services);
        let bookings = self.repository.bookings.on_date(date).await?;
        Ok((schedule, catalog, bookings))
    }

    /// Full slot list for a date, unavailable slots marked.
    /// `exclude_booking` frees that booking's own occupancy (reschedule).
    pub async fn day_availability(
        &self,
        date: NaiveDate,
        service_ref: &str,
        exclude_booking: Option<i32>,
    ) -> AppResult<DayAvailability> {
        let (schedule, catalog, bookings) = self.load_inputs(date).await?;
        let ctx = AvailabilityContext {
            schedule: &schedule,
            catalog: &catalog,
            bookings: &bookings,
            policy: self.policy,
            now: Local::now().naive_local(),
        };

        let slots = ctx.day_slots(date, service_ref, exclude_booking);
        let occupied = ctx
            .occupied_times(date, exclude_booking)
            .into_iter()
            .map(|time| time.format("%H:%M").to_string())
            .collect();

        Ok(DayAvailability { date, slots, occupied })
    }

    /// Only the bookable times, for the plain booking form
    pub async fn free_times(&self, date: NaiveDate, service_ref: &str) -> AppResult<Vec<String>> {
        let (schedule, catalog, bookings) = self.load_inputs(date).await?;
        let ctx = AvailabilityContext {
            schedule: &schedule,
            catalog: &catalog,
            bookings: &bookings,
            policy: self.policy,
            now: Local::now().naive_local(),
        };

        Ok(ctx
            .free_slots(date, service_ref)
            .into_iter()
            .map(|time| time.format("%H:%M").to_string())
            .collect())
    }

    /// Authoritative server-side gate for booking submission and reschedule.
    ///
    /// Distinguishes the two rejection reasons: a time the grid never offers
    /// (closed day, outside hours, in the past, unknown service) is a
    /// business-rule violation; a slot someone else holds is the retryable
    /// [`AppError::SlotTaken`].
    pub async fn assert_bookable(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        service_ref: &str,
        exclude_booking: Option<i32>,
    ) -> AppResult<()> {
        let (schedule, catalog, bookings) = self.load_inputs(date).await?;
        let now = Local::now().naive_local();
        let ctx = AvailabilityContext {
            schedule: &schedule,
            catalog: &catalog,
            bookings: &bookings,
            policy: self.policy,
            now,
        };

        if date.and_time(time) <= now {
            return Err(AppError::Validation(
                "Cannot book a time in the past".to_string(),
            ));
        }

        let slots = ctx.day_slots(date, service_ref, exclude_booking);
        match slots.iter().find(|slot| slot.time == time) {
            None => Err(AppError::BusinessRule(
                "Requested time is not within business hours".to_string(),
            )),
            Some(slot) if !slot.available => Err(AppError::SlotTaken(
                "This time slot is already booked, please pick another one".to_string(),
            )),
            Some(_) => Ok(()),
        }
    }
}
