//! Availability resolution: merging generated slots with occupancy

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::schedule::time_format;
use crate::models::{Booking, ServiceCatalog, WeeklySchedule};

use super::occupancy::{occupied_slots, OccupancyPolicy};
use super::slots::generate_slots;

/// A candidate appointment start, derived fresh on every query
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct TimeSlot {
    /// Slot start time (HH:MM)
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "10:30")]
    pub time: NaiveTime,
    pub available: bool,
}

/// All inputs the resolver needs, gathered by the caller beforehand.
///
/// The resolver itself performs no I/O and holds no state; calling it twice
/// with the same inputs yields the same output.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityContext<'a> {
    pub schedule: &'a WeeklySchedule,
    pub catalog: &'a ServiceCatalog,
    pub bookings: &'a [Booking],
    pub policy: OccupancyPolicy,
    /// Local wall-clock instant of the query
    pub now: NaiveDateTime,
}

impl<'a> AvailabilityContext<'a> {
    /// Every candidate slot for `date`, each annotated with availability.
    ///
    /// Unavailable slots are marked, not dropped, so callers can render
    /// occupied and free slots alike. With `exclude_booking` set, that
    /// booking's own occupancy is ignored (reschedule flow). An unknown
    /// requested service yields an empty list.
    pub fn day_slots(
        &self,
        date: NaiveDate,
        service_ref: &str,
        exclude_booking: Option<i32>,
    ) -> Vec<TimeSlot> {
        let service = match self.catalog.resolve(service_ref) {
            Some(service) => service,
            None => return Vec::new(),
        };
        let duration = service.duration_minutes.max(1) as u32;
        let occupied = occupied_slots(self.bookings, self.catalog, self.policy, exclude_booking);

        generate_slots(date, self.schedule, duration, self.now)
            .into_iter()
            .map(|time| TimeSlot {
                time,
                available: !occupied.contains(&(date, time)),
            })
            .collect()
    }

    /// Only the bookable subset, used by the plain booking form
    pub fn free_slots(&self, date: NaiveDate, service_ref: &str) -> Vec<NaiveTime> {
        self.day_slots(date, service_ref, None)
            .into_iter()
            .filter(|slot| slot.available)
            .map(|slot| slot.time)
            .collect()
    }

    /// Occupied grid points for `date`, in ascending order, for the UI's
    /// informational display
    pub fn occupied_times(&self, date: NaiveDate, exclude_booking: Option<i32>) -> Vec<NaiveTime> {
        let mut times: Vec<NaiveTime> =
            occupied_slots(self.bookings, self.catalog, self.policy, exclude_booking)
                .into_iter()
                .filter(|(slot_date, _)| *slot_date == date)
                .map(|(_, time)| time)
                .collect();
        times.sort_unstable();
        times
    }

    /// Authoritative point query used when a booking is submitted.
    ///
    /// Fails closed: unknown service, closed day, occupied slot or an
    /// instant not strictly in the future all answer `false`.
    pub fn is_bookable(&self, date: NaiveDate, time: NaiveTime, service_ref: &str) -> bool {
        self.is_bookable_excluding(date, time, service_ref, None)
    }

    /// Point query for the reschedule flow: the booking being moved is
    /// excluded from its own occupancy.
    pub fn is_bookable_excluding(
        &self,
        date: NaiveDate,
        time: NaiveTime,
        service_ref: &str,
        exclude_booking: Option<i32>,
    ) -> bool {
        let service = match self.catalog.resolve(service_ref) {
            Some(service) => service,
            None => return false,
        };
        if date.and_time(time) <= self.now {
            return false;
        }
        let duration = service.duration_minutes.max(1) as u32;
        if !generate_slots(date, self.schedule, duration, self.now).contains(&time) {
            return false;
        }
        let occupied = occupied_slots(self.bookings, self.catalog, self.policy, exclude_booking);
        !occupied.contains(&(date, time))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::BookingStatus;
    use crate::models::schedule::OpeningHoursRow;
    use crate::models::service::SalonService;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    /// Mon-Sat 09:00-18:00, Sunday closed
    fn schedule() -> WeeklySchedule {
        let rows: Vec<OpeningHoursRow> = (0..6)
            .map(|weekday| OpeningHoursRow {
                weekday,
                open_time: t(9, 0),
                close_time: t(18, 0),
                closed: false,
            })
            .collect();
        WeeklySchedule::from_rows(&rows)
    }

    fn service(id: i32, name: &str, minutes: i32) -> SalonService {
        SalonService {
            id,
            name: name.to_string(),
            description: None,
            duration_minutes: minutes,
            price: Decimal::ZERO,
            active: true,
            position: 0,
            crea_date: None,
            modif_date: None,
        }
    }

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            service(1, "Cut & Finish", 45),
            service(2, "Beard Trim", 30),
        ])
    }

    fn booking(id: i32, day: u32, time: NaiveTime, service_ref: &str, status: BookingStatus) -> Booking {
        Booking {
            id,
            reference: Uuid::new_v4(),
            date: d(day),
            time,
            service_ref: service_ref.to_string(),
            client_name: "Client".to_string(),
            client_email: "client@example.com".to_string(),
            client_phone: None,
            notes: None,
            status,
            crea_date: None,
            modif_date: None,
        }
    }

    fn far_past_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap().and_time(t(0, 0))
    }

    fn context<'a>(
        schedule: &'a WeeklySchedule,
        catalog: &'a ServiceCatalog,
        bookings: &'a [Booking],
    ) -> AvailabilityContext<'a> {
        AvailabilityContext {
            schedule,
            catalog,
            bookings,
            policy: OccupancyPolicy::CONFIRMED_ONLY,
            now: far_past_now(),
        }
    }

    #[test]
    fn test_confirmed_booking_blocks_its_interval() {
        let schedule = schedule();
        let catalog = catalog();
        // 45-minute confirmed booking at 10:00 on Monday 2025-06-09
        let bookings = vec![booking(1, 9, t(10, 0), "1", BookingStatus::Confirmed)];
        let ctx = context(&schedule, &catalog, &bookings);

        let slots = ctx.day_slots(d(9), "2", None);
        let availability: Vec<(NaiveTime, bool)> =
            slots.iter().map(|s| (s.time, s.available)).collect();

        assert!(availability.contains(&(t(10, 0), false)));
        assert!(availability.contains(&(t(10, 15), false)));
        assert!(availability.contains(&(t(10, 30), false)));
        assert!(availability.contains(&(t(10, 45), true)));
        assert!(availability.contains(&(t(9, 45), true)));
    }

    #[test]
    fn test_unavailable_slots_are_marked_not_dropped() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = vec![booking(1, 9, t(10, 0), "1", BookingStatus::Confirmed)];
        let ctx = context(&schedule, &catalog, &bookings);

        let all = ctx.day_slots(d(9), "2", None);
        let free = ctx.free_slots(d(9), "2");

        // same grid as an empty day, minus nothing
        let empty_day = ctx.day_slots(d(10), "2", None);
        assert_eq!(all.len(), empty_day.len());
        assert_eq!(free.len(), all.len() - 3);
        for pair in all.windows(2) {
            assert!(pair[0].time < pair[1].time);
        }
    }

    #[test]
    fn test_closed_day_empty_and_not_bookable() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = Vec::new();
        let ctx = context(&schedule, &catalog, &bookings);

        // 2025-06-08 is a Sunday
        assert!(ctx.day_slots(d(8), "1", None).is_empty());
        assert!(!ctx.is_bookable(d(8), t(10, 0), "1"));
    }

    #[test]
    fn test_unknown_service_fails_closed() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = Vec::new();
        let ctx = context(&schedule, &catalog, &bookings);

        assert!(ctx.day_slots(d(9), "Perm", None).is_empty());
        assert!(!ctx.is_bookable(d(9), t(10, 0), "Perm"));
    }

    #[test]
    fn test_is_bookable_rejects_past_and_occupied() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = vec![booking(1, 9, t(10, 0), "1", BookingStatus::Confirmed)];
        let mut ctx = context(&schedule, &catalog, &bookings);

        assert!(!ctx.is_bookable(d(9), t(10, 15), "2"));
        assert!(ctx.is_bookable(d(9), t(10, 45), "2"));
        // off the generated grid: service would overrun closing time
        assert!(!ctx.is_bookable(d(9), t(17, 45), "2"));

        // the whole day is in the past relative to now
        ctx.now = d(10).and_time(t(12, 0));
        assert!(!ctx.is_bookable(d(9), t(10, 45), "2"));
        // today, earlier than now
        assert!(!ctx.is_bookable(d(10), t(11, 0), "2"));
        assert!(ctx.is_bookable(d(10), t(14, 0), "2"));
    }

    #[test]
    fn test_reschedule_excludes_own_occupancy() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = vec![booking(42, 9, t(11, 0), "1", BookingStatus::Confirmed)];
        let ctx = context(&schedule, &catalog, &bookings);

        // moving booking 42 onto its own slot is allowed
        assert!(ctx.is_bookable_excluding(d(9), t(11, 0), "1", Some(42)));
        assert!(!ctx.is_bookable(d(9), t(11, 0), "1"));

        let slots = ctx.day_slots(d(9), "1", Some(42));
        let own = slots.iter().find(|s| s.time == t(11, 0)).unwrap();
        assert!(own.available);
    }

    #[test]
    fn test_resolver_is_idempotent() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = vec![
            booking(1, 9, t(10, 0), "1", BookingStatus::Confirmed),
            booking(2, 9, t(14, 0), "2", BookingStatus::Confirmed),
        ];
        let ctx = context(&schedule, &catalog, &bookings);

        assert_eq!(ctx.day_slots(d(9), "2", None), ctx.day_slots(d(9), "2", None));
        assert_eq!(ctx.occupied_times(d(9), None), ctx.occupied_times(d(9), None));
    }

    #[test]
    fn test_occupied_times_are_sorted_and_scoped_to_date() {
        let schedule = schedule();
        let catalog = catalog();
        let bookings = vec![
            booking(1, 9, t(14, 0), "2", BookingStatus::Confirmed),
            booking(2, 9, t(10, 0), "2", BookingStatus::Confirmed),
            booking(3, 10, t(9, 0), "2", BookingStatus::Confirmed),
        ];
        let ctx = context(&schedule, &catalog, &bookings);

        assert_eq!(
            ctx.occupied_times(d(9), None),
            vec![t(10, 0), t(10, 15), t(14, 0), t(14, 15)]
        );
    }
}
