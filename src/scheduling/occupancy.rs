//! Occupancy expansion of existing bookings

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveTime, Timelike};

use crate::models::{Booking, BookingStatus, ServiceCatalog};

use super::slots::SLOT_INTERVAL_MINUTES;

/// Which booking statuses occupy their slot.
///
/// The public site historically counts only confirmed bookings; pending
/// requests do not reserve their slot until the back office confirms them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OccupancyPolicy {
    pub pending_blocks: bool,
}

impl OccupancyPolicy {
    pub const CONFIRMED_ONLY: OccupancyPolicy = OccupancyPolicy {
        pending_blocks: false,
    };

    pub fn blocks(&self, status: BookingStatus) -> bool {
        match status {
            BookingStatus::Confirmed => true,
            BookingStatus::Pending => self.pending_blocks,
            BookingStatus::Cancelled => false,
        }
    }
}

/// Expand each conflict-relevant booking into every 15-minute grid point in
/// `[time, time + duration)` and collect the `(date, time)` pairs.
///
/// Durations are resolved through the catalog, falling back to the
/// documented 30-minute default for unresolved references. A booking id in
/// `exclude_booking` is skipped entirely, so a rescheduled booking does not
/// conflict with itself.
pub fn occupied_slots(
    bookings: &[Booking],
    catalog: &ServiceCatalog,
    policy: OccupancyPolicy,
    exclude_booking: Option<i32>,
) -> HashSet<(NaiveDate, NaiveTime)> {
    let mut occupied = HashSet::new();
    for booking in bookings {
        if exclude_booking == Some(booking.id) {
            continue;
        }
        if !policy.blocks(booking.status) {
            continue;
        }

        let duration = catalog.duration_for(&booking.service_ref).minutes;
        let start = booking.time.num_seconds_from_midnight() / 60;
        let mut minute = start;
        while minute < start + duration {
            // a range running past midnight is clipped at the end of the day
            if let Some(time) = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0) {
                occupied.insert((booking.date, time));
            }
            minute += SLOT_INTERVAL_MINUTES;
        }
    }
    occupied
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::service::SalonService;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
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

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            service(1, "Cut & Finish", 45),
            service(2, "Beard Trim", 15),
        ])
    }

    #[test]
    fn test_booking_covers_its_interval_only() {
        let bookings = vec![booking(10, 9, t(10, 0), "1", BookingStatus::Confirmed)];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, None);

        assert!(occupied.contains(&(d(9), t(10, 0))));
        assert!(occupied.contains(&(d(9), t(10, 15))));
        assert!(occupied.contains(&(d(9), t(10, 30))));
        // 10:45 is the next slot's start, not part of [10:00, 10:45)
        assert!(!occupied.contains(&(d(9), t(10, 45))));
        assert!(!occupied.contains(&(d(9), t(9, 45))));
        assert_eq!(occupied.len(), 3);
    }

    #[test]
    fn test_pending_and_cancelled_do_not_block_by_default() {
        let bookings = vec![
            booking(1, 9, t(10, 0), "2", BookingStatus::Pending),
            booking(2, 9, t(11, 0), "2", BookingStatus::Cancelled),
        ];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, None);
        assert!(occupied.is_empty());
    }

    #[test]
    fn test_pending_blocks_when_policy_says_so() {
        let bookings = vec![
            booking(1, 9, t(10, 0), "2", BookingStatus::Pending),
            booking(2, 9, t(11, 0), "2", BookingStatus::Cancelled),
        ];
        let policy = OccupancyPolicy { pending_blocks: true };
        let occupied = occupied_slots(&bookings, &catalog(), policy, None);
        assert_eq!(occupied, HashSet::from([(d(9), t(10, 0))]));
    }

    #[test]
    fn test_unresolved_service_defaults_to_thirty_minutes() {
        let bookings = vec![booking(1, 9, t(14, 0), "Deleted Service", BookingStatus::Confirmed)];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, None);
        assert_eq!(
            occupied,
            HashSet::from([(d(9), t(14, 0)), (d(9), t(14, 15))])
        );
    }

    #[test]
    fn test_overlapping_bookings_collapse() {
        // two bookings covering the same grid points
        let bookings = vec![
            booking(1, 9, t(10, 0), "2", BookingStatus::Confirmed),
            booking(2, 9, t(10, 0), "1", BookingStatus::Confirmed),
        ];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, None);
        assert_eq!(occupied.len(), 3);
    }

    #[test]
    fn test_excluded_booking_frees_its_slots() {
        let bookings = vec![booking(7, 9, t(11, 0), "1", BookingStatus::Confirmed)];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, Some(7));
        assert!(occupied.is_empty());
    }

    #[test]
    fn test_dates_do_not_bleed() {
        let bookings = vec![booking(1, 9, t(10, 0), "2", BookingStatus::Confirmed)];
        let occupied = occupied_slots(&bookings, &catalog(), OccupancyPolicy::CONFIRMED_ONLY, None);
        assert!(!occupied.contains(&(d(10), t(10, 0))));
    }
}
