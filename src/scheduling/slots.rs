//! Candidate slot generation on the 15-minute grid

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::WeeklySchedule;

/// Width of the booking grid in minutes. Every slot start, every stored
/// booking time and every occupied-range boundary is a multiple of this
/// from midnight.
pub const SLOT_INTERVAL_MINUTES: u32 = 15;

static SLOT_TIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01][0-9]|2[0-3]):([0-5][0-9])$").unwrap());

/// Whether a time sits on the booking grid
pub fn is_grid_aligned(time: NaiveTime) -> bool {
    time.num_seconds_from_midnight() % (SLOT_INTERVAL_MINUTES * 60) == 0
}

/// Parse an `HH:MM` string into a grid-aligned time.
///
/// Returns `None` for malformed input or times off the grid; inputs are
/// never rounded.
pub fn parse_slot_time(s: &str) -> Option<NaiveTime> {
    if !SLOT_TIME_RE.is_match(s) {
        return None;
    }
    let time = NaiveTime::parse_from_str(s, "%H:%M").ok()?;
    is_grid_aligned(time).then_some(time)
}

/// Parse a `YYYY-MM-DD` date string
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Candidate start times for one calendar date.
///
/// Walks the grid from `open` to `close - duration` inclusive, so every
/// emitted slot fits entirely before closing time. Closed or missing days
/// produce no slots. When `date` is today, candidates not strictly after
/// `now`'s time of day are dropped.
pub fn generate_slots(
    date: NaiveDate,
    schedule: &WeeklySchedule,
    duration_minutes: u32,
    now: NaiveDateTime,
) -> Vec<NaiveTime> {
    let hours = match schedule.day(date.weekday()) {
        Some(hours) if !hours.closed => *hours,
        _ => return Vec::new(),
    };

    let open = hours.open.num_seconds_from_midnight() / 60;
    let close = hours.close.num_seconds_from_midnight() / 60;
    if close <= open {
        // malformed row: fail closed rather than emit slots
        return Vec::new();
    }
    let last = match close.checked_sub(duration_minutes) {
        Some(last) => last,
        None => return Vec::new(),
    };

    let today = date == now.date();
    let mut slots = Vec::new();
    let mut minute = open;
    while minute <= last {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0).unwrap();
        if !today || time > now.time() {
            slots.push(time);
        }
        minute += SLOT_INTERVAL_MINUTES;
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::{OpeningHoursRow, WeeklySchedule};

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
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

    fn far_past_now() -> NaiveDateTime {
        d(2020, 1, 1).and_time(t(0, 0))
    }

    #[test]
    fn test_closed_day_has_no_slots() {
        // 2025-06-08 is a Sunday
        let slots = generate_slots(d(2025, 6, 8), &schedule(), 30, far_past_now());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_open_day_bounds() {
        // 2025-06-09 is a Monday; 09:00-18:00 with a 30-minute service
        let slots = generate_slots(d(2025, 6, 9), &schedule(), 30, far_past_now());
        assert_eq!(slots.first(), Some(&t(9, 0)));
        assert_eq!(slots.last(), Some(&t(17, 30)));
        assert!(!slots.contains(&t(17, 45)));
        // (18:00 - 09:00) / 15min + 1 - slots whose service would overrun
        assert_eq!(slots.len(), 35);
    }

    #[test]
    fn test_every_slot_fits_before_close() {
        for duration in [15u32, 30, 45, 60, 90] {
            let slots = generate_slots(d(2025, 6, 9), &schedule(), duration, far_past_now());
            for slot in &slots {
                let end = slot.num_seconds_from_midnight() / 60 + duration;
                assert!(end <= 18 * 60, "slot {} overruns close for {}min", slot, duration);
            }
        }
    }

    #[test]
    fn test_slots_are_grid_aligned_and_ordered() {
        let slots = generate_slots(d(2025, 6, 9), &schedule(), 45, far_past_now());
        for pair in slots.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for slot in &slots {
            assert!(is_grid_aligned(*slot));
        }
    }

    #[test]
    fn test_today_drops_elapsed_slots() {
        let date = d(2025, 6, 9);
        let now = date.and_time(t(12, 0));
        let slots = generate_slots(date, &schedule(), 30, now);
        // 12:00 itself is not strictly after now
        assert_eq!(slots.first(), Some(&t(12, 15)));

        // another date is unaffected by the clock
        let tomorrow = d(2025, 6, 10);
        let slots = generate_slots(tomorrow, &schedule(), 30, now);
        assert_eq!(slots.first(), Some(&t(9, 0)));
    }

    #[test]
    fn test_duration_longer_than_day_yields_nothing() {
        let slots = generate_slots(d(2025, 6, 9), &schedule(), 10 * 60, far_past_now());
        assert!(slots.is_empty());
    }

    #[test]
    fn test_parse_slot_time() {
        assert_eq!(parse_slot_time("09:15"), Some(t(9, 15)));
        assert_eq!(parse_slot_time("23:45"), Some(t(23, 45)));
        // off-grid times are rejected, not rounded
        assert_eq!(parse_slot_time("09:10"), None);
        assert_eq!(parse_slot_time("9:15"), None);
        assert_eq!(parse_slot_time("24:00"), None);
        assert_eq!(parse_slot_time("09:15:00"), None);
        assert_eq!(parse_slot_time("garbage"), None);
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2025-06-09"), Some(d(2025, 6, 9)));
        assert_eq!(parse_date("2025-13-01"), None);
        assert_eq!(parse_date("09/06/2025"), None);
    }
}
