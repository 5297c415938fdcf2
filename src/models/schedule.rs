//! Opening-hours models (weekly schedule)

use chrono::{NaiveTime, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Serde adapter for `HH:MM` wall-clock times as used by the public API.
pub mod time_format {
    use chrono::NaiveTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M").map_err(serde::de::Error::custom)
    }
}

/// Lowercase weekday keys, Monday first (day_of_week 0 = Monday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

/// Map a chrono weekday to its schedule key
pub fn weekday_name(weekday: Weekday) -> &'static str {
    WEEKDAY_NAMES[weekday.num_days_from_monday() as usize]
}

// ---------------------------------------------------------------------------
// DayHours
// ---------------------------------------------------------------------------

/// Opening hours for a single weekday.
///
/// Invariant: `open < close` whenever `closed` is false, enforced when hours
/// are updated through the back office.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DayHours {
    /// Opening time (HH:MM)
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "09:00")]
    pub open: NaiveTime,
    /// Closing time (HH:MM)
    #[serde(with = "time_format")]
    #[schema(value_type = String, example = "18:00")]
    pub close: NaiveTime,
    /// Whether the salon is closed on this weekday
    pub closed: bool,
}

/// One `opening_hours` table row
#[derive(Debug, Clone, FromRow)]
pub struct OpeningHoursRow {
    /// Day of week (0=Monday, 6=Sunday)
    pub weekday: i16,
    pub open_time: NaiveTime,
    pub close_time: NaiveTime,
    pub closed: bool,
}

// ---------------------------------------------------------------------------
// WeeklySchedule
// ---------------------------------------------------------------------------

/// The full weekly schedule keyed by lowercase weekday name, Monday first.
///
/// Read-only input to the availability engine; mutated only through the
/// opening-hours admin endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeeklySchedule(
    #[schema(value_type = Object)] pub IndexMap<String, DayHours>,
);

impl WeeklySchedule {
    /// Build a schedule from `opening_hours` rows; missing weekdays are
    /// treated as closed.
    pub fn from_rows(rows: &[OpeningHoursRow]) -> Self {
        let mut days = IndexMap::with_capacity(7);
        for (idx, name) in WEEKDAY_NAMES.iter().enumerate() {
            let hours = rows
                .iter()
                .find(|r| r.weekday == idx as i16)
                .map(|r| DayHours {
                    open: r.open_time,
                    close: r.close_time,
                    closed: r.closed,
                })
                .unwrap_or(DayHours {
                    open: NaiveTime::MIN,
                    close: NaiveTime::MIN,
                    closed: true,
                });
            days.insert((*name).to_string(), hours);
        }
        WeeklySchedule(days)
    }

    /// Hours entry for a calendar weekday
    pub fn day(&self, weekday: Weekday) -> Option<&DayHours> {
        self.0.get(weekday_name(weekday))
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// One weekday in an opening-hours update. Times are required unless the
/// day is marked closed.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct DayHoursInput {
    /// Opening time (HH:MM, on the 15-minute grid)
    pub open: Option<String>,
    /// Closing time (HH:MM, on the 15-minute grid)
    pub close: Option<String>,
    pub closed: bool,
}

/// Update opening hours request; days absent from the map keep their rows
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateOpeningHours {
    #[schema(value_type = Object)]
    pub days: IndexMap<String, DayHoursInput>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_from_rows_monday_first_and_gaps_closed() {
        let rows = vec![OpeningHoursRow {
            weekday: 2,
            open_time: t(9, 0),
            close_time: t(18, 0),
            closed: false,
        }];
        let schedule = WeeklySchedule::from_rows(&rows);

        let keys: Vec<&str> = schedule.0.keys().map(String::as_str).collect();
        assert_eq!(keys, WEEKDAY_NAMES.to_vec());

        assert!(!schedule.day(Weekday::Wed).unwrap().closed);
        assert!(schedule.day(Weekday::Mon).unwrap().closed);
        assert!(schedule.day(Weekday::Sun).unwrap().closed);
    }

    #[test]
    fn test_day_hours_serializes_hhmm() {
        let hours = DayHours {
            open: t(9, 0),
            close: t(18, 30),
            closed: false,
        };
        let json = serde_json::to_value(&hours).unwrap();
        assert_eq!(json["open"], "09:00");
        assert_eq!(json["close"], "18:30");
    }

    #[test]
    fn test_weekday_name() {
        assert_eq!(weekday_name(Weekday::Mon), "monday");
        assert_eq!(weekday_name(Weekday::Sun), "sunday");
    }
}
