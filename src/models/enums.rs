//! Shared domain enums

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ---------------------------------------------------------------------------
// BookingStatus
// ---------------------------------------------------------------------------

/// Booking lifecycle status.
///
/// `Pending` on creation by the public flow, moved to `Confirmed` or
/// `Cancelled` by the back office only. `Cancelled` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending = 0,
    Confirmed = 1,
    Cancelled = 2,
}

impl From<i16> for BookingStatus {
    fn from(v: i16) -> Self {
        match v {
            1 => BookingStatus::Confirmed,
            2 => BookingStatus::Cancelled,
            _ => BookingStatus::Pending,
        }
    }
}

impl From<BookingStatus> for i16 {
    fn from(s: BookingStatus) -> Self {
        s as i16
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "confirmed" => Ok(BookingStatus::Confirmed),
            "cancelled" => Ok(BookingStatus::Cancelled),
            _ => Err(()),
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// StaffRole
// ---------------------------------------------------------------------------

/// Staff account roles for the back office
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, sqlx::Type)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin = 0,
    Staff = 1,
}

impl From<i16> for StaffRole {
    fn from(v: i16) -> Self {
        match v {
            0 => StaffRole::Admin,
            _ => StaffRole::Staff,
        }
    }
}

impl From<StaffRole> for i16 {
    fn from(r: StaffRole) -> Self {
        r as i16
    }
}

impl std::fmt::Display for StaffRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            StaffRole::Admin => "Admin",
            StaffRole::Staff => "Staff",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_roundtrip() {
        assert_eq!(BookingStatus::from(1i16), BookingStatus::Confirmed);
        assert_eq!(i16::from(BookingStatus::Cancelled), 2);
        assert_eq!(BookingStatus::from(99i16), BookingStatus::Pending);
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("confirmed".parse(), Ok(BookingStatus::Confirmed));
        assert!("nope".parse::<BookingStatus>().is_err());
    }
}
