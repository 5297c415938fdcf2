//! Service catalog models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Duration substituted when a booking's service reference resolves neither
/// by id nor by name (legacy rows whose service was renamed or deleted).
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

// ---------------------------------------------------------------------------
// SalonService
// ---------------------------------------------------------------------------

/// A bookable salon service
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct SalonService {
    pub id: i32,
    /// Display name, unique
    pub name: String,
    pub description: Option<String>,
    /// Appointment length in minutes
    pub duration_minutes: i32,
    /// Display price
    #[schema(value_type = f64)]
    pub price: Decimal,
    /// Whether the service is offered on the public booking form
    pub active: bool,
    /// Sort position on the public site
    pub position: i32,
    pub crea_date: Option<DateTime<Utc>>,
    pub modif_date: Option<DateTime<Utc>>,
}

/// Create service request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateService {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 5, max = 480, message = "Duration must be between 5 and 480 minutes"))]
    pub duration_minutes: i32,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub active: Option<bool>,
    pub position: Option<i32>,
}

/// Update service request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateService {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 5, max = 480, message = "Duration must be between 5 and 480 minutes"))]
    pub duration_minutes: Option<i32>,
    #[schema(value_type = f64)]
    pub price: Option<Decimal>,
    pub active: Option<bool>,
    pub position: Option<i32>,
}

// ---------------------------------------------------------------------------
// ServiceCatalog
// ---------------------------------------------------------------------------

/// Outcome of a duration lookup; callers can tell a resolved duration from
/// the documented fail-open fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DurationLookup {
    pub minutes: u32,
    pub defaulted: bool,
}

/// An in-memory snapshot of the service catalog, used by the availability
/// engine to resolve booking service references.
#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    services: Vec<SalonService>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<SalonService>) -> Self {
        Self { services }
    }

    /// Resolve a service reference: by stable id first, then by exact name.
    /// Legacy bookings store the display name instead of the id.
    pub fn resolve(&self, reference: &str) -> Option<&SalonService> {
        let reference = reference.trim();
        if let Ok(id) = reference.parse::<i32>() {
            if let Some(service) = self.services.iter().find(|s| s.id == id) {
                return Some(service);
            }
        }
        self.services.iter().find(|s| s.name == reference)
    }

    /// Duration in minutes for a service reference, falling back to
    /// [`DEFAULT_DURATION_MINUTES`] when the reference cannot be resolved.
    pub fn duration_for(&self, reference: &str) -> DurationLookup {
        match self.resolve(reference) {
            Some(service) => DurationLookup {
                minutes: service.duration_minutes.max(1) as u32,
                defaulted: false,
            },
            None => DurationLookup {
                minutes: DEFAULT_DURATION_MINUTES,
                defaulted: true,
            },
        }
    }

    pub fn services(&self) -> &[SalonService] {
        &self.services
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::new(vec![
            SalonService {
                id: 1,
                name: "Cut & Finish".to_string(),
                description: None,
                duration_minutes: 45,
                price: Decimal::new(3500, 2),
                active: true,
                position: 0,
                crea_date: None,
                modif_date: None,
            },
            SalonService {
                id: 2,
                name: "Beard Trim".to_string(),
                description: None,
                duration_minutes: 15,
                price: Decimal::new(1200, 2),
                active: true,
                position: 1,
                crea_date: None,
                modif_date: None,
            },
        ])
    }

    #[test]
    fn test_resolve_by_id_then_name() {
        let catalog = catalog();
        assert_eq!(catalog.resolve("2").unwrap().name, "Beard Trim");
        assert_eq!(catalog.resolve("Cut & Finish").unwrap().id, 1);
        assert!(catalog.resolve("Perm").is_none());
    }

    #[test]
    fn test_duration_fallback_is_explicit() {
        let catalog = catalog();
        assert_eq!(
            catalog.duration_for("1"),
            DurationLookup { minutes: 45, defaulted: false }
        );
        assert_eq!(
            catalog.duration_for("Unknown"),
            DurationLookup { minutes: DEFAULT_DURATION_MINUTES, defaulted: true }
        );
    }
}
