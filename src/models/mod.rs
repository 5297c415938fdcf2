//! Data models for Salonette

pub mod booking;
pub mod enums;
pub mod schedule;
pub mod service;
pub mod settings;
pub mod testimonial;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingEvent, BookingEventKind};
pub use enums::{BookingStatus, StaffRole};
pub use schedule::{DayHours, WeeklySchedule};
pub use service::{SalonService, ServiceCatalog};
pub use settings::SiteSettings;
pub use testimonial::Testimonial;
pub use user::{StaffUser, UserClaims};
