//! Appointment availability engine
//!
//! Computes the bookable time slots for a calendar date from three explicit
//! inputs: the weekly opening hours, the service catalog, and the existing
//! booking set. Everything in this module is a pure function of its
//! arguments; all I/O (loading hours, catalog and bookings) happens in the
//! service layer before these functions are called.
//!
//! All slot arithmetic runs on a fixed 15-minute grid anchored at midnight.
//! Inputs that violate the grid are rejected at the API boundary, never
//! rounded.

pub mod availability;
pub mod occupancy;
pub mod slots;

pub use availability::{AvailabilityContext, TimeSlot};
pub use occupancy::{occupied_slots, OccupancyPolicy};
pub use slots::{
    generate_slots, is_grid_aligned, parse_date, parse_slot_time, SLOT_INTERVAL_MINUTES,
};
