//! Salonette Salon Booking & Management Server
//!
//! A Rust implementation of the Salonette salon back end, providing a REST
//! JSON API for the public booking flow (services, availability, booking
//! submission) and the admin back office (bookings, services, opening hours,
//! testimonials, site settings, staff accounts).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
