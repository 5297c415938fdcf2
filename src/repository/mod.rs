//! Repository layer for database operations

pub mod bookings;
pub mod schedules;
pub mod services;
pub mod settings;
pub mod testimonials;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub bookings: bookings::BookingsRepository,
    pub services: services::ServicesRepository,
    pub schedules: schedules::SchedulesRepository,
    pub settings: settings::SettingsRepository,
    pub testimonials: testimonials::TestimonialsRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            bookings: bookings::BookingsRepository::new(pool.clone()),
            services: services::ServicesRepository::new(pool.clone()),
            schedules: schedules::SchedulesRepository::new(pool.clone()),
            settings: settings::SettingsRepository::new(pool.clone()),
            testimonials: testimonials::TestimonialsRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}
