//! Business logic services

pub mod availability;
pub mod bookings;
pub mod catalog;
pub mod email;
pub mod schedules;
pub mod settings;
pub mod stats;
pub mod testimonials;
pub mod users;

use crate::{
    config::{AuthConfig, BookingConfig, EmailConfig},
    repository::Repository,
    scheduling::OccupancyPolicy,
};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub availability: availability::AvailabilityService,
    pub bookings: bookings::BookingsService,
    pub catalog: catalog::CatalogService,
    pub schedules: schedules::SchedulesService,
    pub settings: settings::SettingsService,
    pub stats: stats::StatsService,
    pub testimonials: testimonials::TestimonialsService,
    pub users: users::UsersService,
    pub email: email::EmailService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(
        repository: Repository,
        auth_config: AuthConfig,
        email_config: EmailConfig,
        booking_config: BookingConfig,
    ) -> Self {
        let policy = OccupancyPolicy {
            pending_blocks: booking_config.pending_blocks_slots,
        };
        let email = email::EmailService::new(email_config);
        let availability =
            availability::AvailabilityService::new(repository.clone(), policy);

        Self {
            bookings: bookings::BookingsService::new(
                repository.clone(),
                availability.clone(),
                email.clone(),
            ),
            availability,
            catalog: catalog::CatalogService::new(repository.clone()),
            schedules: schedules::SchedulesService::new(repository.clone()),
            settings: settings::SettingsService::new(repository.clone()),
            stats: stats::StatsService::new(repository.clone()),
            testimonials: testimonials::TestimonialsService::new(repository.clone()),
            users: users::UsersService::new(repository, auth_config),
            email,
        }
    }
}
