//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{
    auth, availability, bookings, health, schedules, services, settings, stats, testimonials,
    users,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Salonette API",
        version = "1.0.0",
        description = "Salon Booking & Management REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Salonette Team", email = "contact@salonette.example")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Availability
        availability::list_slots,
        availability::free_slots,
        // Bookings
        bookings::create_booking,
        bookings::get_booking_by_reference,
        bookings::cancel_booking_by_reference,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::confirm_booking,
        bookings::cancel_booking,
        bookings::reschedule_booking,
        bookings::booking_feed,
        // Services
        services::list_services,
        services::list_all_services,
        services::get_service,
        services::create_service,
        services::update_service,
        services::delete_service,
        // Hours
        schedules::get_hours,
        schedules::update_hours,
        // Testimonials
        testimonials::list_testimonials,
        testimonials::list_all_testimonials,
        testimonials::create_testimonial,
        testimonials::update_testimonial,
        testimonials::delete_testimonial,
        // Settings
        settings::get_site,
        settings::get_settings,
        settings::update_settings,
        // Stats
        stats::get_stats,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::delete_user,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Availability
            availability::AvailabilityQuery,
            availability::FreeSlotsResponse,
            crate::services::availability::DayAvailability,
            crate::scheduling::TimeSlot,
            // Bookings
            bookings::CreateBookingResponse,
            crate::models::booking::Booking,
            crate::models::booking::CreateBooking,
            crate::models::booking::RescheduleBooking,
            crate::models::booking::BookingQuery,
            crate::models::booking::BookingEvent,
            crate::models::booking::BookingEventKind,
            crate::models::enums::BookingStatus,
            // Services
            crate::models::service::SalonService,
            crate::models::service::CreateService,
            crate::models::service::UpdateService,
            // Hours
            crate::models::schedule::DayHours,
            crate::models::schedule::WeeklySchedule,
            crate::models::schedule::DayHoursInput,
            crate::models::schedule::UpdateOpeningHours,
            // Testimonials
            crate::models::testimonial::Testimonial,
            crate::models::testimonial::CreateTestimonial,
            crate::models::testimonial::UpdateTestimonial,
            // Settings
            crate::models::settings::SiteSettings,
            crate::models::settings::UpdateSiteSettings,
            // Stats
            stats::StatsResponse,
            stats::BookingStats,
            // Users
            crate::models::user::StaffUser,
            crate::models::user::CreateStaffUser,
            crate::models::user::UpdateStaffUser,
            crate::models::enums::StaffRole,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Staff authentication"),
        (name = "availability", description = "Appointment availability"),
        (name = "bookings", description = "Booking submission and management"),
        (name = "services", description = "Service catalog"),
        (name = "hours", description = "Weekly opening hours"),
        (name = "testimonials", description = "Client testimonials"),
        (name = "settings", description = "Site settings"),
        (name = "stats", description = "Statistics"),
        (name = "users", description = "Staff accounts")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
