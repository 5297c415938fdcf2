//! Booking management service

use tokio::sync::broadcast;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        booking::{
            Booking, BookingEvent, BookingEventKind, BookingQuery, CreateBooking, NewBooking,
            RescheduleBooking,
        },
        enums::BookingStatus,
        ServiceCatalog,
    },
    repository::Repository,
    scheduling::{parse_date, parse_slot_time},
};

use super::{availability::AvailabilityService, email::EmailService};

/// Capacity of the admin feed channel; slow consumers lose old events, which
/// only affects display freshness
const EVENT_CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct BookingsService {
    repository: Repository,
    availability: AvailabilityService,
    email: EmailService,
    events: broadcast::Sender<BookingEvent>,
}

impl BookingsService {
    pub fn new(
        repository: Repository,
        availability: AvailabilityService,
        email: EmailService,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            repository,
            availability,
            email,
            events,
        }
    }

    /// Subscribe to booking changes for the admin live feed
    pub fn subscribe(&self) -> broadcast::Receiver<BookingEvent> {
        self.events.subscribe()
    }

    fn emit(&self, kind: BookingEventKind, booking: &Booking) {
        // send only fails when nobody is listening
        let _ = self.events.send(BookingEvent {
            kind,
            booking: booking.clone(),
        });
    }

    /// Display name for a booking's service reference, falling back to the
    /// raw reference for legacy rows
    async fn service_name(&self, reference: &str) -> AppResult<String> {
        let catalog = ServiceCatalog::new(self.repository.services.list(true).await?);
        Ok(catalog
            .resolve(reference)
            .map(|service| service.name.clone())
            .unwrap_or_else(|| reference.to_string()))
    }

    /// Create a booking from the public form.
    ///
    /// The availability check here is authoritative for this request, but
    /// the slot uniqueness index has the last word: of two racing
    /// submissions the second one receives the retryable conflict.
    pub async fn create(&self, request: CreateBooking) -> AppResult<Booking> {
        request
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let date = parse_date(&request.date)
            .ok_or_else(|| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
        let time = parse_slot_time(&request.time).ok_or_else(|| {
            AppError::Validation("Invalid time (use HH:MM on the 15-minute grid)".to_string())
        })?;

        let catalog = ServiceCatalog::new(self.repository.services.list(true).await?);
        let service = catalog
            .resolve(&request.service)
            .ok_or_else(|| AppError::Validation("Unknown service".to_string()))?;
        if !service.active {
            return Err(AppError::Validation(
                "Service is not available for booking".to_string(),
            ));
        }
        // normalize the stored reference to the stable id
        let service_ref = service.id.to_string();
        let service_name = service.name.clone();

        self.availability
            .assert_bookable(date, time, &service_ref, None)
            .await?;

        let booking = self
            .repository
            .bookings
            .create(&NewBooking {
                date,
                time,
                service_ref,
                client_name: request.client_name,
                client_email: request.client_email,
                client_phone: request.client_phone,
                notes: request.notes,
            })
            .await?;

        // notifications are best-effort; the booking stands either way
        if let Err(e) = self.email.send_booking_received(&booking, &service_name).await {
            tracing::warn!("Failed to send booking-received email: {}", e);
        }
        if let Err(e) = self.email.notify_staff_new_booking(&booking, &service_name).await {
            tracing::warn!("Failed to send staff notification: {}", e);
        }

        self.emit(BookingEventKind::Created, &booking);
        Ok(booking)
    }

    /// Confirm a pending booking (admin)
    pub async fn confirm(&self, id: i32) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        match booking.status {
            BookingStatus::Pending => {}
            BookingStatus::Confirmed => {
                return Err(AppError::BusinessRule(
                    "Booking is already confirmed".to_string(),
                ))
            }
            BookingStatus::Cancelled => {
                return Err(AppError::BusinessRule(
                    "Cancelled bookings cannot be confirmed".to_string(),
                ))
            }
        }

        let booking = self
            .repository
            .bookings
            .update_status(id, BookingStatus::Confirmed)
            .await?;

        let service_name = self.service_name(&booking.service_ref).await?;
        if let Err(e) = self.email.send_booking_confirmed(&booking, &service_name).await {
            tracing::warn!("Failed to send confirmation email: {}", e);
        }

        self.emit(BookingEventKind::Confirmed, &booking);
        Ok(booking)
    }

    /// Cancel a booking (admin). Cancelled is terminal.
    pub async fn cancel(&self, id: i32) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::BusinessRule(
                "Booking is already cancelled".to_string(),
            ));
        }

        let booking = self
            .repository
            .bookings
            .update_status(id, BookingStatus::Cancelled)
            .await?;

        let service_name = self.service_name(&booking.service_ref).await?;
        if let Err(e) = self.email.send_booking_cancelled(&booking, &service_name).await {
            tracing::warn!("Failed to send cancellation email: {}", e);
        }

        self.emit(BookingEventKind::Cancelled, &booking);
        Ok(booking)
    }

    /// Cancel a booking through its public reference (client self-service)
    pub async fn cancel_by_reference(&self, reference: Uuid) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_reference(reference).await?;
        self.cancel(booking.id).await
    }

    /// Move a booking to another slot (admin). The booking is excluded from
    /// its own occupancy, so re-submitting its current slot is accepted.
    pub async fn reschedule(&self, id: i32, request: RescheduleBooking) -> AppResult<Booking> {
        let booking = self.repository.bookings.get_by_id(id).await?;
        if booking.status == BookingStatus::Cancelled {
            return Err(AppError::BusinessRule(
                "Cancelled bookings cannot be rescheduled".to_string(),
            ));
        }

        let date = parse_date(&request.date)
            .ok_or_else(|| AppError::Validation("Invalid date (use YYYY-MM-DD)".to_string()))?;
        let time = parse_slot_time(&request.time).ok_or_else(|| {
            AppError::Validation("Invalid time (use HH:MM on the 15-minute grid)".to_string())
        })?;

        self.availability
            .assert_bookable(date, time, &booking.service_ref, Some(id))
            .await?;

        let booking = self.repository.bookings.reschedule(id, date, time).await?;

        self.emit(BookingEventKind::Rescheduled, &booking);
        Ok(booking)
    }

    /// Admin booking list with optional date/status filters
    pub async fn list(&self, query: &BookingQuery) -> AppResult<Vec<Booking>> {
        let date = match &query.date {
            Some(s) => Some(
                parse_date(s)
                    .ok_or_else(|| AppError::Validation("Invalid date filter".to_string()))?,
            ),
            None => None,
        };
        let status = match &query.status {
            Some(s) => Some(s.parse::<BookingStatus>().map_err(|_| {
                AppError::Validation(
                    "Invalid status filter (pending|confirmed|cancelled)".to_string(),
                )
            })?),
            None => None,
        };

        self.repository.bookings.list(date, status).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Booking> {
        self.repository.bookings.get_by_id(id).await
    }

    /// Client-facing lookup by the reference from the confirmation email
    pub async fn get_by_reference(&self, reference: Uuid) -> AppResult<Booking> {
        self.repository.bookings.get_by_reference(reference).await
    }
}
