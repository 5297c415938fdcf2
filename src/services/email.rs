//! Email service for booking notifications

use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
    models::booking::Booking,
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Acknowledge a new booking request to the client
    pub async fn send_booking_received(&self, booking: &Booking, service_name: &str) -> AppResult<()> {
        let subject = "We received your booking request";
        let body = format!(
            r#"
Hi {name},

Thanks for your booking request!

  Service: {service}
  Date:    {date}
  Time:    {time}

Your request is awaiting confirmation - we will email you as soon as it is
confirmed. Your booking reference is {reference}.

If you didn't request this appointment, please ignore this email.
"#,
            name = booking.client_name,
            service = service_name,
            date = booking.date,
            time = booking.time.format("%H:%M"),
            reference = booking.reference,
        );

        self.send_email(&booking.client_email, subject, &body).await
    }

    /// Tell the client their booking is confirmed
    pub async fn send_booking_confirmed(&self, booking: &Booking, service_name: &str) -> AppResult<()> {
        let subject = "Your appointment is confirmed";
        let body = format!(
            r#"
Hi {name},

Your appointment is confirmed. See you soon!

  Service: {service}
  Date:    {date}
  Time:    {time}

If you need to change or cancel your appointment, reply to this email or
give us a call. Your booking reference is {reference}.
"#,
            name = booking.client_name,
            service = service_name,
            date = booking.date,
            time = booking.time.format("%H:%M"),
            reference = booking.reference,
        );

        self.send_email(&booking.client_email, subject, &body).await
    }

    /// Tell the client their booking was cancelled
    pub async fn send_booking_cancelled(&self, booking: &Booking, service_name: &str) -> AppResult<()> {
        let subject = "Your appointment was cancelled";
        let body = format!(
            r#"
Hi {name},

Your appointment has been cancelled:

  Service: {service}
  Date:    {date}
  Time:    {time}

You can book a new appointment on our website at any time.
"#,
            name = booking.client_name,
            service = service_name,
            date = booking.date,
            time = booking.time.format("%H:%M"),
        );

        self.send_email(&booking.client_email, subject, &body).await
    }

    /// Notify the salon mailbox about a new booking request
    pub async fn notify_staff_new_booking(&self, booking: &Booking, service_name: &str) -> AppResult<()> {
        let Some(ref notify_to) = self.config.notify_to else {
            return Ok(());
        };

        let subject = format!(
            "New booking request: {} on {}",
            service_name, booking.date
        );
        let body = format!(
            r#"
New booking request awaiting confirmation:

  Service: {service}
  Date:    {date}
  Time:    {time}
  Client:  {name} <{email}>
  Phone:   {phone}
  Notes:   {notes}
"#,
            service = service_name,
            date = booking.date,
            time = booking.time.format("%H:%M"),
            name = booking.client_name,
            email = booking.client_email,
            phone = booking.client_phone.as_deref().unwrap_or("-"),
            notes = booking.notes.as_deref().unwrap_or("-"),
        );

        self.send_email(notify_to, &subject, &body).await
    }

    /// Generic email sending function
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        if !self.config.enabled {
            tracing::debug!("Email disabled; skipping \"{}\" to {}", subject, to);
            return Ok(());
        }

        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Salonette");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::Internal(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(format!(
                                r#"<html><body><pre>{}</pre></body></html>"#,
                                body.replace('\n', "<br>")
                            )),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            // Use STARTTLS for secure connection
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) = (
            &self.config.smtp_username,
            &self.config.smtp_password,
        ) {
            mailer_builder.credentials(Credentials::new(
                username.clone(),
                password.clone(),
            ))
        } else {
            mailer_builder
        };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
