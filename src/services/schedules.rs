//! Opening-hours service

use chrono::NaiveTime;

use crate::{
    error::{AppError, AppResult},
    models::schedule::{UpdateOpeningHours, WeeklySchedule, WEEKDAY_NAMES},
    repository::Repository,
    scheduling::parse_slot_time,
};

#[derive(Clone)]
pub struct SchedulesService {
    repository: Repository,
}

impl SchedulesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// The weekly schedule, Monday first
    pub async fn get_week(&self) -> AppResult<WeeklySchedule> {
        let rows = self.repository.schedules.get_week().await?;
        Ok(WeeklySchedule::from_rows(&rows))
    }

    /// Update opening hours. Days absent from the request keep their rows.
    ///
    /// Times must sit on the 15-minute grid and satisfy `open < close` for
    /// any day that is not closed.
    pub async fn update(&self, request: UpdateOpeningHours) -> AppResult<WeeklySchedule> {
        for (name, input) in &request.days {
            let weekday = WEEKDAY_NAMES
                .iter()
                .position(|candidate| candidate == name)
                .ok_or_else(|| {
                    AppError::Validation(format!("Unknown weekday key '{}'", name))
                })? as i16;

            let (open, close) = if input.closed {
                (NaiveTime::MIN, NaiveTime::MIN)
            } else {
                let open = input
                    .open
                    .as_deref()
                    .and_then(parse_slot_time)
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "Invalid open time for {} (use HH:MM on the 15-minute grid)",
                            name
                        ))
                    })?;
                let close = input
                    .close
                    .as_deref()
                    .and_then(parse_slot_time)
                    .ok_or_else(|| {
                        AppError::Validation(format!(
                            "Invalid close time for {} (use HH:MM on the 15-minute grid)",
                            name
                        ))
                    })?;
                if open >= close {
                    return Err(AppError::Validation(format!(
                        "Opening time must be before closing time for {}",
                        name
                    )));
                }
                (open, close)
            };

            self.repository
                .schedules
                .upsert_day(weekday, open, close, input.closed)
                .await?;
        }

        self.get_week().await
    }
}
