//! Opening-hours repository for database operations

use chrono::NaiveTime;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::schedule::OpeningHoursRow,
};

#[derive(Clone)]
pub struct SchedulesRepository {
    pool: Pool<Postgres>,
}

impl SchedulesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// All seven weekday rows, Monday first
    pub async fn get_week(&self) -> AppResult<Vec<OpeningHoursRow>> {
        let rows = sqlx::query_as::<_, OpeningHoursRow>(
            "SELECT weekday, open_time, close_time, closed FROM opening_hours ORDER BY weekday"
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Insert or replace the hours for one weekday
    pub async fn upsert_day(
        &self,
        weekday: i16,
        open: NaiveTime,
        close: NaiveTime,
        closed: bool,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO opening_hours (weekday, open_time, close_time, closed)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (weekday)
            DO UPDATE SET open_time = $2, close_time = $3, closed = $4
            "#,
        )
        .bind(weekday)
        .bind(open)
        .bind(close)
        .bind(closed)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
