//! Service catalog repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::service::{CreateService, SalonService, UpdateService},
};

#[derive(Clone)]
pub struct ServicesRepository {
    pool: Pool<Postgres>,
}

impl ServicesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List services ordered for display
    pub async fn list(&self, include_inactive: bool) -> AppResult<Vec<SalonService>> {
        let query = if include_inactive {
            r#"SELECT * FROM services ORDER BY "position", name"#
        } else {
            r#"SELECT * FROM services WHERE active ORDER BY "position", name"#
        };
        let rows = sqlx::query_as::<_, SalonService>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a service by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<SalonService> {
        sqlx::query_as::<_, SalonService>("SELECT * FROM services WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Create a service
    pub async fn create(&self, data: &CreateService) -> AppResult<SalonService> {
        sqlx::query_as::<_, SalonService>(
            r#"
            INSERT INTO services (name, description, duration_minutes, price, active, "position")
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.duration_minutes)
        .bind(data.price)
        .bind(data.active.unwrap_or(true))
        .bind(data.position.unwrap_or(0))
        .fetch_one(&self.pool)
        .await
        .map_err(map_name_conflict)
    }

    /// Update a service
    pub async fn update(&self, id: i32, data: &UpdateService) -> AppResult<SalonService> {
        let mut sets = vec!["modif_date = NOW()".to_string()];
        let mut idx = 1;

        if data.name.is_some() { sets.push(format!("name = ${}", idx)); idx += 1; }
        if data.description.is_some() { sets.push(format!("description = ${}", idx)); idx += 1; }
        if data.duration_minutes.is_some() { sets.push(format!("duration_minutes = ${}", idx)); idx += 1; }
        if data.price.is_some() { sets.push(format!("price = ${}", idx)); idx += 1; }
        if data.active.is_some() { sets.push(format!("active = ${}", idx)); idx += 1; }
        if data.position.is_some() { sets.push(format!("\"position\" = ${}", idx)); }

        let query = format!(
            "UPDATE services SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, SalonService>(&query);
        if let Some(ref name) = data.name { builder = builder.bind(name); }
        if let Some(ref description) = data.description { builder = builder.bind(description); }
        if let Some(duration) = data.duration_minutes { builder = builder.bind(duration); }
        if let Some(price) = data.price { builder = builder.bind(price); }
        if let Some(active) = data.active { builder = builder.bind(active); }
        if let Some(position) = data.position { builder = builder.bind(position); }

        builder
            .fetch_optional(&self.pool)
            .await
            .map_err(map_name_conflict)?
            .ok_or_else(|| AppError::NotFound(format!("Service {} not found", id)))
    }

    /// Delete a service
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Service {} not found", id)));
        }
        Ok(())
    }
}

fn map_name_conflict(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db) if db.constraint() == Some("services_name_key") => {
            AppError::Conflict("A service with this name already exists".to_string())
        }
        _ => AppError::from(err),
    }
}
