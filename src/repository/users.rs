//! Staff accounts repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{enums::StaffRole, user::StaffUser},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get a staff account by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<StaffUser> {
        sqlx::query_as::<_, StaffUser>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Get a staff account by login
    pub async fn get_by_login(&self, login: &str) -> AppResult<Option<StaffUser>> {
        let user = sqlx::query_as::<_, StaffUser>("SELECT * FROM users WHERE login = $1")
            .bind(login)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// List all staff accounts
    pub async fn list(&self) -> AppResult<Vec<StaffUser>> {
        let rows = sqlx::query_as::<_, StaffUser>("SELECT * FROM users ORDER BY login")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Create a staff account with an already-hashed password
    pub async fn create(
        &self,
        login: &str,
        password_hash: &str,
        display_name: &str,
        email: Option<&str>,
        role: StaffRole,
    ) -> AppResult<StaffUser> {
        sqlx::query_as::<_, StaffUser>(
            r#"
            INSERT INTO users (login, password_hash, display_name, email, role, status)
            VALUES ($1, $2, $3, $4, $5, 0)
            RETURNING *
            "#,
        )
        .bind(login)
        .bind(password_hash)
        .bind(display_name)
        .bind(email)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match &err {
            sqlx::Error::Database(db) if db.constraint() == Some("users_login_key") => {
                AppError::Conflict("Login already exists".to_string())
            }
            _ => AppError::from(err),
        })
    }

    /// Update a staff account; `password_hash` replaces the stored hash when
    /// set
    pub async fn update(
        &self,
        id: i32,
        password_hash: Option<&str>,
        display_name: Option<&str>,
        email: Option<&str>,
        role: Option<StaffRole>,
        status: Option<i16>,
    ) -> AppResult<StaffUser> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if password_hash.is_some() { sets.push(format!("password_hash = ${}", idx)); idx += 1; }
        if display_name.is_some() { sets.push(format!("display_name = ${}", idx)); idx += 1; }
        if email.is_some() { sets.push(format!("email = ${}", idx)); idx += 1; }
        if role.is_some() { sets.push(format!("role = ${}", idx)); idx += 1; }
        if status.is_some() { sets.push(format!("status = ${}", idx)); }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE users SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, StaffUser>(&query);
        if let Some(hash) = password_hash { builder = builder.bind(hash); }
        if let Some(name) = display_name { builder = builder.bind(name); }
        if let Some(email) = email { builder = builder.bind(email); }
        if let Some(role) = role { builder = builder.bind(role); }
        if let Some(status) = status { builder = builder.bind(status); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("User {} not found", id)))
    }

    /// Delete a staff account
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("User {} not found", id)));
        }
        Ok(())
    }

    /// Count staff accounts
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
