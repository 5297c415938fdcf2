//! Authentication and staff account service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use validator::Validate;

use crate::{
    config::AuthConfig,
    error::{AppError, AppResult},
    models::{
        enums::StaffRole,
        user::{CreateStaffUser, StaffUser, UpdateStaffUser, UserClaims, STATUS_BLOCKED},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
    config: AuthConfig,
}

impl UsersService {
    pub fn new(repository: Repository, config: AuthConfig) -> Self {
        Self { repository, config }
    }

    /// Authenticate a staff login and return a JWT token with the user
    pub async fn authenticate(&self, login: &str, password: &str) -> AppResult<(String, StaffUser)> {
        let user = self
            .repository
            .users
            .get_by_login(login)
            .await?
            .ok_or_else(|| AppError::Authentication("Invalid login or password".to_string()))?;

        if user.status == STATUS_BLOCKED {
            return Err(AppError::Authentication("Account is blocked".to_string()));
        }

        if !self.verify_password(&user, password)? {
            return Err(AppError::Authentication("Invalid login or password".to_string()));
        }

        let now = Utc::now().timestamp();
        let exp = now + (self.config.jwt_expiration_hours as i64 * 3600);

        let claims = UserClaims {
            sub: user.login.clone(),
            user_id: user.id,
            role: user.role,
            exp,
            iat: now,
        };

        let token = claims
            .create_token(&self.config.jwt_secret)
            .map_err(|e| AppError::Internal(format!("Failed to create token: {}", e)))?;

        Ok((token, user))
    }

    /// Get the account behind a set of claims
    pub async fn me(&self, user_id: i32) -> AppResult<StaffUser> {
        self.repository.users.get_by_id(user_id).await
    }

    /// List staff accounts (admin)
    pub async fn list(&self) -> AppResult<Vec<StaffUser>> {
        self.repository.users.list().await
    }

    /// Create a staff account (admin)
    pub async fn create(&self, data: CreateStaffUser) -> AppResult<StaffUser> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hash = self.hash_password(&data.password)?;
        self.repository
            .users
            .create(
                &data.login,
                &hash,
                &data.display_name,
                data.email.as_deref(),
                data.role.unwrap_or(StaffRole::Staff),
            )
            .await
    }

    /// Update a staff account (admin)
    pub async fn update(&self, id: i32, data: UpdateStaffUser) -> AppResult<StaffUser> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        let hash = match &data.password {
            Some(password) => Some(self.hash_password(password)?),
            None => None,
        };

        self.repository
            .users
            .update(
                id,
                hash.as_deref(),
                data.display_name.as_deref(),
                data.email.as_deref(),
                data.role,
                data.status,
            )
            .await
    }

    /// Delete a staff account (admin); the last account cannot be removed
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.repository.users.count().await? <= 1 {
            return Err(AppError::BusinessRule(
                "Cannot delete the last staff account".to_string(),
            ));
        }
        self.repository.users.delete(id).await
    }

    /// Create the bootstrap admin account when the users table is empty
    pub async fn ensure_default_admin(&self) -> AppResult<()> {
        if self.repository.users.count().await? > 0 {
            return Ok(());
        }

        let hash = self.hash_password("admin")?;
        self.repository
            .users
            .create("admin", &hash, "Administrator", None, StaffRole::Admin)
            .await?;

        tracing::warn!("Created default admin account 'admin'; change its password immediately");
        Ok(())
    }

    fn verify_password(&self, user: &StaffUser, password: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Invalid password hash: {}", e)))?;
        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    pub fn hash_password(&self, password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(format!("Failed to hash password: {}", e)))?;
        Ok(hash.to_string())
    }
}
