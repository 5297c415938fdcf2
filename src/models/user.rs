//! Staff account model and JWT claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use crate::error::AppError;

use super::enums::StaffRole;

/// Account status values stored in `users.status`
pub const STATUS_ACTIVE: i16 = 0;
pub const STATUS_BLOCKED: i16 = 1;

// ---------------------------------------------------------------------------
// StaffUser
// ---------------------------------------------------------------------------

/// A back-office staff account
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct StaffUser {
    pub id: i32,
    /// Login (username), unique
    pub login: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub display_name: String,
    pub email: Option<String>,
    pub role: StaffRole,
    /// 0 = active, 1 = blocked
    pub status: i16,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create staff account request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStaffUser {
    #[validate(length(min = 3, message = "Login must be at least 3 characters"))]
    pub login: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, message = "Display name is required"))]
    pub display_name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<StaffRole>,
}

/// Update staff account request (admin only)
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStaffUser {
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: Option<String>,
    pub display_name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub role: Option<StaffRole>,
    pub status: Option<i16>,
}

// ---------------------------------------------------------------------------
// UserClaims
// ---------------------------------------------------------------------------

/// JWT claims carried by staff bearer tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserClaims {
    pub sub: String,
    pub user_id: i32,
    pub role: StaffRole,
    pub exp: i64,
    pub iat: i64,
}

impl UserClaims {
    /// Create a new JWT token
    pub fn create_token(&self, secret: &str) -> Result<String, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{encode, EncodingKey, Header};
        encode(
            &Header::default(),
            self,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
    }

    /// Parse JWT token
    pub fn from_token(token: &str, secret: &str) -> Result<Self, jsonwebtoken::errors::Error> {
        use jsonwebtoken::{decode, DecodingKey, Validation};
        let token_data = decode::<Self>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )?;
        Ok(token_data.claims)
    }

    /// Admin-only operations (staff account management)
    pub fn require_admin(&self) -> Result<(), AppError> {
        if self.role == StaffRole::Admin {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Admin role required".to_string(),
            ))
        }
    }
}
