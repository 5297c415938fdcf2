//! Testimonial models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A client testimonial shown on the public site once published
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Testimonial {
    pub id: i32,
    pub author_name: String,
    pub quote: String,
    /// Star rating, 1 to 5
    pub rating: i16,
    pub published: bool,
    pub crea_date: Option<DateTime<Utc>>,
}

/// Create testimonial request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTestimonial {
    #[validate(length(min = 2, max = 120, message = "Author name must be 2 to 120 characters"))]
    pub author_name: String,
    #[validate(length(min = 1, max = 1000, message = "Quote must be 1 to 1000 characters"))]
    pub quote: String,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: i16,
    pub published: Option<bool>,
}

/// Update testimonial request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTestimonial {
    #[validate(length(min = 2, max = 120, message = "Author name must be 2 to 120 characters"))]
    pub author_name: Option<String>,
    #[validate(length(min = 1, max = 1000, message = "Quote must be 1 to 1000 characters"))]
    pub quote: Option<String>,
    #[validate(range(min = 1, max = 5, message = "Rating must be between 1 and 5"))]
    pub rating: Option<i16>,
    pub published: Option<bool>,
}
