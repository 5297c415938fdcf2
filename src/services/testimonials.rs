//! Testimonials service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
    repository::Repository,
};

#[derive(Clone)]
pub struct TestimonialsService {
    repository: Repository,
}

impl TestimonialsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Published testimonials for the public site
    pub async fn list_published(&self) -> AppResult<Vec<Testimonial>> {
        self.repository.testimonials.list(true).await
    }

    /// All testimonials (admin)
    pub async fn list_all(&self) -> AppResult<Vec<Testimonial>> {
        self.repository.testimonials.list(false).await
    }

    pub async fn create(&self, data: CreateTestimonial) -> AppResult<Testimonial> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.testimonials.create(&data).await
    }

    pub async fn update(&self, id: i32, data: UpdateTestimonial) -> AppResult<Testimonial> {
        data.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        self.repository.testimonials.update(id, &data).await
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        self.repository.testimonials.delete(id).await
    }
}
