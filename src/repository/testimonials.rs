//! Testimonials repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial},
};

#[derive(Clone)]
pub struct TestimonialsRepository {
    pool: Pool<Postgres>,
}

impl TestimonialsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List testimonials, newest first
    pub async fn list(&self, published_only: bool) -> AppResult<Vec<Testimonial>> {
        let query = if published_only {
            "SELECT * FROM testimonials WHERE published ORDER BY crea_date DESC"
        } else {
            "SELECT * FROM testimonials ORDER BY crea_date DESC"
        };
        let rows = sqlx::query_as::<_, Testimonial>(query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    /// Get a testimonial by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Testimonial> {
        sqlx::query_as::<_, Testimonial>("SELECT * FROM testimonials WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    /// Create a testimonial
    pub async fn create(&self, data: &CreateTestimonial) -> AppResult<Testimonial> {
        let row = sqlx::query_as::<_, Testimonial>(
            r#"
            INSERT INTO testimonials (author_name, quote, rating, published)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&data.author_name)
        .bind(&data.quote)
        .bind(data.rating)
        .bind(data.published.unwrap_or(false))
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Update a testimonial
    pub async fn update(&self, id: i32, data: &UpdateTestimonial) -> AppResult<Testimonial> {
        let mut sets = Vec::new();
        let mut idx = 1;

        if data.author_name.is_some() { sets.push(format!("author_name = ${}", idx)); idx += 1; }
        if data.quote.is_some() { sets.push(format!("quote = ${}", idx)); idx += 1; }
        if data.rating.is_some() { sets.push(format!("rating = ${}", idx)); idx += 1; }
        if data.published.is_some() { sets.push(format!("published = ${}", idx)); }

        if sets.is_empty() {
            return self.get_by_id(id).await;
        }

        let query = format!(
            "UPDATE testimonials SET {} WHERE id = {} RETURNING *",
            sets.join(", "),
            id
        );

        let mut builder = sqlx::query_as::<_, Testimonial>(&query);
        if let Some(ref author_name) = data.author_name { builder = builder.bind(author_name); }
        if let Some(ref quote) = data.quote { builder = builder.bind(quote); }
        if let Some(rating) = data.rating { builder = builder.bind(rating); }
        if let Some(published) = data.published { builder = builder.bind(published); }

        builder
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Testimonial {} not found", id)))
    }

    /// Delete a testimonial
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Testimonial {} not found", id)));
        }
        Ok(())
    }
}
