//! Repository for the `testimonials` table.

use smilecare_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list for `testimonials` queries.
const COLUMNS: &str = "\
    id, patient_name, content, content_ro, content_ru, content_en, \
    rating, treatment, image_url, is_active, created_at, updated_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List testimonials, newest first. With `active_only`, inactive rows
    /// are excluded.
    pub async fn list(pool: &PgPool, active_only: bool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM testimonials \
             WHERE ($1 = FALSE OR is_active = TRUE) \
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(active_only)
            .fetch_all(pool)
            .await
    }

    /// Find a testimonial by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials \
                 (patient_name, content, content_ro, content_ru, content_en, \
                  rating, treatment, image_url, is_active) \
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, 5), $7, $8, COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&dto.patient_name)
            .bind(&dto.content)
            .bind(&dto.content_ro)
            .bind(&dto.content_ru)
            .bind(&dto.content_en)
            .bind(dto.rating)
            .bind(&dto.treatment)
            .bind(&dto.image_url)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a testimonial. Returns `None` if the ID is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET \
                 patient_name = COALESCE($2, patient_name), \
                 content = COALESCE($3, content), \
                 content_ro = COALESCE($4, content_ro), \
                 content_ru = COALESCE($5, content_ru), \
                 content_en = COALESCE($6, content_en), \
                 rating = COALESCE($7, rating), \
                 treatment = COALESCE($8, treatment), \
                 image_url = COALESCE($9, image_url), \
                 is_active = COALESCE($10, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&dto.patient_name)
            .bind(&dto.content)
            .bind(&dto.content_ro)
            .bind(&dto.content_ru)
            .bind(&dto.content_en)
            .bind(dto.rating)
            .bind(&dto.treatment)
            .bind(&dto.image_url)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
