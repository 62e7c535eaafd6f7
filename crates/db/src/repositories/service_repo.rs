//! Repository for the `services` table.

use smilecare_core::types::DbId;
use sqlx::PgPool;

use crate::models::service::{CreateService, Service, UpdateService};

/// Column list for `services` queries.
const COLUMNS: &str = "\
    id, title, title_ro, title_ru, title_en, \
    description, description_ro, description_ru, description_en, \
    features, translations, price, icon, order_index, \
    created_at, updated_at";

/// Provides CRUD operations for clinic services.
pub struct ServiceRepo;

impl ServiceRepo {
    /// List all services by `order_index`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services ORDER BY order_index, id");
        sqlx::query_as::<_, Service>(&query).fetch_all(pool).await
    }

    /// Find a service by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Service>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM services WHERE id = $1");
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new service, returning the created row.
    pub async fn create(pool: &PgPool, dto: &CreateService) -> Result<Service, sqlx::Error> {
        let query = format!(
            "INSERT INTO services \
                 (title, title_ro, title_ru, title_en, \
                  description, description_ro, description_ru, description_en, \
                  features, translations, price, icon, order_index) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, \
                     COALESCE($9, '{{}}'::text[]), COALESCE($10, '{{}}'::jsonb), \
                     $11, $12, COALESCE($13, 0)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(dto.title.as_deref().unwrap_or_default())
            .bind(&dto.title_ro)
            .bind(&dto.title_ru)
            .bind(&dto.title_en)
            .bind(&dto.description)
            .bind(&dto.description_ro)
            .bind(&dto.description_ru)
            .bind(&dto.description_en)
            .bind(&dto.features)
            .bind(&dto.translations)
            .bind(&dto.price)
            .bind(&dto.icon)
            .bind(dto.order_index)
            .fetch_one(pool)
            .await
    }

    /// Partially update a service. Returns `None` if the ID is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateService,
    ) -> Result<Option<Service>, sqlx::Error> {
        let query = format!(
            "UPDATE services SET \
                 title = COALESCE($2, title), \
                 title_ro = COALESCE($3, title_ro), \
                 title_ru = COALESCE($4, title_ru), \
                 title_en = COALESCE($5, title_en), \
                 description = COALESCE($6, description), \
                 description_ro = COALESCE($7, description_ro), \
                 description_ru = COALESCE($8, description_ru), \
                 description_en = COALESCE($9, description_en), \
                 features = COALESCE($10, features), \
                 translations = COALESCE($11, translations), \
                 price = COALESCE($12, price), \
                 icon = COALESCE($13, icon), \
                 order_index = COALESCE($14, order_index) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .bind(&dto.title)
            .bind(&dto.title_ro)
            .bind(&dto.title_ru)
            .bind(&dto.title_en)
            .bind(&dto.description)
            .bind(&dto.description_ro)
            .bind(&dto.description_ru)
            .bind(&dto.description_en)
            .bind(&dto.features)
            .bind(&dto.translations)
            .bind(&dto.price)
            .bind(&dto.icon)
            .bind(dto.order_index)
            .fetch_optional(pool)
            .await
    }

    /// Delete a service by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
