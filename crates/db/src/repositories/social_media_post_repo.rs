//! Repository for the `social_media_posts` table.

use smilecare_core::types::DbId;
use sqlx::PgPool;

use crate::models::social_media_post::{
    CreateSocialMediaPost, SocialMediaPost, UpdateSocialMediaPost,
};

/// Column list for `social_media_posts` queries.
const COLUMNS: &str = "\
    id, platform, url, thumbnail_url, \
    caption, caption_ro, caption_ru, caption_en, \
    display_order, is_active, created_at, updated_at";

/// Provides CRUD operations for social media posts.
pub struct SocialMediaPostRepo;

impl SocialMediaPostRepo {
    /// List active posts by `display_order`.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<SocialMediaPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM social_media_posts \
             WHERE is_active = TRUE \
             ORDER BY display_order, id"
        );
        sqlx::query_as::<_, SocialMediaPost>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a post by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SocialMediaPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM social_media_posts WHERE id = $1");
        sqlx::query_as::<_, SocialMediaPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new post, returning the created row.
    pub async fn create(
        pool: &PgPool,
        dto: &CreateSocialMediaPost,
    ) -> Result<SocialMediaPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO social_media_posts \
                 (platform, url, thumbnail_url, caption, caption_ro, caption_ru, caption_en, \
                  display_order, is_active) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, COALESCE($8, 0), COALESCE($9, TRUE)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialMediaPost>(&query)
            .bind(&dto.platform)
            .bind(&dto.url)
            .bind(&dto.thumbnail_url)
            .bind(&dto.caption)
            .bind(&dto.caption_ro)
            .bind(&dto.caption_ru)
            .bind(&dto.caption_en)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_one(pool)
            .await
    }

    /// Partially update a post. Returns `None` if the ID is unknown.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateSocialMediaPost,
    ) -> Result<Option<SocialMediaPost>, sqlx::Error> {
        let query = format!(
            "UPDATE social_media_posts SET \
                 platform = COALESCE($2, platform), \
                 url = COALESCE($3, url), \
                 thumbnail_url = COALESCE($4, thumbnail_url), \
                 caption = COALESCE($5, caption), \
                 caption_ro = COALESCE($6, caption_ro), \
                 caption_ru = COALESCE($7, caption_ru), \
                 caption_en = COALESCE($8, caption_en), \
                 display_order = COALESCE($9, display_order), \
                 is_active = COALESCE($10, is_active) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SocialMediaPost>(&query)
            .bind(id)
            .bind(&dto.platform)
            .bind(&dto.url)
            .bind(&dto.thumbnail_url)
            .bind(&dto.caption)
            .bind(&dto.caption_ro)
            .bind(&dto.caption_ru)
            .bind(&dto.caption_en)
            .bind(dto.display_order)
            .bind(dto.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM social_media_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
