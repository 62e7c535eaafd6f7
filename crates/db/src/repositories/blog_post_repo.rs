//! Repository for the `blog_posts` table.

use smilecare_core::types::DbId;
use sqlx::PgPool;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};

/// Column list for `blog_posts` queries.
const COLUMNS: &str = "\
    id, slug, title, title_ro, title_ru, title_en, \
    excerpt, excerpt_ro, excerpt_ru, excerpt_en, \
    content, content_ro, content_ru, content_en, \
    image_url, author, category, published, published_at, \
    created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogPostRepo;

impl BlogPostRepo {
    /// List all blog posts, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM blog_posts \
             ORDER BY COALESCE(published_at, created_at) DESC, id DESC"
        );
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Find a blog post by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blog_posts WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new blog post, returning the created row.
    ///
    /// `published` defaults to `true`; `published_at` defaults to now for
    /// published posts.
    pub async fn create(pool: &PgPool, dto: &CreateBlogPost) -> Result<BlogPost, sqlx::Error> {
        let query = format!(
            "INSERT INTO blog_posts \
                 (slug, title, title_ro, title_ru, title_en, \
                  excerpt, excerpt_ro, excerpt_ru, excerpt_en, \
                  content, content_ro, content_ru, content_en, \
                  image_url, author, category, published, published_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, \
                     $14, $15, $16, COALESCE($17, TRUE), \
                     COALESCE($18, CASE WHEN COALESCE($17, TRUE) THEN NOW() END)) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(&dto.slug)
            .bind(dto.title.as_deref().unwrap_or_default())
            .bind(&dto.title_ro)
            .bind(&dto.title_ru)
            .bind(&dto.title_en)
            .bind(&dto.excerpt)
            .bind(&dto.excerpt_ro)
            .bind(&dto.excerpt_ru)
            .bind(&dto.excerpt_en)
            .bind(&dto.content)
            .bind(&dto.content_ro)
            .bind(&dto.content_ru)
            .bind(&dto.content_en)
            .bind(&dto.image_url)
            .bind(&dto.author)
            .bind(&dto.category)
            .bind(dto.published)
            .bind(dto.published_at)
            .fetch_one(pool)
            .await
    }

    /// Partially update a blog post.
    ///
    /// Uses `COALESCE` so only provided fields are changed. Returns `None`
    /// if no row has the given ID.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        dto: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!(
            "UPDATE blog_posts SET \
                 slug = COALESCE($2, slug), \
                 title = COALESCE($3, title), \
                 title_ro = COALESCE($4, title_ro), \
                 title_ru = COALESCE($5, title_ru), \
                 title_en = COALESCE($6, title_en), \
                 excerpt = COALESCE($7, excerpt), \
                 excerpt_ro = COALESCE($8, excerpt_ro), \
                 excerpt_ru = COALESCE($9, excerpt_ru), \
                 excerpt_en = COALESCE($10, excerpt_en), \
                 content = COALESCE($11, content), \
                 content_ro = COALESCE($12, content_ro), \
                 content_ru = COALESCE($13, content_ru), \
                 content_en = COALESCE($14, content_en), \
                 image_url = COALESCE($15, image_url), \
                 author = COALESCE($16, author), \
                 category = COALESCE($17, category), \
                 published = COALESCE($18, published), \
                 published_at = COALESCE($19, published_at) \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .bind(&dto.slug)
            .bind(&dto.title)
            .bind(&dto.title_ro)
            .bind(&dto.title_ru)
            .bind(&dto.title_en)
            .bind(&dto.excerpt)
            .bind(&dto.excerpt_ro)
            .bind(&dto.excerpt_ru)
            .bind(&dto.excerpt_en)
            .bind(&dto.content)
            .bind(&dto.content_ro)
            .bind(&dto.content_ru)
            .bind(&dto.content_en)
            .bind(&dto.image_url)
            .bind(&dto.author)
            .bind(&dto.category)
            .bind(dto.published)
            .bind(dto.published_at)
            .fetch_optional(pool)
            .await
    }

    /// Delete a blog post by ID. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blog_posts WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
