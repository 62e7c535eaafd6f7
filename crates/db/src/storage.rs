//! Storage facade used by the HTTP API.
//!
//! [`ContentStorage`] wraps an optional, lazily-connecting pool:
//!
//! - no connection string configured: reads return empty results, writes
//!   fail with [`StorageError::NotConnected`];
//! - configured but failing: read errors are logged and degrade to empty
//!   results, write errors propagate;
//! - social media posts additionally fall back to [`seed::social_media_posts`]
//!   whenever the store yields nothing.

use smilecare_core::types::DbId;

use crate::models::blog_post::{BlogPost, CreateBlogPost, UpdateBlogPost};
use crate::models::service::{CreateService, Service, UpdateService};
use crate::models::social_media_post::{
    CreateSocialMediaPost, SocialMediaPost, UpdateSocialMediaPost,
};
use crate::models::team_member::{CreateTeamMember, TeamMember, UpdateTeamMember};
use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use crate::repositories::{
    BlogPostRepo, ServiceRepo, SocialMediaPostRepo, TeamMemberRepo, TestimonialRepo,
};
use crate::{seed, DbPool};

/// Errors surfaced by write operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No database connection string was configured.
    #[error("Database not connected")]
    NotConnected,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Content persistence with graceful degradation for reads.
///
/// Cheap to clone: the pool is reference-counted internally.
#[derive(Clone, Default)]
pub struct ContentStorage {
    pool: Option<DbPool>,
}

impl ContentStorage {
    /// Storage without a database. Reads are empty, writes fail.
    pub fn unconfigured() -> Self {
        Self { pool: None }
    }

    /// Storage over an existing pool.
    pub fn with_pool(pool: DbPool) -> Self {
        Self { pool: Some(pool) }
    }

    /// Build storage from an optional connection string.
    ///
    /// The pool connects on first use. A missing or unparseable URL yields
    /// unconfigured storage.
    pub fn connect_lazy(database_url: Option<&str>) -> Self {
        let Some(url) = database_url.map(str::trim).filter(|u| !u.is_empty()) else {
            tracing::warn!("DATABASE_URL not set, content storage is running without a database");
            return Self::unconfigured();
        };

        match crate::create_lazy_pool(url) {
            Ok(pool) => Self::with_pool(pool),
            Err(err) => {
                tracing::error!(error = %err, "Invalid DATABASE_URL, content storage disabled");
                Self::unconfigured()
            }
        }
    }

    pub fn is_configured(&self) -> bool {
        self.pool.is_some()
    }

    pub fn pool(&self) -> Option<&DbPool> {
        self.pool.as_ref()
    }

    /// `Ok(())` when the database answers, `NotConnected` when unconfigured.
    pub async fn health_check(&self) -> Result<(), StorageError> {
        crate::health_check(self.connected()?).await?;
        Ok(())
    }

    fn connected(&self) -> Result<&DbPool, StorageError> {
        self.pool.as_ref().ok_or(StorageError::NotConnected)
    }

    // -----------------------------------------------------------------------
    // Blog posts
    // -----------------------------------------------------------------------

    pub async fn list_blog_posts(&self) -> Vec<BlogPost> {
        let Some(pool) = &self.pool else {
            return Vec::new();
        };
        BlogPostRepo::list(pool)
            .await
            .unwrap_or_else(|err| degraded("blog_posts", &err))
    }

    pub async fn find_blog_post(&self, id: DbId) -> Option<BlogPost> {
        let pool = self.pool.as_ref()?;
        BlogPostRepo::find_by_id(pool, id)
            .await
            .unwrap_or_else(|err| degraded("blog_posts", &err))
    }

    pub async fn create_blog_post(&self, dto: &CreateBlogPost) -> Result<BlogPost, StorageError> {
        Ok(BlogPostRepo::create(self.connected()?, dto).await?)
    }

    pub async fn update_blog_post(
        &self,
        id: DbId,
        dto: &UpdateBlogPost,
    ) -> Result<Option<BlogPost>, StorageError> {
        Ok(BlogPostRepo::update(self.connected()?, id, dto).await?)
    }

    pub async fn delete_blog_post(&self, id: DbId) -> Result<bool, StorageError> {
        Ok(BlogPostRepo::delete(self.connected()?, id).await?)
    }

    // -----------------------------------------------------------------------
    // Team members
    // -----------------------------------------------------------------------

    pub async fn list_team_members(&self) -> Vec<TeamMember> {
        let Some(pool) = &self.pool else {
            return Vec::new();
        };
        TeamMemberRepo::list(pool)
            .await
            .unwrap_or_else(|err| degraded("team_members", &err))
    }

    pub async fn find_team_member(&self, id: DbId) -> Option<TeamMember> {
        let pool = self.pool.as_ref()?;
        TeamMemberRepo::find_by_id(pool, id)
            .await
            .unwrap_or_else(|err| degraded("team_members", &err))
    }

    pub async fn create_team_member(
        &self,
        dto: &CreateTeamMember,
    ) -> Result<TeamMember, StorageError> {
        Ok(TeamMemberRepo::create(self.connected()?, dto).await?)
    }

    pub async fn update_team_member(
        &self,
        id: DbId,
        dto: &UpdateTeamMember,
    ) -> Result<Option<TeamMember>, StorageError> {
        Ok(TeamMemberRepo::update(self.connected()?, id, dto).await?)
    }

    pub async fn delete_team_member(&self, id: DbId) -> Result<bool, StorageError> {
        Ok(TeamMemberRepo::delete(self.connected()?, id).await?)
    }

    // -----------------------------------------------------------------------
    // Testimonials
    // -----------------------------------------------------------------------

    pub async fn list_testimonials(&self, active_only: bool) -> Vec<Testimonial> {
        let Some(pool) = &self.pool else {
            return Vec::new();
        };
        TestimonialRepo::list(pool, active_only)
            .await
            .unwrap_or_else(|err| degraded("testimonials", &err))
    }

    pub async fn find_testimonial(&self, id: DbId) -> Option<Testimonial> {
        let pool = self.pool.as_ref()?;
        TestimonialRepo::find_by_id(pool, id)
            .await
            .unwrap_or_else(|err| degraded("testimonials", &err))
    }

    pub async fn create_testimonial(
        &self,
        dto: &CreateTestimonial,
    ) -> Result<Testimonial, StorageError> {
        Ok(TestimonialRepo::create(self.connected()?, dto).await?)
    }

    pub async fn update_testimonial(
        &self,
        id: DbId,
        dto: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, StorageError> {
        Ok(TestimonialRepo::update(self.connected()?, id, dto).await?)
    }

    pub async fn delete_testimonial(&self, id: DbId) -> Result<bool, StorageError> {
        Ok(TestimonialRepo::delete(self.connected()?, id).await?)
    }

    // -----------------------------------------------------------------------
    // Services
    // -----------------------------------------------------------------------

    pub async fn list_services(&self) -> Vec<Service> {
        let Some(pool) = &self.pool else {
            return Vec::new();
        };
        ServiceRepo::list(pool)
            .await
            .unwrap_or_else(|err| degraded("services", &err))
    }

    pub async fn find_service(&self, id: DbId) -> Option<Service> {
        let pool = self.pool.as_ref()?;
        ServiceRepo::find_by_id(pool, id)
            .await
            .unwrap_or_else(|err| degraded("services", &err))
    }

    pub async fn create_service(&self, dto: &CreateService) -> Result<Service, StorageError> {
        Ok(ServiceRepo::create(self.connected()?, dto).await?)
    }

    pub async fn update_service(
        &self,
        id: DbId,
        dto: &UpdateService,
    ) -> Result<Option<Service>, StorageError> {
        Ok(ServiceRepo::update(self.connected()?, id, dto).await?)
    }

    pub async fn delete_service(&self, id: DbId) -> Result<bool, StorageError> {
        Ok(ServiceRepo::delete(self.connected()?, id).await?)
    }

    // -----------------------------------------------------------------------
    // Social media posts
    // -----------------------------------------------------------------------

    /// Active posts by display order, or the seed list if there are none.
    pub async fn list_social_media_posts(&self) -> Vec<SocialMediaPost> {
        let posts = match &self.pool {
            Some(pool) => SocialMediaPostRepo::list_active(pool)
                .await
                .unwrap_or_else(|err| degraded("social_media_posts", &err)),
            None => Vec::new(),
        };

        if posts.is_empty() {
            tracing::debug!("No stored social media posts, serving seed list");
            return seed::social_media_posts();
        }
        posts
    }

    /// Look up a post.
    ///
    /// The seed list is searched under the same conditions that make
    /// [`Self::list_social_media_posts`] serve it: no database, a failing
    /// read, or no active stored posts.
    pub async fn find_social_media_post(&self, id: DbId) -> Option<SocialMediaPost> {
        if let Some(pool) = &self.pool {
            match SocialMediaPostRepo::find_by_id(pool, id).await {
                Ok(Some(post)) => return Some(post),
                Ok(None) => {
                    if has_active_social_posts(pool).await {
                        return None;
                    }
                }
                Err(err) => {
                    degraded::<()>("social_media_posts", &err);
                }
            }
        }
        seed::social_media_posts().into_iter().find(|p| p.id == id)
    }

    pub async fn create_social_media_post(
        &self,
        dto: &CreateSocialMediaPost,
    ) -> Result<SocialMediaPost, StorageError> {
        Ok(SocialMediaPostRepo::create(self.connected()?, dto).await?)
    }

    pub async fn update_social_media_post(
        &self,
        id: DbId,
        dto: &UpdateSocialMediaPost,
    ) -> Result<Option<SocialMediaPost>, StorageError> {
        Ok(SocialMediaPostRepo::update(self.connected()?, id, dto).await?)
    }

    pub async fn delete_social_media_post(&self, id: DbId) -> Result<bool, StorageError> {
        Ok(SocialMediaPostRepo::delete(self.connected()?, id).await?)
    }
}

/// Whether the list endpoint would serve stored posts rather than the seed.
async fn has_active_social_posts(pool: &DbPool) -> bool {
    SocialMediaPostRepo::list_active(pool)
        .await
        .map(|posts| !posts.is_empty())
        .unwrap_or_else(|err| degraded("social_media_posts", &err))
}

/// Log a failed read and substitute the empty value.
fn degraded<T: Default>(table: &'static str, err: &sqlx::Error) -> T {
    tracing::warn!(table, error = %err, "Content read failed, serving empty result");
    T::default()
}
