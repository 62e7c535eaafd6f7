//! Route definitions for `/api/social-media-posts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::social_media_posts;
use crate::state::AppState;

/// Routes mounted at `/social-media-posts`.
///
/// ```text
/// GET    /        -> list_social_media_posts
/// POST   /        -> create_social_media_post
/// GET    /{id}    -> get_social_media_post
/// PUT    /{id}    -> update_social_media_post
/// DELETE /{id}    -> delete_social_media_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(social_media_posts::list_social_media_posts).post(social_media_posts::create_social_media_post),
        )
        .route(
            "/{id}",
            get(social_media_posts::get_social_media_post)
                .put(social_media_posts::update_social_media_post)
                .delete(social_media_posts::delete_social_media_post),
        )
}
