//! Route definitions for `/api/blog-posts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::blog_posts;
use crate::state::AppState;

/// Routes mounted at `/blog-posts`.
///
/// ```text
/// GET    /        -> list_blog_posts
/// POST   /        -> create_blog_post
/// GET    /{id}    -> get_blog_post
/// PUT    /{id}    -> update_blog_post
/// DELETE /{id}    -> delete_blog_post
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(blog_posts::list_blog_posts).post(blog_posts::create_blog_post),
        )
        .route(
            "/{id}",
            get(blog_posts::get_blog_post)
                .put(blog_posts::update_blog_post)
                .delete(blog_posts::delete_blog_post),
        )
}
