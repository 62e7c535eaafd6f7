pub mod blog_posts;
pub mod health;
pub mod services;
pub mod social_media_posts;
pub mod team_members;
pub mod testimonials;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /blog-posts                  list, create
/// /blog-posts/{id}             get, update, delete
///
/// /team-members                list, create
/// /team-members/{id}           get, update, delete
///
/// /testimonials                list (?active=true), create
/// /testimonials/{id}           get, update, delete
///
/// /services                    list, create
/// /services/{id}               get, update, delete
///
/// /social-media-posts          list (seeded when empty), create
/// /social-media-posts/{id}     get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/blog-posts", blog_posts::router())
        .nest("/team-members", team_members::router())
        .nest("/testimonials", testimonials::router())
        .nest("/services", services::router())
        .nest("/social-media-posts", social_media_posts::router())
}
