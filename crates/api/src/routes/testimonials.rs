//! Route definitions for `/api/testimonials`.

use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`.
///
/// ```text
/// GET    /        -> list_testimonials (`?active=true` filters)
/// POST   /        -> create_testimonial
/// GET    /{id}    -> get_testimonial
/// PUT    /{id}    -> update_testimonial
/// DELETE /{id}    -> delete_testimonial
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(testimonials::list_testimonials).post(testimonials::create_testimonial),
        )
        .route(
            "/{id}",
            get(testimonials::get_testimonial)
                .put(testimonials::update_testimonial)
                .delete(testimonials::delete_testimonial),
        )
}
