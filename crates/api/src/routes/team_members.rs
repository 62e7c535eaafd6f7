//! Route definitions for `/api/team-members`.

use axum::routing::get;
use axum::Router;

use crate::handlers::team_members;
use crate::state::AppState;

/// Routes mounted at `/team-members`.
///
/// ```text
/// GET    /        -> list_team_members
/// POST   /        -> create_team_member
/// GET    /{id}    -> get_team_member
/// PUT    /{id}    -> update_team_member
/// DELETE /{id}    -> delete_team_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(team_members::list_team_members).post(team_members::create_team_member),
        )
        .route(
            "/{id}",
            get(team_members::get_team_member)
                .put(team_members::update_team_member)
                .delete(team_members::delete_team_member),
        )
}
