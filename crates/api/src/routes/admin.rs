//! Route definitions for admin-only image management.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::images;
use crate::state::AppState;

/// Routes mounted at `/admin`. Every handler requires a bearer token.
///
/// ```text
/// POST   /upload                 -> upload
/// GET    /images/orphaned        -> list_orphaned
/// DELETE /images/{filename}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/upload", post(images::upload))
        .route("/images/orphaned", get(images::list_orphaned))
        .route("/images/{filename}", delete(images::delete))
}
