//! Route definitions for the `/products` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET    /       -> list
/// POST   /       -> create (requires auth)
/// GET    /{id}   -> get_by_id
/// PUT    /{id}   -> update (requires auth)
/// PATCH  /{id}   -> update (requires auth)
/// DELETE /{id}   -> delete (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route(
            "/{id}",
            get(products::get_by_id)
                .put(products::update)
                .patch(products::update)
                .delete(products::delete),
        )
}
