pub mod admin;
pub mod auth;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /products                          list (public), create (auth)
/// /products/{id}                     get (public), update PUT/PATCH, delete (auth)
///
/// /auth/login                        login (public)
///
/// /admin/upload                      upload image (auth)
/// /admin/images/orphaned             list unreferenced images (auth)
/// /admin/images/{filename}           delete unreferenced image (auth)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/products", products::router())
        .nest("/auth", auth::router())
        .nest("/admin", admin::router())
}
