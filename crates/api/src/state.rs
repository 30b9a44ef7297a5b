use std::sync::Arc;

use crate::auth::jwt::TokenAuthority;
use crate::config::ServerConfig;
use crate::services::auth::AuthService;
use crate::services::catalog::CatalogService;
use crate::services::images::ImageService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: the pool and every service hold only `Arc`s or pool handles.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: tienda_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    pub catalog: CatalogService,
    pub auth: AuthService,
    pub images: ImageService,
}

impl AppState {
    /// Wire every service to the same pool and configuration.
    pub fn new(pool: tienda_db::DbPool, config: ServerConfig) -> Self {
        let tokens = Arc::new(TokenAuthority::new(&config.jwt));

        Self {
            catalog: CatalogService::new(pool.clone()),
            auth: AuthService::new(pool.clone(), tokens),
            images: ImageService::new(pool.clone(), config.upload.clone()),
            pool,
            config: Arc::new(config),
        }
    }
}
