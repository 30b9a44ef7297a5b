//! Handlers for the `/products` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use tienda_core::catalog::ProductFilters;
use tienda_core::types::DbId;
use tienda_db::models::product::{CreateProduct, Product, UpdateProduct};

use crate::error::AppResult;
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::services::catalog::ProductPage;
use crate::state::AppState;

/// GET /api/products
///
/// Public. Query params: `page`, `limit`, `search`, `category`, `sort`, `order`.
pub async fn list(
    State(state): State<AppState>,
    Query(filters): Query<ProductFilters>,
) -> AppResult<Json<DataResponse<ProductPage>>> {
    let page = state.catalog.get_products(&filters).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = state.catalog.get_product(id).await?;
    Ok(Json(DataResponse { data: product }))
}

/// POST /api/products
pub async fn create(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Json(input): Json<CreateProduct>,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    let product = state.catalog.create_product(&input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: product })))
}

/// PUT|PATCH /api/products/{id}
///
/// Both verbs apply a partial update; omitted fields are left unchanged.
pub async fn update(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = state.catalog.update_product(id, &input).await?;
    Ok(Json(DataResponse { data: product }))
}

/// DELETE /api/products/{id}
///
/// Soft delete. Returns 204 No Content on success.
pub async fn delete(
    State(state): State<AppState>,
    admin: AuthAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    state.catalog.delete_product(id).await?;
    tracing::debug!(product_id = id, admin_id = admin.admin_id, "Delete requested by admin");
    Ok(StatusCode::NO_CONTENT)
}
