//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::services::auth::{LoginRequest, LoginResponse};
use crate::state::AppState;

/// POST /api/auth/login
///
/// Authenticate with username + password. Returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<LoginResponse>>> {
    let response = state.auth.login(&input).await?;
    Ok(Json(DataResponse { data: response }))
}
