//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use tienda_core::error::CoreError;
use tienda_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Any valid token is sufficient; the role claim is carried along but not
/// checked. Add this as a handler parameter to protect the route:
///
/// ```ignore
/// async fn my_handler(admin: AuthAdmin) -> AppResult<Json<()>> {
///     tracing::info!(admin_id = admin.admin_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthAdmin {
    pub admin_id: DbId,
    pub username: String,
    pub role: String,
}

impl FromRequestParts<AppState> for AuthAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| CoreError::InvalidToken("Missing Authorization header".into()))?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            CoreError::InvalidToken(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            )
        })?;

        let claims = state.auth.validate_token(token)?;

        Ok(AuthAdmin {
            admin_id: claims.admin_id,
            username: claims.username,
            role: claims.role,
        })
    }
}
