//! Admin login and bearer-token checks.
//!
//! Every failed login surfaces as the same [`CoreError::InvalidCredentials`],
//! whether the username was unknown or the password wrong.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tienda_core::error::CoreError;
use tienda_core::types::Timestamp;
use tienda_db::models::admin::AdminInfo;
use tienda_db::repositories::AdminRepo;
use tienda_db::DbPool;

use crate::auth::jwt::{Claims, TokenAuthority};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};

/// Request body for `POST /api/auth/login`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful login: a bearer token plus the public admin profile.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub expires_at: Timestamp,
    pub user: AdminInfo,
}

#[derive(Clone)]
pub struct AuthService {
    pool: DbPool,
    tokens: Arc<TokenAuthority>,
}

impl AuthService {
    pub fn new(pool: DbPool, tokens: Arc<TokenAuthority>) -> Self {
        Self { pool, tokens }
    }

    /// Check credentials and issue a token.
    pub async fn login(&self, credentials: &LoginRequest) -> AppResult<LoginResponse> {
        if credentials.username.is_empty() || credentials.password.is_empty() {
            tracing::warn!("Login rejected: missing username or password");
            return Err(CoreError::InvalidCredentials.into());
        }

        let Some(admin) = AdminRepo::find_by_username(&self.pool, &credentials.username).await?
        else {
            tracing::warn!(username = %credentials.username, "Failed login attempt");
            return Err(CoreError::InvalidCredentials.into());
        };

        let password_valid = verify_password(&credentials.password, &admin.password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
        if !password_valid {
            tracing::warn!(username = %credentials.username, "Failed login attempt");
            return Err(CoreError::InvalidCredentials.into());
        }

        let user = AdminInfo::from(&admin);
        let issued = self.tokens.generate(&user)?;
        tracing::info!(admin_id = user.id, username = %user.username, "Admin logged in");

        Ok(LoginResponse {
            token: issued.token,
            expires_at: issued.expires_at,
            user,
        })
    }

    /// Validate a bearer token, returning its claims.
    pub fn validate_token(&self, token: &str) -> Result<Claims, CoreError> {
        self.tokens.validate(token)
    }
}
