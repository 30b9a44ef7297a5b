//! JWT access-token issuance and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. The signing
//! secret is loaded once at startup and never rotated while the process runs.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tienda_core::error::CoreError;
use tienda_core::types::{DbId, Timestamp};
use tienda_db::models::admin::AdminInfo;

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    pub admin_id: DbId,
    pub username: String,
    pub role: String,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in hours (default: 24).
    pub expiry_hours: i64,
}

/// Shortest accepted signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

/// Default token lifetime in hours.
const DEFAULT_EXPIRY_HOURS: i64 = 24;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default |
    /// |--------------------|----------|---------|
    /// | `JWT_SECRET`       | **yes**  | --      |
    /// | `JWT_EXPIRY_HOURS` | no       | `24`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is unset or shorter than [`MIN_SECRET_LEN`].
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(
            secret.len() >= MIN_SECRET_LEN,
            "JWT_SECRET must be at least {MIN_SECRET_LEN} characters"
        );

        let expiry_hours: i64 = std::env::var("JWT_EXPIRY_HOURS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_HOURS.to_string())
            .parse()
            .expect("JWT_EXPIRY_HOURS must be a valid i64");
        assert!(expiry_hours > 0, "JWT_EXPIRY_HOURS must be positive");

        Self {
            secret,
            expiry_hours,
        }
    }
}

/// A freshly signed token and the moment it stops being accepted.
#[derive(Debug, Clone, Serialize)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: Timestamp,
}

/// Signs and verifies access tokens with a single shared secret.
///
/// Built once from [`JwtConfig`] and shared behind an `Arc`. Validation always
/// pins HS256 and allows no clock leeway on `exp`.
#[derive(Clone)]
pub struct TokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: chrono::Duration,
}

impl TokenAuthority {
    pub fn new(config: &JwtConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            ttl: chrono::Duration::hours(config.expiry_hours),
        }
    }

    /// Issue a token for `admin`, valid for the configured number of hours.
    pub fn generate(&self, admin: &AdminInfo) -> Result<IssuedToken, CoreError> {
        let issued_at = Utc::now();
        let expires_at = issued_at + self.ttl;

        let claims = Claims {
            admin_id: admin.id,
            username: admin.username.clone(),
            role: admin.role.clone(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| CoreError::Internal(format!("Token signing failed: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Verify signature, algorithm, structure, and expiry, returning the claims.
    pub fn validate(&self, token: &str) -> Result<Claims, CoreError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| CoreError::InvalidToken(e.to_string()))
    }
}
