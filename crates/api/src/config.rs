use std::path::PathBuf;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// SQLite connection URL (default: `sqlite://data/tienda.db`).
    pub database_url: String,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Image upload storage settings.
    pub upload: UploadConfig,
    /// JWT token configuration (secret, expiry).
    pub jwt: JwtConfig,
    /// Credentials for the admin created on first start, if any.
    pub default_admin: Option<DefaultAdmin>,
}

/// Where uploaded images live and how they are addressed.
#[derive(Debug, Clone)]
pub struct UploadConfig {
    /// Directory uploaded files are written to and served from.
    pub dir: PathBuf,
    /// Largest accepted image, in bytes.
    pub max_size_bytes: usize,
    /// Public URL prefix; an image URL is `{base_url}/uploads/{filename}`.
    pub base_url: String,
}

/// Username and plaintext password for the bootstrap admin account.
#[derive(Clone)]
pub struct DefaultAdmin {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for DefaultAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefaultAdmin")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

const BYTES_PER_MB: usize = 1024 * 1024;

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `DATABASE_URL`         | `sqlite://data/tienda.db`  |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `UPLOAD_DIR`           | `./uploads`                |
    /// | `MAX_UPLOAD_SIZE_MB`   | `5`                        |
    /// | `BASE_URL`             | `http://localhost:3000`    |
    /// | `ADMIN_USERNAME`       | unset                      |
    /// | `ADMIN_PASSWORD`       | unset                      |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/tienda.db".into());

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let max_upload_mb: usize = std::env::var("MAX_UPLOAD_SIZE_MB")
            .unwrap_or_else(|_| "5".into())
            .parse()
            .expect("MAX_UPLOAD_SIZE_MB must be a valid usize");

        let upload = UploadConfig {
            dir: std::env::var("UPLOAD_DIR")
                .unwrap_or_else(|_| "./uploads".into())
                .into(),
            max_size_bytes: max_upload_mb * BYTES_PER_MB,
            base_url: std::env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".into())
                .trim_end_matches('/')
                .to_string(),
        };

        let default_admin = match (
            non_empty_var("ADMIN_USERNAME"),
            non_empty_var("ADMIN_PASSWORD"),
        ) {
            (Some(username), Some(password)) => Some(DefaultAdmin { username, password }),
            _ => None,
        };

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            database_url,
            cors_origins,
            request_timeout_secs,
            upload,
            jwt,
            default_admin,
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
