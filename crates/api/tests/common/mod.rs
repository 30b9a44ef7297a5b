#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use tienda_api::auth::jwt::{JwtConfig, TokenAuthority};
use tienda_api::auth::password::hash_password;
use tienda_api::config::{ServerConfig, UploadConfig};
use tienda_api::router::build_app_router;
use tienda_api::state::AppState;
use tienda_db::models::admin::{Admin, AdminInfo, CreateAdmin};
use tienda_db::repositories::AdminRepo;

pub const TEST_SECRET: &str = "integration-test-secret-at-least-32-bytes";
pub const TEST_BASE_URL: &str = "http://localhost:3000";
pub const MAX_UPLOAD_BYTES: usize = 1024;

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        expiry_hours: 1,
    }
}

/// Build a test `ServerConfig` with safe defaults and a small upload limit.
pub fn test_config(upload_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "sqlite::memory:".to_string(),
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        upload: UploadConfig {
            dir: upload_dir.to_path_buf(),
            max_size_bytes: MAX_UPLOAD_BYTES,
            base_url: TEST_BASE_URL.to_string(),
        },
        jwt: test_jwt_config(),
        default_admin: None,
    }
}

/// Build the full application router, with uploads going to a shared scratch
/// directory. Tests that write files should use [`build_test_app_with_uploads`].
pub fn build_test_app(pool: SqlitePool) -> Router {
    let dir: PathBuf = std::env::temp_dir().join("tienda-api-tests-uploads");
    build_test_app_with_uploads(pool, &dir)
}

/// Build the full application router with the same middleware stack
/// production uses.
pub fn build_test_app_with_uploads(pool: SqlitePool, upload_dir: &Path) -> Router {
    let state = AppState::new(pool, test_config(upload_dir));
    build_app_router(state)
}

/// A bearer token signed with the test secret. The admin need not exist.
pub fn test_token() -> String {
    let admin = AdminInfo {
        id: 1,
        username: "tester".to_string(),
        role: "admin".to_string(),
    };
    TokenAuthority::new(&test_jwt_config())
        .generate(&admin)
        .expect("token generation should succeed")
        .token
}

/// Insert an admin with the given plaintext password.
pub async fn create_admin(pool: &SqlitePool, username: &str, password: &str) -> Admin {
    let input = CreateAdmin {
        username: username.to_string(),
        password_hash: hash_password(password).expect("hashing should succeed"),
        role: None,
    };
    AdminRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    json_request(app, Method::POST, uri, body, None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_request(app, Method::POST, uri, body, Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_request(app, Method::PUT, uri, body, Some(token)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response<Body> {
    json_request(app, Method::PATCH, uri, body, Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn json_request(
    app: Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
    token: Option<&str>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = builder.body(Body::from(body.to_string())).unwrap();
    send(app, request).await
}

/// POST a single-file multipart form under the field name `field`.
pub async fn post_multipart_auth(
    app: Router,
    uri: &str,
    field: &str,
    filename: &str,
    data: &[u8],
    token: &str,
) -> Response<Body> {
    const BOUNDARY: &str = "tienda-test-boundary";

    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}
