//! HTTP-level integration tests for login and bearer-token enforcement.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request, StatusCode};
use common::{
    body_json, create_admin, post_json, post_json_auth, send, test_jwt_config, TEST_SECRET,
};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use sqlx::SqlitePool;
use tienda_api::auth::jwt::{Claims, TokenAuthority};

fn product_body() -> serde_json::Value {
    serde_json::json!({ "name": "Shirt", "price": 5000 })
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_success_returns_token_and_profile(pool: SqlitePool) {
    let admin = create_admin(&pool, "root", "s3cret-pass").await;
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "username": "root", "password": "s3cret-pass" });
    let response = post_json(app, "/api/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = &json["data"];
    assert!(data["token"].is_string());
    assert!(data["expires_at"].is_string());
    assert_eq!(data["user"]["id"], admin.id);
    assert_eq!(data["user"]["username"], "root");
    assert_eq!(data["user"]["role"], "admin");
    assert!(data["user"].get("password_hash").is_none());

    let claims = TokenAuthority::new(&test_jwt_config())
        .validate(data["token"].as_str().unwrap())
        .expect("issued token must validate");
    assert_eq!(claims.admin_id, admin.id);
    assert_eq!(claims.username, "root");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_and_unknown_user_are_indistinguishable(pool: SqlitePool) {
    create_admin(&pool, "root", "s3cret-pass").await;
    let app = common::build_test_app(pool);

    let wrong_pw = post_json(
        app.clone(),
        "/api/auth/login",
        serde_json::json!({ "username": "root", "password": "nope" }),
    )
    .await;
    let unknown = post_json(
        app,
        "/api/auth/login",
        serde_json::json!({ "username": "ghost", "password": "nope" }),
    )
    .await;

    assert_eq!(wrong_pw.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);

    let wrong_pw = body_json(wrong_pw).await;
    let unknown = body_json(unknown).await;
    assert_eq!(wrong_pw, unknown);
    assert_eq!(wrong_pw["code"], "INVALID_CREDENTIALS");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_credentials_are_rejected(pool: SqlitePool) {
    create_admin(&pool, "root", "s3cret-pass").await;
    let app = common::build_test_app(pool);

    for body in [
        serde_json::json!({ "username": "", "password": "s3cret-pass" }),
        serde_json::json!({ "username": "root", "password": "" }),
        serde_json::json!({}),
    ] {
        let response = post_json(app.clone(), "/api/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "INVALID_CREDENTIALS");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_token_authorizes_protected_routes(pool: SqlitePool) {
    create_admin(&pool, "root", "s3cret-pass").await;
    let app = common::build_test_app(pool);

    let login = post_json(
        app.clone(),
        "/api/auth/login",
        serde_json::json!({ "username": "root", "password": "s3cret-pass" }),
    )
    .await;
    let token = body_json(login).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = post_json_auth(app, "/api/products", product_body(), &token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Bearer token enforcement
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_token_is_rejected_before_the_handler(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());

    let response = post_json(app, "/api/products", product_body()).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0, "nothing may be written without a token");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_scheme_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let token = common::test_token();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Token {token}"))
        .body(Body::from(product_body().to_string()))
        .unwrap();
    let response = send(app, request).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn expired_token_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        admin_id: 1,
        username: "root".into(),
        role: "admin".into(),
        iat: now - 7200,
        exp: now - 60,
    };
    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .unwrap();

    let response = post_json_auth(app, "/api/products", product_body(), &token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_signed_with_another_secret_is_rejected(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let forged = TokenAuthority::new(&tienda_api::auth::jwt::JwtConfig {
        secret: "some-other-secret-that-is-32-bytes-long".into(),
        expiry_hours: 1,
    })
    .generate(&tienda_db::models::admin::AdminInfo {
        id: 1,
        username: "root".into(),
        role: "admin".into(),
    })
    .unwrap();

    let response = post_json_auth(app, "/api/products", product_body(), &forged.token).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
