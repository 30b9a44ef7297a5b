//! Tests for `AppError` → HTTP response mapping.
//!
//! These call `IntoResponse` directly on `AppError` values; no server needed.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use tienda_api::error::AppError;
use tienda_api::services::images::ImageError;
use tienda_core::error::CoreError;

/// Convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// CoreError variants
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 42 not found");
}

#[tokio::test]
async fn validation_error_returns_400() {
    let err = AppError::Core(CoreError::Validation("price must be greater than 0".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "price must be greater than 0");
}

#[tokio::test]
async fn invalid_credentials_returns_401_with_fixed_message() {
    let (status, json) = error_to_response(CoreError::InvalidCredentials.into()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "INVALID_CREDENTIALS");
    assert_eq!(json["error"], "Invalid username or password");
}

#[tokio::test]
async fn invalid_token_hides_the_reason() {
    let err = AppError::Core(CoreError::InvalidToken("ExpiredSignature".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid or expired token");
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    for err in [
        AppError::Core(CoreError::Internal("secret detail".into())),
        AppError::InternalError("stack trace".into()),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

// ---------------------------------------------------------------------------
// HTTP and storage errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad form".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad form");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn image_in_use_returns_409() {
    let (status, json) = error_to_response(ImageError::InUse("a.png".into()).into()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Image 'a.png' is still used by a product");
}

#[tokio::test]
async fn image_errors_map_to_client_statuses() {
    let cases = [
        (ImageError::MissingFile, StatusCode::BAD_REQUEST),
        (ImageError::UnsupportedType("a.txt".into()), StatusCode::BAD_REQUEST),
        (ImageError::TooLarge { size: 10, max: 5 }, StatusCode::BAD_REQUEST),
        (ImageError::UnsafeName("../x".into()), StatusCode::BAD_REQUEST),
        (ImageError::InUse("a.png".into()), StatusCode::CONFLICT),
        (ImageError::NotFound("a.png".into()), StatusCode::NOT_FOUND),
    ];

    for (err, expected) in cases {
        let (status, _) = error_to_response(err.into()).await;
        assert_eq!(status, expected);
    }
}

#[tokio::test]
async fn unsupported_type_lists_allowed_extensions() {
    let (_, json) = error_to_response(ImageError::UnsupportedType("a.txt".into()).into()).await;

    assert_eq!(
        json["error"],
        "Unsupported image type 'a.txt'. Allowed: jpg, jpeg, png, gif, webp"
    );
}

#[tokio::test]
async fn image_io_error_is_internal() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let (status, json) = error_to_response(ImageError::Io(io).into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}
