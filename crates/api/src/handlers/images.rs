//! Handlers for uploaded image management under `/admin`.

use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::services::images::{ImageError, OrphanedImage, UploadedImage};
use crate::state::AppState;

/// Confirmation body for a deleted image.
#[derive(Debug, Serialize)]
pub struct DeletedImage {
    pub filename: String,
    pub message: &'static str,
}

/// POST /api/admin/upload
///
/// Accepts a multipart form with a required `file` field; other fields are
/// ignored.
pub async fn upload(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    mut multipart: Multipart,
) -> AppResult<Json<DataResponse<UploadedImage>>> {
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) = file_data.ok_or(ImageError::MissingFile)?;
    let uploaded = state.images.save(&filename, &data).await?;
    Ok(Json(DataResponse { data: uploaded }))
}

/// GET /api/admin/images/orphaned
pub async fn list_orphaned(
    State(state): State<AppState>,
    _admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Vec<OrphanedImage>>>> {
    let orphans = state.images.list_orphaned().await?;
    Ok(Json(DataResponse { data: orphans }))
}

/// DELETE /api/admin/images/{filename}
pub async fn delete(
    State(state): State<AppState>,
    _admin: AuthAdmin,
    Path(filename): Path<String>,
) -> AppResult<Json<DataResponse<DeletedImage>>> {
    state.images.delete(&filename).await?;
    Ok(Json(DataResponse {
        data: DeletedImage {
            filename,
            message: "Image deleted",
        },
    }))
}
