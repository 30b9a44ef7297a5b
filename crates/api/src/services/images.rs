//! Storage for uploaded product images.
//!
//! Files live flat in the configured upload directory and are addressed by
//! `{base_url}/uploads/{filename}`. An image is *orphaned* when no visible
//! product lists a URL ending in its filename.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use tienda_core::images::{
    image_extension, is_safe_filename, url_basename, ALLOWED_IMAGE_EXTENSIONS,
};
use tienda_core::types::Timestamp;
use tienda_db::repositories::ProductRepo;
use tienda_db::DbPool;
use uuid::Uuid;

use crate::config::UploadConfig;

#[derive(Debug, thiserror::Error)]
pub enum ImageError {
    #[error("Missing required 'file' field")]
    MissingFile,

    #[error(
        "Unsupported image type '{0}'. Allowed: {allowed}",
        allowed = ALLOWED_IMAGE_EXTENSIONS.join(", ")
    )]
    UnsupportedType(String),

    #[error("Image is {size} bytes; the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("Invalid filename '{0}'")]
    UnsafeName(String),

    #[error("Image '{0}' is still used by a product")]
    InUse(String),

    #[error("Image '{0}' not found")]
    NotFound(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("Image storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of a successful upload.
#[derive(Debug, Clone, Serialize)]
pub struct UploadedImage {
    pub url: String,
    pub filename: String,
    pub size: usize,
}

/// An uploaded file no visible product references.
#[derive(Debug, Clone, Serialize)]
pub struct OrphanedImage {
    pub filename: String,
    pub url: String,
    pub size: u64,
    /// Last modification time of the file, when the platform reports one.
    pub uploaded_at: Option<Timestamp>,
}

#[derive(Clone)]
pub struct ImageService {
    pool: DbPool,
    config: UploadConfig,
}

impl ImageService {
    pub fn new(pool: DbPool, config: UploadConfig) -> Self {
        Self { pool, config }
    }

    /// Public URL for a stored filename.
    pub fn url_for(&self, filename: &str) -> String {
        format!("{}/uploads/{filename}", self.config.base_url)
    }

    /// Store an uploaded image under a fresh, collision-free name.
    ///
    /// `original_name` is only consulted for its extension.
    pub async fn save(
        &self,
        original_name: &str,
        data: &[u8],
    ) -> Result<UploadedImage, ImageError> {
        let ext = image_extension(original_name)
            .ok_or_else(|| ImageError::UnsupportedType(original_name.to_string()))?;

        if data.len() > self.config.max_size_bytes {
            return Err(ImageError::TooLarge {
                size: data.len(),
                max: self.config.max_size_bytes,
            });
        }

        tokio::fs::create_dir_all(&self.config.dir).await?;

        let filename = format!(
            "{}_{}.{ext}",
            chrono::Utc::now().timestamp(),
            Uuid::new_v4()
        );
        tokio::fs::write(self.config.dir.join(&filename), data).await?;

        tracing::info!(filename = %filename, size = data.len(), "Image uploaded");

        Ok(UploadedImage {
            url: self.url_for(&filename),
            filename,
            size: data.len(),
        })
    }

    /// Files in the upload directory that no visible product points at,
    /// sorted by filename. A missing directory yields an empty list.
    pub async fn list_orphaned(&self) -> Result<Vec<OrphanedImage>, ImageError> {
        let referenced = self.referenced_filenames().await?;

        let mut entries = match tokio::fs::read_dir(&self.config.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut orphans = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let metadata = entry.metadata().await?;
            if !metadata.is_file() {
                continue;
            }
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };
            if referenced.contains(&filename) {
                continue;
            }

            orphans.push(OrphanedImage {
                url: self.url_for(&filename),
                size: metadata.len(),
                uploaded_at: metadata.modified().ok().map(Timestamp::from),
                filename,
            });
        }

        orphans.sort_by(|a, b| a.filename.cmp(&b.filename));
        Ok(orphans)
    }

    /// Remove an uploaded image that no visible product references.
    pub async fn delete(&self, filename: &str) -> Result<(), ImageError> {
        if !is_safe_filename(filename) {
            return Err(ImageError::UnsafeName(filename.to_string()));
        }

        if self.referenced_filenames().await?.contains(filename) {
            return Err(ImageError::InUse(filename.to_string()));
        }

        let path: PathBuf = self.config.dir.join(filename);
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(filename = %filename, "Image deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(ImageError::NotFound(filename.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn referenced_filenames(&self) -> Result<HashSet<String>, ImageError> {
        let urls = ProductRepo::list_image_urls(&self.pool).await?;
        Ok(urls
            .iter()
            .map(|url| url_basename(url).to_string())
            .collect())
    }
}
