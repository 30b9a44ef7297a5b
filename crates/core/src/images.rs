//! Rules for uploaded product images.
//!
//! Lives in `core` so the upload service and any future maintenance tooling
//! agree on what counts as an acceptable image filename.

/// File extensions accepted for upload (compared case-insensitively).
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// Return the lower-cased extension of `filename` if it is an allowed image type.
pub fn image_extension(filename: &str) -> Option<String> {
    let (stem, ext) = filename.rsplit_once('.')?;
    if stem.is_empty() {
        return None;
    }
    let ext = ext.to_ascii_lowercase();
    ALLOWED_IMAGE_EXTENSIONS
        .contains(&ext.as_str())
        .then_some(ext)
}

/// Reject names that could escape the upload directory.
pub fn is_safe_filename(filename: &str) -> bool {
    !filename.is_empty()
        && !filename.contains("..")
        && !filename.contains('/')
        && !filename.contains('\\')
}

/// Last path segment of an image URL (`https://host/uploads/a.png` -> `a.png`).
pub fn url_basename(url: &str) -> &str {
    url.rsplit(['/', '\\']).next().unwrap_or(url)
}
