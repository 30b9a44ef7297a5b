//! Codec for ordered string lists stored in TEXT columns.
//!
//! `images`, `tags`, `sizes` and `colors` are persisted as JSON arrays.
//! Callers above the repository layer only ever see `Vec<String>`.

/// Serialize a list for storage. An empty list is stored as `[]`, never NULL.
pub fn encode(items: &[String]) -> String {
    serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string())
}

/// Parse a stored list. NULL, empty, `null`, or malformed text yields an empty
/// list instead of failing the read.
pub fn decode(raw: Option<&str>) -> Vec<String> {
    match raw.map(str::trim) {
        Some(text) if !text.is_empty() => {
            serde_json::from_str::<Option<Vec<String>>>(text)
                .ok()
                .flatten()
                .unwrap_or_default()
        }
        _ => Vec::new(),
    }
}
