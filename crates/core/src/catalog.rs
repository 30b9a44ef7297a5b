//! Catalog business rules: product validation and listing-parameter normalization.
//!
//! Everything here is storage-agnostic. The repository layer turns the
//! normalized values into SQL; handlers use [`total_pages`] for pagination
//! metadata.

use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination defaults
// ---------------------------------------------------------------------------

/// Default number of products per page.
pub const DEFAULT_PAGE_LIMIT: i64 = 20;

/// Maximum number of products per page.
pub const MAX_PAGE_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns a product listing may be ordered by.
///
/// Anything outside this allow-list falls back to [`SortKey::CreatedAt`]
/// rather than erroring, so a stale or hand-typed `?sort=` never breaks the
/// listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Price,
    #[default]
    CreatedAt,
}

impl SortKey {
    /// Parse a user-supplied sort key, falling back to `created_at`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("name") => SortKey::Name,
            Some("price") => SortKey::Price,
            _ => SortKey::CreatedAt,
        }
    }

    /// The column this key orders by. Always a static identifier, never user text.
    pub fn column(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::Price => "price",
            SortKey::CreatedAt => "created_at",
        }
    }
}

/// Listing direction. Descending unless `asc` is asked for explicitly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some("asc") => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Listing parameters
// ---------------------------------------------------------------------------

/// Raw listing parameters as they arrive on the query string
/// (`?page=&limit=&search=&category=&sort=&order=`).
///
/// `page` and `limit` that do not parse as integers are treated as unset.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductFilters {
    #[serde(default, deserialize_with = "lenient_i64")]
    pub page: Option<i64>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Fully normalized listing parameters. Every field is within bounds, so the
/// repository can use them without further checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParams {
    pub page: i64,
    pub limit: i64,
    /// `None` when the search term is missing or empty.
    pub search: Option<String>,
    /// `None` when the category is missing or empty.
    pub category: Option<String>,
    pub sort: SortKey,
    pub order: SortOrder,
}

impl ListingParams {
    /// Rows to skip: `(page - 1) * limit`, saturating for absurd page numbers.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl From<&ProductFilters> for ListingParams {
    fn from(filters: &ProductFilters) -> Self {
        Self {
            page: clamp_page(filters.page),
            limit: clamp_limit(filters.limit),
            search: non_empty(filters.search.as_deref()),
            category: non_empty(filters.category.as_deref()),
            sort: SortKey::parse(filters.sort.as_deref()),
            order: SortOrder::parse(filters.order.as_deref()),
        }
    }
}

fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|v| v.trim().parse().ok()))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

/// Clamp a requested page size. Missing or non-positive values use the
/// default; oversized values are capped at [`MAX_PAGE_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    match limit {
        Some(l) if l > 0 => l.min(MAX_PAGE_LIMIT),
        _ => DEFAULT_PAGE_LIMIT,
    }
}

/// Clamp a requested page number to at least 1.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Number of pages needed to show `total` items at `limit` per page.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A product name must be non-empty.
pub fn validate_product_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("name is required".into()));
    }
    Ok(())
}

/// Prices are integer minor units and must be strictly positive.
pub fn validate_price(price: i64) -> Result<(), CoreError> {
    if price <= 0 {
        return Err(CoreError::Validation(
            "price must be greater than 0".into(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
