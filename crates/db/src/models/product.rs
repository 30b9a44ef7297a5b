//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row};
use tienda_core::types::{DbId, Timestamp};

use crate::string_list;

/// A catalog product.
///
/// Array attributes are decoded from their JSON TEXT columns on read; a
/// malformed column yields an empty list rather than a failed row.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: String,
    /// Price in currency minor units (cents).
    pub price: i64,
    pub category: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub gender: String,
    pub oversize: bool,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

impl<'r> FromRow<'r, SqliteRow> for Product {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let text = |col: &str| -> Result<String, sqlx::Error> {
            Ok(row.try_get::<Option<String>, _>(col)?.unwrap_or_default())
        };
        let list = |col: &str| -> Result<Vec<String>, sqlx::Error> {
            Ok(string_list::decode(
                row.try_get::<Option<String>, _>(col)?.as_deref(),
            ))
        };
        let flag = |col: &str| -> Result<bool, sqlx::Error> {
            Ok(row.try_get::<Option<i64>, _>(col)?.unwrap_or(0) == 1)
        };

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: text("description")?,
            price: row.try_get("price")?,
            category: text("category")?,
            images: list("images")?,
            tags: list("tags")?,
            sizes: list("sizes")?,
            colors: list("colors")?,
            gender: text("gender")?,
            oversize: flag("oversize")?,
            featured: flag("featured")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }
}

/// DTO for creating a new product.
///
/// Missing fields take their zero value; name and price are then rejected by
/// the catalog service if left empty/zero.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CreateProduct {
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub images: Vec<String>,
    pub tags: Vec<String>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub gender: String,
    pub oversize: bool,
    pub featured: bool,
}

/// DTO for a partial product update.
///
/// `None` leaves the column untouched; `Some` sets it, including to an empty
/// string, zero, or an empty list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<i64>,
    pub category: Option<String>,
    pub images: Option<Vec<String>>,
    pub tags: Option<Vec<String>>,
    pub sizes: Option<Vec<String>>,
    pub colors: Option<Vec<String>>,
    pub gender: Option<String>,
    pub oversize: Option<bool>,
    pub featured: Option<bool>,
}
