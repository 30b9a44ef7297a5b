//! Repository for the `products` table.

use chrono::Utc;
use sqlx::SqlitePool;
use tienda_core::catalog::ListingParams;
use tienda_core::types::DbId;

use super::product_query::{self, COLUMNS};
use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::string_list;

/// Provides listing, CRUD, and soft-delete operations for products.
///
/// All reads exclude soft-deleted rows.
pub struct ProductRepo;

impl ProductRepo {
    /// List one page of visible products plus the total number of matches
    /// before pagination.
    pub async fn list(
        pool: &SqlitePool,
        params: &ListingParams,
    ) -> Result<(Vec<Product>, i64), sqlx::Error> {
        let total: i64 = product_query::count_query(params)
            .build_query_scalar::<i64>()
            .fetch_one(pool)
            .await?;

        let products = product_query::page_query(params)
            .build_query_as::<Product>()
            .fetch_all(pool)
            .await?;

        Ok((products, total))
    }

    /// Find a product by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = ? AND deleted_at IS NULL");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product and return it as re-read from the database.
    pub async fn create(pool: &SqlitePool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO products
                (name, description, price, category, images, tags, sizes, colors,
                 gender, oversize, featured, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(input.price)
        .bind(&input.category)
        .bind(string_list::encode(&input.images))
        .bind(string_list::encode(&input.tags))
        .bind(string_list::encode(&input.sizes))
        .bind(string_list::encode(&input.colors))
        .bind(&input.gender)
        .bind(i64::from(input.oversize))
        .bind(i64::from(input.featured))
        .bind(now)
        .bind(now)
        .execute(pool)
        .await?;

        Self::find_by_id(pool, result.last_insert_rowid())
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Apply a partial update. Only `Some` fields in `input` are written and
    /// `updated_at` is always refreshed.
    ///
    /// Returns `None` if no visible row with the given `id` exists. The
    /// existence check and the write are one conditional statement, so a
    /// concurrent soft delete can never be silently overwritten.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let result = product_query::update_query(id, input, Utc::now())
            .build()
            .execute(pool)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }
        Self::find_by_id(pool, id).await
    }

    /// Soft-delete a product by ID. Returns `true` if a row was marked deleted.
    ///
    /// The row and any uploaded image files it references are left in place.
    pub async fn soft_delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let now = Utc::now();
        let result = sqlx::query(
            "UPDATE products SET deleted_at = ?, updated_at = ? \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(now)
        .bind(now)
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Every image URL referenced by a visible product, in no particular order.
    pub async fn list_image_urls(pool: &SqlitePool) -> Result<Vec<String>, sqlx::Error> {
        let columns: Vec<Option<String>> =
            sqlx::query_scalar("SELECT images FROM products WHERE deleted_at IS NULL")
                .fetch_all(pool)
                .await?;

        Ok(columns
            .iter()
            .flat_map(|raw| string_list::decode(raw.as_deref()))
            .collect())
    }
}
