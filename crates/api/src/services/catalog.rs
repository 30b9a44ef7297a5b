//! Product catalog operations with input validation.
//!
//! Validation runs before any storage access, so a rejected request never
//! touches the database.

use serde::Serialize;
use tienda_core::catalog::{self, ListingParams, ProductFilters};
use tienda_core::error::CoreError;
use tienda_core::types::DbId;
use tienda_db::models::product::{CreateProduct, Product, UpdateProduct};
use tienda_db::repositories::ProductRepo;
use tienda_db::DbPool;

use crate::error::AppResult;

/// Entity name used in `NotFound` errors.
const PRODUCT: &str = "Product";

/// Pagination metadata returned alongside a product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub pages: i64,
}

/// One page of products plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

#[derive(Clone)]
pub struct CatalogService {
    pool: DbPool,
}

impl CatalogService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// List visible products matching `filters`, normalizing page and limit.
    pub async fn get_products(&self, filters: &ProductFilters) -> AppResult<ProductPage> {
        let params = ListingParams::from(filters);
        let (products, total) = ProductRepo::list(&self.pool, &params).await?;

        Ok(ProductPage {
            products,
            pagination: Pagination {
                page: params.page,
                limit: params.limit,
                total,
                pages: catalog::total_pages(total, params.limit),
            },
        })
    }

    pub async fn get_product(&self, id: DbId) -> AppResult<Product> {
        let product = ProductRepo::find_by_id(&self.pool, id)
            .await?
            .ok_or(CoreError::NotFound {
                entity: PRODUCT,
                id,
            })?;
        Ok(product)
    }

    /// Create a product. Name must be non-empty and price positive.
    pub async fn create_product(&self, input: &CreateProduct) -> AppResult<Product> {
        catalog::validate_product_name(&input.name)?;
        catalog::validate_price(input.price)?;

        let product = ProductRepo::create(&self.pool, input).await?;
        tracing::info!(product_id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Apply a partial update. Only `price` is validated, and only when present.
    pub async fn update_product(&self, id: DbId, input: &UpdateProduct) -> AppResult<Product> {
        if let Some(price) = input.price {
            catalog::validate_price(price)?;
        }

        let product = ProductRepo::update(&self.pool, id, input)
            .await?
            .ok_or(CoreError::NotFound {
                entity: PRODUCT,
                id,
            })?;
        tracing::info!(product_id = id, "Product updated");
        Ok(product)
    }

    /// Soft-delete a product. Deleting an already-deleted product is `NotFound`.
    pub async fn delete_product(&self, id: DbId) -> AppResult<()> {
        if !ProductRepo::soft_delete(&self.pool, id).await? {
            return Err(CoreError::NotFound {
                entity: PRODUCT,
                id,
            }
            .into());
        }
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}
