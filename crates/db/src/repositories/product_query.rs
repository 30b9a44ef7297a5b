//! SQL builders for the `products` table.
//!
//! Every optional predicate or assignment comes from a fixed set known at
//! compile time; user-supplied values only ever reach the statement through
//! `push_bind`. Column names in `ORDER BY` come from [`SortKey::column`].
//!
//! [`SortKey::column`]: tienda_core::catalog::SortKey::column

use sqlx::{QueryBuilder, Sqlite};
use tienda_core::catalog::ListingParams;
use tienda_core::types::{DbId, Timestamp};

use crate::models::product::UpdateProduct;
use crate::string_list;

/// Column list shared across queries to avoid repetition.
pub const COLUMNS: &str = "id, name, description, price, category, images, tags, sizes, colors, \
                           gender, oversize, featured, created_at, updated_at, deleted_at";

/// Append the `WHERE` clause for a listing: visible rows plus the optional
/// search and category predicates.
fn push_listing_filter(qb: &mut QueryBuilder<'_, Sqlite>, params: &ListingParams) {
    qb.push(" WHERE deleted_at IS NULL");

    if let Some(search) = &params.search {
        let pattern = format!("%{search}%");
        qb.push(" AND (name LIKE ")
            .push_bind(pattern.clone())
            .push(" OR description LIKE ")
            .push_bind(pattern)
            .push(")");
    }

    if let Some(category) = &params.category {
        qb.push(" AND category = ").push_bind(category.clone());
    }
}

/// `SELECT COUNT(*)` over the filtered set, ignoring pagination.
pub fn count_query(params: &ListingParams) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("SELECT COUNT(*) FROM products");
    push_listing_filter(&mut qb, params);
    qb
}

/// One page of the filtered, sorted set.
///
/// Ties on the sort column are not broken, so rows with equal keys may come
/// back in any order.
pub fn page_query(params: &ListingParams) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new(format!("SELECT {COLUMNS} FROM products"));
    push_listing_filter(&mut qb, params);
    qb.push(" ORDER BY ")
        .push(params.sort.column())
        .push(" ")
        .push(params.order.keyword())
        .push(" LIMIT ")
        .push_bind(params.limit)
        .push(" OFFSET ")
        .push_bind(params.offset());
    qb
}

/// Conditional partial update. Only present fields are assigned;
/// `updated_at` is always refreshed. Matches nothing if the row is missing
/// or soft-deleted.
pub fn update_query(
    id: DbId,
    input: &UpdateProduct,
    now: Timestamp,
) -> QueryBuilder<'static, Sqlite> {
    let mut qb = QueryBuilder::new("UPDATE products SET ");
    let mut set = qb.separated(", ");

    if let Some(name) = &input.name {
        set.push("name = ").push_bind_unseparated(name.clone());
    }
    if let Some(description) = &input.description {
        set.push("description = ")
            .push_bind_unseparated(description.clone());
    }
    if let Some(price) = input.price {
        set.push("price = ").push_bind_unseparated(price);
    }
    if let Some(category) = &input.category {
        set.push("category = ").push_bind_unseparated(category.clone());
    }
    if let Some(images) = &input.images {
        set.push("images = ")
            .push_bind_unseparated(string_list::encode(images));
    }
    if let Some(tags) = &input.tags {
        set.push("tags = ").push_bind_unseparated(string_list::encode(tags));
    }
    if let Some(sizes) = &input.sizes {
        set.push("sizes = ").push_bind_unseparated(string_list::encode(sizes));
    }
    if let Some(colors) = &input.colors {
        set.push("colors = ")
            .push_bind_unseparated(string_list::encode(colors));
    }
    if let Some(gender) = &input.gender {
        set.push("gender = ").push_bind_unseparated(gender.clone());
    }
    if let Some(oversize) = input.oversize {
        set.push("oversize = ").push_bind_unseparated(i64::from(oversize));
    }
    if let Some(featured) = input.featured {
        set.push("featured = ").push_bind_unseparated(i64::from(featured));
    }
    set.push("updated_at = ").push_bind_unseparated(now);

    qb.push(" WHERE id = ")
        .push_bind(id)
        .push(" AND deleted_at IS NULL");
    qb
}
