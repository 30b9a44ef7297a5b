//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod admin_repo;
pub mod product_query;
pub mod product_repo;

pub use admin_repo::AdminRepo;
pub use product_repo::ProductRepo;
