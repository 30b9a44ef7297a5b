//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - An entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches, where the
//!   entity is mutable

pub mod admin;
pub mod product;
