//! Domain types, error taxonomy, and business rules shared by the db and api crates.

pub mod catalog;
pub mod error;
pub mod images;
pub mod roles;
pub mod types;
