//! Business services sitting between handlers and repositories.
//!
//! - [`catalog`] -- product validation and catalog queries.
//! - [`auth`] -- credential checks and token issuance.
//! - [`images`] -- uploaded image storage and orphan cleanup.

pub mod auth;
pub mod catalog;
pub mod images;
