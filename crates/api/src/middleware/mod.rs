//! Request extractors that gate handlers.
//!
//! - [`auth::AuthAdmin`] -- Extracts the authenticated admin from a JWT Bearer token.

pub mod auth;
