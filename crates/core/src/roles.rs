//! Well-known role name constants.
//!
//! Must match the column default in `20260101000002_create_admins_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
