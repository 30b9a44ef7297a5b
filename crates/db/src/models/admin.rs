//! Admin entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tienda_core::types::{DbId, Timestamp};

/// Full admin row from the `admins` table.
///
/// Contains the password hash -- deliberately not `Serialize`.
/// Use [`AdminInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Admin {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: Timestamp,
}

/// Public admin representation (no password hash).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdminInfo {
    pub id: DbId,
    pub username: String,
    pub role: String,
}

impl From<&Admin> for AdminInfo {
    fn from(admin: &Admin) -> Self {
        Self {
            id: admin.id,
            username: admin.username.clone(),
            role: admin.role.clone(),
        }
    }
}

/// DTO for creating a new admin. `role` falls back to the column default.
#[derive(Debug, Deserialize)]
pub struct CreateAdmin {
    pub username: String,
    pub password_hash: String,
    pub role: Option<String>,
}
