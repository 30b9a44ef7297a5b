//! First-start setup: seed an admin account so the API is usable.

use tienda_core::roles::ROLE_ADMIN;
use tienda_db::models::admin::{Admin, CreateAdmin};
use tienda_db::repositories::AdminRepo;
use tienda_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::DefaultAdmin;
use crate::error::{AppError, AppResult};

/// Create the configured default admin if the `admins` table is empty.
///
/// Returns the created admin, or `None` when admins already exist or no
/// credentials were configured. Never overwrites an existing account.
pub async fn ensure_default_admin(
    pool: &DbPool,
    seed: Option<&DefaultAdmin>,
) -> AppResult<Option<Admin>> {
    if AdminRepo::count(pool).await? > 0 {
        return Ok(None);
    }

    let Some(seed) = seed else {
        tracing::warn!(
            "No admin accounts exist and ADMIN_USERNAME/ADMIN_PASSWORD are unset; \
             login will be impossible until an admin is created"
        );
        return Ok(None);
    };

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let admin = AdminRepo::create(
        pool,
        &CreateAdmin {
            username: seed.username.clone(),
            password_hash,
            role: Some(ROLE_ADMIN.to_string()),
        },
    )
    .await?;

    tracing::info!(admin_id = admin.id, username = %admin.username, "Default admin created");
    Ok(Some(admin))
}
