//! Admin user model.

use arcsite_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// An admin user row from the `admin_users` table.
///
/// The password hash never leaves the server; it is skipped during
/// serialization so the row can be returned from handlers directly.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AdminUser {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
