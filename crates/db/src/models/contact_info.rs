//! Contact-page office details model and DTO.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single editable row backing the contact details block.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactInfo {
    pub id: DbId,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the contact details.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateContactInfo {
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}
