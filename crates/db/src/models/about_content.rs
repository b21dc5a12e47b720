//! About-page content model and DTO.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single editable row backing the About page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AboutContent {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating the About page text.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateAboutContent {
    pub title: Option<String>,
    pub content: Option<String>,
}
