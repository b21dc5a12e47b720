//! Project gallery image model and DTOs.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A gallery image row from the `project_images` table.
///
/// Rows for one project satisfy two invariants after any gallery save:
/// `display_order` is dense starting at 0, and exactly one row has
/// `is_primary = true` while any rows exist.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectImage {
    pub id: DbId,
    pub project_id: DbId,
    pub image_url: String,
    pub alt_text: Option<String>,
    pub name: Option<String>,
    pub is_primary: bool,
    pub display_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one image row in a gallery replacement.
///
/// `display_order` is assigned from list position during the replace, so
/// the DTO carries everything but the order.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProjectImage {
    pub image_url: String,
    pub alt_text: Option<String>,
    pub name: Option<String>,
    pub is_primary: bool,
}
