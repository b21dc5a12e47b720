//! Team member model and DTOs.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A team member row from the `team_members` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub designation: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    /// Render position on the team page, ascending.
    pub order_index: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new team member.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeamMember {
    pub name: String,
    pub designation: String,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}

/// DTO for updating an existing team member. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTeamMember {
    pub name: Option<String>,
    pub designation: Option<String>,
    pub bio: Option<String>,
    pub image_url: Option<String>,
    pub order_index: Option<i32>,
}
