//! Project entity model and DTOs.

use arcsite_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `image_url` is the summary image shown on listing cards; it always
/// mirrors the gallery's primary image after a gallery save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub is_featured: bool,
    pub slug: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new project.
///
/// When `slug` is omitted one is derived from the title.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub category: String,
    pub location: String,
    pub description: String,
    pub image_url: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub is_featured: Option<bool>,
    pub slug: Option<String>,
}

/// DTO for updating an existing project. All fields are optional.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: Option<String>,
    pub category: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub completion_date: Option<NaiveDate>,
    pub is_featured: Option<bool>,
    pub slug: Option<String>,
}
