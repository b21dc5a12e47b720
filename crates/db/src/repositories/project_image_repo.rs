//! Repository for the `project_images` table.
//!
//! Gallery rows are owned wholesale by their project: a save replaces the
//! full set rather than patching individual rows.

use arcsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::project_image::{NewProjectImage, ProjectImage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, image_url, alt_text, name, is_primary, display_order, \
     created_at, updated_at";

/// Provides gallery persistence for projects.
pub struct ProjectImageRepo;

impl ProjectImageRepo {
    /// List a project's gallery ordered by display position.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project_images
             WHERE project_id = $1
             ORDER BY display_order, created_at"
        );
        sqlx::query_as::<_, ProjectImage>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Replace a project's gallery with `images`, in one transaction.
    ///
    /// Deletes every existing row for the project, inserts `images` in list
    /// order with dense `display_order` values starting at 0, and points the
    /// parent project's `image_url` at the primary image (NULL when the list
    /// is empty or carries no primary). Returns the inserted rows.
    pub async fn replace_for_project(
        pool: &PgPool,
        project_id: DbId,
        images: &[NewProjectImage],
    ) -> Result<Vec<ProjectImage>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM project_images WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;

        let insert = format!(
            "INSERT INTO project_images
                 (project_id, image_url, alt_text, name, is_primary, display_order)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );

        let mut rows = Vec::with_capacity(images.len());
        for (order, image) in images.iter().enumerate() {
            let row = sqlx::query_as::<_, ProjectImage>(&insert)
                .bind(project_id)
                .bind(&image.image_url)
                .bind(&image.alt_text)
                .bind(&image.name)
                .bind(image.is_primary)
                .bind(order as i32)
                .fetch_one(&mut *tx)
                .await?;
            rows.push(row);
        }

        let summary_url = images
            .iter()
            .find(|image| image.is_primary)
            .map(|image| image.image_url.clone());

        sqlx::query("UPDATE projects SET image_url = $2, updated_at = NOW() WHERE id = $1")
            .bind(project_id)
            .bind(&summary_url)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(rows)
    }
}
