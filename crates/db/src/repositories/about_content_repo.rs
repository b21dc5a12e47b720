//! Repository for the single-row `about_content` table.

use sqlx::PgPool;

use crate::models::about_content::{AboutContent, UpdateAboutContent};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, content, created_at, updated_at";

/// Provides read/update access to the About page content.
pub struct AboutContentRepo;

impl AboutContentRepo {
    /// Fetch the About page content, if seeded.
    pub async fn get(pool: &PgPool) -> Result<Option<AboutContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM about_content ORDER BY id LIMIT 1");
        sqlx::query_as::<_, AboutContent>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the About page content, creating the row on first save.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpdateAboutContent,
    ) -> Result<AboutContent, sqlx::Error> {
        if let Some(existing) = Self::get(pool).await? {
            let query = format!(
                "UPDATE about_content SET
                    title = COALESCE($2, title),
                    content = COALESCE($3, content),
                    updated_at = NOW()
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, AboutContent>(&query)
                .bind(existing.id)
                .bind(&input.title)
                .bind(&input.content)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO about_content (title, content)
                 VALUES (COALESCE($1, ''), COALESCE($2, ''))
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, AboutContent>(&query)
                .bind(&input.title)
                .bind(&input.content)
                .fetch_one(pool)
                .await
        }
    }
}
