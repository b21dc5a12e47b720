//! Repository for the single-row `site_settings` table.

use sqlx::PgPool;

use crate::models::site_settings::{SiteSettings, UpdateSiteSettings};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, crm_webhook_url, updated_at";

/// Provides read/update access to operator settings.
///
/// The enquiry relay reads the webhook URL through [`Self::webhook_url`];
/// only the admin settings endpoint writes it.
pub struct SiteSettingsRepo;

impl SiteSettingsRepo {
    /// Fetch the settings row. The migration seeds one, so a missing row
    /// indicates a broken deployment and surfaces as `RowNotFound`.
    pub async fn get(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings ORDER BY id LIMIT 1");
        sqlx::query_as::<_, SiteSettings>(&query).fetch_one(pool).await
    }

    /// The configured CRM webhook URL, if any. Blank values count as unset.
    pub async fn webhook_url(pool: &PgPool) -> Result<Option<String>, sqlx::Error> {
        let settings = Self::get(pool).await?;
        Ok(settings
            .crm_webhook_url
            .filter(|url| !url.trim().is_empty()))
    }

    /// Overwrite the settings row. Unlike the content repos this is a full
    /// replace: passing `None` clears the webhook URL.
    pub async fn update(
        pool: &PgPool,
        input: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET crm_webhook_url = $1, updated_at = NOW()
             WHERE id = (SELECT id FROM site_settings ORDER BY id LIMIT 1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(&input.crm_webhook_url)
            .fetch_one(pool)
            .await
    }
}
