//! Operator-configured site settings model and DTO.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The single settings row read by the enquiry relay and owned by the
/// admin settings endpoint.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: DbId,
    /// CRM endpoint enquiries are forwarded to; unset disables forwarding.
    pub crm_webhook_url: Option<String>,
    pub updated_at: Timestamp,
}

/// DTO for updating the settings row.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSiteSettings {
    /// `None` clears the webhook URL and disables forwarding.
    pub crm_webhook_url: Option<String>,
}
