//! Handlers for operator-configured site settings (admin only).

use arcsite_db::models::site_settings::{SiteSettings, UpdateSiteSettings};
use arcsite_db::repositories::SiteSettingsRepo;
use axum::extract::State;
use axum::Json;

use crate::error::AppResult;
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/admin/settings (admin)
pub async fn get(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::get(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/v1/admin/settings (admin)
///
/// Full replace: a null `crm_webhook_url` disables enquiry forwarding.
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    let settings = SiteSettingsRepo::update(&state.pool, &input).await?;
    Ok(Json(settings))
}
