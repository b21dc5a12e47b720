//! Handlers for the site contact details (a singleton resource).

use arcsite_db::models::contact_info::{ContactInfo, UpdateContactInfo};
use arcsite_db::repositories::ContactInfoRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/contact-info
pub async fn get(State(state): State<AppState>) -> AppResult<Json<ContactInfo>> {
    let info = ContactInfoRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Contact details have not been set up yet".into()))?;
    Ok(Json(info))
}

/// PUT /api/v1/contact-info (admin)
///
/// Creates the row on first save.
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateContactInfo>,
) -> AppResult<Json<ContactInfo>> {
    let info = ContactInfoRepo::upsert(&state.pool, &input).await?;
    Ok(Json(info))
}
