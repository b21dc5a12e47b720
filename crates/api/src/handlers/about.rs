//! Handlers for the About page content (a singleton resource).

use arcsite_db::models::about_content::{AboutContent, UpdateAboutContent};
use arcsite_db::repositories::AboutContentRepo;
use axum::extract::State;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// GET /api/v1/about
pub async fn get(State(state): State<AppState>) -> AppResult<Json<AboutContent>> {
    let content = AboutContentRepo::get(&state.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("About content has not been set up yet".into()))?;
    Ok(Json(content))
}

/// PUT /api/v1/about (admin)
///
/// Creates the row on first save.
pub async fn update(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<UpdateAboutContent>,
) -> AppResult<Json<AboutContent>> {
    let content = AboutContentRepo::upsert(&state.pool, &input).await?;
    Ok(Json(content))
}
