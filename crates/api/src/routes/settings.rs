//! Route definitions for admin site settings.

use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/admin/settings`.
///
/// ```text
/// GET /admin/settings -> get
/// PUT /admin/settings -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/admin/settings", get(settings::get).put(settings::update))
}
