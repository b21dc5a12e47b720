//! Route definitions for the `/projects` resource, including galleries.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::{gallery, projects};
use crate::state::AppState;

/// Body limit for gallery saves. Individual files are capped at 5 MiB by
/// the upload filter; the whole multipart request may carry several.
const GALLERY_BODY_LIMIT: usize = 64 * 1024 * 1024;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /slug/{slug}      -> get_by_slug
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// GET    /{id}/gallery     -> gallery list
/// PUT    /{id}/gallery     -> gallery save (multipart)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list).post(projects::create))
        .route("/projects/slug/{slug}", get(projects::get_by_slug))
        .route(
            "/projects/{id}",
            get(projects::get_by_id)
                .put(projects::update)
                .delete(projects::delete),
        )
        .route(
            "/projects/{id}/gallery",
            get(gallery::list)
                .put(gallery::save)
                .layer(DefaultBodyLimit::max(GALLERY_BODY_LIMIT)),
        )
}
