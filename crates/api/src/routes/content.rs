//! Route definitions for the public site content resources.

use axum::routing::get;
use axum::Router;

use crate::handlers::{about, contact_info, services, team};
use crate::state::AppState;

/// Routes for services, the About page, contact details, and the team.
///
/// ```text
/// GET    /services          -> list
/// POST   /services          -> create
/// GET    /services/{id}     -> get_by_id
/// PUT    /services/{id}     -> update
/// DELETE /services/{id}     -> delete
///
/// GET    /about             -> get
/// PUT    /about             -> update
///
/// GET    /contact-info      -> get
/// PUT    /contact-info      -> update
///
/// GET    /team              -> list
/// POST   /team              -> create
/// GET    /team/{id}         -> get_by_id
/// PUT    /team/{id}         -> update
/// DELETE /team/{id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/services", get(services::list).post(services::create))
        .route(
            "/services/{id}",
            get(services::get_by_id)
                .put(services::update)
                .delete(services::delete),
        )
        .route("/about", get(about::get).put(about::update))
        .route(
            "/contact-info",
            get(contact_info::get).put(contact_info::update),
        )
        .route("/team", get(team::list).post(team::create))
        .route(
            "/team/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
}
