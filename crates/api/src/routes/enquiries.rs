//! Route definitions for enquiry submission and the admin workflow.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::enquiries;
use crate::state::AppState;

/// Routes for enquiries.
///
/// ```text
/// POST /enquiries                    -> submit (public)
/// GET  /admin/enquiries              -> list (admin)
/// GET  /admin/enquiries/{id}         -> get_by_id (admin)
/// POST /admin/enquiries/{id}/resend  -> resend (admin)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/enquiries", post(enquiries::submit))
        .route("/admin/enquiries", get(enquiries::list))
        .route("/admin/enquiries/{id}", get(enquiries::get_by_id))
        .route("/admin/enquiries/{id}/resend", post(enquiries::resend))
}
