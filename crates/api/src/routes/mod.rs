pub mod auth;
pub mod content;
pub mod enquiries;
pub mod health;
pub mod projects;
pub mod settings;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
///
/// /projects                           list (public), create (admin)
/// /projects/{id}                      get (public), update, delete (admin)
/// /projects/slug/{slug}               get by slug (public)
/// /projects/{id}/gallery              get (public), replace (admin, multipart)
///
/// /services                           list (public), create (admin)
/// /services/{id}                      get (public), update, delete (admin)
/// /about                              get (public), update (admin)
/// /contact-info                       get (public), update (admin)
/// /team                               list (public), create (admin)
/// /team/{id}                          get (public), update, delete (admin)
///
/// /enquiries                          submit (public)
/// /admin/enquiries                    list (admin)
/// /admin/enquiries/{id}               get (admin)
/// /admin/enquiries/{id}/resend        resend to CRM (admin)
/// /admin/settings                     get, update (admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(projects::router())
        .merge(content::router())
        .merge(enquiries::router())
        .merge(settings::router())
}
