//! Handlers for enquiry submission and the admin enquiry workflow.
//!
//! Submission persists the enquiry first and forwards it to the CRM
//! webhook in a detached task: the customer's success response never
//! depends on the CRM being reachable. The admin resend, in contrast,
//! awaits the delivery so the operator sees the outcome.

use arcsite_core::enquiry::{EnquirySnapshot, FORWARD_NOTE};
use arcsite_core::error::CoreError;
use arcsite_core::types::DbId;
use arcsite_db::models::enquiry::{Enquiry, SubmitEnquiry};
use arcsite_db::repositories::{EnquiryRepo, SiteSettingsRepo};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /admin/enquiries`.
#[derive(Debug, Deserialize)]
pub struct ListEnquiriesQuery {
    /// Cap on returned rows (the dashboard asks for a short excerpt).
    pub limit: Option<i64>,
}

/// POST /api/v1/enquiries (public)
///
/// Persist the enquiry, then hand it to the relay without waiting.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<SubmitEnquiry>,
) -> AppResult<(StatusCode, Json<Enquiry>)> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let enquiry = EnquiryRepo::create(&state.pool, &input).await?;

    match SiteSettingsRepo::webhook_url(&state.pool).await {
        Ok(Some(url)) => {
            spawn_forward(state.clone(), snapshot_of(&enquiry), url);
        }
        Ok(None) => {
            tracing::debug!(enquiry_id = enquiry.id, "No CRM webhook configured, skipping forward");
        }
        Err(e) => {
            // The enquiry is already saved; a settings read failure must
            // not turn the submission into an error.
            tracing::warn!(enquiry_id = enquiry.id, error = %e, "Could not read webhook settings");
        }
    }

    Ok((StatusCode::CREATED, Json(enquiry)))
}

/// GET /api/v1/admin/enquiries (admin)
pub async fn list(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<ListEnquiriesQuery>,
) -> AppResult<Json<DataResponse<Vec<Enquiry>>>> {
    let enquiries = EnquiryRepo::list(&state.pool, query.limit).await?;
    Ok(Json(DataResponse { data: enquiries }))
}

/// GET /api/v1/admin/enquiries/{id} (admin)
pub async fn get_by_id(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Enquiry>> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;
    Ok(Json(enquiry))
}

/// POST /api/v1/admin/enquiries/{id}/resend (admin)
///
/// Re-attempt delivery for an enquiry that never reached the CRM. The
/// delivery is awaited here; a transport failure surfaces as 502 and the
/// enquiry stays unforwarded.
pub async fn resend(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Enquiry>> {
    let enquiry = EnquiryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Enquiry",
            id,
        }))?;

    if enquiry.webhook_sent {
        return Err(AppError::Core(CoreError::Conflict(
            "Enquiry was already forwarded to the CRM".into(),
        )));
    }

    let url = SiteSettingsRepo::webhook_url(&state.pool)
        .await?
        .ok_or_else(|| AppError::BadRequest("No CRM webhook URL is configured".into()))?;

    state.relay.forward(&url, &snapshot_of(&enquiry)).await?;

    let updated = EnquiryRepo::mark_forwarded(&state.pool, id, FORWARD_NOTE)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict(
                "Enquiry was already forwarded to the CRM".into(),
            ))
        })?;

    Ok(Json(updated))
}

/// Forward in a detached task; log the outcome either way.
fn spawn_forward(state: AppState, snapshot: EnquirySnapshot, url: String) {
    tokio::spawn(async move {
        let enquiry_id = snapshot.id;
        match state.relay.forward(&url, &snapshot).await {
            Ok(_) => {
                if let Err(e) = EnquiryRepo::mark_forwarded(&state.pool, enquiry_id, FORWARD_NOTE).await
                {
                    tracing::error!(enquiry_id, error = %e, "Forward succeeded but flag update failed");
                }
            }
            Err(e) => {
                tracing::warn!(enquiry_id, error = %e, "CRM webhook delivery failed");
            }
        }
    });
}

/// The enquiry fields the relay payload carries.
fn snapshot_of(enquiry: &Enquiry) -> EnquirySnapshot {
    EnquirySnapshot {
        id: enquiry.id,
        name: enquiry.name.clone(),
        email: enquiry.email.clone(),
        phone: enquiry.phone.clone(),
        project_type: enquiry.project_type.clone(),
        location: enquiry.location.clone(),
        budget: enquiry.budget.clone(),
        timeline: enquiry.timeline.clone(),
        message: enquiry.message.clone(),
        created_at: enquiry.created_at,
    }
}
