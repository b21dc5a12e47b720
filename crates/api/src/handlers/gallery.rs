//! Handlers for project gallery reads and the wholesale gallery save.
//!
//! The save endpoint accepts a multipart request: a `gallery` JSON field
//! describing the desired final image list in display order, followed by
//! one part per new upload. Manifest entries reference either an already
//! persisted blob URL (`url`) or the name of a file part in the same
//! request (`part`). The whole list replaces the stored gallery; new files
//! are uploaded to the blob store first, then the rows are swapped in a
//! single transaction.

use std::collections::HashMap;

use arcsite_core::error::CoreError;
use arcsite_core::gallery::{CandidateFile, GalleryDraft, ImageSource, StagedField};
use arcsite_core::types::DbId;
use arcsite_db::models::project_image::{NewProjectImage, ProjectImage};
use arcsite_db::repositories::{ProjectImageRepo, ProjectRepo};
use axum::extract::{Multipart, Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::RequireAdmin;
use crate::state::AppState;

/// One entry in the `gallery` manifest field of a save request.
///
/// Exactly one of `url` (keep an existing image) or `part` (a file part in
/// this request) must be set.
#[derive(Debug, Deserialize)]
pub struct ManifestEntry {
    pub url: Option<String>,
    pub part: Option<String>,
    pub name: Option<String>,
    pub alt_text: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Response body for a gallery save.
#[derive(Debug, Serialize)]
pub struct GallerySaveResponse {
    pub images: Vec<ProjectImage>,
    /// Uploads dropped by the per-file size/type filter.
    pub rejected_uploads: usize,
}

/// A file part pulled out of the multipart stream.
struct UploadPart {
    file_name: String,
    content_type: String,
    bytes: Vec<u8>,
}

/// GET /api/v1/projects/{id}/gallery
pub async fn list(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<Vec<ProjectImage>>> {
    require_project(&state, project_id).await?;
    let images = ProjectImageRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(images))
}

/// PUT /api/v1/projects/{id}/gallery (admin)
///
/// Replace the project's gallery with the manifest's image list.
pub async fn save(
    RequireAdmin(_user): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    multipart: Multipart,
) -> AppResult<Json<GallerySaveResponse>> {
    require_project(&state, project_id).await?;

    let (manifest, mut parts) = read_multipart(multipart).await?;

    // Stage the manifest into a draft, enforcing order, the one-primary
    // rule, and the per-file upload filter.
    let mut draft = GalleryDraft::new();
    let mut pending_parts: HashMap<Uuid, UploadPart> = HashMap::new();
    let mut rejected_uploads = 0usize;
    let mut primary_id: Option<Uuid> = None;

    for entry in manifest {
        let staged_id = match (entry.url, entry.part) {
            (Some(url), None) => Some(draft.stage_persisted(url, entry.name, entry.alt_text)),
            (None, Some(part_name)) => {
                let part = parts.remove(&part_name).ok_or_else(|| {
                    AppError::BadRequest(format!(
                        "Manifest references missing file part '{part_name}'"
                    ))
                })?;
                let candidate = CandidateFile {
                    file_name: part.file_name.clone(),
                    content_type: part.content_type.clone(),
                    size_bytes: part.bytes.len() as u64,
                };
                let outcome = draft.stage(vec![candidate]);
                rejected_uploads += outcome.rejected;
                match outcome.accepted.first().copied() {
                    Some(id) => {
                        if let Some(name) = entry.name {
                            draft.update_field(id, StagedField::Name, name);
                        }
                        if let Some(alt) = entry.alt_text {
                            draft.update_field(id, StagedField::AltText, alt);
                        }
                        pending_parts.insert(id, part);
                        Some(id)
                    }
                    None => None,
                }
            }
            _ => {
                return Err(AppError::BadRequest(
                    "Each manifest entry must set exactly one of 'url' or 'part'".into(),
                ));
            }
        };

        if entry.is_primary {
            if let Some(id) = staged_id {
                primary_id = Some(id);
            }
        }
    }

    // An explicit primary choice overrides the default (first staged item).
    if let Some(id) = primary_id {
        draft.set_primary(id);
    }

    draft.validate().map_err(AppError::Core)?;

    // Upload pending files before touching the database, so a storage
    // failure leaves the stored gallery untouched.
    let mut new_images = Vec::with_capacity(draft.len());
    for item in draft.items() {
        let image_url = match &item.source {
            ImageSource::Persisted { url } => url.clone(),
            ImageSource::Pending { file_name, .. } => {
                let part = pending_parts
                    .remove(&item.id)
                    .ok_or_else(|| AppError::InternalError("Lost staged upload bytes".into()))?;
                let key = arcsite_storage::blob_key("projects", file_name);
                state
                    .storage
                    .put(&key, part.bytes, &part.content_type)
                    .await?
            }
        };
        new_images.push(NewProjectImage {
            image_url,
            alt_text: item.alt_text.clone(),
            name: item.name.clone(),
            is_primary: item.is_primary,
        });
    }

    let images = ProjectImageRepo::replace_for_project(&state.pool, project_id, &new_images).await?;

    tracing::info!(
        project_id,
        count = images.len(),
        rejected_uploads,
        "Gallery saved"
    );

    Ok(Json(GallerySaveResponse {
        images,
        rejected_uploads,
    }))
}

/// Pull the `gallery` manifest and the raw file parts out of the stream.
async fn read_multipart(
    mut multipart: Multipart,
) -> AppResult<(Vec<ManifestEntry>, HashMap<String, UploadPart>)> {
    let mut manifest: Option<Vec<ManifestEntry>> = None;
    let mut parts: HashMap<String, UploadPart> = HashMap::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart request: {e}")))?
    {
        let Some(field_name) = field.name().map(str::to_string) else {
            continue;
        };

        if field_name == "gallery" {
            let text = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(format!("Unreadable gallery manifest: {e}")))?;
            let entries: Vec<ManifestEntry> = serde_json::from_str(&text)
                .map_err(|e| AppError::BadRequest(format!("Invalid gallery manifest: {e}")))?;
            manifest = Some(entries);
        } else {
            let file_name = field
                .file_name()
                .map(str::to_string)
                .unwrap_or_else(|| field_name.clone());
            let content_type = field
                .content_type()
                .map(str::to_string)
                .unwrap_or_else(|| "application/octet-stream".to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Unreadable file part: {e}")))?
                .to_vec();
            parts.insert(
                field_name,
                UploadPart {
                    file_name,
                    content_type,
                    bytes,
                },
            );
        }
    }

    let manifest =
        manifest.ok_or_else(|| AppError::BadRequest("Missing 'gallery' manifest field".into()))?;
    Ok((manifest, parts))
}

/// 404 unless the project exists.
async fn require_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}
