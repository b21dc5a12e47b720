//! Project gallery draft: the in-memory staging state the admin editor
//! mutates before a gallery is committed.
//!
//! A [`GalleryDraft`] holds an ordered list of [`StagedImage`]s. Operations
//! keep two invariants at all times: `display_order` values are dense
//! (`0..n-1` with no gaps) and at most one item is primary, with exactly one
//! whenever the draft is non-empty. The API layer turns a committed draft
//! into `project_images` rows and aliases the primary item's URL onto the
//! parent project.

use serde::Serialize;
use uuid::Uuid;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Maximum accepted upload size per image file (5 MiB).
pub const MAX_IMAGE_BYTES: u64 = 5 * 1024 * 1024;

// ---------------------------------------------------------------------------
// Staged items
// ---------------------------------------------------------------------------

/// Where a staged item's bytes live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageSource {
    /// A freshly staged upload that has not reached the blob store yet.
    Pending {
        file_name: String,
        content_type: String,
        size_bytes: u64,
    },
    /// An already-durable blob store URL from a previous save.
    Persisted { url: String },
}

/// One image in the draft, persisted or not.
#[derive(Debug, Clone, Serialize)]
pub struct StagedImage {
    pub id: Uuid,
    pub source: ImageSource,
    /// Display name shown in the editor; defaults to the file name stem.
    pub name: Option<String>,
    pub alt_text: Option<String>,
    pub is_primary: bool,
    pub display_order: i32,
}

/// A candidate file offered to [`GalleryDraft::stage`].
#[derive(Debug, Clone)]
pub struct CandidateFile {
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: u64,
}

impl CandidateFile {
    /// Whether this file passes the per-item upload filter: an `image/*`
    /// content type and at most [`MAX_IMAGE_BYTES`] bytes.
    pub fn is_acceptable(&self) -> bool {
        self.content_type.starts_with("image/") && self.size_bytes <= MAX_IMAGE_BYTES
    }
}

/// Result of a staging call: ids of the items appended, and how many
/// candidates were rejected by the size/type filter.
#[derive(Debug, Clone, Default)]
pub struct StageOutcome {
    pub accepted: Vec<Uuid>,
    pub rejected: usize,
}

/// Editable text fields on a staged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StagedField {
    Name,
    AltText,
}

// ---------------------------------------------------------------------------
// GalleryDraft
// ---------------------------------------------------------------------------

/// Ordered, one-primary staging list for a project's gallery.
#[derive(Debug, Clone, Default)]
pub struct GalleryDraft {
    items: Vec<StagedImage>,
}

impl GalleryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the draft with an image already persisted in the blob store.
    ///
    /// Used when re-editing an existing gallery. Order and primary handling
    /// follow the same rules as [`stage`](Self::stage): the item lands at
    /// the end, and becomes primary if the draft was empty.
    pub fn stage_persisted(
        &mut self,
        url: String,
        name: Option<String>,
        alt_text: Option<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        let is_primary = self.items.is_empty();
        let display_order = self.items.len() as i32;
        self.items.push(StagedImage {
            id,
            source: ImageSource::Persisted { url },
            name,
            alt_text,
            is_primary,
            display_order,
        });
        id
    }

    /// Stage a batch of candidate files.
    ///
    /// Files failing the size/type filter are rejected individually; the
    /// rest are appended in input order with a fresh id, a default display
    /// name derived from the file name, and order = current length. The
    /// first file staged into an empty draft becomes primary.
    pub fn stage(&mut self, files: Vec<CandidateFile>) -> StageOutcome {
        let mut outcome = StageOutcome::default();
        for file in files {
            if !file.is_acceptable() {
                outcome.rejected += 1;
                continue;
            }
            let id = Uuid::new_v4();
            let is_primary = self.items.is_empty();
            let display_order = self.items.len() as i32;
            let name = default_display_name(&file.file_name);
            self.items.push(StagedImage {
                id,
                source: ImageSource::Pending {
                    file_name: file.file_name,
                    content_type: file.content_type,
                    size_bytes: file.size_bytes,
                },
                name: Some(name),
                alt_text: None,
                is_primary,
                display_order,
            });
            outcome.accepted.push(id);
        }
        outcome
    }

    /// Move the item at `from` to position `to`, recomputing dense order.
    ///
    /// Out-of-range indices (a drop with no valid destination) are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from >= self.items.len() || to >= self.items.len() {
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
        self.renumber();
    }

    /// Mark one item primary and clear the flag on all others.
    ///
    /// Returns `false` (leaving the draft untouched) when `id` is unknown.
    pub fn set_primary(&mut self, id: Uuid) -> bool {
        if !self.items.iter().any(|item| item.id == id) {
            return false;
        }
        for item in &mut self.items {
            item.is_primary = item.id == id;
        }
        true
    }

    /// Remove one item and recompute dense order.
    ///
    /// If the removed item was primary and items remain, the new first item
    /// (by current order) inherits the flag. Returns `false` for unknown ids.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let Some(pos) = self.items.iter().position(|item| item.id == id) else {
            return false;
        };
        let removed = self.items.remove(pos);
        if removed.is_primary {
            if let Some(first) = self.items.first_mut() {
                first.is_primary = true;
            }
        }
        self.renumber();
        true
    }

    /// Update the display name or alt text of a staged item.
    pub fn update_field(&mut self, id: Uuid, field: StagedField, value: String) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        match field {
            StagedField::Name => item.name = Some(value),
            StagedField::AltText => item.alt_text = Some(value),
        }
        true
    }

    /// The current primary item, if any.
    pub fn primary(&self) -> Option<&StagedImage> {
        self.items.iter().find(|item| item.is_primary)
    }

    pub fn items(&self) -> &[StagedImage] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check the draft invariants before a commit: dense zero-based order
    /// and exactly one primary item when the draft is non-empty.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (idx, item) in self.items.iter().enumerate() {
            if item.display_order != idx as i32 {
                return Err(CoreError::Internal(format!(
                    "gallery order is not dense: item {} has display_order {}",
                    idx, item.display_order
                )));
            }
        }
        let primary_count = self.items.iter().filter(|item| item.is_primary).count();
        if !self.items.is_empty() && primary_count != 1 {
            return Err(CoreError::Validation(format!(
                "gallery must have exactly one primary image, found {primary_count}"
            )));
        }
        Ok(())
    }

    fn renumber(&mut self) {
        for (idx, item) in self.items.iter_mut().enumerate() {
            item.display_order = idx as i32;
        }
    }
}

/// Derive a default display name from an uploaded file name by stripping
/// the final extension. `"living-room.jpg"` becomes `"living-room"`.
pub fn default_display_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
        _ => file_name.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn jpeg(name: &str, size_bytes: u64) -> CandidateFile {
        CandidateFile {
            file_name: name.to_string(),
            content_type: "image/jpeg".to_string(),
            size_bytes,
        }
    }

    fn staged_draft(count: usize) -> GalleryDraft {
        let mut draft = GalleryDraft::new();
        let files = (0..count)
            .map(|i| jpeg(&format!("img-{i}.jpg"), 1024))
            .collect();
        draft.stage(files);
        draft
    }

    fn assert_dense_order(draft: &GalleryDraft) {
        for (idx, item) in draft.items().iter().enumerate() {
            assert_eq!(item.display_order, idx as i32);
        }
    }

    fn primary_count(draft: &GalleryDraft) -> usize {
        draft.items().iter().filter(|i| i.is_primary).count()
    }

    // -- stage ---------------------------------------------------------------

    #[test]
    fn stage_appends_accepted_files_in_order() {
        let mut draft = GalleryDraft::new();
        let outcome = draft.stage(vec![jpeg("a.jpg", 100), jpeg("b.jpg", 200)]);

        assert_eq!(outcome.accepted.len(), 2);
        assert_eq!(outcome.rejected, 0);
        assert_eq!(draft.len(), 2);
        assert_dense_order(&draft);
    }

    #[test]
    fn stage_rejects_oversized_files_individually() {
        let mut draft = GalleryDraft::new();
        let outcome = draft.stage(vec![
            jpeg("ok-2mb.jpg", 2 * 1024 * 1024),
            jpeg("ok-3mb.jpg", 3 * 1024 * 1024),
            jpeg("too-big-6mb.jpg", 6 * 1024 * 1024),
        ]);

        assert_eq!(draft.len(), 2);
        assert_eq!(outcome.rejected, 1);
    }

    #[test]
    fn stage_rejects_non_image_content_types() {
        let mut draft = GalleryDraft::new();
        let outcome = draft.stage(vec![
            jpeg("photo.jpg", 100),
            CandidateFile {
                file_name: "notes.pdf".to_string(),
                content_type: "application/pdf".to_string(),
                size_bytes: 100,
            },
        ]);

        assert_eq!(draft.len(), 1);
        assert_eq!(outcome.rejected, 1);
    }

    #[test]
    fn stage_accepts_file_exactly_at_size_limit() {
        let mut draft = GalleryDraft::new();
        let outcome = draft.stage(vec![jpeg("limit.jpg", MAX_IMAGE_BYTES)]);
        assert_eq!(outcome.accepted.len(), 1);
        assert_eq!(outcome.rejected, 0);
    }

    #[test]
    fn first_staged_file_becomes_primary() {
        let draft = staged_draft(3);
        assert!(draft.items()[0].is_primary);
        assert_eq!(primary_count(&draft), 1);
    }

    #[test]
    fn staging_into_non_empty_draft_keeps_existing_primary() {
        let mut draft = staged_draft(1);
        draft.stage(vec![jpeg("later.jpg", 100)]);
        assert!(draft.items()[0].is_primary);
        assert!(!draft.items()[1].is_primary);
    }

    #[test]
    fn stage_derives_display_name_from_file_name() {
        let mut draft = GalleryDraft::new();
        draft.stage(vec![jpeg("living-room.jpg", 100)]);
        assert_eq!(draft.items()[0].name.as_deref(), Some("living-room"));
    }

    // -- reorder -------------------------------------------------------------

    #[test]
    fn reorder_moves_item_and_keeps_dense_order() {
        let mut draft = staged_draft(4);
        let moved = draft.items()[3].id;

        draft.reorder(3, 0);

        assert_eq!(draft.items()[0].id, moved);
        assert_dense_order(&draft);
    }

    #[test]
    fn reorder_with_invalid_target_is_noop() {
        let mut draft = staged_draft(2);
        let before: Vec<Uuid> = draft.items().iter().map(|i| i.id).collect();

        draft.reorder(0, 5);
        draft.reorder(9, 0);

        let after: Vec<Uuid> = draft.items().iter().map(|i| i.id).collect();
        assert_eq!(before, after);
        assert_dense_order(&draft);
    }

    // -- set_primary ---------------------------------------------------------

    #[test]
    fn set_primary_is_exclusive() {
        let mut draft = staged_draft(3);
        let target = draft.items()[2].id;

        assert!(draft.set_primary(target));

        assert!(draft.items()[2].is_primary);
        assert_eq!(primary_count(&draft), 1);
    }

    #[test]
    fn set_primary_unknown_id_is_noop() {
        let mut draft = staged_draft(2);
        assert!(!draft.set_primary(Uuid::new_v4()));
        assert!(draft.items()[0].is_primary);
    }

    // -- remove --------------------------------------------------------------

    #[test]
    fn remove_primary_promotes_new_first_item() {
        let mut draft = staged_draft(3);
        let primary = draft.items()[0].id;

        assert!(draft.remove(primary));

        assert_eq!(draft.len(), 2);
        assert!(draft.items()[0].is_primary);
        assert_eq!(primary_count(&draft), 1);
        assert_dense_order(&draft);
    }

    #[test]
    fn remove_non_primary_keeps_primary() {
        let mut draft = staged_draft(3);
        let last = draft.items()[2].id;

        draft.remove(last);

        assert!(draft.items()[0].is_primary);
        assert_eq!(primary_count(&draft), 1);
        assert_dense_order(&draft);
    }

    #[test]
    fn remove_last_item_leaves_empty_draft() {
        let mut draft = staged_draft(1);
        let only = draft.items()[0].id;

        draft.remove(only);

        assert!(draft.is_empty());
        assert!(draft.primary().is_none());
    }

    #[test]
    fn primary_invariant_holds_across_mixed_sequence() {
        let mut draft = staged_draft(4);
        let second = draft.items()[1].id;
        let third = draft.items()[2].id;

        draft.set_primary(third);
        draft.remove(second);
        draft.reorder(0, 2);
        draft.remove(draft.primary().expect("primary must exist").id);

        assert_eq!(primary_count(&draft), 1);
        assert_dense_order(&draft);
        assert!(draft.validate().is_ok());
    }

    // -- update_field --------------------------------------------------------

    #[test]
    fn update_field_sets_name_and_alt_text() {
        let mut draft = staged_draft(1);
        let id = draft.items()[0].id;

        assert!(draft.update_field(id, StagedField::Name, "Majlis".into()));
        assert!(draft.update_field(id, StagedField::AltText, "Majlis seating".into()));

        assert_eq!(draft.items()[0].name.as_deref(), Some("Majlis"));
        assert_eq!(draft.items()[0].alt_text.as_deref(), Some("Majlis seating"));
    }

    // -- validate ------------------------------------------------------------

    #[test]
    fn validate_accepts_empty_draft() {
        assert!(GalleryDraft::new().validate().is_ok());
    }

    #[test]
    fn validate_accepts_well_formed_draft() {
        assert!(staged_draft(3).validate().is_ok());
    }

    // -- default_display_name ------------------------------------------------

    #[test]
    fn display_name_strips_extension() {
        assert_eq!(default_display_name("foo.png"), "foo");
        assert_eq!(default_display_name("a.b.jpeg"), "a.b");
    }

    #[test]
    fn display_name_keeps_extensionless_names() {
        assert_eq!(default_display_name("snapshot"), "snapshot");
        assert_eq!(default_display_name(".hidden"), ".hidden");
    }
}
