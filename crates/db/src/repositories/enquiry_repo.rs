//! Repository for the `enquiries` table.

use arcsite_core::types::DbId;
use sqlx::PgPool;

use crate::models::enquiry::{Enquiry, SubmitEnquiry};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, phone, project_type, location, budget, timeline, \
     message, webhook_sent, webhook_response, created_at";

/// Provides persistence for customer enquiries.
pub struct EnquiryRepo;

impl EnquiryRepo {
    /// Insert a new enquiry with `webhook_sent = false`.
    pub async fn create(pool: &PgPool, input: &SubmitEnquiry) -> Result<Enquiry, sqlx::Error> {
        let query = format!(
            "INSERT INTO enquiries
                 (name, email, phone, project_type, location, budget, timeline, message)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.project_type)
            .bind(&input.location)
            .bind(&input.budget)
            .bind(&input.timeline)
            .bind(&input.message)
            .fetch_one(pool)
            .await
    }

    /// Find an enquiry by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM enquiries WHERE id = $1");
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List enquiries newest first, optionally limited (the admin dashboard
    /// shows a short excerpt, the enquiries page everything).
    pub async fn list(pool: &PgPool, limit: Option<i64>) -> Result<Vec<Enquiry>, sqlx::Error> {
        let query = match limit {
            Some(_) => {
                format!("SELECT {COLUMNS} FROM enquiries ORDER BY created_at DESC, id DESC LIMIT $1")
            }
            None => format!("SELECT {COLUMNS} FROM enquiries ORDER BY created_at DESC, id DESC"),
        };
        let mut q = sqlx::query_as::<_, Enquiry>(&query);
        if let Some(limit) = limit {
            q = q.bind(limit);
        }
        q.fetch_all(pool).await
    }

    /// Mark an enquiry forwarded, recording the response note.
    ///
    /// Guarded on `webhook_sent = FALSE` so the forwarded flag is a one-way
    /// transition. Returns the updated row, or `None` when the enquiry does
    /// not exist or was already forwarded.
    pub async fn mark_forwarded(
        pool: &PgPool,
        id: DbId,
        response_note: &str,
    ) -> Result<Option<Enquiry>, sqlx::Error> {
        let query = format!(
            "UPDATE enquiries SET webhook_sent = TRUE, webhook_response = $2
             WHERE id = $1 AND webhook_sent = FALSE
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Enquiry>(&query)
            .bind(id)
            .bind(response_note)
            .fetch_optional(pool)
            .await
    }
}
