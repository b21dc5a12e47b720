//! Repository for the single-row `contact_info` table.

use sqlx::PgPool;

use crate::models::contact_info::{ContactInfo, UpdateContactInfo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, address, phone, email, created_at, updated_at";

/// Provides read/update access to the contact details block.
pub struct ContactInfoRepo;

impl ContactInfoRepo {
    /// Fetch the contact details, if seeded.
    pub async fn get(pool: &PgPool) -> Result<Option<ContactInfo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_info ORDER BY id LIMIT 1");
        sqlx::query_as::<_, ContactInfo>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Update the contact details, creating the row on first save.
    pub async fn upsert(
        pool: &PgPool,
        input: &UpdateContactInfo,
    ) -> Result<ContactInfo, sqlx::Error> {
        if let Some(existing) = Self::get(pool).await? {
            let query = format!(
                "UPDATE contact_info SET
                    address = COALESCE($2, address),
                    phone = COALESCE($3, phone),
                    email = COALESCE($4, email),
                    updated_at = NOW()
                 WHERE id = $1
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ContactInfo>(&query)
                .bind(existing.id)
                .bind(&input.address)
                .bind(&input.phone)
                .bind(&input.email)
                .fetch_one(pool)
                .await
        } else {
            let query = format!(
                "INSERT INTO contact_info (address, phone, email)
                 VALUES (COALESCE($1, ''), COALESCE($2, ''), COALESCE($3, ''))
                 RETURNING {COLUMNS}"
            );
            sqlx::query_as::<_, ContactInfo>(&query)
                .bind(&input.address)
                .bind(&input.phone)
                .bind(&input.email)
                .fetch_one(pool)
                .await
        }
    }
}
