//! Customer enquiry model and DTOs.

use arcsite_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// An enquiry row from the `enquiries` table.
///
/// `webhook_sent` only ever transitions false -> true; enquiries are never
/// deleted by the submission or forwarding workflows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Enquiry {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub location: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub webhook_sent: bool,
    pub webhook_response: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for the public contact-form submission.
///
/// Name, email, phone, project type, and location are required; the rest
/// is optional detail the sales team likes but does not need.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SubmitEnquiry {
    #[validate(custom(function = not_blank, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "a valid email is required"))]
    pub email: String,
    #[validate(custom(function = not_blank, message = "phone is required"))]
    pub phone: String,
    #[validate(custom(function = not_blank, message = "project type is required"))]
    pub project_type: String,
    #[validate(custom(function = not_blank, message = "location is required"))]
    pub location: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
}

/// Required text fields must contain at least one non-whitespace character.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
