//! Enquiry forwarding payload and policy constants.
//!
//! An enquiry is persisted first and forwarded to the operator-configured
//! CRM webhook second; forwarding is best-effort and never blocks or
//! reverts the submission the customer already saw succeed.

use serde_json::{json, Value};

use crate::types::{DbId, Timestamp};

/// Constant source tag included in every forwarded payload so the CRM can
/// attribute the lead.
pub const FORWARD_SOURCE_TAG: &str = "ImperialArc Website";

/// Static note stored on an enquiry once a delivery attempt completes.
///
/// The webhook response itself is intentionally not inspected, so this is
/// the only response text the system records.
pub const FORWARD_NOTE: &str = "Webhook request sent successfully";

/// Snapshot of the enquiry fields that travel to the CRM.
#[derive(Debug, Clone)]
pub struct EnquirySnapshot {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub project_type: String,
    pub location: String,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub message: Option<String>,
    pub created_at: Timestamp,
}

/// Build the JSON body POSTed to the CRM webhook: the enquiry's fields plus
/// the [`FORWARD_SOURCE_TAG`] and an ISO-8601 timestamp of the attempt.
pub fn forward_payload(enquiry: &EnquirySnapshot, attempted_at: Timestamp) -> Value {
    json!({
        "id": enquiry.id,
        "name": enquiry.name,
        "email": enquiry.email,
        "phone": enquiry.phone,
        "project_type": enquiry.project_type,
        "location": enquiry.location,
        "budget": enquiry.budget,
        "timeline": enquiry.timeline,
        "message": enquiry.message,
        "created_at": enquiry.created_at.to_rfc3339(),
        "source": FORWARD_SOURCE_TAG,
        "timestamp": attempted_at.to_rfc3339(),
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
