//! CRM webhook delivery for customer enquiries.
//!
//! [`EnquiryRelay`] performs a single JSON POST of an enquiry payload to the
//! operator-configured endpoint. There is no retry and the endpoint's
//! response status and body are intentionally not inspected: delivery
//! counts as attempted once the request completes at the transport level.
//! Callers decide whether to await the attempt (admin resend) or spawn and
//! forget it (public submission).

use std::time::Duration;

use arcsite_core::enquiry::{forward_payload, EnquirySnapshot};

/// HTTP request timeout for a single delivery attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Error type for relay delivery failures.
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

// ---------------------------------------------------------------------------
// EnquiryRelay
// ---------------------------------------------------------------------------

/// Outcome of a completed delivery attempt, for logging and the admin UI.
#[derive(Debug, Clone)]
pub struct DeliveryReport {
    pub enquiry_id: i64,
    pub endpoint: String,
    pub attempted_at: arcsite_core::types::Timestamp,
}

/// Delivers enquiry payloads to an external CRM webhook.
pub struct EnquiryRelay {
    client: reqwest::Client,
}

impl EnquiryRelay {
    /// Create a new relay with a pre-configured HTTP client.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build reqwest HTTP client");
        Self { client }
    }

    /// POST one enquiry to `endpoint_url`.
    ///
    /// Returns a [`DeliveryReport`] once the request has been handed to the
    /// remote end, whatever status it answered with. A transport-level
    /// failure is returned as [`RelayError::Request`]; the caller chooses
    /// whether that blocks anything (it never blocks a submission).
    pub async fn forward(
        &self,
        endpoint_url: &str,
        enquiry: &EnquirySnapshot,
    ) -> Result<DeliveryReport, RelayError> {
        let attempted_at = chrono::Utc::now();
        let payload = forward_payload(enquiry, attempted_at);

        self.client.post(endpoint_url).json(&payload).send().await?;

        tracing::info!(
            enquiry_id = enquiry.id,
            endpoint = endpoint_url,
            "Enquiry forwarded to CRM webhook"
        );

        Ok(DeliveryReport {
            enquiry_id: enquiry.id,
            endpoint: endpoint_url.to_string(),
            attempted_at,
        })
    }
}

impl Default for EnquiryRelay {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
