use std::sync::Arc;

use arcsite_relay::EnquiryRelay;
use arcsite_storage::BlobStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: arcsite_db::DbPool,
    /// Server configuration (accessed by middleware and auth).
    pub config: Arc<ServerConfig>,
    /// Blob store for uploaded project/team images.
    pub storage: Arc<dyn BlobStore>,
    /// CRM webhook delivery client.
    pub relay: Arc<EnquiryRelay>,
}
