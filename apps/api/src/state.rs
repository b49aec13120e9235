use std::sync::Arc;

use crate::llm_client::LlmClient;
use crate::posts::PostStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Pluggable post store. PostgreSQL when DATABASE_URL is set, in-memory otherwise.
    pub posts: Arc<dyn PostStore>,
}
