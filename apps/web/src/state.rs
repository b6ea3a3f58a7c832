use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::GenerativeService;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only after startup. The credential lives inside the `llm` client.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn GenerativeService>,
    pub config: Config,
}
