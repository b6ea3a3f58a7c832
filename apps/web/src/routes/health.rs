use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
    /// Where the Gemini credential was resolved from; never the key itself.
    pub credential: String,
    pub max_upload_bytes: usize,
}

/// GET /health
///
/// Always "ok" while the process serves requests. A `missing` credential is
/// reported but does not fail the check: analysis calls will surface the
/// remote authentication error instead.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthReport> {
    Json(HealthReport {
        status: "ok",
        service: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        credential: state.config.credential_source.to_string(),
        max_upload_bytes: state.config.max_upload_bytes,
    })
}
