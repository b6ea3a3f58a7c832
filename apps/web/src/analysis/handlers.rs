//! Axum route handlers for the analyzer form and the JSON API.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::Html,
    Json,
};

use crate::analysis::generator::AnalysisReport;
use crate::analysis::page::AnalyzerPage;
use crate::analysis::submission::{run_analysis, Submission};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /
pub async fn handle_index() -> Result<Html<String>, AppError> {
    AnalyzerPage::new(String::new()).into_html()
}

/// POST /analyze
///
/// Renders the form again with the result, a missing-input warning, or the
/// error that stopped the analysis. Only a malformed multipart body skips the
/// page and returns the JSON error.
pub async fn handle_analyze_form(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<(StatusCode, Html<String>), AppError> {
    let submission = Submission::from_multipart(multipart).await?;
    let mut page = AnalyzerPage::new(submission.job_description.clone().unwrap_or_default());

    let status = match run_analysis(state.llm.as_ref(), submission).await {
        Ok(report) => {
            page.result = Some(report);
            StatusCode::OK
        }
        Err(e) => {
            e.log();
            if matches!(e, AppError::MissingInput) {
                page.warning = Some(e.user_message());
            } else {
                page.error = Some(e.user_message());
            }
            e.status_code()
        }
    };

    Ok((status, page.into_html()?))
}

/// POST /api/v1/analyze
///
/// Same multipart form as `/analyze`; returns the report as JSON.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisReport>, AppError> {
    let submission = Submission::from_multipart(multipart).await?;
    let report = run_analysis(state.llm.as_ref(), submission).await?;
    Ok(Json(report))
}
