//! Response Generator: builds the composite prompt and asks the model for an analysis.
//!
//! Flow: select_model → build_prompt → generate_content → return text as-is.
//!
//! The reply is never parsed. The instructions ask for three sections but the
//! model may ignore that, and partial output is passed through unchanged.

use serde::Serialize;
use tracing::info;

use crate::analysis::model_selector::select_model;
use crate::analysis::prompts::{JOB_DESCRIPTION_HEADER, RESUME_HEADER};
use crate::errors::AppError;
use crate::llm_client::GenerativeService;

/// Result of one analysis call.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    /// Catalog name of the model that answered.
    pub model: String,
    /// The model's reply, verbatim.
    pub analysis: String,
}

/// Concatenates instructions, resume text and job description under fixed headers.
pub fn build_prompt(instructions: &str, resume_text: &str, job_description: &str) -> String {
    format!(
        "{instructions}\n\n{RESUME_HEADER}\n{resume_text}\n\n{JOB_DESCRIPTION_HEADER}\n{job_description}"
    )
}

/// Selects a model and submits one generation request.
///
/// Inputs are not length-checked; oversized prompts are rejected by the
/// service and come back as `AppError::Llm`.
pub async fn generate_analysis(
    service: &dyn GenerativeService,
    instructions: &str,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisReport, AppError> {
    let model = select_model(service).await;
    let prompt = build_prompt(instructions, resume_text, job_description);

    info!(
        "Submitting analysis prompt to {model} ({} chars, resume {} chars)",
        prompt.len(),
        resume_text.len()
    );

    let analysis = service.generate_content(&model, &prompt).await?;

    Ok(AnalysisReport { model, analysis })
}
