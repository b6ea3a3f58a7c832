//! Form submission: parses the multipart form and runs one analysis.
//!
//! Validation happens before anything else: a submission missing either field
//! makes no remote call. Each submission is independent; nothing is cached.

use axum::extract::Multipart;
use bytes::Bytes;
use tracing::{debug, info};

use crate::analysis::generator::{generate_analysis, AnalysisReport};
use crate::analysis::prompts::ATS_SCANNER_PROMPT;
use crate::document::extract_text_blocking;
use crate::errors::AppError;
use crate::llm_client::GenerativeService;

pub const JOB_DESCRIPTION_FIELD: &str = "job_description";
pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Clone)]
pub struct UploadedDocument {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// The two form inputs. `None` means the field was absent or empty.
#[derive(Debug, Clone, Default)]
pub struct Submission {
    pub job_description: Option<String>,
    pub resume: Option<UploadedDocument>,
}

impl Submission {
    /// Reads the form fields. Unknown fields are skipped, and when a field is
    /// repeated the first non-empty value is kept.
    ///
    /// A browser sends an empty file part when no file was chosen, and a
    /// whitespace-only job description carries nothing to match against; both
    /// count as absent.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut submission = Submission::default();

        while let Some(field) = multipart.next_field().await? {
            let name = field.name().map(str::to_string);
            match name.as_deref() {
                Some(JOB_DESCRIPTION_FIELD) => {
                    let text = field.text().await?;
                    if submission.job_description.is_some() {
                        debug!("Ignoring repeated {JOB_DESCRIPTION_FIELD} field");
                    } else {
                        submission.job_description =
                            Some(text).filter(|t| !t.trim().is_empty());
                    }
                }
                Some(RESUME_FIELD) => {
                    let file_name = field.file_name().map(str::to_string);
                    let bytes = field.bytes().await?;
                    if submission.resume.is_some() {
                        debug!("Ignoring repeated {RESUME_FIELD} field");
                    } else {
                        submission.resume = (!bytes.is_empty())
                            .then_some(UploadedDocument { file_name, bytes });
                    }
                }
                other => debug!("Ignoring form field {other:?}"),
            }
        }

        Ok(submission)
    }

    /// Returns both inputs, or `MissingInput` if either is absent.
    pub fn require_complete(self) -> Result<(UploadedDocument, String), AppError> {
        match (self.resume, self.job_description) {
            (Some(resume), Some(job_description)) => Ok((resume, job_description)),
            _ => Err(AppError::MissingInput),
        }
    }
}

/// Validates, extracts resume text and asks the model for an analysis.
pub async fn run_analysis(
    service: &dyn GenerativeService,
    submission: Submission,
) -> Result<AnalysisReport, AppError> {
    let (resume, job_description) = submission.require_complete()?;

    info!(
        "Analyzing resume {} ({} bytes)",
        resume.file_name.as_deref().unwrap_or("<unnamed>"),
        resume.bytes.len()
    );

    let resume_text = extract_text_blocking(resume.bytes).await?;
    if resume_text.trim().is_empty() {
        info!("Resume has no extractable text; sending empty resume section");
    }

    generate_analysis(service, ATS_SCANNER_PROMPT, &resume_text, &job_description).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::test_pdf::{pdf_with_pages, PageSpec};
    use crate::llm_client::testing::StubService;

    const JOB_DESCRIPTION: &str = "Looking for Python and SQL engineer";

    fn resume(bytes: Vec<u8>) -> UploadedDocument {
        UploadedDocument {
            file_name: Some("resume.pdf".to_string()),
            bytes: Bytes::from(bytes),
        }
    }

    fn python_sql_submission() -> Submission {
        Submission {
            job_description: Some(JOB_DESCRIPTION.to_string()),
            resume: Some(resume(pdf_with_pages(&[PageSpec::Text("Python, SQL")]))),
        }
    }

    #[tokio::test]
    async fn test_missing_fields_warn_without_remote_calls() {
        let pdf = || Some(resume(b"%PDF-1.5 placeholder".to_vec()));
        let jd = || Some(JOB_DESCRIPTION.to_string());
        let incomplete = [
            Submission { resume: None, job_description: None },
            Submission { resume: pdf(), job_description: None },
            Submission { resume: None, job_description: jd() },
        ];

        for submission in incomplete {
            let service = StubService::replying("Match: 90%");
            let err = run_analysis(&service, submission).await.unwrap_err();
            assert!(matches!(err, AppError::MissingInput));
            assert_eq!(service.remote_calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_complete_submission_reaches_remote_service() {
        let service = StubService::replying("Match: 90%");
        run_analysis(&service, python_sql_submission()).await.unwrap();
        assert_eq!(service.list_calls(), 1);
        assert_eq!(service.generate_calls().len(), 1);
    }

    #[tokio::test]
    async fn test_end_to_end_output_is_remote_text_exactly() {
        let service = StubService::replying("Match: 90%");
        let report = run_analysis(&service, python_sql_submission()).await.unwrap();
        assert_eq!(report.analysis, "Match: 90%");

        let calls = service.generate_calls();
        let prompt = &calls[0].1;
        assert!(prompt.starts_with(ATS_SCANNER_PROMPT));
        assert!(prompt.contains("Python, SQL"));
        assert!(prompt.ends_with(&format!("\n\nJob Description:\n{JOB_DESCRIPTION}")));
    }

    #[tokio::test]
    async fn test_repeated_submission_is_not_cached() {
        let service = StubService::replying("Match: 90%");
        let submission = python_sql_submission();

        run_analysis(&service, submission.clone()).await.unwrap();
        run_analysis(&service, submission).await.unwrap();

        let calls = service.generate_calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(service.list_calls(), 2);
        assert_eq!(calls[0].1.as_bytes(), calls[1].1.as_bytes());
    }

    #[tokio::test]
    async fn test_unreadable_pdf_is_reported_before_any_remote_call() {
        let service = StubService::replying("Match: 90%");
        let submission = Submission {
            job_description: Some(JOB_DESCRIPTION.to_string()),
            resume: Some(resume(b"definitely not a pdf".to_vec())),
        };
        let err = run_analysis(&service, submission).await.unwrap_err();
        assert!(matches!(err, AppError::Document(_)));
        assert!(err.user_message().starts_with("An error occurred: "));
        assert_eq!(service.remote_calls(), 0);
    }

    #[tokio::test]
    async fn test_image_only_resume_is_still_analyzed() {
        let service = StubService::replying("Match: 0%");
        let submission = Submission {
            job_description: Some(JOB_DESCRIPTION.to_string()),
            resume: Some(resume(pdf_with_pages(&[PageSpec::Blank]))),
        };
        let report = run_analysis(&service, submission).await.unwrap();
        assert_eq!(report.analysis, "Match: 0%");

        let calls = service.generate_calls();
        let prompt = &calls[0].1;
        let (_, after_header) = prompt.split_once("Resume Text:\n").unwrap();
        let (resume_text, _) = after_header.split_once("\n\nJob Description:").unwrap();
        assert!(resume_text.trim().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_message_is_verbatim() {
        let service = StubService::failing(500, "Internal error encountered.");
        let err = run_analysis(&service, python_sql_submission())
            .await
            .unwrap_err();
        assert!(err.user_message().contains("Internal error encountered."));
    }
}
