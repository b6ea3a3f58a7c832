//! The analyzer form page.

use askama::Template;
use axum::response::Html;

use crate::analysis::generator::AnalysisReport;
use crate::errors::AppError;

pub const PAGE_TITLE: &str = "AI Resume Analyzer";
pub const RESULT_HEADING: &str = "ATS Analysis Result:";

/// Form plus at most one of: result, warning, error.
///
/// The analysis is rendered as escaped text in a pre-wrapped block. Any
/// markdown the model produced is shown as-is.
#[derive(Template, Default)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 760px;
            margin: 0 auto;
            padding: 20px;
        }
        label { display: block; font-weight: 600; margin-top: 16px; }
        textarea { width: 100%; height: 150px; font-family: inherit; }
        button { margin-top: 16px; padding: 8px 20px; }
        .warning { background: #fff4d6; border-left: 4px solid #e0a800; padding: 10px 14px; }
        .error { background: #fde2e1; border-left: 4px solid #c62828; padding: 10px 14px; }
        .analysis { white-space: pre-wrap; background: #f8f9fa; padding: 14px; border-radius: 4px; }
        .model { color: #777; font-size: 0.85em; }
    </style>
</head>
<body>
    <h1>{{ title }}</h1>
    <p>Improve your resume ATS score with Gemini AI</p>

    <form method="post" action="/analyze" enctype="multipart/form-data">
        <label for="job_description">Paste the Job Description (JD)</label>
        <textarea id="job_description" name="job_description">{{ job_description }}</textarea>

        <label for="resume">Upload Your Resume (PDF)</label>
        <input id="resume" name="resume" type="file" accept="application/pdf,.pdf">

        <button type="submit">Analyze Resume</button>
    </form>

    {% if let Some(message) = warning %}
    <p class="warning">{{ message }}</p>
    {% endif %}

    {% if let Some(message) = error %}
    <p class="error">{{ message }}</p>
    {% endif %}

    {% if let Some(report) = result %}
    <h2>{{ result_heading }}</h2>
    <div class="analysis">{{ report.analysis }}</div>
    <p class="model">Model: {{ report.model }}</p>
    {% endif %}
</body>
</html>"#,
    ext = "html"
)]
pub struct AnalyzerPage {
    pub title: &'static str,
    pub result_heading: &'static str,
    pub job_description: String,
    pub result: Option<AnalysisReport>,
    pub warning: Option<String>,
    pub error: Option<String>,
}

impl AnalyzerPage {
    pub fn new(job_description: String) -> Self {
        Self {
            title: PAGE_TITLE,
            result_heading: RESULT_HEADING,
            job_description,
            ..Default::default()
        }
    }

    pub fn into_html(self) -> Result<Html<String>, AppError> {
        self.render()
            .map(Html)
            .map_err(|e| AppError::Internal(e.into()))
    }
}
