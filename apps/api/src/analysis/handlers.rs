//! Axum route handlers for the Analysis API.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::analysis::analyzer::{analyze, AnalysisResult};
use crate::analysis::quality::{check_quality, QualityCheckResult};
use crate::config::{MAX_UPLOAD_BYTES, MIN_JOB_DESCRIPTION_CHARS, PDF_CONTENT_TYPE};
use crate::errors::AppError;
use crate::pdf::extract_text;
use crate::state::AppState;

const RESUME_FIELD: &str = "resume";
const JOB_DESCRIPTION_FIELD: &str = "jobDescription";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Json<Self> {
        Json(Self {
            success: true,
            data,
        })
    }
}

/// An uploaded resume file.
#[derive(Debug)]
pub struct ResumeUpload {
    pub file_name: String,
    pub data: Bytes,
}

/// Fields read from an analysis multipart form. Unknown fields are ignored.
#[derive(Debug, Default)]
pub struct AnalysisForm {
    pub resume: Option<ResumeUpload>,
    pub job_description: Option<String>,
}

fn upload_limit_message() -> String {
    format!(
        "Resume exceeds the {} MB upload limit",
        MAX_UPLOAD_BYTES / (1024 * 1024)
    )
}

fn multipart_error(e: MultipartError, context: &str) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(upload_limit_message())
    } else {
        AppError::Validation(format!("{context}: {e}"))
    }
}

async fn read_form(mut multipart: Multipart) -> Result<AnalysisForm, AppError> {
    let mut form = AnalysisForm::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, "Malformed multipart body"))?
    {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some(RESUME_FIELD) => {
                if field.content_type() != Some(PDF_CONTENT_TYPE) {
                    return Err(AppError::UnsupportedMediaType(
                        "Only PDF files are allowed".to_string(),
                    ));
                }
                let file_name = field.file_name().unwrap_or("resume.pdf").to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| multipart_error(e, "Failed to read resume upload"))?;
                if data.len() > MAX_UPLOAD_BYTES {
                    return Err(AppError::PayloadTooLarge(upload_limit_message()));
                }
                form.resume = Some(ResumeUpload { file_name, data });
            }
            Some(JOB_DESCRIPTION_FIELD) => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| multipart_error(e, "Failed to read job description"))?;
                form.job_description = Some(text);
            }
            _ => {}
        }
    }

    Ok(form)
}

fn require_resume(form: &mut AnalysisForm) -> Result<ResumeUpload, AppError> {
    form.resume.take().ok_or_else(|| {
        AppError::Validation("No resume file uploaded. Please upload a PDF file.".to_string())
    })
}

/// Trimmed job description, or the reason it is unusable.
fn validate_job_description(raw: Option<&str>) -> Result<&str, AppError> {
    let trimmed = raw.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(AppError::Validation("Job description is required.".to_string()));
    }
    if trimmed.chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Job description is too short. Please provide a more detailed description."
                .to_string(),
        ));
    }
    Ok(trimmed)
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/analyze
///
/// Multipart: `resume` (PDF) and `jobDescription` (text).
/// Returns the match report, suggestions, and both extracted skill sets.
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<AnalysisResult>>, AppError> {
    let mut form = read_form(multipart).await?;
    let resume = require_resume(&mut form)?;
    let job_description = validate_job_description(form.job_description.as_deref())?;

    info!(
        "Received analysis request: file={}, size={}, job_description_chars={}",
        resume.file_name,
        resume.data.len(),
        job_description.len()
    );

    let resume_text = extract_text(resume.data).await?;
    let result = analyze(state.extractor.as_ref(), &resume_text, job_description).await?;

    Ok(ApiResponse::ok(result))
}

/// POST /api/analyze/quality
///
/// Multipart: `resume` (PDF). Grades whether the resume is usable for matching.
pub async fn handle_check_quality(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<QualityCheckResult>>, AppError> {
    let mut form = read_form(multipart).await?;
    let resume = require_resume(&mut form)?;

    info!(
        "Received quality check request: file={}, size={}",
        resume.file_name,
        resume.data.len()
    );

    let resume_text = extract_text(resume.data).await?;
    let result = check_quality(state.extractor.as_ref(), &resume_text).await?;

    Ok(ApiResponse::ok(result))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_job_description_rejected() {
        let err = validate_job_description(None).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg == "Job description is required."));
    }

    #[test]
    fn test_blank_job_description_rejected() {
        assert!(validate_job_description(Some("   \n")).is_err());
    }

    #[test]
    fn test_short_job_description_rejected() {
        let err = validate_job_description(Some("Rust dev")).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("too short")));
    }

    #[test]
    fn test_length_checked_after_trim() {
        let padded = format!("   {}   ", "x".repeat(MIN_JOB_DESCRIPTION_CHARS - 1));
        assert!(validate_job_description(Some(&padded)).is_err());
    }

    #[test]
    fn test_valid_job_description_is_trimmed() {
        let jd = format!("  {}  ", "Senior Rust engineer with Kubernetes and Kafka. ".repeat(2));
        let validated = validate_job_description(Some(&jd)).unwrap();
        assert_eq!(validated, jd.trim());
    }

    #[test]
    fn test_missing_resume_rejected() {
        let err = require_resume(&mut AnalysisForm::default()).unwrap_err();
        assert!(matches!(err, AppError::Validation(msg) if msg.contains("No resume file")));
    }
}
