//! Resume quality check — is the extracted text usable for matching at all?

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::extraction::SkillExtractor;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResumeQuality {
    Excellent,
    Good,
    Average,
    Poor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityCheckResult {
    pub is_suitable: bool,
    pub quality: ResumeQuality,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub summary: String,
}

impl QualityCheckResult {
    /// Verdict for a resume with no extractable text.
    pub fn unreadable() -> Self {
        Self {
            is_suitable: false,
            quality: ResumeQuality::Poor,
            issues: vec![
                "Could not extract any text from the resume PDF. It might be an image-based PDF or corrupted."
                    .to_string(),
            ],
            summary: "The resume content is unreadable.".to_string(),
        }
    }
}

/// Grades resume text. Blank text short-circuits to `unreadable()` without a model call.
pub async fn check_quality(
    extractor: &dyn SkillExtractor,
    resume_text: &str,
) -> Result<QualityCheckResult, AppError> {
    if resume_text.trim().is_empty() {
        warn!("Empty text extracted from resume; skipping quality model call");
        return Ok(QualityCheckResult::unreadable());
    }

    let result = extractor.check_quality(resume_text).await?;

    info!(
        "Resume quality check completed: suitable={}, quality={:?}",
        result.is_suitable, result.quality
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::MockSkillExtractor;

    #[test]
    fn test_quality_deserializes_with_defaults() {
        let json = r#"{"isSuitable": false, "quality": "average"}"#;
        let result: QualityCheckResult = serde_json::from_str(json).unwrap();
        assert!(!result.is_suitable);
        assert_eq!(result.quality, ResumeQuality::Average);
        assert!(result.issues.is_empty());
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_quality_rejects_unknown_level() {
        let json = r#"{"isSuitable": true, "quality": "stellar"}"#;
        assert!(serde_json::from_str::<QualityCheckResult>(json).is_err());
    }

    #[test]
    fn test_quality_serializes_lowercase() {
        let value = serde_json::to_value(QualityCheckResult::unreadable()).unwrap();
        assert_eq!(value["quality"], "poor");
        assert_eq!(value["isSuitable"], false);
    }

    #[tokio::test]
    async fn test_blank_text_is_unreadable() {
        let result = check_quality(&MockSkillExtractor, "   ").await.unwrap();
        assert_eq!(result, QualityCheckResult::unreadable());
    }

    #[tokio::test]
    async fn test_text_delegates_to_extractor() {
        let result = check_quality(&MockSkillExtractor, "Jane Doe, Rust engineer")
            .await
            .unwrap();
        assert!(result.is_suitable);
        assert_eq!(result.quality, ResumeQuality::Good);
    }
}
