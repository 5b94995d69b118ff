use async_trait::async_trait;

use crate::analysis::quality::{QualityCheckResult, ResumeQuality};
use crate::errors::AppError;
use crate::extraction::{SkillExtractor, SuggestionRequest};
use crate::skills::{RawSkills, SkillSet};

/// Canned extractor for `AI_PROVIDER=mock`. Ignores its input.
pub struct MockSkillExtractor;

fn list(items: &[&str]) -> Option<Vec<Option<String>>> {
    Some(items.iter().map(|s| Some(s.to_string())).collect())
}

#[async_trait]
impl SkillExtractor for MockSkillExtractor {
    async fn extract_skills(&self, _text: &str) -> Result<SkillSet, AppError> {
        Ok(SkillSet::from_raw(RawSkills {
            technical_skills: list(&["JavaScript", "TypeScript", "React", "Node.js"]),
            soft_skills: list(&["Communication", "Problem Solving"]),
            tools: list(&["Git", "Docker"]),
            frameworks: list(&["Express", "Next.js"]),
            languages: list(&["English"]),
        }))
    }

    async fn generate_suggestions(&self, _request: SuggestionRequest<'_>) -> Vec<String> {
        vec![
            "Highlight your React and Node.js experience.".to_string(),
            "Add recent projects demonstrating backend APIs.".to_string(),
            "Mention cloud or container experience if applicable.".to_string(),
        ]
    }

    async fn check_quality(&self, _resume_text: &str) -> Result<QualityCheckResult, AppError> {
        Ok(QualityCheckResult {
            is_suitable: true,
            quality: ResumeQuality::Good,
            issues: vec!["Mock quality check".to_string()],
            summary: "This is a mock quality check result.".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_skills_are_populated() {
        let skills = MockSkillExtractor.extract_skills("anything").await.unwrap();
        assert_eq!(skills.all_skills().len(), 11);
        assert_eq!(skills.frameworks(), ["Express", "Next.js"]);
    }

    #[tokio::test]
    async fn test_mock_suggestions_count() {
        let suggestions = MockSkillExtractor
            .generate_suggestions(SuggestionRequest {
                resume_skills: &[],
                job_skills: &[],
                matched_skills: &[],
                missing_skills: &[],
                match_percentage: 0,
            })
            .await;
        assert_eq!(suggestions.len(), 3);
    }

    #[tokio::test]
    async fn test_mock_quality_is_suitable() {
        let result = MockSkillExtractor.check_quality("text").await.unwrap();
        assert!(result.is_suitable);
        assert_eq!(result.quality, ResumeQuality::Good);
    }
}
