//! Skill Extraction — pluggable, trait-based boundary to the AI provider.
//!
//! Default: `LlmSkillExtractor` over the configured provider.
//! `MockSkillExtractor` returns canned data so the service runs without billing.
//!
//! `AppState` holds an `Arc<dyn SkillExtractor>`, chosen at startup via `AI_PROVIDER`.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use tracing::{error, warn};

use crate::analysis::quality::QualityCheckResult;
use crate::config::{AiProvider, Config};
use crate::errors::AppError;
use crate::llm_client::prompts::{
    JSON_ONLY_SYSTEM, QUALITY_CHECK_PROMPT, SKILL_EXTRACTION_PROMPT, SUGGESTIONS_PROMPT,
};
use crate::llm_client::{parse_json_text, CallOptions, LlmClient, LlmProvider};
use crate::skills::SkillSet;

pub mod mock;

pub use mock::MockSkillExtractor;

pub const EMPTY_SUGGESTIONS_FALLBACK: &str =
    "Consider tailoring your resume to match the job description more closely.";
pub const FAILED_SUGGESTIONS_FALLBACK: &str =
    "Unable to generate suggestions at this time. Please try again.";

const EXTRACTION_OPTIONS: CallOptions = CallOptions {
    temperature: 0.3,
    max_tokens: 2048,
};
const SUGGESTION_OPTIONS: CallOptions = CallOptions {
    temperature: 0.7,
    max_tokens: 1024,
};
const QUALITY_OPTIONS: CallOptions = CallOptions {
    temperature: 0.3,
    max_tokens: 1024,
};

/// Everything the suggestion writer gets to see about one analysis.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    pub resume_skills: &'a [&'a str],
    pub job_skills: &'a [&'a str],
    pub matched_skills: &'a [String],
    pub missing_skills: &'a [String],
    pub match_percentage: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The extractor trait. Implement this to swap providers without touching
/// the analysis pipeline or the handlers.
#[async_trait]
pub trait SkillExtractor: Send + Sync {
    /// Categorized skills mentioned in `text`. An empty model answer is an
    /// empty `SkillSet`, not an error.
    async fn extract_skills(&self, text: &str) -> Result<SkillSet, AppError>;

    /// 3–5 improvement suggestions. Never fails; falls back to a fixed message.
    async fn generate_suggestions(&self, request: SuggestionRequest<'_>) -> Vec<String>;

    async fn check_quality(&self, resume_text: &str) -> Result<QualityCheckResult, AppError>;
}

/// Picks the extractor backend for the configured provider.
pub fn build_extractor(config: &Config) -> anyhow::Result<Arc<dyn SkillExtractor>> {
    let provider = match config.ai_provider {
        AiProvider::Mock => return Ok(Arc::new(MockSkillExtractor)),
        AiProvider::OpenAi => LlmProvider::OpenAi,
        AiProvider::Gemini => LlmProvider::Gemini,
        AiProvider::Groq => LlmProvider::Groq,
    };

    let api_key = config
        .ai_api_key
        .clone()
        .context("AI provider API key missing from config")?;
    let llm = LlmClient::new(provider, api_key).context("Failed to build HTTP client")?;

    Ok(Arc::new(LlmSkillExtractor(llm)))
}

// ────────────────────────────────────────────────────────────────────────────
// LlmSkillExtractor
// ────────────────────────────────────────────────────────────────────────────

pub struct LlmSkillExtractor(pub LlmClient);

#[async_trait]
impl SkillExtractor for LlmSkillExtractor {
    async fn extract_skills(&self, text: &str) -> Result<SkillSet, AppError> {
        let provider = self.0.provider().name();
        let prompt = SKILL_EXTRACTION_PROMPT.replace("{text}", text);

        let content = self
            .0
            .call(&prompt, JSON_ONLY_SYSTEM, EXTRACTION_OPTIONS)
            .await
            .map_err(|e| AppError::Llm(format!("{provider} skill extraction failed: {e}")))?;

        let Some(content) = content else {
            warn!("Empty response from {provider} for skill extraction");
            return Ok(SkillSet::default());
        };

        parse_json_text::<SkillSet>(&content).map_err(|e| {
            error!("Failed to parse {provider} skill extraction response: {e}; content: {content}");
            AppError::Llm(format!("Failed to parse AI response: {e}"))
        })
    }

    async fn generate_suggestions(&self, request: SuggestionRequest<'_>) -> Vec<String> {
        let provider = self.0.provider().name();
        let prompt = build_suggestions_prompt(&request);

        match self.0.call(&prompt, JSON_ONLY_SYSTEM, SUGGESTION_OPTIONS).await {
            Ok(None) => {
                warn!("Empty response from {provider} for suggestions");
                vec![EMPTY_SUGGESTIONS_FALLBACK.to_string()]
            }
            Ok(Some(content)) => match parse_json_text::<Vec<String>>(&content) {
                Ok(suggestions) => suggestions,
                Err(e) => {
                    error!("Failed to parse {provider} suggestions: {e}");
                    vec![FAILED_SUGGESTIONS_FALLBACK.to_string()]
                }
            },
            Err(e) => {
                error!("Error generating suggestions with {provider}: {e}");
                vec![FAILED_SUGGESTIONS_FALLBACK.to_string()]
            }
        }
    }

    async fn check_quality(&self, resume_text: &str) -> Result<QualityCheckResult, AppError> {
        let provider = self.0.provider().name();
        let prompt = QUALITY_CHECK_PROMPT.replace("{resume_text}", resume_text);

        self.0
            .call_json::<QualityCheckResult>(&prompt, JSON_ONLY_SYSTEM, QUALITY_OPTIONS)
            .await
            .map_err(|e| AppError::Llm(format!("{provider} quality check failed: {e}")))
    }
}

fn build_suggestions_prompt(request: &SuggestionRequest<'_>) -> String {
    let as_json = |value: serde_json::Value| value.to_string();

    SUGGESTIONS_PROMPT
        .replace("{resume_skills}", &as_json(serde_json::json!(request.resume_skills)))
        .replace("{job_skills}", &as_json(serde_json::json!(request.job_skills)))
        .replace("{matched_skills}", &as_json(serde_json::json!(request.matched_skills)))
        .replace("{missing_skills}", &as_json(serde_json::json!(request.missing_skills)))
        .replace("{match_percentage}", &request.match_percentage.to_string())
}
