use std::str::FromStr;

use anyhow::{anyhow, bail, Context, Result};

/// Largest accepted resume upload.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;
/// Shortest job description (trimmed, in chars) worth sending to the extractor.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;
pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Which backend extracts skills and writes suggestions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AiProvider {
    OpenAi,
    Gemini,
    Groq,
    Mock,
}

impl FromStr for AiProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(AiProvider::OpenAi),
            "gemini" => Ok(AiProvider::Gemini),
            "groq" => Ok(AiProvider::Groq),
            "mock" => Ok(AiProvider::Mock),
            other => Err(anyhow!(
                "AI_PROVIDER must be one of openai, gemini, groq, mock (got '{other}')"
            )),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Startup fails if the selected provider's API key is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub cors_origins: Vec<String>,
    pub environment: String,
    pub ai_provider: AiProvider,
    /// Key for the selected provider; `None` only for `Mock`.
    pub ai_api_key: Option<String>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so parsing is testable without
    /// touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let ai_provider: AiProvider = lookup("AI_PROVIDER")
            .unwrap_or_else(|| "openai".to_string())
            .parse()?;

        let ai_api_key = match ai_provider {
            AiProvider::OpenAi => Some(require(&lookup, "OPENAI_API_KEY", "openai")?),
            AiProvider::Gemini => Some(require(&lookup, "GEMINI_API_KEY", "gemini")?),
            AiProvider::Groq => Some(require(&lookup, "GROQ_API_KEY", "groq")?),
            AiProvider::Mock => None,
        };

        let cors_origins: Vec<String> = lookup("CORS_ORIGIN")
            .unwrap_or_else(|| "http://localhost:3000".to_string())
            .split(',')
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();

        Ok(Config {
            port: lookup("PORT")
                .unwrap_or_else(|| "3001".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            cors_origins,
            environment: lookup("APP_ENV").unwrap_or_else(|| "development".to_string()),
            ai_provider,
            ai_api_key,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    provider: &str,
) -> Result<String> {
    match lookup(key) {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => bail!("{key} is required when AI_PROVIDER is set to {provider}"),
    }
}
