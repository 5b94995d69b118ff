//! Resume Analysis — orchestrates the full analysis pipeline.
//!
//! Flow: resume text → extract resume skills → extract job skills →
//!       match_skills → suggestions → `AnalysisResult`.
//!
//! PDF decoding happens before this point (see `pdf`); the pipeline only sees text.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AppError;
use crate::extraction::{SkillExtractor, SuggestionRequest};
use crate::skills::{match_skills, SkillDetail, SkillSet};

/// Percentage at which a resume counts as a good match.
const GOOD_MATCH_THRESHOLD: u32 = 70;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub match_percentage: u32,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub additional_skills: Vec<String>,
    pub matched_skill_details: Vec<SkillDetail>,
    pub missing_skill_details: Vec<SkillDetail>,
    pub suggestions: Vec<String>,
    pub resume_skills: SkillSet,
    pub job_skills: SkillSet,
}

impl AnalysisResult {
    pub fn is_good_match(&self) -> bool {
        self.match_percentage >= GOOD_MATCH_THRESHOLD
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Analysis pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the analysis pipeline over already-extracted resume text.
///
/// Steps:
/// 1. reject blank resume text
/// 2. extractor.extract_skills() for the resume, then the job description
/// 3. reject an empty job SkillSet (the matcher would score it 0 regardless)
/// 4. match_skills() → MatchReport
/// 5. extractor.generate_suggestions()
pub async fn analyze(
    extractor: &dyn SkillExtractor,
    resume_text: &str,
    job_description: &str,
) -> Result<AnalysisResult, AppError> {
    info!(
        "Starting resume analysis: resume_chars={}, job_description_chars={}",
        resume_text.len(),
        job_description.len()
    );

    if resume_text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract readable text from the resume PDF".to_string(),
        ));
    }

    debug!("Extracting skills from resume...");
    let resume_skills = extractor.extract_skills(resume_text).await?;

    debug!("Extracting skills from job description...");
    let job_skills = extractor.extract_skills(job_description).await?;

    if job_skills.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Could not extract skills from the job description. Please provide a more detailed description."
                .to_string(),
        ));
    }

    debug!("Matching skills...");
    let report = match_skills(&resume_skills, &job_skills);

    debug!("Generating improvement suggestions...");
    let resume_all = resume_skills.all_skills();
    let job_all = job_skills.all_skills();
    let suggestions = extractor
        .generate_suggestions(SuggestionRequest {
            resume_skills: &resume_all,
            job_skills: &job_all,
            matched_skills: &report.matched_skill_names,
            missing_skills: &report.missing_skill_names,
            match_percentage: report.match_percentage,
        })
        .await;

    let result = AnalysisResult {
        match_percentage: report.match_percentage,
        matched_skills: report.matched_skill_names,
        missing_skills: report.missing_skill_names,
        additional_skills: report.additional_skill_names,
        matched_skill_details: report.matched_skill_details,
        missing_skill_details: report.missing_skill_details,
        suggestions,
        resume_skills,
        job_skills,
    };

    info!(
        "Resume analysis completed: match_percentage={}, good_match={}, matched={}, missing={}",
        result.match_percentage,
        result.is_good_match(),
        result.matched_skills.len(),
        result.missing_skills.len()
    );

    Ok(result)
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
