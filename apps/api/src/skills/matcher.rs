//! Skill Matcher — compares resume skills against job skills.
//!
//! Algorithm:
//! 1. Map every skill to a comparison key (lowercase, trimmed, only `[a-z0-9+#.]` kept).
//! 2. For each job skill, scan resume skills in order; the first resume skill
//!    that `skills_match` wins. No ranking.
//! 3. Resume skills matching no job skill are "additional".
//! 4. match_percentage = round(matched / job skills × 100), 0 with no job skills.
//!
//! Pure and total: every input pair yields a report, nothing here can fail.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::skills::skill_set::SkillSet;
use crate::skills::synonyms::share_group;

const MISSING_RATIONALE: &str = "Required in job description but not found in resume.";

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// One job skill with the reason it was matched or reported missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillDetail {
    pub skill: String,
    pub rationale: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReport {
    pub match_percentage: u32, // 0 – 100
    #[serde(rename = "matchedSkills")]
    pub matched_skill_names: Vec<String>,
    #[serde(rename = "missingSkills")]
    pub missing_skill_names: Vec<String>,
    #[serde(rename = "additionalSkills")]
    pub additional_skill_names: Vec<String>,
    /// One entry per job skill, not deduplicated.
    pub matched_skill_details: Vec<SkillDetail>,
    /// One entry per job skill, not deduplicated.
    pub missing_skill_details: Vec<SkillDetail>,
}

/// A skill's original spelling alongside its comparison key.
struct KeyedSkill<'a> {
    original: &'a str,
    key: String,
}

fn keyed(skills: Vec<&str>) -> Vec<KeyedSkill<'_>> {
    skills
        .into_iter()
        .map(|original| KeyedSkill {
            original,
            key: comparison_key(original),
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Equivalence policy
// ────────────────────────────────────────────────────────────────────────────

/// Lowercases, trims, and drops every character outside `[a-z0-9+#.]`.
/// Keeps "c++", "c#" and "node.js" distinct from their stripped forms.
pub fn comparison_key(skill: &str) -> String {
    skill
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '+' | '#' | '.'))
        .collect()
}

/// Equivalence of two comparison keys, checked in order: exact equality,
/// substring containment either way, shared synonym group.
pub fn skills_match(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    // Stem variants: "react" / "reactjs"
    if a.contains(b) || b.contains(a) {
        return true;
    }

    share_group(a, b)
}

// ────────────────────────────────────────────────────────────────────────────
// Matcher
// ────────────────────────────────────────────────────────────────────────────

/// Matches resume skills against job skills. The percentage is relative to
/// the job skill count, so the operation is not symmetric.
pub fn match_skills(resume_skills: &SkillSet, job_skills: &SkillSet) -> MatchReport {
    let resume = keyed(resume_skills.all_skills());
    let job = keyed(job_skills.all_skills());

    if job.is_empty() {
        return MatchReport {
            additional_skill_names: dedup_preserving_order(
                resume.iter().map(|r| r.original),
            ),
            ..Default::default()
        };
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut matched_skill_details = Vec::new();
    let mut missing_skill_details = Vec::new();

    for job_skill in &job {
        match resume.iter().find(|r| skills_match(&r.key, &job_skill.key)) {
            Some(resume_skill) => {
                matched.push(job_skill.original);
                matched_skill_details.push(SkillDetail {
                    skill: job_skill.original.to_string(),
                    rationale: format!(
                        "Found matching resume skill: \"{}\"",
                        resume_skill.original
                    ),
                });
            }
            None => {
                missing.push(job_skill.original);
                missing_skill_details.push(SkillDetail {
                    skill: job_skill.original.to_string(),
                    rationale: MISSING_RATIONALE.to_string(),
                });
            }
        }
    }

    let additional = resume
        .iter()
        .filter(|r| !job.iter().any(|j| skills_match(&r.key, &j.key)))
        .map(|r| r.original);

    // Numerator counts every matched job skill, before name deduplication.
    let match_percentage = ((matched.len() as f64 / job.len() as f64) * 100.0).round() as u32;

    MatchReport {
        match_percentage,
        matched_skill_names: dedup_preserving_order(matched),
        missing_skill_names: dedup_preserving_order(missing),
        additional_skill_names: dedup_preserving_order(additional),
        matched_skill_details,
        missing_skill_details,
    }
}

/// Exact-string dedup, first occurrence wins.
fn dedup_preserving_order<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| seen.insert(*name))
        .map(String::from)
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skills::skill_set::RawSkills;

    fn skills(technical: &[&str]) -> SkillSet {
        SkillSet::from_raw(RawSkills {
            technical_skills: Some(technical.iter().map(|s| Some(s.to_string())).collect()),
            ..Default::default()
        })
    }

    #[test]
    fn test_comparison_key_strips_punctuation_but_keeps_plus_hash_dot() {
        assert_eq!(comparison_key("  C++ "), "c++");
        assert_eq!(comparison_key("C#"), "c#");
        assert_eq!(comparison_key("Node.js"), "node.js");
        assert_eq!(comparison_key("CI/CD"), "cicd");
        assert_eq!(comparison_key("REST APIs"), "restapis");
        assert_eq!(comparison_key("Objective-C"), "objectivec");
    }

    #[test]
    fn test_comparison_key_drops_non_ascii() {
        assert_eq!(comparison_key("Café Ops"), "cafops");
    }

    #[test]
    fn test_exact_match_scenario() {
        let report = match_skills(
            &skills(&["JavaScript", "Docker"]),
            &skills(&["JavaScript", "Python"]),
        );
        assert_eq!(report.match_percentage, 50);
        assert_eq!(report.matched_skill_names, vec!["JavaScript"]);
        assert_eq!(report.missing_skill_names, vec!["Python"]);
        assert_eq!(report.additional_skill_names, vec!["Docker"]);
    }

    #[test]
    fn test_synonym_match() {
        let report = match_skills(&skills(&["Node"]), &skills(&["nodejs"]));
        assert_eq!(report.match_percentage, 100);
        assert_eq!(report.matched_skill_names, vec!["nodejs"]);
        assert!(report.additional_skill_names.is_empty());
    }

    #[test]
    fn test_synonym_only_match_without_substring() {
        // "k8s" and "kubernetes" share no substring
        let report = match_skills(&skills(&["K8s"]), &skills(&["Kubernetes"]));
        assert_eq!(report.match_percentage, 100);
        assert_eq!(
            report.matched_skill_details[0].rationale,
            "Found matching resume skill: \"K8s\""
        );
    }

    #[test]
    fn test_substring_match() {
        assert!(skills_match("react", "reactjs"));
        let report = match_skills(&skills(&["React"]), &skills(&["ReactJS"]));
        assert_eq!(report.match_percentage, 100);
        assert_eq!(report.matched_skill_names, vec!["ReactJS"]);
    }

    #[test]
    fn test_empty_job_skills_scores_zero() {
        let report = match_skills(&skills(&["Rust", "Go"]), &skills(&[]));
        assert_eq!(report.match_percentage, 0);
        assert!(report.matched_skill_names.is_empty());
        assert!(report.missing_skill_names.is_empty());
        assert!(report.matched_skill_details.is_empty());
        assert!(report.missing_skill_details.is_empty());
    }

    #[test]
    fn test_empty_resume_marks_every_job_skill_missing() {
        let report = match_skills(&skills(&[]), &skills(&["Rust", "Kafka"]));
        assert_eq!(report.match_percentage, 0);
        assert_eq!(report.missing_skill_names, vec!["Rust", "Kafka"]);
        assert_eq!(report.missing_skill_details.len(), 2);
        assert_eq!(
            report.missing_skill_details[1].rationale,
            "Required in job description but not found in resume."
        );
    }

    #[test]
    fn test_rounding_one_of_three() {
        let report = match_skills(&skills(&["Rust"]), &skills(&["Rust", "Haskell", "Erlang"]));
        assert_eq!(report.match_percentage, 33);
    }

    #[test]
    fn test_rounding_two_of_three_rounds_up() {
        let report = match_skills(
            &skills(&["Rust", "Haskell"]),
            &skills(&["Rust", "Haskell", "Erlang"]),
        );
        assert_eq!(report.match_percentage, 67);
    }

    #[test]
    fn test_rounding_half_rounds_up() {
        // 1 / 8 = 12.5%
        let report = match_skills(
            &skills(&["Rust"]),
            &skills(&["Rust", "Zig", "Nim", "Odin", "Ada", "Forth", "Lisp", "Prolog"]),
        );
        assert_eq!(report.match_percentage, 13);
    }

    #[test]
    fn test_first_match_wins_scan_order() {
        // "java" neither contains nor is contained by "js" and is not in the
        // javascript group, so the scan falls through to "JavaScript".
        let report = match_skills(&skills(&["Java", "JavaScript"]), &skills(&["JS"]));
        assert_eq!(report.match_percentage, 100);
        assert_eq!(
            report.matched_skill_details[0].rationale,
            "Found matching resume skill: \"JavaScript\""
        );
        assert_eq!(report.additional_skill_names, vec!["Java"]);
    }

    #[test]
    fn test_first_match_wins_over_better_candidate() {
        // "Java" contains-matches "JavaScript" before the exact entry is reached.
        let report = match_skills(&skills(&["Java", "JavaScript"]), &skills(&["JavaScript"]));
        assert_eq!(
            report.matched_skill_details[0].rationale,
            "Found matching resume skill: \"Java\""
        );
    }

    #[test]
    fn test_execute_is_idempotent() {
        let resume = skills(&["Python", "Django", "Postgres"]);
        let job = skills(&["PostgreSQL", "Python", "AWS"]);
        assert_eq!(match_skills(&resume, &job), match_skills(&resume, &job));
    }

    #[test]
    fn test_percentage_is_not_symmetric() {
        let a = skills(&["Rust", "Go", "Python", "Docker"]);
        let b = skills(&["Rust"]);
        assert_eq!(match_skills(&a, &b).match_percentage, 100);
        assert_eq!(match_skills(&b, &a).match_percentage, 25);
    }

    #[test]
    fn test_details_not_deduplicated_but_names_are() {
        // Different categories may carry the same spelling.
        let job = SkillSet::from_raw(RawSkills {
            technical_skills: Some(vec![Some("Docker".to_string())]),
            tools: Some(vec![Some("Docker".to_string()), Some("Terraform".to_string())]),
            ..Default::default()
        });
        let report = match_skills(&skills(&["docker"]), &job);
        assert_eq!(report.matched_skill_names, vec!["Docker"]);
        assert_eq!(report.matched_skill_details.len(), 2);
        assert_eq!(report.missing_skill_names, vec!["Terraform"]);
        // 2 of 3 job skills matched
        assert_eq!(report.match_percentage, 67);
    }

    #[test]
    fn test_additional_skills_deduplicated() {
        let resume = SkillSet::from_raw(RawSkills {
            technical_skills: Some(vec![Some("Figma".to_string())]),
            tools: Some(vec![Some("Figma".to_string())]),
            ..Default::default()
        });
        let report = match_skills(&resume, &skills(&["Rust"]));
        assert_eq!(report.additional_skill_names, vec!["Figma"]);
    }

    #[test]
    fn test_slash_variant_in_cicd_group_is_unreachable() {
        // "CI/CD" keys to "cicd", which is the canonical entry, not "ci/cd".
        assert_eq!(comparison_key("CI/CD"), "cicd");
        let report = match_skills(&skills(&["CI/CD"]), &skills(&["Continuous Integration"]));
        assert_eq!(report.match_percentage, 0);
    }

    #[test]
    fn test_cross_group_ci_matches_cd_via_cicd() {
        assert!(skills_match("ci", "cd"));
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = match_skills(&skills(&["Rust"]), &skills(&["Rust", "Go"]));
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["matchPercentage"], 50);
        assert_eq!(value["matchedSkills"][0], "Rust");
        assert_eq!(value["missingSkills"][0], "Go");
        assert_eq!(value["matchedSkillDetails"][0]["skill"], "Rust");
        assert!(value["additionalSkills"].as_array().unwrap().is_empty());
    }
}
