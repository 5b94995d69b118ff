#![allow(dead_code)]

//! SkillSet — five categorized skill lists, deduplicated at construction.
//!
//! Extractor output arrives as `RawSkills` (every key and entry nullable) and is
//! normalized exactly once on the way into `SkillSet`. Deserializing a `SkillSet`
//! goes through the same path, so no un-normalized set can exist.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The five skill categories, in flattening order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SkillCategory {
    TechnicalSkills,
    SoftSkills,
    Tools,
    Frameworks,
    Languages,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 5] = [
        SkillCategory::TechnicalSkills,
        SkillCategory::SoftSkills,
        SkillCategory::Tools,
        SkillCategory::Frameworks,
        SkillCategory::Languages,
    ];
}

/// Skill lists as the extractor returns them. Any category may be missing or
/// `null`, and individual entries may be `null`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawSkills {
    pub technical_skills: Option<Vec<Option<String>>>,
    pub soft_skills: Option<Vec<Option<String>>>,
    pub tools: Option<Vec<Option<String>>>,
    pub frameworks: Option<Vec<Option<String>>>,
    pub languages: Option<Vec<Option<String>>>,
}

/// Normalized, deduplicated, categorized skill names. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSkills")]
pub struct SkillSet {
    technical_skills: Vec<String>,
    soft_skills: Vec<String>,
    tools: Vec<String>,
    frameworks: Vec<String>,
    languages: Vec<String>,
}

impl SkillSet {
    /// Builds a SkillSet from raw extractor output, normalizing every category.
    pub fn from_raw(raw: RawSkills) -> Self {
        Self {
            technical_skills: normalize_category(raw.technical_skills),
            soft_skills: normalize_category(raw.soft_skills),
            tools: normalize_category(raw.tools),
            frameworks: normalize_category(raw.frameworks),
            languages: normalize_category(raw.languages),
        }
    }

    pub fn technical_skills(&self) -> &[String] {
        &self.technical_skills
    }

    pub fn soft_skills(&self) -> &[String] {
        &self.soft_skills
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn frameworks(&self) -> &[String] {
        &self.frameworks
    }

    pub fn languages(&self) -> &[String] {
        &self.languages
    }

    pub fn category(&self, category: SkillCategory) -> &[String] {
        match category {
            SkillCategory::TechnicalSkills => &self.technical_skills,
            SkillCategory::SoftSkills => &self.soft_skills,
            SkillCategory::Tools => &self.tools,
            SkillCategory::Frameworks => &self.frameworks,
            SkillCategory::Languages => &self.languages,
        }
    }

    /// All skills flattened: technical, soft, tools, frameworks, languages.
    /// No cross-category deduplication.
    pub fn all_skills(&self) -> Vec<&str> {
        SkillCategory::ALL
            .iter()
            .flat_map(|c| self.category(*c).iter().map(String::as_str))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        SkillCategory::ALL
            .iter()
            .all(|c| self.category(*c).is_empty())
    }
}

impl From<RawSkills> for SkillSet {
    fn from(raw: RawSkills) -> Self {
        Self::from_raw(raw)
    }
}

/// Trims, drops blanks, and keeps the first occurrence per case-insensitive key.
fn normalize_category(entries: Option<Vec<Option<String>>>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    for entry in entries.unwrap_or_default().into_iter().flatten() {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            out.push(trimmed.to_string());
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(items: &[&str]) -> Option<Vec<Option<String>>> {
        Some(items.iter().map(|s| Some(s.to_string())).collect())
    }

    #[test]
    fn test_dedup_keeps_first_trimmed_casing() {
        let set = SkillSet::from_raw(RawSkills {
            tools: list(&["Git", "git", "GIT "]),
            ..Default::default()
        });
        assert_eq!(set.tools(), ["Git"]);
    }

    #[test]
    fn test_first_occurrence_is_trimmed() {
        let set = SkillSet::from_raw(RawSkills {
            languages: list(&["  Rust  ", "rust"]),
            ..Default::default()
        });
        assert_eq!(set.languages(), ["Rust"]);
    }

    #[test]
    fn test_blank_and_null_entries_dropped() {
        let set = SkillSet::from_raw(RawSkills {
            soft_skills: Some(vec![
                None,
                Some(String::new()),
                Some("   ".to_string()),
                Some("Leadership".to_string()),
            ]),
            ..Default::default()
        });
        assert_eq!(set.soft_skills(), ["Leadership"]);
    }

    #[test]
    fn test_no_cross_category_dedup() {
        let set = SkillSet::from_raw(RawSkills {
            technical_skills: list(&["Docker"]),
            tools: list(&["docker"]),
            ..Default::default()
        });
        assert_eq!(set.all_skills(), vec!["Docker", "docker"]);
    }

    #[test]
    fn test_all_skills_preserves_category_order() {
        let set = SkillSet::from_raw(RawSkills {
            technical_skills: list(&["REST APIs"]),
            soft_skills: list(&["Communication"]),
            tools: list(&["Git"]),
            frameworks: list(&["React"]),
            languages: list(&["TypeScript", "Python"]),
        });
        assert_eq!(
            set.all_skills(),
            vec!["REST APIs", "Communication", "Git", "React", "TypeScript", "Python"]
        );
    }

    #[test]
    fn test_absent_categories_are_empty() {
        let set = SkillSet::from_raw(RawSkills::default());
        assert!(set.is_empty());
        assert!(set.all_skills().is_empty());
    }

    #[test]
    fn test_only_blank_entries_is_empty() {
        let set = SkillSet::from_raw(RawSkills {
            frameworks: list(&["", "  "]),
            ..Default::default()
        });
        assert!(set.is_empty());
    }

    #[test]
    fn test_deserialize_normalizes_partial_json() {
        let json = r#"{
            "technicalSkills": ["Microservices", "microservices ", null],
            "tools": null,
            "languages": ["Go"]
        }"#;
        let set: SkillSet = serde_json::from_str(json).unwrap();
        assert_eq!(set.technical_skills(), ["Microservices"]);
        assert!(set.tools().is_empty());
        assert!(set.soft_skills().is_empty());
        assert_eq!(set.languages(), ["Go"]);
    }

    #[test]
    fn test_serializes_camel_case() {
        let set = SkillSet::from_raw(RawSkills {
            soft_skills: list(&["Teamwork"]),
            ..Default::default()
        });
        let value = serde_json::to_value(&set).unwrap();
        assert_eq!(value["softSkills"][0], "Teamwork");
        assert!(value["technicalSkills"].as_array().unwrap().is_empty());
    }
}
