// Skill matching core: normalized skill containers, the synonym table, and the matcher.
// Everything in here is synchronous and free of I/O — extraction lives in `extraction`.

pub mod matcher;
pub mod skill_set;
pub mod synonyms;

pub use matcher::{match_skills, MatchReport, SkillDetail};
pub use skill_set::{RawSkills, SkillSet};
