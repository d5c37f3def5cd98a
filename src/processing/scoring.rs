//! Coverage scoring of a skill set against a role's requirements

use crate::catalog::Role;
use crate::error::{CareerFitError, Result};
use crate::processing::tokenizer::{skill_key, title_case};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub target_role: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score_percent: f64,
}

/// Candidate skills keyed for comparison against any role.
///
/// Built once per analysis and reused for every role that is scored.
#[derive(Debug, Clone, Default)]
pub struct SkillProfile {
    keys: HashSet<String>,
}

impl SkillProfile {
    pub fn new<'a, I>(skills: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        Self {
            keys: skills.into_iter().map(|s| skill_key(s)).collect(),
        }
    }

    pub fn has(&self, skill: &str) -> bool {
        self.keys.contains(&skill_key(skill))
    }

    /// Percentage of `required` present in the profile, rounded to 2 places
    pub fn coverage(&self, role_name: &str, required: &[String]) -> Result<f64> {
        if required.is_empty() {
            return Err(CareerFitError::DegenerateRole(role_name.to_string()));
        }
        let matched = required.iter().filter(|s| self.has(s)).count();
        Ok(percent(matched, required.len()))
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Score a profile against a role.
///
/// Skills the candidate has beyond the role's list do not affect the score.
pub fn score(profile: &SkillProfile, role: &Role) -> Result<ScoreResult> {
    score_skills(&role.name, profile, &role.required_skills)
}

pub fn score_skills(
    target_role: &str,
    profile: &SkillProfile,
    required: &[String],
) -> Result<ScoreResult> {
    if required.is_empty() {
        return Err(CareerFitError::DegenerateRole(target_role.to_string()));
    }

    let (matched, missing): (Vec<&String>, Vec<&String>) =
        required.iter().partition(|s| profile.has(s));

    Ok(ScoreResult {
        target_role: target_role.to_string(),
        score_percent: percent(matched.len(), required.len()),
        matched_skills: matched.into_iter().map(|s| title_case(s)).collect(),
        missing_skills: missing.into_iter().map(|s| title_case(s)).collect(),
    })
}

/// `100 * part / whole` rounded to two decimal places
pub fn percent(part: usize, whole: usize) -> f64 {
    let raw = (part as f64 * 100.0) / whole as f64;
    (raw * 100.0).round() / 100.0
}
