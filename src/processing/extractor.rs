//! Skill extraction from document text

use crate::processing::vocabulary::VocabularyIndex;
use log::debug;
use std::collections::BTreeSet;

/// Lowercased vocabulary phrases found in one document
pub type ExtractedSkillSet = BTreeSet<String>;

/// Return every vocabulary skill that occurs in `text`.
///
/// Only presence matters; counts and positions are discarded. Text with no
/// recognizable skills yields an empty set.
pub fn extract_skills(text: &str, index: &VocabularyIndex) -> ExtractedSkillSet {
    let skills: ExtractedSkillSet = index
        .find_matches(text)
        .into_iter()
        .map(|m| m.skill.to_string())
        .collect();

    debug!("Extracted {} distinct skills from {} characters", skills.len(), text.len());
    skills
}
