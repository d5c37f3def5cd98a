//! Skill vocabulary and the phrase index built over it

use crate::catalog::JobCatalog;
use crate::error::{CareerFitError, Result};
use crate::processing::tokenizer::{skill_key, tokenize};
use aho_corasick::{AhoCorasick, MatchKind};
use log::debug;
use std::collections::HashSet;

/// Every distinct skill referenced by the catalog
#[derive(Debug, Clone)]
pub struct SkillVocabulary {
    entries: Vec<VocabularyEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VocabularyEntry {
    /// Lowercased phrase as first spelled in the catalog
    pub phrase: String,
    /// Normalized token key, unique within the vocabulary
    pub key: String,
    pub token_count: usize,
}

/// A skill located in a token stream
#[derive(Debug, Clone, PartialEq)]
pub struct SkillMatch<'a> {
    pub skill: &'a str,
    pub token_start: usize,
    pub token_len: usize,
}

/// Phrase index for locating vocabulary skills in free text.
///
/// Text and patterns are reduced to space-delimited token streams and every
/// pattern is framed by spaces, so a skill only matches whole tokens. Where
/// candidate matches overlap, the leftmost one wins and among those the one
/// spanning the most tokens.
pub struct VocabularyIndex {
    vocabulary: SkillVocabulary,
    matcher: AhoCorasick,
}

impl SkillVocabulary {
    pub fn from_catalog(catalog: &JobCatalog) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for role in catalog.roles() {
            for skill in &role.required_skills {
                let key = skill_key(skill);
                if key.is_empty() || !seen.insert(key.clone()) {
                    continue;
                }
                let token_count = key.split(' ').count();
                entries.push(VocabularyEntry {
                    phrase: skill.trim().to_lowercase(),
                    key,
                    token_count,
                });
            }
        }

        Self { entries }
    }

    pub fn entries(&self) -> &[VocabularyEntry] {
        &self.entries
    }

    pub fn contains(&self, skill: &str) -> bool {
        let key = skill_key(skill);
        self.entries.iter().any(|e| e.key == key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl VocabularyIndex {
    pub fn build(catalog: &JobCatalog) -> Result<Self> {
        if catalog.is_empty() {
            return Err(CareerFitError::EmptyCatalog);
        }

        let vocabulary = SkillVocabulary::from_catalog(catalog);
        if vocabulary.is_empty() {
            return Err(CareerFitError::EmptyCatalog);
        }

        let patterns: Vec<String> = vocabulary
            .entries()
            .iter()
            .map(|e| format!(" {} ", e.key))
            .collect();

        // Standard semantics so overlapping candidates (which share their
        // framing spaces) are all reported.
        let matcher = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(&patterns)
            .map_err(|e| CareerFitError::Catalog(format!("Failed to build skill index: {}", e)))?;

        debug!("Built skill index over {} phrases", vocabulary.len());

        Ok(Self { vocabulary, matcher })
    }

    /// Locate skills in text, leftmost-longest and non-overlapping
    pub fn find_matches(&self, text: &str) -> Vec<SkillMatch<'_>> {
        let tokens = tokenize(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let mut haystack = String::with_capacity(text.len() + 2);
        let mut token_offsets = Vec::with_capacity(tokens.len());
        haystack.push(' ');
        for token in &tokens {
            token_offsets.push(haystack.len());
            haystack.push_str(token);
            haystack.push(' ');
        }

        let mut candidates: Vec<(usize, usize, usize)> = self
            .matcher
            .find_overlapping_iter(&haystack)
            .filter_map(|m| {
                let pattern = m.pattern().as_usize();
                token_offsets
                    .binary_search(&(m.start() + 1))
                    .ok()
                    .map(|token_start| {
                        let token_count = self.vocabulary.entries[pattern].token_count;
                        (token_start, token_count, pattern)
                    })
            })
            .collect();

        candidates.sort_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));

        let mut matches = Vec::new();
        let mut next_free = 0;
        for (token_start, token_len, pattern) in candidates {
            if token_start < next_free {
                continue;
            }
            next_free = token_start + token_len;
            matches.push(SkillMatch {
                skill: self.vocabulary.entries[pattern].phrase.as_str(),
                token_start,
                token_len,
            });
        }

        matches
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }

    pub fn len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vocabulary.is_empty()
    }
}
