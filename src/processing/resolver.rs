//! Fuzzy resolution of free-text role queries to catalog role names

use crate::error::{CareerFitError, Result};
use crate::processing::tokenizer::normalize_name;
use log::debug;
use serde::Serialize;
use strsim::sorensen_dice;

pub const DEFAULT_MIN_SIMILARITY: f64 = 0.3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleMatch<'a> {
    pub role: &'a str,
    pub similarity: f64,
}

#[derive(Debug, Clone)]
pub struct RoleResolver {
    min_similarity: f64,
}

impl Default for RoleResolver {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SIMILARITY)
    }
}

impl RoleResolver {
    pub fn new(min_similarity: f64) -> Self {
        Self {
            min_similarity: min_similarity.clamp(0.0, 1.0),
        }
    }

    /// Pick the role name most similar to `query`.
    ///
    /// A role qualifies when its similarity is at least the configured minimum.
    /// Equal similarities keep the earliest role in iteration order.
    pub fn resolve<'a, I>(&self, query: &str, role_names: I) -> Result<RoleMatch<'a>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let names: Vec<&'a str> = role_names.into_iter().collect();
        let query = normalize_name(query);

        let not_found = |query: String| CareerFitError::RoleNotFound {
            query,
            available: names.iter().map(|n| n.to_string()).collect(),
        };

        if query.is_empty() {
            return Err(not_found(query));
        }

        let mut best: Option<RoleMatch<'a>> = None;
        for &name in &names {
            let similarity = name_similarity(&query, name);
            debug!("Role '{}' similarity to '{}': {:.3}", name, query, similarity);

            if similarity < self.min_similarity {
                continue;
            }
            if best.as_ref().map_or(true, |b| similarity > b.similarity) {
                best = Some(RoleMatch { role: name, similarity });
            }
        }

        best.ok_or_else(|| not_found(query))
    }

    pub fn min_similarity(&self) -> f64 {
        self.min_similarity
    }
}

/// Sørensen–Dice similarity of character bigrams, case and spacing insensitive
pub fn name_similarity(a: &str, b: &str) -> f64 {
    let a = normalize_name(a);
    let b = normalize_name(b);

    if a == b {
        1.0
    } else {
        sorensen_dice(&a, &b)
    }
}
