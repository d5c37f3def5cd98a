//! Growth and pivot suggestions derived from a role score

use crate::catalog::JobCatalog;
use crate::config::MatchingConfig;
use crate::error::Result;
use crate::processing::scoring::SkillProfile;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSuggestion {
    pub role: String,
    pub match_percent: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub growth: Vec<RoleSuggestion>,
    pub pivot: Option<RoleSuggestion>,
}

/// Where a target-role score falls relative to the policy thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FitBand {
    Strong,
    Moderate,
    Weak,
}

impl fmt::Display for FitBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitBand::Strong => write!(f, "Strong"),
            FitBand::Moderate => write!(f, "Moderate"),
            FitBand::Weak => write!(f, "Weak"),
        }
    }
}

/// Threshold policy, all values in percent.
///
/// - score >= `strong_fit`: every other role matching at least `growth_min`
///   is a growth suggestion, in catalog order.
/// - score < `weak_fit`: the other role with the highest match above
///   `pivot_min` is the pivot; equal matches keep the earliest role.
/// - otherwise no suggestions.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPolicy {
    pub strong_fit: f64,
    pub weak_fit: f64,
    pub growth_min: f64,
    pub pivot_min: f64,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Self::from_config(&MatchingConfig::default())
    }
}

impl RecommendationPolicy {
    pub fn from_config(config: &MatchingConfig) -> Self {
        Self {
            strong_fit: config.strong_fit_threshold,
            weak_fit: config.weak_fit_threshold,
            growth_min: config.growth_min_match,
            pivot_min: config.pivot_min_match,
        }
    }

    pub fn classify(&self, score_percent: f64) -> FitBand {
        if score_percent >= self.strong_fit {
            FitBand::Strong
        } else if score_percent < self.weak_fit {
            FitBand::Weak
        } else {
            FitBand::Moderate
        }
    }

    pub fn recommend(
        &self,
        profile: &SkillProfile,
        catalog: &JobCatalog,
        target_role: &str,
        score_percent: f64,
    ) -> Result<Recommendations> {
        let mut recommendations = Recommendations::default();

        match self.classify(score_percent) {
            FitBand::Strong => {
                for role in catalog.roles().iter().filter(|r| r.name != target_role) {
                    let match_percent = profile.coverage(&role.name, &role.required_skills)?;
                    if match_percent >= self.growth_min {
                        recommendations.growth.push(RoleSuggestion {
                            role: role.name.clone(),
                            match_percent,
                        });
                    }
                }
            }
            FitBand::Weak => {
                for role in catalog.roles().iter().filter(|r| r.name != target_role) {
                    let match_percent = profile.coverage(&role.name, &role.required_skills)?;
                    let beats_best = recommendations
                        .pivot
                        .as_ref()
                        .map_or(true, |best| match_percent > best.match_percent);
                    if match_percent > self.pivot_min && beats_best {
                        recommendations.pivot = Some(RoleSuggestion {
                            role: role.name.clone(),
                            match_percent,
                        });
                    }
                }
            }
            FitBand::Moderate => {}
        }

        Ok(recommendations)
    }
}
