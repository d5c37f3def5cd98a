//! Analysis engine: resolve, extract, score and recommend in one call

use crate::catalog::JobCatalog;
use crate::config::MatchingConfig;
use crate::error::{CareerFitError, Result};
use crate::processing::extractor::{extract_skills, ExtractedSkillSet};
use crate::processing::recommend::{FitBand, RecommendationPolicy, RoleSuggestion};
use crate::processing::resolver::{RoleMatch, RoleResolver};
use crate::processing::scoring::{self, SkillProfile};
use crate::processing::vocabulary::VocabularyIndex;
use log::info;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Outcome of analyzing one document against one role query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub resolved_role: String,
    pub role_similarity: f64,
    pub score_percent: f64,
    pub fit_band: FitBand,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub extracted_skills: Vec<String>,
    pub growth_suggestions: Vec<RoleSuggestion>,
    pub pivot_suggestion: Option<RoleSuggestion>,
}

/// Holds the catalog and its skill index, both built once and never mutated.
///
/// Share one engine across concurrent analyses with `Arc<AnalysisEngine>`.
pub struct AnalysisEngine {
    catalog: Arc<JobCatalog>,
    index: VocabularyIndex,
    resolver: RoleResolver,
    policy: RecommendationPolicy,
}

impl AnalysisEngine {
    pub fn new(catalog: JobCatalog, config: &MatchingConfig) -> Result<Self> {
        Self::with_shared_catalog(Arc::new(catalog), config)
    }

    pub fn with_shared_catalog(catalog: Arc<JobCatalog>, config: &MatchingConfig) -> Result<Self> {
        let index = VocabularyIndex::build(&catalog)?;
        info!(
            "Analysis engine ready: {} roles, {} known skills",
            catalog.len(),
            index.len()
        );

        Ok(Self {
            catalog,
            index,
            resolver: RoleResolver::new(config.role_min_similarity),
            policy: RecommendationPolicy::from_config(config),
        })
    }

    /// Analyze document text against a free-text role query
    pub fn analyze(&self, document_text: &str, role_query: &str) -> Result<AnalysisResult> {
        if document_text.is_empty() {
            return Err(CareerFitError::InvalidInput("document text is empty".to_string()));
        }
        if role_query.trim().is_empty() {
            return Err(CareerFitError::InvalidInput("target role is empty".to_string()));
        }

        let role_match = self.resolve_role(role_query)?;
        let role = self
            .catalog
            .role(role_match.role)
            .ok_or_else(|| {
                CareerFitError::Catalog(format!("resolved role '{}' is missing", role_match.role))
            })?;
        info!(
            "Resolved '{}' to '{}' (similarity {:.2})",
            role_query.trim(),
            role.name,
            role_match.similarity
        );

        let extracted = self.extract_skills(document_text);
        let profile = SkillProfile::new(&extracted);

        let score = scoring::score(&profile, role)?;
        let recommendations = self
            .policy
            .recommend(&profile, &self.catalog, &role.name, score.score_percent)?;

        info!(
            "Scored {:.2}% against '{}' ({} matched, {} missing)",
            score.score_percent,
            role.name,
            score.matched_skills.len(),
            score.missing_skills.len()
        );

        Ok(AnalysisResult {
            resolved_role: score.target_role,
            role_similarity: role_match.similarity,
            fit_band: self.policy.classify(score.score_percent),
            score_percent: score.score_percent,
            matched_skills: score.matched_skills,
            missing_skills: score.missing_skills,
            extracted_skills: extracted.into_iter().collect(),
            growth_suggestions: recommendations.growth,
            pivot_suggestion: recommendations.pivot,
        })
    }

    pub fn extract_skills(&self, text: &str) -> ExtractedSkillSet {
        extract_skills(text, &self.index)
    }

    pub fn resolve_role(&self, query: &str) -> Result<RoleMatch<'_>> {
        self.resolver.resolve(query, self.catalog.role_names())
    }

    pub fn catalog(&self) -> &JobCatalog {
        &self.catalog
    }

    pub fn vocabulary_size(&self) -> usize {
        self.index.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(json: &str) -> AnalysisEngine {
        let catalog = JobCatalog::from_json_str(json).unwrap();
        AnalysisEngine::new(catalog, &MatchingConfig::default()).unwrap()
    }

    #[test]
    fn test_perfect_match_with_growth() {
        let engine = engine(
            r#"{
                "Data Analytics": ["python", "sql", "tableau"],
                "Web Development": ["html", "css", "javascript"],
                "Backend Development": ["python", "sql", "docker"]
            }"#,
        );
        let result = engine
            .analyze("Analyst using Python, SQL, Tableau and some HTML.", "data analytics")
            .unwrap();

        assert_eq!(result.resolved_role, "Data Analytics");
        assert_eq!(result.score_percent, 100.0);
        assert_eq!(result.fit_band, FitBand::Strong);
        assert_eq!(result.matched_skills, vec!["Python", "Sql", "Tableau"]);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.extracted_skills, vec!["html", "python", "sql", "tableau"]);
        assert_eq!(
            result.growth_suggestions,
            vec![RoleSuggestion {
                role: "Backend Development".to_string(),
                match_percent: 66.67,
            }]
        );
        assert!(result.pivot_suggestion.is_none());
    }

    #[test]
    fn test_eighty_percent_gets_no_growth() {
        let engine = engine(
            r#"{
                "Data Analytics": ["python", "sql", "tableau", "statistics", "data visualization"],
                "Scripting": ["python"]
            }"#,
        );
        let result = engine
            .analyze("python sql tableau statistics", "Data Analytics")
            .unwrap();

        assert_eq!(result.score_percent, 80.0);
        assert_eq!(result.fit_band, FitBand::Moderate);
        assert!(result.growth_suggestions.is_empty());
        assert!(result.pivot_suggestion.is_none());
    }

    #[test]
    fn test_invalid_input_precedes_role_resolution() {
        let engine = engine(r#"{"Data Analytics": ["python"]}"#);
        assert!(matches!(
            engine.analyze("", "quantum blacksmith"),
            Err(CareerFitError::InvalidInput(_))
        ));
        assert!(matches!(engine.analyze("python", "  "), Err(CareerFitError::InvalidInput(_))));
    }

    #[test]
    fn test_unknown_role() {
        let engine = engine(r#"{"Data Analytics": ["python"], "Web Development": ["html"]}"#);
        match engine.analyze("python", "quantum blacksmith") {
            Err(CareerFitError::RoleNotFound { available, .. }) => {
                assert_eq!(available, vec!["Data Analytics", "Web Development"]);
            }
            other => panic!("expected RoleNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_document_without_skills_scores_zero() {
        let engine = engine(r#"{"Data Analytics": ["python", "sql"], "Web Development": ["html"]}"#);
        let result = engine.analyze("Gardening and baking enthusiast.", "Data Analytics").unwrap();
        assert_eq!(result.score_percent, 0.0);
        assert_eq!(result.fit_band, FitBand::Weak);
        assert!(result.pivot_suggestion.is_none());
        assert_eq!(result.missing_skills, vec!["Python", "Sql"]);
    }

    #[test]
    fn test_whitespace_only_document_scores_zero() {
        let engine = engine(r#"{"Data Analytics": ["python", "sql"]}"#);
        let result = engine.analyze("\n\n  \n", "Data Analytics").unwrap();
        assert_eq!(result.score_percent, 0.0);
        assert!(result.extracted_skills.is_empty());
        assert_eq!(result.missing_skills, vec!["Python", "Sql"]);
    }
}
