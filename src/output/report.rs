//! Report structures wrapping an analysis result for presentation

use crate::processing::analyzer::AnalysisResult;
use crate::processing::recommend::FitBand;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything a formatter needs to render one analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub summary: ReportSummary,
    pub result: AnalysisResult,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub role: String,
    pub score_percent: f64,
    pub fit_band: FitBand,
    pub verdict: String,
    pub matched_count: usize,
    pub missing_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    /// Source document name as given by the caller
    pub document: String,
    pub catalog_roles: usize,
    pub vocabulary_size: usize,
    pub processing_time_ms: u64,
    pub tool_version: String,
}

impl ReportMetadata {
    pub fn new(
        document: impl Into<String>,
        catalog_roles: usize,
        vocabulary_size: usize,
        processing_time_ms: u64,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            document: document.into(),
            catalog_roles,
            vocabulary_size,
            processing_time_ms,
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

impl AnalysisReport {
    pub fn new(result: AnalysisResult, metadata: ReportMetadata) -> Self {
        let summary = ReportSummary {
            role: result.resolved_role.clone(),
            score_percent: result.score_percent,
            fit_band: result.fit_band,
            verdict: verdict(&result),
            matched_count: result.matched_skills.len(),
            missing_count: result.missing_skills.len(),
        };

        Self {
            summary,
            result,
            metadata,
        }
    }
}

fn verdict(result: &AnalysisResult) -> String {
    let role = &result.resolved_role;

    match result.fit_band {
        FitBand::Strong => match result.growth_suggestions.len() {
            0 => format!("Strong fit for {}", role),
            1 => format!("Strong fit for {}, with 1 related role within reach", role),
            n => format!("Strong fit for {}, with {} related roles within reach", role, n),
        },
        FitBand::Moderate => format!(
            "Partial fit for {}: {} required skill(s) still missing",
            role,
            result.missing_skills.len()
        ),
        FitBand::Weak => match &result.pivot_suggestion {
            Some(pivot) => format!(
                "Weak fit for {}; {} is a closer match at {:.2}%",
                role, pivot.role, pivot.match_percent
            ),
            None => format!("Weak fit for {}; no other role is a close match", role),
        },
    }
}
