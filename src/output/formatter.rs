//! Output formatters for analysis reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::AnalysisReport;
use crate::processing::recommend::FitBand;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for rendering analysis reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
}

/// Terminal output with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for scripting and integration
pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Dispatches a report to the formatter for the requested format
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::Yellow,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_band_badge(&self, band: FitBand) -> String {
        let (badge, color) = match band {
            FitBand::Strong => ("STRONG FIT", Color::Green),
            FitBand::Moderate => ("PARTIAL FIT", Color::Yellow),
            FitBand::Weak => ("WEAK FIT", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str(&self.format_header("ROLE FIT ANALYSIS", 1));
        output.push_str(&format!(
            "Document: {} | Generated: {}\n",
            report.metadata.document,
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Target role: {}\n",
            self.colorize(&result.resolved_role, Color::Cyan)
        ));
        output.push_str(&format!(
            "Match score: {:.2}% {}\n",
            result.score_percent,
            self.format_band_badge(result.fit_band)
        ));
        output.push_str(&format!("Verdict: {}\n", report.summary.verdict));

        output.push_str(&self.format_header(
            &format!("Skills Found ({})", report.summary.matched_count),
            3,
        ));
        if result.matched_skills.is_empty() {
            output.push_str("  (none)\n");
        }
        for skill in &result.matched_skills {
            output.push_str(&format!("  ✓ {}\n", self.colorize(skill, Color::Green)));
        }

        output.push_str(&self.format_header(
            &format!("Skill Gaps ({})", report.summary.missing_count),
            3,
        ));
        if result.missing_skills.is_empty() {
            output.push_str("  (none)\n");
        }
        for skill in &result.missing_skills {
            output.push_str(&format!("  ✗ {}\n", self.colorize(skill, Color::Red)));
        }

        if !result.growth_suggestions.is_empty() {
            output.push_str(&self.format_header("Growth Opportunities", 2));
            for suggestion in &result.growth_suggestions {
                output.push_str(&format!(
                    "  • {} ({:.2}% match)\n",
                    self.colorize(&suggestion.role, Color::Cyan),
                    suggestion.match_percent
                ));
            }
        }

        if let Some(pivot) = &result.pivot_suggestion {
            output.push_str(&self.format_header("Suggested Pivot", 2));
            output.push_str(&format!(
                "  • {} ({:.2}% match)\n",
                self.colorize(&pivot.role, Color::Cyan),
                pivot.match_percent
            ));
        }

        if self.detailed {
            output.push_str(&self.format_header("Details", 2));
            output.push_str(&format!(
                "Role similarity: {:.1}%\n",
                result.role_similarity * 100.0
            ));
            output.push_str(&format!(
                "All recognized skills ({}): {}\n",
                result.extracted_skills.len(),
                if result.extracted_skills.is_empty() {
                    "(none)".to_string()
                } else {
                    result.extracted_skills.join(", ")
                }
            ));
            output.push_str(&format!(
                "Catalog: {} roles, {} known skills\n",
                report.metadata.catalog_roles, report.metadata.vocabulary_size
            ));
            output.push_str(&format!(
                "Processing time: {}ms\n",
                report.metadata.processing_time_ms
            ));
        }

        Ok(output)
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn bullet_list(items: &[String]) -> String {
        if items.is_empty() {
            return "_None_\n".to_string();
        }
        items.iter().map(|item| format!("- {}\n", item)).collect()
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let result = &report.result;
        let mut output = String::new();

        output.push_str("# Role Fit Analysis\n\n");
        output.push_str(&format!("**Target role:** {}  \n", result.resolved_role));
        output.push_str(&format!(
            "**Match score:** {:.2}% ({})  \n",
            result.score_percent, result.fit_band
        ));
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        output.push_str(&format!("## Skills Found ({})\n\n", report.summary.matched_count));
        output.push_str(&Self::bullet_list(&result.matched_skills));

        output.push_str(&format!("\n## Skill Gaps ({})\n\n", report.summary.missing_count));
        output.push_str(&Self::bullet_list(&result.missing_skills));

        if !result.growth_suggestions.is_empty() {
            output.push_str("\n## Growth Opportunities\n\n");
            output.push_str("| Role | Match |\n|------|-------|\n");
            for suggestion in &result.growth_suggestions {
                output.push_str(&format!(
                    "| {} | {:.2}% |\n",
                    suggestion.role, suggestion.match_percent
                ));
            }
        }

        if let Some(pivot) = &result.pivot_suggestion {
            output.push_str("\n## Suggested Pivot\n\n");
            output.push_str(&format!("- {} ({:.2}% match)\n", pivot.role, pivot.match_percent));
        }

        if self.include_metadata {
            output.push_str("\n---\n\n");
            output.push_str(&format!(
                "_Generated {} from `{}` by career-fit {} ({} roles, {} known skills)_\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.document,
                report.metadata.tool_version,
                report.metadata.catalog_roles,
                report.metadata.vocabulary_size
            ));
        }

        Ok(output)
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(
        use_colors: bool,
        detailed: bool,
        pretty_json: bool,
        include_metadata: bool,
    ) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(
        &self,
        report: &AnalysisReport,
        format: &OutputFormat,
    ) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, document_name: &str, timestamp: bool) -> String {
    let base_name = Path::new(document_name)
        .file_stem()
        .unwrap_or_default()
        .to_string_lossy();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
    };

    format!("{}_fit{}.{}", base_name, timestamp_suffix, extension)
}
