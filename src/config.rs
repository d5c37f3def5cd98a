//! Configuration management for career fit

use crate::error::{CareerFitError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file; the embedded catalog is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Policy constants for role resolution and recommendations.
///
/// Percent thresholds are on a 0-100 scale, similarity on 0-1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub role_min_similarity: f64,
    pub strong_fit_threshold: f64,
    pub weak_fit_threshold: f64,
    pub growth_min_match: f64,
    pub pivot_min_match: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            role_min_similarity: 0.3,
            strong_fit_threshold: 85.0,
            weak_fit_threshold: 30.0,
            growth_min_match: 60.0,
            pivot_min_match: 30.0,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Console,
            detailed: false,
            color_output: true,
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Load from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| CareerFitError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| {
                CareerFitError::Configuration(format!("Failed to serialize config: {}", e))
            })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("career-fit")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let m = &self.matching;

        if !(0.0..=1.0).contains(&m.role_min_similarity) {
            return Err(CareerFitError::Configuration(format!(
                "matching.role_min_similarity must be within 0..=1, got {}",
                m.role_min_similarity
            )));
        }

        let percents = [
            ("matching.strong_fit_threshold", m.strong_fit_threshold),
            ("matching.weak_fit_threshold", m.weak_fit_threshold),
            ("matching.growth_min_match", m.growth_min_match),
            ("matching.pivot_min_match", m.pivot_min_match),
        ];
        for (key, value) in percents {
            if !(0.0..=100.0).contains(&value) {
                return Err(CareerFitError::Configuration(format!(
                    "{} must be within 0..=100, got {}",
                    key, value
                )));
            }
        }

        if m.weak_fit_threshold > m.strong_fit_threshold {
            return Err(CareerFitError::Configuration(format!(
                "matching.weak_fit_threshold ({}) exceeds matching.strong_fit_threshold ({})",
                m.weak_fit_threshold, m.strong_fit_threshold
            )));
        }

        Ok(())
    }

    /// Update a single dotted key such as `matching.growth_min_match`
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut updated = self.clone();
        match key {
            "catalog.path" => {
                updated.catalog.path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "matching.role_min_similarity" => {
                updated.matching.role_min_similarity = parse_value(key, value)?
            }
            "matching.strong_fit_threshold" => {
                updated.matching.strong_fit_threshold = parse_value(key, value)?
            }
            "matching.weak_fit_threshold" => {
                updated.matching.weak_fit_threshold = parse_value(key, value)?
            }
            "matching.growth_min_match" => {
                updated.matching.growth_min_match = parse_value(key, value)?
            }
            "matching.pivot_min_match" => {
                updated.matching.pivot_min_match = parse_value(key, value)?
            }
            "output.format" => updated.output.format = parse_output_format(value)?,
            "output.detailed" => updated.output.detailed = parse_value(key, value)?,
            "output.color_output" => updated.output.color_output = parse_value(key, value)?,
            _ => {
                return Err(CareerFitError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| CareerFitError::Configuration(format!("Invalid value for {}: {}", key, value)))
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(CareerFitError::InvalidInput(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        ))),
    }
}
