//! Integration tests for career fit

use career_fit::catalog::JobCatalog;
use career_fit::config::{CatalogConfig, Config, MatchingConfig, OutputFormat};
use career_fit::error::CareerFitError;
use career_fit::input::{DocumentSource, FileDocumentSource};
use career_fit::output::{AnalysisReport, ReportGenerator, ReportMetadata};
use career_fit::processing::analyzer::AnalysisEngine;
use career_fit::processing::recommend::FitBand;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;

fn engine_for(json: &str) -> AnalysisEngine {
    let catalog = JobCatalog::from_json_str(json).unwrap();
    AnalysisEngine::new(catalog, &MatchingConfig::default()).unwrap()
}

fn builtin_engine() -> AnalysisEngine {
    AnalysisEngine::new(JobCatalog::builtin().unwrap(), &MatchingConfig::default()).unwrap()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn test_text_extraction_from_txt() {
    let source = FileDocumentSource::new();
    let path = Path::new("tests/fixtures/sample_resume.txt");

    let result = source.read_text(path).await;
    assert!(result.is_ok());

    let text = result.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("Tableau"));
}

#[tokio::test]
async fn test_text_extraction_from_markdown() {
    let source = FileDocumentSource::new();
    let path = Path::new("tests/fixtures/sample_resume.md");

    let text = source.read_text(path).await.unwrap();
    assert!(text.contains("Jane Smith"));
    assert!(text.contains("Data Analyst"));
    assert!(text.contains("Data Visualization"));
    // Formatting and link targets are gone
    assert!(!text.contains("**"));
    assert!(!text.contains("##"));
    assert!(!text.contains("https://"));
}

#[tokio::test]
async fn test_unsupported_file_type() {
    let source = FileDocumentSource::new();
    let path = Path::new("tests/fixtures/unsupported.xyz");

    let result = source.read_text(path).await;
    assert!(matches!(result, Err(CareerFitError::UnsupportedFormat(_))));
}

#[tokio::test]
async fn test_nonexistent_file() {
    let source = FileDocumentSource::new();
    let path = Path::new("tests/fixtures/nonexistent.txt");

    let result = source.read_text(path).await;
    assert!(matches!(result, Err(CareerFitError::InvalidInput(_))));
}

#[tokio::test]
async fn test_txt_and_markdown_yield_same_skills() {
    let source = FileDocumentSource::new();
    let engine = builtin_engine();

    let txt = source.read_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();
    let md = source.read_text(Path::new("tests/fixtures/sample_resume.md")).await.unwrap();

    assert_eq!(engine.extract_skills(&txt), engine.extract_skills(&md));
}

#[tokio::test]
async fn test_end_to_end_with_builtin_catalog() {
    let source = FileDocumentSource::new();
    let engine = builtin_engine();
    let text = source.read_text(Path::new("tests/fixtures/sample_resume.txt")).await.unwrap();

    let result = engine.analyze(&text, "data analyst").unwrap();

    assert_eq!(result.resolved_role, "Data Analytics");
    assert_eq!(result.score_percent, 75.0);
    assert_eq!(result.fit_band, FitBand::Moderate);
    assert_eq!(
        result.matched_skills,
        strings(&["Python", "Sql", "Tableau", "Excel", "Statistics", "Data Visualization"])
    );
    assert_eq!(result.missing_skills, strings(&["Power Bi", "Pandas"]));
    assert!(result.growth_suggestions.is_empty());
    assert!(result.pivot_suggestion.is_none());
}

#[test]
fn test_perfect_match() {
    let engine = engine_for(
        r#"{
            "Data Analytics": ["python", "sql", "tableau"],
            "Web Development": ["html", "css", "javascript"]
        }"#,
    );

    let result = engine
        .analyze("Tools: Python, SQL, Tableau. Some HTML.", "Data Analytics")
        .unwrap();

    assert_eq!(result.score_percent, 100.0);
    assert_eq!(result.matched_skills, strings(&["Python", "Sql", "Tableau"]));
    assert!(result.missing_skills.is_empty());
    assert_eq!(result.fit_band, FitBand::Strong);
    // Web Development is only 33.33% covered
    assert!(result.growth_suggestions.is_empty());
}

#[test]
fn test_eighty_percent_is_not_strong_fit() {
    let engine = engine_for(
        r#"{
            "Data Analytics": ["python", "sql", "tableau", "statistics", "data visualization"],
            "Reporting": ["python", "sql"]
        }"#,
    );

    let result = engine
        .analyze("python, sql, tableau and statistics", "Data Analytics")
        .unwrap();

    assert_eq!(result.score_percent, 80.0);
    assert_eq!(result.fit_band, FitBand::Moderate);
    assert_eq!(result.missing_skills, strings(&["Data Visualization"]));
    // Reporting is fully covered but growth needs a strong fit first
    assert!(result.growth_suggestions.is_empty());
    assert!(result.pivot_suggestion.is_none());
}

#[test]
fn test_pivot_excludes_exactly_thirty_percent() {
    let engine = engine_for(
        r#"{
            "Backend Platform": ["python", "sql", "go", "rust", "java", "kotlin", "swift", "scala", "haskell", "elixir"],
            "Design Systems": ["figma", "css", "html", "wireframing", "prototyping", "user research", "adobe xd", "usability testing", "accessibility", "typography"],
            "Infrastructure": ["docker", "linux", "bash", "terraform", "aws"]
        }"#,
    );

    let result = engine
        .analyze("python sql figma css html docker linux", "backend platform")
        .unwrap();

    assert_eq!(result.score_percent, 20.0);
    assert_eq!(result.fit_band, FitBand::Weak);
    assert!(result.growth_suggestions.is_empty());

    let pivot = result.pivot_suggestion.unwrap();
    assert_eq!(pivot.role, "Infrastructure");
    assert_eq!(pivot.match_percent, 40.0);
}

#[test]
fn test_role_not_found() {
    let engine = builtin_engine();

    let err = engine.analyze("Python and SQL", "quantum blacksmith").unwrap_err();
    match err {
        CareerFitError::RoleNotFound { query, available } => {
            assert_eq!(query, "quantum blacksmith");
            assert_eq!(available.len(), engine.catalog().len());
            assert!(available.contains(&"Data Analytics".to_string()));
        }
        other => panic!("expected RoleNotFound, got {:?}", other),
    }
}

#[test]
fn test_no_skills_is_a_zero_score() {
    let engine = builtin_engine();

    let result = engine.analyze("I enjoy hiking and cooking.", "Web Development").unwrap();
    assert_eq!(result.score_percent, 0.0);
    assert!(result.matched_skills.is_empty());
    assert!(result.extracted_skills.is_empty());
    assert!(result.pivot_suggestion.is_none());
}

#[test]
fn test_possessive_skill_mentions_are_extracted() {
    let engine = builtin_engine();

    assert!(engine.extract_skills("Python's ecosystem").contains("python"));
    assert!(engine.extract_skills("AWS\u{2019}s services").contains("aws"));
    assert!(engine.extract_skills("Docker's").contains("docker"));
    assert!(engine.extract_skills("SQL.").contains("sql"));
}

#[test]
fn test_concurrent_analyses_share_one_engine() {
    let engine = Arc::new(builtin_engine());
    let resume = std::fs::read_to_string("tests/fixtures/sample_resume.txt").unwrap();
    let expected = engine.analyze(&resume, "Data Analytics").unwrap();

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = Arc::clone(&engine);
            let resume = resume.clone();
            thread::spawn(move || engine.analyze(&resume, "Data Analytics").unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_catalog_from_file_via_config() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"Technical Writing": ["markdown", "git", "editing"]}}"#).unwrap();

    let config = CatalogConfig {
        path: Some(file.path().to_path_buf()),
    };
    let catalog = JobCatalog::load(&config).unwrap();
    assert_eq!(catalog.len(), 1);

    let engine = AnalysisEngine::new(catalog, &MatchingConfig::default()).unwrap();
    let result = engine.analyze("Docs in Markdown, kept in Git.", "technical writer").unwrap();
    assert_eq!(result.resolved_role, "Technical Writing");
    assert_eq!(result.score_percent, 66.67);
}

#[test]
fn test_small_catalog_fixture() {
    let catalog = JobCatalog::load(&CatalogConfig {
        path: Some(PathBuf::from("tests/fixtures/small_catalog.json")),
    })
    .unwrap();
    let names: Vec<&str> = catalog.role_names().collect();
    assert_eq!(names, vec!["Data Analytics", "Reporting", "Web Development"]);
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let result = JobCatalog::load(&CatalogConfig {
        path: Some(PathBuf::from("tests/fixtures/no_such_catalog.json")),
    });
    assert!(matches!(result, Err(CareerFitError::Catalog(_))));
}

#[test]
fn test_json_report_round_trips_result() {
    let engine = builtin_engine();
    let result = engine
        .analyze("Docker, Kubernetes, AWS and Terraform on Linux", "devops")
        .unwrap();
    let metadata = ReportMetadata::new(
        "inline",
        engine.catalog().len(),
        engine.vocabulary_size(),
        1,
    );
    let report = AnalysisReport::new(result.clone(), metadata);

    let json = ReportGenerator::with_options(false, true, true, true)
        .generate_report(&report, &OutputFormat::Json)
        .unwrap();
    let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.result, result);
    assert_eq!(parsed.summary.role, "DevOps Engineering");
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");

    let mut config = Config::default();
    config.set("matching.growth_min_match", "70").unwrap();
    config.save_to(&path).unwrap();

    let loaded = Config::load_from(&path).unwrap();
    assert_eq!(loaded.matching.growth_min_match, 70.0);
    assert_eq!(loaded, config);
}
