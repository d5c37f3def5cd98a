//! career-fit: resume skill matching against a job role catalog

use career_fit::catalog::JobCatalog;
use career_fit::cli::{self, Cli, Commands, ConfigAction};
use career_fit::config::{parse_output_format, CatalogConfig, Config};
use career_fit::error::{CareerFitError, Result};
use career_fit::input::{DocumentSource, FileDocumentSource};
use career_fit::output::formatter::{save_report_to_file, suggest_filename};
use career_fit::output::{AnalysisReport, ReportGenerator, ReportMetadata};
use career_fit::processing::analyzer::AnalysisEngine;
use career_fit::processing::resolver::RoleResolver;
use clap::Parser;
use log::{debug, error, info};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

const RESUME_EXTENSIONS: [&str; 4] = ["pdf", "txt", "md", "markdown"];

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path, cli.catalog).await {
        match &e {
            CareerFitError::RoleNotFound { query, available } => {
                eprintln!("Role not found: '{}' is not in the catalog.", query);
                eprintln!("Available roles:");
                for role in available {
                    eprintln!("  • {}", role);
                }
            }
            _ => error!("Command failed: {}", e),
        }
        process::exit(if e.is_user_error() { 2 } else { 1 });
    }
}

async fn run_command(
    command: Commands,
    config: Config,
    config_path: &Path,
    catalog_override: Option<PathBuf>,
) -> Result<()> {
    let catalog_config = match catalog_override {
        Some(path) => CatalogConfig { path: Some(path) },
        None => config.catalog.clone(),
    };

    match command {
        Commands::Analyze {
            resume,
            role,
            output,
            save,
            detailed,
            no_color,
        } => {
            cli::validate_file_extension(&resume, &RESUME_EXTENSIONS)
                .map_err(|e| CareerFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let format = match output {
                Some(format) => parse_output_format(&format)?,
                None => config.output.format,
            };

            let started = Instant::now();
            let engine = AnalysisEngine::new(JobCatalog::load(&catalog_config)?, &config.matching)?;

            let text = FileDocumentSource::new().read_text(&resume).await?;
            debug!("Read {} characters from {}", text.len(), resume.display());

            let result = engine.analyze(&text, &role)?;
            let metadata = ReportMetadata::new(
                resume.display().to_string(),
                engine.catalog().len(),
                engine.vocabulary_size(),
                started.elapsed().as_millis() as u64,
            );
            let report = AnalysisReport::new(result, metadata);

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let detailed = detailed || config.output.detailed;
            let generator = ReportGenerator::with_options(use_colors, detailed, true, true);
            let rendered = generator.generate_report(&report, &format)?;

            match save {
                Some(path) => {
                    let target = if path.is_dir() {
                        path.join(suggest_filename(&format, &resume.to_string_lossy(), true))
                    } else {
                        path
                    };
                    save_report_to_file(&rendered, &target)?;
                    info!("Report saved to {}", target.display());
                    println!("Report saved to {}", target.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Extract { resume } => {
            cli::validate_file_extension(&resume, &RESUME_EXTENSIONS)
                .map_err(|e| CareerFitError::InvalidInput(format!("Resume file: {}", e)))?;

            let engine = AnalysisEngine::new(JobCatalog::load(&catalog_config)?, &config.matching)?;
            let text = FileDocumentSource::new().read_text(&resume).await?;
            let skills = engine.extract_skills(&text);

            println!("Recognized skills ({} of {} known):", skills.len(), engine.vocabulary_size());
            for skill in &skills {
                println!("  • {}", skill);
            }
        }

        Commands::Roles { skills } => {
            let catalog = JobCatalog::load(&catalog_config)?;

            println!("Catalog roles ({}):", catalog.len());
            for role in catalog.roles() {
                if skills {
                    println!("  • {}: {}", role.name, role.required_skills.join(", "));
                } else {
                    println!("  • {}", role.name);
                }
            }
        }

        Commands::Resolve { query } => {
            let catalog = JobCatalog::load(&catalog_config)?;
            let resolver = RoleResolver::new(config.matching.role_min_similarity);
            let role_match = resolver.resolve(&query, catalog.role_names())?;

            println!(
                "'{}' resolves to '{}' (similarity {:.1}%)",
                query.trim(),
                role_match.role,
                role_match.similarity * 100.0
            );
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("Configuration ({})\n", config_path.display());
                match &config.catalog.path {
                    Some(path) => println!("Catalog: {}", path.display()),
                    None => println!("Catalog: built-in"),
                }
                println!("\nMatching:");
                println!("  Role min similarity: {:.2}", config.matching.role_min_similarity);
                println!("  Strong fit threshold: {:.1}%", config.matching.strong_fit_threshold);
                println!("  Weak fit threshold: {:.1}%", config.matching.weak_fit_threshold);
                println!("  Growth min match: {:.1}%", config.matching.growth_min_match);
                println!("  Pivot min match: {:.1}%", config.matching.pivot_min_match);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("Configuration reset to defaults");
            }

            Some(ConfigAction::Set { key, value }) => {
                let mut config = config;
                config.set(&key, &value)?;
                config.save_to(config_path)?;
                println!("Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}
