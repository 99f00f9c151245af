//! Skillhunter: job vacancy skill extraction and ranking toolkit

use clap::Parser;
use indicatif::ProgressBar;
use log::{error, info};
use skillhunter::cli::{self, Cli, Commands, ConfigAction};
use skillhunter::config::{Config, OutputFormat};
use skillhunter::error::{Result, SkillHunterError};
use skillhunter::input::InputManager;
use skillhunter::matching::SkillExtractor;
use skillhunter::output::{
    ExtractionReport, Report, ReportGenerator, SkillsReport, TailoredVacanciesReport,
};
use skillhunter::ranking::{aggregate_skills, rank_vacancies};
use skillhunter::store::{load_raw_vacancies, StoreManager, VacancyRecord, VacancySnapshot};
use std::path::{Path, PathBuf};
use std::process;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

async fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Extract {
            text,
            dictionary,
            output,
        } => {
            cli::validate_file_extension(&text, &["txt", "md"])
                .map_err(|e| SkillHunterError::InvalidInput(format!("Document file: {}", e)))?;
            let format = parse_format(&output)?;

            let store = StoreManager::new(config.cache_ttl());
            let dictionary_path =
                resolve_path(dictionary, &config.store.dictionary_path, "skill dictionary")?;
            let dictionary = store.dictionary(&dictionary_path).await?;

            let mut input_manager = InputManager::new();
            let document = input_manager.extract_text(&text).await?;

            let extractor =
                SkillExtractor::with_case_sensitivity(&dictionary, config.matching.case_sensitive);
            let counts = extractor.extract(&document);
            info!("Found {} distinct skills in {}", counts.len(), text.display());

            let report = Report::Extraction(ExtractionReport {
                source: text.display().to_string(),
                skills: aggregate_skills([Some(&counts)], None),
            });
            print_report(&config, format, &report)
        }

        Commands::Scan {
            input,
            dictionary,
            out,
        } => {
            let store = StoreManager::new(config.cache_ttl());
            let dictionary_path =
                resolve_path(dictionary, &config.store.dictionary_path, "skill dictionary")?;
            let dictionary = store.dictionary(&dictionary_path).await?;
            let raw_vacancies = load_raw_vacancies(&input).await?;

            let extractor =
                SkillExtractor::with_case_sensitivity(&dictionary, config.matching.case_sensitive);

            info!("Rating {} vacancies", raw_vacancies.len());
            let bar = ProgressBar::new(raw_vacancies.len() as u64);
            let mut records = Vec::with_capacity(raw_vacancies.len());
            for vacancy in raw_vacancies {
                let rated_skills = extractor.extract(&vacancy.content);
                records.push(VacancyRecord {
                    url: vacancy.url,
                    title: vacancy.title,
                    rated_skills,
                });
                bar.inc(1);
            }
            bar.finish_and_clear();

            let snapshot = VacancySnapshot::new(records);
            snapshot.save(&out).await?;
            info!(
                "Snapshot with {} vacancies written to {}",
                snapshot.vacancies.len(),
                out.display()
            );
            Ok(())
        }

        Commands::Skills {
            query,
            snapshot,
            limit,
            output,
        } => {
            let format = parse_format(&output)?;

            let store = StoreManager::new(config.cache_ttl());
            let snapshot_path =
                resolve_path(snapshot, &config.store.snapshot_path, "vacancy snapshot")?;
            let snapshot = store.snapshot(&snapshot_path).await?;

            let matching = snapshot.search_by_title(&query);
            if matching.is_empty() {
                return Err(SkillHunterError::NotFound(format!(
                    "No vacancies match \"{}\"",
                    query
                )));
            }

            let rated_skills =
                aggregate_skills(matching.iter().map(|v| Some(&v.rated_skills)), limit);
            let report = Report::Skills(SkillsReport {
                number_of_vacancies: matching.len(),
                vacancy_name: query,
                rated_skills,
            });
            print_report(&config, format, &report)
        }

        Commands::Match {
            resume,
            snapshot,
            dictionary,
            output,
        } => {
            cli::validate_file_extension(&resume, &["txt", "md"])
                .map_err(|e| SkillHunterError::InvalidInput(format!("Resume file: {}", e)))?;
            let format = parse_format(&output)?;

            let store = StoreManager::new(config.cache_ttl());
            let dictionary_path =
                resolve_path(dictionary, &config.store.dictionary_path, "skill dictionary")?;
            let dictionary = store.dictionary(&dictionary_path).await?;
            let snapshot_path =
                resolve_path(snapshot, &config.store.snapshot_path, "vacancy snapshot")?;
            let snapshot = store.snapshot(&snapshot_path).await?;

            let mut input_manager = InputManager::new();
            let resume_text = input_manager.extract_text(&resume).await?;

            let extractor =
                SkillExtractor::with_case_sensitivity(&dictionary, config.matching.case_sensitive);
            let resume_skills = extractor.distinct_skills(&resume_text);
            info!("Found {} distinct skills in resume", resume_skills.len());

            let vacancies = rank_vacancies(&resume_skills, &snapshot.vacancies);
            let report = Report::TailoredVacancies(TailoredVacanciesReport { vacancies });
            print_report(&config, format, &report)
        }

        Commands::Config { action } => match action.unwrap_or(ConfigAction::Show) {
            ConfigAction::Show => {
                let rendered = toml::to_string_pretty(&config)
                    .map_err(|e| SkillHunterError::Configuration(e.to_string()))?;
                println!("{}", rendered);
                Ok(())
            }
            ConfigAction::Reset => {
                Config::default().save()?;
                info!("Configuration reset to defaults");
                Ok(())
            }
        },
    }
}

fn parse_format(output: &str) -> Result<OutputFormat> {
    cli::parse_output_format(output).map_err(SkillHunterError::InvalidInput)
}

fn resolve_path(
    flag: Option<PathBuf>,
    configured: &Option<PathBuf>,
    what: &str,
) -> Result<PathBuf> {
    flag.or_else(|| configured.clone()).ok_or_else(|| {
        SkillHunterError::InvalidInput(format!(
            "No {} given: pass the flag or set it in the config",
            what
        ))
    })
}

fn print_report(config: &Config, format: OutputFormat, report: &Report) -> Result<()> {
    let mut output_config = config.output.clone();
    output_config.format = format;
    let rendered = ReportGenerator::new(output_config).format(report)?;
    println!("{}", rendered);
    Ok(())
}
