//! CLI interface for skillhunter

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "skillhunter")]
#[command(about = "Job vacancy skill extraction and ranking toolkit")]
#[command(
    long_about = "Extract skills from vacancy and resume text with a dictionary-driven keyword matcher, aggregate them per job title, and rank vacancies against a resume"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract skill counts from one document
    Extract {
        /// Path to the document (TXT, MD)
        #[arg(short, long)]
        text: PathBuf,

        /// Skill dictionary JSON (defaults to the configured path)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Rate scraped vacancies and write a snapshot
    Scan {
        /// Raw vacancies JSON produced by the scraping layer
        #[arg(short, long)]
        input: PathBuf,

        /// Skill dictionary JSON (defaults to the configured path)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Where to write the snapshot
        #[arg(short, long)]
        out: PathBuf,
    },

    /// Rank the skills wanted for a job title
    Skills {
        /// The job title to be processed
        #[arg(short, long)]
        query: String,

        /// Vacancy snapshot (defaults to the configured path)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Number of most wanted skills to display
        #[arg(short, long)]
        limit: Option<usize>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Rank vacancies against a resume
    Match {
        /// Path to the resume text (TXT, MD)
        #[arg(short, long)]
        resume: PathBuf,

        /// Vacancy snapshot (defaults to the configured path)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,

        /// Skill dictionary JSON (defaults to the configured path)
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long, default_value = "console")]
        output: String,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
