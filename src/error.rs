//! Error handling for the skillhunter toolkit

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkillHunterError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),
}

pub type Result<T> = std::result::Result<T, SkillHunterError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for SkillHunterError {
    fn from(err: anyhow::Error) -> Self {
        SkillHunterError::AnalysisFailed(err.to_string())
    }
}
