// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, JobError>;

#[derive(Debug, Error)]
pub enum JobError {
    /// DNS, connect, timeout or non-2xx status
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed JSON or a record missing one of its keys
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("vacancies field does not start with an integer: {value:?}")]
    InvalidVacancies { value: String },
}
