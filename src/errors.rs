use std::path::PathBuf;

use thiserror::Error;

/// Error type that captures store, configuration, and export failures.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Malformed data in `{}`: {reason}", .path.display())]
    Malformed { path: PathBuf, reason: String },
    #[error("Expense `{0}` not found")]
    NotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl ExpenseError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ExpenseError::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, ExpenseError>;

/// User-facing error for the interactive front end and binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] ExpenseError),
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),
    #[error("Invalid input: {0}")]
    Input(String),
}
