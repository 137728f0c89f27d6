//! Unified application error type.
//! Store, core, export and cli all return AppError so that every failure
//! ends up as one user-facing message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Domain
    // ---------------------------
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("Operation cancelled: {0}")]
    ConfirmationDeclined(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Malformed stored record: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),
}

impl AppError {
    /// True for the errors a user can cause from the kiosk itself
    /// (bad input, wrong PIN, declined prompt).
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            AppError::Validation(_) | AppError::Unauthorized(_) | AppError::ConfirmationDeclined(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
