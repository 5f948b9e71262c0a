//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so that every failure
//! reaches `main` through a single, printable type.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error(
        "Cannot open database '{path}': {reason}\n\
         Run `rweekreport init` to create it, or point --db / the `database` key of the config file to an existing file."
    )]
    Connection { path: String, reason: String },

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unknown theme: {0} (use a theme number 1-28 or the exact name, see `rweekreport catalog`)")]
    InvalidTheme(String),

    #[error("Invalid row: {0}")]
    InvalidRow(String),

    // ---------------------------
    // Request errors
    // ---------------------------
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Configuration file {file} is missing required keys: {keys}")]
    ConfigMissing { file: String, keys: String },

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
