//! Unified application error type.
//! Store, reporting, export and CLI code all return AppError so that every
//! failure reaches `main` as a single labelled message.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // Input validation
    // ---------------------------
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid transportation type: '{0}' (expected car, bus, train, bike or walk)")]
    InvalidTransportMode(String),

    // ---------------------------
    // Store
    // ---------------------------
    #[error("Invalid activity index {index}: the log has {len} activities")]
    IndexOutOfRange { index: usize, len: usize },

    // ---------------------------
    // Persistence
    // ---------------------------
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Error reading file - invalid document: {0}")]
    MalformedDocument(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::MalformedDocument(e.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
