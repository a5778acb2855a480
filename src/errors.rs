//! Unified application error type.
//! All modules (models, core, db, export, cli) return AppError to keep the
//! error handling consistent and easy to manage.

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
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid hour: {0} (expected 0-23)")]
    InvalidHour(u32),

    #[error("Invalid activity: {0}")]
    InvalidActivity(String),

    // ---------------------------
    // Planner logic errors
    // ---------------------------
    #[error("Invalid block: {start:02}:00 to {end:02}:00")]
    InvalidBlock { start: u32, end: u32 },

    #[error("Invalid session length: {0} minutes (at least 60 required)")]
    InvalidSessionLength(u32),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,
}

pub type AppResult<T> = Result<T, AppError>;
