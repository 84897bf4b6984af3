//! Unified application error type.
//! All modules (db, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use crate::core::validator::ValidationError;
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
    // Storage-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Stored value is corrupted: {0}")]
    Serde(#[from] serde_json::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid weekday: {0}")]
    InvalidWeekday(String),

    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    #[error("Appointment starting at {start} for {minutes} min would end after midnight")]
    CrossesMidnight { start: String, minutes: u32 },

    #[error("Invalid color '{0}': expected a hex value such as #a1b2c3")]
    InvalidColor(String),

    #[error("Invalid value: {0}")]
    InvalidInput(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("No appointment with id '{0}'")]
    AppointmentNotFound(String),

    #[error("No employee with id '{0}'")]
    EmployeeNotFound(String),

    #[error("No service with id '{0}'")]
    ServiceNotFound(String),

    #[error("No exception date for {0}")]
    ExceptionNotFound(String),

    #[error("Duplicate id: {0}")]
    DuplicateId(String),

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
    #[error("Export error: {0}")]
    Export(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type AppResult<T> = Result<T, AppError>;
