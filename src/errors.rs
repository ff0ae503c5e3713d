//! Unified application error type.
//! The core returns `Option` for pure operations; everything that talks to
//! the user (session, cli, config) returns AppError so rejections carry a
//! human-readable reason.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // User input
    // ---------------------------
    #[error("Please enter a valid duration in hh:mm format (e.g., 5:00 or 00:80): '{0}'")]
    InvalidDuration(String),

    #[error("Please enter valid start and end times in hh:mm format: '{0}'")]
    InvalidTime(String),

    #[error("Invalid meridiem '{0}': expected AM or PM")]
    InvalidMeridiem(String),

    #[error("End time must be later than start time ({start} -> {end})")]
    EndNotAfterStart { start: String, end: String },

    #[error("Unknown command: {0} (type 'help' for the list of commands)")]
    UnknownCommand(String),

    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Output
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// True for errors caused by what the user typed. The interactive shell
    /// reports these and keeps going.
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            AppError::InvalidDuration(_)
                | AppError::InvalidTime(_)
                | AppError::InvalidMeridiem(_)
                | AppError::EndNotAfterStart { .. }
                | AppError::UnknownCommand(_)
        )
    }
}

pub type AppResult<T> = Result<T, AppError>;
