//! Error types and process exit code mapping.
//!
//! This module provides the application's error hierarchy. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors, and `exit_code()` maps
//! each failure to a conventional `sysexits` status so scripts can tell malformed input
//! from unreadable input or bad configuration.
//!
//! Business-rule findings such as a decreasing stat are not errors at this level; they
//! are reported by the validator and decide the submission outcome instead.

pub mod config;
pub mod submission;

use std::path::PathBuf;

use thiserror::Error;

use crate::error::{config::ConfigError, submission::SubmissionError};

/// Exit status for malformed input data.
pub const EX_DATAERR: u8 = 65;
/// Exit status for input that cannot be opened or read.
pub const EX_NOINPUT: u8 = 66;
/// Exit status for an unusable configuration.
pub const EX_CONFIG: u8 = 78;
/// Exit status for failures writing output.
pub const EX_IOERR: u8 = 74;

/// Top-level application error type.
///
/// Aggregates all errors that can stop a run before an outcome is decided. Most variants
/// use `#[from]` for automatic conversion with `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error while loading environment variables or initialising logging.
    ///
    /// Exits with `EX_CONFIG` (78).
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Submission document failed boundary checks.
    ///
    /// Exits with `EX_DATAERR` (65).
    #[error(transparent)]
    SubmissionErr(#[from] SubmissionError),

    /// Submission document is not valid JSON or does not match the expected shape.
    ///
    /// Covers unknown stat identifiers, unknown factions, malformed dates, non-numeric
    /// values and missing required fields. Exits with `EX_DATAERR` (65).
    #[error("Malformed submission document: {0}")]
    JsonErr(#[from] serde_json::Error),

    /// Input could not be read.
    ///
    /// Exits with `EX_NOINPUT` (66).
    ///
    /// # Fields
    /// - `path` - File that failed to read, `None` for stdin
    /// - `source` - Underlying I/O error
    #[error("Failed to read {}: {source}", input_name(.path))]
    ReadInput {
        path: Option<PathBuf>,
        #[source]
        source: std::io::Error,
    },

    /// Report could not be written to stdout.
    ///
    /// Exits with `EX_IOERR` (74).
    #[error("Failed to write report: {0}")]
    WriteOutput(#[source] std::io::Error),
}

fn input_name(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map_or_else(|| "stdin".to_string(), |path| path.display().to_string())
}

impl AppError {
    /// Maps the error to a process exit status.
    ///
    /// # Returns
    /// - `EX_CONFIG` (78) - For `ConfigErr`
    /// - `EX_DATAERR` (65) - For `SubmissionErr` and `JsonErr`
    /// - `EX_NOINPUT` (66) - For `ReadInput`
    /// - `EX_IOERR` (74) - For `WriteOutput`
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::ConfigErr(_) => EX_CONFIG,
            Self::SubmissionErr(_) | Self::JsonErr(_) => EX_DATAERR,
            Self::ReadInput { .. } => EX_NOINPUT,
            Self::WriteOutput(_) => EX_IOERR,
        }
    }
}
