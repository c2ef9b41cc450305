use std::{
    io::Read,
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;

use crate::{
    config::{Config, LogFormat},
    error::{config::ConfigError, AppError},
    model::submission::SubmissionDto,
};

/// Installs the global `tracing` subscriber.
///
/// Log lines go to stderr so stdout carries only the JSON report. Verbose mode replaces
/// the configured filter with `debug`.
///
/// # Arguments
/// - `config` - Application configuration holding the filter and output format
/// - `verbose` - Whether `-v` was passed on the command line
///
/// # Returns
/// - `Ok(())` - Subscriber installed
/// - `Err(AppError::ConfigErr)` - The filter directive does not parse
pub fn init_tracing(config: &Config, verbose: bool) -> Result<(), AppError> {
    let directive = if verbose {
        "debug"
    } else {
        config.log_filter.as_str()
    };
    let filter = EnvFilter::try_new(directive).map_err(|e| ConfigError::InvalidValue {
        var: "TRAINERDEX_LOG".to_string(),
        value: directive.to_string(),
        expected: format!("a tracing filter directive ({e})"),
    })?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    // A subscriber may already be installed when embedded; keep the existing one.
    let _ = match config.log_format {
        LogFormat::Pretty => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    Ok(())
}

/// Reads and parses a submission document from a file or stdin.
///
/// # Arguments
/// - `input` - Path to read, or `None` for stdin
///
/// # Returns
/// - `Ok(SubmissionDto)` - Parsed document, not yet checked
/// - `Err(AppError::ReadInput)` - The file or stdin could not be read
/// - `Err(AppError::JsonErr)` - The document is not a valid submission
pub fn read_submission(input: Option<&Path>) -> Result<SubmissionDto, AppError> {
    let raw = match input {
        Some(path) => std::fs::read_to_string(path).map_err(|source| AppError::ReadInput {
            path: Some(path.to_path_buf()),
            source,
        })?,
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .map_err(|source| AppError::ReadInput { path: None, source })?;
            raw
        }
    };

    tracing::debug!(bytes = raw.len(), source = %input_label(input), "read submission document");

    Ok(serde_json::from_str(&raw)?)
}

fn input_label(input: Option<&Path>) -> String {
    input
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("stdin"))
        .display()
        .to_string()
}
