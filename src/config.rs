use std::fmt;

use crate::{
    error::{config::ConfigError, AppError},
    validation::ElapsedDayPolicy,
};

const LOG_VAR: &str = "TRAINERDEX_LOG";
const LOG_FORMAT_VAR: &str = "TRAINERDEX_LOG_FORMAT";
const ELAPSED_DAY_POLICY_VAR: &str = "TRAINERDEX_ELAPSED_DAY_POLICY";

const DEFAULT_LOG_FILTER: &str = "info";

/// Output format for log lines written to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl LogFormat {
    pub fn name(self) -> &'static str {
        match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        [LogFormat::Pretty, LogFormat::Json]
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive, e.g. `info` or `trainerdex=debug`.
    pub log_filter: String,
    pub log_format: LogFormat,
    pub elapsed_day_policy: ElapsedDayPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_format: LogFormat::default(),
            elapsed_day_policy: ElapsedDayPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// Call `dotenvy::dotenv()` beforehand to pick up a `.env` file.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables unset or valid
    /// - `Err(AppError::ConfigErr)` - A variable is set to an unusable value
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self::from_lookup(|var| std::env::var(var).ok())?)
    }

    /// Loads configuration through a variable lookup function.
    ///
    /// Blank values count as unset.
    ///
    /// # Arguments
    /// - `lookup` - Returns the value of a variable, `None` when unset
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables unset or valid
    /// - `Err(ConfigError::InvalidValue)` - A variable is set to an unusable value
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| lookup(var).filter(|value| !value.trim().is_empty());
        let defaults = Self::default();

        let log_filter = get(LOG_VAR).unwrap_or(defaults.log_filter);

        let log_format = match get(LOG_FORMAT_VAR) {
            Some(value) => LogFormat::from_name(&value)
                .ok_or_else(|| invalid(LOG_FORMAT_VAR, value, "pretty or json"))?,
            None => defaults.log_format,
        };

        let elapsed_day_policy = match get(ELAPSED_DAY_POLICY_VAR) {
            Some(value) => ElapsedDayPolicy::from_name(&value)
                .ok_or_else(|| invalid(ELAPSED_DAY_POLICY_VAR, value, "skip, warn or reject"))?,
            None => defaults.elapsed_day_policy,
        };

        Ok(Self {
            log_filter,
            log_format,
            elapsed_day_policy,
        })
    }
}

fn invalid(var: &str, value: String, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.to_string(),
        value,
        expected: expected.to_string(),
    }
}
