use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable holds a value the application cannot use.
    ///
    /// Unset variables fall back to their defaults; only present but unusable values
    /// are rejected. Check the README or `.env` file for accepted values.
    #[error("Invalid value '{value}' for environment variable {var}: expected {expected}")]
    InvalidValue {
        /// Name of the environment variable
        var: String,
        /// The rejected value
        value: String,
        /// Description of the accepted values
        expected: String,
    },
}
