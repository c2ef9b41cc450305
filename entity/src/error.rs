use chrono::NaiveDate;
use thiserror::Error;

/// Validation failures for entity values received from outside the crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntityError {
    /// Username does not match the in-game nickname rules.
    ///
    /// Nicknames are 3 to 15 ASCII letters or digits.
    #[error("Invalid username '{0}': only 3 to 15 letters and numbers are allowed")]
    InvalidUsername(String),

    /// Trainer code is not 12 digits.
    ///
    /// Digits may be grouped in fours separated by a single space.
    #[error("Invalid trainer code '{0}': must be 12 digits long and contain only numbers and whitespace")]
    InvalidTrainerCode(String),

    /// Account start date predates the game's launch.
    #[error("Start date {start_date} is before the earliest allowed date {earliest}")]
    StartDateTooEarly {
        /// The rejected start date
        start_date: NaiveDate,
        /// The earliest accepted start date
        earliest: NaiveDate,
    },

    /// Faction id or slug does not name one of the four factions.
    #[error("Unknown faction '{0}'")]
    UnknownFaction(String),

    /// Stat identifier is not part of the catalogue.
    #[error("Unknown stat '{0}'")]
    UnknownStat(String),
}
