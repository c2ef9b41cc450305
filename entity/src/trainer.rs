//! Trainer profile.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{
    error::EntityError,
    faction::Faction,
    release::{Release, EARLIEST_START_DATE},
};

static USERNAME: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,15}$").ok());

static TRAINER_CODE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}\s?\d{4}\s?\d{4}$").ok());

fn matches(pattern: &LazyLock<Option<Regex>>, value: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(value))
}

/// How long a cheating flag keeps a trainer banned.
pub const CHEAT_BAN_WEEKS: i64 = 26;

/// A player profile whose stats are being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: i32,
    /// In-game nickname.
    pub username: String,
    /// Date the trainer started playing, if known.
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub faction: Faction,
    #[serde(default)]
    pub verified: bool,
    /// Permanently excluded from the site.
    #[serde(default)]
    pub perma_banned: bool,
    /// Whether the trainer opted into statistics.
    #[serde(default = "default_statistics")]
    pub statistics: bool,
    /// Date the trainer was last caught cheating.
    #[serde(default)]
    pub last_cheated: Option<NaiveDate>,
    /// 12 digit friend code.
    #[serde(default)]
    pub trainer_code: Option<String>,
}

fn default_statistics() -> bool {
    true
}

impl Trainer {
    /// Creates an unverified, unaligned trainer with no optional fields set.
    pub fn new(id: i32, username: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            start_date: None,
            faction: Faction::default(),
            verified: false,
            perma_banned: false,
            statistics: true,
            last_cheated: None,
            trainer_code: None,
        }
    }

    pub fn has_cheated(&self) -> bool {
        self.last_cheated.is_some()
    }

    /// Whether the trainer is banned on the given date.
    ///
    /// A permanent ban always applies. A cheating flag bans the trainer for
    /// [`CHEAT_BAN_WEEKS`] weeks from the date it was recorded.
    ///
    /// # Arguments
    /// - `on` - Date to evaluate the ban against
    pub fn is_banned(&self, on: NaiveDate) -> bool {
        if self.perma_banned {
            return true;
        }

        self.last_cheated
            .is_some_and(|cheated| cheated + Duration::weeks(CHEAT_BAN_WEEKS) > on)
    }

    /// Start date, falling back to the game's launch when unknown.
    pub fn start_or_launch(&self) -> NaiveDate {
        self.start_date.unwrap_or(Release::PokemonGo.date())
    }

    /// Checks the profile fields supplied by the user.
    ///
    /// # Returns
    /// - `Ok(())` - Username, trainer code and start date are acceptable
    /// - `Err(EntityError)` - The first offending field
    pub fn validate(&self) -> Result<(), EntityError> {
        if !matches(&USERNAME, &self.username) {
            return Err(EntityError::InvalidUsername(self.username.clone()));
        }

        if let Some(code) = &self.trainer_code {
            if !matches(&TRAINER_CODE, code) {
                return Err(EntityError::InvalidTrainerCode(code.clone()));
            }
        }

        if let Some(start_date) = self.start_date {
            if start_date < EARLIEST_START_DATE {
                return Err(EntityError::StartDateTooEarly {
                    start_date,
                    earliest: EARLIEST_START_DATE,
                });
            }
        }

        Ok(())
    }
}
