//! Trainer fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::prelude::{Faction, Trainer};

/// Default test trainer id.
pub const DEFAULT_ID: i32 = 1;

/// Default test trainer username.
pub const DEFAULT_USERNAME: &str = "JayTurnr";

/// Default test trainer faction.
pub const DEFAULT_FACTION: Faction = Faction::Mystic;

/// Creates a trainer with default values.
///
/// # Default Values
/// - id: `1`
/// - username: `"JayTurnr"`
/// - start_date: `None`
/// - faction: `Mystic`
/// - verified: `true`
/// - no bans, no cheating record, no trainer code
///
/// # Returns
/// - `Trainer` - In-memory trainer
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let trainer = fixture::trainer::entity();
/// assert_eq!(trainer.username, "JayTurnr");
/// ```
pub fn entity() -> Trainer {
    entity_builder().build()
}

/// Creates a trainer builder for customization.
///
/// # Returns
/// - `TrainerEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> TrainerEntityBuilder {
    TrainerEntityBuilder {
        trainer: Trainer {
            verified: true,
            faction: DEFAULT_FACTION,
            ..Trainer::new(DEFAULT_ID, DEFAULT_USERNAME)
        },
    }
}

/// Builder for trainers with custom field values.
pub struct TrainerEntityBuilder {
    trainer: Trainer,
}

impl TrainerEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.trainer.id = id;
        self
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.trainer.username = username.into();
        self
    }

    pub fn start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        self.trainer.start_date = start_date;
        self
    }

    pub fn faction(mut self, faction: Faction) -> Self {
        self.trainer.faction = faction;
        self
    }

    pub fn perma_banned(mut self, perma_banned: bool) -> Self {
        self.trainer.perma_banned = perma_banned;
        self
    }

    pub fn last_cheated(mut self, last_cheated: Option<NaiveDate>) -> Self {
        self.trainer.last_cheated = last_cheated;
        self
    }

    pub fn trainer_code(mut self, trainer_code: Option<&str>) -> Self {
        self.trainer.trainer_code = trainer_code.map(str::to_string);
        self
    }

    /// Builds the trainer.
    pub fn build(self) -> Trainer {
        self.trainer
    }
}
