use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::{Snapshot, Trainer};

use crate::fixture;

/// Test context holding a trainer and its prior snapshot history.
///
/// Produced by `TestBuilder::build()`. Candidate snapshots created through the context
/// belong to the context's trainer and carry a fresh uuid.
pub struct TestContext {
    /// Trainer under test.
    pub trainer: Trainer,

    /// Prior snapshots for the trainer in the order they were added.
    pub history: Vec<Snapshot>,
}

impl TestContext {
    /// Creates a test context from a trainer and history.
    ///
    /// # Arguments
    /// - `trainer` - Trainer under test
    /// - `history` - Prior snapshots for the trainer
    ///
    /// # Returns
    /// - New `TestContext` instance
    pub fn new(trainer: Trainer, history: Vec<Snapshot>) -> Self {
        Self { trainer, history }
    }

    /// Creates an empty candidate snapshot posted at `post_dt`.
    pub fn candidate(&self, post_dt: DateTime<Utc>) -> Snapshot {
        fixture::snapshot::entity_builder()
            .trainer_id(self.trainer.id)
            .post_dt(post_dt)
            .build()
    }

    /// Creates an empty candidate snapshot posted at noon on `date`.
    pub fn candidate_on(&self, date: NaiveDate) -> Snapshot {
        self.candidate(fixture::at(date))
    }
}
