use chrono::NaiveDate;
use entity::prelude::{Snapshot, Stat, Trainer};

use crate::{context::TestContext, fixture};

/// Builder for creating test contexts with a trainer and snapshot history.
///
/// Starts from the default trainer fixture with no history. Chain `with_*` calls to
/// customize the trainer and add prior snapshots, then call `build()`.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::{builder::TestBuilder, fixture::date};
///
/// let test = TestBuilder::new()
///     .with_start_date(date(2020, 1, 1))
///     .with_stat_on(date(2020, 1, 1), Stat::BadgeCaptureTotal, 500.0)
///     .build();
/// ```
pub struct TestBuilder {
    /// Trainer the history belongs to.
    trainer: Trainer,

    /// Prior snapshots in insertion order.
    ///
    /// Snapshots added through the builder are reassigned to the trainer's id during
    /// `build()`, so callers only set a different owner through the trainer itself.
    history: Vec<Snapshot>,
}

impl TestBuilder {
    /// Creates a new test builder with the default trainer and an empty history.
    ///
    /// # Returns
    /// - New `TestBuilder` instance
    pub fn new() -> Self {
        Self {
            trainer: fixture::trainer::entity(),
            history: Vec::new(),
        }
    }

    /// Replaces the trainer.
    ///
    /// # Arguments
    /// - `trainer` - Trainer that owns the history
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_trainer(mut self, trainer: Trainer) -> Self {
        self.trainer = trainer;
        self
    }

    /// Sets the trainer's account start date.
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.trainer.start_date = Some(start_date);
        self
    }

    /// Adds a prior snapshot to the history.
    ///
    /// # Arguments
    /// - `snapshot` - Snapshot to add as-is apart from its owner
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_snapshot(mut self, snapshot: Snapshot) -> Self {
        self.history.push(snapshot);
        self
    }

    /// Adds a prior snapshot posted at noon on `date` holding a single stat.
    ///
    /// # Arguments
    /// - `date` - Calendar date of the snapshot
    /// - `stat` - Stat to populate
    /// - `value` - Reported value
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_stat_on(self, date: NaiveDate, stat: Stat, value: f64) -> Self {
        let snapshot = fixture::snapshot::entity_builder()
            .on(date)
            .stat(stat, value)
            .build();

        self.with_snapshot(snapshot)
    }

    /// Builds the test context.
    ///
    /// # Returns
    /// - `TestContext` - Trainer and its history, owned by the trainer's id
    pub fn build(self) -> TestContext {
        let trainer_id = self.trainer.id;
        let history = self
            .history
            .into_iter()
            .map(|snapshot| Snapshot {
                trainer_id,
                ..snapshot
            })
            .collect();

        TestContext::new(self.trainer, history)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
