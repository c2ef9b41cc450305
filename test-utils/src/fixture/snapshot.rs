//! Snapshot fixtures for creating in-memory test data.

use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::{DataSource, Snapshot, Stat};
use uuid::Uuid;

use crate::fixture::{at, date, trainer::DEFAULT_ID};

/// Default snapshot date, noon UTC.
pub fn default_post_dt() -> DateTime<Utc> {
    at(date(2020, 1, 1))
}

/// Creates an empty snapshot for the default trainer.
///
/// # Default Values
/// - trainer_id: `1`
/// - post_dt: `2020-01-01T12:00:00Z`
/// - data_source: `WebDetailed`
/// - stats: empty
pub fn entity() -> Snapshot {
    entity_builder().build()
}

/// Creates a snapshot builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let snapshot = fixture::snapshot::entity_builder()
///     .on(fixture::date(2020, 1, 2))
///     .stat(Stat::TotalXp, 1_000_000.0)
///     .build();
/// ```
pub fn entity_builder() -> SnapshotEntityBuilder {
    SnapshotEntityBuilder {
        snapshot: Snapshot {
            data_source: DataSource::WebDetailed,
            ..Snapshot::new(DEFAULT_ID, default_post_dt())
        },
    }
}

/// Builder for snapshots with custom field values.
pub struct SnapshotEntityBuilder {
    snapshot: Snapshot,
}

impl SnapshotEntityBuilder {
    pub fn uuid(mut self, uuid: Uuid) -> Self {
        self.snapshot.uuid = uuid;
        self
    }

    pub fn trainer_id(mut self, trainer_id: i32) -> Self {
        self.snapshot.trainer_id = trainer_id;
        self
    }

    pub fn post_dt(mut self, post_dt: DateTime<Utc>) -> Self {
        self.snapshot.post_dt = post_dt;
        self
    }

    /// Posts the snapshot at noon UTC on `date`.
    pub fn on(self, date: NaiveDate) -> Self {
        self.post_dt(at(date))
    }

    pub fn data_source(mut self, data_source: DataSource) -> Self {
        self.snapshot.data_source = data_source;
        self
    }

    pub fn stat(mut self, stat: Stat, value: f64) -> Self {
        self.snapshot.stats.insert(stat, value);
        self
    }

    /// Builds the snapshot.
    pub fn build(self) -> Snapshot {
        self.snapshot
    }
}
