//! Test fixtures providing reusable in-memory test data.
//!
//! Each entity has a fixture module with an `entity()` function returning a default value
//! and an `entity_builder()` for customizing individual fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let trainer = fixture::trainer::entity();
//!
//! let veteran = fixture::trainer::entity_builder()
//!     .start_date(Some(fixture::date(2016, 7, 6)))
//!     .build();
//! ```

pub mod snapshot;
pub mod trainer;

use chrono::{DateTime, NaiveDate, Utc};

pub use snapshot::{entity as snapshot_entity, entity_builder as snapshot_entity_builder};
pub use trainer::{entity as trainer_entity, entity_builder as trainer_entity_builder};

/// Builds a calendar date, panicking on an invalid one.
///
/// # Arguments
/// - `year`, `month`, `day` - Calendar components
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Noon UTC on the given date.
///
/// Noon keeps fixture timestamps clear of day boundaries, so a snapshot's calendar
/// date is unambiguous.
pub fn at(date: NaiveDate) -> DateTime<Utc> {
    at_hour(date, 12)
}

/// The given hour UTC on the given date.
pub fn at_hour(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0)
        .expect("valid fixture hour")
        .and_utc()
}
