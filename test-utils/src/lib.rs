//! TrainerDex Test Utils
//!
//! Provides shared testing utilities for the validator and submission service. This crate
//! offers fixtures for trainers and snapshots plus a builder for assembling a trainer's
//! snapshot history.
//!
//! # Overview
//!
//! The test utilities consist of three main components:
//! - **fixture**: In-memory trainers, snapshots and date helpers with sensible defaults
//! - **TestBuilder**: Fluent builder for configuring a trainer and its prior snapshots
//! - **TestContext**: The assembled trainer and history, plus a helper for the candidate
//!
//! # Usage
//!
//! ```rust,ignore
//! use entity::prelude::Stat;
//! use test_utils::{builder::TestBuilder, fixture::date};
//!
//! let test = TestBuilder::new()
//!     .with_start_date(date(2020, 1, 1))
//!     .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 100.0)
//!     .build();
//!
//! let candidate = test.candidate_on(date(2020, 1, 2)).with(Stat::TotalXp, 50_000_000.0);
//! ```

pub mod builder;
pub mod context;
pub mod fixture;
