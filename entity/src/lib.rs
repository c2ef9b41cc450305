//! TrainerDex domain entities.
//!
//! Plain domain types shared by the validator, the submission boundary and the test
//! utilities. Nothing in this crate touches storage; a trainer's snapshot history is
//! handed in by the caller.
//!
//! # Modules
//!
//! - **faction** - The four fixed in-game teams
//! - **trainer** - Player profiles and their moderation state
//! - **stat** - The catalogue of tracked statistics with per-field bounds
//! - **snapshot** - Timestamped records of a trainer's cumulative statistics
//! - **release** - Feature release dates used as rate anchors
//! - **level** - The trainer level XP table
//! - **error** - Entity validation errors

pub mod error;
pub mod faction;
pub mod level;
pub mod prelude;
pub mod release;
pub mod snapshot;
pub mod stat;
pub mod trainer;
