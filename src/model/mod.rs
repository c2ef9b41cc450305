//! Submission documents and reports exchanged with the outside world.
//!
//! DTOs here are serde types describing the JSON read from the input and written to
//! stdout. Conversion into checked parameters happens at this boundary so malformed
//! input never reaches the validator.

pub mod report;
pub mod submission;
