use entity::prelude::{EntityError, Stat};
use thiserror::Error;
use uuid::Uuid;

/// Rejections raised while checking a submission document, before validation runs.
///
/// Any of these rejects the whole document. They describe malformed input rather than
/// implausible progress, which the validator reports per field instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmissionError {
    /// Trainer profile fails entity validation.
    #[error(transparent)]
    InvalidTrainer(#[from] EntityError),

    /// A snapshot belongs to a different trainer than the submission.
    #[error("Snapshot {snapshot} belongs to trainer {found}, expected trainer {expected}")]
    TrainerMismatch {
        /// The offending snapshot
        snapshot: Uuid,
        /// Id of the submitting trainer
        expected: i32,
        /// Trainer id carried by the snapshot
        found: i32,
    },

    /// A stat value is NaN or infinite.
    #[error("Snapshot {snapshot} has a non-finite value for {stat}")]
    NonFiniteValue { snapshot: Uuid, stat: Stat },

    /// A stat value is below zero.
    #[error("Snapshot {snapshot} has a negative value {value} for {stat}")]
    NegativeValue {
        snapshot: Uuid,
        stat: Stat,
        value: f64,
    },

    /// A whole-number stat carries a fractional value.
    #[error("Snapshot {snapshot} has a fractional value {value} for {stat}, which only accepts whole numbers")]
    FractionalCount {
        snapshot: Uuid,
        stat: Stat,
        value: f64,
    },
}
