use entity::prelude::{Snapshot, StatKind, Trainer};
use serde::{Deserialize, Serialize};

use crate::error::submission::SubmissionError;

/// Submission document as read from the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionDto {
    pub trainer: Trainer,
    /// The trainer's earlier snapshots, in any order.
    #[serde(default)]
    pub history: Vec<Snapshot>,
    /// Snapshot being submitted.
    pub candidate: Snapshot,
    /// Submitter confirmed the values after seeing warnings.
    #[serde(default)]
    pub double_check_confirmation: bool,
}

/// A submission that passed boundary checks.
///
/// Every snapshot belongs to the trainer and every stat value is a finite, non-negative
/// number, whole for count stats. The history is sorted by post timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionParams {
    pub trainer: Trainer,
    pub history: Vec<Snapshot>,
    pub candidate: Snapshot,
    pub double_check_confirmation: bool,
}

impl SubmissionParams {
    /// Converts a submission document into checked parameters.
    ///
    /// # Arguments
    /// - `dto` - Parsed submission document
    ///
    /// # Returns
    /// - `Ok(SubmissionParams)` - Document passed all boundary checks
    /// - `Err(SubmissionError::InvalidTrainer)` - Username, trainer code or start date is invalid
    /// - `Err(SubmissionError::TrainerMismatch)` - A snapshot belongs to another trainer
    /// - `Err(SubmissionError::NonFiniteValue)` - A stat value is NaN or infinite
    /// - `Err(SubmissionError::NegativeValue)` - A stat value is below zero
    /// - `Err(SubmissionError::FractionalCount)` - A count stat has a fractional value
    pub fn from_dto(dto: SubmissionDto) -> Result<Self, SubmissionError> {
        dto.trainer.validate()?;

        for snapshot in dto.history.iter().chain(std::iter::once(&dto.candidate)) {
            check_snapshot(&dto.trainer, snapshot)?;
        }

        let mut history = dto.history;
        history.sort_by_key(|snapshot| snapshot.post_dt);

        Ok(Self {
            trainer: dto.trainer,
            history,
            candidate: dto.candidate,
            double_check_confirmation: dto.double_check_confirmation,
        })
    }
}

fn check_snapshot(trainer: &Trainer, snapshot: &Snapshot) -> Result<(), SubmissionError> {
    if snapshot.trainer_id != trainer.id {
        return Err(SubmissionError::TrainerMismatch {
            snapshot: snapshot.uuid,
            expected: trainer.id,
            found: snapshot.trainer_id,
        });
    }

    for (stat, value) in snapshot.populated() {
        if !value.is_finite() {
            return Err(SubmissionError::NonFiniteValue {
                snapshot: snapshot.uuid,
                stat,
            });
        }

        if value < 0.0 {
            return Err(SubmissionError::NegativeValue {
                snapshot: snapshot.uuid,
                stat,
                value,
            });
        }

        if stat.kind() == StatKind::Count && value.fract() != 0.0 {
            return Err(SubmissionError::FractionalCount {
                snapshot: snapshot.uuid,
                stat,
                value,
            });
        }
    }

    Ok(())
}
