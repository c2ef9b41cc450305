use std::collections::BTreeMap;

use entity::prelude::{DataSource, Stat};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Decision taken on a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmissionOutcome {
    /// No errors; any warnings were confirmed by the submitter.
    Accepted,
    /// No errors, but warnings the submitter has not confirmed yet.
    NeedsConfirmation,
    /// At least one hard error.
    Rejected,
}

impl SubmissionOutcome {
    /// Decides the outcome from the finding counts.
    ///
    /// # Arguments
    /// - `has_errors` - Whether any field has a hard error
    /// - `has_warnings` - Whether any field has a warning
    /// - `confirmed` - Whether the submitter double-checked the values
    pub fn decide(has_errors: bool, has_warnings: bool, confirmed: bool) -> Self {
        if has_errors {
            SubmissionOutcome::Rejected
        } else if has_warnings && !confirmed {
            SubmissionOutcome::NeedsConfirmation
        } else {
            SubmissionOutcome::Accepted
        }
    }

    /// Process exit status for the outcome.
    ///
    /// # Returns
    /// - `0` - Accepted
    /// - `1` - Rejected
    /// - `3` - Needs confirmation
    pub fn exit_code(self) -> u8 {
        match self {
            SubmissionOutcome::Accepted => 0,
            SubmissionOutcome::Rejected => 1,
            SubmissionOutcome::NeedsConfirmation => 3,
        }
    }
}

/// Report written to stdout after a submission was validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionReportDto {
    pub outcome: SubmissionOutcome,
    pub trainer: String,
    pub snapshot: Uuid,
    pub data_source: DataSource,
    /// Rendered hard errors keyed by stat identifier.
    pub errors: BTreeMap<Stat, Vec<String>>,
    /// Rendered warnings keyed by stat identifier.
    pub warnings: BTreeMap<Stat, Vec<String>>,
    /// Levels consistent with the candidate's total XP, empty when it reported none.
    pub possible_levels: Vec<u8>,
}
