//! Medal and badge progress validation.
//!
//! Decides, field by field, whether a candidate snapshot is plausible given the trainer's
//! earlier snapshots. Findings come in two tiers:
//!
//! - **Errors** block the submission: a value lower than the previous one, a value
//!   outside the stat's bounds, or under [`ElapsedDayPolicy::Reject`] progress reported
//!   with no elapsed time.
//! - **Warnings** are surfaced but do not block: implausibly fast daily progress, or under
//!   [`ElapsedDayPolicy::Warn`] progress reported with no elapsed time.
//!
//! Validation is a pure function of the candidate, the trainer, the history and the
//! policy. It never fails; business-rule violations are returned in a
//! [`ValidationReport`].

pub mod bounds;
pub mod rate;
pub mod report;
pub mod rule;

#[cfg(test)]
mod test;

use std::{cmp::Ordering, fmt};

use entity::prelude::{Snapshot, Stat, Trainer};
use serde::{Deserialize, Serialize};

use crate::validation::{
    bounds::check_bounds,
    rate::{daily_rate_check, RateCheck},
    report::{FieldError, FieldWarning, RateAnchor, ValidationReport},
    rule::{rule_for, RateRule},
};

/// What to do when a submission is not dated after a rate anchor.
///
/// The daily rate is undefined when no whole day has passed. Warn and reject only apply
/// when the value progressed past the anchor value; an unchanged same-day resubmission
/// always passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElapsedDayPolicy {
    /// Treat the rate check as passed.
    #[default]
    Skip,
    /// Attach a warning.
    Warn,
    /// Attach a hard error.
    Reject,
}

impl ElapsedDayPolicy {
    pub const ALL: [ElapsedDayPolicy; 3] = [
        ElapsedDayPolicy::Skip,
        ElapsedDayPolicy::Warn,
        ElapsedDayPolicy::Reject,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ElapsedDayPolicy::Skip => "skip",
            ElapsedDayPolicy::Warn => "warn",
            ElapsedDayPolicy::Reject => "reject",
        }
    }

    /// Parses a policy name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|policy| policy.name().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for ElapsedDayPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Outcome of the rate check for one field.
enum RateFinding {
    Warning(FieldWarning),
    Error(FieldError),
}

/// Validates candidate snapshots against a trainer's history.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator {
    policy: ElapsedDayPolicy,
}

impl Validator {
    /// Creates a validator that skips rate checks with no elapsed days.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: ElapsedDayPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ElapsedDayPolicy {
        self.policy
    }

    /// Validates every populated stat of a candidate snapshot.
    ///
    /// For each stat the candidate reports, the previous value is the trainer's most recent
    /// earlier snapshot holding that stat. Snapshots sharing the candidate's uuid are
    /// ignored, so re-validating a stored snapshot never compares it with itself.
    ///
    /// # Arguments
    /// - `candidate` - Snapshot being submitted
    /// - `trainer` - Owner of the snapshot; its start date anchors long-run rate checks
    /// - `history` - The trainer's other snapshots, in any order
    ///
    /// # Returns
    /// - `ValidationReport` - Errors and warnings keyed by stat, empty when all fields pass
    pub fn validate(
        &self,
        candidate: &Snapshot,
        trainer: &Trainer,
        history: &[Snapshot],
    ) -> ValidationReport {
        let mut report = ValidationReport::default();

        for (stat, value) in candidate.populated() {
            let previous = previous_value(stat, candidate, history);

            if let Some(previous) = previous.filter(|previous| value < previous.value) {
                report.push_error(
                    stat,
                    FieldError::Decreased {
                        value,
                        previous: previous.value,
                        previous_dt: previous.snapshot.post_dt,
                    },
                );
            }

            if let Some(error) = check_bounds(stat, value) {
                report.push_error(stat, error);
            }

            let Some(rule) = rule_for(stat) else {
                continue;
            };

            match self.check_rate(rule, value, candidate, trainer, previous) {
                Some(RateFinding::Warning(warning)) => report.push_warning(stat, warning),
                Some(RateFinding::Error(error)) => report.push_error(stat, error),
                None => {}
            }
        }

        tracing::trace!(
            trainer = trainer.id,
            snapshot = %candidate.uuid,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "validated snapshot"
        );

        report
    }

    /// Runs the daily-rate check from the reference date and then from the previous value.
    ///
    /// Stops at the first anchor that yields a finding, so a field gets at most one rate
    /// warning.
    fn check_rate(
        &self,
        rule: &RateRule,
        value: f64,
        candidate: &Snapshot,
        trainer: &Trainer,
        previous: Option<PreviousValue<'_>>,
    ) -> Option<RateFinding> {
        let date = candidate.post_date();

        let reference = rule
            .reference
            .resolve(trainer)
            .map(|date| RateAnchor::Reference { date });
        let previous = previous.map(|previous| RateAnchor::Previous {
            date: previous.snapshot.post_date(),
            value: previous.value,
        });

        reference.into_iter().chain(previous).find_map(|anchor| {
            match daily_rate_check(anchor.date(), anchor.value(), date, value, rule.daily_limit) {
                RateCheck::WithinLimit { .. } => None,
                RateCheck::Exceeded { days, rate } => {
                    Some(RateFinding::Warning(FieldWarning::RateExceeded {
                        stat: rule.stat,
                        anchor,
                        until: date,
                        days,
                        rate,
                        daily_limit: rule.daily_limit,
                    }))
                }
                RateCheck::NoElapsedTime { .. } if value <= anchor.value() => None,
                RateCheck::NoElapsedTime { .. } => match self.policy {
                    ElapsedDayPolicy::Skip => None,
                    ElapsedDayPolicy::Warn => Some(RateFinding::Warning(
                        FieldWarning::NoElapsedTime { anchor, date },
                    )),
                    ElapsedDayPolicy::Reject => {
                        Some(RateFinding::Error(FieldError::NoElapsedTime { anchor, date }))
                    }
                },
            }
        })
    }
}

/// A stat's value in an earlier snapshot.
#[derive(Clone, Copy)]
struct PreviousValue<'a> {
    snapshot: &'a Snapshot,
    value: f64,
}

/// Finds the most recent earlier value of `stat`.
///
/// Only snapshots posted strictly before the candidate count. When two snapshots share
/// the latest timestamp the higher value wins.
fn previous_value<'a>(
    stat: Stat,
    candidate: &Snapshot,
    history: &'a [Snapshot],
) -> Option<PreviousValue<'a>> {
    history
        .iter()
        .filter(|snapshot| snapshot.uuid != candidate.uuid && snapshot.post_dt < candidate.post_dt)
        .filter_map(|snapshot| snapshot.get(stat).map(|value| PreviousValue { snapshot, value }))
        .max_by(|a, b| match a.snapshot.post_dt.cmp(&b.snapshot.post_dt) {
            Ordering::Equal => a.value.total_cmp(&b.value),
            ordering => ordering,
        })
}
