use chrono::Utc;
use entity::{level::possible_levels, prelude::Stat};

use crate::{
    config::Config,
    error::AppError,
    model::{
        report::{SubmissionOutcome, SubmissionReportDto},
        submission::{SubmissionDto, SubmissionParams},
    },
    validation::{report::ValidationReport, Validator},
};

/// A validated submission and the decision taken on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub params: SubmissionParams,
    pub report: ValidationReport,
    pub outcome: SubmissionOutcome,
}

impl Submission {
    /// Converts the submission into the report written to stdout.
    ///
    /// Findings are rendered to their messages. Possible levels are derived from the
    /// candidate's total XP when it reported one.
    pub fn into_dto(self) -> SubmissionReportDto {
        let levels: Vec<u8> = self
            .params
            .candidate
            .get(Stat::TotalXp)
            .map(|xp| possible_levels(xp as u64).iter().map(|level| level.level).collect())
            .unwrap_or_default();

        SubmissionReportDto {
            outcome: self.outcome,
            trainer: self.params.trainer.username,
            snapshot: self.params.candidate.uuid,
            data_source: self.params.candidate.data_source,
            errors: self
                .report
                .errors
                .iter()
                .map(|(stat, errors)| (*stat, render(errors)))
                .collect(),
            warnings: self
                .report
                .warnings
                .iter()
                .map(|(stat, warnings)| (*stat, render(warnings)))
                .collect(),
            possible_levels: levels,
        }
    }
}

fn render<T: ToString>(findings: &[T]) -> Vec<String> {
    findings.iter().map(ToString::to_string).collect()
}

pub struct SubmissionService<'a> {
    config: &'a Config,
}

impl<'a> SubmissionService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Checks a submission document, validates its candidate and decides the outcome.
    ///
    /// Boundary failures abort before validation. Business-rule findings never fail the
    /// call; they are carried in the returned report and decide the outcome. A banned
    /// trainer is logged but not blocked.
    ///
    /// # Arguments
    /// - `dto` - Parsed submission document
    ///
    /// # Returns
    /// - `Ok(Submission)` - Checked parameters, validation report and outcome
    /// - `Err(AppError::SubmissionErr)` - Document failed boundary checks
    pub fn submit(&self, dto: SubmissionDto) -> Result<Submission, AppError> {
        let params = SubmissionParams::from_dto(dto)?;
        let trainer = &params.trainer;
        let candidate = &params.candidate;

        if trainer.is_banned(Utc::now().date_naive()) {
            tracing::info!(
                trainer = %trainer.username,
                perma_banned = trainer.perma_banned,
                last_cheated = ?trainer.last_cheated,
                "Submission from banned trainer"
            );
        }

        let validator = Validator::with_policy(self.config.elapsed_day_policy);
        let report = validator.validate(candidate, trainer, &params.history);

        for (stat, warnings) in &report.warnings {
            for warning in warnings {
                tracing::debug!(trainer = %trainer.username, %stat, "{}", warning);
            }
        }

        let outcome = SubmissionOutcome::decide(
            !report.is_valid(),
            report.has_warnings(),
            params.double_check_confirmation,
        );

        tracing::info!(
            trainer = %trainer.username,
            snapshot = %candidate.uuid,
            data_source = ?candidate.data_source,
            outcome = ?outcome,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Validated submission"
        );

        Ok(Submission {
            params,
            report,
            outcome,
        })
    }
}
