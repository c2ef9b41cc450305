use super::*;

/// Tests a plausible update.
///
/// Expected: Accepted with an empty report and levels derived from total XP
#[test]
fn accepts_plausible_update() {
    let config = Config::default();
    let test = TestBuilder::new()
        .with_start_date(date(2016, 7, 13))
        .with_stat_on(date(2021, 1, 1), Stat::TotalXp, 29_000_000.0)
        .build();
    let candidate = test
        .candidate_on(date(2021, 1, 15))
        .with(Stat::TotalXp, 30_000_000.0);

    let submission = SubmissionService::new(&config)
        .submit(document(test, candidate, false))
        .unwrap();

    assert_eq!(submission.outcome, SubmissionOutcome::Accepted);
    let dto = submission.into_dto();
    assert!(dto.errors.is_empty());
    assert!(dto.warnings.is_empty());
    assert_eq!(dto.possible_levels, vec![40, 41]);
    assert_eq!(dto.trainer, fixture::trainer::DEFAULT_USERNAME);
}

/// Tests warnings the submitter has not confirmed.
///
/// Expected: NeedsConfirmation with the rendered warning in the report
#[test]
fn unconfirmed_warning_needs_confirmation() {
    let config = Config::default();
    let test = TestBuilder::new()
        .with_start_date(date(2020, 1, 1))
        .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 0.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 1, 2))
        .with(Stat::TotalXp, 50_000_000.0);

    let submission = SubmissionService::new(&config)
        .submit(document(test, candidate, false))
        .unwrap();

    assert_eq!(submission.outcome, SubmissionOutcome::NeedsConfirmation);
    assert_eq!(submission.outcome.exit_code(), 3);
    let dto = submission.into_dto();
    assert!(dto.warnings[&Stat::TotalXp][0].starts_with("The Total XP you entered is high."));
}

/// Tests warnings the submitter confirmed.
///
/// Expected: Accepted, warnings still reported
#[test]
fn confirmed_warning_is_accepted() {
    let config = Config::default();
    let test = TestBuilder::new()
        .with_start_date(date(2020, 1, 1))
        .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 0.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 1, 2))
        .with(Stat::TotalXp, 50_000_000.0);

    let submission = SubmissionService::new(&config)
        .submit(document(test, candidate, true))
        .unwrap();

    assert_eq!(submission.outcome, SubmissionOutcome::Accepted);
    assert_eq!(submission.report.warning_count(), 1);
}

/// Tests a hard error even when the submitter confirmed.
///
/// Expected: Rejected with exit code 1
#[test]
fn hard_error_rejects() {
    let config = Config::default();
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 5, 1), Stat::BadgeCaptureTotal, 500.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 5, 2))
        .with(Stat::BadgeCaptureTotal, 400.0);

    let submission = SubmissionService::new(&config)
        .submit(document(test, candidate, true))
        .unwrap();

    assert_eq!(submission.outcome, SubmissionOutcome::Rejected);
    assert_eq!(submission.outcome.exit_code(), 1);
    assert_eq!(submission.into_dto().errors[&Stat::BadgeCaptureTotal].len(), 1);
}

/// Tests that the configured elapsed-day policy reaches the validator.
///
/// Expected: Rejected under the reject policy, Accepted under the default
#[test]
fn applies_configured_policy() {
    let build = || {
        let test = TestBuilder::new()
            .with_stat_on(date(2020, 3, 1), Stat::BadgePokestopsVisited, 1_000.0)
            .build();
        let candidate = test
            .candidate(fixture::at_hour(date(2020, 3, 1), 18))
            .with(Stat::BadgePokestopsVisited, 1_400.0);
        document(test, candidate, false)
    };

    let strict = Config {
        elapsed_day_policy: ElapsedDayPolicy::Reject,
        ..Config::default()
    };
    let rejected = SubmissionService::new(&strict).submit(build()).unwrap();
    assert_eq!(rejected.outcome, SubmissionOutcome::Rejected);

    let lenient = Config::default();
    let accepted = SubmissionService::new(&lenient).submit(build()).unwrap();
    assert_eq!(accepted.outcome, SubmissionOutcome::Accepted);
}

/// Tests that boundary failures stop before validation.
///
/// Expected: Err(SubmissionErr(TrainerMismatch)) with exit code 65
#[test]
fn boundary_failure_is_an_error() {
    let config = Config::default();
    let test = TestBuilder::new().build();
    let candidate = fixture::snapshot::entity_builder().trainer_id(2).build();

    let result = SubmissionService::new(&config).submit(document(test, candidate, false));

    let err = result.unwrap_err();
    assert_eq!(err.exit_code(), 65);
    assert!(matches!(
        err,
        AppError::SubmissionErr(SubmissionError::TrainerMismatch { .. })
    ));
}

/// Tests that bans do not block a submission.
///
/// Expected: Accepted for a permanently banned trainer
#[test]
fn banned_trainer_is_not_blocked() {
    let config = Config::default();
    let trainer = fixture::trainer::entity_builder().perma_banned(true).build();
    let test = TestBuilder::new().with_trainer(trainer).build();
    let candidate = test.candidate_on(date(2020, 1, 1)).with(Stat::TotalXp, 1_000.0);

    let submission = SubmissionService::new(&config)
        .submit(document(test, candidate, false))
        .unwrap();

    assert_eq!(submission.outcome, SubmissionOutcome::Accepted);
    assert_eq!(submission.into_dto().possible_levels, vec![2]);
}
