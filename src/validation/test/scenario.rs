use super::*;

/// Tests a brand-new trainer reporting an implausible XP jump overnight.
///
/// Trainer started 2020-01-01 with 0 XP recorded that day, then reports 50,000,000 XP
/// the next day against a ceiling of 10,000,000 per day.
///
/// Expected: one warning on total_xp and no hard error
#[test]
fn overnight_xp_jump_warns() {
    let test = TestBuilder::new()
        .with_start_date(date(2020, 1, 1))
        .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 0.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 1, 2))
        .with(Stat::TotalXp, 50_000_000.0);

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert!(report.is_valid());
    let warnings = report.warnings_for(Stat::TotalXp);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        FieldWarning::RateExceeded {
            anchor: RateAnchor::Reference { .. },
            days: 1,
            ..
        }
    ));
}

/// Tests a capture count lower than the day before.
///
/// Expected: hard error on badge_capture_total naming the previous value
#[test]
fn lower_capture_count_errors() {
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 5, 1), Stat::BadgeCaptureTotal, 500.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 5, 2))
        .with(Stat::BadgeCaptureTotal, 400.0);

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert!(!report.is_valid());
    assert_eq!(
        report.errors_for(Stat::BadgeCaptureTotal),
        &[FieldError::Decreased {
            value: 400.0,
            previous: 500.0,
            previous_dt: at(date(2020, 5, 1)),
        }]
    );
}

/// Tests an ordinary update with steady progress on several stats.
///
/// Expected: empty report
#[test]
fn steady_progress_is_clean() {
    let previous = fixture::snapshot::entity_builder()
        .on(date(2021, 3, 1))
        .stat(Stat::TotalXp, 20_000_000.0)
        .stat(Stat::BadgeTravelKm, 4_000.0)
        .stat(Stat::BadgeRaidBattleWon, 700.0)
        .stat(Stat::BadgeTypeFairy, 900.0)
        .build();
    let test = TestBuilder::new()
        .with_start_date(date(2017, 1, 1))
        .with_snapshot(previous)
        .build();
    let candidate = test
        .candidate_on(date(2021, 3, 8))
        .with(Stat::TotalXp, 20_900_000.0)
        .with(Stat::BadgeTravelKm, 4_050.5)
        .with(Stat::BadgeRaidBattleWon, 730.0)
        .with(Stat::BadgeTypeFairy, 950.0);

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert!(report.is_valid());
    assert!(!report.has_warnings());
}

/// Tests re-validating the same candidate twice.
///
/// Expected: identical reports
#[test]
fn revalidation_is_idempotent() {
    let test = TestBuilder::new()
        .with_start_date(date(2020, 1, 1))
        .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 0.0)
        .with_stat_on(date(2020, 1, 1), Stat::BadgeCaptureTotal, 500.0)
        .build();
    let candidate = test
        .candidate_on(date(2020, 1, 2))
        .with(Stat::TotalXp, 50_000_000.0)
        .with(Stat::BadgeCaptureTotal, 10.0);
    let validator = Validator::new();

    let first = validator.validate(&candidate, &test.trainer, &test.history);
    let second = validator.validate(&candidate, &test.trainer, &test.history);

    assert!(!first.is_valid());
    assert!(first.has_warnings());
    assert_eq!(first, second);
}

/// Tests re-validating a snapshot already stored in the history.
///
/// The stored copy shares the candidate's uuid and must not act as its own previous
/// value.
///
/// Expected: no decrease error from the stored copy, error from the real predecessor
#[test]
fn stored_copy_is_excluded() {
    let stored = fixture::snapshot::entity_builder()
        .on(date(2020, 2, 1))
        .stat(Stat::BadgeHatchedTotal, 90.0)
        .build();
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 1, 1), Stat::BadgeHatchedTotal, 100.0)
        .with_snapshot(stored.clone())
        .build();

    let report = Validator::new().validate(&stored, &test.trainer, &test.history);

    assert_eq!(
        report.errors_for(Stat::BadgeHatchedTotal),
        &[FieldError::Decreased {
            value: 90.0,
            previous: 100.0,
            previous_dt: at(date(2020, 1, 1)),
        }]
    );
}

/// Tests a candidate reporting nothing.
///
/// Expected: empty report
#[test]
fn empty_candidate_is_clean() {
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 1, 1), Stat::TotalXp, 1_000.0)
        .build();
    let candidate = test.candidate_on(date(2020, 1, 2));

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert!(report.is_valid());
    assert!(!report.has_warnings());
}

/// Tests that timestamps within a day still order snapshots.
///
/// Expected: morning snapshot is the previous value for an evening candidate
#[test]
fn same_day_history_counts_as_prior() {
    let morning = fixture::snapshot::entity_builder()
        .post_dt(at_hour(date(2020, 1, 1), 8))
        .stat(Stat::BadgePikachu, 40.0)
        .build();
    let test = TestBuilder::new().with_snapshot(morning).build();
    let candidate = test
        .candidate(at_hour(date(2020, 1, 1), 20))
        .with(Stat::BadgePikachu, 39.0);

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert_eq!(report.errors_for(Stat::BadgePikachu).len(), 1);
}
