use super::*;

fn same_day_progress() -> (test_utils::context::TestContext, entity::prelude::Snapshot) {
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 3, 1), Stat::BadgePokestopsVisited, 1_000.0)
        .build();
    let candidate = test
        .candidate(at_hour(date(2020, 3, 1), 18))
        .with(Stat::BadgePokestopsVisited, 1_400.0);

    (test, candidate)
}

/// Tests the default handling of a same-day resubmission with progress.
///
/// Expected: no errors or warnings and no division by zero
#[test]
fn skip_passes_same_day_progress() {
    let (test, candidate) = same_day_progress();

    let report = Validator::new().validate(&candidate, &test.trainer, &test.history);

    assert_eq!(Validator::new().policy(), ElapsedDayPolicy::Skip);
    assert!(report.is_valid());
    assert!(!report.has_warnings());
}

/// Tests the warn policy on a same-day resubmission with progress.
///
/// Expected: one NoElapsedTime warning anchored at the previous snapshot
#[test]
fn warn_flags_same_day_progress() {
    let (test, candidate) = same_day_progress();

    let report = Validator::with_policy(ElapsedDayPolicy::Warn).validate(
        &candidate,
        &test.trainer,
        &test.history,
    );

    assert!(report.is_valid());
    assert_eq!(
        report.warnings_for(Stat::BadgePokestopsVisited),
        &[FieldWarning::NoElapsedTime {
            anchor: RateAnchor::Previous {
                date: date(2020, 3, 1),
                value: 1_000.0,
            },
            date: date(2020, 3, 1),
        }]
    );
}

/// Tests the reject policy on a same-day resubmission with progress.
///
/// Expected: one NoElapsedTime hard error and no warning
#[test]
fn reject_blocks_same_day_progress() {
    let (test, candidate) = same_day_progress();

    let report = Validator::with_policy(ElapsedDayPolicy::Reject).validate(
        &candidate,
        &test.trainer,
        &test.history,
    );

    assert!(!report.has_warnings());
    assert!(matches!(
        report.errors_for(Stat::BadgePokestopsVisited),
        [FieldError::NoElapsedTime { .. }]
    ));
}

/// Tests that an unchanged same-day resubmission passes under every policy.
///
/// Expected: empty report for skip, warn and reject
#[test]
fn unchanged_resubmission_always_passes() {
    let test = TestBuilder::new()
        .with_stat_on(date(2020, 3, 1), Stat::BadgePokestopsVisited, 1_000.0)
        .build();
    let candidate = test
        .candidate(at_hour(date(2020, 3, 1), 18))
        .with(Stat::BadgePokestopsVisited, 1_000.0);

    for policy in ElapsedDayPolicy::ALL {
        let report =
            Validator::with_policy(policy).validate(&candidate, &test.trainer, &test.history);

        assert!(report.is_valid(), "{policy} rejected an unchanged value");
        assert!(!report.has_warnings(), "{policy} warned on an unchanged value");
    }
}

/// Tests a first submission dated on the start date.
///
/// The reference anchor has no elapsed days and a zero value, so any progress trips the
/// warn policy.
///
/// Expected: NoElapsedTime warning anchored at the reference date
#[test]
fn warn_applies_to_reference_anchor() {
    let test = TestBuilder::new().with_start_date(date(2020, 3, 1)).build();
    let candidate = test
        .candidate_on(date(2020, 3, 1))
        .with(Stat::TotalXp, 5_000.0);

    let report = Validator::with_policy(ElapsedDayPolicy::Warn).validate(
        &candidate,
        &test.trainer,
        &test.history,
    );

    assert!(matches!(
        report.warnings_for(Stat::TotalXp),
        [FieldWarning::NoElapsedTime {
            anchor: RateAnchor::Reference { .. },
            ..
        }]
    ));
}

/// Tests parsing policy names.
///
/// Expected: Some for known names in any case, None otherwise
#[test]
fn parses_policy_names() {
    assert_eq!(ElapsedDayPolicy::from_name("skip"), Some(ElapsedDayPolicy::Skip));
    assert_eq!(ElapsedDayPolicy::from_name("WARN"), Some(ElapsedDayPolicy::Warn));
    assert_eq!(ElapsedDayPolicy::from_name(" reject "), Some(ElapsedDayPolicy::Reject));
    assert_eq!(ElapsedDayPolicy::from_name("ignore"), None);
}
