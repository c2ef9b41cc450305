//! Per-field findings produced by the validator.

use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, NaiveDate, Utc};
use entity::prelude::Stat;
use thiserror::Error;

/// Point a daily rate was measured from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateAnchor {
    /// The stat's reference date, where the value is taken as zero.
    Reference { date: NaiveDate },
    /// The trainer's previous snapshot holding the stat.
    Previous { date: NaiveDate, value: f64 },
}

impl RateAnchor {
    pub fn date(&self) -> NaiveDate {
        match self {
            RateAnchor::Reference { date } | RateAnchor::Previous { date, .. } => *date,
        }
    }

    /// Value at the anchor; zero for the reference date.
    pub fn value(&self) -> f64 {
        match self {
            RateAnchor::Reference { .. } => 0.0,
            RateAnchor::Previous { value, .. } => *value,
        }
    }
}

impl fmt::Display for RateAnchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.date())
    }
}

/// A hard error that blocks the submission.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// Value is lower than the trainer's previous value for the stat.
    #[error("This value has previously been entered at a higher value ({previous} on {previous_dt}). Please try again ensuring the value you entered was correct.")]
    Decreased {
        value: f64,
        /// Value of the previous snapshot
        previous: f64,
        /// When the previous snapshot was posted
        previous_dt: DateTime<Utc>,
    },

    /// Value is below the stat's minimum.
    #[error("Ensure this value is greater than or equal to {min}.")]
    BelowMinimum { value: f64, min: f64 },

    /// Value is above the stat's maximum.
    #[error("Ensure this value is less than or equal to {max}.")]
    AboveMaximum { value: f64, max: f64 },

    /// Submission is not after the anchor date while progress was reported.
    ///
    /// Only raised under `ElapsedDayPolicy::Reject`.
    #[error("No time has passed between {anchor} and {date}, so this progress cannot be verified. Please check the date of this update.")]
    NoElapsedTime { anchor: RateAnchor, date: NaiveDate },
}

/// A soft warning surfaced to the submitter that does not block the submission.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldWarning {
    /// Implied daily progress since the anchor is above the stat's ceiling.
    RateExceeded {
        stat: Stat,
        anchor: RateAnchor,
        /// Date of the submission
        until: NaiveDate,
        days: i64,
        rate: f64,
        daily_limit: f64,
    },

    /// Submission is not after the anchor date while progress was reported.
    ///
    /// Only raised under `ElapsedDayPolicy::Warn`.
    NoElapsedTime { anchor: RateAnchor, date: NaiveDate },
}

impl fmt::Display for FieldWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldWarning::RateExceeded {
                stat,
                anchor,
                until,
                rate,
                daily_limit,
                ..
            } => write!(
                f,
                "The {} you entered is high. Please check for typos and other mistakes. {}/{} per day from {} to {}",
                stat.title(),
                format_amount(*rate),
                format_amount(*daily_limit),
                anchor.date(),
                until
            ),
            FieldWarning::NoElapsedTime { anchor, date } => write!(
                f,
                "No time has passed between {} and {}, so this progress cannot be checked. Please check the date of this update.",
                anchor.date(),
                date
            ),
        }
    }
}

/// Formats a number with thousands separators and at most two decimals.
pub fn format_amount(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let text = if rounded.fract() == 0.0 {
        format!("{rounded:.0}")
    } else {
        format!("{rounded:.2}")
    };

    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (whole, fraction) = match digits.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (digits, None),
    };

    let mut grouped = String::with_capacity(text.len() + whole.len() / 3);
    grouped.push_str(sign);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

/// Hard errors and soft warnings keyed by stat.
///
/// Stats without findings have no entry in either map.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    pub errors: BTreeMap<Stat, Vec<FieldError>>,
    pub warnings: BTreeMap<Stat, Vec<FieldWarning>>,
}

impl ValidationReport {
    pub fn push_error(&mut self, stat: Stat, error: FieldError) {
        self.errors.entry(stat).or_default().push(error);
    }

    pub fn push_warning(&mut self, stat: Stat, warning: FieldWarning) {
        self.warnings.entry(stat).or_default().push(warning);
    }

    /// Whether the snapshot may be persisted.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn errors_for(&self, stat: Stat) -> &[FieldError] {
        self.errors.get(&stat).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn warnings_for(&self, stat: Stat) -> &[FieldWarning] {
        self.warnings.get(&stat).map(Vec::as_slice).unwrap_or_default()
    }

    /// Total number of hard errors across all stats.
    pub fn error_count(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Total number of warnings across all stats.
    pub fn warning_count(&self) -> usize {
        self.warnings.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use test_utils::fixture::date;

    use super::*;

    /// Tests number formatting used in warning messages.
    ///
    /// Expected: grouped thousands, trailing zeros dropped for whole numbers
    #[test]
    fn formats_amounts() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(999.0), "999");
        assert_eq!(format_amount(1_000.0), "1,000");
        assert_eq!(format_amount(50_000_000.0), "50,000,000");
        assert_eq!(format_amount(1_234.5), "1,234.50");
        assert_eq!(format_amount(-12_345.678), "-12,345.68");
    }

    /// Tests the rate warning message.
    ///
    /// Expected: medal title, rate, ceiling and both dates in the message
    #[test]
    fn renders_rate_warning() {
        let warning = FieldWarning::RateExceeded {
            stat: Stat::TotalXp,
            anchor: RateAnchor::Previous {
                date: date(2020, 1, 1),
                value: 0.0,
            },
            until: date(2020, 1, 2),
            days: 1,
            rate: 50_000_000.0,
            daily_limit: 10_000_000.0,
        };

        assert_eq!(
            warning.to_string(),
            "The Total XP you entered is high. Please check for typos and other mistakes. \
             50,000,000/10,000,000 per day from 2020-01-01 to 2020-01-02"
        );
    }

    /// Tests report counters across several stats.
    ///
    /// Expected: counts sum over stats, lookups for clean stats are empty
    #[test]
    fn counts_findings() {
        let mut report = ValidationReport::default();
        assert!(report.is_valid());

        report.push_error(Stat::TotalXp, FieldError::BelowMinimum { value: 50.0, min: 100.0 });
        report.push_error(
            Stat::BadgeUnown,
            FieldError::AboveMaximum {
                value: 29.0,
                max: 28.0,
            },
        );
        report.push_warning(
            Stat::TotalXp,
            FieldWarning::NoElapsedTime {
                anchor: RateAnchor::Reference {
                    date: date(2020, 1, 1),
                },
                date: date(2020, 1, 1),
            },
        );

        assert!(!report.is_valid());
        assert!(report.has_warnings());
        assert_eq!(report.error_count(), 2);
        assert_eq!(report.warning_count(), 1);
        assert!(report.errors_for(Stat::BadgeTravelKm).is_empty());
    }
}
