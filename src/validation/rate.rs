use chrono::NaiveDate;

/// Result of comparing progress since an anchor against a daily ceiling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RateCheck {
    /// Progress per day is at or below the ceiling.
    WithinLimit { days: i64, rate: f64 },
    /// Progress per day is above the ceiling.
    Exceeded { days: i64, rate: f64 },
    /// The submission is not after the anchor date, so no rate can be computed.
    NoElapsedTime { days: i64 },
}

/// Computes the implied daily rate between an anchor and a new value.
///
/// Elapsed time is counted in whole calendar days. When no days have passed the rate is
/// undefined and the caller decides what that means.
///
/// # Arguments
/// - `anchor_date` - Date progress is measured from
/// - `anchor_value` - Value at the anchor date
/// - `date` - Date of the new value
/// - `value` - The new value
/// - `daily_limit` - Highest plausible gain per day
///
/// # Returns
/// - `RateCheck::NoElapsedTime` - `date` is on or before `anchor_date`
/// - `RateCheck::Exceeded` - Gain per day is strictly above `daily_limit`
/// - `RateCheck::WithinLimit` - Otherwise
pub fn daily_rate_check(
    anchor_date: NaiveDate,
    anchor_value: f64,
    date: NaiveDate,
    value: f64,
    daily_limit: f64,
) -> RateCheck {
    let days = (date - anchor_date).num_days();
    if days <= 0 {
        return RateCheck::NoElapsedTime { days };
    }

    let rate = (value - anchor_value) / days as f64;
    if rate > daily_limit {
        RateCheck::Exceeded { days, rate }
    } else {
        RateCheck::WithinLimit { days, rate }
    }
}
