use entity::prelude::Stat;

use crate::validation::report::FieldError;

/// Checks a value against the stat's catalogue bounds.
///
/// # Returns
/// - `Some(FieldError::BelowMinimum)` - Value is under the stat's minimum
/// - `Some(FieldError::AboveMaximum)` - Value is over the stat's maximum
/// - `None` - Value is within bounds or the stat is unbounded
pub fn check_bounds(stat: Stat, value: f64) -> Option<FieldError> {
    let info = stat.info();

    if let Some(min) = info.min.filter(|min| value < *min) {
        return Some(FieldError::BelowMinimum { value, min });
    }

    info.max
        .filter(|max| value > *max)
        .map(|max| FieldError::AboveMaximum { value, max })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests values on and past the Kanto bounds.
    ///
    /// Expected: None at 1 and 151, errors at 0 and 152
    #[test]
    fn kanto_entries_bounds() {
        assert_eq!(check_bounds(Stat::BadgePokedexEntries, 1.0), None);
        assert_eq!(check_bounds(Stat::BadgePokedexEntries, 151.0), None);
        assert_eq!(
            check_bounds(Stat::BadgePokedexEntries, 0.0),
            Some(FieldError::BelowMinimum { value: 0.0, min: 1.0 })
        );
        assert_eq!(
            check_bounds(Stat::BadgePokedexEntries, 152.0),
            Some(FieldError::AboveMaximum {
                value: 152.0,
                max: 151.0
            })
        );
    }

    /// Tests an unbounded stat with a large value.
    ///
    /// Expected: None
    #[test]
    fn unbounded_stat_passes() {
        assert_eq!(check_bounds(Stat::BadgeTypeWater, 1e9), None);
    }
}
