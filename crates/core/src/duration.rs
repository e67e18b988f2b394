//! Deadline amount normalization.
//!
//! Months and years have no fixed length, so they are approximated as
//! 4 and 52 weeks. Existing policies depend on exactly these factors.

use crate::ast::TimeUnit;
use crate::error::BuildError;
use time::Duration;

const DAYS_PER_WEEK: i64 = 7;
const SECONDS_PER_DAY: i64 = 86_400;

pub const WEEKS_PER_MONTH: i64 = 4;
pub const WEEKS_PER_YEAR: i64 = 52;

/// Result of [`normalize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub duration: Duration,
    /// Set when the unit was not recognized and the amount was read as days.
    pub unsupported_unit: Option<String>,
}

/// Convert `amount` of `unit` to a canonical duration.
pub fn normalize(amount: i64, unit: &TimeUnit) -> Result<Normalized, BuildError> {
    if amount < 0 {
        return Err(BuildError::InvalidAmount(amount));
    }
    let (days_per_unit, unsupported_unit) = match unit {
        TimeUnit::Days => (1, None),
        TimeUnit::Weeks => (DAYS_PER_WEEK, None),
        TimeUnit::Months => (DAYS_PER_WEEK * WEEKS_PER_MONTH, None),
        TimeUnit::Years => (DAYS_PER_WEEK * WEEKS_PER_YEAR, None),
        TimeUnit::Other(u) => (1, Some(u.clone())),
    };
    // amounts too large for a Duration are as unusable as negative ones
    let duration = amount
        .checked_mul(days_per_unit * SECONDS_PER_DAY)
        .map(Duration::seconds)
        .ok_or(BuildError::InvalidAmount(amount))?;
    Ok(Normalized {
        duration,
        unsupported_unit,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn days(amount: i64, unit: &str) -> i64 {
        normalize(amount, &TimeUnit::from(unit))
            .unwrap()
            .duration
            .whole_days()
    }

    #[test]
    fn known_units_scale_to_days() {
        for amount in [0, 1, 2, 3, 10, 365] {
            assert_eq!(days(amount, "days"), amount);
            assert_eq!(days(amount, "weeks"), 7 * amount);
            assert_eq!(days(amount, "months"), 28 * amount);
            assert_eq!(days(amount, "years"), 364 * amount);
        }
    }

    #[test]
    fn two_weeks_is_fourteen_days() {
        assert_eq!(days(2, "weeks"), 14);
    }

    #[test]
    fn three_months_is_eighty_four_days() {
        assert_eq!(days(3, "months"), 84);
    }

    #[test]
    fn unknown_unit_falls_back_to_days_with_warning() {
        let n = normalize(5, &TimeUnit::from("fortnights")).unwrap();
        assert_eq!(n.duration, Duration::days(5));
        assert_eq!(n.unsupported_unit.as_deref(), Some("fortnights"));

        let known = normalize(5, &TimeUnit::Days).unwrap();
        assert_eq!(known.unsupported_unit, None);
    }

    #[test]
    fn overflowing_amount_is_rejected() {
        assert_eq!(
            normalize(i64::MAX, &TimeUnit::Years),
            Err(BuildError::InvalidAmount(i64::MAX))
        );
    }

    #[test]
    fn negative_amount_is_rejected_for_every_unit() {
        for unit in ["days", "weeks", "months", "years", "fortnights"] {
            assert_eq!(
                normalize(-1, &TimeUnit::from(unit)),
                Err(BuildError::InvalidAmount(-1))
            );
        }
    }
}
