//! Predicates and enforcement for calendar fields.

use crate::consts::{MAX_MONTH, MIN_DAY};
use crate::error::{DateTimeError, Result};
use crate::types::{Month, days_in_month};

/// Whether `month` names a calendar month.
pub const fn valid_month(month: u8) -> bool {
    month != 0 && month <= MAX_MONTH
}

/// Whether `day` exists in `month` of `year`. An invalid month is never valid.
pub fn valid_day(year: i16, month: u8, day: u8) -> bool {
    Month::new(month).is_ok_and(|m| day >= MIN_DAY && day <= days_in_month(i64::from(year), m))
}

/// # Errors
/// Returns `DateTimeError::InvalidMonth` if `month` is not in `1..=12`.
pub fn enforce_valid_month(month: u8) -> Result<Month> {
    Month::new(month)
}

/// # Errors
/// Returns `DateTimeError::InvalidMonth` for a bad month and
/// `DateTimeError::InvalidDay` for a day that does not exist in that month.
pub fn enforce_valid_day(year: i16, month: u8, day: u8) -> Result<Month> {
    let month_typed = enforce_valid_month(month)?;
    if !valid_day(year, month, day) {
        return Err(DateTimeError::InvalidDay { year, month, day });
    }
    Ok(month_typed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_month() {
        assert!(!valid_month(0));
        for m in 1..=12 {
            assert!(valid_month(m), "Month {m} should be valid");
        }
        assert!(!valid_month(13));
    }

    #[test]
    fn test_valid_day_cases() {
        struct TestCase {
            year:        i16,
            month:       u8,
            day:         u8,
            valid:       bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2000,
                month:       2,
                day:         29,
                valid:       true,
                description: "400-year leap day",
            },
            TestCase {
                year:        1900,
                month:       2,
                day:         29,
                valid:       false,
                description: "century without leap day",
            },
            TestCase {
                year:        2100,
                month:       2,
                day:         29,
                valid:       false,
                description: "century without leap day",
            },
            TestCase {
                year:        0,
                month:       2,
                day:         29,
                valid:       true,
                description: "year 0 is leap",
            },
            TestCase {
                year:        -1,
                month:       2,
                day:         29,
                valid:       false,
                description: "2 B.C. is common",
            },
            TestCase {
                year:        -4,
                month:       2,
                day:         29,
                valid:       true,
                description: "5 B.C. is leap",
            },
            TestCase {
                year:        2024,
                month:       4,
                day:         31,
                valid:       false,
                description: "April has 30 days",
            },
            TestCase {
                year:        2024,
                month:       1,
                day:         0,
                valid:       false,
                description: "day zero",
            },
            TestCase {
                year:        2024,
                month:       13,
                day:         1,
                valid:       false,
                description: "month 13",
            },
        ];

        for case in &cases {
            assert_eq!(
                valid_day(case.year, case.month, case.day),
                case.valid,
                "{}-{}-{} ({})",
                case.year,
                case.month,
                case.day,
                case.description
            );
        }
    }

    #[test]
    fn test_enforce_carries_fields() {
        assert_eq!(enforce_valid_day(2024, 2, 29), Ok(Month::Feb));
        assert_eq!(
            enforce_valid_day(2023, 2, 29),
            Err(DateTimeError::InvalidDay {
                year:  2023,
                month: 2,
                day:   29,
            })
        );
        assert_eq!(
            enforce_valid_day(2023, 0, 1),
            Err(DateTimeError::InvalidMonth { month: 0 })
        );
    }
}
