//! Calendar arithmetic on [`Date`].
//!
//! "Add" carries into the next larger unit (13 months is a year and a month),
//! "roll" stays inside it (rolling 13 months moves one month and keeps the year).

use crate::date::Date;
use crate::duration::Duration;
use crate::error::{DateTimeError, Result};
use crate::types::{AllowDayOverflow, Month, days_in_month, is_leap_year};
use std::ops::{Add, AddAssign, Sub, SubAssign};

fn to_year(year: i64) -> Result<i16> {
    i16::try_from(year).map_err(|_| DateTimeError::OutOfRange(format!("year {year}")))
}

/// Resolves a day that may be past the end of `month`.
fn resolve_overflow(year: i16, month: Month, day: u8, overflow: AllowDayOverflow) -> Date {
    let max_day = days_in_month(i64::from(year), month);
    if day <= max_day {
        return Date::from_parts(year, month, day);
    }
    match overflow {
        // December has 31 days, so month + 1 never wraps the year
        AllowDayOverflow::Yes => Date::from_parts(year, Month::ALL[usize::from(month.get())], day - max_day),
        AllowDayOverflow::No => Date::from_parts(year, month, max_day),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn month_at(index: i64) -> Month {
    Month::ALL[index.rem_euclid(12) as usize]
}

impl Date {
    /// Adds whole years. 29 February landing on a common year becomes
    /// 1 March (`AllowDayOverflow::Yes`) or 28 February (`AllowDayOverflow::No`).
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the year leaves the `i16` range.
    pub fn add_years(self, years: i64, overflow: AllowDayOverflow) -> Result<Self> {
        let year = i64::from(self.year())
            .checked_add(years)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("{} + {years} years", self.year())))?;
        let year = to_year(year)?;

        if self.month() == Month::Feb && self.day() == 29 && !is_leap_year(i64::from(year)) {
            return Ok(match overflow {
                AllowDayOverflow::Yes => Self::from_parts(year, Month::Mar, 1),
                AllowDayOverflow::No => Self::from_parts(year, Month::Feb, 28),
            });
        }
        Ok(Self::from_parts(year, self.month(), self.day()))
    }

    /// Years have no larger containing unit, so rolling is adding.
    ///
    /// # Errors
    /// Same as [`Date::add_years`].
    pub fn roll_years(self, years: i64, overflow: AllowDayOverflow) -> Result<Self> {
        self.add_years(years, overflow)
    }

    /// Adds months, carrying into the year.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the year leaves the `i16` range.
    pub fn add_months(self, months: i64, overflow: AllowDayOverflow) -> Result<Self> {
        let total = i64::from(self.month().get() - 1)
            .checked_add(months)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("{self} + {months} months")))?;
        let year = to_year(i64::from(self.year()) + total.div_euclid(12))?;
        Ok(resolve_overflow(year, month_at(total), self.day(), overflow))
    }

    /// Moves the month within the current year; the year never changes.
    pub fn roll_months(self, months: i64, overflow: AllowDayOverflow) -> Self {
        let index = i64::from(self.month().get() - 1) + months.rem_euclid(12);
        resolve_overflow(self.year(), month_at(index), self.day(), overflow)
    }

    /// Adds days on the linear day count.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the result is outside `Date::MIN..=Date::MAX`.
    pub fn add_days(self, days: i64) -> Result<Self> {
        let day = self
            .day_of_gregorian_cal()
            .checked_add(days)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("{self} + {days} days")))?;
        Self::try_from_day_of_gregorian_cal(day)
    }

    /// Moves the day within the current month, wrapping at either end.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn roll_days(self, days: i64) -> Self {
        let limit = i64::from(self.days_in_month());
        let day = (i64::from(self.day()) - 1 + days.rem_euclid(limit)).rem_euclid(limit) + 1;
        Self::from_parts(self.year(), self.month(), day as u8)
    }

    /// Difference in calendar months, ignoring the day of month:
    /// 1 February minus 31 January is 1.
    pub fn diff_months(&self, other: &Self) -> i32 {
        (i32::from(self.year()) - i32::from(other.year())) * 12 + i32::from(self.month().get())
            - i32::from(other.month().get())
    }

    /// Signed number of days from `other` to `self`. Defined for every pair of dates.
    pub fn days_since(&self, other: &Self) -> i64 {
        self.day_of_gregorian_cal() - other.day_of_gregorian_cal()
    }

    /// `self - rhs` as a `Duration`.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the dates are more than
    /// 10,675,199 days (about 29,000 years) apart.
    pub fn checked_sub_date(self, rhs: Self) -> Result<Duration> {
        let days = self.days_since(&rhs);
        Duration::checked_days(days)
            .ok_or_else(|| DateTimeError::OutOfRange(format!("{self} - {rhs} = {days} days as a duration")))
    }

    /// Adds the whole days of `duration` (truncated toward zero).
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the result is not representable.
    pub fn checked_add(self, duration: Duration) -> Result<Self> {
        self.add_days(duration.total_days())
    }

    /// Subtracts the whole days of `duration` (truncated toward zero).
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the result is not representable.
    pub fn checked_sub(self, duration: Duration) -> Result<Self> {
        self.add_days(-duration.total_days())
    }
}

impl Add<Duration> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result is outside `Date::MIN..=Date::MAX`.
    fn add(self, rhs: Duration) -> Self {
        match self.checked_add(rhs) {
            Ok(date) => date,
            Err(err) => panic!("{err}"),
        }
    }
}

impl Sub<Duration> for Date {
    type Output = Self;

    /// # Panics
    /// Panics if the result is outside `Date::MIN..=Date::MAX`.
    fn sub(self, rhs: Duration) -> Self {
        match self.checked_sub(rhs) {
            Ok(date) => date,
            Err(err) => panic!("{err}"),
        }
    }
}

impl AddAssign<Duration> for Date {
    fn add_assign(&mut self, rhs: Duration) {
        *self = *self + rhs;
    }
}

impl SubAssign<Duration> for Date {
    fn sub_assign(&mut self, rhs: Duration) {
        *self = *self - rhs;
    }
}

impl Sub for Date {
    type Output = Duration;

    /// # Panics
    /// Panics if the dates are more than 10,675,199 days apart, which a
    /// `Duration` cannot hold. See [`Date::checked_sub_date`].
    fn sub(self, rhs: Self) -> Duration {
        match self.checked_sub_date(rhs) {
            Ok(duration) => duration,
            Err(err) => panic!("{err}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::date;

    #[test]
    fn test_add_months_cases() {
        struct TestCase {
            start:    Date,
            months:   i64,
            overflow: AllowDayOverflow,
            expected: Date,
        }

        let cases = [
            TestCase {
                start:    date(1999, 7, 6),
                months:   3,
                overflow: AllowDayOverflow::Yes,
                expected: date(1999, 10, 6),
            },
            TestCase {
                start:    date(1999, 7, 6),
                months:   -4,
                overflow: AllowDayOverflow::Yes,
                expected: date(1999, 3, 6),
            },
            TestCase {
                start:    date(1999, 5, 31),
                months:   1,
                overflow: AllowDayOverflow::Yes,
                expected: date(1999, 7, 1),
            },
            TestCase {
                start:    date(1999, 5, 31),
                months:   1,
                overflow: AllowDayOverflow::No,
                expected: date(1999, 6, 30),
            },
            TestCase {
                start:    date(1999, 1, 31),
                months:   1,
                overflow: AllowDayOverflow::Yes,
                expected: date(1999, 3, 3),
            },
            TestCase {
                start:    date(2000, 1, 31),
                months:   1,
                overflow: AllowDayOverflow::Yes,
                expected: date(2000, 3, 2),
            },
            TestCase {
                start:    date(2000, 1, 31),
                months:   1,
                overflow: AllowDayOverflow::No,
                expected: date(2000, 2, 29),
            },
            TestCase {
                start:    date(1999, 12, 15),
                months:   1,
                overflow: AllowDayOverflow::Yes,
                expected: date(2000, 1, 15),
            },
            TestCase {
                start:    date(1999, 12, 15),
                months:   -12,
                overflow: AllowDayOverflow::Yes,
                expected: date(1998, 12, 15),
            },
            TestCase {
                start:    date(1999, 7, 6),
                months:   12,
                overflow: AllowDayOverflow::Yes,
                expected: date(2000, 7, 6),
            },
            TestCase {
                start:    date(0, 1, 15),
                months:   -1,
                overflow: AllowDayOverflow::Yes,
                expected: date(-1, 12, 15),
            },
            TestCase {
                start:    date(-1, 3, 31),
                months:   -14,
                overflow: AllowDayOverflow::No,
                expected: date(-2, 1, 31),
            },
        ];

        for case in &cases {
            assert_eq!(
                case.start.add_months(case.months, case.overflow).unwrap(),
                case.expected,
                "{:?} + {} months ({:?})",
                case.start,
                case.months,
                case.overflow
            );
        }
    }

    #[test]
    fn test_add_years() {
        let leap = date(2000, 2, 29);
        assert_eq!(leap.add_years(1, AllowDayOverflow::Yes).unwrap(), date(2001, 3, 1));
        assert_eq!(leap.add_years(1, AllowDayOverflow::No).unwrap(), date(2001, 2, 28));
        assert_eq!(leap.add_years(4, AllowDayOverflow::No).unwrap(), date(2004, 2, 29));
        assert_eq!(leap.add_years(-2000, AllowDayOverflow::Yes).unwrap(), date(0, 2, 29));
        assert_eq!(leap.add_years(-2001, AllowDayOverflow::Yes).unwrap(), date(-1, 3, 1));
        assert_eq!(date(1999, 7, 6).roll_years(-1, AllowDayOverflow::Yes).unwrap(), date(1998, 7, 6));
        assert!(matches!(
            date(32767, 1, 1).add_years(1, AllowDayOverflow::Yes),
            Err(DateTimeError::OutOfRange(_))
        ));
        assert!(date(1, 1, 1).add_years(i64::MAX, AllowDayOverflow::Yes).is_err());
    }

    #[test]
    fn test_add_months_out_of_range() {
        assert!(date(32767, 12, 1).add_months(1, AllowDayOverflow::Yes).is_err());
        assert!(date(-32768, 1, 1).add_months(-1, AllowDayOverflow::Yes).is_err());
        assert!(date(2000, 1, 1).add_months(i64::MAX, AllowDayOverflow::Yes).is_err());
    }

    #[test]
    fn test_roll_months() {
        let d = date(1999, 7, 6);
        assert_eq!(d.roll_months(6, AllowDayOverflow::Yes), date(1999, 1, 6));
        assert_eq!(d.roll_months(-7, AllowDayOverflow::Yes), date(1999, 12, 6));
        assert_eq!(d.roll_months(12, AllowDayOverflow::Yes), d);
        assert_eq!(d.roll_months(-36, AllowDayOverflow::Yes), d);
        assert_eq!(d.roll_months(i64::MIN, AllowDayOverflow::Yes).year(), 1999);

        let end = date(1999, 12, 31);
        assert_eq!(end.roll_months(2, AllowDayOverflow::Yes), date(1999, 3, 3));
        assert_eq!(end.roll_months(2, AllowDayOverflow::No), date(1999, 2, 28));
        assert_eq!(end.roll_months(-10, AllowDayOverflow::No), date(1999, 2, 28));
        assert_eq!(end.roll_months(1, AllowDayOverflow::Yes), date(1999, 1, 31));
    }

    #[test]
    fn test_roll_days() {
        assert_eq!(date(1999, 2, 28).roll_days(1), date(1999, 2, 1));
        assert_eq!(date(1999, 2, 1).roll_days(-1), date(1999, 2, 28));
        assert_eq!(date(2000, 2, 28).roll_days(1), date(2000, 2, 29));
        assert_eq!(date(1999, 1, 1).roll_days(365), date(1999, 1, 25));
        assert_eq!(date(1999, 1, 1).roll_days(-365), date(1999, 1, 8));
        assert_eq!(date(1999, 7, 6).roll_days(31), date(1999, 7, 6));
        assert_eq!(date(1999, 7, 6).roll_days(i64::MAX).month(), Month::Jul);
    }

    #[test]
    fn test_add_days() {
        assert_eq!(date(1999, 12, 31).add_days(1).unwrap(), date(2000, 1, 1));
        assert_eq!(date(1, 1, 1).add_days(-1).unwrap(), date(0, 12, 31));
        assert_eq!(date(0, 1, 1).add_days(-1).unwrap(), date(-1, 12, 31));
        assert!(Date::MAX.add_days(1).is_err());
        assert!(Date::MIN.add_days(-1).is_err());
        assert!(Date::MAX.add_days(i64::MAX).is_err());
    }

    #[test]
    fn test_duration_operators() {
        let d = date(1999, 7, 6);
        assert_eq!(d + Duration::days(365), date(2000, 7, 5));
        assert_eq!(d + Duration::hours(47), date(1999, 7, 7));
        assert_eq!(d - Duration::hours(47), date(1999, 7, 5));
        assert_eq!(d + Duration::hours(-47), date(1999, 7, 5));
        assert_eq!(d - Duration::days(-1), date(1999, 7, 7));
        assert_eq!(d + Duration::hnsecs(-1), d);

        let mut m = d;
        m += Duration::weeks(1);
        assert_eq!(m, date(1999, 7, 13));
        m -= Duration::days(13);
        assert_eq!(m, date(1999, 6, 30));

        assert_eq!(date(2000, 1, 1) - date(1999, 12, 31), Duration::days(1));
        assert_eq!(date(1999, 12, 31) - date(2000, 1, 1), Duration::days(-1));
        assert_eq!(date(1, 1, 1) - date(0, 12, 31), Duration::days(1));

        assert!(Date::MAX.checked_add(Duration::days(1)).is_err());
        assert!(Date::MIN.checked_sub(Duration::days(1)).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_add_duration_panics_past_max() {
        let _ = Date::MAX + Duration::days(1);
    }

    #[test]
    fn test_date_difference_across_full_range() {
        assert_eq!(Date::MAX.days_since(&Date::MIN), 23_936_531);
        assert_eq!(Date::MIN.days_since(&Date::MAX), -23_936_531);
        assert_eq!(date(30000, 1, 1).days_since(&date(-1, 1, 1)), 10_957_640);
        assert!(date(30000, 1, 1).checked_sub_date(date(-1, 1, 1)).is_err());
        assert!(matches!(Date::MAX.checked_sub_date(Date::MIN), Err(DateTimeError::OutOfRange(_))));
        assert!(Date::MIN.checked_sub_date(Date::MAX).is_err());

        let later = Date::from_day_of_gregorian_cal(5_000_000);
        let widest = Date::from_day_of_gregorian_cal(5_000_000 - 10_675_199);
        assert_eq!((later - widest).total_days(), 10_675_199);
        assert_eq!((widest - later).total_days(), -10_675_199);
        assert!(later.checked_sub_date(widest.add_days(-1).unwrap()).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_sub_date_panics_when_too_far_apart() {
        let _ = Date::MAX - Date::MIN;
    }

    #[test]
    fn test_diff_months() {
        assert_eq!(date(1999, 2, 1).diff_months(&date(1999, 1, 31)), 1);
        assert_eq!(date(1999, 1, 31).diff_months(&date(1999, 2, 1)), -1);
        assert_eq!(date(2000, 1, 1).diff_months(&date(1999, 12, 31)), 1);
        assert_eq!(date(1999, 1, 1).diff_months(&date(2000, 12, 31)), -23);
        assert_eq!(date(1999, 7, 31).diff_months(&date(1999, 7, 1)), 0);
        assert_eq!(date(0, 1, 1).diff_months(&date(-1, 12, 1)), 1);
    }
}
