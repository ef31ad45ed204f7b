//! The `Date` value type and its conversion to and from the linear day count.
//!
//! Day 1 of the count is 1 January of year 1 and day 0 is 31 December of
//! year 0 (1 B.C.). Years before that continue into negative day numbers, so
//! the count is one unbroken integer line across the A.D./B.C. boundary.

use crate::consts::{
    DAYS_IN_4_YEARS, DAYS_IN_100_YEARS, DAYS_IN_400_YEARS, DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, JULIAN_DAY_OFFSET,
    LAST_DAY_LEAP, LAST_DAY_NON_LEAP, MIN_DAY, MOD_JULIAN_DAY_OFFSET,
};
use crate::error::{DateTimeError, Result};
use crate::types::{DayOfWeek, Month, days_in_month, days_in_year, is_leap_year};
use crate::valid::{enforce_valid_day, valid_day};

/// Any day number outside this bound lies well past `Date::MIN`/`Date::MAX`.
/// The exact check happens on the computed year.
const DAY_NUMBER_LIMIT: i64 = 12_000_000;

/// A date in the proleptic Gregorian calendar.
///
/// Year 0 is 1 B.C., year -1 is 2 B.C. and so on (ISO 8601 numbering).
/// A `Date` always holds a valid day for its month and year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year:  i16,
    month: Month,
    day:   u8,
}

impl Date {
    /// Earliest representable date, -32768-01-01.
    pub const MIN: Self = Self {
        year:  i16::MIN,
        month: Month::Jan,
        day:   MIN_DAY,
    };

    /// Latest representable date, 32767-12-31.
    pub const MAX: Self = Self {
        year:  i16::MAX,
        month: Month::Dec,
        day:   31,
    };

    /// Creates a date from its year, month (1..=12) and day of month.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` or `DateTimeError::InvalidDay`
    /// if the triple does not name a calendar day.
    pub fn new(year: i16, month: u8, day: u8) -> Result<Self> {
        let month = enforce_valid_day(year, month, day)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from a linear day number.
    ///
    /// # Panics
    /// Panics if `day` lies outside `Date::MIN..=Date::MAX`.
    pub fn from_day_of_gregorian_cal(day: i64) -> Self {
        match Self::try_from_day_of_gregorian_cal(day) {
            Ok(date) => date,
            Err(err) => panic!("{err}"),
        }
    }

    /// Creates a date from a linear day number.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` if the day falls outside the representable years.
    pub fn try_from_day_of_gregorian_cal(day: i64) -> Result<Self> {
        if !(-DAY_NUMBER_LIMIT..=DAY_NUMBER_LIMIT).contains(&day) {
            return Err(DateTimeError::OutOfRange(format!("day {day} of the Gregorian calendar")));
        }
        let (year, day_of_year) = year_and_day_of_year(day);
        Self::from_year_and_day_of_year(year, day_of_year)
    }

    /// Builds a date from parts produced by calendar arithmetic.
    ///
    /// # Panics
    /// Panics if the parts do not form a valid date; that means the arithmetic is wrong.
    pub(crate) fn from_parts(year: i16, month: Month, day: u8) -> Self {
        assert!(
            valid_day(year, month.get(), day),
            "date arithmetic produced an invalid date {year}-{:02}-{day:02}",
            month.get()
        );
        Self { year, month, day }
    }

    fn from_year_and_day_of_year(year: i64, day_of_year: i64) -> Result<Self> {
        let year = i16::try_from(year).map_err(|_| DateTimeError::OutOfRange(format!("year {year}")))?;
        let mut date = Self {
            year,
            month: Month::Jan,
            day: MIN_DAY,
        };
        let day_of_year = u16::try_from(day_of_year).map_err(|_| DateTimeError::InvalidDayOfYear {
            year,
            day_of_year: 0,
        })?;
        date.set_day_of_year(day_of_year)?;
        Ok(date)
    }

    /// Returns the year; 0 is 1 B.C.
    #[inline]
    pub const fn year(&self) -> i16 {
        self.year
    }

    /// Returns the month
    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of the month (1..=31)
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Replaces the year, keeping month and day.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidDay` if the current month and day do not
    /// exist in `year` (29 February of a common year). The date is unchanged on error.
    pub fn set_year(&mut self, year: i16) -> Result<()> {
        enforce_valid_day(year, self.month.get(), self.day)?;
        self.year = year;
        Ok(())
    }

    /// # Errors
    /// Returns `DateTimeError::InvalidDay` if the current day does not exist in `month`.
    pub fn set_month(&mut self, month: Month) -> Result<()> {
        enforce_valid_day(self.year, month.get(), self.day)?;
        self.month = month;
        Ok(())
    }

    /// # Errors
    /// Returns `DateTimeError::InvalidDay` if `day` does not exist in the current month.
    pub fn set_day(&mut self, day: u8) -> Result<()> {
        enforce_valid_day(self.year, self.month.get(), day)?;
        self.day = day;
        Ok(())
    }

    /// Year counted B.C. (year 0 is 1 B.C.).
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` for A.D. dates.
    pub fn year_bc(&self) -> Result<u16> {
        if self.is_ad() {
            return Err(DateTimeError::OutOfRange(format!("year {} is A.D.", self.year)));
        }
        u16::try_from(1 - i32::from(self.year)).map_err(|_| DateTimeError::OutOfRange(format!("year {}", self.year)))
    }

    /// Sets the year from a B.C. year number.
    ///
    /// # Errors
    /// Returns `DateTimeError::OutOfRange` for 0 or a year before `Date::MIN`,
    /// and `DateTimeError::InvalidDay` if the current day does not exist in that year.
    pub fn set_year_bc(&mut self, year: u16) -> Result<()> {
        if year == 0 {
            return Err(DateTimeError::OutOfRange("B.C. year 0".to_owned()));
        }
        let year = i16::try_from(1 - i32::from(year)).map_err(|_| DateTimeError::OutOfRange(format!("B.C. year {year}")))?;
        self.set_year(year)
    }

    /// Whether the year is 1 or later.
    pub const fn is_ad(&self) -> bool {
        self.year > 0
    }

    /// Whether this date's year is a leap year.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year as i64)
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year as i64, self.month)
    }

    /// Last day of the month this date is in.
    pub const fn end_of_month(&self) -> Self {
        Self {
            year:  self.year,
            month: self.month,
            day:   self.days_in_month(),
        }
    }

    /// Day of the year, 1 for 1 January.
    pub const fn day_of_year(&self) -> u16 {
        let table = if self.is_leap_year() { &LAST_DAY_LEAP } else { &LAST_DAY_NON_LEAP };
        table[(self.month.get() - 1) as usize] + self.day as u16
    }

    /// Moves to the given day of the current year.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidDayOfYear` if the year has fewer days.
    #[allow(clippy::cast_possible_truncation)]
    pub fn set_day_of_year(&mut self, day_of_year: u16) -> Result<()> {
        let table = if self.is_leap_year() { &LAST_DAY_LEAP } else { &LAST_DAY_NON_LEAP };
        if day_of_year == 0 || day_of_year > table[12] {
            return Err(DateTimeError::InvalidDayOfYear {
                year: self.year,
                day_of_year,
            });
        }
        // first month whose last day is on or after day_of_year
        let Some(idx) = table[1..].iter().position(|&last| day_of_year <= last) else {
            unreachable!("day of year {day_of_year} is within 1..={}", table[12]);
        };
        let day = day_of_year - table[idx];
        assert!(day <= 31, "day of year {day_of_year} resolved to day {day} of month {}", idx + 1);
        *self = Self::from_parts(self.year, Month::ALL[idx], day as u8);
        Ok(())
    }

    /// Linear day number of this date; 1 January of year 1 is day 1.
    pub fn day_of_gregorian_cal(&self) -> i64 {
        let day_of_year = i64::from(self.day_of_year());
        let year = i64::from(self.year);

        if year > 0 {
            let mut years = year - 1;
            let mut days = (years / 400) * DAYS_IN_400_YEARS;
            years %= 400;
            days += (years / 100) * DAYS_IN_100_YEARS;
            years %= 100;
            days += (years / 4) * DAYS_IN_4_YEARS;
            years %= 4;
            days + years * DAYS_IN_YEAR + day_of_year
        } else if year == 0 {
            day_of_year - DAYS_IN_LEAP_YEAR
        } else {
            // count back from the end of year 0; remainders are <= 0
            let mut years = year;
            let mut days = (years / 400) * DAYS_IN_400_YEARS;
            years %= 400;
            days += (years / 100) * DAYS_IN_100_YEARS;
            years %= 100;
            days += (years / 4) * DAYS_IN_4_YEARS;
            years %= 4;

            if years < 0 {
                days -= DAYS_IN_LEAP_YEAR;
                years += 1;
                days += years * DAYS_IN_YEAR;
                days - (DAYS_IN_YEAR - day_of_year)
            } else {
                days - (DAYS_IN_LEAP_YEAR - day_of_year)
            }
        }
    }

    /// Replaces this date with the one at the given linear day number.
    ///
    /// # Panics
    /// Panics if `day` lies outside `Date::MIN..=Date::MAX`.
    pub fn set_day_of_gregorian_cal(&mut self, day: i64) {
        *self = Self::from_day_of_gregorian_cal(day);
    }

    /// Returns the day of the week
    pub fn day_of_week(&self) -> DayOfWeek {
        day_of_week_of(self.day_of_gregorian_cal())
    }

    /// ISO 8601 week of the year (1..=53).
    pub fn iso_week(&self) -> u8 {
        self.iso_week_and_year().1
    }

    /// The year the ISO 8601 week of this date belongs to. It differs from
    /// `year()` for days at the very start or end of a year.
    pub fn iso_week_year(&self) -> i32 {
        self.iso_week_and_year().0
    }

    #[allow(clippy::cast_possible_truncation)]
    fn iso_week_and_year(&self) -> (i32, u8) {
        let (year, week) = iso_week_of(
            i64::from(self.year),
            i64::from(self.day_of_year()),
            self.day_of_gregorian_cal(),
        );
        (year as i32, week)
    }

    /// Julian day number at noon of this date.
    pub fn julian_day(&self) -> i64 {
        self.day_of_gregorian_cal() + JULIAN_DAY_OFFSET
    }

    /// Modified Julian day; day 0 is 17 November 1858.
    pub fn mod_julian_day(&self) -> i64 {
        self.julian_day() - MOD_JULIAN_DAY_OFFSET
    }

    /// Days from this date forward to the next `day_of_week` (0 if it is today).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn days_to_day_of_week(&self, day_of_week: DayOfWeek) -> u8 {
        let diff = i16::from(day_of_week.get()) - i16::from(self.day_of_week().get());
        diff.rem_euclid(7) as u8
    }

    /// Months from this date's month forward to `month` (0 if it is this month).
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn months_to_month(&self, month: Month) -> u8 {
        let diff = i16::from(month.get()) - i16::from(self.month.get());
        diff.rem_euclid(12) as u8
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn day_of_week_of(day: i64) -> DayOfWeek {
    // day 1 was a Monday, so day 0 is a Sunday
    DayOfWeek::from_index(day.rem_euclid(7) as u8)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn iso_week_of(year: i64, day_of_year: i64, day: i64) -> (i64, u8) {
    let weekday = i64::from(day_of_week_of(day).iso_number());
    let week = (day_of_year - weekday + 10) / 7;

    if week == 0 {
        // belongs to the last week of the previous year
        let prev = year - 1;
        return iso_week_of(prev, days_in_year(prev), day - day_of_year);
    }
    if week == 53 {
        let next_jan_1 = day - day_of_year + days_in_year(year) + 1;
        if matches!(
            day_of_week_of(next_jan_1),
            DayOfWeek::Mon | DayOfWeek::Tue | DayOfWeek::Wed | DayOfWeek::Thu
        ) {
            return (year + 1, 1);
        }
    }
    (year, week as u8)
}

/// Splits a linear day number into `(year, day_of_year)`.
///
/// The last day of a 4-year or 400-year cycle divides evenly into one more
/// block than the cycle contains, so a quotient of 4 is pulled back to 3.
fn year_and_day_of_year(day: i64) -> (i64, i64) {
    if day > 0 {
        let mut day = day;
        let mut years = (day / DAYS_IN_400_YEARS) * 400 + 1;
        day %= DAYS_IN_400_YEARS;

        let centuries = day / DAYS_IN_100_YEARS;
        if centuries == 4 {
            years += 300;
            day -= DAYS_IN_100_YEARS * 3;
        } else {
            years += centuries * 100;
            day %= DAYS_IN_100_YEARS;
        }

        years += (day / DAYS_IN_4_YEARS) * 4;
        day %= DAYS_IN_4_YEARS;

        let rest = day / DAYS_IN_YEAR;
        if rest == 4 {
            years += 3;
            day -= DAYS_IN_YEAR * 3;
        } else {
            years += rest;
            day %= DAYS_IN_YEAR;
        }

        if day == 0 {
            (years - 1, days_in_year(years - 1))
        } else {
            (years, day)
        }
    } else if -day < DAYS_IN_LEAP_YEAR {
        (0, DAYS_IN_LEAP_YEAR + day)
    } else {
        // shift so that 0 is 31 December of year -1, then peel blocks downward
        let mut day = day + DAYS_IN_LEAP_YEAR - 1;
        let mut years = (day / DAYS_IN_400_YEARS) * 400 - 1;
        day %= DAYS_IN_400_YEARS;

        let centuries = day / DAYS_IN_100_YEARS;
        if centuries == -4 {
            years -= 300;
            day += DAYS_IN_100_YEARS * 3;
        } else {
            years += centuries * 100;
            day %= DAYS_IN_100_YEARS;
        }

        years += (day / DAYS_IN_4_YEARS) * 4;
        day %= DAYS_IN_4_YEARS;

        let rest = day / DAYS_IN_YEAR;
        if rest == -4 {
            years -= 3;
            day += DAYS_IN_YEAR * 3;
        } else {
            years += rest;
            day %= DAYS_IN_YEAR;
        }

        if day == 0 {
            (years + 1, 1)
        } else {
            (years, days_in_year(years) + day + 1)
        }
    }
}
