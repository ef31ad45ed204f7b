use crate::consts::{
    CENTURY_CYCLE, DAY_NAMES, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_YEAR, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTH_NAMES,
};
use crate::error::DateTimeError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Month of the year, numbered 1 (January) through 12 (December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    #[display(fmt = "Jan")]
    Jan = 1,
    #[display(fmt = "Feb")]
    Feb,
    #[display(fmt = "Mar")]
    Mar,
    #[display(fmt = "Apr")]
    Apr,
    #[display(fmt = "May")]
    May,
    #[display(fmt = "Jun")]
    Jun,
    #[display(fmt = "Jul")]
    Jul,
    #[display(fmt = "Aug")]
    Aug,
    #[display(fmt = "Sep")]
    Sep,
    #[display(fmt = "Oct")]
    Oct,
    #[display(fmt = "Nov")]
    Nov,
    #[display(fmt = "Dec")]
    Dec,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Feb,
        Self::Mar,
        Self::Apr,
        Self::May,
        Self::Jun,
        Self::Jul,
        Self::Aug,
        Self::Sep,
        Self::Oct,
        Self::Nov,
        Self::Dec,
    ];

    /// Creates a Month from its number.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateTimeError> {
        if value == 0 || value > MAX_MONTH {
            return Err(DateTimeError::InvalidMonth { month: value });
        }
        Ok(Self::ALL[(value - 1) as usize])
    }

    /// Returns the month number (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// Three letter English abbreviation, e.g. `"Jan"`.
    pub const fn abbrev(self) -> &'static str {
        MONTH_NAMES[(self as u8 - 1) as usize]
    }

    /// Looks up a month by its three letter abbreviation. Matching is case-sensitive.
    pub fn from_abbrev(name: &str) -> Option<Self> {
        MONTH_NAMES
            .iter()
            .position(|&candidate| candidate == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl TryFrom<u8> for Month {
    type Error = DateTimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.get()
    }
}

/// Day of the week, numbered 0 (Sunday) through 6 (Saturday).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum DayOfWeek {
    #[display(fmt = "Sun")]
    Sun = 0,
    #[display(fmt = "Mon")]
    Mon,
    #[display(fmt = "Tue")]
    Tue,
    #[display(fmt = "Wed")]
    Wed,
    #[display(fmt = "Thu")]
    Thu,
    #[display(fmt = "Fri")]
    Fri,
    #[display(fmt = "Sat")]
    Sat,
}

impl DayOfWeek {
    /// All days starting with Sunday.
    pub const ALL: [Self; 7] = [Self::Sun, Self::Mon, Self::Tue, Self::Wed, Self::Thu, Self::Fri, Self::Sat];

    /// Returns the day for `value % 7`, Sunday being 0.
    pub const fn from_index(value: u8) -> Self {
        Self::ALL[(value % 7) as usize]
    }

    /// Returns the day number (Sunday = 0)
    #[inline]
    pub const fn get(self) -> u8 {
        self as u8
    }

    /// ISO 8601 weekday number: Monday = 1 through Sunday = 7.
    pub const fn iso_number(self) -> u8 {
        match self {
            Self::Sun => 7,
            other => other as u8,
        }
    }

    /// Three letter English abbreviation, e.g. `"Sun"`.
    pub const fn abbrev(self) -> &'static str {
        DAY_NAMES[self as usize]
    }

    /// Looks up a day by its three letter abbreviation. Matching is case-sensitive.
    pub fn from_abbrev(name: &str) -> Option<Self> {
        DAY_NAMES
            .iter()
            .position(|&candidate| candidate == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl TryFrom<u8> for DayOfWeek {
    type Error = DateTimeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > 6 {
            return Err(DateTimeError::OutOfRange(format!("day of week {value}")));
        }
        Ok(Self::from_index(value))
    }
}

impl From<DayOfWeek> for u8 {
    fn from(dow: DayOfWeek) -> Self {
        dow.get()
    }
}

/// What to do when month or year arithmetic lands on a day the target month does not have.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AllowDayOverflow {
    /// Excess days carry into the following month: Jan 31 + 1 month is Mar 3 (or Mar 2).
    #[default]
    Yes,
    /// The day is clamped to the last day of the month: Jan 31 + 1 month is Feb 28 (or 29).
    No,
}

// Helper functions

/// Proleptic Gregorian leap rule, applied to negative years as well (year 0 is leap).
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Returns 366 for leap years and 365 otherwise.
pub const fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) { DAYS_IN_LEAP_YEAR } else { DAYS_IN_YEAR }
}

/// Number of days in `month` of `year`, accounting for leap Februaries.
pub const fn days_in_month(year: i64, month: Month) -> u8 {
    if matches!(month, Month::Feb) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
