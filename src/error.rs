//! Error type shared by every fallible date operation.

/// Error returned when a date or date-time is invalid or cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateTimeError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {month} (must be 1-12)")]
    InvalidMonth { month: u8 },

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i16, month: u8, day: u8 },

    /// Day of year larger than the length of the year.
    #[error("Invalid day of year {day_of_year} for year {year}")]
    InvalidDayOfYear { year: i16, day_of_year: u16 },

    /// Time of day with an hour, minute, or second out of range.
    #[error("Invalid time of day: {hour:02}:{minute:02}:{second:02}")]
    InvalidTimeOfDay { hour: u8, minute: u8, second: u8 },

    /// Input that does not follow the expected layout.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Input ran out before the grammar was complete.
    #[error("date-time value too short")]
    TooShort,

    /// Result does not fit the representable year range.
    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

pub type Result<T> = std::result::Result<T, DateTimeError>;
