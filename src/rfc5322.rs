//! RFC 5322 section 3.3 `date-time` parsing, including the obsolete forms of
//! section 4.3 (two and three digit years, alphabetic zones).

use crate::cfws::strip_cfws;
use crate::date::Date;
use crate::error::{DateTimeError, Result};
use crate::types::{DayOfWeek, Month};
use crate::zone::UtcOffset;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A date, a time of day and the zone it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rfc5322DateTime {
    pub date:   Date,
    pub hour:   u8,
    pub minute: u8,
    pub second: u8,
    pub offset: UtcOffset,
}

// Shortest text that can still follow at each step, e.g. "7Dec1200:00A".
const REST_AFTER_DAY_NAME: usize = 13;
const REST_AT_DAY: usize = 12;
const REST_AT_MONTH: usize = 11;
const REST_AT_YEAR: usize = 8;
const REST_AT_HOUR: usize = 6;
const REST_AT_COLON: usize = 4;
const REST_AT_MINUTE: usize = 3;
const REST_AT_ZONE: usize = 1;

fn invalid(what: impl Into<String>) -> DateTimeError {
    DateTimeError::InvalidFormat(what.into())
}

fn strip_and_check_len(value: &[u8], min_len: usize) -> Result<&[u8]> {
    let value = strip_cfws(value);
    if value.len() < min_len {
        return Err(DateTimeError::TooShort);
    }
    Ok(value)
}

fn parse_number(digits: &[u8]) -> Option<u32> {
    if digits.is_empty() || digits.len() > 9 || !digits.iter().all(u8::is_ascii_digit) {
        return None;
    }
    Some(digits.iter().fold(0, |acc, b| acc * 10 + u32::from(b - b'0')))
}

fn parse_two_digits(digits: &[u8], what: &str) -> Result<u8> {
    parse_number(&digits[..2])
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| invalid(format!("Invalid {what}")))
}

/// Expands obsolete short years: `49` is 2049, `50` is 1950, `101` is 2001.
fn resolve_year(digits: &[u8]) -> Result<i16> {
    if digits.len() < 2 {
        return Err(invalid("Year has too few digits"));
    }
    let raw = parse_number(digits).ok_or_else(|| invalid("Invalid year"))?;
    let year = match digits.len() {
        2 if raw < 50 => raw + 2000,
        2 | 3 => raw + 1900,
        _ if raw < 1900 => return Err(invalid("Four digit years < 1900 are not allowed")),
        _ => raw,
    };
    i16::try_from(year).map_err(|_| DateTimeError::OutOfRange(format!("year {year}")))
}

fn obsolete_zone(name: &[u8]) -> Result<UtcOffset> {
    let hours: i16 = match name {
        b"UT" | b"GMT" => return Ok(UtcOffset::Utc),
        b"EDT" => -4,
        b"EST" | b"CDT" => -5,
        b"CST" | b"MDT" => -6,
        b"MST" | b"PDT" => -7,
        b"PST" => -8,
        b"J" | b"j" => return Err(invalid("Military time zone J is not allowed")),
        [] => return Err(invalid("Invalid timezone")),
        _ => return Ok(UtcOffset::Unknown),
    };
    Ok(UtcOffset::from_minutes(hours * 60))
}

/// Parses `[day-name ","] day month year hour ":" minute [":" second] zone`.
///
/// Comments and folding whitespace may appear between any two tokens. Text
/// after the zone is ignored unless it starts with a printable character
/// other than a space or `(`.
///
/// # Errors
///
/// [`DateTimeError::TooShort`] when the input ends before the grammar does,
/// [`DateTimeError::InvalidFormat`] for malformed tokens,
/// [`DateTimeError::InvalidTimeOfDay`] for an out of range time, and the
/// [`Date::new`] errors for a date that does not exist.
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse_rfc5322_date_time<T: AsRef<[u8]>>(value: T) -> Result<Rfc5322DateTime> {
    let mut value = strip_and_check_len(value.as_ref(), REST_AT_DAY)?;

    if !value[0].is_ascii_digit() {
        let name = std::str::from_utf8(&value[..3]).unwrap_or_default();
        if DayOfWeek::from_abbrev(name).is_none() {
            return Err(invalid(format!("Invalid day-of-week: {}", String::from_utf8_lossy(&value[..3]))));
        }
        value = strip_and_check_len(&value[3..], REST_AFTER_DAY_NAME)?;
        if value[0] != b',' {
            return Err(invalid("Missing comma after day-of-week"));
        }
        value = strip_and_check_len(&value[1..], REST_AT_DAY)?;
    }

    let day_len = if value[1].is_ascii_digit() { 2 } else { 1 };
    let day = parse_number(&value[..day_len])
        .and_then(|n| u8::try_from(n).ok())
        .ok_or_else(|| invalid("Invalid day"))?;
    value = strip_and_check_len(&value[day_len..], REST_AT_MONTH)?;

    let month = std::str::from_utf8(&value[..3])
        .ok()
        .and_then(Month::from_abbrev)
        .ok_or_else(|| invalid(format!("Invalid month: {}", String::from_utf8_lossy(&value[..3]))))?;
    value = strip_and_check_len(&value[3..], REST_AT_YEAR)?;

    let digit_run = value[2..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .ok_or_else(|| invalid("Invalid year"))?;
    let mut year_len = digit_run + 2;
    if value[year_len] == b':' {
        year_len = year_len.saturating_sub(2);
    }
    let year = resolve_year(&value[..year_len])?;
    value = strip_and_check_len(&value[year_len..], REST_AT_HOUR)?;

    let hour = parse_two_digits(value, "hour")?;
    value = strip_and_check_len(&value[2..], REST_AT_COLON)?;
    if value[0] != b':' {
        return Err(invalid("Missing colon after hour"));
    }
    value = strip_and_check_len(&value[1..], REST_AT_MINUTE)?;
    let minute = parse_two_digits(value, "minute")?;
    value = strip_cfws(&value[2..]);

    let mut second = 0;
    if value.first() == Some(&b':') {
        value = strip_and_check_len(&value[1..], REST_AT_MINUTE)?;
        second = parse_two_digits(value, "second")?;
        // A leap second is folded into the preceding one.
        if second == 60 {
            second = 59;
        }
        value = strip_and_check_len(&value[2..], REST_AT_ZONE)?;
    } else if value.is_empty() {
        return Err(DateTimeError::TooShort);
    }

    if hour > 23 || minute > 59 || second > 59 {
        return Err(DateTimeError::InvalidTimeOfDay { hour, minute, second });
    }

    let offset = if matches!(value[0], b'+' | b'-') {
        if value.len() < 5 {
            return Err(invalid("Invalid timezone"));
        }
        let hours = parse_two_digits(&value[1..], "timezone")?;
        let minutes = parse_two_digits(&value[3..], "timezone")?;
        if minutes > 59 {
            return Err(invalid("Invalid timezone"));
        }
        let total = i16::from(hours) * 60 + i16::from(minutes);
        let offset = match (value[0], total) {
            (b'-', 0) => UtcOffset::Unknown,
            (b'-', _) => UtcOffset::Fixed { minutes: -total },
            _ => UtcOffset::from_minutes(total),
        };
        value = &value[5..];
        offset
    } else {
        let name_len = value.iter().position(|b| !b.is_ascii_alphabetic()).unwrap_or(value.len());
        let offset = obsolete_zone(&value[..name_len])?;
        value = &value[name_len..];
        offset
    };

    if value.first().is_some_and(|&next| (0x21..=0x7E).contains(&next) && next != b'(') {
        return Err(invalid("Invalid character after timezone"));
    }

    let date = Date::new(year, month.get(), day)?;
    trace!(%date, hour, minute, second, %offset, "parsed date-time");

    Ok(Rfc5322DateTime { date, hour, minute, second, offset })
}
