//! ISO 8601 basic/extended and `YYYY-Mon-DD` string forms of [`Date`].
//!
//! Years 0..=9999 are written with four digits. Anything else carries a sign
//! and at least four digits (`+10000`, `-0001`), and a year field wider than
//! four characters must carry that sign when parsed.

use crate::consts::DATE_SEPARATOR;
use crate::date::Date;
use crate::error::{DateTimeError, Result};
use crate::types::Month;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Year field: four digits for 0..=9999, otherwise signed and at least four digits.
struct YearField(i16);

impl fmt::Display for YearField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let year = self.0;
        if (0..10_000).contains(&year) {
            write!(f, "{year:04}")
        } else if year >= 10_000 {
            write!(f, "+{year:05}")
        } else if year > -10_000 {
            write!(f, "{year:05}")
        } else {
            write!(f, "{year:06}")
        }
    }
}

fn invalid_format(original: &str) -> DateTimeError {
    DateTimeError::InvalidFormat(original.to_owned())
}

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Trims and checks the input is ASCII and long enough for `form`.
fn prepare<'a>(original: &'a str, min_len: usize, form: &str) -> Result<&'a str> {
    trace!(input = original, form, "parsing date");
    let trimmed = original.trim();
    if trimmed.len() < min_len || !trimmed.is_ascii() {
        return Err(invalid_format(original));
    }
    Ok(trimmed)
}

fn parse_year(field: &str, original: &str) -> Result<i16> {
    let digits = if field.len() > 4 {
        field.strip_prefix(['+', '-']).ok_or_else(|| invalid_format(original))?
    } else {
        field
    };
    if !all_digits(digits) {
        return Err(invalid_format(original));
    }
    field.parse::<i16>().map_err(|_| invalid_format(original))
}

fn parse_two_digits(field: &str, original: &str) -> Result<u8> {
    if field.len() != 2 || !all_digits(field) {
        return Err(invalid_format(original));
    }
    field.parse::<u8>().map_err(|_| invalid_format(original))
}

impl Date {
    /// `YYYYMMDD`, e.g. `20100704`, `-00040105`, `+100001020`.
    pub fn to_iso_string(&self) -> String {
        format!("{}{:02}{:02}", YearField(self.year()), self.month().get(), self.day())
    }

    /// `YYYY-MM-DD`, e.g. `2010-07-04`. Same as `Display`.
    pub fn to_iso_ext_string(&self) -> String {
        self.to_string()
    }

    /// `YYYY-Mon-DD`, e.g. `2010-Jul-04`.
    pub fn to_simple_string(&self) -> String {
        format!(
            "{}{DATE_SEPARATOR}{}{DATE_SEPARATOR}{:02}",
            YearField(self.year()),
            self.month().abbrev(),
            self.day()
        )
    }

    /// Parses the `YYYYMMDD` form. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidFormat` if the layout is wrong, or a
    /// validation error if the fields do not name a calendar day.
    pub fn from_iso_string(s: &str) -> Result<Self> {
        let trimmed = prepare(s, 8, "iso")?;
        let len = trimmed.len();
        let day = parse_two_digits(&trimmed[len - 2..], s)?;
        let month = parse_two_digits(&trimmed[len - 4..len - 2], s)?;
        let year = parse_year(&trimmed[..len - 4], s)?;
        Self::new(year, month, day)
    }

    /// Parses the `YYYY-MM-DD` form. Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidFormat` if the layout is wrong, or a
    /// validation error if the fields do not name a calendar day.
    pub fn from_iso_ext_string(s: &str) -> Result<Self> {
        let trimmed = prepare(s, 10, "iso-ext")?;
        let len = trimmed.len();
        let bytes = trimmed.as_bytes();
        if char::from(bytes[len - 3]) != DATE_SEPARATOR || char::from(bytes[len - 6]) != DATE_SEPARATOR {
            return Err(invalid_format(s));
        }
        let day = parse_two_digits(&trimmed[len - 2..], s)?;
        let month = parse_two_digits(&trimmed[len - 5..len - 3], s)?;
        let year = parse_year(&trimmed[..len - 6], s)?;
        Self::new(year, month, day)
    }

    /// Parses the `YYYY-Mon-DD` form. The month name is case-sensitive.
    ///
    /// # Errors
    /// Returns `DateTimeError::InvalidFormat` if the layout or month name is
    /// wrong, or a validation error if the fields do not name a calendar day.
    pub fn from_simple_string(s: &str) -> Result<Self> {
        let trimmed = prepare(s, 11, "simple")?;
        let len = trimmed.len();
        let bytes = trimmed.as_bytes();
        if char::from(bytes[len - 3]) != DATE_SEPARATOR || char::from(bytes[len - 7]) != DATE_SEPARATOR {
            return Err(invalid_format(s));
        }
        let day = parse_two_digits(&trimmed[len - 2..], s)?;
        let month = Month::from_abbrev(&trimmed[len - 6..len - 3]).ok_or_else(|| invalid_format(s))?;
        let year = parse_year(&trimmed[..len - 7], s)?;
        Self::new(year, month.get(), day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            YearField(self.year()),
            self.month().get(),
            self.day()
        )
    }
}

impl FromStr for Date {
    type Err = DateTimeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_iso_ext_string(s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_ext_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
