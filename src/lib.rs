//! Proleptic Gregorian calendar dates.
//!
//! [`Date`] covers years `-32768..=32767` (year 0 is 1 BC) and converts to
//! and from a linear day count where day 1 is 0001-01-01. On top of that it
//! offers month/year arithmetic with explicit day-overflow handling, ISO week
//! numbering, Julian day numbers, and the ISO 8601 basic (`YYYYMMDD`),
//! extended (`YYYY-MM-DD`) and simple (`YYYY-Mon-DD`) string forms.
//!
//! [`parse_rfc5322_date_time`] reads the `date-time` of an internet message
//! header such as `Sat, 6 Jan 1990 12:14:19 -0800`.
//!
//! ```
//! use gregorian_date::{AllowDayOverflow, Date, UtcOffset, parse_rfc5322_date_time};
//!
//! let date = Date::new(1999, 5, 31).unwrap();
//! assert_eq!(date.add_months(1, AllowDayOverflow::No).unwrap().to_string(), "1999-06-30");
//! assert_eq!(date.add_months(1, AllowDayOverflow::Yes).unwrap().to_string(), "1999-07-01");
//!
//! let dt = parse_rfc5322_date_time("9 Jul 2002 13:11 +0000").unwrap();
//! assert_eq!(dt.date, Date::new(2002, 7, 9).unwrap());
//! assert_eq!(dt.offset, UtcOffset::Utc);
//! ```

mod arith;
mod cfws;
mod consts;
mod date;
mod duration;
mod error;
mod format;
mod prelude;
mod rfc5322;
mod types;
mod valid;
mod zone;

#[cfg(test)]
mod test_utils;

pub use cfws::strip_cfws;
pub use consts::*;
pub use date::Date;
pub use duration::Duration;
pub use error::{DateTimeError, Result};
pub use rfc5322::{Rfc5322DateTime, parse_rfc5322_date_time};
pub use types::{AllowDayOverflow, DayOfWeek, Month, days_in_month, days_in_year, is_leap_year};
pub use valid::{enforce_valid_day, enforce_valid_month, valid_day, valid_month};
pub use zone::UtcOffset;
