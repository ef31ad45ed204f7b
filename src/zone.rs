//! UTC offset attached to a parsed internet-message date-time.

use crate::duration::Duration;
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// Offset from UTC as written in an RFC 5322 `zone`.
///
/// RFC 5322 section 4.3 reads `-0000` (and unrecognized obsolete zone names)
/// as "the local offset is not known", which is kept apart from a known UTC
/// time even though both are a zero offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum UtcOffset {
    /// Known UTC: `+0000`, `UT` or `GMT`.
    #[display(fmt = "+00:00")]
    Utc,
    /// Zero offset with unknown local time: `-0000` or an unrecognized zone name.
    #[display(fmt = "-00:00")]
    Unknown,
    /// A non-zero offset in minutes east of UTC.
    #[display(fmt = "{}{:02}:{:02}", "sign_of(*minutes)", "minutes.unsigned_abs() / 60", "minutes.unsigned_abs() % 60")]
    Fixed { minutes: i16 },
}

const fn sign_of(minutes: i16) -> char {
    if minutes < 0 { '-' } else { '+' }
}

impl UtcOffset {
    /// Builds the offset for `minutes` east of UTC; zero is known UTC.
    pub const fn from_minutes(minutes: i16) -> Self {
        if minutes == 0 { Self::Utc } else { Self::Fixed { minutes } }
    }

    /// Offset in minutes east of UTC; 0 for `Utc` and `Unknown`.
    pub const fn total_minutes(&self) -> i16 {
        match self {
            Self::Utc | Self::Unknown => 0,
            Self::Fixed { minutes } => *minutes,
        }
    }

    /// Returns the offset as a `Duration`
    pub const fn to_duration(&self) -> Duration {
        Duration::minutes(self.total_minutes() as i64)
    }

    /// Whether the offset is a known UTC time (not `-0000`).
    pub const fn is_utc(&self) -> bool {
        matches!(self, Self::Utc)
    }
}
