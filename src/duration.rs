//! Signed span of time measured in 100-nanosecond ticks.

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

const HNSECS_PER_USEC: i64 = 10;
const HNSECS_PER_MSEC: i64 = HNSECS_PER_USEC * 1_000;
const HNSECS_PER_SECOND: i64 = HNSECS_PER_MSEC * 1_000;
const HNSECS_PER_MINUTE: i64 = HNSECS_PER_SECOND * 60;
const HNSECS_PER_HOUR: i64 = HNSECS_PER_MINUTE * 60;
const HNSECS_PER_DAY: i64 = HNSECS_PER_HOUR * 24;
const HNSECS_PER_WEEK: i64 = HNSECS_PER_DAY * 7;

/// A signed duration with 100ns resolution.
///
/// Conversions to coarser units truncate toward zero, so
/// `Duration::hours(-25).total_days()` is `-1`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Add, Sub, Neg, Serialize, Deserialize,
)]
#[display(fmt = "{} hnsecs", "_0")]
#[serde(transparent)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Self(0);

    const fn scaled(n: i64, ticks_per_unit: i64) -> Option<Self> {
        match n.checked_mul(ticks_per_unit) {
            Some(ticks) => Some(Self(ticks)),
            None => None,
        }
    }

    const fn scaled_or_panic(n: i64, ticks_per_unit: i64) -> Self {
        match Self::scaled(n, ticks_per_unit) {
            Some(duration) => duration,
            None => panic!("duration overflows the i64 range of 100ns ticks"),
        }
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks (about 29,000 years).
    pub const fn weeks(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_WEEK)
    }

    /// # Panics
    /// Panics beyond 10,675,199 days in either direction.
    pub const fn days(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_DAY)
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks.
    pub const fn hours(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_HOUR)
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks.
    pub const fn minutes(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_MINUTE)
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks.
    pub const fn seconds(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_SECOND)
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks.
    pub const fn msecs(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_MSEC)
    }

    /// # Panics
    /// Panics if the result does not fit in `i64` ticks.
    pub const fn usecs(n: i64) -> Self {
        Self::scaled_or_panic(n, HNSECS_PER_USEC)
    }

    /// Duration of exactly `n` 100ns ticks.
    pub const fn hnsecs(n: i64) -> Self {
        Self(n)
    }

    pub const fn checked_weeks(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_WEEK)
    }

    /// `None` beyond 10,675,199 days in either direction.
    pub const fn checked_days(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_DAY)
    }

    pub const fn checked_hours(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_HOUR)
    }

    pub const fn checked_minutes(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_MINUTE)
    }

    pub const fn checked_seconds(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_SECOND)
    }

    pub const fn checked_msecs(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_MSEC)
    }

    pub const fn checked_usecs(n: i64) -> Option<Self> {
        Self::scaled(n, HNSECS_PER_USEC)
    }

    /// Multiplies by `rhs`, or `None` if the tick count overflows.
    pub const fn checked_mul(self, rhs: i64) -> Option<Self> {
        Self::scaled(self.0, rhs)
    }

    /// Whole weeks, truncated toward zero.
    pub const fn total_weeks(self) -> i64 {
        self.0 / HNSECS_PER_WEEK
    }

    /// Whole days, truncated toward zero.
    pub const fn total_days(self) -> i64 {
        self.0 / HNSECS_PER_DAY
    }

    /// Whole hours, truncated toward zero.
    pub const fn total_hours(self) -> i64 {
        self.0 / HNSECS_PER_HOUR
    }

    /// Whole minutes, truncated toward zero.
    pub const fn total_minutes(self) -> i64 {
        self.0 / HNSECS_PER_MINUTE
    }

    /// Whole seconds, truncated toward zero.
    pub const fn total_seconds(self) -> i64 {
        self.0 / HNSECS_PER_SECOND
    }

    /// Whole milliseconds, truncated toward zero.
    pub const fn total_msecs(self) -> i64 {
        self.0 / HNSECS_PER_MSEC
    }

    /// Whole microseconds, truncated toward zero.
    pub const fn total_usecs(self) -> i64 {
        self.0 / HNSECS_PER_USEC
    }

    /// Returns the raw tick count
    pub const fn total_hnsecs(self) -> i64 {
        self.0
    }

    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }
}

impl Mul<i64> for Duration {
    type Output = Self;

    /// # Panics
    /// Panics if the tick count overflows; see [`Duration::checked_mul`].
    fn mul(self, rhs: i64) -> Self {
        match self.checked_mul(rhs) {
            Some(duration) => duration,
            None => panic!("{self} * {rhs} overflows the i64 range of 100ns ticks"),
        }
    }
}
