//! Time representation for the draft document timeline.
//!
//! The downstream editor format stores every time field as an integer number
//! of microseconds, so all timeline arithmetic happens on integers. Floating
//! seconds only appear at the boundary where container metadata is read.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

/// A duration or instant on the document timeline, in microseconds.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Micros(i64);

impl Micros {
    /// Zero duration constant.
    pub const ZERO: Self = Self(0);

    /// One second.
    pub const SECOND: Self = Self(1_000_000);

    /// Create from a raw microsecond count.
    #[inline]
    pub const fn new(micros: i64) -> Self {
        Self(micros)
    }

    /// Create from whole seconds.
    #[inline]
    pub const fn from_secs(secs: i64) -> Self {
        Self(secs * 1_000_000)
    }

    /// Create from float seconds, truncating fractional microseconds
    /// toward zero.
    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        Self((secs * 1_000_000.0) as i64)
    }

    /// Raw microsecond count.
    #[inline]
    pub const fn as_micros(self) -> i64 {
        self.0
    }

    /// Convert to float seconds (display and logging only).
    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0 as f64 / 1_000_000.0
    }

    /// Check if this duration is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Integer half, rounded down. The long-segment split uses this for the
    /// first sub-range; the remainder goes to the second so the two always
    /// sum exactly to the original.
    #[inline]
    pub const fn half_floor(self) -> Self {
        Self(self.0 / 2)
    }
}

impl Add for Micros {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Micros {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Micros {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Sum for Micros {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, m| acc + m)
    }
}

impl fmt::Display for Micros {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}s", self.as_secs_f64())
    }
}

/// A time range with inclusive start and exclusive end.
///
/// Serialized field order (`start` before `duration`) follows the downstream
/// document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// Start time (inclusive)
    pub start: Micros,
    /// Duration of the range
    pub duration: Micros,
}

impl TimeRange {
    /// Create a new time range from start and duration.
    #[inline]
    pub const fn new(start: Micros, duration: Micros) -> Self {
        Self { start, duration }
    }

    /// A range starting at zero with the given duration. Source ranges of
    /// untrimmed materials always have this shape.
    #[inline]
    pub const fn from_zero(duration: Micros) -> Self {
        Self {
            start: Micros::ZERO,
            duration,
        }
    }

    /// End time (exclusive).
    #[inline]
    pub fn end(self) -> Micros {
        self.start + self.duration
    }

    /// Check if two ranges overlap.
    pub fn overlaps(self, other: Self) -> bool {
        self.start < other.end() && other.start < self.end()
    }

    /// Empty range starting at zero.
    pub const EMPTY: Self = Self {
        start: Micros::ZERO,
        duration: Micros::ZERO,
    };
}

impl Default for TimeRange {
    fn default() -> Self {
        Self::EMPTY
    }
}
