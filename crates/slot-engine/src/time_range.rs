//! Minute-of-day intervals.
//!
//! A [`TimeRange`] is a half-open interval `[start, end)` measured in minutes
//! from midnight. The day is `[0, 1440)`; [`END_OF_DAY`] is the last minute of
//! the day, and an *inclusive* range ending there is stored as ending at
//! [`DAY_LENGTH`].

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in a day.
pub const DAY_LENGTH: i32 = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: i32 = 0;

/// Last minute of the day (inclusive sentinel).
pub const END_OF_DAY: i32 = DAY_LENGTH - 1;

/// A half-open span of minutes within a single day.
///
/// Ranges are immutable once built. The derived ordering compares `start`
/// first and `end` second, so sorting a list of ranges orders them by start
/// time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TimeRange {
    start: i32,
    end: i32,
}

impl TimeRange {
    /// The entire day, `[0, 1440)`.
    pub const WHOLE_DAY: TimeRange = TimeRange {
        start: START_OF_DAY,
        end: DAY_LENGTH,
    };

    /// Build a range from a start minute and a length in minutes.
    ///
    /// No validation is performed; see [`TimeRange::try_from_start_duration`].
    pub const fn from_start_duration(start: i32, duration: i32) -> Self {
        TimeRange {
            start,
            end: start + duration,
        }
    }

    /// Build a range from a start and an end minute.
    ///
    /// With `inclusive` set, `end` names the last minute covered by the range
    /// and the stored end is `end + 1`. This is how free-time fragments reach
    /// the end of the day from the [`END_OF_DAY`] sentinel.
    ///
    /// No validation is performed; see [`TimeRange::try_from_start_end`].
    pub const fn from_start_end(start: i32, end: i32, inclusive: bool) -> Self {
        TimeRange {
            start,
            end: if inclusive { end + 1 } else { end },
        }
    }

    /// Checked variant of [`TimeRange::from_start_duration`].
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRange` for a negative duration and
    /// `SlotError::OutOfDay` if the range leaves `[0, 1440]`.
    pub fn try_from_start_duration(start: i32, duration: i32) -> Result<Self> {
        let end = start
            .checked_add(duration)
            .ok_or(SlotError::OutOfDay { start, end: i32::MAX })?;
        Self::checked(start, end)
    }

    /// Checked variant of [`TimeRange::from_start_end`].
    ///
    /// # Errors
    /// Returns `SlotError::InvalidRange` if the range ends before it starts and
    /// `SlotError::OutOfDay` if it leaves `[0, 1440]`.
    pub fn try_from_start_end(start: i32, end: i32, inclusive: bool) -> Result<Self> {
        let end = if inclusive {
            end.checked_add(1)
                .ok_or(SlotError::OutOfDay { start, end })?
        } else {
            end
        };
        Self::checked(start, end)
    }

    fn checked(start: i32, end: i32) -> Result<Self> {
        let range = TimeRange { start, end };
        range.validate()?;
        Ok(range)
    }

    /// Check the `0 <= start <= end <= 1440` invariant.
    ///
    /// Ranges deserialized from untrusted input bypass the checked
    /// constructors, so the input boundary calls this explicitly.
    pub fn validate(&self) -> Result<()> {
        if self.end < self.start {
            return Err(SlotError::InvalidRange {
                start: self.start,
                end: self.end,
            });
        }
        if self.start < START_OF_DAY || self.end > DAY_LENGTH {
            return Err(SlotError::OutOfDay {
                start: self.start,
                end: self.end,
            });
        }
        Ok(())
    }

    pub const fn start(&self) -> i32 {
        self.start
    }

    pub const fn end(&self) -> i32 {
        self.end
    }

    /// Length of the range in minutes.
    pub const fn duration(&self) -> i32 {
        self.end - self.start
    }

    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// True iff `other` lies entirely within `self`.
    pub const fn contains(&self, other: &TimeRange) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// True iff the two ranges share at least one minute.
    ///
    /// Adjacent ranges (one ends exactly when the other starts) do not overlap.
    pub const fn overlaps(&self, other: &TimeRange) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
