//! Error types for slot-engine operations.
//!
//! Scheduling queries themselves never fail. These errors come from the
//! input boundary ([`crate::validate`]), from JSON documents, and from the
//! strict query variants that refuse oversized optional-attendee searches.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The range ends before it starts.
    #[error("Invalid time range: end {end} is before start {start}")]
    InvalidRange { start: i32, end: i32 },

    /// The range leaves the `[0, 1440]` minute window of the day.
    #[error("Time range [{start}, {end}) lies outside the day [0, 1440]")]
    OutOfDay { start: i32, end: i32 },

    /// Meeting durations must be positive.
    #[error("Invalid meeting duration: {0} minutes")]
    InvalidDuration(i32),

    /// An attendee identifier was empty or whitespace.
    #[error("Attendee identifiers must not be blank")]
    EmptyAttendee,

    /// The optional-attendee search would exceed the configured limit.
    #[error("Too many optional attendees: {count} (search limit is {limit})")]
    TooManyOptional { count: usize, limit: usize },

    /// The input document was not valid JSON for the expected schema.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
