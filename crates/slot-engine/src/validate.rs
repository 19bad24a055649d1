//! Input checks for data arriving from outside the engine.
//!
//! The scheduling functions assume well-formed input and never fail. Callers
//! that accept events or requests from users, files or the network run them
//! through these checks first.

use crate::error::{Result, SlotError};
use crate::model::{Event, MeetingRequest};

/// Reject events whose range leaves the day or runs backwards, and events
/// with blank attendee identifiers.
pub fn validate_events(events: &[Event]) -> Result<()> {
    for event in events {
        event.when().validate()?;
        check_names(event.attendees())?;
    }
    Ok(())
}

/// Reject non-positive durations and blank attendee identifiers.
///
/// Durations longer than a day are accepted; they simply have no slots.
pub fn validate_request(request: &MeetingRequest) -> Result<()> {
    if request.duration() <= 0 {
        return Err(SlotError::InvalidDuration(request.duration()));
    }
    check_names(request.attendees())?;
    check_names(request.optional_attendees())
}

fn check_names<'a>(names: impl IntoIterator<Item = &'a String>) -> Result<()> {
    if names.into_iter().any(|name| name.trim().is_empty()) {
        return Err(SlotError::EmptyAttendee);
    }
    Ok(())
}
