//! Calendar events and meeting requests.
//!
//! Both types are read-only once constructed. Events arrive from a calendar
//! source; requests describe the meeting to place.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::time_range::TimeRange;

/// An existing calendar event occupying its attendees for its whole range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    name: String,
    #[serde(flatten)]
    when: TimeRange,
    attendees: BTreeSet<String>,
}

impl Event {
    pub fn new<I, S>(name: impl Into<String>, when: TimeRange, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.into(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn when(&self) -> TimeRange {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True if any of `targets` attends this event.
    pub fn involves<S: AsRef<str>>(&self, targets: &[S]) -> bool {
        targets.iter().any(|target| {
            let target: &str = target.as_ref();
            self.attendees.contains(target)
        })
    }
}

/// A meeting to be placed in the day.
///
/// Both attendee lists keep their input order with duplicates removed. The
/// order of `optional_attendees` is significant: when not every optional
/// attendee can be accommodated, those listed first are preferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawMeetingRequest")]
pub struct MeetingRequest {
    duration: i32,
    attendees: Vec<String>,
    optional_attendees: Vec<String>,
}

#[derive(Deserialize)]
struct RawMeetingRequest {
    duration: i32,
    #[serde(default)]
    attendees: Vec<String>,
    #[serde(default)]
    optional_attendees: Vec<String>,
}

impl From<RawMeetingRequest> for MeetingRequest {
    fn from(raw: RawMeetingRequest) -> Self {
        MeetingRequest::new(raw.duration, raw.attendees)
            .with_optional(raw.optional_attendees)
    }
}

impl MeetingRequest {
    /// A request for `duration` minutes with the given mandatory attendees.
    pub fn new<I, S>(duration: i32, attendees: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            duration,
            attendees: dedup_ordered(attendees),
            optional_attendees: Vec::new(),
        }
    }

    /// Replace the optional attendee list, in priority order.
    pub fn with_optional<I, S>(mut self, optional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees = dedup_ordered(optional);
        self
    }

    pub fn duration(&self) -> i32 {
        self.duration
    }

    /// Mandatory attendees.
    pub fn attendees(&self) -> &[String] {
        &self.attendees
    }

    pub fn optional_attendees(&self) -> &[String] {
        &self.optional_attendees
    }
}

fn dedup_ordered<I, S>(names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut seen = BTreeSet::new();
    names
        .into_iter()
        .map(Into::into)
        .filter(|name| seen.insert(name.clone()))
        .collect()
}
