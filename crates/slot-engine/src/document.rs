//! JSON documents describing a day of events and a meeting request.
//!
//! ```json
//! {
//!   "events": [
//!     {"name": "Standup", "start": 540, "end": 555, "attendees": ["alice", "bob"]}
//!   ],
//!   "request": {
//!     "duration": 30,
//!     "attendees": ["alice"],
//!     "optional_attendees": ["bob", "carol"]
//!   },
//!   "options": {"strategy": "optimize", "max_optional_search": 20}
//! }
//! ```
//!
//! `options` and the attendee lists may be omitted. Times are minutes from
//! midnight; `end` is exclusive.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Event, MeetingRequest};
use crate::query::{MeetingQuery, QueryOptions, Resolution};
use crate::validate::{validate_events, validate_request};

/// A complete scheduling problem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleDocument {
    #[serde(default)]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
    #[serde(default)]
    pub options: QueryOptions,
}

impl ScheduleDocument {
    /// Parse and validate a document.
    ///
    /// # Errors
    /// Returns `SlotError::Json` for malformed JSON, or the validation error
    /// for out-of-day ranges, non-positive durations and blank attendees.
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ScheduleDocument = serde_json::from_str(json)?;
        validate_events(&document.events)?;
        validate_request(&document.request)?;
        Ok(document)
    }

    /// Resolve the document's request with its own options.
    pub fn resolve(&self) -> Resolution {
        MeetingQuery::new(self.options).resolve(&self.events, &self.request)
    }
}
