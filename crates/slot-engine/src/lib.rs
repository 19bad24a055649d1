//! # slot-engine
//!
//! Finds the open time slots for a proposed meeting within a single day.
//!
//! Given the day's calendar events and a meeting request, the engine returns
//! every slot where all mandatory attendees are free for the requested
//! duration. Optional attendees are fitted in where possible: the engine keeps
//! the largest group of them that still leaves a slot, preferring attendees
//! listed first.
//!
//! Times are integer minutes from midnight in `[0, 1440]`.
//!
//! ```rust
//! use slot_engine::{find_meeting_times, Event, MeetingRequest, TimeRange};
//!
//! let events = vec![
//!     Event::new("Standup", TimeRange::from_start_end(0, 60, false), ["alice"]),
//!     Event::new("Review", TimeRange::from_start_end(120, 180, false), ["alice"]),
//! ];
//! let request = MeetingRequest::new(30, ["alice"]);
//!
//! let slots = find_meeting_times(&events, &request);
//! assert_eq!(
//!     slots,
//!     vec![
//!         TimeRange::from_start_end(60, 120, false),
//!         TimeRange::from_start_end(180, 1440, false),
//!     ]
//! );
//! ```
//!
//! ## Modules
//!
//! - [`time_range`]: minute-of-day intervals and day constants
//! - [`model`]: calendar events and meeting requests
//! - [`freebusy`]: busy intervals of an attendee group, and the free gaps between them
//! - [`optimizer`]: memoized search over optional-attendee selections
//! - [`query`]: the entry point, with strategy options
//! - [`validate`]: input checks for untrusted data
//! - [`document`]: JSON scheduling documents
//! - [`error`]: error types

pub mod document;
pub mod error;
pub mod freebusy;
pub mod model;
pub mod optimizer;
pub mod query;
pub mod time_range;
pub mod validate;

pub use document::ScheduleDocument;
pub use error::SlotError;
pub use freebusy::{busy_times, find_free_slots, free_times};
pub use model::{Event, MeetingRequest};
pub use optimizer::{OptionalAttendeeOptimizer, Selection};
pub use query::{find_meeting_times, MeetingQuery, QueryOptions, Resolution, Strategy};
pub use time_range::{TimeRange, DAY_LENGTH, END_OF_DAY, START_OF_DAY};
