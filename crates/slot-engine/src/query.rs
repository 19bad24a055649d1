//! Meeting time resolution, the entry point of the engine.
//!
//! Given the day's events and a [`MeetingRequest`], [`MeetingQuery`] returns
//! the slots where the meeting fits. Mandatory attendees must all be free.
//! Optional attendees are accommodated according to the configured
//! [`Strategy`].

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, SlotError};
use crate::freebusy::find_free_slots;
use crate::model::{Event, MeetingRequest};
use crate::optimizer::{OptionalAttendeeOptimizer, MAX_OPTIONAL_ATTENDEES};
use crate::time_range::{TimeRange, DAY_LENGTH};

/// Default cap on optional attendees searched by [`Strategy::Optimize`].
pub const DEFAULT_MAX_OPTIONAL_SEARCH: usize = 20;

/// How optional attendees are accommodated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Keep the largest set of optional attendees that still leaves a slot,
    /// preferring attendees listed earlier.
    #[default]
    Optimize,
    /// Either every optional attendee is free, or none is considered.
    AllOrNothing,
}

/// Tuning for [`MeetingQuery`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub strategy: Strategy,
    /// Largest optional list searched exhaustively. Longer lists fall back to
    /// [`Strategy::AllOrNothing`] (or fail, with [`MeetingQuery::try_resolve`]).
    /// Values above [`MAX_OPTIONAL_ATTENDEES`] are clamped.
    pub max_optional_search: usize,
}

impl Default for QueryOptions {
    fn default() -> Self {
        QueryOptions {
            strategy: Strategy::Optimize,
            max_optional_search: DEFAULT_MAX_OPTIONAL_SEARCH,
        }
    }
}

impl QueryOptions {
    fn search_limit(&self) -> usize {
        self.max_optional_search.min(MAX_OPTIONAL_ATTENDEES)
    }
}

/// The slots found for a request, plus who they actually suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// Candidate slots, sorted by start, non-overlapping.
    pub slots: Vec<TimeRange>,
    /// Mandatory attendees (all free in every slot when `slots` is non-empty).
    pub attendees: Vec<String>,
    /// Optional attendees free in every slot, in request order.
    pub optional_kept: Vec<String>,
    /// Optional attendees that could not be accommodated.
    pub optional_dropped: Vec<String>,
}

impl Resolution {
    fn new(request: &MeetingRequest, slots: Vec<TimeRange>, keep: impl Fn(usize) -> bool) -> Self {
        let (kept, dropped): (Vec<_>, Vec<_>) = request
            .optional_attendees()
            .iter()
            .enumerate()
            .partition(|&(i, _)| keep(i));
        Resolution {
            slots,
            attendees: request.attendees().to_vec(),
            optional_kept: kept.into_iter().map(|(_, name)| name.clone()).collect(),
            optional_dropped: dropped.into_iter().map(|(_, name)| name.clone()).collect(),
        }
    }

    fn with_mask(request: &MeetingRequest, slots: Vec<TimeRange>, mask: u64) -> Self {
        Self::new(request, slots, |i| {
            i < MAX_OPTIONAL_ATTENDEES && mask & (1 << i) != 0
        })
    }

    fn none(request: &MeetingRequest) -> Self {
        Self::new(request, Vec::new(), |_| false)
    }
}

/// Resolves meeting requests against a day of events.
///
/// Holds only configuration; every call is independent, so one instance can
/// serve concurrent queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeetingQuery {
    options: QueryOptions,
}

impl MeetingQuery {
    pub fn new(options: QueryOptions) -> Self {
        MeetingQuery { options }
    }

    pub fn options(&self) -> &QueryOptions {
        &self.options
    }

    /// Find the slots where the requested meeting fits.
    ///
    /// Never fails: impossible requests produce an empty list.
    pub fn query(&self, events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
        self.resolve(events, request).slots
    }

    /// Like [`MeetingQuery::query`], also reporting which optional attendees
    /// the slots accommodate.
    ///
    /// An optional list longer than the search limit is handled with
    /// [`Strategy::AllOrNothing`].
    pub fn resolve(&self, events: &[Event], request: &MeetingRequest) -> Resolution {
        let limit = self.options.search_limit();
        let count = request.optional_attendees().len();
        let strategy = if self.options.strategy == Strategy::Optimize && count > limit {
            warn!(
                count,
                limit, "optional attendee list exceeds search limit, using all-or-nothing"
            );
            Strategy::AllOrNothing
        } else {
            self.options.strategy
        };
        resolve_with(events, request, strategy)
    }

    /// Strict variant of [`MeetingQuery::resolve`].
    ///
    /// # Errors
    /// Returns `SlotError::TooManyOptional` when the optimizing strategy is
    /// selected and the optional list exceeds the search limit.
    pub fn try_resolve(&self, events: &[Event], request: &MeetingRequest) -> Result<Resolution> {
        let limit = self.options.search_limit();
        let count = request.optional_attendees().len();
        if self.options.strategy == Strategy::Optimize && count > limit {
            return Err(SlotError::TooManyOptional { count, limit });
        }
        Ok(resolve_with(events, request, self.options.strategy))
    }

    /// Strict variant of [`MeetingQuery::query`].
    ///
    /// # Errors
    /// Same as [`MeetingQuery::try_resolve`].
    pub fn try_query(&self, events: &[Event], request: &MeetingRequest) -> Result<Vec<TimeRange>> {
        self.try_resolve(events, request).map(|resolution| resolution.slots)
    }
}

fn resolve_with(events: &[Event], request: &MeetingRequest, strategy: Strategy) -> Resolution {
    let duration = request.duration();
    let mandatory = request.attendees();
    let optional = request.optional_attendees();
    debug!(
        events = events.len(),
        duration,
        mandatory = mandatory.len(),
        optional = optional.len(),
        ?strategy,
        "resolving meeting request"
    );

    if duration <= 0 || duration > DAY_LENGTH {
        debug!(duration, "meeting duration cannot fit in a day");
        return Resolution::none(request);
    }

    if optional.is_empty() {
        let slots = find_free_slots(events, mandatory, duration);
        return Resolution::new(request, slots, |_| false);
    }

    match strategy {
        Strategy::Optimize => optimize(events, request),
        Strategy::AllOrNothing => all_or_nothing(events, request),
    }
}

fn optimize(events: &[Event], request: &MeetingRequest) -> Resolution {
    let optimizer = match OptionalAttendeeOptimizer::new(
        events,
        request.attendees(),
        request.optional_attendees(),
        request.duration(),
    ) {
        Ok(optimizer) => optimizer,
        Err(err) => {
            warn!(%err, "optional attendee search unavailable, using all-or-nothing");
            return all_or_nothing(events, request);
        }
    };
    let selection = optimizer.solve();

    // With nobody mandatory and no optional attendee free, there is no one to meet.
    if !selection.is_feasible() || (request.attendees().is_empty() && selection.mask == 0) {
        return Resolution::none(request);
    }
    Resolution::with_mask(request, selection.slots, selection.mask)
}

fn all_or_nothing(events: &[Event], request: &MeetingRequest) -> Resolution {
    let mandatory = request.attendees();
    let optional = request.optional_attendees();
    let duration = request.duration();

    let everyone: Vec<&str> = mandatory
        .iter()
        .chain(optional)
        .map(String::as_str)
        .collect();
    let slots = find_free_slots(events, &everyone, duration);
    if !slots.is_empty() {
        return Resolution::new(request, slots, |_| true);
    }

    if mandatory.is_empty() {
        return Resolution::none(request);
    }
    Resolution::new(request, find_free_slots(events, mandatory, duration), |_| false)
}

/// Find meeting slots with the default [`QueryOptions`].
pub fn find_meeting_times(events: &[Event], request: &MeetingRequest) -> Vec<TimeRange> {
    MeetingQuery::default().query(events, request)
}
