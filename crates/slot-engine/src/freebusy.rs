//! Busy and free time computation.
//!
//! Busy time for a group of attendees is every event that at least one of them
//! attends. Free time is the complement of busy time within the day, keeping
//! only gaps long enough to hold the meeting.

use crate::model::Event;
use crate::time_range::{TimeRange, END_OF_DAY, START_OF_DAY};

/// Collect the busy intervals of `targets`.
///
/// Every event whose attendee set intersects `targets` contributes its whole
/// range exactly once, however many of its attendees are targeted. The result
/// follows event order; [`free_times`] sorts it.
pub fn busy_times<S: AsRef<str>>(events: &[Event], targets: &[S]) -> Vec<TimeRange> {
    events
        .iter()
        .filter(|event| event.involves(targets))
        .map(Event::when)
        .collect()
}

/// Precomputed attendance of each event, for evaluating many attendee subsets.
///
/// Optional attendees are addressed by their index in the request, so a subset
/// is a bitmask. An event is busy for a subset when a mandatory attendee goes
/// to it, or when one of the subset's optional attendees does.
#[derive(Debug, Clone)]
pub struct AttendanceIndex {
    entries: Vec<Attendance>,
}

#[derive(Debug, Clone, Copy)]
struct Attendance {
    when: TimeRange,
    mandatory: bool,
    optional: u64,
}

impl AttendanceIndex {
    /// Index `events` against a mandatory group and at most 64 optional attendees.
    ///
    /// Optional attendees beyond the 64th are ignored; callers enforce the limit.
    pub fn new<M, O>(events: &[Event], mandatory: &[M], optional: &[O]) -> Self
    where
        M: AsRef<str>,
        O: AsRef<str>,
    {
        let entries = events
            .iter()
            .filter_map(|event| {
                let is_mandatory = event.involves(mandatory);
                let optional_mask = optional
                    .iter()
                    .take(u64::BITS as usize)
                    .enumerate()
                    .filter(|(_, name)| {
                        let name: &str = (*name).as_ref();
                        event.attendees().contains(name)
                    })
                    .fold(0u64, |mask, (i, _)| mask | (1 << i));
                (is_mandatory || optional_mask != 0).then_some(Attendance {
                    when: event.when(),
                    mandatory: is_mandatory,
                    optional: optional_mask,
                })
            })
            .collect();
        AttendanceIndex { entries }
    }

    /// Busy intervals for the mandatory group plus the optional subset `mask`.
    pub fn busy_times(&self, mask: u64) -> Vec<TimeRange> {
        self.entries
            .iter()
            .filter(|entry| entry.mandatory || entry.optional & mask != 0)
            .map(|entry| entry.when)
            .collect()
    }
}

/// Drop every interval contained in the most recently kept one.
///
/// `sorted` must be ordered by start. Only the latest survivor is checked, and
/// overlapping intervals are not merged: the gap scan in [`free_times`] skips
/// the negative gaps they produce.
fn remove_nested(sorted: Vec<TimeRange>) -> Vec<TimeRange> {
    let mut kept: Vec<TimeRange> = Vec::with_capacity(sorted.len());
    for range in sorted {
        if kept.last().is_some_and(|prev| prev.contains(&range)) {
            continue;
        }
        kept.push(range);
    }
    kept
}

/// Push the gap `[start, end)` (or up to and including `end`) if it can hold
/// a meeting of `min_duration` minutes.
fn push_if_fits(
    free: &mut Vec<TimeRange>,
    start: i32,
    end: i32,
    min_duration: i32,
    inclusive: bool,
) {
    let gap = TimeRange::from_start_end(start, end, inclusive);
    if gap.is_empty() || gap.duration() < min_duration {
        return;
    }
    free.push(gap);
}

/// Find the free slots of at least `min_duration` minutes left by `busy`.
///
/// `busy` may be unsorted and may overlap. Returns slots sorted by start time;
/// consecutive slots never overlap.
pub fn free_times(busy: &[TimeRange], min_duration: i32) -> Vec<TimeRange> {
    let mut sorted = busy.to_vec();
    // Stable sort on start only, so equal starts keep their input order.
    sorted.sort_by_key(TimeRange::start);
    let busy = remove_nested(sorted);

    let mut free = Vec::new();
    let (Some(first), Some(last)) = (busy.first(), busy.last()) else {
        push_if_fits(&mut free, START_OF_DAY, END_OF_DAY, min_duration, true);
        return free;
    };

    push_if_fits(&mut free, START_OF_DAY, first.start(), min_duration, false);
    for pair in busy.windows(2) {
        push_if_fits(&mut free, pair[0].end(), pair[1].start(), min_duration, false);
    }
    push_if_fits(&mut free, last.end(), END_OF_DAY, min_duration, true);

    free
}

/// Free slots of at least `min_duration` minutes shared by all of `targets`.
pub fn find_free_slots<S: AsRef<str>>(
    events: &[Event],
    targets: &[S],
    min_duration: i32,
) -> Vec<TimeRange> {
    free_times(&busy_times(events, targets), min_duration)
}
