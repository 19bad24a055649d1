//! Optional-attendee selection.
//!
//! Chooses which optional attendees to invite so that every mandatory
//! attendee is free, as many optional attendees as possible are free, and,
//! among equally large selections, attendees listed earlier win.
//!
//! A selection is a bitmask over the optional attendee list (bit `i` set means
//! attendee `i` is kept). The search starts from the full list and, attendee by
//! attendee, tries keeping and dropping each one. A candidate that already has
//! a free slot ends its branch: every selection below it in that branch is a
//! subset, so none can be larger. Free slots are memoized per mask.
//!
//! The number of candidates explored grows as `2^k` in the worst case for `k`
//! optional attendees, so callers cap `k` (see [`MAX_OPTIONAL_ATTENDEES`] and
//! [`crate::query::QueryOptions`]).

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::error::{Result, SlotError};
use crate::freebusy::{free_times, AttendanceIndex};
use crate::model::Event;
use crate::time_range::TimeRange;

/// Hard upper bound on optional attendees: selections are `u64` masks.
pub const MAX_OPTIONAL_ATTENDEES: usize = (u64::BITS - 1) as usize;

/// The winning optional-attendee selection and its free slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Bit `i` is set when optional attendee `i` is kept.
    pub mask: u64,
    /// Free slots for the mandatory attendees plus the kept optional ones.
    /// Empty when no selection, not even the empty one, leaves a slot.
    pub slots: Vec<TimeRange>,
    /// Number of distinct selections whose free slots were computed.
    pub evaluated: usize,
}

impl Selection {
    /// Indices of the kept optional attendees, ascending.
    pub fn kept(&self) -> impl Iterator<Item = usize> + '_ {
        (0..u64::BITS as usize).filter(move |i| self.mask & (1 << i) != 0)
    }

    pub fn is_feasible(&self) -> bool {
        !self.slots.is_empty()
    }
}

/// Memoized search over optional-attendee selections for one meeting request.
pub struct OptionalAttendeeOptimizer {
    index: AttendanceIndex,
    optional_count: usize,
    duration: i32,
    memo: HashMap<u64, Vec<TimeRange>>,
}

enum Step {
    /// Evaluate the candidate `mask`, deciding attendees from `cursor` onward.
    Explore { mask: u64, cursor: usize },
    /// Pick between the two most recent branch winners.
    Combine,
}

impl OptionalAttendeeOptimizer {
    /// Prepare a search for `duration`-minute slots.
    ///
    /// # Errors
    /// Returns `SlotError::TooManyOptional` if `optional` has more than
    /// [`MAX_OPTIONAL_ATTENDEES`] entries.
    pub fn new<M, O>(
        events: &[Event],
        mandatory: &[M],
        optional: &[O],
        duration: i32,
    ) -> Result<Self>
    where
        M: AsRef<str>,
        O: AsRef<str>,
    {
        if optional.len() > MAX_OPTIONAL_ATTENDEES {
            return Err(SlotError::TooManyOptional {
                count: optional.len(),
                limit: MAX_OPTIONAL_ATTENDEES,
            });
        }
        Ok(OptionalAttendeeOptimizer {
            index: AttendanceIndex::new(events, mandatory, optional),
            optional_count: optional.len(),
            duration,
            memo: HashMap::new(),
        })
    }

    /// Run the search and return the best selection.
    pub fn solve(mut self) -> Selection {
        let full = (1u64 << self.optional_count) - 1;
        let mut steps = vec![Step::Explore {
            mask: full,
            cursor: 0,
        }];
        let mut winners: Vec<u64> = Vec::new();

        while let Some(step) = steps.pop() {
            match step {
                Step::Explore { mask, cursor } => {
                    if cursor == self.optional_count || self.is_feasible(mask) {
                        winners.push(mask);
                        continue;
                    }
                    // Keep-branch is explored first, so it is pushed last.
                    steps.push(Step::Combine);
                    steps.push(Step::Explore {
                        mask: mask & !(1 << cursor),
                        cursor: cursor + 1,
                    });
                    steps.push(Step::Explore {
                        mask,
                        cursor: cursor + 1,
                    });
                }
                Step::Combine => {
                    // Every Combine follows its two explored branches.
                    if let (Some(dropped), Some(kept)) = (winners.pop(), winners.pop()) {
                        let better = self.prefer(kept, dropped);
                        winners.push(better);
                    }
                }
            }
        }

        let mask = winners.pop().unwrap_or(0);
        let slots = self.slots(mask).to_vec();
        debug!(
            mask,
            kept = mask.count_ones(),
            optional = self.optional_count,
            evaluated = self.memo.len(),
            feasible = !slots.is_empty(),
            "optional attendee search finished"
        );
        Selection {
            mask,
            slots,
            evaluated: self.memo.len(),
        }
    }

    /// Choose between the winners of the keep and drop branches.
    ///
    /// A feasible selection beats an infeasible one; otherwise the larger
    /// selection wins, and the keep branch wins ties.
    fn prefer(&mut self, kept: u64, dropped: u64) -> u64 {
        let kept_feasible = self.is_feasible(kept);
        let dropped_feasible = self.is_feasible(dropped);
        if kept_feasible != dropped_feasible {
            return if kept_feasible { kept } else { dropped };
        }
        if dropped.count_ones() > kept.count_ones() {
            dropped
        } else {
            kept
        }
    }

    fn is_feasible(&mut self, mask: u64) -> bool {
        !self.slots(mask).is_empty()
    }

    fn slots(&mut self, mask: u64) -> &[TimeRange] {
        let index = &self.index;
        let duration = self.duration;
        self.memo.entry(mask).or_insert_with(|| {
            let slots = free_times(&index.busy_times(mask), duration);
            trace!(mask, slots = slots.len(), "evaluated optional attendee subset");
            slots
        })
    }
}
