//! Tests for the optional-attendee search.

use slot_engine::optimizer::MAX_OPTIONAL_ATTENDEES;
use slot_engine::{Event, OptionalAttendeeOptimizer, SlotError, TimeRange};

fn range(start: i32, end: i32) -> TimeRange {
    TimeRange::from_start_end(start, end, false)
}

fn event(start: i32, end: i32, attendees: &[&str]) -> Event {
    Event::new("busy", range(start, end), attendees.iter().copied())
}

#[test]
fn everyone_free_is_settled_by_one_evaluation() {
    let optimizer = OptionalAttendeeOptimizer::new(&[], &["A"], &["B", "C", "D"], 30).unwrap();

    let selection = optimizer.solve();

    assert_eq!(selection.mask, 0b111);
    assert_eq!(selection.kept().collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(selection.slots, vec![TimeRange::WHOLE_DAY]);
    assert_eq!(selection.evaluated, 1);
    assert!(selection.is_feasible());
}

#[test]
fn no_optional_attendees_evaluates_mandatory_group() {
    let events = vec![event(0, 600, &["A"])];
    let optional: [&str; 0] = [];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &optional, 30)
        .unwrap()
        .solve();

    assert_eq!(selection.mask, 0);
    assert_eq!(selection.slots, vec![range(600, 1440)]);
}

#[test]
fn conflicting_pair_keeps_the_first() {
    let events = vec![event(0, 720, &["B"]), event(720, 1440, &["C"])];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &["B", "C"], 60)
        .unwrap()
        .solve();

    assert_eq!(selection.mask, 0b01);
    assert_eq!(selection.slots, vec![range(720, 1440)]);
}

#[test]
fn ties_prefer_earliest_attendees_across_several_positions() {
    // Any two of B, C, D fit together, all three do not. The best pair is {B, C}.
    let events = vec![
        event(0, 480, &["B"]),
        event(480, 960, &["C"]),
        event(960, 1440, &["D"]),
    ];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &["B", "C", "D"], 60)
        .unwrap()
        .solve();

    assert_eq!(selection.kept().collect::<Vec<_>>(), vec![0, 1]);
    assert_eq!(selection.slots, vec![range(960, 1440)]);
}

#[test]
fn single_attendee_blocking_everything_is_dropped() {
    let events = vec![
        event(0, 1440, &["C"]),
        event(0, 60, &["B"]),
        event(1000, 1100, &["D"]),
    ];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &["B", "C", "D"], 60)
        .unwrap()
        .solve();

    assert_eq!(selection.kept().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(
        selection.slots,
        vec![range(60, 1000), range(1100, 1440)]
    );
}

#[test]
fn infeasible_mandatory_group_yields_no_slots() {
    let events = vec![event(0, 1440, &["A"])];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &["B"], 30)
        .unwrap()
        .solve();

    assert!(!selection.is_feasible());
    assert!(selection.slots.is_empty());
}

#[test]
fn fully_explored_infeasible_tree_folds_to_one_winner() {
    // No subset is feasible, so every branch is expanded down to the leaves
    // and each pair of branch winners is folded back into one.
    let events = vec![event(0, 1440, &["A"])];

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &["B", "C", "D"], 30)
        .unwrap()
        .solve();

    assert_eq!(selection.mask, 0b111);
    assert!(!selection.is_feasible());
    assert_eq!(selection.evaluated, 8);
}

#[test]
fn memo_covers_each_subset_at_most_once() {
    // Every optional attendee is busy all day, so the search must reach the
    // empty selection. There are only 2^4 distinct subsets.
    let names = ["B", "C", "D", "E"];
    let events: Vec<Event> = names.iter().map(|n| event(0, 1440, &[*n])).collect();

    let selection = OptionalAttendeeOptimizer::new(&events, &["A"], &names, 30)
        .unwrap()
        .solve();

    assert_eq!(selection.mask, 0);
    assert_eq!(selection.slots, vec![TimeRange::WHOLE_DAY]);
    assert!(selection.evaluated <= 16);
}

#[test]
fn rejects_lists_wider_than_a_mask() {
    let names: Vec<String> = (0..=MAX_OPTIONAL_ATTENDEES).map(|i| format!("p{i}")).collect();

    let result = OptionalAttendeeOptimizer::new(&[], &["A"], &names, 30);

    assert!(matches!(
        result,
        Err(SlotError::TooManyOptional { count: 64, limit: 63 })
    ));
}

#[test]
fn accepts_the_widest_supported_list() {
    let names: Vec<String> = (0..MAX_OPTIONAL_ATTENDEES).map(|i| format!("p{i}")).collect();

    let selection = OptionalAttendeeOptimizer::new(&[], &["A"], &names, 30)
        .unwrap()
        .solve();

    assert_eq!(selection.mask.count_ones() as usize, MAX_OPTIONAL_ATTENDEES);
}
