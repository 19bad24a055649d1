//! Benchmarks for meeting resolution as the optional attendee list grows.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use slot_engine::{Event, MeetingQuery, MeetingRequest, TimeRange};

/// A day tiled by one block per optional guest plus the host's own block:
/// with every guest there is no room, and dropping any one guest opens a slot.
fn crowded_day(optional: usize) -> (Vec<Event>, MeetingRequest) {
    let names: Vec<String> = (0..optional).map(|i| format!("guest{i}")).collect();
    let block = 1440 / (optional as i32 + 1);
    let mut events: Vec<Event> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let start = i as i32 * block;
            Event::new("busy", TimeRange::from_start_duration(start, block), [name.as_str()])
        })
        .collect();
    events.push(Event::new(
        "host",
        TimeRange::from_start_duration(optional as i32 * block, 1440 - optional as i32 * block),
        ["host"],
    ));
    let request = MeetingRequest::new(block, ["host"]).with_optional(names);
    (events, request)
}

fn bench_optional_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("optional_search");
    for optional in [2usize, 4, 8, 12] {
        let (events, request) = crowded_day(optional);
        let query = MeetingQuery::default();
        group.bench_with_input(BenchmarkId::from_parameter(optional), &optional, |b, _| {
            b.iter(|| query.resolve(black_box(&events), black_box(&request)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_optional_search);
criterion_main!(benches);
