//! Performance benchmarks for the roster assignment engine.
//!
//! Generation is O(days x people log people) due to per-day candidate
//! sorting; these benchmarks track full runs at typical roster and range
//! sizes.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chrono::{Days, NaiveDate};
use rand::SeedableRng;
use rand::rngs::SmallRng;

use stable_scheduler::engine::generate;
use stable_scheduler::export::{events_for_schedule, serialize_calendar};
use stable_scheduler::config::EventTemplates;
use stable_scheduler::models::{DateRange, Person};

fn make_people(count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| Person {
            id: format!("person_{:02}", i),
            name: format!("Person {:02}", i),
            blocked_dates: Default::default(),
        })
        .collect()
}

fn make_range(days: u64) -> DateRange {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    DateRange::new(start, start.checked_add_days(Days::new(days - 1)).unwrap()).unwrap()
}

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation");

    for (days, people) in [(31u64, 4usize), (92, 6), (366, 10)] {
        let range = make_range(days);
        let roster = make_people(people);
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}d_{}p", days, people)),
            &(range, roster),
            |b, (range, roster)| {
                b.iter(|| {
                    let mut rng = SmallRng::seed_from_u64(42);
                    generate(black_box(*range), black_box(roster), &mut rng).unwrap()
                })
            },
        );
    }

    group.finish();
}

fn bench_export(c: &mut Criterion) {
    let range = make_range(366);
    let roster = make_people(10);
    let mut rng = SmallRng::seed_from_u64(42);
    let outcome = generate(range, &roster, &mut rng).unwrap();
    let templates = EventTemplates {
        summary: "On duty: {name}".to_string(),
        description: "{name} is responsible on {date}.".to_string(),
    };
    let events = events_for_schedule(&outcome.schedule, &roster, &templates).unwrap();
    let stamp = chrono::Utc::now();

    c.bench_function("serialize_year_calendar", |b| {
        b.iter(|| serialize_calendar(black_box(&events), stamp))
    });
}

criterion_group!(benches, bench_generation, bench_export);
criterion_main!(benches);
