use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use eco_tracker::models::{ledger, summarize, ActivityInput, ActivityRecord, ScoredActivity};
use eco_tracker::services::assess;

fn sample_input(i: u32) -> ActivityInput {
    let mut input = ActivityInput::default();
    input.travel.car_km = f64::from(i % 40);
    input.travel.bus_km = f64::from(i % 7);
    input.electricity.units = f64::from(i % 12) * 0.5;
    input.food.veg_meals = i % 3;
    input.food.non_veg_meals = i % 2;
    input.lifestyle.plastic_usage = i % 5;
    input
}

fn benchmark_scoring(c: &mut Criterion) {
    let input = sample_input(17);

    c.bench_function("assess_single_input", |b| {
        b.iter(|| assess(black_box(&input)))
    });
}

fn benchmark_aggregation(c: &mut Criterion) {
    // A year of history with a handful of badge-earning days
    let records: Vec<ActivityRecord> = (0..365)
        .map(|i| {
            let input = sample_input(i);
            let assessment = assess(&input);
            ActivityRecord::new(
                format!("rec-{}", i),
                ScoredActivity { input, assessment },
                format!("2026-01-01T00:00:{:02}.000000Z", i % 60),
            )
        })
        .collect();

    let mut group = c.benchmark_group("aggregation");

    group.bench_function("summarize_year", |b| {
        b.iter(|| summarize(black_box(&records)))
    });

    group.bench_function("ledger_year", |b| b.iter(|| ledger(black_box(&records))));

    group.finish();
}

criterion_group!(benches, benchmark_scoring, benchmark_aggregation);
criterion_main!(benches);
