use chrono::{DateTime, Duration, FixedOffset};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use solar_noon::SolarCalculator;
use solar_noon::display::render_frame;
use std::hint::black_box;

fn start() -> DateTime<FixedOffset> {
    "2025-03-22T09:00:00+05:30"
        .parse::<DateTime<FixedOffset>>()
        .unwrap()
}

fn benchmark_single_calls(c: &mut Criterion) {
    let calculator = SolarCalculator::default();
    let now = start();

    c.bench_function("time_to_next_solar_noon", |b| {
        b.iter(|| {
            calculator
                .time_to_next_solar_noon(black_box(&now))
                .unwrap()
        })
    });

    c.bench_function("solar_position", |b| {
        b.iter(|| calculator.solar_position(black_box(&now)))
    });

    c.bench_function("solar_position_at", |b| {
        b.iter(|| calculator.solar_position_at(black_box(81), black_box(9.0)))
    });
}

/// One frame per display refresh, the way a render loop calls it.
fn benchmark_frame_cadence(c: &mut Criterion) {
    let calculator = SolarCalculator::default();
    let mut group = c.benchmark_group("frames");

    for frames in [60_i64, 3_600] {
        group.throughput(Throughput::Elements(frames as u64));
        group.bench_with_input(BenchmarkId::new("render", frames), &frames, |b, &frames| {
            b.iter(|| {
                let base = start();
                for frame in 0..frames {
                    let now = base + Duration::milliseconds(frame * 16);
                    black_box(render_frame(&calculator, &now, true).unwrap());
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_single_calls, benchmark_frame_cadence);
criterion_main!(benches);
