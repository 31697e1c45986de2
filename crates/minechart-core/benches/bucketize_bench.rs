use chrono::DateTime;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use minechart_core::{bucketize, Sample, TimeDomain, TARGET_BUCKETS};

fn gen_day(per_minute: bool) -> Vec<Sample> {
    let stride = if per_minute { 1 } else { 5 };
    (0..=1440)
        .step_by(stride)
        .map(|m| {
            // waveform-ish player counts with occasional outages
            let value = if m % 13 == 0 { None } else { Some(((m as f64 * 0.01).sin() * 40.0 + 50.0).round()) };
            Sample::new(m as i64, value)
        })
        .collect()
}

fn day_domain() -> TimeDomain {
    let start = DateTime::from_timestamp(0, 0).unwrap();
    let end = DateTime::from_timestamp(1440 * 60, 0).unwrap();
    TimeDomain::new(start, end).unwrap()
}

fn bench_bucketize(c: &mut Criterion) {
    let domain = day_domain();
    let mut group = c.benchmark_group("bucketize");
    for (label, data) in [("per_minute", gen_day(true)), ("sparse", gen_day(false))] {
        group.bench_with_input(BenchmarkId::from_parameter(label), &data, |b, d| {
            b.iter(|| black_box(bucketize(d, &domain, TARGET_BUCKETS)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bucketize);
criterion_main!(benches);
