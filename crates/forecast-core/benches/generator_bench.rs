use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forecast_core::SeriesGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_generator(c: &mut Criterion) {
    let g = SeriesGenerator::default();
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut group = c.benchmark_group("generator");
    for &n in &[60usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(format!("hist{n}_fc90")), &n, |b, &n| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| {
                let h = g.historical(start, n, 2100, &mut rng);
                let f = g.forecast(&h, 90, &mut rng).unwrap();
                black_box((h, f))
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_generator);
criterion_main!(benches);
