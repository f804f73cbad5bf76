use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use forecast_core::svg::render_svg;
use forecast_core::{layout, ChartOptions, SeriesGenerator, Theme};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_layout(c: &mut Criterion) {
    let g = SeriesGenerator::default();
    let opts = ChartOptions::default();
    let theme = Theme::light();
    let mut group = c.benchmark_group("layout");
    for &n in &[60usize, 5_000] {
        let mut rng = StdRng::seed_from_u64(3);
        let h = g.historical(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), n, 2100, &mut rng);
        let f = g.forecast(&h, 90, &mut rng).unwrap();
        group.bench_with_input(BenchmarkId::new("geometry", n), &n, |b, _| {
            b.iter(|| black_box(layout(&h, &f, &opts).unwrap()));
        });
        let geo = layout(&h, &f, &opts).unwrap();
        group.bench_with_input(BenchmarkId::new("svg", n), &n, |b, _| {
            b.iter(|| black_box(render_svg(&geo, &opts, &theme, None)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_layout);
criterion_main!(benches);
