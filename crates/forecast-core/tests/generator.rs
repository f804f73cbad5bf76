// File: crates/forecast-core/tests/generator.rs
// Purpose: Length, date continuity, price bounds and reproducibility of the synthetic series.

use chrono::NaiveDate;
use forecast_core::generator::{GeneratorConfig, FORECAST_DAYS, HISTORY_DAYS};
use forecast_core::{add_days, generate_forecast, generate_historical_series, ForecastError, Series, SeriesGenerator, SeriesKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
}

fn history(seed: u64, base: u64) -> Series {
    let mut rng = StdRng::seed_from_u64(seed);
    generate_historical_series(start(), HISTORY_DAYS, base, &mut rng)
}

#[test]
fn historical_has_sixty_consecutive_days() {
    for seed in 0..20 {
        let h = history(seed, 2100);
        assert_eq!(h.len(), 60);
        assert_eq!(h.kind, SeriesKind::Historical);
        assert_eq!(h.first().unwrap().date, start());
        for (i, w) in h.points.windows(2).enumerate() {
            assert_eq!(w[1].date, add_days(w[0].date, 1), "gap after point {i}");
            assert_eq!(w[1].index, w[0].index + 1);
        }
        assert!(h.points.iter().all(|p| !p.is_forecast));
    }
}

#[test]
fn historical_prices_stay_inside_noise_envelope() {
    // factors: noise in [-0.10, 0.10), seasonal in [-0.08, 0.08], trend <= 0.0005 * 59
    let base: f64 = 2100.0;
    for seed in 0..50 {
        for p in history(seed, 2100).points {
            let price = p.price as f64;
            assert!(price >= (base * (1.0 - 0.10 - 0.08)).floor(), "{price} too low");
            assert!(price <= (base * (1.0 + 0.10 + 0.08 + 0.0005 * 59.0)).ceil(), "{price} too high");
        }
    }
}

#[test]
fn forecast_continues_the_history() {
    let h = history(7, 2100);
    let mut rng = StdRng::seed_from_u64(8);
    let f = generate_forecast(&h, FORECAST_DAYS, &mut rng).unwrap();
    let last = h.last().unwrap();

    assert_eq!(f.len(), 90);
    assert_eq!(f.kind, SeriesKind::Forecast);
    assert_eq!(f.first().unwrap().date, add_days(last.date, 1));
    assert_eq!(f.first().unwrap().index, 60);
    assert_eq!(f.last().unwrap().index, 149);
    for w in f.points.windows(2) {
        assert_eq!(w[1].date, add_days(w[0].date, 1));
    }
    assert!(f.points.iter().all(|p| p.is_forecast));
}

#[test]
fn forecast_honors_arbitrary_horizon() {
    let h = history(3, 1000);
    for horizon in [0usize, 1, 5, 30, 200] {
        let mut rng = StdRng::seed_from_u64(horizon as u64);
        assert_eq!(generate_forecast(&h, horizon, &mut rng).unwrap().len(), horizon);
    }
}

#[test]
fn first_forecast_price_is_near_last_historical() {
    for seed in 0..100 {
        let h = history(seed, 2100);
        let mut rng = StdRng::seed_from_u64(seed + 1000);
        let f = generate_forecast(&h, 90, &mut rng).unwrap();
        let last = h.last().unwrap().price as f64;
        let first = f.first().unwrap().price as f64;
        assert!((first - last).abs() <= last * 0.15, "seed {seed}: {first} vs {last}");
    }
}

#[test]
fn one_day_history_is_enough_to_forecast() {
    let mut rng = StdRng::seed_from_u64(1);
    let h = generate_historical_series(start(), 1, 500, &mut rng);
    let f = generate_forecast(&h, 3, &mut rng).unwrap();
    assert_eq!(f.first().unwrap().date, add_days(start(), 1));
    assert_eq!(f.first().unwrap().index, 1);
}

#[test]
fn empty_history_is_rejected() {
    let mut rng = StdRng::seed_from_u64(1);
    let err = generate_forecast(&Series::new(SeriesKind::Historical), 90, &mut rng).unwrap_err();
    assert_eq!(err, ForecastError::EmptyHistory);
}

#[test]
fn same_seed_same_series() {
    assert_eq!(history(42, 2100), history(42, 2100));
    assert_ne!(history(42, 2100), history(43, 2100));
}

#[test]
fn tiny_bases_round_to_nearby_whole_prices() {
    for base in [1u64, 2, 3, 10] {
        for p in history(base, base).points {
            assert!(p.price <= base * 2);
        }
    }
}

#[test]
fn zero_noise_config_is_deterministic_curve() {
    let cfg = GeneratorConfig { history_noise: 0.0, history_trend: 0.0, ..GeneratorConfig::default() };
    let g = SeriesGenerator::new(cfg);
    let mut rng = StdRng::seed_from_u64(0);
    let h = g.historical(start(), 60, 1000, &mut rng);
    assert_eq!(h.points[0].price, 1000);
    // i = 22: 1000 * (1 + 0.08 * sin(2*pi*22/90)) = 1079.9...
    assert_eq!(h.points[22].price, 1080);
}
