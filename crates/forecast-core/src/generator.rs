// File: crates/forecast-core/src/generator.rs
// Summary: Synthetic price series: noisy seasonal history and its forecast continuation.
// Notes:
// - Placeholder stochastic process, not a fitted model. Output is fully determined
//   by the injected `Rng`, so a seeded generator reproduces the same series.

use std::f64::consts::PI;

use chrono::NaiveDate;
use rand::Rng;
use serde::Deserialize;
use tracing::debug;

use crate::dates::add_days;
use crate::error::{ForecastError, Result};
use crate::series::{PricePoint, Series, SeriesKind};

/// Default number of historical days.
pub const HISTORY_DAYS: usize = 60;
/// Default forecast horizon in days.
pub const FORECAST_DAYS: usize = 90;
/// Length of one seasonal cycle in days (three months).
pub const SEASONAL_PERIOD_DAYS: f64 = 90.0;

/// Coefficients of the synthetic process.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub history_days: usize,
    pub forecast_days: usize,
    pub seasonal_period: f64,
    pub seasonal_amplitude: f64,
    /// Half-width of the uniform noise on historical prices.
    pub history_noise: f64,
    pub history_trend: f64,
    /// Half-width of the uniform noise on forecast prices.
    pub forecast_noise: f64,
    pub forecast_trend: f64,
    /// Extra noise scaling reached at the end of the horizon.
    pub volatility_growth: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_days: HISTORY_DAYS,
            forecast_days: FORECAST_DAYS,
            seasonal_period: SEASONAL_PERIOD_DAYS,
            seasonal_amplitude: 0.08,
            history_noise: 0.10,
            history_trend: 0.0005,
            forecast_noise: 0.05,
            forecast_trend: 0.001,
            volatility_growth: 0.05,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.history_days == 0 {
            return Err(ForecastError::InvalidConfig("history_days must be at least 1".into()));
        }
        if !(self.seasonal_period.is_finite() && self.seasonal_period > 0.0) {
            return Err(ForecastError::InvalidConfig("seasonal_period must be positive".into()));
        }
        let coeffs = [
            self.seasonal_amplitude,
            self.history_noise,
            self.history_trend,
            self.forecast_noise,
            self.forecast_trend,
            self.volatility_growth,
        ];
        if coeffs.iter().any(|c| !c.is_finite() || *c < 0.0) {
            return Err(ForecastError::InvalidConfig("coefficients must be finite and non-negative".into()));
        }
        Ok(())
    }
}

/// Uniform draw in `[-half, half)`.
#[inline]
fn symmetric_noise<R: Rng>(rng: &mut R, half: f64) -> f64 {
    rng.gen::<f64>() * 2.0 * half - half
}

#[inline]
fn to_price(v: f64) -> u64 {
    v.round().max(0.0) as u64
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SeriesGenerator {
    pub config: GeneratorConfig,
}

impl SeriesGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[inline]
    fn seasonal(&self, i: usize) -> f64 {
        (i as f64 / self.config.seasonal_period * 2.0 * PI).sin() * self.config.seasonal_amplitude
    }

    /// `count` daily prices starting at `start`, scattered around `base_price`.
    pub fn historical<R: Rng>(
        &self,
        start: NaiveDate,
        count: usize,
        base_price: u64,
        rng: &mut R,
    ) -> Series {
        let c = &self.config;
        let base = base_price as f64;
        let points = (0..count)
            .map(|i| {
                let random = symmetric_noise(rng, c.history_noise);
                let trend = c.history_trend * i as f64;
                PricePoint {
                    index: i,
                    date: add_days(start, i as i64),
                    price: to_price(base * (1.0 + random + self.seasonal(i) + trend)),
                    is_forecast: false,
                }
            })
            .collect::<Vec<_>>();
        debug!(count, base_price, %start, "generated historical series");
        Series::with_points(SeriesKind::Historical, points)
    }

    /// `horizon` daily prices continuing from the last historical point.
    pub fn forecast<R: Rng>(
        &self,
        historical: &Series,
        horizon: usize,
        rng: &mut R,
    ) -> Result<Series> {
        let last = historical.last().ok_or(ForecastError::EmptyHistory)?;
        let c = &self.config;
        let anchor = last.price as f64;
        let points = (0..horizon)
            .map(|i| {
                let random = symmetric_noise(rng, c.forecast_noise);
                let trend = c.forecast_trend * i as f64;
                let volatility = (1.0 + (i as f64 / horizon as f64) * c.volatility_growth) * random;
                PricePoint {
                    index: last.index + 1 + i,
                    date: add_days(last.date, i as i64 + 1),
                    price: to_price(anchor * (1.0 + volatility + self.seasonal(i) + trend)),
                    is_forecast: true,
                }
            })
            .collect::<Vec<_>>();
        debug!(horizon, anchor = last.price, "generated forecast series");
        Ok(Series::with_points(SeriesKind::Forecast, points))
    }
}

/// Free-function form of [`SeriesGenerator::historical`] with default coefficients.
pub fn generate_historical_series<R: Rng>(
    start: NaiveDate,
    count: usize,
    base_price: u64,
    rng: &mut R,
) -> Series {
    SeriesGenerator::default().historical(start, count, base_price, rng)
}

/// Free-function form of [`SeriesGenerator::forecast`] with default coefficients.
pub fn generate_forecast<R: Rng>(historical: &Series, horizon: usize, rng: &mut R) -> Result<Series> {
    SeriesGenerator::default().forecast(historical, horizon, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn noise_stays_in_half_open_band() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..10_000 {
            let v = symmetric_noise(&mut rng, 0.05);
            assert!((-0.05..0.05).contains(&v));
        }
    }

    #[test]
    fn seasonal_term_completes_a_cycle() {
        let g = SeriesGenerator::default();
        assert_eq!(g.seasonal(0), 0.0);
        assert!((g.seasonal(22) - 0.08 * (22.0f64 / 90.0 * 2.0 * PI).sin()).abs() < 1e-12);
        assert!(g.seasonal(90).abs() < 1e-12);
    }

    #[test]
    fn default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
        let bad = GeneratorConfig { seasonal_period: 0.0, ..GeneratorConfig::default() };
        assert!(matches!(bad.validate(), Err(ForecastError::InvalidConfig(_))));
    }
}
