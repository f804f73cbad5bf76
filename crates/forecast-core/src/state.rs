// File: crates/forecast-core/src/state.rs
// Summary: Explicit form state and the pure reducer that regenerates series on input change.

use chrono::NaiveDate;
use rand::Rng;
use tracing::{info, warn};

use crate::dates::add_days;
use crate::error::{ForecastError, Result};
use crate::generator::SeriesGenerator;
use crate::insights::Insights;
use crate::region::{adjusted_base_price, Region};
use crate::series::Series;

/// Default base price in rupees per quintal.
pub const DEFAULT_BASE_PRICE: u32 = 2000;

/// One edit from the form.
#[derive(Clone, Debug, PartialEq)]
pub enum InputChange {
    CropName(String),
    Region(String),
    BasePrice(u32),
}

/// Everything the reducer needs besides the previous state.
pub struct ReduceContext<'a, R: Rng> {
    pub today: NaiveDate,
    pub generator: &'a SeriesGenerator,
    pub rng: &'a mut R,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ForecastState {
    pub crop_name: String,
    pub region: String,
    pub base_price: u32,
    pub historical: Option<Series>,
    pub forecast: Option<Series>,
}

impl Default for ForecastState {
    fn default() -> Self {
        Self {
            crop_name: String::new(),
            region: Region::Maharashtra.name().to_string(),
            base_price: DEFAULT_BASE_PRICE,
            historical: None,
            forecast: None,
        }
    }
}

/// Form-boundary parse: positive whole number or `InvalidBasePrice`.
pub fn parse_base_price(raw: &str) -> Result<u32> {
    let trimmed = raw.trim();
    match trimmed.parse::<u32>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(ForecastError::InvalidBasePrice(trimmed.to_string())),
    }
}

impl ForecastState {
    /// Seed price after the regional multiplier.
    pub fn seed_price(&self) -> u64 {
        adjusted_base_price(self.base_price, &self.region)
    }

    /// Apply `change` and regenerate both series in full.
    pub fn reduce<R: Rng>(&self, change: InputChange, ctx: &mut ReduceContext<'_, R>) -> ForecastState {
        let mut next = ForecastState { historical: None, forecast: None, ..self.clone() };
        match change {
            InputChange::CropName(name) => next.crop_name = name,
            InputChange::Region(region) => next.region = region,
            InputChange::BasePrice(price) => next.base_price = price,
        }
        next.regenerate(ctx);
        next
    }

    fn regenerate<R: Rng>(&mut self, ctx: &mut ReduceContext<'_, R>) {
        if self.crop_name.trim().is_empty() || self.base_price == 0 {
            return;
        }
        let generator = ctx.generator;
        let cfg = &generator.config;
        let seed = self.seed_price();
        let start = add_days(ctx.today, -(cfg.history_days as i64));
        let historical = generator.historical(start, cfg.history_days, seed, &mut *ctx.rng);
        match generator.forecast(&historical, cfg.forecast_days, &mut *ctx.rng) {
            Ok(forecast) => {
                self.historical = Some(historical);
                self.forecast = Some(forecast);
                info!(crop = %self.crop_name, region = %self.region, seed, "regenerated forecast");
            }
            Err(err) => warn!(%err, history_days = cfg.history_days, "skipped regeneration"),
        }
    }

    pub fn insights(&self) -> Option<Insights> {
        Insights::from_series(self.historical.as_ref()?, self.forecast.as_ref()?)
    }
}
