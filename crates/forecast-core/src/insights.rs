// File: crates/forecast-core/src/insights.rs
// Summary: One/two/three month forecast cards and the market summary sentence.

use crate::series::Series;
use crate::text::{format_percent_short, format_rupees, round_tenths};

/// Forecast offsets (0-based days into the horizon) shown as monthly cards.
pub const MONTH_OFFSETS: [(u8, usize); 3] = [(1, 29), (2, 59), (3, 89)];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonthInsight {
    pub months: u8,
    pub price: u64,
    /// Percent change against the current price; `None` when the current price is zero.
    pub change_percent: Option<f64>,
}

impl MonthInsight {
    pub fn label(&self) -> String {
        if self.months == 1 { "1 Month".to_string() } else { format!("{} Months", self.months) }
    }

    /// Direction as displayed: the change rounded to tenths, so `-0.04` counts as a rise.
    pub fn is_rise(&self) -> bool {
        self.change_percent.map_or(false, |c| round_tenths(c) >= 0.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Insights {
    pub current_price: u64,
    pub months: Vec<MonthInsight>,
}

/// `(new - old) / old * 100`, or `None` when `old` is zero.
pub fn change_percent(new: u64, old: u64) -> Option<f64> {
    if old == 0 { return None; }
    Some((new as f64 - old as f64) / old as f64 * 100.0)
}

impl Insights {
    /// Cards for every monthly offset the forecast covers. `None` without data.
    pub fn from_series(historical: &Series, forecast: &Series) -> Option<Self> {
        let current_price = historical.last()?.price;
        if forecast.is_empty() { return None; }
        let months = MONTH_OFFSETS
            .iter()
            .filter_map(|&(months, offset)| {
                let price = forecast.get(offset)?.price;
                Some(MonthInsight { months, price, change_percent: change_percent(price, current_price) })
            })
            .collect();
        Some(Self { current_price, months })
    }

    /// Longest-horizon card available.
    pub fn horizon(&self) -> Option<&MonthInsight> {
        self.months.last()
    }

    /// Market summary for the longest horizon.
    pub fn summary(&self, crop: &str, region: &str) -> Option<String> {
        let h = self.horizon()?;
        let change = h.change_percent?;
        let (verb, noun) = if h.is_rise() { ("increase", "rise") } else { ("decrease", "decline") };
        Some(format!(
            "Based on our ARIMA model analysis, {} prices in {} are expected to {} over the next {}. \
             The model predicts a price of {}/quintal by the end of this period, representing a {}% {} from current prices.",
            crop.to_lowercase(),
            region,
            verb,
            horizon_words(h.months),
            format_rupees(h.price as i64),
            format_percent_short(change.abs()),
            noun,
        ))
    }
}

fn horizon_words(months: u8) -> String {
    match months {
        1 => "month".to_string(),
        2 => "two months".to_string(),
        3 => "three months".to_string(),
        n => format!("{n} months"),
    }
}
