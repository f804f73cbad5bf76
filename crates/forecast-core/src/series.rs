// File: crates/forecast-core/src/series.rs
// Summary: Price series model shared by the generator, layout and exports.

use chrono::NaiveDate;

/// Which half of the chart a series or point belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeriesKind {
    Historical,
    Forecast,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricePoint {
    /// Position in the combined historical + forecast sequence.
    pub index: usize,
    pub date: NaiveDate,
    /// Whole rupees per quintal.
    pub price: u64,
    pub is_forecast: bool,
}

/// Chronologically ordered points of one kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Series {
    pub kind: SeriesKind,
    pub points: Vec<PricePoint>,
}

impl Series {
    pub fn new(kind: SeriesKind) -> Self {
        Self { kind, points: Vec::new() }
    }

    pub fn with_points(kind: SeriesKind, points: Vec<PricePoint>) -> Self {
        Self { kind, points }
    }

    pub fn len(&self) -> usize { self.points.len() }

    pub fn is_empty(&self) -> bool { self.points.is_empty() }

    pub fn first(&self) -> Option<&PricePoint> { self.points.first() }

    pub fn last(&self) -> Option<&PricePoint> { self.points.last() }

    pub fn get(&self, i: usize) -> Option<&PricePoint> { self.points.get(i) }

    pub fn prices(&self) -> impl Iterator<Item = u64> + '_ {
        self.points.iter().map(|p| p.price)
    }

    /// Min and max price, or `None` for an empty series.
    pub fn price_range(&self) -> Option<(u64, u64)> {
        let min = self.prices().min()?;
        let max = self.prices().max()?;
        Some((min, max))
    }
}
