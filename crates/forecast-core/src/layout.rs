// File: crates/forecast-core/src/layout.rs
// Summary: Maps historical and forecast series to screen geometry (points, paths, grid, labels).

use std::fmt::Write as _;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{ForecastError, Result};
use crate::geometry::RectF;
use crate::grid::{linspace, sample_index};
use crate::scale::{IndexScale, ValueScale};
use crate::series::{Series, SeriesKind};
use crate::types::ChartOptions;

/// A price point placed on the canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub kind: SeriesKind,
    /// Position within its own series.
    pub offset: usize,
    /// Position in the combined sequence.
    pub index: usize,
    pub date: NaiveDate,
    pub price: u64,
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub price: i64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DateLabel {
    pub date: NaiveDate,
    pub x: f64,
}

/// Drawable view over one historical + forecast pair. Owns nothing the series own.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    pub plot: RectF,
    /// Padded price bounds (bottom, top of the plot).
    pub min_price: f64,
    pub max_price: f64,
    pub historical: Vec<ScreenPoint>,
    pub forecast: Vec<ScreenPoint>,
    pub historical_path: String,
    pub forecast_path: String,
    pub grid_lines: Vec<GridLine>,
    pub date_labels: Vec<DateLabel>,
}

impl ChartGeometry {
    pub fn points(&self, kind: SeriesKind) -> &[ScreenPoint] {
        match kind {
            SeriesKind::Historical => &self.historical,
            SeriesKind::Forecast => &self.forecast,
        }
    }

    pub fn point(&self, kind: SeriesKind, offset: usize) -> Option<&ScreenPoint> {
        self.points(kind).get(offset)
    }

    pub fn all_points(&self) -> impl Iterator<Item = &ScreenPoint> {
        self.historical.iter().chain(self.forecast.iter())
    }
}

/// `M x y L x y ...` polyline through the points; empty for no points.
pub fn polyline_path(points: &[ScreenPoint]) -> String {
    let mut d = String::with_capacity(points.len() * 20);
    for (i, p) in points.iter().enumerate() {
        if i > 0 { d.push(' '); }
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd} {:.2} {:.2}", p.x, p.y);
    }
    d
}

/// Lay out both series on one canvas. Fails on invalid options or when there is nothing to place.
pub fn layout(historical: &Series, forecast: &Series, opts: &ChartOptions) -> Result<ChartGeometry> {
    opts.validate()?;
    let (lo, hi) = match (historical.price_range(), forecast.price_range()) {
        (Some((a, b)), Some((c, d))) => (a.min(c), b.max(d)),
        (Some(r), None) | (None, Some(r)) => r,
        (None, None) => return Err(ForecastError::InvalidInput("no prices to lay out")),
    };
    let min_price = lo as f64 * (1.0 - opts.price_margin);
    let max_price = hi as f64 * (1.0 + opts.price_margin);

    let left = opts.insets.left as f64;
    let top = opts.insets.top as f64;
    let plot = RectF::from_ltwh(left, top, opts.plot_width(), opts.plot_height());

    let total = historical.len() + forecast.len();
    let xs = IndexScale::new(plot.left, plot.right, total);
    let ys = ValueScale::new_linear(plot.top, plot.bottom, min_price, max_price);

    let place = |series: &Series, first_index: usize| -> Vec<ScreenPoint> {
        series
            .points
            .iter()
            .enumerate()
            .map(|(offset, p)| {
                let index = first_index + offset;
                ScreenPoint {
                    kind: series.kind,
                    offset,
                    index,
                    date: p.date,
                    price: p.price,
                    x: xs.to_px(index as f64),
                    y: ys.to_px(p.price as f64),
                }
            })
            .collect()
    };
    let hist_pts = place(historical, 0);
    let fc_pts = place(forecast, historical.len());

    let divisions = opts.grid_divisions;
    let step = (max_price - min_price) / divisions as f64;
    let grid_lines = linspace(plot.top, plot.bottom, divisions + 1)
        .into_iter()
        .enumerate()
        .map(|(i, y)| GridLine { price: (max_price - i as f64 * step).round() as i64, y })
        .collect();

    // evenly spaced over the historical span; each names the sampled day at or before it
    let date_labels = if historical.is_empty() {
        Vec::new()
    } else {
        let n = opts.date_divisions;
        let last = (historical.len() - 1) as f64;
        linspace(xs.to_px(0.0), xs.to_px(last), n + 1)
            .into_iter()
            .enumerate()
            .map(|(i, x)| DateLabel { date: historical.points[sample_index(i, n, historical.len())].date, x })
            .collect()
    };

    debug!(total, min_price, max_price, "laid out chart geometry");
    Ok(ChartGeometry {
        plot,
        min_price,
        max_price,
        historical_path: polyline_path(&hist_pts),
        forecast_path: polyline_path(&fc_pts),
        historical: hist_pts,
        forecast: fc_pts,
        grid_lines,
        date_labels,
    })
}
