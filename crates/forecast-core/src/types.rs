// File: crates/forecast-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, marker sizes).

use serde::Deserialize;

use crate::error::{ForecastError, Result};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 400;

/// Radius of a point marker; also the hover hit radius.
pub const MARKER_RADIUS: f64 = 6.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(80, 60, 40, 60)
    }
}

/// Canvas and layout knobs for the price chart.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    /// Number of intervals between horizontal grid lines.
    pub grid_divisions: usize,
    /// Number of intervals between date labels.
    pub date_divisions: usize,
    /// Fractional padding applied below the minimum and above the maximum price.
    pub price_margin: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            grid_divisions: 6,
            date_divisions: 6,
            price_margin: 0.10,
        }
    }
}

impl ChartOptions {
    pub fn plot_width(&self) -> f64 {
        self.width.saturating_sub(self.insets.hsum()) as f64
    }

    pub fn plot_height(&self) -> f64 {
        self.height.saturating_sub(self.insets.vsum()) as f64
    }

    /// Margin must lie in `[0, 1)` and both division counts must be non-zero.
    pub fn validate(&self) -> Result<()> {
        if !(self.price_margin.is_finite() && (0.0..1.0).contains(&self.price_margin)) {
            return Err(ForecastError::InvalidConfig(format!(
                "price_margin must be in [0, 1), got {}",
                self.price_margin
            )));
        }
        if self.grid_divisions == 0 || self.date_divisions == 0 {
            return Err(ForecastError::InvalidConfig("grid_divisions and date_divisions must be at least 1".into()));
        }
        Ok(())
    }
}
