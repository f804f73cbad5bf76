// File: crates/forecast-core/src/chart.rs
// Summary: ForecastChart bundles geometry, options, theme and hover state, and writes SVG files.

use anyhow::Result;

use crate::interaction::{HoverState, HoverTarget};
use crate::layout::{layout, ChartGeometry};
use crate::series::Series;
use crate::svg::render_svg;
use crate::theme::Theme;
use crate::types::ChartOptions;

pub struct ForecastChart {
    pub geometry: ChartGeometry,
    pub options: ChartOptions,
    pub theme: Theme,
    pub hover: HoverState,
}

impl ForecastChart {
    /// Lay out both series with `options`; fails when both are empty.
    pub fn new(historical: &Series, forecast: &Series, options: ChartOptions) -> crate::error::Result<Self> {
        Ok(Self {
            geometry: layout(historical, forecast, &options)?,
            options,
            theme: Theme::default(),
            hover: HoverState::new(),
        })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn set_hover(&mut self, target: Option<HoverTarget>) {
        self.hover.set_hover(target);
    }

    /// Render to an in-memory SVG document, including the tooltip when hovering.
    pub fn render_svg_string(&self) -> String {
        let tooltip = self.hover.tooltip(&self.geometry);
        render_svg(&self.geometry, &self.options, &self.theme, tooltip.as_ref())
    }

    /// Render the chart to an SVG file at `output_svg_path`.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_svg_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_svg_string())?;
        Ok(())
    }
}
