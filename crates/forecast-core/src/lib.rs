// File: crates/forecast-core/src/lib.rs
// Summary: Core library entry point; exports the series generator, chart layout and SVG output.

pub mod chart;
pub mod dates;
pub mod error;
pub mod generator;
pub mod geometry;
pub mod grid;
pub mod insights;
pub mod interaction;
pub mod layout;
pub mod region;
pub mod scale;
pub mod series;
pub mod state;
pub mod svg;
pub mod text;
pub mod theme;
pub mod types;

pub use chart::ForecastChart;
pub use dates::{add_days, format_date};
pub use error::ForecastError;
pub use generator::{generate_forecast, generate_historical_series, GeneratorConfig, SeriesGenerator};
pub use insights::Insights;
pub use interaction::{HoverState, HoverTarget, Tooltip};
pub use layout::{layout, ChartGeometry};
pub use region::{adjusted_base_price, multiplier_for, Region};
pub use series::{PricePoint, Series, SeriesKind};
pub use state::{parse_base_price, ForecastState, InputChange, ReduceContext};
pub use theme::Theme;
pub use types::{ChartOptions, Insets};
