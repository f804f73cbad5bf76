// File: crates/demo/src/config.rs
// Summary: Optional TOML configuration for generator coefficients and chart layout.

use anyhow::{Context, Result};
use forecast_core::{ChartOptions, GeneratorConfig};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub generator: GeneratorConfig,
    pub chart: ChartOptions,
    pub theme: Option<String>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let cfg: Config = toml::from_str(raw)?;
        cfg.generator.validate()?;
        cfg.chart.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_means_defaults() {
        let cfg = Config::from_toml("").unwrap();
        assert_eq!(cfg.generator, GeneratorConfig::default());
        assert_eq!(cfg.chart, ChartOptions::default());
        assert!(cfg.theme.is_none());
    }

    #[test]
    fn partial_tables_override_fields() {
        let cfg = Config::from_toml(
            r#"
            theme = "dark"

            [generator]
            forecast_days = 30
            seasonal_period = 45.0

            [chart]
            width = 1024
            "#,
        )
        .unwrap();
        assert_eq!(cfg.generator.forecast_days, 30);
        assert_eq!(cfg.generator.seasonal_period, 45.0);
        assert_eq!(cfg.generator.history_days, 60);
        assert_eq!(cfg.chart.width, 1024);
        assert_eq!(cfg.chart.height, 400);
        assert_eq!(cfg.theme.as_deref(), Some("dark"));
    }

    #[test]
    fn invalid_coefficients_are_rejected() {
        assert!(Config::from_toml("[generator]\nhistory_days = 0\n").is_err());
    }

    #[test]
    fn invalid_chart_options_are_rejected() {
        assert!(Config::from_toml("[chart]\nprice_margin = -0.1\n").is_err());
        assert!(Config::from_toml("[chart]\nprice_margin = 1.0\n").is_err());
        assert!(Config::from_toml("[chart]\nprice_margin = nan\n").is_err());
        assert!(Config::from_toml("[chart]\ngrid_divisions = 0\n").is_err());
        assert!(Config::from_toml("[chart]\ndate_divisions = 0\n").is_err());
        assert!(Config::from_toml("[chart]\nprice_margin = 0.25\n").is_ok());
    }
}
