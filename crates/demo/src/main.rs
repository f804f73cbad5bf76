// File: crates/demo/src/main.rs
// Summary: CLI that simulates a crop price forecast and writes the chart as SVG (plus optional CSV).

mod config;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use forecast_core::text::{format_percent, format_rupees};
use forecast_core::{
    format_date, parse_base_price, theme, ForecastChart, ForecastState, HoverTarget, InputChange, ReduceContext,
    Region, Series, SeriesGenerator, SeriesKind,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(version, about = "Simulated crop price forecast rendered as an SVG chart")]
struct Args {
    /// Crop name, e.g. Wheat
    #[arg(long)]
    crop: String,

    /// Region (one of the 12 supported states; unknown names use multiplier 1.0)
    #[arg(long, default_value = "Maharashtra")]
    region: String,

    /// Base price in rupees per quintal
    #[arg(long, default_value = "2000")]
    base_price: String,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Reference date (YYYY-MM-DD); history ends the day before
    #[arg(long)]
    today: Option<NaiveDate>,

    /// Path to TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Theme preset (light, dark, high-contrast); overrides config
    #[arg(long)]
    theme: Option<String>,

    /// Render the tooltip for this combined point index
    #[arg(long)]
    hover: Option<usize>,

    /// Output directory
    #[arg(long, default_value = "target/out")]
    out: PathBuf,

    /// Also write the series as CSV
    #[arg(long)]
    csv: bool,
}

#[derive(Serialize)]
struct CsvRow {
    index: usize,
    date: String,
    price: u64,
    is_forecast: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
    let args = Args::parse();

    let cfg = match &args.config {
        Some(path) => config::Config::from_file(path)?,
        None => config::Config::default(),
    };
    let base_price = parse_base_price(&args.base_price)?;
    if args.region.parse::<Region>().is_err() {
        warn!(region = %args.region, "unknown region, using multiplier 1.0");
    }

    let generator = SeriesGenerator::new(cfg.generator);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let today = args.today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let mut ctx = ReduceContext { today, generator: &generator, rng: &mut rng };

    let state = [
        InputChange::Region(args.region.clone()),
        InputChange::BasePrice(base_price),
        InputChange::CropName(args.crop.clone()),
    ]
    .into_iter()
    .fold(ForecastState::default(), |s, change| s.reduce(change, &mut ctx));

    let (historical, forecast) = match (&state.historical, &state.forecast) {
        (Some(h), Some(f)) => (h, f),
        _ => anyhow::bail!("crop name must not be empty"),
    };
    info!(seed_price = state.seed_price(), points = historical.len() + forecast.len(), "series ready");

    print_insights(&state);

    let theme_name = args.theme.as_deref().or(cfg.theme.as_deref()).unwrap_or("light");
    let mut chart = ForecastChart::new(historical, forecast, cfg.chart)?.with_theme(theme::find(theme_name));
    if let Some(i) = args.hover {
        chart.set_hover(Some(hover_target(i, historical.len())));
    }

    let out_svg = out_name(&args.out, &state.crop_name, "svg");
    chart
        .render_to_svg(&out_svg)
        .with_context(|| format!("writing {}", out_svg.display()))?;
    println!("Wrote {}", out_svg.display());

    if args.csv {
        let out_csv = out_name(&args.out, &state.crop_name, "csv");
        write_csv(&out_csv, historical, forecast)
            .with_context(|| format!("writing {}", out_csv.display()))?;
        println!("Wrote {}", out_csv.display());
    }
    Ok(())
}

fn print_insights(state: &ForecastState) {
    let Some(insights) = state.insights() else { return };
    println!("Price trends & predictions for {} ({})", state.crop_name, state.region);
    println!("  Current: {}", format_rupees(insights.current_price as i64));
    for m in &insights.months {
        let change = m.change_percent.map(format_percent).unwrap_or_else(|| "n/a".to_string());
        let arrow = if m.is_rise() { '▲' } else { '▼' };
        println!("  {} forecast: {} {arrow} {}%", m.label(), format_rupees(m.price as i64), change);
    }
    if let Some(summary) = insights.summary(&state.crop_name, &state.region) {
        println!();
        println!("{summary}");
    }
}

/// Combined point index -> series-local hover target.
fn hover_target(index: usize, historical_len: usize) -> HoverTarget {
    if index < historical_len {
        HoverTarget { kind: SeriesKind::Historical, offset: index }
    } else {
        HoverTarget { kind: SeriesKind::Forecast, offset: index - historical_len }
    }
}

/// Produce output file name like <dir>/forecast_<crop>.<ext>
fn out_name(dir: &Path, crop: &str, ext: &str) -> PathBuf {
    let slug = crop
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect::<String>();
    let slug = if slug.is_empty() { "crop".to_string() } else { slug };
    dir.join(format!("forecast_{slug}.{ext}"))
}

fn write_csv(path: &Path, historical: &Series, forecast: &Series) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut wtr = csv::Writer::from_path(path)?;
    for p in historical.points.iter().chain(forecast.points.iter()) {
        wtr.serialize(CsvRow {
            index: p.index,
            date: format_date(p.date),
            price: p.price,
            is_forecast: p.is_forecast,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_name_slugs_crop() {
        let p = out_name(Path::new("target/out"), "Basmati Rice", "svg");
        assert_eq!(p, PathBuf::from("target/out/forecast_basmati_rice.svg"));
        assert_eq!(out_name(Path::new("o"), "  ", "csv"), PathBuf::from("o/forecast_crop.csv"));
    }

    #[test]
    fn hover_index_splits_at_history() {
        assert_eq!(hover_target(59, 60), HoverTarget { kind: SeriesKind::Historical, offset: 59 });
        assert_eq!(hover_target(60, 60), HoverTarget { kind: SeriesKind::Forecast, offset: 0 });
    }

    #[test]
    fn csv_export_has_one_row_per_point() {
        let g = SeriesGenerator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let h = g.historical(NaiveDate::from_ymd_opt(2024, 8, 20).unwrap(), 60, 2100, &mut rng);
        let f = g.forecast(&h, 90, &mut rng).unwrap();

        let out = PathBuf::from("target/test_out/forecast_export.csv");
        write_csv(&out, &h, &f).expect("write csv");
        let body = std::fs::read_to_string(&out).expect("csv exists");
        let lines = body.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "index,date,price,is_forecast");
        assert_eq!(lines.len(), 1 + 150);
        assert!(lines[1].starts_with("0,2024-08-20,"));
        assert!(lines[60].ends_with(",false"));
        assert!(lines[61].starts_with("60,2024-10-19,"));
        assert!(lines[150].ends_with(",true"));
    }

    #[test]
    fn args_parse_with_defaults() {
        let args = Args::try_parse_from(["crop-forecast", "--crop", "Wheat", "--seed", "7", "--today", "2024-10-19"]).unwrap();
        assert_eq!(args.region, "Maharashtra");
        assert_eq!(args.base_price, "2000");
        assert_eq!(args.today, NaiveDate::from_ymd_opt(2024, 10, 19));
        assert!(!args.csv);
    }
}
