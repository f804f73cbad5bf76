// File: crates/forecast-core/src/svg.rs
// Summary: Serializes chart geometry (plus optional tooltip) into standalone SVG markup.

use std::fmt::Write as _;

use crate::dates::format_date;
use crate::interaction::Tooltip;
use crate::layout::{ChartGeometry, ScreenPoint};
use crate::text::format_rupees;
use crate::theme::Theme;
use crate::types::{ChartOptions, MARKER_RADIUS};

/// Escape text content and attribute values.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render_svg(geo: &ChartGeometry, opts: &ChartOptions, theme: &Theme, tooltip: Option<&Tooltip>) -> String {
    let (w, h) = (opts.width, opts.height);
    let p = &geo.plot;
    let mut s = String::with_capacity(16 * 1024);

    // write! into a String cannot fail
    let _ = writeln!(
        s,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="sans-serif" font-size="14">"#
    );
    let _ = writeln!(s, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background);

    for g in &geo.grid_lines {
        let _ = writeln!(
            s,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="1" stroke-dasharray="4"/>"#,
            p.left, g.y, p.right, g.y, theme.grid
        );
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="end" fill="{}">{}</text>"#,
            p.left - 10.0, g.y + 4.0, theme.tick, escape(&format_rupees(g.price))
        );
    }
    for d in &geo.date_labels {
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}">{}</text>"#,
            d.x, p.bottom + 20.0, theme.tick, format_date(d.date)
        );
    }

    // axes
    let _ = writeln!(
        s,
        r#"<line x1="{l:.2}" y1="{t:.2}" x2="{l:.2}" y2="{b:.2}" stroke="{c}" stroke-width="2"/>"#,
        l = p.left, t = p.top, b = p.bottom, c = theme.axis_line
    );
    let _ = writeln!(
        s,
        r#"<line x1="{l:.2}" y1="{b:.2}" x2="{r:.2}" y2="{b:.2}" stroke="{c}" stroke-width="2"/>"#,
        l = p.left, r = p.right, b = p.bottom, c = theme.axis_line
    );

    if !geo.historical_path.is_empty() {
        let _ = writeln!(
            s,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="3"/>"#,
            geo.historical_path, theme.historical
        );
    }
    if !geo.forecast_path.is_empty() {
        let _ = writeln!(
            s,
            r#"<path d="{}" fill="none" stroke="{}" stroke-width="3" stroke-dasharray="6"/>"#,
            geo.forecast_path, theme.forecast
        );
    }

    write_markers(&mut s, &geo.historical, theme.historical, "hist");
    write_markers(&mut s, &geo.forecast, theme.forecast, "pred");

    if let Some(t) = tooltip {
        let _ = writeln!(s, "<g class=\"tooltip\">");
        let _ = writeln!(
            s,
            r#"<rect x="{:.2}" y="{:.2}" width="{:.0}" height="{:.0}" fill="{}" rx="6"/>"#,
            t.rect.left, t.rect.top, t.rect.width(), t.rect.height(), theme.tooltip_fill
        );
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}" font-weight="500">{}</text>"#,
            t.x, t.y - 22.0, theme.tooltip_text, escape(&t.date_text)
        );
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}">{}</text>"#,
            t.x, t.y - 8.0, theme.tooltip_text, escape(&t.price_text)
        );
        let _ = writeln!(s, "</g>");
    }

    write_legend(&mut s, geo, theme);

    let _ = writeln!(
        s,
        r#"<text x="{:.2}" y="{:.2}" text-anchor="middle" fill="{}">Date</text>"#,
        w as f64 / 2.0, h as f64 - 10.0, theme.axis_label
    );
    let _ = writeln!(
        s,
        r#"<text x="{:.2}" y="25" text-anchor="middle" transform="rotate(-90)" fill="{}">Price (₹/quintal)</text>"#,
        -(h as f64) / 2.0, theme.axis_label
    );
    s.push_str("</svg>\n");
    s
}

/// Swatches above the plot: solid for history, dashed for the forecast.
fn write_legend(s: &mut String, geo: &ChartGeometry, theme: &Theme) {
    let y = geo.plot.top / 2.0;
    let entries = [
        ("Historical Data", theme.historical, ""),
        ("Predicted Prices", theme.forecast, r#" stroke-dasharray="6""#),
    ];
    let _ = writeln!(s, "<g class=\"legend\">");
    for (i, (label, color, dash)) in entries.iter().enumerate() {
        let x = geo.plot.left + i as f64 * 180.0;
        let _ = writeln!(
            s,
            r#"<line x1="{:.2}" y1="{y:.2}" x2="{:.2}" y2="{y:.2}" stroke="{color}" stroke-width="3"{dash}/>"#,
            x, x + 24.0
        );
        let _ = writeln!(
            s,
            r#"<text x="{:.2}" y="{:.2}" fill="{}">{label}</text>"#,
            x + 32.0, y + 5.0, theme.axis_label
        );
    }
    let _ = writeln!(s, "</g>");
}

fn write_markers(s: &mut String, points: &[ScreenPoint], fill: &str, id_prefix: &str) {
    for pt in points {
        let _ = writeln!(
            s,
            r#"<circle id="{id_prefix}-{}" cx="{:.2}" cy="{:.2}" r="{MARKER_RADIUS}" fill="{fill}"/>"#,
            pt.offset, pt.x, pt.y
        );
    }
}
