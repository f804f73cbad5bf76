// File: crates/forecast-core/src/theme.rs
// Summary: Light/Dark theming for SVG chart colors.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub background: &'static str,
    pub grid: &'static str,
    pub axis_line: &'static str,
    pub axis_label: &'static str,
    pub tick: &'static str,
    pub historical: &'static str,
    pub forecast: &'static str,
    pub tooltip_fill: &'static str,
    pub tooltip_text: &'static str,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: "#ffffff",
            grid: "#e5e7eb",
            axis_line: "#94a3b8",
            axis_label: "#374151",
            tick: "#4b5563",
            historical: "#2563eb",
            forecast: "#dc2626",
            tooltip_fill: "rgba(0,0,0,0.8)",
            tooltip_text: "#ffffff",
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: "#121214",
            grid: "#28282d",
            axis_line: "#b4b4be",
            axis_label: "#ebebf5",
            tick: "#9696a0",
            historical: "#40a0ff",
            forecast: "#dc5050",
            tooltip_fill: "rgba(255,255,255,0.9)",
            tooltip_text: "#121214",
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: "#000000",
            grid: "#222222",
            axis_line: "#ffffff",
            axis_label: "#ffffff",
            tick: "#cccccc",
            historical: "#00ffff",
            forecast: "#ffff00",
            tooltip_fill: "#ffffff",
            tooltip_text: "#000000",
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Theme::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
