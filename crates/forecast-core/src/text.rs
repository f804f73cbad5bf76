// File: crates/forecast-core/src/text.rs
// Summary: Label text formatting for prices and percentages.

/// Currency sign used on every price label.
pub const RUPEE: char = '₹';

/// Whole number with comma thousands separators: `1234567` -> `1,234,567`.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 { out.push('-'); }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 { out.push(','); }
        out.push(ch);
    }
    out
}

/// `₹2,100`
pub fn format_rupees(value: i64) -> String {
    format!("{RUPEE}{}", group_thousands(value))
}

/// Nearest tenth, ties away from zero (`4.25` -> `4.3`).
pub fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One decimal place, matching the insight cards: `4.3`, `-0.7`, `12.0`.
pub fn format_percent(value: f64) -> String {
    format!("{:.1}", round_tenths(value))
}

/// Tenths without a trailing `.0`, as the summary sentence prints them: `12`, `4.3`.
pub fn format_percent_short(value: f64) -> String {
    format!("{}", round_tenths(value))
}
