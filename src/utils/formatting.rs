//! Formatting utilities used for CLI and export outputs.

/// Above this magnitude an f64 has no fractional digits left to round.
const ROUND2_LIMIT: f64 = 1e15;

/// Round to 2 decimal places, the precision used for every displayed total.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() || value.abs() > ROUND2_LIMIT {
        return value;
    }
    (value * 100.0).round() / 100.0
}

pub fn fmt_kg(value: f64) -> String {
    format!("{:.2} kg CO2", value)
}

pub fn fmt_quantity(value: f64, unit: &str) -> String {
    format!("{:.2} {}", value, unit)
}

/// "car" → "Car"
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
