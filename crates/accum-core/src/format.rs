// File: crates/accum-core/src/format.rs
// Summary: Value, signed-addition, percent and date label formatting.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use num_format::{Locale, ToFormattedString};

/// Caller-supplied number formatter (unit is appended separately).
pub type FormatFn = Arc<dyn Fn(f64) -> String + Send + Sync>;

/// Formats values for axis labels and the hover detail panel.
#[derive(Clone)]
pub struct ValueFormatter {
    unit: String,
    custom: Option<FormatFn>,
}

impl fmt::Debug for ValueFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueFormatter")
            .field("unit", &self.unit)
            .field("custom", &self.custom.is_some())
            .finish()
    }
}

impl ValueFormatter {
    pub fn new(unit: impl Into<String>, custom: Option<FormatFn>) -> Self {
        Self { unit: unit.into(), custom }
    }

    /// Bare number, no unit.
    pub fn number(&self, v: f64) -> String {
        match &self.custom {
            Some(f) => f(v),
            None => format_number(v),
        }
    }

    /// Number followed by the unit label, when there is one.
    pub fn value(&self, v: f64) -> String {
        self.with_unit(self.number(v))
    }

    /// Addition with an explicit sign: `+0.42 BTC`, `-0.10 BTC`.
    pub fn signed(&self, v: f64) -> String {
        let sign = if v < 0.0 { '-' } else { '+' };
        self.with_unit(format!("{sign}{}", self.number(v.abs())))
    }

    fn with_unit(&self, s: String) -> String {
        if self.unit.is_empty() { s } else { format!("{s} {}", self.unit) }
    }
}

/// Default formatting: thousands separators, two decimals from 1 upwards, four below.
pub fn format_number(v: f64) -> String {
    if !v.is_finite() {
        return "-".to_string();
    }
    let decimals = if v.abs() >= 1.0 || v == 0.0 { 2 } else { 4 };
    let raw = format!("{:.*}", decimals, v.abs());
    let (int_part, frac_part) = raw.split_once('.').unwrap_or((raw.as_str(), ""));
    // Beyond u128 the digits are left ungrouped.
    let grouped = int_part
        .parse::<u128>()
        .map(|n| n.to_formatted_string(&Locale::en))
        .unwrap_or_else(|_| int_part.to_string());
    let sign = if v < 0.0 && raw.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

/// One-decimal percentage.
pub fn format_percent(p: f64) -> String {
    format!("{p:.1}%")
}

/// Short axis label for a bucket date: `2024-03-05` -> `Mar 05`, `2024-03` -> `Mar 2024`.
/// Anything else is returned unchanged.
pub fn short_date(date: &str) -> String {
    let s = date.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.format("%b %d").to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
        return d.format("%b %Y").to_string();
    }
    s.to_string()
}
