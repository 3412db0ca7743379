//! Helper functions and utilities
//!
//! This module contains the display and parsing helpers shared by the
//! model and view layers.

use std::sync::OnceLock;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use regex::Regex;

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";
const INVALID_DATE: &str = "Invalid Date";

/// Zone-less formats produced by HTML `datetime-local` inputs and by the
/// backend's local date-time serialization.
const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];

/// Parse an ISO-8601 timestamp into local time.
///
/// Timestamps with an offset are converted; timestamps without one are
/// taken to already be local.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Local));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Format a timestamp for card display, e.g. `6/1/2024, 8:00:00 PM`
pub fn format_local_datetime(raw: &str) -> String {
    match parse_timestamp(raw) {
        Some(timestamp) => timestamp.format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a price as currency symbol plus the shortest number text.
///
/// No rounding or locale grouping is applied.
pub fn format_price(price: Option<f64>, currency_symbol: &str) -> String {
    match price {
        Some(value) if value.is_nan() => format!("{}NaN", currency_symbol),
        Some(value) if value.is_infinite() => {
            let sign = if value < 0.0 { "-" } else { "" };
            format!("{}{}Infinity", currency_symbol, sign)
        }
        Some(value) => format!("{}{}", currency_symbol, value),
        None => "N/A".to_string(),
    }
}

fn number_prefix() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[+-]?(Infinity|(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?)")
            .expect("number prefix pattern is valid")
    })
}

/// Lenient numeric parse of user input.
///
/// Leading whitespace is skipped and the longest numeric prefix is used,
/// so `"12.5 USD"` yields `12.5`. Input with no numeric prefix yields NaN.
pub fn parse_lenient_number(input: &str) -> f64 {
    let trimmed = input.trim_start();
    let Some(found) = number_prefix().find(trimmed) else {
        return f64::NAN;
    };

    let text = found.as_str();
    if text.ends_with("Infinity") {
        return if text.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    text.parse::<f64>().unwrap_or(f64::NAN)
}

/// Truncate text to a maximum number of characters with ellipsis
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
