//! Utility helpers shared across the WASM frontend.

use chrono::{NaiveDate, SecondsFormat, Utc};

/// Escape text for interpolation into HTML markup.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Parse the leading integer of a form value the way `<input type=number>`
/// contents are usually coerced: surrounding whitespace is ignored, an
/// optional sign is accepted and parsing stops at the first non-digit.
/// Returns `None` when no digits are present.
pub fn parse_int(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude: i64 = digits.parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Convert a stored timestamp (`2024-01-15T00:00:00`) into the value a
/// `<input type=date>` expects (`2024-01-15`).
pub fn date_input_value(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|ts| ts.split('T').next())
        .unwrap_or_default()
        .to_string()
}

/// Convert a date-input value into the ISO timestamp sent to the backend
/// (UTC midnight). Empty or malformed input yields `None`.
pub fn date_input_to_iso(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().to_rfc3339_opts(SecondsFormat::Millis, true))
}

/// Current time as an ISO-8601 UTC timestamp with millisecond precision.
pub fn now_iso() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Look up a query-string parameter in `location.search` (leading `?`
/// optional). Empty values count as absent.
pub fn query_param(search: &str, name: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('=').or(Some((pair, ""))))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}
