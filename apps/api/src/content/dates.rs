//! Date labels shared by every template: `"<Month> <Year>"` and date ranges.
//!
//! Never fails. Anything that does not parse renders as an empty string.

use chrono::{DateTime, NaiveDate};

pub const PRESENT: &str = "Present";

/// Formats an ISO date, year-month, or RFC 3339 timestamp as e.g. `"January 2019"`.
///
/// A bare four-digit year renders as the year alone. Unparseable input → `""`.
pub fn format_month_year(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return String::new();
    }

    if let Some(date) = parse_date(raw) {
        return date.format("%B %Y").to_string();
    }

    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.to_string();
    }

    String::new()
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.date_naive())
}

/// End label for an entry: `"Present"` when `current`, regardless of any stored end date.
pub fn end_label(end: &str, current: bool) -> String {
    if current {
        PRESENT.to_string()
    } else {
        format_month_year(end)
    }
}

/// `"<start> - <end>"`, dropping whichever side is empty.
pub fn date_range(start: &str, end: &str, current: bool) -> String {
    let start = format_month_year(start);
    let end = end_label(end, current);
    match (start.is_empty(), end.is_empty()) {
        (false, false) => format!("{start} - {end}"),
        (false, true) => start,
        (true, false) => end,
        (true, true) => String::new(),
    }
}
