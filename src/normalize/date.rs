use std::sync::OnceLock;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use regex::Regex;

/// Leading "Sat, " style weekday of an RFC 822 date
fn weekday_prefix() -> &'static Regex {
    static WEEKDAY: OnceLock<Regex> = OnceLock::new();
    WEEKDAY.get_or_init(|| Regex::new(r"^[A-Za-z]{3,9},?\s+").unwrap())
}

/// Normalize an RFC 822 or ISO-8601 date to `YYYY-MM-DDTHH:MM:SS.mmmZ`.
///
/// Returns `None` for anything that does not parse, so callers can omit the
/// field instead of emitting a placeholder.
pub fn normalize_date(raw: &str) -> Option<String> {
    let parsed = parse_date(raw.trim());
    if parsed.is_none() {
        tracing::trace!(date = raw, "Dropping unparseable date");
    }
    parsed.map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}

pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    if value.is_empty() {
        return None;
    }

    parse_iso8601(value)
        .or_else(|| parse_rfc822(value))
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| parse_floating(value))
}

fn parse_iso8601(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt);
    }

    // W3CDTF allows dropping the seconds: 2000-12-12T12:12Z
    let with_offset = match value.strip_suffix(['Z', 'z']) {
        Some(rest) => format!("{}+00:00", rest),
        None => value.to_string(),
    };
    DateTime::parse_from_str(&with_offset, "%Y-%m-%dT%H:%M%:z").ok()
}

fn parse_rfc822(value: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc2822(value) {
        return Some(dt);
    }

    // Publishers routinely get the weekday wrong, and chrono rejects a
    // weekday that disagrees with the date.
    let without_weekday = weekday_prefix().replace(value, "");
    if without_weekday.len() == value.len() {
        return None;
    }
    DateTime::parse_from_rfc2822(&without_weekday).ok()
}

/// Dates without an offset are read as UTC.
fn parse_floating(value: &str) -> Option<DateTime<Utc>> {
    const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

    for format in DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
