//! Relative and absolute timestamp labels.

use chrono::{DateTime, FixedOffset, Local, Utc};

/// Parse an ISO 8601 / RFC 3339 timestamp.
///
/// Naive timestamps without an offset are taken as UTC, matching what the
/// generator writes for items lacking timezone information.
pub fn parse_timestamp(iso: &str) -> Option<DateTime<Utc>> {
    let iso = iso.trim();
    if iso.is_empty() {
        return None;
    }

    DateTime::<FixedOffset>::parse_from_rfc3339(iso)
        .map(|ts| ts.with_timezone(&Utc))
        .ok()
        .or_else(|| {
            chrono::NaiveDateTime::parse_from_str(iso, "%Y-%m-%dT%H:%M:%S%.f")
                .ok()
                .map(|naive| naive.and_utc())
        })
}

/// Coarse "how long ago" label for `iso` relative to `now`.
///
/// | elapsed        | label        |
/// |----------------|--------------|
/// | < 1 minute     | `just now`   |
/// | < 60 minutes   | `{n}m ago`   |
/// | < 24 hours     | `{n}h ago`   |
/// | otherwise      | `{n}d ago`   |
///
/// Future timestamps count as zero elapsed. Unparseable input yields an
/// empty string.
pub fn fmt_time_ago(iso: &str, now: DateTime<Utc>) -> String {
    let Some(ts) = parse_timestamp(iso) else {
        return String::new();
    };

    let elapsed_secs = (now - ts).num_seconds().max(0);
    let minutes = elapsed_secs / 60;
    if minutes < 1 {
        return "just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    format!("{}d ago", hours / 24)
}

/// Absolute "last updated" label in the local timezone.
pub fn fmt_last_updated(iso: &str) -> String {
    parse_timestamp(iso)
        .map(|ts| fmt_absolute(ts.with_timezone(&Local)))
        .unwrap_or_default()
}

/// Absolute label in an arbitrary timezone, e.g. `Oct 16, 2026, 3:04:05 PM`.
pub fn fmt_absolute<Tz>(ts: DateTime<Tz>) -> String
where
    Tz: chrono::TimeZone,
    Tz::Offset: std::fmt::Display,
{
    ts.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}
