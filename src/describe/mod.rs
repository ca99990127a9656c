//! # Describe Helpers
//!
//! Generic building blocks of `describe` style output: the metadata block,
//! condition tables, truncated key/value lists and human-readable ages.
//!
//! All helpers write through a [`PrefixWriter`](crate::printers::PrefixWriter)
//! and take the current time as a parameter so the same resource always
//! renders the same text.

mod conditions;
mod metadata;

pub use conditions::{write_conditions, ApiCondition, ConditionSeverity};
pub use metadata::{write_map_desc, write_metadata};

use chrono::{DateTime, Duration, Utc};

/// Join `items` with `, `, truncating the result to `width` characters
///
/// Items are appended until the accumulated text first exceeds `width`. The
/// trailing separator is removed, and a result still wider than `width` is cut
/// to `width - 4` characters followed by ` ...`. The result never exceeds
/// `width` characters; at widths of 4 or less only the marker remains, itself
/// cut to `width`.
pub fn join_and_truncate<I, S>(items: I, width: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = String::new();
    for item in items {
        result.push_str(item.as_ref());
        result.push_str(", ");
        if result.chars().count() > width {
            break;
        }
    }
    let trimmed_len = result.trim_end_matches([',', ' ']).len();
    result.truncate(trimmed_len);

    if result.chars().count() > width {
        let mut cut: String = result.chars().take(width.saturating_sub(4)).collect();
        cut.push_str(" ...");
        return cut.chars().take(width).collect();
    }
    result
}

/// Short human duration of `now - then` (`42s`, `5m`, `3h`, `12d`, `2y`)
///
/// Empty when `then` is unknown.
pub fn age(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    then.map(|then| short_human_duration(now - then))
        .unwrap_or_default()
}

/// Compact rendering of a duration with a single unit
pub fn short_human_duration(d: Duration) -> String {
    let seconds = d.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 {
        return format!("{seconds}s");
    }
    let minutes = d.num_minutes();
    if minutes < 60 {
        return format!("{minutes}m");
    }
    let hours = d.num_hours();
    if hours < 24 {
        return format!("{hours}h");
    }
    if hours < 24 * 365 {
        return format!("{}d", hours / 24);
    }
    format!("{}y", hours / 24 / 365)
}

/// Parse an RFC3339 timestamp as reported in resource status fields
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}
