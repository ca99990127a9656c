//! # Metadata Block
//!
//! Name, namespace, labels, annotations and age of any resource.

use chrono::{DateTime, Utc};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
use std::collections::BTreeMap;
use std::io::Write;

use super::{age, join_and_truncate};
use crate::constants::BORING_DOMAINS;
use crate::printers::{label, PrefixWriter};

/// Write the generic metadata block of a resource
pub fn write_metadata<W: Write>(
    dw: &mut PrefixWriter<W>,
    meta: &ObjectMeta,
    print_details: bool,
    truncate_at: usize,
    now: DateTime<Utc>,
) {
    dw.write_attribute("Name", meta.name.as_deref().unwrap_or_default());
    dw.write_attribute("Namespace", meta.namespace.as_deref().unwrap_or_default());
    write_map_desc(dw, meta.labels.as_ref(), "Labels", print_details, truncate_at);
    write_map_desc(
        dw,
        meta.annotations.as_ref(),
        "Annotations",
        print_details,
        truncate_at,
    );
    let created = meta.creation_timestamp.as_ref().and_then(time_to_utc);
    dw.write_attribute("Age", &age(created, now));
}

/// Write a label or annotation map
///
/// Nothing is written for an empty map. With `print_details` every entry is
/// written on its own line, sorted by key; otherwise entries from boring
/// domains are hidden and the rest are joined on one truncated line.
pub fn write_map_desc<W: Write>(
    dw: &mut PrefixWriter<W>,
    map: Option<&BTreeMap<String, String>>,
    attr: &str,
    print_details: bool,
    truncate_at: usize,
) {
    let Some(map) = map else {
        return;
    };
    let entries: Vec<String> = map
        .iter()
        .filter(|(key, _)| print_details || !key_is_boring(key))
        .map(|(key, value)| format!("{key}={value}"))
        .collect();
    if entries.is_empty() {
        return;
    }

    let attr_label = label(attr);
    if print_details {
        let mut first = attr_label.as_str();
        for entry in &entries {
            dw.write_cols_ln(&[first, entry]);
            first = "";
        }
        return;
    }
    let width = truncate_at.saturating_sub(attr_label.len() + 2);
    dw.write_cols_ln(&[&attr_label, &join_and_truncate(&entries, width)]);
}

fn key_is_boring(key: &str) -> bool {
    key.split_once('/').is_some_and(|(domain, _)| {
        BORING_DOMAINS.iter().any(|boring| {
            domain == *boring
                || domain
                    .strip_suffix(boring)
                    .is_some_and(|prefix| prefix.ends_with('.'))
        })
    })
}

fn time_to_utc(time: &Time) -> Option<DateTime<Utc>> {
    time.0
        .timestamp_nanos_opt()
        .map(DateTime::from_timestamp_nanos)
}
