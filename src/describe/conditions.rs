//! # Conditions
//!
//! Generic condition values and the `Conditions:` table.

use chrono::{DateTime, Utc};
use std::io::Write;

use super::age;
use crate::constants::CONDITION_READY;
use crate::printers::PrefixWriter;

/// Severity of a condition that is not satisfied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConditionSeverity {
    #[default]
    Error,
    Warning,
    Info,
}

/// Resource-independent condition used for printing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiCondition {
    pub type_: String,
    /// True, False or Unknown
    pub status: String,
    pub severity: ConditionSeverity,
    pub last_transition_time: Option<DateTime<Utc>>,
    pub reason: String,
    pub message: String,
}

impl ApiCondition {
    /// Two-character status marker for the OK column
    pub fn status_marker(&self) -> &'static str {
        match self.status.as_str() {
            "True" => "++",
            "False" => match self.severity {
                ConditionSeverity::Error => "!!",
                ConditionSeverity::Warning => " W",
                ConditionSeverity::Info => " I",
            },
            _ => "??",
        }
    }
}

/// Write the `Conditions:` section
///
/// The Ready condition is listed first, the rest sorted by type. With
/// `print_message` a non-empty reason is followed by the message.
pub fn write_conditions<W: Write>(
    dw: &mut PrefixWriter<W>,
    conditions: &[ApiCondition],
    print_message: bool,
    now: DateTime<Utc>,
) {
    let mut section = dw.write_attribute("Conditions", "");

    let mut sorted: Vec<&ApiCondition> = conditions.iter().collect();
    sorted.sort_by(|a, b| {
        (a.type_ != CONDITION_READY, &a.type_).cmp(&(b.type_ != CONDITION_READY, &b.type_))
    });
    let max_len = sorted.iter().map(|c| c.type_.len()).max().unwrap_or(0);

    section.writef(format_args!(
        "{:<2} {:<max_len$} {:>6} {}\n",
        "OK", "TYPE", "AGE", "REASON"
    ));
    for condition in sorted {
        let reason = if print_message && !condition.reason.is_empty() {
            format!("{} ({})", condition.reason, condition.message)
        } else {
            condition.reason.clone()
        };
        section.writef(format_args!(
            "{:<2} {:<max_len$} {:>6} {}\n",
            condition.status_marker(),
            condition.type_,
            age(condition.last_transition_time, now),
            reason
        ));
    }
}
