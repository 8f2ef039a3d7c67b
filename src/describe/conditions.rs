//! Status condition table

use chrono::{DateTime, Utc};

use super::writer::AttributeWriter;
use crate::models::{Condition, ConditionSeverity, ConditionStatus};

/// Open a `Conditions` section with one row per condition, `Ready` first
///
/// Verbose mode appends the condition message to its reason.
pub fn write_conditions(
    dw: &mut dyn AttributeWriter,
    conditions: &[Condition],
    verbose: bool,
    now: DateTime<Utc>,
) {
    let mut section = dw.section("Conditions");
    section.write_cols(&["OK", "TYPE", "AGE", "REASON"]);

    for condition in sorted(conditions) {
        let age = condition
            .last_transition_time
            .map(|at| short_duration(now - at))
            .unwrap_or_default();
        let reason = reason_text(condition, verbose);
        section.write_cols(&[
            status_glyph(condition),
            condition.type_.as_str(),
            age.as_str(),
            reason.as_str(),
        ]);
    }
}

/// `Ready` first, everything else by type
fn sorted(conditions: &[Condition]) -> Vec<&Condition> {
    let mut sorted: Vec<&Condition> = conditions.iter().collect();
    sorted.sort_by(|a, b| {
        b.is_ready_type()
            .cmp(&a.is_ready_type())
            .then_with(|| a.type_.cmp(&b.type_))
    });
    sorted
}

fn status_glyph(condition: &Condition) -> &'static str {
    match (condition.status, condition.severity) {
        (ConditionStatus::True, _) => "++",
        (ConditionStatus::False, ConditionSeverity::Error) => "!!",
        (ConditionStatus::False, ConditionSeverity::Warning) => " W",
        (ConditionStatus::False, ConditionSeverity::Info) => " I",
        (ConditionStatus::Unknown, _) => "??",
    }
}

fn reason_text(condition: &Condition, verbose: bool) -> String {
    let reason = condition.reason.as_deref().unwrap_or_default();
    let message = condition
        .message
        .as_deref()
        .filter(|m| verbose && !m.is_empty());
    match message {
        Some(message) if reason.is_empty() => message.to_string(),
        Some(message) => format!("{} ({})", reason, message),
        None => reason.to_string(),
    }
}

/// Compact age such as `45s`, `12m`, `5h`, `3d` or `2y`
pub fn short_duration(elapsed: chrono::Duration) -> String {
    let seconds = elapsed.num_seconds();
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 {
        return format!("{}s", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{}h", hours);
    }
    if hours < 24 * 365 {
        return format!("{}d", hours / 24);
    }
    format!("{}y", hours / (24 * 365))
}
