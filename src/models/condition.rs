//! Status conditions reported by the eventing controllers

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Condition type every source reports its overall readiness under
pub const READY: &str = "Ready";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub type_: String,

    pub status: ConditionStatus,

    #[serde(default, skip_serializing_if = "ConditionSeverity::is_error")]
    pub severity: ConditionSeverity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Condition {
    pub fn new(type_: &str, status: ConditionStatus) -> Self {
        Self {
            type_: type_.to_string(),
            status,
            severity: ConditionSeverity::Error,
            last_transition_time: None,
            reason: None,
            message: None,
        }
    }

    pub fn is_ready_type(&self) -> bool {
        self.type_ == READY
    }
}

/// Tri-state condition status
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionStatus {
    True,
    False,
    #[serde(other)]
    Unknown,
}

/// How serious a False condition is
///
/// Anything other than `Warning` or `Info`, including an empty or missing
/// severity, reads as Error.
#[derive(Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConditionSeverity {
    #[default]
    #[serde(rename = "")]
    Error,
    Warning,
    Info,
}

impl ConditionSeverity {
    fn is_error(&self) -> bool {
        matches!(self, ConditionSeverity::Error)
    }
}

impl<'de> Deserialize<'de> for ConditionSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let severity = Option::<String>::deserialize(deserializer)?;
        Ok(match severity.as_deref() {
            Some("Warning") => ConditionSeverity::Warning,
            Some("Info") => ConditionSeverity::Info,
            _ => ConditionSeverity::Error,
        })
    }
}
