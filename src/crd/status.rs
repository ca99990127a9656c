//! # Kamelet Status
//!
//! Status types reported by the Camel K operator.

use serde::{Deserialize, Serialize};

/// Status of the Kamelet resource
#[derive(Debug, Clone, Deserialize, Serialize, Default, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletStatus {
    /// Observed generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,
    /// Current phase
    /// Values: Ready, Error (empty before the first reconciliation)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Conditions represent the latest available observations, in server order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<KameletCondition>,
    /// Properties with their effective defaults
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<KameletProperty>,
}

/// Condition of a Kamelet
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletCondition {
    /// Type of condition
    #[serde(default)]
    pub r#type: String,
    /// Status of the condition (True, False, Unknown)
    #[serde(default)]
    pub status: String,
    /// Last time the condition was probed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,
    /// Last transition time (RFC3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
    /// Reason for the condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Message describing the condition
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Property default computed by the operator
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct KameletProperty {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}
