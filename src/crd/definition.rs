//! # Kamelet Definition
//!
//! JSON schema types describing the properties a Kamelet accepts.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// JSON schema of the Kamelet properties
///
/// Properties are kept in a sorted map so every rendering lists them in
/// lexicographic order.
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchemaProps {
    /// Schema identifier
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    /// Human-readable title of the Kamelet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Human-readable description of the Kamelet
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Schema type, usually `object`
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Names of the properties that must be provided
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Property name to property schema
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, JsonSchemaProp>,
    /// Example configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    /// Link to external documentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_docs: Option<ExternalDocumentation>,
}

/// Schema of a single Kamelet property
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct JsonSchemaProp {
    /// Property type (string, integer, boolean, ...)
    #[serde(default, rename = "type", skip_serializing_if = "String::is_empty")]
    pub type_: String,
    /// Display title
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Default value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
    /// Example value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<serde_json::Value>,
    /// Value format hint (e.g. `password`, `binary`)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    /// Allowed values
    #[serde(default, rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<serde_json::Value>,
    /// Regular expression the value must match
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    /// UI descriptors
    #[serde(default, rename = "x-descriptors", skip_serializing_if = "Vec::is_empty")]
    pub x_descriptors: Vec<String>,
}

/// Link to external documentation
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExternalDocumentation {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
}

impl JsonSchemaProps {
    /// Whether the named property is listed as required
    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|required| required == name)
    }

    /// Length of the longest property name, 0 without properties
    pub fn max_property_name_len(&self) -> usize {
        self.properties.keys().map(String::len).max().unwrap_or(0)
    }
}
