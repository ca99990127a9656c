//! # Kamelet Spec
//!
//! Main CRD specification types.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::constants::{KAMELET_PROVIDER_LABEL, KAMELET_TYPE_LABEL, KAMELET_TYPE_SOURCE};

/// Kamelet Custom Resource Definition
///
/// A Kamelet is a declarative connector describing an integration source,
/// sink or action. Only Kamelets labelled as `source` are event sources.
///
/// # Example
///
/// ```yaml
/// apiVersion: camel.apache.org/v1alpha1
/// kind: Kamelet
/// metadata:
///   name: timer-source
///   labels:
///     camel.apache.org/kamelet.type: source
///     camel.apache.org/kamelet.provider: Apache Software Foundation
/// spec:
///   definition:
///     title: Timer Source
///     description: Produces periodic events about random messages
///     required:
///       - message
///     properties:
///       message:
///         type: string
///         description: The message to generate
///       period:
///         type: integer
///         description: The interval between two events in milliseconds
///         default: 1000
/// ```
#[derive(kube::CustomResource, Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[kube(
    kind = "Kamelet",
    group = "camel.apache.org",
    version = "v1alpha1",
    namespaced,
    status = "crate::crd::KameletStatus",
    shortname = "kl",
    printcolumn = r#"{"name":"Phase", "type":"string", "jsonPath":".status.phase"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct KameletSpec {
    /// JSON schema describing the configurable properties of the Kamelet
    #[serde(default)]
    pub definition: crate::crd::JsonSchemaProps,
    /// Source code snippets contributing to the Kamelet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sources: Vec<SourceSpec>,
    /// Route template of the Kamelet (opaque to the plugin)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,
    /// Deprecated spelling of `template`, still served by older Camel K releases
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flow: Option<serde_json::Value>,
    /// Data shapes of the event slots (`in`, `out`, `error`)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub types: BTreeMap<String, EventTypeSpec>,
    /// Maven or Camel dependencies required by the Kamelet
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<String>,
}

/// Source code snippet attached to a Kamelet
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SourceSpec {
    /// Name of the source file
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Inline source content
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub content: String,
    /// Language of the source (yaml, groovy, java, ...)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub language: String,
}

/// Data shape of one Kamelet event slot
#[derive(Debug, Clone, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventTypeSpec {
    /// Media type of the events flowing through the slot
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub media_type: String,
    /// JSON schema of the events flowing through the slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
}

impl Kamelet {
    /// Value of a metadata label, if set
    pub fn label(&self, key: &str) -> Option<&str> {
        self.metadata
            .labels
            .as_ref()
            .and_then(|labels| labels.get(key))
            .map(String::as_str)
    }

    /// Provider named by the provider label, empty when the label is absent
    pub fn provider(&self) -> &str {
        self.label(KAMELET_PROVIDER_LABEL).unwrap_or_default()
    }

    /// Whether the Kamelet is labelled as an event source
    pub fn is_event_source(&self) -> bool {
        self.label(KAMELET_TYPE_LABEL) == Some(KAMELET_TYPE_SOURCE)
    }

    /// Raw status phase, empty when the Kamelet has not been reconciled yet
    pub fn phase(&self) -> &str {
        self.status
            .as_ref()
            .and_then(|status| status.phase.as_deref())
            .unwrap_or_default()
    }
}
