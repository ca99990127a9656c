//! # Constants
//!
//! Shared constants used throughout the plugin.
//!
//! These values represent reasonable defaults and can be overridden via
//! configuration or environment variables where applicable.

/// Name of the plugin binary, used in user-facing error messages
pub const PLUGIN_NAME: &str = "kn-source-kamelet";

/// Default width at which compact attribute lists are truncated
pub const DEFAULT_TRUNCATE_AT: usize = 100;

/// Default read timeout for Kubernetes API requests (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Default connect timeout for the Kubernetes API server (seconds)
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Default log level when neither `RUST_LOG` nor `KN_KAMELET_LOG_LEVEL` is set
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Namespace used when neither a flag nor the kubeconfig context names one
pub const DEFAULT_NAMESPACE: &str = "default";

/// Label carrying the Kamelet provider
pub const KAMELET_PROVIDER_LABEL: &str = "camel.apache.org/kamelet.provider";

/// Label carrying the Kamelet type (source, sink, action)
pub const KAMELET_TYPE_LABEL: &str = "camel.apache.org/kamelet.type";

/// Value of [`KAMELET_TYPE_LABEL`] for event sources
pub const KAMELET_TYPE_SOURCE: &str = "source";

/// Condition type every Kamelet condition is reported under
pub const CONDITION_READY: &str = "Ready";

/// Label and annotation key domains hidden from compact metadata output
pub const BORING_DOMAINS: &[&str] = &["kubectl.kubernetes.io", "client.knative.dev"];
