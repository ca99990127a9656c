//! # Errors
//!
//! Error type returned by the plugin commands, and the translation of raw
//! Kubernetes client errors into messages a CLI user can act on.

use thiserror::Error;

use crate::constants::PLUGIN_NAME;

/// Message returned by the API server when the resource type itself is unknown
const UNKNOWN_RESOURCE_MESSAGE: &str = "the server could not find the requested resource";

#[derive(Debug, Error)]
pub enum KameletError {
    #[error(
        "'{plugin} {command}' requires the Kamelet name given as single argument",
        plugin = PLUGIN_NAME
    )]
    InvalidArguments { command: &'static str },

    #[error("failed to resolve namespace: {0}")]
    Namespace(String),

    #[error("failed to create Kamelet client: {0}")]
    ClientConstruction(String),

    #[error("Kamelet '{name}' not found in namespace '{namespace}'")]
    NotFound { namespace: String, name: String },

    #[error("no Kamelet API found on the backend, please verify Apache Camel K is installed in the cluster")]
    ApiNotInstalled,

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("unauthorized: {0}, please verify the credentials of the current kubeconfig context")]
    Unauthorized(String),

    #[error("error connecting to the cluster, please verify connection: {0}")]
    Connection(String),

    #[error("{0}")]
    Api(String),

    #[error("Kamelet {0} is not an event source")]
    NotEventSource(String),

    #[error("unable to print Kamelet: {0}")]
    Print(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for KameletError {
    fn from(err: serde_json::Error) -> Self {
        KameletError::Print(err.to_string())
    }
}

impl From<serde_yaml::Error> for KameletError {
    fn from(err: serde_yaml::Error) -> Self {
        KameletError::Print(err.to_string())
    }
}

/// Translate a failed GET of `namespace/name` into a [`KameletError`]
pub fn translate_kube_error(err: kube::Error, namespace: &str, name: &str) -> KameletError {
    match err {
        kube::Error::Api(api_err) => {
            translate_status(api_err.code, &api_err.message, namespace, name)
        }
        err @ (kube::Error::HyperError(_) | kube::Error::Service(_)) => {
            KameletError::Connection(err.to_string())
        }
        other => KameletError::Api(other.to_string()),
    }
}

/// Translate an API status response (code and message) into a [`KameletError`]
pub fn translate_status(code: u16, message: &str, namespace: &str, name: &str) -> KameletError {
    match code {
        404 if message.contains(UNKNOWN_RESOURCE_MESSAGE) => KameletError::ApiNotInstalled,
        404 => KameletError::NotFound {
            namespace: namespace.to_string(),
            name: name.to_string(),
        },
        401 => KameletError::Unauthorized(message.to_string()),
        403 => KameletError::Forbidden(message.to_string()),
        _ => KameletError::Api(message.to_string()),
    }
}
