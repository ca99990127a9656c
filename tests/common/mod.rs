//! Common test utilities for command tests
//!
//! In-memory plugin parameters and Kamelet client, plus YAML fixtures.

#![allow(dead_code, reason = "not every test binary uses every helper")]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kn_source_kamelet::client::{KameletClient, PluginParams};
use kn_source_kamelet::crd::Kamelet;
use kn_source_kamelet::error::KameletError;

pub const TIMER_SOURCE: &str = r#"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: timer-source
  namespace: default
  creationTimestamp: "2024-05-01T10:00:00Z"
  labels:
    camel.apache.org/kamelet.provider: Apache Software Foundation
    camel.apache.org/kamelet.type: source
spec:
  definition:
    title: Timer Source
    description: Produces periodic events about random messages
    required:
      - message
    properties:
      period:
        type: integer
        description: The interval between two events in milliseconds
        default: 1000
      message:
        type: string
        description: The message to generate
  types:
    out:
      mediaType: text/plain
status:
  phase: Ready
  conditions:
    - type: Ready
      status: "True"
      reason: Validated
      message: Kamelet is valid
      lastTransitionTime: "2024-05-01T10:01:00Z"
"#;

pub const LOG_SINK: &str = r#"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: log-sink
  namespace: default
  labels:
    camel.apache.org/kamelet.type: sink
spec:
  definition:
    title: Log Sink
"#;

/// Source without title, provider label, creation time or status
pub const BARE_SOURCE: &str = r#"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: bare-source
  namespace: default
  labels:
    camel.apache.org/kamelet.type: source
spec:
  definition:
    description: Emits nothing in particular
    properties:
      topic:
        type: string
"#;

pub fn kamelet(yaml: &str) -> Kamelet {
    serde_yaml::from_str(yaml).expect("fixture should deserialize")
}

/// Plugin parameters serving Kamelets from memory
#[derive(Default)]
pub struct FakeParams {
    pub current_namespace: String,
    pub kamelets: Arc<HashMap<(String, String), Kamelet>>,
    pub namespace_calls: Arc<AtomicUsize>,
    pub client_calls: Arc<AtomicUsize>,
    pub get_calls: Arc<AtomicUsize>,
    pub fail_client: bool,
}

impl FakeParams {
    pub fn with_kamelets(current_namespace: &str, kamelets: Vec<Kamelet>) -> Self {
        let kamelets = kamelets
            .into_iter()
            .map(|k| {
                let key = (
                    k.metadata.namespace.clone().unwrap_or_default(),
                    k.metadata.name.clone().unwrap_or_default(),
                );
                (key, k)
            })
            .collect();
        Self {
            current_namespace: current_namespace.to_string(),
            kamelets: Arc::new(kamelets),
            ..Self::default()
        }
    }

    pub fn api_calls(&self) -> usize {
        self.get_calls.load(Ordering::SeqCst)
    }
}

struct FakeClient {
    kamelets: Arc<HashMap<(String, String), Kamelet>>,
    get_calls: Arc<AtomicUsize>,
}

#[async_trait]
impl KameletClient for FakeClient {
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, KameletError> {
        self.get_calls.fetch_add(1, Ordering::SeqCst);
        self.kamelets
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| KameletError::NotFound {
                namespace: namespace.to_string(),
                name: name.to_string(),
            })
    }
}

#[async_trait]
impl PluginParams for FakeParams {
    async fn current_namespace(&self) -> Result<String, KameletError> {
        self.namespace_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.current_namespace.clone())
    }

    async fn new_kamelet_client(&self) -> Result<Box<dyn KameletClient>, KameletError> {
        self.client_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_client {
            return Err(KameletError::ClientConstruction(
                "no kubeconfig found".to_string(),
            ));
        }
        Ok(Box::new(FakeClient {
            kamelets: Arc::clone(&self.kamelets),
            get_calls: Arc::clone(&self.get_calls),
        }))
    }
}
