//! # Plugin Parameters
//!
//! Collaborators injected into every command: the namespace resolver and the
//! typed Kamelet client factory.
//!
//! [`KubePluginParams`] backs both with a kubeconfig (or in-cluster) `kube::Config`,
//! loaded once per invocation. Tests substitute their own [`PluginParams`].

use async_trait::async_trait;
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Api, Client, Config,
};
use std::path::PathBuf;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::config::PluginConfig;
use crate::constants::DEFAULT_NAMESPACE;
use crate::crd::Kamelet;
use crate::error::{translate_kube_error, KameletError};

/// Typed access to Kamelet resources
#[async_trait]
pub trait KameletClient: Send + Sync {
    /// Fetch the Kamelet `name` in `namespace`, with API errors already translated
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, KameletError>;
}

/// Namespace resolution and client construction for plugin commands
#[async_trait]
pub trait PluginParams: Send + Sync {
    /// Namespace of the current kubeconfig context
    async fn current_namespace(&self) -> Result<String, KameletError>;

    /// Build a Kamelet client for the current context
    async fn new_kamelet_client(&self) -> Result<Box<dyn KameletClient>, KameletError>;
}

/// Resolve the namespace to operate in
///
/// An explicit, non-empty `--namespace` wins; otherwise the namespace of the
/// current context is used, falling back to `default`.
pub async fn resolve_namespace<P>(params: &P, flag: Option<&str>) -> Result<String, KameletError>
where
    P: PluginParams + ?Sized,
{
    if let Some(ns) = flag.filter(|ns| !ns.is_empty()) {
        return Ok(ns.to_string());
    }
    let current = params.current_namespace().await?;
    if current.is_empty() {
        Ok(DEFAULT_NAMESPACE.to_string())
    } else {
        Ok(current)
    }
}

/// Plugin parameters backed by a kubeconfig file or the in-cluster environment
#[derive(Debug)]
pub struct KubePluginParams {
    kubeconfig: Option<PathBuf>,
    context: Option<String>,
    config: PluginConfig,
    kube_config: OnceCell<Config>,
}

impl KubePluginParams {
    pub fn new(kubeconfig: Option<PathBuf>, context: Option<String>, config: PluginConfig) -> Self {
        Self {
            kubeconfig,
            context,
            config,
            kube_config: OnceCell::new(),
        }
    }

    /// Load the kube config once; later calls reuse it
    async fn kube_config(&self) -> Result<&Config, KameletError> {
        self.kube_config
            .get_or_try_init(|| async {
                let mut config = self.load_kube_config().await?;
                config.read_timeout = Some(self.config.request_timeout());
                config.connect_timeout = Some(self.config.connect_timeout());
                Ok::<_, KameletError>(config)
            })
            .await
    }

    async fn load_kube_config(&self) -> Result<Config, KameletError> {
        let options = KubeConfigOptions {
            context: self.context.clone(),
            ..KubeConfigOptions::default()
        };
        match (&self.kubeconfig, &self.context) {
            (Some(path), _) => {
                debug!(path = %path.display(), "Loading kubeconfig");
                let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
                    KameletError::ClientConstruction(format!(
                        "failed to read kubeconfig {}: {e}",
                        path.display()
                    ))
                })?;
                Config::from_custom_kubeconfig(kubeconfig, &options)
                    .await
                    .map_err(|e| KameletError::ClientConstruction(e.to_string()))
            }
            (None, Some(_)) => Config::from_kubeconfig(&options)
                .await
                .map_err(|e| KameletError::ClientConstruction(e.to_string())),
            (None, None) => Config::infer()
                .await
                .map_err(|e| KameletError::ClientConstruction(e.to_string())),
        }
    }
}

#[async_trait]
impl PluginParams for KubePluginParams {
    async fn current_namespace(&self) -> Result<String, KameletError> {
        let config = self
            .kube_config()
            .await
            .map_err(|e| KameletError::Namespace(e.to_string()))?;
        Ok(config.default_namespace.clone())
    }

    async fn new_kamelet_client(&self) -> Result<Box<dyn KameletClient>, KameletError> {
        let config = self.kube_config().await?.clone();
        let client = Client::try_from(config)
            .map_err(|e| KameletError::ClientConstruction(e.to_string()))?;
        Ok(Box::new(KubeKameletClient { client }))
    }
}

/// [`KameletClient`] talking to the Kubernetes API server
#[derive(Clone)]
pub struct KubeKameletClient {
    client: Client,
}

impl std::fmt::Debug for KubeKameletClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KubeKameletClient").finish_non_exhaustive()
    }
}

#[async_trait]
impl KameletClient for KubeKameletClient {
    async fn get_kamelet(&self, namespace: &str, name: &str) -> Result<Kamelet, KameletError> {
        let api: Api<Kamelet> = Api::namespaced(self.client.clone(), namespace);
        api.get(name)
            .await
            .map_err(|e| translate_kube_error(e, namespace, name))
    }
}
