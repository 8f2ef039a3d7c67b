//! Kubernetes client module
//!
//! Handles connection to the Kubernetes API server and namespace resolution.
//!
//! Uses the default kubeconfig loading strategy:
//! 1. In-cluster config (if running in a pod)
//! 2. KUBECONFIG environment variable
//! 3. ~/.kube/config

pub mod source_client;

pub use source_client::{CronJobSourceClient, KubeCronJobSourceClient};

use anyhow::{Context, Result};
use kube::{Client, Config};

/// A connected client together with the namespace of the active context
pub struct ClusterConnection {
    pub client: Client,
    pub context_namespace: String,
}

/// Infer cluster configuration and build a client
///
/// No request is sent to the API server here.
pub async fn connect() -> Result<ClusterConnection> {
    let config = Config::infer()
        .await
        .context("Failed to load Kubernetes configuration")?;
    let context_namespace = config.default_namespace.clone();
    tracing::debug!(
        cluster_url = %config.cluster_url,
        namespace = %context_namespace,
        "Inferred Kubernetes configuration"
    );

    let client = Client::try_from(config).context("Failed to create Kubernetes client")?;
    Ok(ClusterConnection {
        client,
        context_namespace,
    })
}

/// Pick the namespace to look in
///
/// Precedence: explicit flag, then configured default, then the kubeconfig
/// context namespace. Empty values are skipped.
pub fn resolve_namespace(
    flag: Option<&str>,
    configured: Option<&str>,
    context_namespace: &str,
) -> String {
    [flag, configured]
        .into_iter()
        .flatten()
        .find(|ns| !ns.is_empty())
        .unwrap_or(context_namespace)
        .to_string()
}
