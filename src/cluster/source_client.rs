//! CronJobSource lookup
//!
//! The describe flow only depends on [`CronJobSourceClient`]; the kube-backed
//! implementation is bound to a single namespace.

use async_trait::async_trait;
use kube::{Api, Client};

use crate::error::FetchError;
use crate::models::CronJobSource;

/// Namespace-scoped access to CronJobSource objects
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CronJobSourceClient: Send + Sync {
    /// Fetch one source by name
    async fn get_cron_job_source(&self, name: &str) -> Result<CronJobSource, FetchError>;
}

/// Client backed by the Kubernetes API
pub struct KubeCronJobSourceClient {
    api: Api<CronJobSource>,
    namespace: String,
}

impl KubeCronJobSourceClient {
    pub fn new(client: Client, namespace: &str) -> Self {
        Self {
            api: Api::namespaced(client, namespace),
            namespace: namespace.to_string(),
        }
    }
}

#[async_trait]
impl CronJobSourceClient for KubeCronJobSourceClient {
    async fn get_cron_job_source(&self, name: &str) -> Result<CronJobSource, FetchError> {
        tracing::debug!(name, namespace = %self.namespace, "Fetching CronJobSource");
        match self.api.get_opt(name).await? {
            Some(source) => Ok(source),
            None => Err(FetchError::NotFound {
                name: name.to_string(),
                namespace: self.namespace.clone(),
            }),
        }
    }
}
