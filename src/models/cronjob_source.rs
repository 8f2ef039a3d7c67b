//! CronJobSource custom resource
//!
//! A CronJobSource emits an event carrying `data` to its sink every time
//! `schedule` fires.

use kube::CustomResource;
use serde::{Deserialize, Serialize};

use super::{Condition, Destination};

/// API group of the CronJobSource CRD
pub const API_GROUP: &str = "sources.eventing.knative.dev";

/// Served version of the CronJobSource CRD
pub const API_VERSION: &str = "v1alpha1";

/// Plural resource name as served by the API
pub const PLURAL: &str = "cronjobsources";

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[kube(
    group = "sources.eventing.knative.dev",
    version = "v1alpha1",
    kind = "CronJobSource",
    plural = "cronjobsources",
    namespaced,
    status = "CronJobSourceStatus",
    schema = "disabled"
)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSourceSpec {
    /// Cron expression, e.g. `*/2 * * * *`
    pub schedule: String,

    /// Payload sent with every event
    #[serde(default)]
    pub data: String,

    /// Where events are delivered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink: Option<Destination>,

    /// Service account the receive adapter runs as
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_account_name: Option<String>,

    /// Compute resources for the receive adapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<AdapterResources>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdapterResources {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requests: Option<ResourceAmounts>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<ResourceAmounts>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceAmounts {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cpu: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CronJobSourceStatus {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub conditions: Vec<Condition>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_generation: Option<i64>,

    /// Resolved sink address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sink_uri: Option<String>,
}

impl CronJobSource {
    /// Status conditions, empty when the controller has not reported yet
    pub fn conditions(&self) -> &[Condition] {
        self.status
            .as_ref()
            .map(|status| status.conditions.as_slice())
            .unwrap_or_default()
    }
}
