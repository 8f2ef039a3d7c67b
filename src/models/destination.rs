//! Event delivery destination

use k8s_openapi::api::core::v1::ObjectReference;
use serde::{Deserialize, Serialize};

/// Either an object reference, a URI, or both
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    /// Addressable object events are delivered to
    #[serde(rename = "ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<ObjectReference>,

    /// Absolute URI, or a path relative to the reference's address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
}

impl Destination {
    /// Destination pointing at an object
    pub fn to_ref(kind: &str, api_version: &str, name: &str) -> Self {
        Self {
            reference: Some(ObjectReference {
                kind: Some(kind.to_string()),
                api_version: Some(api_version.to_string()),
                name: Some(name.to_string()),
                ..Default::default()
            }),
            uri: None,
        }
    }

    /// Destination pointing at a URI
    pub fn to_uri(uri: &str) -> Self {
        Self {
            reference: None,
            uri: Some(uri.to_string()),
        }
    }
}
