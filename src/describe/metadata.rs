//! Object metadata renderer

use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ObjectMeta, Time};
use std::collections::BTreeMap;

use super::writer::AttributeWriter;

/// Annotations that only repeat the object itself
const SKIPPED_ANNOTATIONS: &[&str] = &["kubectl.kubernetes.io/last-applied-configuration"];

/// Write the name, plus namespace, labels, annotations and creation time when verbose
pub fn write_metadata(dw: &mut dyn AttributeWriter, meta: &ObjectMeta, verbose: bool) {
    dw.write_attribute("Name", meta.name.as_deref().unwrap_or_default());
    if !verbose {
        return;
    }
    dw.write_attribute("Namespace", meta.namespace.as_deref().unwrap_or_default());
    dw.write_attribute("Labels", &join_map(meta.labels.as_ref(), &[]));
    dw.write_attribute(
        "Annotations",
        &join_map(meta.annotations.as_ref(), SKIPPED_ANNOTATIONS),
    );
    dw.write_attribute(
        "Created",
        &meta
            .creation_timestamp
            .as_ref()
            .and_then(timestamp_string)
            .unwrap_or_default(),
    );
}

/// `key=value` pairs in key order, joined by `, `
fn join_map(map: Option<&BTreeMap<String, String>>, skip: &[&str]) -> String {
    map.map(|entries| {
        entries
            .iter()
            .filter(|(key, _)| !skip.contains(&key.as_str()))
            .map(|(key, value)| format!("{}={}", key, value))
            .collect::<Vec<_>>()
            .join(", ")
    })
    .unwrap_or_default()
}

/// RFC3339 form of an API timestamp, as the API server itself serializes it
fn timestamp_string(time: &Time) -> Option<String> {
    serde_json::to_value(time)
        .ok()
        .and_then(|value| value.as_str().map(str::to_string))
}
