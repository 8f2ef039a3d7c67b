//! CRD model compatibility tests
//!
//! These tests ensure the CronJobSource model keeps addressing the right API
//! and still reads objects as the eventing controller writes them.

use kncron::models::cronjob_source::{API_GROUP, API_VERSION, PLURAL};
use kncron::models::{ConditionSeverity, ConditionStatus};
use kncron::CronJobSource;
use kube::Resource;
use serde_json::json;

#[test]
fn test_resource_identity() {
    assert_eq!(CronJobSource::group(&()), API_GROUP);
    assert_eq!(CronJobSource::version(&()), API_VERSION);
    assert_eq!(CronJobSource::kind(&()), "CronJobSource");
    assert_eq!(CronJobSource::plural(&()), PLURAL);
    assert_eq!(
        CronJobSource::api_version(&()),
        "sources.eventing.knative.dev/v1alpha1"
    );
}

#[test]
fn test_reads_controller_written_object() {
    let source: CronJobSource = serde_json::from_value(json!({
        "apiVersion": "sources.eventing.knative.dev/v1alpha1",
        "kind": "CronJobSource",
        "metadata": {
            "name": "test-cronjob-source",
            "namespace": "default",
            "uid": "0c9c2a9e-2f1c-4c9f-9c1a-1d6f1f6f0d8a",
            "generation": 1
        },
        "spec": {
            "schedule": "*/1 * * * *",
            "data": "{\"message\": \"Hello world!\"}",
            "sink": {
                "ref": {
                    "apiVersion": "serving.knative.dev/v1",
                    "kind": "Service",
                    "name": "event-display"
                }
            }
        },
        "status": {
            "observedGeneration": 1,
            "sinkUri": "http://event-display.default.svc.cluster.local",
            "conditions": [
                {
                    "type": "Deployed",
                    "status": "True",
                    "lastTransitionTime": "2024-05-01T10:00:00Z"
                },
                {
                    "type": "EventTypeProvided",
                    "status": "False",
                    "severity": "Info",
                    "reason": "EventTypesNotProvided"
                },
                { "type": "Ready", "status": "Unknown" }
            ]
        }
    }))
    .unwrap();

    let conditions = source.conditions();
    assert_eq!(conditions.len(), 3);
    assert_eq!(conditions[1].severity, ConditionSeverity::Info);
    assert_eq!(conditions[2].status, ConditionStatus::Unknown);
    assert_eq!(
        source
            .status
            .as_ref()
            .and_then(|s| s.sink_uri.as_deref()),
        Some("http://event-display.default.svc.cluster.local")
    );
}

#[test]
fn test_serialization_round_trip_keeps_sink_ref_key() {
    let source = CronJobSource::new("rt", Default::default());
    let value = serde_json::to_value(&source).unwrap();
    assert_eq!(value["kind"], "CronJobSource");
    assert!(value["spec"].get("sink").is_none());
}

#[test]
fn test_unrecognised_severity_does_not_reject_object() {
    let source: CronJobSource = serde_json::from_value(json!({
        "apiVersion": "sources.eventing.knative.dev/v1alpha1",
        "kind": "CronJobSource",
        "metadata": { "name": "my-cron-trigger" },
        "spec": { "schedule": "*/2 * * * *" },
        "status": {
            "conditions": [
                { "type": "Ready", "status": "False", "severity": "Critical" }
            ]
        }
    }))
    .unwrap();

    assert_eq!(source.conditions()[0].severity, ConditionSeverity::Error);
}
