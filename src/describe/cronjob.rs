//! CronJobSource identity and spec renderer

use super::metadata::write_metadata;
use super::writer::AttributeWriter;
use crate::models::{AdapterResources, CronJobSource, ResourceAmounts};

/// Metadata followed by the schedule and payload
pub fn write_cron_job_source(dw: &mut dyn AttributeWriter, source: &CronJobSource, verbose: bool) {
    write_metadata(dw, &source.metadata, verbose);
    dw.write_attribute("Schedule", &source.spec.schedule);
    dw.write_attribute("Data", &source.spec.data);
    if !verbose {
        return;
    }
    if let Some(account) = &source.spec.service_account_name {
        dw.write_attribute("Service Account", account);
    }
    if let Some(resources) = &source.spec.resources {
        write_resources(dw, resources);
    }
}

fn write_resources(dw: &mut dyn AttributeWriter, resources: &AdapterResources) {
    let mut section = dw.section("Resources");
    if let Some(requests) = &resources.requests {
        section.write_attribute("Requests", &amounts(requests));
    }
    if let Some(limits) = &resources.limits {
        section.write_attribute("Limits", &amounts(limits));
    }
}

fn amounts(amounts: &ResourceAmounts) -> String {
    let mut parts = Vec::new();
    if let Some(cpu) = &amounts.cpu {
        parts.push(format!("cpu={}", cpu));
    }
    if let Some(memory) = &amounts.memory {
        parts.push(format!("memory={}", memory));
    }
    parts.join(", ")
}
