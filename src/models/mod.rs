//! Resource model layer
//!
//! Rust types for the CronJobSource CRD and the eventing duck types it embeds.
//!
//! Structure:
//! - `cronjob_source.rs` - The CRD itself (spec and status)
//! - `destination.rs` - Sink destination (object reference and/or URI)
//! - `condition.rs` - Status conditions

pub mod condition;
pub mod cronjob_source;
pub mod destination;

pub use condition::{Condition, ConditionSeverity, ConditionStatus};
pub use cronjob_source::{
    AdapterResources, CronJobSource, CronJobSourceSpec, CronJobSourceStatus, ResourceAmounts,
};
pub use destination::Destination;
