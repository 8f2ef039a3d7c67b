//! kncron library
//!
//! Describe pipeline, resource models and CLI plumbing for the `kncron`
//! binary, exposed as a library for testing.

pub mod cli;
pub mod cluster;
pub mod config;
pub mod describe;
pub mod error;
pub mod models;

// Re-export commonly used types for convenience
pub use describe::{AttributeWriter, Describer, OutputFormat, PrefixWriter, Section};
pub use error::{DescribeError, FetchError};
pub use models::{Condition, CronJobSource, Destination};
