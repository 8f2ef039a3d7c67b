//! Configuration system for kncron
//!
//! A single YAML file layered over built-in defaults, with environment
//! variable overrides on top.

pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{Config, DescribeConfig};

/// Keys accepted by `config get` and `config set`
pub const KEYS: &[&str] = &["defaultNamespace", "describe.verbose", "describe.indent"];

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &schema::Config, key: &str) -> anyhow::Result<String> {
    match key {
        "defaultNamespace" => Ok(config.default_namespace.clone().unwrap_or_default()),
        "describe.verbose" => Ok(config.describe.verbose.to_string()),
        "describe.indent" => Ok(config.describe.indent.to_string()),
        _ => Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut schema::Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "defaultNamespace" => {
            if value.is_empty() {
                config.default_namespace = None;
            } else {
                config.default_namespace = Some(value.to_string());
            }
        }
        "describe.verbose" => {
            config.describe.verbose = value
                .parse()
                .context("describe.verbose must be 'true' or 'false'")?;
        }
        "describe.indent" => {
            config.describe.indent = value
                .parse()
                .context("describe.indent must be a number")?;
            ConfigLoader::check(config)?;
        }
        _ => return Err(anyhow::anyhow!("Unknown configuration key: {}", key)),
    }

    Ok(())
}
