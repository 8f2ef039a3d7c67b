//! Configuration loading and layering
//!
//! Precedence order (highest to lowest):
//! 1. Environment variable overrides
//! 2. Config file
//! 3. Built-in defaults

use super::{
    paths,
    schema::{Config, INDENT_RANGE},
};
use anyhow::{Context, Result};
use std::path::Path;

/// Overrides `defaultNamespace`
pub const ENV_NAMESPACE: &str = "KNCRON_NAMESPACE";

/// Overrides `describe.verbose`
pub const ENV_VERBOSE: &str = "KNCRON_VERBOSE";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    pub fn load() -> Result<Config> {
        Self::load_from(&paths::config_path())
    }

    /// Load configuration from `path`, using defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Config> {
        let config = if path.exists() {
            Self::load_file(path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::load_defaults()
        };
        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        tracing::debug!("Loaded config file {}", path.display());
        Ok(config)
    }

    /// Validate the configuration file, if there is one
    ///
    /// Fails on invalid YAML, invalid value types or out-of-range values.
    pub fn validate(path: &Path) -> Result<()> {
        if !path.exists() {
            return Ok(());
        }
        let config = Self::load_file(path)?;
        Self::check(&config)
    }

    /// Check value ranges that serde cannot express
    pub fn check(config: &Config) -> Result<()> {
        if !INDENT_RANGE.contains(&config.describe.indent) {
            return Err(anyhow::anyhow!(
                "describe.indent must be between {} and {}, got {}",
                INDENT_RANGE.start(),
                INDENT_RANGE.end(),
                config.describe.indent
            ));
        }
        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        Config::default()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(config: Config) -> Config {
        Self::apply_overrides(config, |key| std::env::var(key).ok())
    }

    fn apply_overrides(mut config: Config, env: impl Fn(&str) -> Option<String>) -> Config {
        if let Some(namespace) = env(ENV_NAMESPACE) {
            config.default_namespace = Some(namespace);
        }

        if let Some(verbose) = env(ENV_VERBOSE) {
            if let Ok(val) = verbose.parse::<bool>() {
                config.describe.verbose = val;
            }
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save to the default configuration path
    pub fn save_default(config: &Config) -> Result<()> {
        Self::save(config, &paths::config_path())
    }
}
