//! `kncron config` handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{paths, ConfigLoader};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "defaultNamespace", "describe.verbose")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "defaultNamespace", "describe.indent")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Start from the file alone so environment overrides are not persisted
            let path = paths::config_path();
            let mut config = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigLoader::load_defaults()
            };

            crate::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_default(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            for key in crate::config::KEYS {
                println!("{}={}", key, crate::config::get_config_value(&config, key)?);
            }
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::config_path().display());
        }
        ConfigSubcommand::Validate => {
            ConfigLoader::validate(&paths::config_path())
                .context("Configuration validation failed")?;
            println!("Configuration is valid");
        }
    }

    Ok(())
}
