//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use serde::{Deserialize, Serialize};

use crate::describe::DEFAULT_INDENT;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Namespace used when `--namespace` is not given
    /// Falls back to the kubeconfig context namespace when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_namespace: Option<String>,

    /// Describe output configuration
    #[serde(default)]
    pub describe: DescribeConfig,
}

/// Describe output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescribeConfig {
    /// Print verbose output without passing `--verbose`
    #[serde(default = "default_false")]
    pub verbose: bool,

    /// Spaces per nesting level
    #[serde(default = "default_indent")]
    pub indent: usize,
}

/// Allowed range for `describe.indent`
pub const INDENT_RANGE: std::ops::RangeInclusive<usize> = 1..=8;

// Default value functions
fn default_false() -> bool {
    false
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for DescribeConfig {
    fn default() -> Self {
        Self {
            verbose: default_false(),
            indent: default_indent(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert!(config.default_namespace.is_none());
        assert!(!config.describe.verbose);
        assert_eq!(config.describe.indent, 2);
    }

    #[test]
    fn test_config_serialization() {
        let config = Config {
            default_namespace: Some("events".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("defaultNamespace: events"));
        assert!(yaml.contains("verbose: false"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r#"
defaultNamespace: my-ns
describe:
  verbose: true
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.default_namespace.as_deref(), Some("my-ns"));
        assert!(config.describe.verbose);
        assert_eq!(config.describe.indent, 2);
    }
}
