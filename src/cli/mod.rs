//! CLI command handling module
//!
//! Handles all CLI subcommands and argument parsing.

mod config;
mod describe;
mod logging;
mod version;

pub use config::{handle_config_command, ConfigSubcommand};
pub use describe::DescribeArgs;
pub use logging::*;
pub use version::display_version;

use clap::{Parser, Subcommand};

/// kncron - inspect Knative CronJob event sources
#[derive(Parser, Debug)]
#[command(name = "kncron")]
#[command(about = "Inspect Knative CronJob event sources", long_about = None)]
pub struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd', global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Main commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Describe a CronJob source
    Describe(DescribeArgs),

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Show version information
    Version,
}
