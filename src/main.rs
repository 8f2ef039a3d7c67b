//! kncron - inspect Knative CronJob event sources
//!
//! Fetches a CronJobSource from the cluster and prints it as an indented
//! attribute tree.

use anyhow::Result;
use clap::Parser;

use kncron::cli::{self, Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let log_file = cli::init_logging(args.debug)?;
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    match args.command {
        Command::Describe(describe) => describe.run().await,
        Command::Config { subcommand } => cli::handle_config_command(subcommand),
        Command::Version => {
            cli::display_version();
            Ok(())
        }
    }
}
