//! `kncron describe`

use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use clap::Args;

use crate::cluster::{self, CronJobSourceClient, KubeCronJobSourceClient};
use crate::config::{Config, ConfigLoader};
use crate::describe::{self, Describer, OutputFormat};

/// Arguments for `kncron describe`
#[derive(Args, Debug)]
#[command(after_help = "Examples:\n  \
    # Describe a CronJob source with name 'my-cron-trigger'\n  \
    kncron describe my-cron-trigger")]
pub struct DescribeArgs {
    /// Name of the CronJob source
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// More output
    #[arg(long, short = 'v', overrides_with = "no_verbose")]
    pub verbose: bool,

    /// Summary output, even when verbose output is configured
    #[arg(long, overrides_with = "verbose")]
    pub no_verbose: bool,

    /// Namespace to look in (defaults to the configured or kubeconfig namespace)
    #[arg(long, short = 'n')]
    pub namespace: Option<String>,

    /// Output format
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

impl DescribeArgs {
    /// Resolve verbosity from the flags, falling back to the configuration
    pub fn verbose(&self, config: &Config) -> bool {
        if self.no_verbose {
            return false;
        }
        self.verbose || config.describe.verbose
    }

    pub async fn run(self) -> Result<()> {
        self.run_with(load_config, connect, std::io::stdout().lock())
            .await
    }

    /// Describe with injected configuration and client construction
    ///
    /// The name is validated before either is called. `connect` receives the
    /// `--namespace` flag and the configured default namespace.
    pub async fn run_with<L, F, Fut, C, W>(self, load_config: L, connect: F, out: W) -> Result<()>
    where
        L: FnOnce() -> Result<Config>,
        F: FnOnce(Option<String>, Option<String>) -> Fut,
        Fut: Future<Output = Result<C>>,
        C: CronJobSourceClient,
        W: Write,
    {
        let name = describe::source_name(&self.names)?;

        let config = load_config()?;
        let client = connect(self.namespace.clone(), config.default_namespace.clone()).await?;
        let describer = Describer::new(self.verbose(&config))
            .with_output(self.output)
            .with_indent(config.describe.indent);

        describer.describe(&client, name, out).await?;
        Ok(())
    }
}

fn load_config() -> Result<Config> {
    let config = ConfigLoader::load().context("Failed to load configuration")?;
    ConfigLoader::check(&config)?;
    tracing::debug!(
        "Configuration loaded: defaultNamespace={:?}, verbose={}, indent={}",
        config.default_namespace,
        config.describe.verbose,
        config.describe.indent
    );
    Ok(config)
}

async fn connect(
    flag: Option<String>,
    configured: Option<String>,
) -> Result<KubeCronJobSourceClient> {
    let connection = cluster::connect().await?;
    let namespace = cluster::resolve_namespace(
        flag.as_deref(),
        configured.as_deref(),
        &connection.context_namespace,
    );
    tracing::debug!(namespace = %namespace, "Resolved namespace");
    Ok(KubeCronJobSourceClient::new(connection.client, &namespace))
}
