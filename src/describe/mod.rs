//! Describe pipeline for CronJobSource objects
//!
//! A describe invocation fetches one object and then drives a fixed list of
//! section renderers against a single [`PrefixWriter`], flushing after every
//! section. Renderers never see each other; they only share the writer.

pub mod conditions;
pub mod cronjob;
pub mod metadata;
pub mod sink;
pub mod writer;

pub use writer::{AttributeWriter, PrefixWriter, Section, DEFAULT_INDENT};

use chrono::{DateTime, Utc};
use std::io::Write;

use crate::cluster::CronJobSourceClient;
use crate::error::{DescribeError, DescribeResult};
use crate::models::CronJobSource;

/// Reported when the command is not given exactly one name
pub const USAGE_ERROR: &str =
    "'kncron describe' requires the name of the CronJob source as single argument";

/// How the fetched object is printed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable attribute tree
    #[default]
    Text,
    Yaml,
    Json,
}

/// Inputs shared by every section renderer
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    pub verbose: bool,
    /// Reference point for condition ages
    pub now: DateTime<Utc>,
}

type SectionRenderer = fn(&mut dyn AttributeWriter, &CronJobSource, &RenderOptions);

/// Render order; a blank line separates consecutive sections
const SECTIONS: &[SectionRenderer] = &[summary_section, sink_section, conditions_section];

fn summary_section(dw: &mut dyn AttributeWriter, source: &CronJobSource, opts: &RenderOptions) {
    cronjob::write_cron_job_source(dw, source, opts.verbose);
}

fn sink_section(dw: &mut dyn AttributeWriter, source: &CronJobSource, _opts: &RenderOptions) {
    sink::write_sink(dw, source.spec.sink.as_ref());
}

fn conditions_section(dw: &mut dyn AttributeWriter, source: &CronJobSource, opts: &RenderOptions) {
    conditions::write_conditions(dw, source.conditions(), opts.verbose, opts.now);
}

/// Extract the single source name from the positional arguments
pub fn source_name(args: &[String]) -> DescribeResult<&str> {
    match args {
        [name] => Ok(name.as_str()),
        _ => Err(DescribeError::Usage(USAGE_ERROR.to_string())),
    }
}

/// Fetches a CronJobSource and prints it
#[derive(Debug, Clone)]
pub struct Describer {
    verbose: bool,
    output: OutputFormat,
    indent: usize,
    now: Option<DateTime<Utc>>,
}

impl Describer {
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            output: OutputFormat::Text,
            indent: DEFAULT_INDENT,
            now: None,
        }
    }

    pub fn with_output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }

    /// Spaces per nesting level in text output
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Fix the clock used for condition ages
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Fetch `name` and print it to `out`
    ///
    /// Nothing is written when the fetch fails.
    pub async fn describe<C, W>(&self, client: &C, name: &str, out: W) -> DescribeResult<()>
    where
        C: CronJobSourceClient + ?Sized,
        W: Write,
    {
        let source = client.get_cron_job_source(name).await?;
        tracing::debug!(name, "Fetched CronJobSource, rendering");
        self.render(&source, out)
    }

    /// Print an already fetched object
    pub fn render<W: Write>(&self, source: &CronJobSource, mut out: W) -> DescribeResult<()> {
        match self.output {
            OutputFormat::Text => self.render_text(source, out),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(source)?;
                writeln!(out, "{}", json)?;
                Ok(())
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(source)?;
                out.write_all(yaml.as_bytes())?;
                Ok(())
            }
        }
    }

    fn render_text<W: Write>(&self, source: &CronJobSource, out: W) -> DescribeResult<()> {
        let opts = RenderOptions {
            verbose: self.verbose,
            now: self.now.unwrap_or_else(Utc::now),
        };
        let mut dw = PrefixWriter::with_indent(out, self.indent);

        for (i, render) in SECTIONS.iter().enumerate() {
            render(&mut dw, source, &opts);
            if i + 1 < SECTIONS.len() {
                dw.write_line();
            }
            dw.flush()?;
        }
        Ok(())
    }
}
