//! Command line parsing tests

use clap::Parser;
use kncron::OutputFormat;
use kncron::cli::{Args, Command, ConfigSubcommand};
use kncron::config::Config;
use kncron::describe::source_name;

fn parse(args: &[&str]) -> Args {
    Args::try_parse_from(args).unwrap()
}

#[test]
fn test_describe_with_flags() {
    let args = parse(&["kncron", "describe", "my-cron-trigger", "-v", "-n", "events"]);
    let Command::Describe(describe) = args.command else {
        panic!("expected describe command");
    };

    assert_eq!(describe.names, vec!["my-cron-trigger"]);
    assert!(describe.verbose);
    assert_eq!(describe.namespace.as_deref(), Some("events"));
    assert_eq!(describe.output, OutputFormat::Text);
    assert_eq!(source_name(&describe.names).unwrap(), "my-cron-trigger");
}

#[test]
fn test_describe_defaults() {
    let args = parse(&["kncron", "describe", "my-cron-trigger"]);
    let Command::Describe(describe) = args.command else {
        panic!("expected describe command");
    };

    assert!(!describe.verbose);
    assert!(describe.namespace.is_none());
    assert!(!describe.verbose(&Config::default()));
}

#[test]
fn test_configured_verbose_applies_without_flag() {
    let args = parse(&["kncron", "describe", "my-cron-trigger"]);
    let Command::Describe(describe) = args.command else {
        panic!("expected describe command");
    };

    let mut config = Config::default();
    config.describe.verbose = true;
    assert!(describe.verbose(&config));
}

#[test]
fn test_no_verbose_wins_over_configuration() {
    let args = parse(&["kncron", "describe", "my-cron-trigger", "--no-verbose"]);
    let Command::Describe(describe) = args.command else {
        panic!("expected describe command");
    };

    let mut config = Config::default();
    config.describe.verbose = true;
    assert!(!describe.verbose(&config));
}

#[test]
fn test_last_verbosity_flag_wins() {
    let config = Config::default();
    for (argv, expected) in [
        (vec!["kncron", "describe", "x", "-v", "--no-verbose"], false),
        (vec!["kncron", "describe", "x", "--no-verbose", "-v"], true),
    ] {
        let Command::Describe(describe) = parse(&argv).command else {
            panic!("expected describe command");
        };
        assert_eq!(describe.verbose(&config), expected, "{:?}", argv);
    }
}

#[test]
fn test_wrong_name_count_is_a_usage_error() {
    for argv in [
        vec!["kncron", "describe"],
        vec!["kncron", "describe", "a", "b"],
    ] {
        let Command::Describe(describe) = parse(&argv).command else {
            panic!("expected describe command");
        };
        let err = source_name(&describe.names).unwrap_err();
        assert_eq!(
            err.to_string(),
            "'kncron describe' requires the name of the CronJob source as single argument"
        );
    }
}

#[test]
fn test_output_formats() {
    let args = parse(&["kncron", "describe", "x", "-o", "yaml"]);
    let Command::Describe(describe) = args.command else {
        panic!("expected describe command");
    };
    assert_eq!(describe.output, OutputFormat::Yaml);

    assert!(Args::try_parse_from(["kncron", "describe", "x", "-o", "table"]).is_err());
}

#[test]
fn test_debug_flag_is_global() {
    let args = parse(&["kncron", "describe", "x", "--debug"]);
    assert!(args.debug);
}

#[test]
fn test_config_set() {
    let args = parse(&["kncron", "config", "set", "describe.verbose", "true"]);
    match args.command {
        Command::Config {
            subcommand: ConfigSubcommand::Set { key, value },
        } => {
            assert_eq!(key, "describe.verbose");
            assert_eq!(value, "true");
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_version_command() {
    assert!(matches!(parse(&["kncron", "version"]).command, Command::Version));
}
