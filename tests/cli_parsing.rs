//! Tests for CLI subcommand parsing.

use clap::Parser;
use std::path::PathBuf;

use ns_provider::config::{Cli, Command, LogFormat, LogLevel};
use ns_provider::{LookupConfig, ServerConfig};

#[test]
fn test_serve_defaults() {
    let cli = Cli::try_parse_from(["ns_provider", "serve"]).unwrap();
    assert!(matches!(cli.log_level, LogLevel::Info));
    assert!(matches!(cli.log_format, LogFormat::Plain));
    let Command::Serve(args) = cli.command else {
        panic!("expected serve");
    };
    // NS_PROVIDER_* variables are not set in the test environment
    let config = ServerConfig::from(args);
    assert_eq!(config.port, 3000);
    assert!(config.max_concurrency.is_none());
}

#[test]
fn test_serve_options() {
    let cli = Cli::try_parse_from([
        "ns_provider",
        "serve",
        "--bind",
        "0.0.0.0",
        "--port",
        "8080",
        "--providers",
        "providers.json",
        "--max-concurrency",
        "50",
    ])
    .unwrap();
    let Command::Serve(args) = cli.command else {
        panic!("expected serve");
    };
    let config = ServerConfig::from(args);
    assert_eq!(config.listen_address(), "0.0.0.0:8080");
    assert_eq!(config.providers, Some(PathBuf::from("providers.json")));
    assert_eq!(config.max_concurrency, Some(50));
}

#[test]
fn test_lookup_arguments() {
    let cli = Cli::try_parse_from([
        "ns_provider",
        "lookup",
        "domains.txt",
        "out.csv",
        "--walk-up",
        "--max-concurrency",
        "5",
    ])
    .unwrap();
    let Command::Lookup(args) = cli.command else {
        panic!("expected lookup");
    };
    let config = LookupConfig::from(args);
    assert_eq!(config.input, PathBuf::from("domains.txt"));
    assert_eq!(config.output, PathBuf::from("out.csv"));
    assert!(config.walk_up);
    assert_eq!(config.max_concurrency, 5);
}

#[test]
fn test_lookup_requires_input_and_output() {
    assert!(Cli::try_parse_from(["ns_provider", "lookup", "domains.txt"]).is_err());
}

#[test]
fn test_combine_arguments() {
    let cli =
        Cli::try_parse_from(["ns_provider", "combine", "in.csv", "out.txt", "--append"]).unwrap();
    let Command::Combine(args) = cli.command else {
        panic!("expected combine");
    };
    assert_eq!(args.input_csv, PathBuf::from("in.csv"));
    assert!(args.append);
}

#[test]
fn test_global_log_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "ns_provider",
        "serve",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .unwrap();
    assert!(matches!(cli.log_level, LogLevel::Debug));
    assert!(matches!(cli.log_format, LogFormat::Json));
}

#[test]
fn test_invalid_log_level_rejected() {
    assert!(Cli::try_parse_from(["ns_provider", "--log-level", "loud", "serve"]).is_err());
}

#[test]
fn test_subcommand_required() {
    assert!(Cli::try_parse_from(["ns_provider"]).is_err());
}
