//! Configuration types and CLI options.
//!
//! This module defines the enums and structs used for command-line argument
//! parsing, plus the CLI-independent configuration consumed by the library.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::config::constants::{DEFAULT_BIND_ADDRESS, DEFAULT_BULK_CONCURRENCY, DEFAULT_PORT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line interface.
///
/// # Examples
///
/// ```bash
/// # Serve the web UI and JSON API on the default port
/// ns_provider serve
///
/// # Bulk lookup from a file, walking up to the registrable domain
/// ns_provider lookup domains.txt results.csv --walk-up
///
/// # Merge the `domain` column of an export into a running list
/// ns_provider combine export.csv domains.txt --append
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ns_provider",
    about = "Looks up domain nameservers and guesses the managing DNS provider."
)]
pub struct Cli {
    /// Log level: error|warn|info|debug|trace
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// What to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the lookup page and the JSON API
    Serve(ServeArgs),
    /// Resolve every domain in a file and write the results as CSV
    Lookup(LookupArgs),
    /// Merge the `domain` column of a CSV into a de-duplicated domain list
    Combine(CombineArgs),
}

/// Options for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Address to bind the HTTP server to
    #[arg(long, env = "NS_PROVIDER_BIND", default_value = DEFAULT_BIND_ADDRESS)]
    pub bind: String,

    /// Port to listen on
    #[arg(long, env = "NS_PROVIDER_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Provider table (JSON array of {"provider", "regex"}); built-in table if omitted
    #[arg(long, env = "NS_PROVIDER_PROVIDERS")]
    pub providers: Option<PathBuf>,

    /// Cap on in-flight NS lookups per request (unbounded if omitted)
    #[arg(long)]
    pub max_concurrency: Option<usize>,
}

/// Options for `lookup`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// File with one domain per line
    pub input: PathBuf,

    /// CSV file to write
    pub output: PathBuf,

    /// Provider table (JSON array of {"provider", "regex"}); built-in table if omitted
    #[arg(long, env = "NS_PROVIDER_PROVIDERS")]
    pub providers: Option<PathBuf>,

    /// Maximum concurrent NS lookups
    #[arg(long, default_value_t = DEFAULT_BULK_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Retry parent domains up to the registrable domain when a name has no NS records
    #[arg(long)]
    pub walk_up: bool,
}

/// Options for `combine`.
#[derive(Debug, Args)]
pub struct CombineArgs {
    /// Input CSV with a `domain` column
    pub input_csv: PathBuf,

    /// Domain list to write
    pub output: PathBuf,

    /// Append new domains to the output instead of overwriting it
    #[arg(long)]
    pub append: bool,
}

/// HTTP server configuration (no CLI dependencies).
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub bind: String,
    /// Listen port
    pub port: u16,
    /// Optional provider table path
    pub providers: Option<PathBuf>,
    /// Optional cap on in-flight lookups per request
    pub max_concurrency: Option<usize>,
}

impl ServerConfig {
    /// `host:port` string passed to the listener.
    pub fn listen_address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
            port: DEFAULT_PORT,
            providers: None,
            max_concurrency: None,
        }
    }
}

impl From<ServeArgs> for ServerConfig {
    fn from(args: ServeArgs) -> Self {
        Self {
            bind: args.bind,
            port: args.port,
            providers: args.providers,
            max_concurrency: args.max_concurrency,
        }
    }
}

/// Bulk lookup configuration (no CLI dependencies).
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// Input domain list
    pub input: PathBuf,
    /// Output CSV path
    pub output: PathBuf,
    /// Optional provider table path
    pub providers: Option<PathBuf>,
    /// Maximum concurrent lookups
    pub max_concurrency: usize,
    /// Walk up to the registrable domain when a name has no NS records
    pub walk_up: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("domains.txt"),
            output: PathBuf::from("dns-results.csv"),
            providers: None,
            max_concurrency: DEFAULT_BULK_CONCURRENCY,
            walk_up: false,
        }
    }
}

impl From<LookupArgs> for LookupConfig {
    fn from(args: LookupArgs) -> Self {
        Self {
            input: args.input,
            output: args.output,
            providers: args.providers,
            max_concurrency: args.max_concurrency,
            walk_up: args.walk_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 3000);
        assert_eq!(config.listen_address(), "127.0.0.1:3000");
        assert!(config.providers.is_none());
        // Unbounded fan-out unless explicitly capped
        assert!(config.max_concurrency.is_none());
    }

    #[test]
    fn test_lookup_config_default() {
        let config = LookupConfig::default();
        assert_eq!(config.max_concurrency, DEFAULT_BULK_CONCURRENCY);
        assert!(!config.walk_up);
    }

    #[test]
    fn test_serve_args_into_server_config() {
        let args = ServeArgs {
            bind: "0.0.0.0".to_string(),
            port: 8080,
            providers: Some(PathBuf::from("providers.json")),
            max_concurrency: Some(16),
        };
        let config = ServerConfig::from(args);
        assert_eq!(config.listen_address(), "0.0.0.0:8080");
        assert_eq!(config.providers, Some(PathBuf::from("providers.json")));
        assert_eq!(config.max_concurrency, Some(16));
    }
}
