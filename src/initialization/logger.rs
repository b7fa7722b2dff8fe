//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::fmt::Formatter;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with one of two line formats: colored plain text
/// for terminals, or JSON objects for log collectors.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Override with CLI args (takes precedence)
/// RUST_LOG=debug ns_provider serve --log-level info
///
/// # Per-module filtering via RUST_LOG
/// RUST_LOG=ns_provider=debug,hickory_resolver=info ns_provider lookup domains.txt out.csv
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let mut builder = env_logger::Builder::from_default_env();

    builder.filter_level(level);
    builder.filter_module("hyper", LevelFilter::Info);
    builder.filter_module("hickory_resolver", LevelFilter::Warn);
    // Truncated or malformed UDP answers are retried by hickory itself
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("ns_provider", level);

    match format {
        LogFormat::Json => builder.format(write_json_line),
        LogFormat::Plain => builder.format(write_plain_line),
    };

    // try_init so a second initialization (tests) is an error, not a panic
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// One JSON object per line: `{"time", "level", "module", "message"}`.
fn write_json_line(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let line = serde_json::json!({
        "time": chrono::Local::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "level": record.level().as_str(),
        "module": record.module_path().unwrap_or_else(|| record.target()),
        "message": record.args().to_string(),
    });
    writeln!(buf, "{line}")
}

/// `HH:MM:SS LEVEL module: message`, with the level colored.
fn write_plain_line(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = format!("{:<5}", record.level());
    let level = match record.level() {
        Level::Error => level.red().bold(),
        Level::Warn => level.yellow(),
        Level::Info => level.green(),
        Level::Debug | Level::Trace => level.dimmed(),
    };
    writeln!(
        buf,
        "{} {} {}: {}",
        chrono::Local::now().format("%H:%M:%S"),
        level,
        record.target().cyan(),
        record.args()
    )
}
