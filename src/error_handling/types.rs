//! Error type definitions.
//!
//! Domain-level failures (`ResolutionError`) are converted to data by the batch
//! orchestrator. Only `InputValidationError` reaches HTTP callers, and only
//! `InitializationError` stops the process.

use std::path::PathBuf;

use log::SetLoggerError;
use thiserror::Error;

use crate::config::INVALID_INPUT_MESSAGE;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind server to {addr}: {source}")]
    BindError {
        /// Address that could not be bound
        addr: String,
        /// Underlying socket error
        #[source]
        source: std::io::Error,
    },
}

/// A failed NS lookup for a single domain.
///
/// The `Display` text is what ends up in `dnsResponse`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    /// The resolver returned an error (NXDOMAIN, SERVFAIL, timeout, network).
    #[error("{0}")]
    Lookup(String),

    /// The query succeeded but carried no NS records.
    #[error("No NS records found for {0}")]
    NoRecords(String),
}

/// Failure loading an external provider table.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The file could not be read.
    #[error("Failed to read provider table {}: {source}", path.display())]
    Read {
        /// Path of the table
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The file is not a JSON array of `{provider, regex}` entries.
    #[error("Failed to parse provider table: {0}")]
    Parse(#[from] serde_json::Error),

    /// An entry's pattern does not compile.
    #[error("Invalid pattern for provider '{provider}': {source}")]
    InvalidPattern {
        /// Provider whose pattern failed
        provider: String,
        /// Regex compilation error
        #[source]
        source: regex::Error,
    },
}

/// The request body is not an object with a `domains` array of strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", INVALID_INPUT_MESSAGE)]
pub struct InputValidationError {
    /// What was wrong with the payload (logged, never returned to the client)
    pub reason: String,
}

impl InputValidationError {
    /// Creates an error with a diagnostic reason.
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}
