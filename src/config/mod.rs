//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, labels, limits)
//! - CLI option types and parsing
//! - Library-level configuration structs for the server and bulk lookups

mod constants;
mod types;

pub use constants::*;
pub use types::{
    Cli, CombineArgs, Command, LogFormat, LogLevel, LookupArgs, LookupConfig, ServeArgs,
    ServerConfig,
};
