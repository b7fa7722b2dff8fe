//! ns_provider library: nameserver lookup and DNS provider guessing
//!
//! Resolves the NS records of a batch of domains and guesses each domain's
//! DNS provider by matching nameserver hostnames against an ordered table of
//! provider suffix patterns.
//!
//! # Example
//!
//! ```no_run
//! use ns_provider::{analyze, init_resolver, ProviderTable};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let resolver = init_resolver();
//! let table = ProviderTable::builtin();
//! let domains = vec!["example.com".to_string(), "cloudflare.com".to_string()];
//!
//! for result in analyze(&domains, resolver.as_ref(), &table).await {
//!     println!("{}: {} ({})", result.domain, result.provider, result.dns_response);
//! }
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime.

#![warn(missing_docs)]

mod analysis;
pub mod config;
pub mod dns;
pub mod domain;
mod error_handling;
pub mod export;
pub mod initialization;
mod models;
pub mod providers;
mod run;
pub mod server;

pub use analysis::{analyze, analyze_bounded, analyze_domain};
pub use config::{LogFormat, LogLevel, LookupConfig, ServerConfig};
pub use error_handling::{
    ConfigLoadError, InitializationError, InputValidationError, ResolutionError,
};
pub use initialization::init_resolver;
pub use models::DomainResult;
pub use providers::{uses_cloudflare, ProviderRule, ProviderTable};
pub use run::{run_lookup, run_lookup_with, LookupReport};
pub use server::run_server;
