//! Configuration constants.
//!
//! Defaults shared by the CLI, the HTTP server and the bulk lookup runner.

/// Provider label used when no rule in the provider table matches.
pub const UNKNOWN_PROVIDER: &str = "Unknown";

/// Provider label written by the walk-up bulk lookup when no nameservers were found.
pub const ERROR_PROVIDER: &str = "Error";

/// Suffix that marks a nameserver as operated by Cloudflare.
pub const CLOUDFLARE_SUFFIX: &str = "cloudflare.com";

/// Default address the HTTP server binds to.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1";

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Default number of in-flight NS lookups for the bulk `lookup` command.
pub const DEFAULT_BULK_CONCURRENCY: usize = 20;

/// Bulk lookups log a progress line every this many domains.
pub const PROGRESS_LOG_INTERVAL: usize = 1000;

/// Message returned with HTTP 400 when the request body is not a list of domains.
pub const INVALID_INPUT_MESSAGE: &str = "Invalid input";

/// File name offered for CSV downloads.
pub const CSV_DOWNLOAD_FILENAME: &str = "dns-results.csv";
