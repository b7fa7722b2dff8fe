//! DNS resolver initialization.

use std::sync::Arc;

use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::dns::SystemResolver;

/// Initializes the DNS resolver used for NS lookups.
///
/// Reads the host's DNS configuration (`/etc/resolv.conf` on Unix) and keeps
/// its timeouts and attempt counts untouched. If the system configuration
/// cannot be read, falls back to the library's default upstream servers.
///
/// # Returns
///
/// A `SystemResolver` wrapped in `Arc` for sharing across tasks.
pub fn init_resolver() -> Arc<SystemResolver> {
    let resolver = match TokioAsyncResolver::tokio_from_system_conf() {
        Ok(resolver) => {
            log::debug!("Using system DNS configuration");
            resolver
        }
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}); using default resolvers");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        }
    };
    Arc::new(SystemResolver::new(resolver))
}
