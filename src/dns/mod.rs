//! DNS resolution of nameserver records.
//!
//! This module provides async NS lookups using `hickory-resolver`:
//! - `NsLookup`: the seam the batch orchestrator resolves through
//! - `SystemResolver`: the hickory-backed implementation (host DNS configuration)
//! - `lookup_ns_records`: a single best-effort NS query
//! - `find_ns`: NS discovery that walks up to the registrable domain

mod records;
mod walk;

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

pub use records::lookup_ns_records;
pub use walk::{find_ns, NsDiscovery};

/// Something that can answer "what are the nameservers of this domain?".
///
/// Implementations return the NS target hostnames in resolver order, or a
/// `ResolutionError` whose text is shown to the user in place of a result.
#[async_trait]
pub trait NsLookup: Send + Sync {
    /// Looks up the NS records of `domain`.
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, ResolutionError>;
}

/// `NsLookup` backed by the host's configured DNS servers.
#[derive(Clone)]
pub struct SystemResolver {
    inner: Arc<TokioAsyncResolver>,
}

impl SystemResolver {
    /// Wraps an already-configured hickory resolver.
    pub fn new(inner: TokioAsyncResolver) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

#[async_trait]
impl NsLookup for SystemResolver {
    async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, ResolutionError> {
        lookup_ns_records(domain, &self.inner).await
    }
}
