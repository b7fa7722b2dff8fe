//! Batch analysis: resolve, classify, and reassemble in input order.
//!
//! Each domain is resolved independently. A failed lookup becomes a result
//! row carrying the error text; it never cancels or delays other domains.

use futures::future::join_all;
use futures::stream::{self, StreamExt};

use crate::dns::NsLookup;
use crate::models::DomainResult;
use crate::providers::ProviderTable;

/// Resolves and classifies a single domain. Never fails.
pub async fn analyze_domain(
    domain: &str,
    resolver: &dyn NsLookup,
    table: &ProviderTable,
) -> DomainResult {
    match resolver.lookup_ns(domain).await {
        Ok(nameservers) => DomainResult::from_nameservers(domain, &nameservers, table),
        Err(e) => {
            log::debug!("NS lookup failed for {domain}: {e}");
            DomainResult::from_error(domain, &e)
        }
    }
}

/// Analyzes every domain concurrently with no limit on in-flight lookups.
///
/// Returns exactly one result per input, in input order. Duplicates are
/// resolved once per occurrence.
pub async fn analyze(
    domains: &[String],
    resolver: &dyn NsLookup,
    table: &ProviderTable,
) -> Vec<DomainResult> {
    join_all(
        domains
            .iter()
            .map(|domain| analyze_domain(domain, resolver, table)),
    )
    .await
}

/// Like `analyze`, with at most `limit` lookups in flight.
///
/// A `limit` of 0 is treated as 1.
pub async fn analyze_bounded(
    domains: &[String],
    resolver: &dyn NsLookup,
    table: &ProviderTable,
    limit: usize,
) -> Vec<DomainResult> {
    // Collected up front so the returned future stays `Send`
    let lookups: Vec<_> = domains
        .iter()
        .map(|domain| analyze_domain(domain, resolver, table))
        .collect();
    stream::iter(lookups).buffered(limit.max(1)).collect().await
}
