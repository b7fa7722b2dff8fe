//! NS record queries.

use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

/// Queries NS (nameserver) records for a domain.
///
/// The domain is passed to the resolver as-is; malformed names come back as
/// resolution errors. Hostnames keep the resolver's order and are neither
/// sorted nor de-duplicated. The root label's trailing dot is dropped.
///
/// # Errors
///
/// Returns `ResolutionError::Lookup` with the resolver's message on any query
/// failure, and `ResolutionError::NoRecords` if the answer holds no NS data.
pub async fn lookup_ns_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolutionError> {
    match resolver.lookup(domain, RecordType::NS).await {
        Ok(lookup) => {
            let nameservers: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::NS(ns) = rdata {
                        Some(presentation_name(&ns.to_utf8()))
                    } else {
                        None
                    }
                })
                .collect();
            if nameservers.is_empty() {
                log::debug!("NS lookup for {domain} returned no NS data");
                return Err(ResolutionError::NoRecords(domain.to_string()));
            }
            Ok(nameservers)
        }
        Err(e) => {
            log::debug!("Failed to lookup NS records for {domain}: {e}");
            Err(ResolutionError::Lookup(e.to_string()))
        }
    }
}

/// Strips the root label from a fully-qualified name (`ns1.example.com.`).
pub(crate) fn presentation_name(name: &str) -> String {
    name.strip_suffix('.').unwrap_or(name).to_string()
}
