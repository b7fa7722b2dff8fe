//! NS discovery that walks up a domain's labels.
//!
//! `www.shop.example.co.uk` is tried as-is, then `shop.example.co.uk`, then
//! `example.co.uk`. The walk stops at the registrable domain as given by the
//! Public Suffix List, so it never queries a public suffix like `co.uk`.

use crate::dns::NsLookup;
use crate::error_handling::ResolutionError;

/// Nameservers found by `find_ns`, plus the name they were found at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NsDiscovery {
    /// NS target hostnames
    pub nameservers: Vec<String>,
    /// The (possibly parent) name that answered
    pub found_at: String,
}

/// Finds the nameservers responsible for `domain`.
///
/// # Errors
///
/// Returns the error from the last attempted level, or a `Lookup` error with
/// `"No NS found"` if no level was attempted.
pub async fn find_ns(
    domain: &str,
    resolver: &dyn NsLookup,
) -> Result<NsDiscovery, ResolutionError> {
    let lowered = domain.to_ascii_lowercase();
    let registrable = psl::domain_str(&lowered).unwrap_or(&lowered);
    let labels: Vec<&str> = domain.split('.').collect();
    let registrable_labels = registrable.split('.').count();

    let mut last_error = None;
    for start in 0..(labels.len().saturating_sub(registrable_labels) + 1) {
        let candidate = labels[start..].join(".");
        match resolver.lookup_ns(&candidate).await {
            Ok(nameservers) if !nameservers.is_empty() => {
                if start > 0 {
                    log::debug!("Found NS records for {domain} at parent {candidate}");
                }
                return Ok(NsDiscovery {
                    nameservers,
                    found_at: candidate,
                });
            }
            Ok(_) => last_error = Some(ResolutionError::NoRecords(candidate.clone())),
            Err(e) => last_error = Some(e),
        }
        if candidate.eq_ignore_ascii_case(registrable) {
            break;
        }
    }

    Err(last_error.unwrap_or_else(|| ResolutionError::Lookup("No NS found".to_string())))
}
