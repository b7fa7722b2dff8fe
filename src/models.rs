use serde::{Deserialize, Serialize};

use crate::config::UNKNOWN_PROVIDER;
use crate::error_handling::ResolutionError;
use crate::providers::{uses_cloudflare, ProviderTable};

/// Lookup outcome for one input domain.
///
/// `dns_response` carries either the comma-joined nameservers or the
/// resolution error message. There is no separate status field; the JSON
/// shape is `{domain, usesCloudflare, provider, dnsResponse}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainResult {
    /// The domain exactly as submitted
    pub domain: String,
    /// Any nameserver under cloudflare.com
    pub uses_cloudflare: bool,
    /// Guessed provider, or "Unknown"
    pub provider: String,
    /// Nameservers joined with ", ", or the lookup error
    pub dns_response: String,
}

impl DomainResult {
    /// Builds a result from resolved nameservers.
    pub fn from_nameservers(domain: &str, nameservers: &[String], table: &ProviderTable) -> Self {
        Self {
            domain: domain.to_string(),
            uses_cloudflare: uses_cloudflare(nameservers),
            provider: table.classify(nameservers).to_string(),
            dns_response: nameservers.join(", "),
        }
    }

    /// Builds a result for a domain whose lookup failed.
    pub fn from_error(domain: &str, error: &ResolutionError) -> Self {
        Self {
            domain: domain.to_string(),
            uses_cloudflare: false,
            provider: UNKNOWN_PROVIDER.to_string(),
            dns_response: error.to_string(),
        }
    }
}
