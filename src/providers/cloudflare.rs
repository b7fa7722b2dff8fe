//! Cloudflare nameserver detection.
//!
//! Kept separate from the rule table: the flag must not change when the
//! table's own Cloudflare rule is edited or removed.

use crate::config::CLOUDFLARE_SUFFIX;

/// True if any nameserver ends with `cloudflare.com` (case-insensitive).
pub fn uses_cloudflare<S: AsRef<str>>(nameservers: &[S]) -> bool {
    nameservers
        .iter()
        .any(|ns| ns.as_ref().to_ascii_lowercase().ends_with(CLOUDFLARE_SUFFIX))
}
