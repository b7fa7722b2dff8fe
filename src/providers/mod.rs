//! DNS provider classification.
//!
//! Nameserver hostnames are matched against an ordered table of provider
//! suffix patterns; the first rule with any matching hostname names the
//! provider. Cloudflare usage is detected separately (see `uses_cloudflare`).

mod builtin;
mod cloudflare;
mod table;

pub use cloudflare::uses_cloudflare;
pub use table::{ProviderRule, ProviderTable};
