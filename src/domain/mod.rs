//! Domain list input and maintenance.
//!
//! Key functions:
//! - `parse_domain_list()` - One domain per line, trimmed, blanks dropped
//! - `read_domain_list()` - The same, from a file
//! - `combine_domains()` - Merges the `domain` column of a CSV into a list file

mod combine;

use std::path::Path;

use anyhow::{Context, Result};

pub use combine::{combine_domains, CombineReport};

/// Splits text into domains: one per line, surrounding whitespace trimmed,
/// empty lines dropped. No other validation is applied.
pub fn parse_domain_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Reads a domain list file (see `parse_domain_list`).
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub async fn read_domain_list(path: &Path) -> Result<Vec<String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read domain list: {}", path.display()))?;
    Ok(parse_domain_list(&content))
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
