//! Bulk lookup: domain list file in, CSV out.
//!
//! Rows are written in input order as soon as each domain (and every domain
//! before it) has been resolved, so a long run can be watched with `tail`.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use log::info;

use crate::config::{LookupConfig, ERROR_PROVIDER, PROGRESS_LOG_INTERVAL};
use crate::dns::{find_ns, NsLookup};
use crate::domain::read_domain_list;
use crate::export::ResultCsvWriter;
use crate::initialization::init_resolver;
use crate::models::DomainResult;
use crate::providers::{uses_cloudflare, ProviderTable};

/// Results of a bulk lookup run.
#[derive(Debug, Clone)]
pub struct LookupReport {
    /// Domains read from the input file
    pub total_domains: usize,
    /// Domains whose nameservers were found
    pub resolved: usize,
    /// Domains whose lookup failed
    pub failed: usize,
    /// CSV file written
    pub output: PathBuf,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Runs a bulk lookup against the system resolver.
///
/// # Errors
///
/// Fails if the input cannot be read or the output cannot be written.
/// Individual DNS failures are recorded in the CSV, not returned.
pub async fn run_lookup(config: LookupConfig) -> Result<LookupReport> {
    let resolver = init_resolver();
    run_lookup_with(&config, resolver.as_ref()).await
}

/// Runs a bulk lookup with the given resolver.
pub async fn run_lookup_with(config: &LookupConfig, resolver: &dyn NsLookup) -> Result<LookupReport> {
    let started = Instant::now();
    let domains = read_domain_list(&config.input).await?;
    info!("Total domains in file: {}", domains.len());

    let table = ProviderTable::load_or_empty(config.providers.as_deref()).await;

    let file = File::create(&config.output)
        .with_context(|| format!("Failed to create output file: {}", config.output.display()))?;
    let mut writer = ResultCsvWriter::new(BufWriter::new(file), false)?;

    let lookups: Vec<_> = domains
        .iter()
        .map(|domain| lookup_one(domain, resolver, &table, config.walk_up))
        .collect();
    let mut results = stream::iter(lookups).buffered(config.max_concurrency.max(1));

    let mut resolved = 0usize;
    let mut failed = 0usize;
    while let Some((result, ok)) = results.next().await {
        writer.write_result(&result)?;
        if ok {
            resolved += 1;
        } else {
            failed += 1;
        }
        let done = resolved + failed;
        if done % PROGRESS_LOG_INTERVAL == 0 {
            info!("Processed {done} domains...");
        }
    }
    writer.finish()?;

    Ok(LookupReport {
        total_domains: domains.len(),
        resolved,
        failed,
        output: config.output.clone(),
        elapsed_seconds: started.elapsed().as_secs_f64(),
    })
}

/// Resolves one domain; the flag is false when no nameservers were found.
async fn lookup_one(
    domain: &str,
    resolver: &dyn NsLookup,
    table: &ProviderTable,
    walk_up: bool,
) -> (DomainResult, bool) {
    if !walk_up {
        return match resolver.lookup_ns(domain).await {
            Ok(nameservers) => (DomainResult::from_nameservers(domain, &nameservers, table), true),
            Err(e) => (DomainResult::from_error(domain, &e), false),
        };
    }

    match find_ns(domain, resolver).await {
        Ok(found) => (
            DomainResult {
                domain: domain.to_string(),
                uses_cloudflare: uses_cloudflare(&found.nameservers),
                provider: table.classify(&found.nameservers).to_string(),
                dns_response: found.nameservers.join("; "),
            },
            true,
        ),
        Err(e) => (
            DomainResult {
                domain: domain.to_string(),
                uses_cloudflare: false,
                provider: ERROR_PROVIDER.to_string(),
                dns_response: e.to_string(),
            },
            false,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::ResolutionError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct MapResolver(HashMap<&'static str, Vec<String>>);

    impl MapResolver {
        fn new(entries: &[(&'static str, &[&str])]) -> Self {
            Self(
                entries
                    .iter()
                    .map(|(name, ns)| (*name, ns.iter().map(|s| s.to_string()).collect()))
                    .collect(),
            )
        }
    }

    #[async_trait]
    impl NsLookup for MapResolver {
        async fn lookup_ns(&self, domain: &str) -> Result<Vec<String>, ResolutionError> {
            self.0
                .get(domain)
                .cloned()
                .ok_or_else(|| ResolutionError::Lookup(format!("NXDOMAIN {domain}")))
        }
    }

    fn config(dir: &TempDir, domains: &str, walk_up: bool) -> LookupConfig {
        let input = dir.path().join("domains.txt");
        std::fs::write(&input, domains).expect("Failed to write domain list");
        LookupConfig {
            input,
            output: dir.path().join("out.csv"),
            providers: None,
            max_concurrency: 4,
            walk_up,
        }
    }

    fn read_rows(path: &std::path::Path) -> Vec<Vec<String>> {
        let mut reader = csv::Reader::from_path(path).expect("Failed to open output CSV");
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[tokio::test]
    async fn test_run_lookup_writes_rows_in_input_order() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config = config(&dir, "b.com\n\na.com\nmissing.invalid\n", false);
        let resolver = MapResolver::new(&[
            ("a.com", &["ns1.gandi.net", "ns2.gandi.net"]),
            ("b.com", &["alice.ns.cloudflare.com"]),
        ]);

        let report = run_lookup_with(&config, &resolver).await.unwrap();

        assert_eq!(report.total_domains, 3);
        assert_eq!(report.resolved, 2);
        assert_eq!(report.failed, 1);
        let rows = read_rows(&config.output);
        assert_eq!(rows[0], vec!["b.com", "Yes", "Cloudflare", "alice.ns.cloudflare.com"]);
        assert_eq!(rows[1], vec!["a.com", "No", "Gandi", "ns1.gandi.net, ns2.gandi.net"]);
        assert_eq!(rows[2], vec!["missing.invalid", "No", "Unknown", "NXDOMAIN missing.invalid"]);
    }

    #[tokio::test]
    async fn test_run_lookup_walk_up_uses_bulk_format() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config = config(&dir, "www.example.com\nnowhere.invalid\n", true);
        let resolver = MapResolver::new(&[(
            "example.com",
            &["ns51.domaincontrol.com", "ns52.domaincontrol.com"],
        )]);

        let report = run_lookup_with(&config, &resolver).await.unwrap();

        assert_eq!(report.resolved, 1);
        let rows = read_rows(&config.output);
        assert_eq!(
            rows[0],
            vec![
                "www.example.com",
                "No",
                "GoDaddy",
                "ns51.domaincontrol.com; ns52.domaincontrol.com"
            ]
        );
        assert_eq!(rows[1][2], "Error");
        assert_eq!(rows[1][3], "NXDOMAIN nowhere.invalid");
    }

    #[tokio::test]
    async fn test_run_lookup_missing_input_is_error() {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let config = LookupConfig {
            input: dir.path().join("missing.txt"),
            output: dir.path().join("out.csv"),
            ..Default::default()
        };
        let resolver = MapResolver::new(&[]);
        assert!(run_lookup_with(&config, &resolver).await.is_err());
        assert!(!config.output.exists());
    }
}
