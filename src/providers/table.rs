//! Provider rules and the ordered rule table.

use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use tokio::fs;

use crate::config::UNKNOWN_PROVIDER;
use crate::error_handling::ConfigLoadError;
use crate::providers::builtin::BUILTIN_RULES;

/// A provider name and the nameserver suffix pattern that identifies it.
#[derive(Debug, Clone)]
pub struct ProviderRule {
    name: String,
    pattern: Regex,
}

impl ProviderRule {
    /// Compiles `pattern` case-insensitively.
    pub fn new(name: impl Into<String>, pattern: &str) -> Result<Self, regex::Error> {
        let pattern = RegexBuilder::new(pattern).case_insensitive(true).build()?;
        Ok(Self {
            name: name.into(),
            pattern,
        })
    }

    /// Provider label reported on a match.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// True if `hostname` matches this rule's pattern.
    pub fn matches(&self, hostname: &str) -> bool {
        self.pattern.is_match(hostname)
    }
}

/// One entry of an external provider table file.
#[derive(Debug, Deserialize)]
struct ProviderEntry {
    provider: String,
    regex: String,
}

/// Ordered provider rules. Earlier rules take precedence.
///
/// Loaded once at start-up and shared read-only; nothing mutates a table
/// after construction.
#[derive(Debug, Clone, Default)]
pub struct ProviderTable {
    rules: Vec<ProviderRule>,
}

impl ProviderTable {
    /// A table with no rules; every lookup classifies as `"Unknown"`.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A table with the given rules, in precedence order.
    pub fn from_rules(rules: Vec<ProviderRule>) -> Self {
        Self { rules }
    }

    /// The table compiled into the binary.
    pub fn builtin() -> Self {
        let rules = BUILTIN_RULES
            .iter()
            .filter_map(|(name, pattern)| match ProviderRule::new(*name, pattern) {
                Ok(rule) => Some(rule),
                Err(e) => {
                    log::error!("Skipping built-in provider rule '{name}': {e}");
                    None
                }
            })
            .collect();
        Self { rules }
    }

    /// Parses a JSON array of `{"provider": ..., "regex": ...}` objects.
    ///
    /// # Errors
    ///
    /// Fails on malformed JSON or if any pattern does not compile.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigLoadError> {
        let entries: Vec<ProviderEntry> = serde_json::from_str(json)?;
        let rules = entries
            .into_iter()
            .map(|entry| {
                ProviderRule::new(entry.provider.clone(), &entry.regex).map_err(|source| {
                    ConfigLoadError::InvalidPattern {
                        provider: entry.provider,
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Loads a provider table file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not a valid table.
    pub async fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)
            .await
            .map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&content)
    }

    /// Resolves the table to use for a run.
    ///
    /// With no path the built-in table is used. A path that cannot be loaded
    /// yields an empty table, so every domain classifies as `"Unknown"`.
    pub async fn load_or_empty(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            let table = Self::builtin();
            log::info!("Using built-in provider table ({} rules)", table.len());
            return table;
        };

        match Self::load(path).await {
            Ok(table) => {
                log::info!(
                    "Loaded provider table from {} ({} rules)",
                    path.display(),
                    table.len()
                );
                table
            }
            Err(e) => {
                log::warn!("{e}; continuing with an empty provider table");
                Self::empty()
            }
        }
    }

    /// Rules in precedence order.
    pub fn rules(&self) -> &[ProviderRule] {
        &self.rules
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if the table has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule (in table order) matched by any hostname, or
    /// `"Unknown"`.
    ///
    /// Hostname order does not matter: rules are the outer loop, so the same
    /// set of hostnames always yields the same provider.
    pub fn classify<S: AsRef<str>>(&self, nameservers: &[S]) -> &str {
        self.rules
            .iter()
            .find(|rule| nameservers.iter().any(|ns| rule.matches(ns.as_ref())))
            .map(ProviderRule::name)
            .unwrap_or(UNKNOWN_PROVIDER)
    }
}
