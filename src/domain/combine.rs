//! Merging domain columns from CSV exports into a plain domain list.

use std::collections::BTreeSet;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::ReaderBuilder;

/// Counts reported after a combine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombineReport {
    /// Data rows read from the input CSV
    pub rows_read: usize,
    /// Distinct non-empty values in the `domain` column
    pub unique_in_input: usize,
    /// Distinct domains already in the output (append mode only)
    pub existing: usize,
    /// Domains written by this run
    pub written: usize,
    /// Input domains not written because the output already had them
    pub duplicates_skipped: usize,
}

/// Reads the `domain` column of `input_csv` and writes the unique domains,
/// sorted, to `output`.
///
/// Without `append` the output is replaced. With `append`, the domains already
/// listed in `output` are left in place and only new ones are added.
/// Rows without a `domain` value are skipped.
///
/// # Errors
///
/// Returns an error if the input cannot be read as CSV or the output cannot
/// be written.
pub fn combine_domains(input_csv: &Path, output: &Path, append: bool) -> Result<CombineReport> {
    let existing = if append {
        read_existing(output)?
    } else {
        BTreeSet::new()
    };
    log::info!("Existing domains in output file: {}", existing.len());

    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_path(input_csv)
        .with_context(|| format!("Failed to open input CSV: {}", input_csv.display()))?;
    let domain_column = reader
        .headers()
        .context("Failed to read CSV header")?
        .iter()
        .position(|name| name == "domain");
    if domain_column.is_none() {
        log::warn!("{} has no `domain` column", input_csv.display());
    }

    let mut rows_read = 0usize;
    let mut found = BTreeSet::new();
    for record in reader.records() {
        let record = record.context("Failed to read CSV row")?;
        rows_read += 1;
        if let Some(domain) = domain_column.and_then(|i| record.get(i)).map(str::trim) {
            if !domain.is_empty() {
                found.insert(domain.to_string());
            }
        }
    }
    log::info!("Rows read from input CSV: {rows_read}");
    log::info!("Unique domains found in input CSV: {}", found.len());

    let to_write: Vec<&String> = found
        .iter()
        .filter(|domain| !existing.contains(*domain))
        .collect();

    let mut file = if append {
        OpenOptions::new().create(true).append(true).open(output)
    } else {
        fs::File::create(output)
    }
    .with_context(|| format!("Failed to open output file: {}", output.display()))?;

    if append && needs_leading_newline(output)? {
        writeln!(file)?;
    }
    for domain in &to_write {
        writeln!(file, "{domain}")
            .with_context(|| format!("Failed to write to {}", output.display()))?;
    }

    Ok(CombineReport {
        rows_read,
        unique_in_input: found.len(),
        existing: existing.len(),
        written: to_write.len(),
        duplicates_skipped: found.len() - to_write.len(),
    })
}

/// Domains already listed in `path`; a missing file counts as empty.
fn read_existing(path: &Path) -> Result<BTreeSet<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeSet::new()),
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read existing output: {}", path.display()))
        }
    }
}

/// True if `path` is non-empty and its last line is unterminated.
fn needs_leading_newline(path: &Path) -> Result<bool> {
    let content = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content.last().is_some_and(|&byte| byte != b'\n'))
}
