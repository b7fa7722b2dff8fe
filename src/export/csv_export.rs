//! CSV export of lookup results.
//!
//! One row per domain with the columns shown in the results table.
//! `usesCloudflare` is written as `Yes`/`No`.

use std::io::Write;

use anyhow::{Context, Result};
use csv::{QuoteStyle, Terminator, Writer, WriterBuilder};

use crate::models::DomainResult;

/// Column headers, in output order.
pub const CSV_HEADER: [&str; 4] = ["Domain", "Uses Cloudflare", "Guessed Provider", "DNS Response"];

/// Streaming CSV writer for `DomainResult` rows.
///
/// The header is written on construction.
pub struct ResultCsvWriter<W: Write> {
    writer: Writer<W>,
    rows: usize,
}

impl<W: Write> ResultCsvWriter<W> {
    /// Wraps `inner`. `quote_all` quotes every field (browser download
    /// format); otherwise fields are quoted only when needed.
    pub fn new(inner: W, quote_all: bool) -> Result<Self> {
        let quote_style = if quote_all {
            QuoteStyle::Always
        } else {
            QuoteStyle::Necessary
        };
        let mut writer = WriterBuilder::new()
            .quote_style(quote_style)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(inner);
        writer
            .write_record(CSV_HEADER)
            .context("Failed to write CSV header")?;
        Ok(Self { writer, rows: 0 })
    }

    /// Appends one row.
    pub fn write_result(&mut self, result: &DomainResult) -> Result<()> {
        self.writer
            .write_record([
                result.domain.as_str(),
                yes_no(result.uses_cloudflare),
                result.provider.as_str(),
                result.dns_response.as_str(),
            ])
            .with_context(|| format!("Failed to write CSV row for {}", result.domain))?;
        self.rows += 1;
        Ok(())
    }

    /// Rows written so far (header excluded).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV output: {}", e.error()))
    }
}

/// Renders results in the browser download format (every field quoted).
pub fn results_to_csv(results: &[DomainResult]) -> Result<String> {
    let mut writer = ResultCsvWriter::new(Vec::new(), true)?;
    for result in results {
        writer.write_result(result)?;
    }
    let bytes = writer.finish()?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
