//! Export of lookup results.
//!
//! Results are exported as CSV, either streamed to a file by the bulk
//! `lookup` command or rendered in memory for the HTTP download.

mod csv_export;

pub use csv_export::{results_to_csv, ResultCsvWriter, CSV_HEADER};
