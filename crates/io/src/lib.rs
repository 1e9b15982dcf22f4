//! `rosterlink-io` — file I/O for the pipeline.
//!
//! Reads input tables from Excel workbooks (xlsx, xls, xlsb, ods) or
//! delimited text, writes output tables as CSV. Everything crosses the
//! boundary as a [`Table`] of strings; typed interpretation stays in the
//! engine crate.

pub mod csv;
pub mod error;
pub mod xlsx;

use std::path::Path;

use rosterlink_core::Table;

pub use error::IoError;

/// Read a table, dispatching on the file extension.
pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<Table, IoError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("xlsx" | "xls" | "xlsb" | "ods") => xlsx::import(path, sheet),
        Some("csv" | "tsv") => csv::import(path),
        _ => Err(IoError::UnsupportedExtension {
            path: path.to_path_buf(),
        }),
    }
}

/// Write a table as comma-separated values. No row-index column is added.
pub fn write_csv(table: &Table, path: &Path) -> Result<(), IoError> {
    csv::export(table, path)
}
