// Delimited-text import/export.

use std::io::Read;
use std::path::Path;

use rosterlink_core::Table;

use crate::error::IoError;

/// Read a delimited file into a `Table`. Delimiter is sniffed from the
/// first lines; the first record is the header row.
pub fn import(path: &Path) -> Result<Table, IoError> {
    let content = read_file_as_utf8(path)?;
    let delimiter = sniff_delimiter(&content);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let mut table = Table::new(headers);
    for record in reader.records() {
        let record = record.map_err(|e| IoError::Csv {
            path: path.to_path_buf(),
            detail: e.to_string(),
        })?;
        table.push_row(record.iter().map(|field| field.to_string()).collect());
    }

    Ok(table)
}

/// Write a table as comma-separated values: header row first, then data
/// rows, nothing else.
pub fn export(table: &Table, path: &Path) -> Result<(), IoError> {
    let write_err = |e: csv::Error| IoError::Write {
        path: path.to_path_buf(),
        detail: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .from_path(path)
        .map_err(write_err)?;

    writer.write_record(&table.headers).map_err(write_err)?;
    for row in &table.rows {
        writer.write_record(row).map_err(write_err)?;
    }

    writer.flush().map_err(|e| IoError::Write {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;
    Ok(())
}

/// Read a file as UTF-8, falling back to Windows-1252 (common for
/// Excel-exported CSVs with accented names).
fn read_file_as_utf8(path: &Path) -> Result<String, IoError> {
    let open_err = |detail: String| IoError::Open {
        path: path.to_path_buf(),
        detail,
    };

    let mut file = std::fs::File::open(path).map_err(|e| open_err(e.to_string()))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| open_err(e.to_string()))?;

    match String::from_utf8(bytes) {
        Ok(s) => Ok(s),
        Err(e) => {
            let bytes = e.into_bytes();
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Ok(decoded.into_owned())
        }
    }
}

/// Pick the field delimiter that splits the sample lines most consistently.
/// Candidates are tab, semicolon, comma and pipe; a candidate must yield
/// more than one field on the first line to count.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample: Vec<&str> = content.lines().take(10).collect();
    if sample.is_empty() {
        return b',';
    }

    let field_count = |line: &str, delimiter: u8| -> usize {
        csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(line.as_bytes())
            .records()
            .next()
            .and_then(|r| r.ok())
            .map(|r| r.len())
            .unwrap_or(1)
    };

    let mut best = b',';
    let mut best_score = 0u64;
    for &delimiter in candidates {
        let target = field_count(sample[0], delimiter);
        if target <= 1 {
            continue;
        }
        let consistent = sample
            .iter()
            .filter(|line| field_count(line, delimiter) == target)
            .count() as u64;
        let score = consistent * target as u64;
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }

    best
}
