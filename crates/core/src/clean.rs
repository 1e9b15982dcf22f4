//! Table cleaning: column resolution, name normalization, roster
//! deduplication, and elapsed-time derivation.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDateTime;

use crate::config::{DocumentsConfig, RosterConfig};
use crate::error::PipelineError;
use crate::model::{DocumentRecord, RosterRecord};
use crate::name_key::{document_name_key, roster_name_key};
use crate::normalize::normalize;
use crate::table::Table;

/// Resolve a configured column against the header row.
fn column_index(
    table: &Table,
    table_name: &'static str,
    column: &str,
) -> Result<usize, PipelineError> {
    table
        .column_index(column)
        .ok_or_else(|| PipelineError::MissingColumn {
            table: table_name,
            column: column.to_string(),
        })
}

// ---------------------------------------------------------------------------
// Documents
// ---------------------------------------------------------------------------

/// Clean the raw document registry.
///
/// Normalizes the reviewer name (whitespace collapse + diacritic strip) and
/// reduces 4-token names to the canonical key; applies the optional category
/// filter; when `derive_elapsed` is set, sorts by (`internal_id`,
/// `event_timestamp`) and fills each row's delta to the previous event of
/// the same document.
pub fn clean_documents(
    table: &Table,
    config: &DocumentsConfig,
) -> Result<Vec<DocumentRecord>, PipelineError> {
    let col = &config.columns;
    let internal_idx = column_index(table, "documents", &col.internal_id)?;
    let category_idx = column_index(table, "documents", &col.category)?;
    let reviewer_idx = column_index(table, "documents", &col.reviewer_name)?;
    let timestamp_idx = column_index(table, "documents", &col.event_timestamp)?;
    let associated_idx = column_index(table, "documents", &col.associated_id)?;

    let filter_idx = match config.filter {
        Some(ref filter) => Some(column_index(table, "documents", &filter.column)?),
        None => None,
    };

    let mut records = Vec::new();

    for (row_idx, row) in table.rows.iter().enumerate() {
        if let (Some(ref filter), Some(fi)) = (&config.filter, filter_idx) {
            let value = table.cell(row, fi);
            if !filter.values.iter().any(|v| v == value) {
                continue;
            }
        }

        let reviewer_name = document_name_key(&normalize(table.cell(row, reviewer_idx)));

        let timestamp_value = table.cell(row, timestamp_idx);
        let event_timestamp =
            NaiveDateTime::parse_from_str(timestamp_value, &config.timestamp_format).map_err(
                |_| PipelineError::TimestampParse {
                    table: "documents",
                    // spreadsheet row number: 1-based, after the header row
                    row: row_idx + 2,
                    value: timestamp_value.to_string(),
                },
            )?;

        let associated = table.cell(row, associated_idx).trim();
        let associated_document_id =
            (!associated.is_empty()).then(|| associated.to_string());

        let mut raw_fields: HashMap<String, String> = table
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.clone(), table.cell(row, i).to_string()))
            .collect();
        raw_fields.insert(col.reviewer_name.clone(), reviewer_name.clone());

        records.push(DocumentRecord {
            internal_id: table.cell(row, internal_idx).to_string(),
            category: table.cell(row, category_idx).to_string(),
            reviewer_name,
            event_timestamp,
            associated_document_id,
            elapsed_since_previous: None,
            raw_fields,
        });
    }

    if config.derive_elapsed {
        derive_elapsed(&mut records);
    }

    Ok(records)
}

/// Sort by (`internal_id`, `event_timestamp`) ascending and set each row's
/// delta to the immediately preceding row of the same group. Group heads
/// stay `None`, never zero.
fn derive_elapsed(records: &mut [DocumentRecord]) {
    records.sort_by(|a, b| {
        (a.internal_id.as_str(), a.event_timestamp)
            .cmp(&(b.internal_id.as_str(), b.event_timestamp))
    });

    for i in 1..records.len() {
        if records[i - 1].internal_id == records[i].internal_id {
            records[i].elapsed_since_previous =
                Some(records[i].event_timestamp - records[i - 1].event_timestamp);
        }
    }
}

// ---------------------------------------------------------------------------
// Roster
// ---------------------------------------------------------------------------

/// Clean the raw roster: select the five configured columns, drop exact
/// duplicates (first occurrence wins), derive the canonical name key.
pub fn clean_roster(
    table: &Table,
    config: &RosterConfig,
) -> Result<Vec<RosterRecord>, PipelineError> {
    let col = &config.columns;
    let indices = [
        column_index(table, "roster", &col.full_name)?,
        column_index(table, "roster", &col.unit_code)?,
        column_index(table, "roster", &col.unit_description)?,
        column_index(table, "roster", &col.unit_code_secondary)?,
        column_index(table, "roster", &col.unit_description_secondary)?,
    ];

    let mut seen: HashSet<Vec<String>> = HashSet::new();
    let mut records = Vec::new();

    for row in &table.rows {
        let selected: Vec<String> = indices
            .iter()
            .map(|&i| table.cell(row, i).to_string())
            .collect();
        if !seen.insert(selected.clone()) {
            continue;
        }

        records.push(RosterRecord {
            name_key: roster_name_key(&normalize(&selected[0])),
            full_name: selected[0].clone(),
            unit_code: selected[1].clone(),
            unit_description: selected[2].clone(),
            unit_code_secondary: selected[3].clone(),
            unit_description_secondary: selected[4].clone(),
        });
    }

    Ok(records)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
