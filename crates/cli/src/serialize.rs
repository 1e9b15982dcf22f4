//! Record → table conversion at the output boundary.
//!
//! Collections stay typed inside the engine; this is the only place where
//! elapsed durations become seconds and reference sets become delimited
//! strings.

use rosterlink_core::config::RosterColumns;
use rosterlink_core::{DocumentRecord, LinkedRecord, RosterRecord, Table};

const ELAPSED_COLUMN: &str = "elapsed_seconds";
const REFERENCING_COLUMN: &str = "referencing_ids";
const NAME_KEY_COLUMN: &str = "name_key";

/// Cleaned documents: the original columns (reviewer column already
/// canonical), plus the elapsed column when it was derived.
pub fn documents_table(
    input_headers: &[String],
    documents: &[DocumentRecord],
    include_elapsed: bool,
) -> Table {
    let mut headers = input_headers.to_vec();
    if include_elapsed {
        headers.push(ELAPSED_COLUMN.into());
    }

    let mut table = Table::new(headers);
    for document in documents {
        let mut row = document_cells(input_headers, document);
        if include_elapsed {
            row.push(elapsed_cell(document));
        }
        table.push_row(row);
    }
    table
}

/// Cleaned roster: the five configured columns plus the derived key.
pub fn roster_table(columns: &RosterColumns, roster: &[RosterRecord]) -> Table {
    let mut table = Table::new(vec![
        columns.full_name.clone(),
        columns.unit_code.clone(),
        columns.unit_description.clone(),
        columns.unit_code_secondary.clone(),
        columns.unit_description_secondary.clone(),
        NAME_KEY_COLUMN.into(),
    ]);
    for record in roster {
        table.push_row(vec![
            record.full_name.clone(),
            record.unit_code.clone(),
            record.unit_description.clone(),
            record.unit_code_secondary.clone(),
            record.unit_description_secondary.clone(),
            record.name_key.clone(),
        ]);
    }
    table
}

/// Linked output: document columns, elapsed, the roster columns (empty when
/// the reviewer is unmatched) and the flattened reference set.
pub fn linked_table(
    input_headers: &[String],
    columns: &RosterColumns,
    linked: &[LinkedRecord],
    include_elapsed: bool,
    list_delimiter: &str,
) -> Table {
    let mut headers = input_headers.to_vec();
    if include_elapsed {
        headers.push(ELAPSED_COLUMN.into());
    }
    headers.extend([
        columns.unit_code.clone(),
        columns.unit_description.clone(),
        columns.unit_code_secondary.clone(),
        columns.unit_description_secondary.clone(),
        REFERENCING_COLUMN.into(),
    ]);

    let mut table = Table::new(headers);
    for record in linked {
        let mut row = document_cells(input_headers, &record.document);
        if include_elapsed {
            row.push(elapsed_cell(&record.document));
        }
        match record.roster {
            Some(ref roster) => row.extend([
                roster.unit_code.clone(),
                roster.unit_description.clone(),
                roster.unit_code_secondary.clone(),
                roster.unit_description_secondary.clone(),
            ]),
            None => row.extend(std::iter::repeat_with(String::new).take(4)),
        }
        row.push(match record.referencing_ids {
            Some(ref ids) => ids
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(list_delimiter),
            None => String::new(),
        });
        table.push_row(row);
    }
    table
}

fn document_cells(input_headers: &[String], document: &DocumentRecord) -> Vec<String> {
    input_headers
        .iter()
        .map(|h| document.raw_fields.get(h).cloned().unwrap_or_default())
        .collect()
}

fn elapsed_cell(document: &DocumentRecord) -> String {
    document
        .elapsed_since_previous
        .map(|d| d.num_seconds().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{BTreeSet, HashMap};

    use chrono::{Duration, NaiveDateTime};

    fn document(internal_id: &str, elapsed: Option<Duration>) -> DocumentRecord {
        let headers = ["NumInterno", "NomRevisor"];
        let values = [internal_id, "Ana Perez Gonzalez"];
        DocumentRecord {
            internal_id: internal_id.into(),
            category: "Convenio".into(),
            reviewer_name: "Ana Perez Gonzalez".into(),
            event_timestamp: NaiveDateTime::parse_from_str(
                "2024-03-01 10:00:00",
                "%Y-%m-%d %H:%M:%S",
            )
            .unwrap(),
            associated_document_id: None,
            elapsed_since_previous: elapsed,
            raw_fields: headers
                .iter()
                .zip(values)
                .map(|(h, v)| (h.to_string(), v.to_string()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn roster_columns() -> RosterColumns {
        RosterColumns {
            full_name: "Nombre Funcionario".into(),
            unit_code: "Código Unidad".into(),
            unit_description: "Descripción Unidad".into(),
            unit_code_secondary: "Código Unidad 2".into(),
            unit_description_secondary: "Descripción Unidad 2".into(),
        }
    }

    #[test]
    fn documents_table_appends_elapsed_seconds() {
        let headers = vec!["NumInterno".to_string(), "NomRevisor".to_string()];
        let documents = vec![
            document("1", None),
            document("1", Some(Duration::minutes(5))),
        ];
        let table = documents_table(&headers, &documents, true);
        assert_eq!(
            table.headers,
            vec!["NumInterno", "NomRevisor", "elapsed_seconds"]
        );
        assert_eq!(table.rows[0], vec!["1", "Ana Perez Gonzalez", ""]);
        assert_eq!(table.rows[1], vec!["1", "Ana Perez Gonzalez", "300"]);
    }

    #[test]
    fn linked_table_flattens_reference_set() {
        let headers = vec!["NumInterno".to_string(), "NomRevisor".to_string()];
        let mut record = LinkedRecord {
            document: document("1", None),
            roster: None,
            referencing_ids: Some(BTreeSet::from(["2".to_string(), "3".to_string()])),
        };
        let table = linked_table(&headers, &roster_columns(), &[record.clone()], false, ";");
        assert_eq!(
            table.headers,
            vec![
                "NumInterno",
                "NomRevisor",
                "Código Unidad",
                "Descripción Unidad",
                "Código Unidad 2",
                "Descripción Unidad 2",
                "referencing_ids"
            ]
        );
        // unmatched reviewer: empty roster cells, flattened references last
        assert_eq!(
            table.rows[0],
            vec!["1", "Ana Perez Gonzalez", "", "", "", "", "2;3"]
        );

        record.referencing_ids = None;
        let table = linked_table(&headers, &roster_columns(), &[record], false, ";");
        assert_eq!(table.rows[0].last().map(String::as_str), Some(""));
    }

    #[test]
    fn roster_table_carries_key_column() {
        let roster = vec![RosterRecord {
            full_name: "Pérez Gonzalez Ana".into(),
            unit_code: "101".into(),
            unit_description: "Finanzas".into(),
            unit_code_secondary: String::new(),
            unit_description_secondary: String::new(),
            name_key: "Ana Perez Gonzalez".into(),
        }];
        let table = roster_table(&roster_columns(), &roster);
        assert_eq!(table.headers.last().map(String::as_str), Some("name_key"));
        assert_eq!(
            table.rows[0],
            vec!["Pérez Gonzalez Ana", "101", "Finanzas", "", "", "Ana Perez Gonzalez"]
        );
    }
}
