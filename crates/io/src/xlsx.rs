// Excel workbook import (xlsx, xls, xlsb, ods). One-way: workbooks are
// flattened to a header row plus string cells; typed parsing happens
// against the configured column mapping downstream.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader, Sheets};
use rosterlink_core::Table;

use crate::error::IoError;

/// Read one worksheet into a `Table`. The first row of the used range is
/// the header row; `sheet = None` selects the first sheet.
pub fn import(path: &Path, sheet: Option<&str>) -> Result<Table, IoError> {
    let mut workbook: Sheets<_> = open_workbook_auto(path).map_err(|e| IoError::Open {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })?;

    let sheet_names = workbook.sheet_names().to_vec();
    let sheet_name = match sheet {
        Some(name) => {
            if !sheet_names.iter().any(|s| s == name) {
                return Err(IoError::SheetNotFound {
                    path: path.to_path_buf(),
                    sheet: name.to_string(),
                });
            }
            name.to_string()
        }
        None => sheet_names
            .first()
            .cloned()
            .ok_or_else(|| IoError::EmptyWorkbook {
                path: path.to_path_buf(),
            })?,
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IoError::Open {
            path: path.to_path_buf(),
            detail: format!("cannot read sheet '{sheet_name}': {e}"),
        })?;

    let mut rows = range.rows();
    let headers: Vec<String> = match rows.next() {
        Some(header_row) => header_row.iter().map(render_cell).collect(),
        None => {
            return Err(IoError::EmptySheet {
                path: path.to_path_buf(),
                sheet: sheet_name,
            })
        }
    };

    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(render_cell).collect());
    }

    Ok(table)
}

/// Render one cell to its string form.
///
/// Date/time cells use the same layout the engine's default timestamp
/// format expects; integral floats lose the trailing `.0` Excel gives
/// numeric id columns.
fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Int(n) => n.to_string(),
        Data::Float(n) => {
            if n.fract() == 0.0 && n.abs() < 1e15 {
                format!("{}", *n as i64)
            } else {
                n.to_string()
            }
        }
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("#{e:?}"),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.as_f64().to_string(),
        },
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}
