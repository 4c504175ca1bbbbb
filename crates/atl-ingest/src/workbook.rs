//! Excel / OpenDocument workbook reading (first sheet only).

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};

use atl_model::{CellValue, RawRow, SheetTable};

use crate::error::{IngestError, Result};
use crate::table::split_header;

/// Converts a workbook cell to a raw cell value.
pub fn convert_cell(cell: &Data) -> CellValue {
    match cell {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(text) if text.is_empty() => CellValue::Empty,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Float(value) => CellValue::Number(*value),
        Data::Int(value) => CellValue::Number(*value as f64),
        Data::Bool(value) => CellValue::Bool(*value),
        other => CellValue::Text(other.to_string()),
    }
}

/// Reads the first worksheet of a workbook into a header + rows table.
pub fn read_workbook_sheet(path: &Path) -> Result<SheetTable> {
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoSheets {
            path: path.to_path_buf(),
        })?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let raw_rows: Vec<RawRow> = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    tracing::debug!(
        path = %path.display(),
        sheet = %sheet_name,
        rows = raw_rows.len(),
        "Read worksheet"
    );
    split_header(path, raw_rows)
}
