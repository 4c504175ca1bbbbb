//! CSV reading.

use std::path::Path;

use csv::ReaderBuilder;

use atl_model::{CellValue, RawRow, SheetTable};

use crate::error::{IngestError, Result};
use crate::format::validate_encoding;
use crate::table::split_header;

/// Converts a CSV field to a cell: blank is empty, finite numbers are numeric.
pub fn parse_csv_cell(raw: &str) -> CellValue {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return CellValue::Empty;
    }
    match trimmed.parse::<f64>() {
        Ok(number) if number.is_finite() => CellValue::Number(number),
        _ => CellValue::Text(raw.to_string()),
    }
}

/// Reads a CSV file into a header + rows table.
///
/// Rows may have differing lengths; missing trailing cells are treated as
/// empty by the mapper.
pub fn read_csv_sheet(path: &Path) -> Result<SheetTable> {
    validate_encoding(path)?;
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| csv_error(path, &e))?;

    let mut raw_rows: Vec<RawRow> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| csv_error(path, &e))?;
        raw_rows.push(record.iter().map(parse_csv_cell).collect());
    }

    tracing::debug!(path = %path.display(), rows = raw_rows.len(), "Read CSV records");
    split_header(path, raw_rows)
}

/// Invalid UTF-8 is reported as an encoding problem, not a parse failure.
fn csv_error(path: &Path, error: &csv::Error) -> IngestError {
    match error.kind() {
        csv::ErrorKind::Utf8 { .. } => IngestError::UnsupportedEncoding {
            path: path.to_path_buf(),
            encoding: "not valid UTF-8, likely a legacy code page",
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        },
    }
}
