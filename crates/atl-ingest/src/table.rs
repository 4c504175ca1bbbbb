//! Header/data split shared by the CSV and workbook readers.

use std::path::Path;

use atl_model::{CellValue, HeaderList, RawRow, SheetTable};

use crate::error::{IngestError, Result};

/// Normalizes a header cell: rendered to text, BOM stripped, trimmed.
pub fn normalize_header(cell: &CellValue) -> String {
    cell.to_text().trim().trim_matches('\u{feff}').trim().to_string()
}

/// Splits raw sheet rows into a header row and data rows.
///
/// Fully blank rows are dropped. The first remaining row is the header.
/// Fails with [`IngestError::EmptySheet`] when no data row follows it.
pub fn split_header(path: &Path, raw_rows: Vec<RawRow>) -> Result<SheetTable> {
    let mut rows = raw_rows
        .into_iter()
        .filter(|row| !row.iter().all(CellValue::is_blank));

    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    };
    let headers: HeaderList = header_row.iter().map(normalize_header).collect();
    let data: Vec<RawRow> = rows.collect();

    if data.is_empty() {
        return Err(IngestError::EmptySheet {
            path: path.to_path_buf(),
        });
    }

    if headers.len() > 500 {
        tracing::warn!(
            path = %path.display(),
            columns = headers.len(),
            "Sheet has more than 500 columns"
        );
    }

    Ok(SheetTable::new(headers, data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::from(value)
    }

    #[test]
    fn test_drops_blank_rows() {
        let raw = vec![
            vec![text(" Name "), text("Qty")],
            vec![CellValue::Empty, text("  ")],
            vec![text("Bolt"), CellValue::Number(4.0)],
        ];
        let table = split_header(Path::new("t.csv"), raw).unwrap();
        assert_eq!(table.headers, vec!["Name", "Qty"]);
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_numeric_headers_become_text() {
        let raw = vec![
            vec![CellValue::Number(2024.0), CellValue::Empty],
            vec![text("a"), text("b")],
        ];
        let table = split_header(Path::new("t.csv"), raw).unwrap();
        assert_eq!(table.headers, vec!["2024", ""]);
    }

    #[test]
    fn test_header_only_is_empty_sheet() {
        let raw = vec![vec![text("Name")], vec![CellValue::Empty]];
        let result = split_header(Path::new("t.csv"), raw);
        assert!(matches!(result, Err(IngestError::EmptySheet { .. })));
    }

    #[test]
    fn test_no_rows_is_empty_sheet() {
        let result = split_header(Path::new("t.csv"), Vec::new());
        assert!(matches!(result, Err(IngestError::EmptySheet { .. })));
    }
}
