//! Spreadsheet ingestion for component imports.
//!
//! Loads an uploaded spreadsheet into a [`SheetTable`]: the first non-blank
//! row becomes the header list, fully blank rows are dropped, and every other
//! row is kept as raw cells aligned with the header positions.
//!
//! # Supported formats
//!
//! - **CSV**: read with the `csv` crate (flexible row lengths)
//! - **Workbooks**: `.xlsx`, `.xlsm`, `.xlsb`, `.xls`, `.ods` via `calamine`,
//!   first sheet only
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use atl_ingest::read_sheet;
//!
//! let table = read_sheet(Path::new("inventory.xlsx"))?;
//! println!("{} columns, {} rows", table.headers.len(), table.row_count());
//! ```

mod delimited;
mod error;
mod format;
mod table;
mod workbook;

use std::path::Path;

use atl_model::SheetTable;

// === Error Types ===
pub use error::{IngestError, Result};

// === Format Detection ===
pub use format::{
    MAX_SHEET_FILE_SIZE, SheetFormat, check_file_size, check_file_size_with_limit,
    validate_encoding,
};

// === Readers ===
pub use delimited::{parse_csv_cell, read_csv_sheet};
pub use table::{normalize_header, split_header};
pub use workbook::{convert_cell, read_workbook_sheet};

/// Reads a spreadsheet file, choosing the parser from its extension.
pub fn read_sheet(path: &Path) -> Result<SheetTable> {
    let format = SheetFormat::from_path(path)?;
    check_file_size(path)?;

    let table = match format {
        SheetFormat::Csv => read_csv_sheet(path)?,
        SheetFormat::Workbook => read_workbook_sheet(path)?,
    };

    tracing::info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "Loaded spreadsheet"
    );
    Ok(table)
}
