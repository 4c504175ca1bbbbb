//! Mapping session state for one uploaded spreadsheet.
//!
//! An [`ImportSession`] owns the headers, raw rows and current field mapping
//! of a single upload, and keeps the mapped records in sync with them. A new
//! upload starts a new session; nothing carries over.

use tracing::{debug, info};

use atl_model::{CanonicalField, FieldMapping, HeaderList, MappedRecord, RawRow, SheetTable};

use crate::apply::apply_mapping;
use crate::commit::{CommitBatch, commit};
use crate::detect::detect_mapping_with;
use crate::error::{CommitError, MapError, Result};
use crate::patterns::PatternTable;
use crate::preview::{Preview, build_preview};

/// State of one import, from upload through commit or discard.
#[derive(Debug, Clone)]
pub struct ImportSession {
    headers: HeaderList,
    rows: Vec<RawRow>,
    mapping: FieldMapping,
    records: Vec<MappedRecord>,
}

impl ImportSession {
    /// Starts a session with the built-in header patterns.
    pub fn new(table: SheetTable) -> Result<Self> {
        Self::with_patterns(table, PatternTable::builtin())
    }

    /// Starts a session, detecting the initial mapping with `patterns`.
    pub fn with_patterns(table: SheetTable, patterns: &PatternTable) -> Result<Self> {
        if table.rows.is_empty() {
            return Err(MapError::NoDataRows);
        }
        let SheetTable { headers, rows } = table;
        let mapping = detect_mapping_with(patterns, &headers);
        let records = apply_mapping(&rows, &headers, &mapping);

        info!(
            columns = headers.len(),
            rows = rows.len(),
            valid = records.iter().filter(|r| r.is_valid()).count(),
            "Started import session"
        );
        Ok(Self {
            headers,
            rows,
            mapping,
            records,
        })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn mapping(&self) -> &FieldMapping {
        &self.mapping
    }

    /// Records for the current mapping.
    pub fn records(&self) -> &[MappedRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Records that would survive the commit filter.
    pub fn valid_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_valid()).count()
    }

    /// Header text for `column`, or `Column N` (1-based) when blank.
    pub fn column_label(&self, column: usize) -> String {
        match self.headers.get(column) {
            Some(header) if !header.trim().is_empty() => header.clone(),
            _ => format!("Column {}", column + 1),
        }
    }

    /// Points `field` at `column` (or unmaps it) and regenerates every record.
    pub fn set_field(&mut self, field: CanonicalField, column: Option<usize>) -> Result<()> {
        if let Some(index) = column {
            self.check_column(field, index)?;
        }
        debug!(field = %field, column = ?column, "Mapping override");
        self.replace_mapping(self.mapping.with(field, column));
        Ok(())
    }

    /// Replaces the whole mapping and regenerates every record.
    pub fn set_mapping(&mut self, mapping: FieldMapping) -> Result<()> {
        for (field, column) in mapping.iter() {
            if let Some(index) = column {
                self.check_column(field, index)?;
            }
        }
        self.replace_mapping(mapping);
        Ok(())
    }

    /// Resolves a user column selector against the headers.
    ///
    /// `skip`, `none` and `-` unmap the field. A number within the column
    /// count is a 1-based column. Anything else, including a number past the
    /// last column, must equal a header (trimmed, case-insensitive); the
    /// leftmost match wins.
    pub fn resolve_column(&self, selector: &str) -> Result<Option<usize>> {
        let selector = selector.trim();
        if matches!(selector.to_ascii_lowercase().as_str(), "skip" | "none" | "-") {
            return Ok(None);
        }
        if let Ok(number) = selector.parse::<usize>()
            && (1..=self.headers.len()).contains(&number)
        {
            return Ok(Some(number - 1));
        }
        self.headers
            .iter()
            .position(|header| header.trim().eq_ignore_ascii_case(selector))
            .map(Some)
            .ok_or_else(|| MapError::UnknownColumn(selector.to_string()))
    }

    pub fn preview(&self, limit: usize) -> Preview<'_> {
        build_preview(&self.records, limit)
    }

    /// Ends the session, returning the records that have a name.
    pub fn commit(self) -> std::result::Result<CommitBatch, CommitError> {
        commit(self.records)
    }

    fn check_column(&self, field: CanonicalField, column: usize) -> Result<()> {
        if column >= self.headers.len() {
            return Err(MapError::ColumnOutOfRange {
                field,
                column,
                available: self.headers.len(),
            });
        }
        Ok(())
    }

    fn replace_mapping(&mut self, mapping: FieldMapping) {
        self.mapping = mapping;
        self.records = apply_mapping(&self.rows, &self.headers, &self.mapping);
    }
}
