//! Automatic field detection from header text.

use tracing::debug;

use atl_model::{CanonicalField, FieldMapping};

use crate::patterns::PatternTable;

/// Guesses which header holds each canonical field using the built-in patterns.
///
/// See [`detect_mapping_with`].
pub fn detect_mapping<S: AsRef<str>>(headers: &[S]) -> FieldMapping {
    detect_mapping_with(PatternTable::builtin(), headers)
}

/// Guesses which header holds each canonical field.
///
/// Headers are scanned left to right. For every field still unmapped, the
/// first header matching any of that field's patterns claims it, and the field
/// is never reassigned. One header may therefore claim several fields.
///
/// If no header matched Name, Name is forced to column 0, even when there are
/// no headers at all; callers must treat an out-of-range column as no data.
pub fn detect_mapping_with<S: AsRef<str>>(table: &PatternTable, headers: &[S]) -> FieldMapping {
    let mut mapping = FieldMapping::unmapped();

    for (index, header) in headers.iter().enumerate() {
        let header = header.as_ref();
        for field in CanonicalField::ALL {
            if mapping.is_mapped(field) {
                continue;
            }
            if let Some(entry) = table.matching_pattern(field, header) {
                debug!(
                    field = %field,
                    column = index,
                    header,
                    pattern = entry.source(),
                    "Detected column"
                );
                mapping.set(field, Some(index));
            }
        }
    }

    if !mapping.is_mapped(CanonicalField::Name) {
        debug!("No name column detected, defaulting to the first column");
        mapping.set(CanonicalField::Name, Some(0));
    }

    mapping
}
