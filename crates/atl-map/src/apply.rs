//! Projection of raw rows through a field mapping.

use atl_model::{CanonicalField, CellValue, FieldMapping, MappedRecord, RawRow, parse_quantity};

/// Projects every row through `mapping` into canonical records.
///
/// A field reads as empty (0 for quantity) when it is unmapped or its column
/// is beyond the header list or the row. Text is trimmed; quantity keeps the
/// leading integer. Output has one record per input row.
pub fn apply_mapping<S: AsRef<str>>(
    rows: &[RawRow],
    headers: &[S],
    mapping: &FieldMapping,
) -> Vec<MappedRecord> {
    rows.iter()
        .map(|row| map_row(row, headers.len(), mapping))
        .collect()
}

/// Projects a single row.
pub fn map_row(row: &[CellValue], header_count: usize, mapping: &FieldMapping) -> MappedRecord {
    let text = |field: CanonicalField| cell_text(row, header_count, mapping.get(field));
    MappedRecord {
        name: text(CanonicalField::Name),
        component_type: text(CanonicalField::Type),
        description: text(CanonicalField::Description),
        quantity: parse_quantity(&text(CanonicalField::Quantity)),
    }
}

fn cell_text(row: &[CellValue], header_count: usize, column: Option<usize>) -> String {
    column
        .filter(|&index| index < header_count)
        .and_then(|index| row.get(index))
        .map(|cell| cell.to_text().trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> RawRow {
        cells.iter().map(|c| CellValue::from(*c)).collect()
    }

    #[test]
    fn reads_mapped_cells_trimmed() {
        let headers = ["Name", "Type", "Notes", "Qty"];
        let mapping = FieldMapping {
            name: Some(0),
            component_type: Some(1),
            description: Some(2),
            quantity: Some(3),
        };
        let rows = vec![row(&["  Bolt ", "Fastener", " M3 ", "12 pcs"])];
        let records = apply_mapping(&rows, &headers, &mapping);

        assert_eq!(
            records[0],
            MappedRecord {
                name: "Bolt".to_string(),
                component_type: "Fastener".to_string(),
                description: "M3".to_string(),
                quantity: 12,
            }
        );
    }

    #[test]
    fn unmapped_and_out_of_range_columns_are_empty() {
        let headers = ["Name", "Qty"];
        let mapping = FieldMapping {
            name: Some(0),
            component_type: None,
            description: Some(5),
            quantity: Some(1),
        };
        let rows = vec![row(&["Nut"])];
        let records = apply_mapping(&rows, &headers, &mapping);

        assert_eq!(records[0].name, "Nut");
        assert_eq!(records[0].component_type, "");
        assert_eq!(records[0].description, "");
        assert_eq!(records[0].quantity, 0);
    }

    #[test]
    fn cells_beyond_the_header_row_are_ignored() {
        let headers = ["Name"];
        let mapping = FieldMapping::unmapped()
            .with(CanonicalField::Name, Some(0))
            .with(CanonicalField::Type, Some(1));
        let rows = vec![row(&["Gear", "extra"])];
        let records = apply_mapping(&rows, &headers, &mapping);
        assert_eq!(records[0].component_type, "");
    }

    #[test]
    fn numeric_cells_become_text_and_quantities() {
        let headers = ["Name", "Qty"];
        let mapping = FieldMapping::unmapped()
            .with(CanonicalField::Name, Some(0))
            .with(CanonicalField::Quantity, Some(1));
        let rows = vec![
            vec![CellValue::Number(1234.0), CellValue::Number(7.0)],
            vec![CellValue::from("Spring"), CellValue::Number(-2.0)],
            vec![CellValue::from("Washer"), CellValue::Number(2.9)],
        ];
        let records = apply_mapping(&rows, &headers, &mapping);

        assert_eq!(records[0].name, "1234");
        assert_eq!(records[0].quantity, 7);
        assert_eq!(records[1].quantity, 0);
        assert_eq!(records[2].quantity, 2);
    }
}
