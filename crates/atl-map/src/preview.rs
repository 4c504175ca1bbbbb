//! Bounded preview of mapped records.

use atl_model::MappedRecord;

/// Number of records shown in a preview unless told otherwise.
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// The first records of an import plus a count of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preview<'a> {
    /// Records to render, unmodified.
    pub visible: &'a [MappedRecord],
    /// Records omitted from `visible`.
    pub remainder: usize,
}

impl Preview<'_> {
    /// Visible records with an empty name.
    pub fn invalid_visible(&self) -> usize {
        self.visible.iter().filter(|r| !r.is_valid()).count()
    }

    pub fn total(&self) -> usize {
        self.visible.len() + self.remainder
    }
}

/// Splits `records` into the first `limit` and the omitted count.
pub fn build_preview(records: &[MappedRecord], limit: usize) -> Preview<'_> {
    let shown = records.len().min(limit);
    Preview {
        visible: &records[..shown],
        remainder: records.len() - shown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(count: usize) -> Vec<MappedRecord> {
        (0..count)
            .map(|i| MappedRecord {
                name: if i % 2 == 0 { format!("part-{i}") } else { String::new() },
                ..MappedRecord::default()
            })
            .collect()
    }

    #[test]
    fn limits_visible_rows() {
        let all = records(25);
        let preview = build_preview(&all, DEFAULT_PREVIEW_LIMIT);
        assert_eq!(preview.visible.len(), 10);
        assert_eq!(preview.remainder, 15);
        assert_eq!(preview.total(), 25);
        assert_eq!(preview.visible, &all[..10]);
    }

    #[test]
    fn short_lists_have_no_remainder() {
        let all = records(3);
        let preview = build_preview(&all, 10);
        assert_eq!(preview.visible.len(), 3);
        assert_eq!(preview.remainder, 0);
        assert_eq!(preview.invalid_visible(), 1);
    }

    #[test]
    fn zero_limit_hides_everything() {
        let all = records(4);
        let preview = build_preview(&all, 0);
        assert!(preview.visible.is_empty());
        assert_eq!(preview.remainder, 4);
    }
}
