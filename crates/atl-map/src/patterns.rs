//! Header recognition patterns.
//!
//! Patterns are plain data: an ordered list of `(field, regex)` pairs. Order
//! matters only within a field, where earlier patterns are tried first.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use atl_model::CanonicalField;

use crate::error::{MapError, Result};

/// Built-in recognition patterns, matched case-insensitively.
pub const DEFAULT_PATTERNS: &[(CanonicalField, &str)] = &[
    (CanonicalField::Name, r"^name$"),
    (CanonicalField::Name, r"component\s*name"),
    (CanonicalField::Name, r"^item$"),
    (CanonicalField::Name, r"item\s*name"),
    (CanonicalField::Name, r"product"),
    (CanonicalField::Name, r"^component$"),
    (CanonicalField::Name, r"^part$"),
    (CanonicalField::Name, r"material"),
    (CanonicalField::Name, r"^title$"),
    (CanonicalField::Type, r"^type$"),
    (CanonicalField::Type, r"^category$"),
    (CanonicalField::Type, r"^kind$"),
    (CanonicalField::Type, r"^class$"),
    (CanonicalField::Type, r"^group$"),
    (CanonicalField::Description, r"^description$"),
    (CanonicalField::Description, r"^details$"),
    (CanonicalField::Description, r"^info$"),
    (CanonicalField::Description, r"^notes$"),
    (CanonicalField::Description, r"^spec"),
    (CanonicalField::Quantity, r"^qty$"),
    (CanonicalField::Quantity, r"^quantity$"),
    (CanonicalField::Quantity, r"^count$"),
    (CanonicalField::Quantity, r"^stock$"),
    (CanonicalField::Quantity, r"^amount$"),
    (CanonicalField::Quantity, r"^number$"),
    (CanonicalField::Quantity, r"^units$"),
];

static DEFAULT_TABLE: LazyLock<PatternTable> = LazyLock::new(|| {
    PatternTable::new(DEFAULT_PATTERNS.iter().copied()).expect("Invalid built-in header pattern")
});

/// One compiled recognition pattern.
#[derive(Debug, Clone)]
pub struct PatternEntry {
    pub field: CanonicalField,
    pub regex: Regex,
}

impl PatternEntry {
    /// The pattern source as written.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }
}

/// Ordered, compiled set of header recognition patterns.
#[derive(Debug, Clone)]
pub struct PatternTable {
    entries: Vec<PatternEntry>,
}

impl PatternTable {
    /// Compiles a table from `(field, pattern)` pairs.
    pub fn new<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (CanonicalField, S)>,
        S: AsRef<str>,
    {
        let entries = pairs
            .into_iter()
            .map(|(field, pattern)| {
                let pattern = pattern.as_ref();
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map(|regex| PatternEntry { field, regex })
                    .map_err(|e| MapError::InvalidPattern {
                        field,
                        pattern: pattern.to_string(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { entries })
    }

    /// The built-in table.
    pub fn builtin() -> &'static PatternTable {
        &DEFAULT_TABLE
    }

    /// Patterns for `field`, in priority order.
    pub fn patterns_for(&self, field: CanonicalField) -> impl Iterator<Item = &PatternEntry> {
        self.entries.iter().filter(move |entry| entry.field == field)
    }

    /// First pattern for `field` that matches `header` (trimmed).
    pub fn matching_pattern(&self, field: CanonicalField, header: &str) -> Option<&PatternEntry> {
        let header = header.trim();
        self.patterns_for(field)
            .find(|entry| entry.regex.is_match(header))
    }

    pub fn matches(&self, field: CanonicalField, header: &str) -> bool {
        self.matching_pattern(field, header).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
