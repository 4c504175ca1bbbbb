//! Field-to-column assignment.

use serde::{Deserialize, Serialize};

use crate::field::CanonicalField;

/// Assignment of each canonical field to a header position.
///
/// `None` means the field is unmapped. All four fields are always present;
/// two fields may point at the same column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldMapping {
    pub name: Option<usize>,
    #[serde(rename = "type")]
    pub component_type: Option<usize>,
    pub description: Option<usize>,
    pub quantity: Option<usize>,
}

impl FieldMapping {
    /// A mapping with every field unmapped.
    pub const fn unmapped() -> Self {
        Self {
            name: None,
            component_type: None,
            description: None,
            quantity: None,
        }
    }

    /// Column assigned to `field`, if any.
    #[must_use]
    pub const fn get(&self, field: CanonicalField) -> Option<usize> {
        match field {
            CanonicalField::Name => self.name,
            CanonicalField::Type => self.component_type,
            CanonicalField::Description => self.description,
            CanonicalField::Quantity => self.quantity,
        }
    }

    pub fn set(&mut self, field: CanonicalField, column: Option<usize>) {
        let slot = match field {
            CanonicalField::Name => &mut self.name,
            CanonicalField::Type => &mut self.component_type,
            CanonicalField::Description => &mut self.description,
            CanonicalField::Quantity => &mut self.quantity,
        };
        *slot = column;
    }

    /// Returns a copy of this mapping with one field reassigned.
    #[must_use]
    pub fn with(mut self, field: CanonicalField, column: Option<usize>) -> Self {
        self.set(field, column);
        self
    }

    pub fn is_mapped(&self, field: CanonicalField) -> bool {
        self.get(field).is_some()
    }

    /// Iterates `(field, column)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (CanonicalField, Option<usize>)> + '_ {
        CanonicalField::ALL
            .into_iter()
            .map(move |field| (field, self.get(field)))
    }

    /// Fields assigned to `column`.
    pub fn fields_for_column(&self, column: usize) -> Vec<CanonicalField> {
        self.iter()
            .filter(|(_, assigned)| *assigned == Some(column))
            .map(|(field, _)| field)
            .collect()
    }
}
