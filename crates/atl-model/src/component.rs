//! Stored components as returned by the record API.

use serde::{Deserialize, Serialize};

use crate::lenient::{lenient_quantity, lenient_string};
use crate::record::MappedRecord;

/// Quantity at or below which stock counts as low.
const LOW_STOCK_MAX: u64 = 5;

/// A component row held by the record API.
///
/// The backing store is a spreadsheet, so IDs and quantities may arrive as
/// either strings or numbers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "ComponentID", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "ComponentName", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "Type", default, deserialize_with = "lenient_string")]
    pub component_type: String,
    #[serde(rename = "Description", default, deserialize_with = "lenient_string")]
    pub description: String,
    #[serde(rename = "Quantity", default, deserialize_with = "lenient_quantity")]
    pub quantity: u64,
}

impl Component {
    pub fn stock_level(&self) -> StockLevel {
        StockLevel::of(self.quantity)
    }

    /// Case-insensitive match against name, ID, type and description.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        [&self.name, &self.id, &self.component_type, &self.description]
            .iter()
            .any(|value| value.to_lowercase().contains(&query))
    }

    /// The editable fields, in the shape `addComponent`/`updateComponent` take.
    pub fn to_record(&self) -> MappedRecord {
        MappedRecord {
            name: self.name.clone(),
            component_type: self.component_type.clone(),
            description: self.description.clone(),
            quantity: self.quantity,
        }
    }
}

/// Stock classification of a quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StockLevel {
    /// Nothing on hand.
    Out,
    /// Between one and five units.
    Low,
    /// More than five units.
    InStock,
}

impl StockLevel {
    #[must_use]
    pub const fn of(quantity: u64) -> Self {
        if quantity == 0 {
            Self::Out
        } else if quantity <= LOW_STOCK_MAX {
            Self::Low
        } else {
            Self::InStock
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Out => "out of stock",
            Self::Low => "low",
            Self::InStock => "in stock",
        }
    }
}

/// Stock counts across a component list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StockSummary {
    pub total: usize,
    pub in_stock: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
}

impl StockSummary {
    pub fn from_components<'a>(components: impl IntoIterator<Item = &'a Component>) -> Self {
        let mut summary = Self::default();
        for component in components {
            summary.total += 1;
            match component.stock_level() {
                StockLevel::Out => summary.out_of_stock += 1,
                StockLevel::Low => summary.low_stock += 1,
                StockLevel::InStock => summary.in_stock += 1,
            }
        }
        summary
    }
}
