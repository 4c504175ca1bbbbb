//! Records produced by an import.

use serde::{Deserialize, Serialize};

/// A raw row projected through a field mapping.
///
/// Regenerated from the row and mapping whenever either changes; never
/// edited in place. Serializes with the record API's component keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedRecord {
    #[serde(rename = "ComponentName")]
    pub name: String,
    #[serde(rename = "Type")]
    pub component_type: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Quantity")]
    pub quantity: u64,
}

impl MappedRecord {
    /// A record is valid when its name is non-empty.
    pub fn is_valid(&self) -> bool {
        !self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_component_keys() {
        let record = MappedRecord {
            name: "Widget".to_string(),
            component_type: "A".to_string(),
            description: "desc".to_string(),
            quantity: 3,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ComponentName": "Widget",
                "Type": "A",
                "Description": "desc",
                "Quantity": 3
            })
        );
    }

    #[test]
    fn empty_name_is_invalid() {
        assert!(!MappedRecord::default().is_valid());
    }
}
