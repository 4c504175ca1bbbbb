//! Field changes requested on the command line, merged over stored records.

use anyhow::{Result, bail};

use atl_model::{CompetitionResult, CompetitionStatus, MappedRecord};

/// Component fields to set; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentChanges {
    pub name: Option<String>,
    pub component_type: Option<String>,
    pub description: Option<String>,
    pub quantity: Option<u64>,
}

impl ComponentChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.component_type.is_none()
            && self.description.is_none()
            && self.quantity.is_none()
    }

    /// Overlays the requested fields on `record`. Text is trimmed.
    #[must_use]
    pub fn apply(&self, mut record: MappedRecord) -> MappedRecord {
        overlay(&mut record.name, self.name.as_deref());
        overlay(&mut record.component_type, self.component_type.as_deref());
        overlay(&mut record.description, self.description.as_deref());
        if let Some(quantity) = self.quantity {
            record.quantity = quantity;
        }
        record
    }

    /// A new component from these fields; a name is required.
    pub fn to_new_record(&self) -> Result<MappedRecord> {
        let record = self.apply(MappedRecord::default());
        if !record.is_valid() {
            bail!("a component needs a name (--name)");
        }
        Ok(record)
    }

    /// `record` with these changes, refusing to blank the name.
    pub fn to_updated_record(&self, record: MappedRecord) -> Result<MappedRecord> {
        if self.is_empty() {
            bail!("nothing to change; pass --name, --type, --description or --quantity");
        }
        let updated = self.apply(record);
        if !updated.is_valid() {
            bail!("the component name cannot be empty");
        }
        Ok(updated)
    }
}

/// Competition outcome fields to set; `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultChanges {
    pub status: Option<CompetitionStatus>,
    pub position: Option<String>,
    pub result: Option<String>,
    pub notes: Option<String>,
}

impl ResultChanges {
    #[must_use]
    pub fn apply(&self, mut current: CompetitionResult) -> CompetitionResult {
        if let Some(status) = self.status {
            current.status = status.label().to_string();
        }
        overlay(&mut current.position, self.position.as_deref());
        overlay(&mut current.result, self.result.as_deref());
        overlay(&mut current.notes, self.notes.as_deref());
        current
    }
}

fn overlay(target: &mut String, value: Option<&str>) {
    if let Some(value) = value {
        *target = value.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> MappedRecord {
        MappedRecord {
            name: "Servo".to_string(),
            component_type: "Actuator".to_string(),
            description: "metal gears".to_string(),
            quantity: 3,
        }
    }

    #[test]
    fn only_requested_fields_change() {
        let changes = ComponentChanges {
            description: Some("  plastic gears ".to_string()),
            quantity: Some(0),
            ..ComponentChanges::default()
        };
        let updated = changes.to_updated_record(stored()).unwrap();
        assert_eq!(updated.name, "Servo");
        assert_eq!(updated.component_type, "Actuator");
        assert_eq!(updated.description, "plastic gears");
        assert_eq!(updated.quantity, 0);
    }

    #[test]
    fn empty_changes_are_rejected() {
        assert!(ComponentChanges::default().to_updated_record(stored()).is_err());
    }

    #[test]
    fn name_cannot_be_blanked() {
        let changes = ComponentChanges {
            name: Some("   ".to_string()),
            ..ComponentChanges::default()
        };
        assert!(changes.to_updated_record(stored()).is_err());
    }

    #[test]
    fn new_record_needs_a_name() {
        let changes = ComponentChanges {
            quantity: Some(4),
            ..ComponentChanges::default()
        };
        assert!(changes.to_new_record().is_err());

        let changes = ComponentChanges {
            name: Some("Relay".to_string()),
            ..changes
        };
        let record = changes.to_new_record().unwrap();
        assert_eq!(record.name, "Relay");
        assert_eq!(record.quantity, 4);
        assert_eq!(record.component_type, "");
    }

    #[test]
    fn result_changes_keep_unset_fields() {
        let current = CompetitionResult {
            status: "Ongoing".to_string(),
            position: String::new(),
            result: "Semi-final".to_string(),
            notes: "bring spares".to_string(),
        };
        let changes = ResultChanges {
            status: Some(CompetitionStatus::Completed),
            position: Some("2nd".to_string()),
            ..ResultChanges::default()
        };
        let updated = changes.apply(current);
        assert_eq!(updated.status, "Completed");
        assert_eq!(updated.position, "2nd");
        assert_eq!(updated.result, "Semi-final");
        assert_eq!(updated.notes, "bring spares");
    }
}
