//! Projects and the components they use.

use serde::{Deserialize, Serialize};

use crate::lenient::lenient_string;

/// A project row held by the record API.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "ProjectID", default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(rename = "ProjectName", default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(rename = "Overview", default, deserialize_with = "lenient_string")]
    pub overview: String,
    #[serde(rename = "Code", default, deserialize_with = "lenient_string")]
    pub code: String,
    /// Comma-separated component IDs.
    #[serde(rename = "ComponentsUsed", default, deserialize_with = "lenient_string")]
    pub components_used: String,
    /// Set by the store on every write.
    #[serde(rename = "LastUpdated", default, deserialize_with = "lenient_string")]
    pub last_updated: String,
}

impl Project {
    /// Component IDs listed in `components_used`, trimmed, blanks skipped.
    pub fn component_ids(&self) -> Vec<&str> {
        split_ids(&self.components_used)
    }

    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.name.clone(),
            overview: self.overview.clone(),
            code: self.code.clone(),
            components_used: self.components_used.clone(),
        }
    }
}

/// Fields sent with `addProject` and `updateProject`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDraft {
    #[serde(rename = "ProjectName")]
    pub name: String,
    #[serde(rename = "Overview")]
    pub overview: String,
    #[serde(rename = "Code")]
    pub code: String,
    #[serde(rename = "ComponentsUsed")]
    pub components_used: String,
}

impl ProjectDraft {
    /// Replaces the component list, stored as `"C-1, C-2"`.
    #[must_use]
    pub fn with_components<S: AsRef<str>>(mut self, ids: &[S]) -> Self {
        self.components_used = ids
            .iter()
            .map(|id| id.as_ref().trim())
            .filter(|id| !id.is_empty())
            .collect::<Vec<_>>()
            .join(", ");
        self
    }
}

fn split_ids(text: &str) -> Vec<&str> {
    text.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect()
}
