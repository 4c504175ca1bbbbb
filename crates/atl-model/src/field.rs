//! Canonical import fields.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four normalized attributes every imported record is reduced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CanonicalField {
    Name,
    Type,
    Description,
    Quantity,
}

impl CanonicalField {
    /// All fields in detection order.
    pub const ALL: [CanonicalField; 4] = [Self::Name, Self::Type, Self::Description, Self::Quantity];

    /// Stable lowercase key used on the command line and in JSON output.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Type => "type",
            Self::Description => "description",
            Self::Quantity => "quantity",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Name => "Component Name",
            Self::Type => "Type",
            Self::Description => "Description",
            Self::Quantity => "Quantity",
        }
    }

    /// Whether a record without this field is rejected at commit.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self, Self::Name)
    }
}

impl fmt::Display for CanonicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a field name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown field '{0}' (expected name, type, description or quantity)")]
pub struct ParseFieldError(pub String);

impl FromStr for CanonicalField {
    type Err = ParseFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|ch| !matches!(ch, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();
        match normalized.as_str() {
            "name" | "component" | "componentname" | "item" => Ok(Self::Name),
            "type" | "kind" | "category" => Ok(Self::Type),
            "description" | "desc" => Ok(Self::Description),
            "quantity" | "qty" => Ok(Self::Quantity),
            _ => Err(ParseFieldError(s.to_string())),
        }
    }
}
