//! Deserializers for values read back from the spreadsheet store.
//!
//! Cells come back as whatever type the sheet holds, so a text column may
//! deliver numbers and a count column may deliver strings.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::quantity::parse_quantity;

/// Any scalar as text; null becomes empty.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Null => String::new(),
        Value::String(text) => text,
        other => other.to_string(),
    })
}

/// A count from a number or numeric text; anything else is 0.
pub(crate) fn lenient_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(|f| if f > 0.0 { f as u64 } else { 0 }))
            .unwrap_or(0),
        Value::String(text) => parse_quantity(&text),
        _ => 0,
    })
}
