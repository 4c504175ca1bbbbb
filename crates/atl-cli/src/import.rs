//! Loading a spreadsheet into an import session and applying user overrides.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use tracing::{debug, info, info_span, trace};

use atl_ingest::read_sheet;
use atl_map::ImportSession;
use atl_model::CanonicalField;

use crate::logging::redact_value;

/// A `FIELD=COLUMN` override from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOverride {
    pub field: CanonicalField,
    /// Header text, 1-based column number, or `skip`.
    pub column: String,
}

impl FromStr for FieldOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (field, column) = s
            .split_once('=')
            .ok_or_else(|| format!("expected FIELD=COLUMN, got '{s}'"))?;
        let field = field
            .parse::<CanonicalField>()
            .map_err(|error| error.to_string())?;
        let column = column.trim();
        if column.is_empty() {
            return Err(format!("missing column for '{field}'"));
        }
        Ok(Self {
            field,
            column: column.to_string(),
        })
    }
}

/// `clap` value parser for `--map`.
pub fn parse_override(value: &str) -> Result<FieldOverride, String> {
    value.parse()
}

/// Reads `path`, detects the mapping, then applies `overrides` in order.
pub fn load_session(path: &Path, overrides: &[FieldOverride]) -> Result<ImportSession> {
    let span = info_span!("load_session", path = %path.display());
    let _guard = span.enter();

    let table = read_sheet(path).with_context(|| format!("failed to read {}", path.display()))?;
    let mut session =
        ImportSession::new(table).with_context(|| format!("nothing to import in {}", path.display()))?;
    debug!(mapping = ?session.mapping(), "Detected column mapping");

    for item in overrides {
        let column = session
            .resolve_column(&item.column)
            .with_context(|| format!("invalid --map value for {}", item.field))?;
        session
            .set_field(item.field, column)
            .with_context(|| format!("invalid --map value for {}", item.field))?;
    }

    if let Some(first) = session.records().first() {
        trace!(name = redact_value(&first.name), "First mapped row");
    }
    info!(
        rows = session.row_count(),
        valid = session.valid_count(),
        "Mapped spreadsheet rows"
    );
    Ok(session)
}
