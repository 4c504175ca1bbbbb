//! Spreadsheet column mapping for component imports.
//!
//! Maps arbitrary spreadsheet headers onto the four canonical component
//! fields (name, type, description, quantity) and turns raw rows into
//! importable records. The pipeline is pure and synchronous:
//!
//! 1. [`detect_mapping`] guesses a [`FieldMapping`] from the header text
//! 2. [`apply_mapping`] projects raw rows into [`MappedRecord`]s
//! 3. [`build_preview`] bounds what gets rendered
//! 4. the user may override any field, which re-runs step 2 from scratch
//! 5. [`commit`] drops nameless records and rejects an empty batch
//!
//! [`ImportSession`] bundles this state for one upload.
//!
//! # Example
//!
//! ```ignore
//! use atl_map::{ImportSession, DEFAULT_PREVIEW_LIMIT};
//! use atl_model::CanonicalField;
//!
//! let mut session = ImportSession::new(table)?;
//! let column = session.resolve_column("Stock")?;
//! session.set_field(CanonicalField::Quantity, column)?;
//!
//! let preview = session.preview(DEFAULT_PREVIEW_LIMIT);
//! let batch = session.commit()?;
//! ```

mod apply;
mod commit;
mod detect;
mod error;
mod patterns;
mod preview;
mod session;

pub use apply::{apply_mapping, map_row};
pub use commit::{CommitBatch, commit};
pub use detect::{detect_mapping, detect_mapping_with};
pub use error::{CommitError, MapError, Result};
pub use patterns::{DEFAULT_PATTERNS, PatternEntry, PatternTable};
pub use preview::{DEFAULT_PREVIEW_LIMIT, Preview, build_preview};
pub use session::ImportSession;

pub use atl_model::{CanonicalField, FieldMapping, MappedRecord};
