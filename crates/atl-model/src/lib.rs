//! Data model for the component inventory and its record API.
//!
//! This crate holds the types shared by ingestion, column mapping, the
//! record API client and the CLI:
//!
//! - **Sheet data**: [`CellValue`], [`RawRow`], [`SheetTable`]
//! - **Mapping**: [`CanonicalField`], [`FieldMapping`]
//! - **Records**: [`MappedRecord`] (import output) and [`Component`] (stored)
//! - **Stock levels**: [`StockLevel`], [`StockSummary`]
//! - **Other record types**: [`Project`], [`Competition`], [`Order`] with
//!   their write-side drafts

mod cell;
mod competition;
mod component;
mod field;
mod lenient;
mod mapping;
mod order;
mod project;
mod quantity;
mod record;

pub use cell::{CellValue, HeaderList, RawRow, SheetTable};
pub use competition::{
    Competition, CompetitionDraft, CompetitionResult, CompetitionStatus, CompetitionSummary,
    ParseStatusError,
};
pub use component::{Component, StockLevel, StockSummary};
pub use field::{CanonicalField, ParseFieldError};
pub use mapping::FieldMapping;
pub use order::{DEFAULT_ORDER_STATUS, Order, OrderDraft};
pub use project::{Project, ProjectDraft};
pub use quantity::parse_quantity;
pub use record::MappedRecord;
