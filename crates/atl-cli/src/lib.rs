//! CLI library components for the component importer.

pub mod edit;
pub mod import;
pub mod listing;
pub mod logging;
