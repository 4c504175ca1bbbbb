//! Final filter before records are sent to the record API.

use atl_model::MappedRecord;
use serde::Serialize;
use tracing::info;

use crate::error::CommitError;

/// Records accepted for creation, plus how many were dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommitBatch {
    /// Records with a non-empty name, in input order.
    pub records: Vec<MappedRecord>,
    /// Records dropped for an empty name.
    pub rejected: usize,
}

impl CommitBatch {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Drops nameless records and packages the rest for submission.
///
/// An empty result is rejected: nothing is sent when no record has a name.
pub fn commit(records: Vec<MappedRecord>) -> Result<CommitBatch, CommitError> {
    let total = records.len();
    let accepted: Vec<MappedRecord> = records.into_iter().filter(MappedRecord::is_valid).collect();
    let rejected = total - accepted.len();

    if accepted.is_empty() {
        return Err(CommitError::EmptyBatch { rejected });
    }

    info!(accepted = accepted.len(), rejected, "Prepared import batch");
    Ok(CommitBatch {
        records: accepted,
        rejected,
    })
}
