//! Submission of committed batches.

use tracing::{info, warn};

use atl_map::CommitBatch;
use atl_model::MappedRecord;

use crate::error::Result;

/// Destination for committed component records.
pub trait ComponentSink {
    /// Persists `records`, returning how many the destination actually added.
    fn bulk_add(&self, records: &[MappedRecord]) -> Result<usize>;
}

/// Outcome of submitting a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkAddOutcome {
    /// Records sent.
    pub submitted: usize,
    /// Records the destination reports as added.
    pub added: usize,
    /// Records dropped before sending for an empty name.
    pub rejected: usize,
}

impl BulkAddOutcome {
    /// True when the destination added fewer records than were sent.
    pub fn is_partial(&self) -> bool {
        self.added < self.submitted
    }
}

/// Sends a committed batch once; the reported count is passed through as-is.
pub fn submit_batch<S: ComponentSink + ?Sized>(
    sink: &S,
    batch: &CommitBatch,
) -> Result<BulkAddOutcome> {
    let submitted = batch.len();
    let added = sink.bulk_add(&batch.records)?;
    let outcome = BulkAddOutcome {
        submitted,
        added,
        rejected: batch.rejected,
    };

    if outcome.is_partial() {
        warn!(submitted, added, "Record API added fewer components than submitted");
    } else {
        info!(submitted, added, "Imported components");
    }
    Ok(outcome)
}
