//! The Processor: validate, address, and score submitted receipts.
//!
//! Ties the pieces together: inbound bytes go through the validator, the
//! identifier is derived from those exact bytes, and the store scores the
//! receipt if the identifier is new. Retrieval is a pure lookup.

use std::sync::Arc;

use tally_core::{parse_receipt, ReceiptId};
use tally_store::{PointsStore, SubmitOutcome};
use tracing::debug;

use crate::error::{ProcessError, Result};

/// Outcome of processing a submitted receipt body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    /// Content-derived identifier for the submission.
    pub id: ReceiptId,
    /// Stored point total for that identifier.
    pub points: u64,
    /// Whether this submission created the record.
    pub first_seen: bool,
}

/// Orchestrates the submission and retrieval paths over a [`PointsStore`].
///
/// Constructed once at process start; request handlers share it by handle.
/// Cloning is cheap (the store is behind an `Arc`).
pub struct Processor<S: PointsStore> {
    store: Arc<S>,
}

impl<S: PointsStore> Processor<S> {
    /// Create a processor over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Get the store reference.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate raw receipt bytes, derive the identifier, and score the
    /// receipt if the identifier has not been seen before.
    ///
    /// Returns the identifier unconditionally once the record is present;
    /// duplicates never recompute or overwrite.
    pub async fn process(&self, raw: &[u8]) -> Result<Submission> {
        let receipt = parse_receipt(raw)?;
        let id = ReceiptId::derive(raw);

        let outcome = self.store.submit(id, &receipt).await?;
        if let SubmitOutcome::Scored { points } = outcome {
            debug!(id = %id, points, "scored receipt");
        }

        Ok(Submission {
            id,
            points: outcome.points(),
            first_seen: outcome.is_first(),
        })
    }

    /// Retrieve the stored point total for an identifier.
    pub async fn lookup(&self, id: &ReceiptId) -> Result<u64> {
        self.store
            .points(id)
            .await?
            .ok_or(ProcessError::ReceiptNotFound(*id))
    }
}

impl<S: PointsStore> Clone for Processor<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}
