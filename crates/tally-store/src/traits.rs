//! PointsStore trait: the abstract interface for scored submissions.
//!
//! The store owns the only mapping from identifiers to point totals.
//! Records move `Unknown -> Scored` exactly once and are never updated
//! or deleted afterwards.

use async_trait::async_trait;
use tally_core::{Receipt, ReceiptId};

use crate::error::Result;

/// Result of submitting a receipt for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// First submission for this identifier; the receipt was scored.
    Scored {
        /// The freshly computed total.
        points: u64,
    },
    /// A record already existed; the stored total was left untouched.
    AlreadyScored {
        /// The previously stored total.
        points: u64,
    },
}

impl SubmitOutcome {
    /// The stored point total, whichever way it got there.
    pub fn points(self) -> u64 {
        match self {
            Self::Scored { points } | Self::AlreadyScored { points } => points,
        }
    }

    /// Whether this submission created the record.
    pub fn is_first(self) -> bool {
        matches!(self, Self::Scored { .. })
    }
}

/// Async interface for the submission store.
///
/// # Design Notes
///
/// - **At-most-once scoring**: `submit` runs the check-then-score-then-insert
///   sequence under the store's write guard, so concurrent submits of the
///   same identifier compute exactly once.
/// - **First-write-wins**: an existing record is never overwritten.
/// - **Atomic visibility**: readers observe a fully formed record or none.
#[async_trait]
pub trait PointsStore: Send + Sync {
    /// Submit a receipt under its content-derived identifier.
    ///
    /// Scores the receipt only if `id` has not been seen before; a
    /// duplicate leaves the existing record untouched and reports it.
    async fn submit(&self, id: ReceiptId, receipt: &Receipt) -> Result<SubmitOutcome>;

    /// Look up the stored point total for an identifier.
    async fn points(&self, id: &ReceiptId) -> Result<Option<u64>>;

    /// Number of scored submissions held by the store.
    async fn record_count(&self) -> Result<usize>;
}
