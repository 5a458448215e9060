//! Error types for the Processor.

use tally_core::{ReceiptId, ValidationError};
use tally_store::StoreError;
use thiserror::Error;

/// Errors that can occur while processing or retrieving submissions.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The submitted document failed validation. Client error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// No record exists for the requested identifier.
    #[error("no receipt found for id {0}")]
    ReceiptNotFound(ReceiptId),
}

/// Result type for Processor operations.
pub type Result<T> = std::result::Result<T, ProcessError>;
