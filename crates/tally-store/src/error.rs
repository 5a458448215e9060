//! Error types for the store crate.

use thiserror::Error;

/// Errors that can occur during store operations.
///
/// The in-memory backend never fails in practice; the trait keeps a
/// fallible surface so other backends can report their own faults.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-specific failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
