//! Error types for receipt validation.

use thiserror::Error;

/// Rejections produced while validating a submitted receipt document.
///
/// Every variant is a caller error: the service reports it as a client
/// failure and never retries or logs it as a system fault.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("malformed receipt document: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("retailer name is empty")]
    EmptyRetailer,

    #[error("invalid purchase date: {0:?}")]
    InvalidDate(String),

    #[error("invalid purchase time: {0:?}")]
    InvalidTime(String),

    #[error("invalid total amount: {0:?}")]
    InvalidTotal(String),

    #[error("receipt has no line items")]
    NoItems,

    #[error("line item {index} has an empty description")]
    EmptyItemDescription { index: usize },

    #[error("line item {index} has an invalid price: {value:?}")]
    InvalidItemPrice { index: usize, value: String },
}
