//! # Tally Core
//!
//! Pure primitives for the tally service: the receipt model, structural
//! validation, content-addressed identifiers, and the points rule engine.
//!
//! This crate contains no I/O, no storage, and no shared state. It is pure
//! computation over submitted receipt documents.
//!
//! ## Key Types
//!
//! - [`Receipt`] - A validated purchase document
//! - [`ReceiptId`] - Content-addressed identifier (Blake3 of the raw bytes)
//! - [`Amount`] - Currency value held as whole cents
//!
//! ## Flow
//!
//! [`parse_receipt`] turns raw bytes into a [`Receipt`] or a
//! [`ValidationError`]; [`score`] maps a receipt to its point total under
//! the fixed rule set in [`points`].

pub mod error;
pub mod money;
pub mod points;
pub mod receipt;
pub mod types;
pub mod validate;

pub use error::ValidationError;
pub use money::{Amount, ParseAmountError};
pub use points::score;
pub use receipt::{LineItem, Receipt};
pub use types::ReceiptId;
pub use validate::parse_receipt;
