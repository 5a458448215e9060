//! # Tally
//!
//! The unified API for the tally service: content-addressed, idempotent
//! scoring of submitted receipts.
//!
//! ## Overview
//!
//! A submitted receipt document is validated, addressed by the Blake3 hash
//! of its exact bytes, and scored under a fixed seven-rule set. The total
//! is stored once per identifier and retrieved by pure lookup.
//!
//! ## Key Concepts
//!
//! - **Receipt**: validated purchase document (retailer, date, time, items,
//!   total).
//! - **ReceiptId**: deterministic content-derived identifier; byte-identical
//!   resubmissions map to the same record.
//! - **At-most-once scoring**: concurrent submissions of the same bytes
//!   produce exactly one record.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tally::{MemoryStore, Processor};
//!
//! async fn example() {
//!     let processor = Processor::new(MemoryStore::new());
//!
//!     let body = br#"{
//!         "retailer": "Target",
//!         "purchaseDate": "2022-01-01",
//!         "purchaseTime": "13:01",
//!         "items": [{"shortDescription": "Gatorade", "price": "2.25"}],
//!         "total": "2.25"
//!     }"#;
//!
//!     let submission = processor.process(body).await.unwrap();
//!     let points = processor.lookup(&submission.id).await.unwrap();
//!     assert_eq!(points, submission.points);
//! }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `tally::core` - Pure primitives (Receipt, ReceiptId, scoring)
//! - `tally::store` - Storage abstraction and the in-memory backend

pub mod error;
pub mod processor;

// Re-export component crates
pub use tally_core as core;
pub use tally_store as store;

// Re-export main types for convenience
pub use error::{ProcessError, Result};
pub use processor::{Processor, Submission};

pub use tally_core::{
    parse_receipt, score, Amount, LineItem, Receipt, ReceiptId, ValidationError,
};
pub use tally_store::{MemoryStore, PointsStore, StoreError, SubmitOutcome};
