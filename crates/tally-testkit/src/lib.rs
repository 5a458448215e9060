//! # Tally Testkit
//!
//! Testing utilities for the tally service.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Fixtures**: a builder for receipt JSON documents with a valid default
//! - **Golden vectors**: complete documents with hand-computed point totals
//! - **Generators**: proptest strategies for valid receipts
//!
//! ## Golden Vectors
//!
//! ```rust
//! use tally_testkit::vectors::verify_all_vectors;
//!
//! verify_all_vectors();
//! ```
//!
//! ## Fixtures
//!
//! ```rust
//! use tally_testkit::fixtures::ReceiptFixture;
//!
//! let raw = ReceiptFixture::new()
//!     .retailer("M&M Corner Market")
//!     .purchase_time("14:33")
//!     .to_json();
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::ReceiptFixture;
pub use generators::receipt_fixture;
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
