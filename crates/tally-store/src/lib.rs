//! # Tally Store
//!
//! Storage abstraction for the tally service. Scored submissions live
//! behind the [`PointsStore`] trait; the shipping backend is the in-memory
//! [`MemoryStore`] (records last for the process lifetime only).
//!
//! ## Key Types
//!
//! - [`PointsStore`] - The async trait for all storage operations
//! - [`MemoryStore`] - In-memory, process-lifetime storage
//! - [`SubmitOutcome`] - Result of submitting a receipt
//!
//! ## Design Notes
//!
//! - **Idempotent submits**: resubmitting a known identifier returns
//!   `AlreadyScored` with the original total.
//! - **At-most-once scoring**: the rule engine runs inside the store's
//!   write critical section, once per identifier.
//! - **No deletion**: the per-identifier state machine is
//!   `Unknown -> Scored`, one way, terminal.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{Result, StoreError};
pub use memory::MemoryStore;
pub use traits::{PointsStore, SubmitOutcome};
