//! # Tally API
//!
//! HTTP adapter for the tally service. A thin axum layer over
//! [`tally::Processor`]:
//!
//! - `POST /receipts/process` - submit a receipt body, get its identifier
//! - `GET /receipts/:id/points` - retrieve the stored point total
//! - `GET /health` - liveness and record count
//!
//! The `tallyd` binary wires this to a TCP listener with `--port` and
//! `--logging` flags.

pub mod server;

pub use server::{build_router, start_server, AppState};
