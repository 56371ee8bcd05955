//! telemetry/mod.rs
//! Per-call cost accounting for the decode and reencode paths.
//!
//! Notes:
//! - Counters are plain values threaded through one call; nothing is global.
//! - Words read/written are the unit of work the fast paths try to minimise.
//! - `CostSnapshot` is the immutable, serializable view handed to callers and bindings.

pub mod counters;
pub mod snapshot;

pub use counters::*;
pub use snapshot::*;
