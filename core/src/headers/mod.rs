//! headers/mod.rs
//! The two-slot offset header at the front of every packed buffer.
//!
//! Notes:
//! - Each slot is one big-endian word holding a byte offset.
//! - Offsets count from the start of the header region, which is byte 0.
//! - Offsets are validated as native integers before any segment is touched.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
