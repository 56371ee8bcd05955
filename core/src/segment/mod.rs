//! Length-prefixed, word-padded segments.
//!
//! Responsibilities:
//! - Read one segment at a given offset as a zero-copy view
//! - Classify a segment as empty or non-empty after the length check
//! - Append a segment in canonical form
//!
//! Non-responsibilities:
//! - Locating segments (see `headers`)
//! - Pairing segments (see `dual`)

pub mod types;
pub mod encode;
pub mod decode;

pub use types::Segment;
pub use encode::{encode_bytes, encode_segment};
pub use decode::{next_segment_offset, read_segment, read_segment_tagged};
