//! Pairing of the two segments of a packed `(bytes, bytes)` buffer.
//!
//! Responsibilities:
//! - Decode a packed buffer into `(A, B)`, in that order
//! - Reencode any `(A, B)` into the one canonical layout
//!
//! Every entry point funnels through these functions, so the emitted bytes
//! depend only on the logical pair, never on how it arrived.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::{DualArray, DualArrayBuf};
pub use encode::{encoded_len, reencode, reencode_metered, reencode_segments};
pub use decode::{
    decode, decode_metered, decode_optimized, decode_optimized_metered, decode_shared,
    decode_tagged_metered,
};
