//! headers/types.rs
//! Typed view of the header region.

use crate::constants::{CANONICAL_OFFSET_A, HEADER_LEN};
use crate::segment::next_segment_offset;

/// Decoded header: where segment A and segment B start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackedHeader {
    pub offset_a: usize,
    pub offset_b: usize,
}

impl PackedHeader {
    pub const LEN: usize = HEADER_LEN;

    /// Header of the canonical encoding: A right after the header, B right
    /// after A's padded content.
    #[inline]
    pub fn canonical(len_a: usize) -> Self {
        Self {
            offset_a: CANONICAL_OFFSET_A,
            offset_b: next_segment_offset(CANONICAL_OFFSET_A, len_a),
        }
    }

    pub fn is_canonical_for(&self, len_a: usize) -> bool {
        *self == Self::canonical(len_a)
    }
}
