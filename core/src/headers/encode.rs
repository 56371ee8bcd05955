//! headers/encode.rs
//!
//! Header encoding. Slot order is A then B and must match `decode.rs`.

use crate::headers::types::PackedHeader;
use crate::telemetry::CostCounters;
use crate::utils::put_word;

#[inline]
pub fn encode_header(out: &mut Vec<u8>, header: &PackedHeader, cost: &mut CostCounters) {
    put_word(out, header.offset_a);
    put_word(out, header.offset_b);
    cost.words_written += 2;
}
