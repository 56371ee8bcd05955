use crate::constants::{HEADER_LEN, WORD_LEN};
use crate::headers::{encode_header, PackedHeader};
use crate::segment::{encode_bytes, encode_segment, Segment};
use crate::telemetry::CostCounters;
use crate::utils::padded_len;

/// Exact size of the canonical encoding of a pair with these lengths.
#[inline(always)]
pub fn encoded_len(len_a: usize, len_b: usize) -> usize {
    HEADER_LEN + 2 * WORD_LEN + padded_len(len_a) + padded_len(len_b)
}

/// Canonical encoding of `(a, b)`.
///
/// Layout:
///
/// ```text
/// [ offset_a = 64 ]
/// [ offset_b = 96 + padded(len a) ]
/// [ len a ][ a ][ zero pad ]
/// [ len b ][ b ][ zero pad ]
/// ```
#[inline]
pub fn reencode(a: &[u8], b: &[u8]) -> Vec<u8> {
    reencode_metered(a, b, &mut CostCounters::default())
}

pub fn reencode_metered(a: &[u8], b: &[u8], cost: &mut CostCounters) -> Vec<u8> {
    let expected = encoded_len(a.len(), b.len());
    let mut out = Vec::with_capacity(expected);

    encode_header(&mut out, &PackedHeader::canonical(a.len()), cost);
    encode_bytes(&mut out, a, cost);
    encode_bytes(&mut out, b, cost);

    debug_assert_eq!(out.len(), expected, "reencode wrote incorrect length");
    out
}

/// Canonical encoding from tagged segments. Byte-identical to [`reencode`].
pub fn reencode_segments(a: Segment<'_>, b: Segment<'_>, cost: &mut CostCounters) -> Vec<u8> {
    let expected = a.encoded_len() + b.encoded_len() + HEADER_LEN;
    let mut out = Vec::with_capacity(expected);

    encode_header(&mut out, &PackedHeader::canonical(a.len()), cost);
    encode_segment(&mut out, a, cost);
    encode_segment(&mut out, b, cost);

    debug_assert_eq!(out.len(), expected, "reencode wrote incorrect length");
    out
}
