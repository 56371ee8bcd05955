use bytes::Bytes;
use tracing::trace;

use crate::constants::CANONICAL_OFFSET_A;
use crate::dual::types::{DualArray, DualArrayBuf};
use crate::headers::{read_header, read_offset_a};
use crate::segment::{next_segment_offset, read_segment, read_segment_tagged, Segment};
use crate::telemetry::CostCounters;
use crate::types::AbiError;

/// Decode a packed buffer into `(A, B)`.
///
/// An empty buffer is the encoding of two empty arrays.
#[inline]
pub fn decode(buf: &[u8]) -> Result<DualArray<'_>, AbiError> {
    decode_metered(buf, &mut CostCounters::default())
}

pub fn decode_metered<'a>(
    buf: &'a [u8],
    cost: &mut CostCounters,
) -> Result<DualArray<'a>, AbiError> {
    if buf.is_empty() {
        return Ok(DualArray::EMPTY);
    }

    let header = read_header(buf, cost)?;
    let a = read_segment(buf, header.offset_a, cost)?;
    let b = read_segment(buf, header.offset_b, cost)?;
    Ok(DualArray { a, b })
}

/// Decode a buffer known to be laid out canonically.
///
/// Only slot A is read and it must point right past the header; B is located
/// from A's length, so slot B is never consulted.
///
/// Results match [`decode`] only when slot B holds the canonical offset. A
/// buffer whose slot B points elsewhere but still in bounds decodes here to
/// the segment after A, while [`decode`] follows slot B.
///
/// # Errors
/// - `UnsupportedShape` if slot A is not the canonical offset.
/// - The same bounds errors as [`decode`].
#[inline]
pub fn decode_optimized(buf: &[u8]) -> Result<DualArray<'_>, AbiError> {
    decode_optimized_metered(buf, &mut CostCounters::default())
}

pub fn decode_optimized_metered<'a>(
    buf: &'a [u8],
    cost: &mut CostCounters,
) -> Result<DualArray<'a>, AbiError> {
    if buf.is_empty() {
        return Ok(DualArray::EMPTY);
    }

    let offset_a = read_offset_a(buf, cost)?;
    if offset_a != CANONICAL_OFFSET_A {
        return Err(AbiError::UnsupportedShape {
            expected: CANONICAL_OFFSET_A,
            found: offset_a,
        });
    }

    let a = read_segment(buf, offset_a, cost)?;
    let offset_b = next_segment_offset(offset_a, a.len());
    trace!(offset_b, "implicit offset B");
    let b = read_segment(buf, offset_b, cost)?;
    Ok(DualArray { a, b })
}

/// Decode into tagged segments; an empty buffer costs no reads at all.
pub fn decode_tagged_metered<'a>(
    buf: &'a [u8],
    cost: &mut CostCounters,
) -> Result<(Segment<'a>, Segment<'a>), AbiError> {
    if buf.is_empty() {
        return Ok((Segment::Empty, Segment::Empty));
    }

    let header = read_header(buf, cost)?;
    let a = read_segment_tagged(buf, header.offset_a, cost)?;
    let b = read_segment_tagged(buf, header.offset_b, cost)?;
    Ok((a, b))
}

/// General decode returning handles that share `buf`'s allocation.
pub fn decode_shared(buf: &Bytes) -> Result<DualArrayBuf, AbiError> {
    let pair = decode(buf)?;
    Ok(DualArrayBuf {
        a: buf.slice_ref(pair.a),
        b: buf.slice_ref(pair.b),
    })
}
