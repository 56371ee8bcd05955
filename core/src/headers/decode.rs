//! headers/decode.rs
//!
//! Header decoding.
//!
//! Design notes:
//! - Reads fixed word slots; no validation of where offsets point happens here,
//!   the segment reader bounds-checks every dereference.
//! - The optimized path reads slot A only.

use tracing::trace;

use crate::constants::{HEADER_LEN, WORD_LEN};
use crate::headers::types::PackedHeader;
use crate::telemetry::CostCounters;
use crate::types::{AbiError, Region};
use crate::utils::read_word;

/// Read both offset slots.
///
/// # Errors
/// - `Truncated` if `buf` is shorter than the header region.
/// - `WordOverflow` if a slot does not hold a native offset.
#[inline]
pub fn read_header(buf: &[u8], cost: &mut CostCounters) -> Result<PackedHeader, AbiError> {
    ensure_header(buf)?;

    let offset_a = read_word(buf, 0, Region::OffsetA)?;
    cost.add_word_read();
    let offset_b = read_word(buf, WORD_LEN, Region::OffsetB)?;
    cost.add_word_read();

    trace!(offset_a, offset_b, "header read");
    Ok(PackedHeader { offset_a, offset_b })
}

/// Read slot A only; slot B is left untouched.
///
/// The header region must still be present in full.
#[inline]
pub fn read_offset_a(buf: &[u8], cost: &mut CostCounters) -> Result<usize, AbiError> {
    ensure_header(buf)?;
    let offset_a = read_word(buf, 0, Region::OffsetA)?;
    cost.add_word_read();
    Ok(offset_a)
}

#[inline(always)]
fn ensure_header(buf: &[u8]) -> Result<(), AbiError> {
    if buf.len() < HEADER_LEN {
        return Err(AbiError::Truncated {
            region: Region::Header,
            at: 0,
            need: HEADER_LEN,
            have: buf.len(),
        });
    }
    Ok(())
}
