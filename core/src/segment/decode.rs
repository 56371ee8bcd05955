use tracing::trace;

use crate::constants::WORD_LEN;
use crate::segment::types::Segment;
use crate::telemetry::CostCounters;
use crate::types::{AbiError, Region};
use crate::utils::{padded_len, read_word};

/// Read the segment whose length word sits at `offset`.
///
/// Returns a view of exactly the declared content. Padding after the content
/// is neither read nor validated, and may be absent at the end of the buffer.
///
/// # Errors
/// - `Truncated` / `WordOverflow` if the length word cannot be read.
/// - `LengthOverrun` if the declared content runs past the buffer.
#[inline]
pub fn read_segment<'a>(
    buf: &'a [u8],
    offset: usize,
    cost: &mut CostCounters,
) -> Result<&'a [u8], AbiError> {
    let declared = read_word(buf, offset, Region::LengthWord)?;
    cost.add_word_read();
    content_at(buf, offset, declared, cost)
}

/// Like [`read_segment`], but stops at the length word when it reads zero.
#[inline]
pub fn read_segment_tagged<'a>(
    buf: &'a [u8],
    offset: usize,
    cost: &mut CostCounters,
) -> Result<Segment<'a>, AbiError> {
    let declared = read_word(buf, offset, Region::LengthWord)?;
    cost.add_word_read();
    if declared == 0 {
        trace!(offset, "empty segment");
        return Ok(Segment::Empty);
    }
    content_at(buf, offset, declared, cost).map(Segment::NonEmpty)
}

/// Offset of the segment that canonically follows a `len`-byte segment at `offset`.
#[inline(always)]
pub fn next_segment_offset(offset: usize, len: usize) -> usize {
    offset + WORD_LEN + padded_len(len)
}

#[inline(always)]
fn content_at<'a>(
    buf: &'a [u8],
    offset: usize,
    declared: usize,
    cost: &mut CostCounters,
) -> Result<&'a [u8], AbiError> {
    // read_word already proved offset + WORD_LEN <= buf.len()
    let start = offset + WORD_LEN;
    let available = buf.len() - start;
    if declared > available {
        return Err(AbiError::LengthOverrun {
            offset,
            declared,
            available,
        });
    }

    cost.add_view(declared);
    trace!(offset, len = declared, "segment read");
    Ok(&buf[start..start + declared])
}
