use byteorder::{BigEndian, ByteOrder};

use crate::constants::{VALUE_LEN, WORD_LEN};
use crate::types::{AbiError, Region};

/// Round `len` up to the next word boundary.
#[inline(always)]
pub const fn padded_len(len: usize) -> usize {
    len.div_ceil(WORD_LEN) * WORD_LEN
}

/// Read the word at `at` as a native offset or length.
///
/// # Errors
/// - `Truncated` if the word does not fit inside `buf`.
/// - `WordOverflow` if any of the leading bytes is non-zero or the value
///   exceeds `usize::MAX`.
#[inline]
pub fn read_word(buf: &[u8], at: usize, region: Region) -> Result<usize, AbiError> {
    let end = at
        .checked_add(WORD_LEN)
        .filter(|&end| end <= buf.len())
        .ok_or(AbiError::Truncated {
            region,
            at,
            need: WORD_LEN,
            have: buf.len(),
        })?;

    let word = &buf[at..end];
    let (high, low) = word.split_at(WORD_LEN - VALUE_LEN);
    let overflow = || AbiError::WordOverflow {
        region,
        at,
        word: hex::encode(word),
    };

    if high.iter().any(|&b| b != 0) {
        return Err(overflow());
    }
    usize::try_from(BigEndian::read_u64(low)).map_err(|_| overflow())
}

/// Append `value` as one big-endian word.
#[inline]
pub fn put_word(out: &mut Vec<u8>, value: usize) {
    let mut word = [0u8; WORD_LEN];
    BigEndian::write_u64(&mut word[WORD_LEN - VALUE_LEN..], value as u64);
    out.extend_from_slice(&word);
}

/// Append `content` followed by zero padding up to the next word boundary.
/// Returns the number of padding bytes written.
#[inline]
pub fn put_padded(out: &mut Vec<u8>, content: &[u8]) -> usize {
    out.extend_from_slice(content);
    let pad = padded_len(content.len()) - content.len();
    out.resize(out.len() + pad, 0);
    pad
}
