//! Wire constants for the packed `(bytes, bytes)` layout.
//!
//! Every integer on the wire (offset or length) occupies one big-endian
//! word, and segment content is zero-padded to the same width.
//!
//! ```text
//! [ offset_a (32) ][ offset_b (32) ]               header region
//! [ len_a (32) ][ content_a ][ pad to 32 ]         segment A
//! [ len_b (32) ][ content_b ][ pad to 32 ]         segment B
//! ```
//!
//! Offsets count from the start of the header region, which is byte 0 of the
//! buffer.

/// Width of one wire word, also the padding alignment.
pub const WORD_LEN: usize = 32;

/// Number of offset slots in the header region.
pub const HEADER_WORDS: usize = 2;

/// Size of the header region in bytes.
pub const HEADER_LEN: usize = HEADER_WORDS * WORD_LEN;

/// Position of segment A in every canonical encoding.
pub const CANONICAL_OFFSET_A: usize = HEADER_LEN;

/// Low-order bytes of a word that may carry an offset or length.
/// The leading `WORD_LEN - VALUE_LEN` bytes must be zero.
pub const VALUE_LEN: usize = 8;

/// Encoded size of `(empty, empty)`: header plus two zero length words.
pub const EMPTY_PAIR_LEN: usize = HEADER_LEN + 2 * WORD_LEN;

/// Constants mirrored to bindings, by attribute name.
pub const EXPORTED: [(&str, usize); 5] = [
    ("WORD_LEN", WORD_LEN),
    ("HEADER_WORDS", HEADER_WORDS),
    ("HEADER_LEN", HEADER_LEN),
    ("CANONICAL_OFFSET_A", CANONICAL_OFFSET_A),
    ("EMPTY_PAIR_LEN", EMPTY_PAIR_LEN),
];
