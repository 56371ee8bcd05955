use crate::constants::WORD_LEN;
use crate::utils::padded_len;

/// One logical byte array, tagged by the cheap length check.
///
/// The empty fast paths branch on this tag instead of re-testing lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Empty,
    NonEmpty(&'a [u8]),
}

impl<'a> Segment<'a> {
    #[inline(always)]
    pub fn classify(bytes: &'a [u8]) -> Self {
        if bytes.is_empty() {
            Segment::Empty
        } else {
            Segment::NonEmpty(bytes)
        }
    }

    #[inline(always)]
    pub fn as_bytes(&self) -> &'a [u8] {
        match *self {
            Segment::Empty => &[],
            Segment::NonEmpty(bytes) => bytes,
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.as_bytes().len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        matches!(self, Segment::Empty)
    }

    /// Bytes this segment occupies on the wire: length word plus padded content.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        match self {
            Segment::Empty => WORD_LEN,
            Segment::NonEmpty(bytes) => WORD_LEN + padded_len(bytes.len()),
        }
    }
}

impl<'a> From<&'a [u8]> for Segment<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Segment::classify(bytes)
    }
}
