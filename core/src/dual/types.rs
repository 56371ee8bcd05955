use bytes::Bytes;

use crate::segment::Segment;

/// Decoded pair borrowed from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualArray<'a> {
    pub a: &'a [u8],
    pub b: &'a [u8],
}

impl<'a> DualArray<'a> {
    pub const EMPTY: DualArray<'static> = DualArray { a: &[], b: &[] };

    #[inline(always)]
    pub fn new(a: &'a [u8], b: &'a [u8]) -> Self {
        Self { a, b }
    }

    #[inline(always)]
    pub fn segments(&self) -> (Segment<'a>, Segment<'a>) {
        (Segment::classify(self.a), Segment::classify(self.b))
    }

    /// Copy both arrays out of the input buffer.
    pub fn to_owned_buf(&self) -> DualArrayBuf {
        DualArrayBuf {
            a: Bytes::copy_from_slice(self.a),
            b: Bytes::copy_from_slice(self.b),
        }
    }
}

/// Owned pair; cheap to clone and may share storage with the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DualArrayBuf {
    pub a: Bytes,
    pub b: Bytes,
}

impl DualArrayBuf {
    pub fn as_view(&self) -> DualArray<'_> {
        DualArray::new(&self.a, &self.b)
    }
}
