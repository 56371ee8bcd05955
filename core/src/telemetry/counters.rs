//! telemetry/counters.rs
//! Mutable counters collected while decoding and reencoding.
//!
//! Summary: each entry point owns one `CostCounters` for the duration of a
//! call and returns it. Converted into an immutable `CostSnapshot` on demand.
use bincode::{Decode, Encode};

/// Deterministic work counters for one call.
#[derive(Default, Clone, Copy, Debug, Encode, Decode, PartialEq, Eq)]
pub struct CostCounters {
    /// Offset and length words read from the input.
    pub words_read: u64,
    /// Offset and length words written to the output.
    pub words_written: u64,
    /// Content bytes exposed as zero-copy views.
    pub bytes_viewed: u64,
    /// Content bytes copied into the output.
    pub bytes_copied: u64,
    /// Zero bytes written to align content.
    pub padding_bytes: u64,
    /// Segments handled on the empty fast path.
    pub segments_skipped: u64,
}

impl CostCounters {
    #[inline(always)]
    pub fn add_word_read(&mut self) {
        self.words_read += 1;
    }

    #[inline(always)]
    pub fn add_view(&mut self, len: usize) {
        self.bytes_viewed += len as u64;
    }

    #[inline(always)]
    pub fn add_skip(&mut self) {
        self.segments_skipped += 1;
    }

    /// Record one written word.
    #[inline(always)]
    pub fn add_word_written(&mut self) {
        self.words_written += 1;
    }

    /// Record `len` content bytes followed by `pad` padding bytes.
    #[inline(always)]
    pub fn add_content(&mut self, len: usize, pad: usize) {
        self.bytes_copied += len as u64;
        self.padding_bytes += pad as u64;
    }

    /// Total words touched in either direction.
    pub fn total_words(&self) -> u64 {
        self.words_read + self.words_written
    }

    pub fn merge(&mut self, other: &CostCounters) {
        self.words_read += other.words_read;
        self.words_written += other.words_written;
        self.bytes_viewed += other.bytes_viewed;
        self.bytes_copied += other.bytes_copied;
        self.padding_bytes += other.padding_bytes;
        self.segments_skipped += other.segments_skipped;
    }
}

impl std::ops::AddAssign for CostCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
