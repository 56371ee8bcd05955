use crate::segment::types::Segment;
use crate::telemetry::CostCounters;
use crate::utils::{put_padded, put_word};

/// Append `bytes` as a length word followed by word-padded content.
#[inline]
pub fn encode_bytes(out: &mut Vec<u8>, bytes: &[u8], cost: &mut CostCounters) {
    put_word(out, bytes.len());
    cost.add_word_written();
    let pad = put_padded(out, bytes);
    cost.add_content(bytes.len(), pad);
}

/// Append a tagged segment. `Empty` writes the zero length word and nothing else.
#[inline]
pub fn encode_segment(out: &mut Vec<u8>, segment: Segment<'_>, cost: &mut CostCounters) {
    match segment {
        Segment::Empty => {
            put_word(out, 0);
            cost.add_word_written();
            cost.add_skip();
        }
        Segment::NonEmpty(bytes) => encode_bytes(out, bytes, cost),
    }
}
