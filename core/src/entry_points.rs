//! Caller-facing operations.
//!
//! Each function differs only in how its input arrives and in how much work
//! it does for empty arrays. All of them emit the canonical encoding of the
//! same logical pair, so their payloads are interchangeable.
//!
//! Every call returns the `CostCounters` of that call alone.

use tracing::debug;

use crate::dual::{
    decode_metered, decode_optimized_metered, decode_tagged_metered, reencode_metered,
    reencode_segments,
};
use crate::segment::Segment;
use crate::sink::EventSink;
use crate::telemetry::CostCounters;
use crate::types::AbiError;

/// Names used in logs and bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPoint {
    FromPacked,
    FromPackedOptimized,
    FromSeparate,
    FromPackedWithEmptySkip,
    FromSeparateWithEmptySkip,
}

impl EntryPoint {
    pub const ALL: [EntryPoint; 5] = [
        EntryPoint::FromPacked,
        EntryPoint::FromPackedOptimized,
        EntryPoint::FromSeparate,
        EntryPoint::FromPackedWithEmptySkip,
        EntryPoint::FromSeparateWithEmptySkip,
    ];

    pub fn name(self) -> &'static str {
        match self {
            EntryPoint::FromPacked => "from_packed",
            EntryPoint::FromPackedOptimized => "from_packed_optimized",
            EntryPoint::FromSeparate => "from_separate",
            EntryPoint::FromPackedWithEmptySkip => "from_packed_with_empty_skip",
            EntryPoint::FromSeparateWithEmptySkip => "from_separate_with_empty_skip",
        }
    }
}

/// General path: decode the packed buffer, then reencode.
pub fn from_packed<S: EventSink + ?Sized>(
    buf: &[u8],
    sink: &mut S,
) -> Result<CostCounters, AbiError> {
    let mut cost = CostCounters::default();
    let pair = decode_metered(buf, &mut cost)?;
    let payload = reencode_metered(pair.a, pair.b, &mut cost);
    publish(EntryPoint::FromPacked, sink, &payload, &cost);
    Ok(cost)
}

/// Same result as [`from_packed`] for canonically laid out buffers, one read cheaper.
pub fn from_packed_optimized<S: EventSink + ?Sized>(
    buf: &[u8],
    sink: &mut S,
) -> Result<CostCounters, AbiError> {
    let mut cost = CostCounters::default();
    let pair = decode_optimized_metered(buf, &mut cost)?;
    let payload = reencode_metered(pair.a, pair.b, &mut cost);
    publish(EntryPoint::FromPackedOptimized, sink, &payload, &cost);
    Ok(cost)
}

/// Baseline: the arrays arrive already split.
pub fn from_separate<S: EventSink + ?Sized>(a: &[u8], b: &[u8], sink: &mut S) -> CostCounters {
    let mut cost = CostCounters::default();
    let payload = reencode_metered(a, b, &mut cost);
    publish(EntryPoint::FromSeparate, sink, &payload, &cost);
    cost
}

/// Packed input with empty short-circuits: an empty buffer is never read,
/// and a zero length word ends work on that segment.
pub fn from_packed_with_empty_skip<S: EventSink + ?Sized>(
    buf: &[u8],
    sink: &mut S,
) -> Result<CostCounters, AbiError> {
    let mut cost = CostCounters::default();
    let (a, b) = decode_tagged_metered(buf, &mut cost)?;
    let payload = reencode_segments(a, b, &mut cost);
    publish(EntryPoint::FromPackedWithEmptySkip, sink, &payload, &cost);
    Ok(cost)
}

/// Split input with empty short-circuits: empty arrays skip all padding work.
pub fn from_separate_with_empty_skip<S: EventSink + ?Sized>(
    a: &[u8],
    b: &[u8],
    sink: &mut S,
) -> CostCounters {
    let mut cost = CostCounters::default();
    let payload = reencode_segments(Segment::classify(a), Segment::classify(b), &mut cost);
    publish(EntryPoint::FromSeparateWithEmptySkip, sink, &payload, &cost);
    cost
}

#[inline]
fn publish<S: EventSink + ?Sized>(
    entry: EntryPoint,
    sink: &mut S,
    payload: &[u8],
    cost: &CostCounters,
) {
    debug!(
        entry = entry.name(),
        payload_len = payload.len(),
        words_read = cost.words_read,
        words_written = cost.words_written,
        skipped = cost.segments_skipped,
        "emitting pair"
    );
    sink.emit(payload);
}
