//! abi-split-core
//!
//! Decoder and canonical re-encoder for one parameter that packs two
//! dynamic byte arrays behind a two-offset header.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;
pub mod utils;

// Wire layers, leaf first
pub mod segment;
pub mod headers;
pub mod dual;

// Surfaces
pub mod entry_points;
pub mod sink;
pub mod telemetry;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::{EMPTY_PAIR_LEN, HEADER_LEN, WORD_LEN};
    pub use crate::dual::{
        decode, decode_optimized, decode_shared, reencode, DualArray, DualArrayBuf,
    };
    pub use crate::entry_points::{
        from_packed, from_packed_optimized, from_packed_with_empty_skip, from_separate,
        from_separate_with_empty_skip, EntryPoint,
    };
    pub use crate::segment::Segment;
    pub use crate::sink::{EventSink, MemorySink, TracingSink};
    pub use crate::telemetry::{CostCounters, CostSnapshot};
    pub use crate::types::{AbiError, ErrorKind};
}
