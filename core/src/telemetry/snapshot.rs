//! telemetry/snapshot.rs
//!
//! Immutable cost snapshot.
//!
//! Design notes:
//! - Mirrors `CostCounters` with a couple of derived figures.
//! - Serializable so bindings and logs can carry it as JSON.

use serde::{Deserialize, Serialize};

use crate::constants::WORD_LEN;
use crate::telemetry::counters::CostCounters;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostSnapshot {
    pub words_read: u64,
    pub words_written: u64,
    pub bytes_viewed: u64,
    pub bytes_copied: u64,
    pub padding_bytes: u64,
    pub segments_skipped: u64,
    /// Share of emitted content bytes that are padding.
    pub padding_ratio: f64,
}

impl CostSnapshot {
    pub fn from_counters(counters: &CostCounters) -> Self {
        let emitted = counters.bytes_copied + counters.padding_bytes;
        let padding_ratio = if emitted > 0 {
            counters.padding_bytes as f64 / emitted as f64
        } else {
            0.0
        };

        Self {
            words_read: counters.words_read,
            words_written: counters.words_written,
            bytes_viewed: counters.bytes_viewed,
            bytes_copied: counters.bytes_copied,
            padding_bytes: counters.padding_bytes,
            segments_skipped: counters.segments_skipped,
            padding_ratio,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Holds for the snapshot of a single call: each of the two segments
    /// pads by less than one word.
    pub fn sanity_check(&self) -> bool {
        (0.0..=1.0).contains(&self.padding_ratio)
            && self.padding_bytes <= 2 * (WORD_LEN as u64 - 1)
    }
}

impl From<&CostCounters> for CostSnapshot {
    fn from(counters: &CostCounters) -> Self {
        CostSnapshot::from_counters(counters)
    }
}

impl From<CostCounters> for CostSnapshot {
    fn from(counters: CostCounters) -> Self {
        CostSnapshot::from_counters(&counters)
    }
}
