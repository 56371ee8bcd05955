//! Output sink for emitted payloads.
//!
//! The entry points hand every reencoded pair to an `EventSink`. What the
//! sink does with it (record it, log it, forward it) is outside the codec.

use tracing::info;

pub trait EventSink {
    fn emit(&mut self, payload: &[u8]);
}

impl<S: EventSink + ?Sized> EventSink for &mut S {
    fn emit(&mut self, payload: &[u8]) {
        (**self).emit(payload)
    }
}

/// Keeps every emitted payload, in order.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    events: Vec<Vec<u8>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Vec<u8>] {
        &self.events
    }

    pub fn last(&self) -> Option<&[u8]> {
        self.events.last().map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Remove and return the most recent payload.
    pub fn pop(&mut self) -> Option<Vec<u8>> {
        self.events.pop()
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, payload: &[u8]) {
        self.events.push(payload.to_vec());
    }
}

/// Publishes payloads as `tracing` events, hex-encoded.
#[derive(Debug, Clone, Copy)]
pub struct TracingSink {
    pub name: &'static str,
}

impl Default for TracingSink {
    fn default() -> Self {
        Self { name: "pair" }
    }
}

impl EventSink for TracingSink {
    fn emit(&mut self, payload: &[u8]) {
        info!(
            event = self.name,
            len = payload.len(),
            data = %hex::encode(payload),
            "event emitted"
        );
    }
}
