//! # Access Classifier
//!
//! One classification word per physical address, stored in a flat buffer
//! covering the whole 21-bit address space.
//!
//! ## Semantics
//!
//! - Reads accumulate: the stored word is OR'd with the access kind.
//! - Writes replace: a write to RAM discards whatever was known about the
//!   byte, since the old contents are gone.
//! - Writes to cartridge space are ignored; ROM cannot change.
//! - The I/O register window is never classified.
//! - Direction bits are never stored.

use crate::access::TraceAccess;
use crate::memory::{self, ADDRESS_SPACE};

/// Flat classification buffer indexed by physical address.
pub struct AccessMap {
    words: Vec<TraceAccess>,
}

/// Outcome of recording one access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recorded {
    /// The access was dropped (I/O window or ROM write).
    Ignored,
    /// The stored word did not change.
    Unchanged,
    /// The stored word changed from `previous` to `current`.
    Changed {
        previous: TraceAccess,
        current: TraceAccess,
    },
}

impl Recorded {
    pub fn is_changed(self) -> bool {
        matches!(self, Recorded::Changed { .. })
    }
}

impl AccessMap {
    /// Create a map with every address unclassified.
    pub fn new() -> Self {
        Self {
            words: vec![TraceAccess::NONE; ADDRESS_SPACE as usize],
        }
    }

    /// Stored classification for `address`.
    pub fn get(&self, address: u32) -> TraceAccess {
        self.words
            .get(address as usize)
            .copied()
            .unwrap_or(TraceAccess::NONE)
    }

    /// Stored classifications for a contiguous address range.
    pub fn slice(&self, range: std::ops::Range<u32>) -> &[TraceAccess] {
        &self.words[range.start as usize..range.end as usize]
    }

    /// Record an access reported by the execution core.
    ///
    /// `address` must be inside the 21-bit address space.
    pub fn record(&mut self, address: u32, kind: TraceAccess) -> Recorded {
        if memory::is_io(address) {
            return Recorded::Ignored;
        }

        let previous = self.get(address);
        let current = if kind.is_write() {
            if memory::is_rom(address) {
                return Recorded::Ignored;
            }
            kind.persistent()
        } else {
            previous | kind.persistent()
        };

        self.store(address, previous, current)
    }

    /// Replace the classification of `address` regardless of region.
    pub fn force(&mut self, address: u32, kind: TraceAccess) -> Recorded {
        let previous = self.get(address);
        self.store(address, previous, kind.persistent())
    }

    fn store(&mut self, address: u32, previous: TraceAccess, current: TraceAccess) -> Recorded {
        if previous == current {
            return Recorded::Unchanged;
        }

        self.words[address as usize] = current;
        Recorded::Changed { previous, current }
    }

    /// Forget every classification at or above `address`.
    pub fn clear_from(&mut self, address: u32) {
        let start = (address as usize).min(self.words.len());
        self.words[start..].fill(TraceAccess::NONE);
    }
}

impl Default for AccessMap {
    fn default() -> Self {
        Self::new()
    }
}
