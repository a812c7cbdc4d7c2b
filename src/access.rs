//! # Access Classification Flags
//!
//! This module defines the 32-bit classification word the execution core
//! reports for every memory access, and the persistent per-address record
//! derived from it.
//!
//! The word is split into four categories:
//!
//! - **Access type** (bits 0-6): how the byte was fetched (instruction, operand, data, stack)
//! - **Argument type** (bits 10-12): what role an operand played (vector, branch target, offset)
//! - **Data type** (bits 20-22): what the data was used for (tiles, sprites, return addresses)
//! - **Direction** (bits 30-31): read or write, only meaningful for the access in flight

use bitflags::bitflags;

bitflags! {
    /// Classification word for a single memory access or address.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimon_trace::TraceAccess;
    ///
    /// let kind = TraceAccess::INSTRUCTION | TraceAccess::READ;
    /// assert_eq!(kind.persistent(), TraceAccess::INSTRUCTION);
    /// assert!(kind.is_read());
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TraceAccess: u32 {
        const WORD_LO = 1 << 0;
        const WORD_HI = 1 << 1;
        const DATA = 1 << 2;
        const INSTRUCTION = 1 << 3;
        const EX_INST = 1 << 4;
        const IMMEDIATE = 1 << 5;
        const STACK = 1 << 6;

        const VECTOR = 1 << 10;
        const BRANCH_TARGET = 1 << 11;
        const OFFSET = 1 << 12;

        const TILE_DATA = 1 << 20;
        const SPRITE_DATA = 1 << 21;
        const RETURN_ADDRESS = 1 << 22;

        const READ = 1 << 30;
        const WRITE = 1 << 31;

        /// Transient direction hints, never stored.
        const DIRECTION = Self::READ.bits() | Self::WRITE.bits();
    }
}

impl TraceAccess {
    /// Unclassified byte.
    pub const NONE: TraceAccess = TraceAccess::empty();

    /// Build a classification word from the raw value reported by the core.
    ///
    /// Bits with no named flag are kept so that a core reporting extra
    /// categories still round-trips through the tracer.
    pub fn from_raw(raw: u32) -> Self {
        TraceAccess::from_bits_retain(raw)
    }

    /// The classification with direction bits masked out.
    pub fn persistent(self) -> Self {
        self.difference(TraceAccess::DIRECTION)
    }

    /// True if this access is a write.
    pub fn is_write(self) -> bool {
        self.contains(TraceAccess::WRITE)
    }

    /// True if this access is a read (anything that is not a write).
    pub fn is_read(self) -> bool {
        !self.is_write()
    }
}

impl Default for TraceAccess {
    fn default() -> Self {
        TraceAccess::NONE
    }
}

/// Manual classifications an operator can force onto an address from the
/// debugger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceOverride {
    /// Forget everything known about the address.
    Unknown,
    /// Treat the address as the start of an instruction.
    Code,
    /// Treat the address as a data byte.
    Data,
    /// Treat the address as the low byte of a data word.
    Word,
}

impl TraceOverride {
    /// The classification word this override writes.
    pub fn access(self) -> TraceAccess {
        match self {
            TraceOverride::Unknown => TraceAccess::NONE,
            TraceOverride::Code => TraceAccess::INSTRUCTION,
            TraceOverride::Data => TraceAccess::DATA,
            TraceOverride::Word => TraceAccess::DATA | TraceAccess::WORD_LO,
        }
    }
}

impl From<TraceOverride> for TraceAccess {
    fn from(value: TraceOverride) -> Self {
        value.access()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_positions_match_core() {
        assert_eq!(TraceAccess::WORD_LO.bits(), 0x0000_0001);
        assert_eq!(TraceAccess::INSTRUCTION.bits(), 0x0000_0008);
        assert_eq!(TraceAccess::BRANCH_TARGET.bits(), 0x0000_0800);
        assert_eq!(TraceAccess::RETURN_ADDRESS.bits(), 0x0040_0000);
        assert_eq!(TraceAccess::READ.bits(), 0x4000_0000);
        assert_eq!(TraceAccess::WRITE.bits(), 0x8000_0000);
    }

    #[test]
    fn test_persistent_drops_direction() {
        let kind = TraceAccess::DATA | TraceAccess::WORD_LO | TraceAccess::WRITE;
        assert_eq!(kind.persistent(), TraceAccess::DATA | TraceAccess::WORD_LO);
        assert!(kind.is_write());
        assert!(!kind.is_read());
    }

    #[test]
    fn test_from_raw_keeps_unknown_bits() {
        let kind = TraceAccess::from_raw(0x0000_8008);
        assert!(kind.contains(TraceAccess::INSTRUCTION));
        assert_eq!(kind.bits(), 0x0000_8008);
    }

    #[test]
    fn test_override_words() {
        assert_eq!(TraceOverride::Unknown.access(), TraceAccess::NONE);
        assert_eq!(
            TraceAccess::from(TraceOverride::Word),
            TraceAccess::DATA | TraceAccess::WORD_LO
        );
    }
}
