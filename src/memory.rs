//! # Memory Image
//!
//! This module holds the live memory buffers the execution core reads and
//! writes, and the fixed address map of the machine:
//!
//! - `0x000000-0x000FFF`: BIOS (4KB, fixed)
//! - `0x001000-0x001FFF`: RAM (4KB)
//! - `0x002000-0x0020FF`: I/O registers (never traced)
//! - `0x002100-0x1FFFFF`: cartridge ROM, paged in 32KB banks
//!
//! ## Design Principles
//!
//! - The tracer never copies these buffers; banks render straight out of a
//!   borrowed slice, so the core may keep mutating the image between renders.
//! - No bus errors: reads of unmapped space return 0, writes to ROM are ignored.

use std::ops::Range;

use crate::TracerError;

/// Size of the full physical address space (21 bits).
pub const ADDRESS_SPACE: u32 = 0x20_0000;

/// Mask applied to addresses reported by the core.
pub const ADDRESS_MASK: u32 = ADDRESS_SPACE - 1;

/// First BIOS address.
pub const BIOS_START: u32 = 0x0000;

/// Size of the BIOS.
pub const BIOS_SIZE: usize = 0x1000;

/// First RAM address.
pub const RAM_START: u32 = 0x1000;

/// Size of the internal RAM.
pub const RAM_SIZE: usize = 0x1000;

/// First address of the hardware register window.
pub const IO_START: u32 = 0x2000;

/// Last address of the hardware register window.
pub const IO_END: u32 = 0x20FF;

/// First cartridge address visible to the CPU.
pub const CARTRIDGE_START: u32 = 0x2100;

/// Size of a ROM page selected through the bank registers.
pub const PAGE_SIZE: u32 = 0x8000;

/// Mask selecting the offset within a ROM page.
pub const PAGE_OFFSET_MASK: u32 = PAGE_SIZE - 1;

/// Header magic of raw cartridge dumps that start at [`CARTRIDGE_START`].
pub const RAW_DUMP_MAGIC: [u8; 2] = *b"PM";

/// True if `address` falls in the hardware register window.
pub fn is_io(address: u32) -> bool {
    (IO_START..=IO_END).contains(&address)
}

/// True if `address` falls in cartridge space, where writes are ignored.
pub fn is_rom(address: u32) -> bool {
    address >= CARTRIDGE_START
}

/// Translate a 16-bit logical program counter into a physical address.
///
/// Logical addresses with bit 15 set are served from the page selected by the
/// code bank register `cb`.
///
/// # Examples
///
/// ```
/// use minimon_trace::memory::physical_pc;
///
/// assert_eq!(physical_pc(0x1234, 3), 0x1234);
/// assert_eq!(physical_pc(0x8010, 3), 0x18010);
/// ```
pub fn physical_pc(pc: u16, cb: u8) -> u32 {
    let pc = pc as u32;

    if pc & PAGE_SIZE != 0 {
        ((cb as u32) << 15) | (pc & PAGE_OFFSET_MASK)
    } else {
        pc
    }
}

/// Translate a physical address into the logical address the CPU would use
/// to reach it with the owning page selected.
pub fn logical_address(address: u32) -> u16 {
    if address >= PAGE_SIZE {
        (PAGE_SIZE | (address & PAGE_OFFSET_MASK)) as u16
    } else {
        address as u16
    }
}

/// Byte-level access to the machine's physical address space.
///
/// Mirrors the bus the execution core sees: reads and writes
/// always succeed, unmapped reads return garbage (here 0), writes to
/// read-only regions are dropped.
pub trait MemoryBus {
    /// Reads a byte from the specified physical address.
    fn read(&self, address: u32) -> u8;

    /// Writes a byte to the specified physical address.
    fn write(&mut self, address: u32, value: u8);
}

/// The live memory buffers backing every bank.
///
/// # Examples
///
/// ```
/// use minimon_trace::{MemoryBus, MemoryImage};
///
/// let mut memory = MemoryImage::new();
/// memory.write(0x1000, 0x42);
/// assert_eq!(memory.read(0x1000), 0x42);
///
/// // Cartridge space is read-only to the CPU
/// memory.write(0x4000, 0x42);
/// assert_eq!(memory.read(0x4000), 0x00);
/// ```
pub struct MemoryImage {
    bios: Box<[u8; BIOS_SIZE]>,
    ram: Box<[u8; RAM_SIZE]>,
    /// Absolute-addressed cartridge buffer; the first 0x2100 bytes are shadowed.
    cartridge: Vec<u8>,
    /// One past the last cartridge address holding loaded data.
    cartridge_end: u32,
}

impl MemoryImage {
    /// Creates an empty memory image with no cartridge inserted.
    pub fn new() -> Self {
        Self {
            bios: Box::new([0; BIOS_SIZE]),
            ram: Box::new([0; RAM_SIZE]),
            cartridge: vec![0; ADDRESS_SPACE as usize],
            cartridge_end: 0,
        }
    }

    /// Replaces the BIOS contents.
    ///
    /// Images shorter than 4KB leave the remaining bytes zeroed.
    pub fn load_bios(&mut self, bytes: &[u8]) -> Result<(), TracerError> {
        if bytes.len() > BIOS_SIZE {
            return Err(TracerError::BiosTooLarge(bytes.len()));
        }

        self.bios.fill(0);
        self.bios[..bytes.len()].copy_from_slice(bytes);
        Ok(())
    }

    /// Inserts a cartridge image.
    ///
    /// Images that begin with `"PM"` are raw dumps of cartridge space and are
    /// placed at [`CARTRIDGE_START`]; anything else is a full image placed at
    /// address 0. Data past the 2MB address space wraps around.
    pub fn load_cartridge(&mut self, bytes: &[u8]) -> Result<(), TracerError> {
        if bytes.is_empty() {
            return Err(TracerError::CartridgeEmpty);
        }

        let offset = if bytes.starts_with(&RAW_DUMP_MAGIC) {
            CARTRIDGE_START as usize
        } else {
            0
        };

        self.cartridge.fill(0);
        for (i, &byte) in bytes.iter().enumerate() {
            self.cartridge[(i + offset) & ADDRESS_MASK as usize] = byte;
        }

        self.cartridge_end = (offset + bytes.len()).min(ADDRESS_SPACE as usize) as u32;
        log::debug!(
            "cartridge loaded: {} bytes at offset 0x{:04X}, end 0x{:06X}",
            bytes.len(),
            offset,
            self.cartridge_end
        );

        Ok(())
    }

    /// Removes the cartridge.
    pub fn eject(&mut self) {
        self.cartridge.fill(0);
        self.cartridge_end = 0;
    }

    /// One past the last address covered by the inserted cartridge, or 0.
    pub fn cartridge_end(&self) -> u32 {
        self.cartridge_end
    }

    /// True if a cartridge is inserted.
    pub fn has_cartridge(&self) -> bool {
        self.cartridge_end > CARTRIDGE_START
    }

    /// Borrow the bytes backing a physical address range.
    ///
    /// The range must lie entirely within one region (BIOS, RAM or cartridge);
    /// bank ranges always do.
    pub fn slice(&self, range: Range<u32>) -> &[u8] {
        let start = range.start as usize;
        let end = range.end as usize;

        if range.end <= RAM_START {
            &self.bios[start..end]
        } else if range.end <= IO_START {
            let base = RAM_START as usize;
            &self.ram[start - base..end - base]
        } else {
            &self.cartridge[start..end]
        }
    }
}

impl Default for MemoryImage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for MemoryImage {
    fn read(&self, address: u32) -> u8 {
        let address = address & ADDRESS_MASK;

        if address < RAM_START {
            self.bios[address as usize]
        } else if address < IO_START {
            self.ram[(address - RAM_START) as usize]
        } else if is_io(address) {
            0
        } else {
            self.cartridge[address as usize]
        }
    }

    fn write(&mut self, address: u32, value: u8) {
        let address = address & ADDRESS_MASK;

        // BIOS, registers and cartridge are read-only from the CPU side
        if (RAM_START..IO_START).contains(&address) {
            self.ram[(address - RAM_START) as usize] = value;
        }
    }
}
