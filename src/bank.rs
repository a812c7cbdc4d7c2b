//! # Bank Registry
//!
//! Partitions the traced address space into named, non-overlapping banks:
//! one for the BIOS, one for RAM, and one per 32KB page of inserted cartridge.
//!
//! Each bank carries its own render cache. A bank is `dirty` when the cached
//! rows no longer reflect the classification of its bytes, and `pending` when
//! subscribers have not yet been told it changed. The set of banks only
//! changes in [`BankRegistry::reset`].

use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::disassembler::Row;
use crate::memory::{self, CARTRIDGE_START, IO_START, PAGE_OFFSET_MASK, PAGE_SIZE, RAM_START};
use crate::TracerError;

/// Identifier of a bank, spelled `bios`, `ram` or `rom:<n>`.
///
/// # Examples
///
/// ```
/// use minimon_trace::BankId;
///
/// let id: BankId = "rom:3".parse().unwrap();
/// assert_eq!(id, BankId::Rom(3));
/// assert_eq!(id.to_string(), "rom:3");
/// assert_eq!(BankId::for_address(0x18010), Some(BankId::Rom(3)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BankId {
    Bios,
    Ram,
    Rom(u8),
}

impl BankId {
    /// The bank that owns `address` in a fully populated address space.
    ///
    /// Returns `None` for the I/O register window and for addresses past the
    /// 21-bit address space. Whether a ROM bank actually exists depends on the
    /// inserted cartridge; see [`BankRegistry::bank_for`].
    pub fn for_address(address: u32) -> Option<BankId> {
        if address < RAM_START {
            Some(BankId::Bios)
        } else if address < IO_START {
            Some(BankId::Ram)
        } else if memory::is_io(address) || address >= memory::ADDRESS_SPACE {
            None
        } else {
            Some(BankId::Rom((address >> 15) as u8))
        }
    }
}

impl fmt::Display for BankId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BankId::Bios => write!(f, "bios"),
            BankId::Ram => write!(f, "ram"),
            BankId::Rom(n) => write!(f, "rom:{}", n),
        }
    }
}

impl FromStr for BankId {
    type Err = TracerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bios" => Ok(BankId::Bios),
            "ram" => Ok(BankId::Ram),
            _ => s
                .strip_prefix("rom:")
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|&n| (n as u32) < memory::ADDRESS_SPACE / PAGE_SIZE)
                .map(BankId::Rom)
                .ok_or_else(|| TracerError::UnknownBank(s.to_string())),
        }
    }
}

/// Description of a bank handed to page selectors and change subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BankSummary {
    pub id: BankId,
    /// Human-readable name, e.g. `ROM Bank 1 (008000~00FFFF)`.
    pub name: String,
    /// First address of the bank.
    pub start: u32,
    /// One past the last address backed by data.
    pub end: u32,
}

/// A named address range with its render cache.
#[derive(Debug)]
pub struct Bank {
    id: BankId,
    name: String,
    range: Range<u32>,
    pub(crate) dirty: bool,
    pub(crate) pending: bool,
    pub(crate) rows: Option<Vec<Row>>,
}

impl Bank {
    fn new(id: BankId, name: String, range: Range<u32>) -> Self {
        Self {
            id,
            name,
            range,
            dirty: true,
            pending: true,
            rows: None,
        }
    }

    pub fn id(&self) -> BankId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Address range backed by data; the decoder walks exactly these bytes.
    pub fn range(&self) -> Range<u32> {
        self.range.clone()
    }

    /// True if `address` lies inside this bank.
    pub fn contains(&self, address: u32) -> bool {
        self.range.contains(&address)
    }

    /// True if the cached rows are stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// True if a change notification is waiting for the next update pass.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Cached rows from the last render, if any.
    pub fn rows(&self) -> Option<&[Row]> {
        self.rows.as_deref()
    }

    pub fn summary(&self) -> BankSummary {
        BankSummary {
            id: self.id,
            name: self.name.clone(),
            start: self.range.start,
            end: self.range.end,
        }
    }

    /// Flag the bank for re-render and notification.
    pub(crate) fn invalidate(&mut self) {
        self.dirty = true;
        self.pending = true;
    }
}

/// Ordered set of banks: BIOS, RAM, then ROM pages in address order.
#[derive(Debug)]
pub struct BankRegistry {
    banks: Vec<Bank>,
}

impl BankRegistry {
    /// Create a registry with the fixed BIOS and RAM banks and no cartridge.
    pub fn new() -> Self {
        let mut registry = Self { banks: Vec::new() };
        registry.reset(0);
        registry
    }

    /// Rebuild the ROM banks to cover cartridge space up to `cartridge_end`
    /// and invalidate every bank.
    ///
    /// ROM bank `n` spans the 32KB page `n << 15`, starting no lower than the
    /// first cartridge address; the last bank is clipped to the loaded data.
    pub fn reset(&mut self, cartridge_end: u32) {
        self.banks.clear();
        self.banks.push(Bank::new(
            BankId::Bios,
            "System BIOS (0000000h~0000FFFh)".to_string(),
            memory::BIOS_START..RAM_START,
        ));
        self.banks.push(Bank::new(
            BankId::Ram,
            "System RAM (0001000h~0001FFFh)".to_string(),
            RAM_START..IO_START,
        ));

        let cartridge_end = cartridge_end.min(memory::ADDRESS_SPACE);
        let mut address = CARTRIDGE_START;
        while address < cartridge_end {
            let page = address >> 15;
            let page_end = address | PAGE_OFFSET_MASK;
            let end = (page_end + 1).min(cartridge_end);

            self.banks.push(Bank::new(
                BankId::Rom(page as u8),
                format!("ROM Bank {} ({:06X}~{:06X})", page, address, page_end),
                address..end,
            ));

            address = page_end + 1;
        }

        log::debug!("bank registry reset: {} banks", self.banks.len());
    }

    fn index_of(&self, id: BankId) -> Option<usize> {
        let index = match id {
            BankId::Bios => 0,
            BankId::Ram => 1,
            BankId::Rom(n) => 2 + n as usize,
        };

        (index < self.banks.len()).then_some(index)
    }

    /// Look up a bank by id.
    pub fn get(&self, id: BankId) -> Option<&Bank> {
        self.index_of(id).map(|index| &self.banks[index])
    }

    /// Look up a bank by id for mutation.
    pub fn get_mut(&mut self, id: BankId) -> Option<&mut Bank> {
        self.index_of(id).map(move |index| &mut self.banks[index])
    }

    /// The bank containing `address`, if any bank covers it.
    pub fn bank_for(&self, address: u32) -> Option<BankId> {
        let id = BankId::for_address(address)?;
        self.get(id)
            .filter(|bank| bank.contains(address))
            .map(|bank| bank.id)
    }

    /// All banks in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Bank> {
        self.banks.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bank> {
        self.banks.iter_mut()
    }

    /// Number of banks.
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Always false: the BIOS and RAM banks are permanent.
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }

    /// Bank ids and display names, for a page selector.
    pub fn pages(&self) -> Vec<(BankId, String)> {
        self.banks
            .iter()
            .map(|bank| (bank.id, bank.name.clone()))
            .collect()
    }
}

impl Default for BankRegistry {
    fn default() -> Self {
        Self::new()
    }
}
