//! # Tracer
//!
//! Ties the pieces together: the execution core reports every memory access
//! through [`Tracer::classify`], the debugger pulls listings through
//! [`Tracer::render`], and [`Tracer::update`] is called once per execution
//! tick to tell subscribers which banks changed.
//!
//! ```
//! use minimon_trace::{BankId, TraceAccess, Tracer};
//!
//! let mut tracer = Tracer::new();
//! tracer.memory_mut().load_bios(&[0xB0, 0x12, 0xF8]).unwrap();
//!
//! tracer.classify(0x0000, TraceAccess::INSTRUCTION | TraceAccess::READ, 0xB0);
//! let rows = tracer.render(BankId::Bios).unwrap();
//!
//! assert_eq!(rows[0].mnemonic, "LD");
//! assert_eq!(rows[1].mnemonic, "RET");
//! ```

use crate::access::{TraceAccess, TraceOverride};
use crate::bank::{Bank, BankId, BankRegistry, BankSummary};
use crate::classifier::{AccessMap, Recorded};
use crate::config::TracerConfig;
use crate::disassembler::{render_bank, BankView, Row};
use crate::memory::{self, MemoryImage, ADDRESS_SPACE, RAM_START};
use crate::notify::{Notifier, SubscriptionId};
use crate::symbols::SymbolTable;
use crate::TracerError;

/// Code/data tracer for one emulation session.
pub struct Tracer {
    config: TracerConfig,
    memory: MemoryImage,
    access: AccessMap,
    banks: BankRegistry,
    symbols: SymbolTable,
    notifier: Notifier,
}

impl Tracer {
    /// Create a tracer with the default configuration and no cartridge.
    pub fn new() -> Self {
        Self::build(TracerConfig::default())
    }

    /// Create a tracer with a custom configuration.
    pub fn with_config(config: TracerConfig) -> Result<Self, TracerError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: TracerConfig) -> Self {
        let symbols = SymbolTable::with_prefix(config.label_prefix.clone());

        Self {
            config,
            memory: MemoryImage::new(),
            access: AccessMap::new(),
            banks: BankRegistry::new(),
            symbols,
            notifier: Notifier::new(),
        }
    }

    pub fn config(&self) -> &TracerConfig {
        &self.config
    }

    /// The memory the banks are rendered from.
    pub fn memory(&self) -> &MemoryImage {
        &self.memory
    }

    /// Mutable access for the execution core.
    ///
    /// Changing bytes here does not invalidate any listing by itself; the
    /// core reports its writes through [`Tracer::classify`].
    pub fn memory_mut(&mut self) -> &mut MemoryImage {
        &mut self.memory
    }

    pub fn banks(&self) -> &BankRegistry {
        &self.banks
    }

    pub fn bank(&self, id: BankId) -> Option<&Bank> {
        self.banks.get(id)
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Stored classification of `address`.
    pub fn trace_at(&self, address: u32) -> TraceAccess {
        self.access.get(address)
    }

    /// Record one memory access reported by the execution core.
    ///
    /// `value` is the byte transferred; classification depends only on the
    /// address and the access kind.
    pub fn classify(&mut self, address: u32, kind: TraceAccess, _value: u8) {
        debug_assert!(
            address < ADDRESS_SPACE,
            "access outside the address space: 0x{:X}",
            address
        );
        if address >= ADDRESS_SPACE {
            log::error!("dropping access outside the address space: 0x{:X}", address);
            return;
        }

        let recorded = self.access.record(address, kind);
        if recorded == Recorded::Ignored {
            return;
        }

        if kind.contains(TraceAccess::BRANCH_TARGET) {
            self.symbols.insert(address);
        }

        if recorded.is_changed() {
            self.invalidate(address);
        }
    }

    /// Manually overwrite the classification of `address` and notify the
    /// owning bank's subscribers immediately.
    ///
    /// Unlike [`Tracer::classify`] this also applies to cartridge space.
    /// Returns false if no bank covers `address`.
    pub fn force_trace(&mut self, address: u32, kind: TraceAccess) -> bool {
        let id = match self.banks.bank_for(address) {
            Some(id) => id,
            None => {
                log::warn!("ignoring forced trace at unbanked address 0x{:06X}", address);
                return false;
            }
        };

        self.access.force(address, kind);
        if kind.contains(TraceAccess::BRANCH_TARGET) {
            self.symbols.insert(address);
        }
        log::trace!("forced trace at 0x{:06X}: {:?}", address, kind.persistent());

        if let Some(bank) = self.banks.get_mut(id) {
            bank.invalidate();
            bank.pending = false;
            self.notifier.publish(&bank.summary());
        }

        true
    }

    /// Force an address to be shown as code, data or unknown.
    pub fn override_trace(&mut self, address: u32, kind: TraceOverride) -> bool {
        self.force_trace(address, kind.access())
    }

    fn invalidate(&mut self, address: u32) {
        match self.banks.bank_for(address).and_then(|id| self.banks.get_mut(id)) {
            Some(bank) => bank.invalidate(),
            None => log::warn!("classified address 0x{:06X} is not covered by a bank", address),
        }
    }

    /// Notify subscribers of every bank that changed since the last update.
    ///
    /// Banks are visited in display order. Returns the number of callbacks
    /// invoked.
    pub fn update(&mut self) -> usize {
        self.update_with(|_| {})
    }

    /// [`Tracer::update`], also handing each changed bank to `each` before
    /// its subscribers run.
    pub fn update_with<F>(&mut self, mut each: F) -> usize
    where
        F: FnMut(&BankSummary),
    {
        let mut delivered = 0;

        for bank in self.banks.iter_mut() {
            if bank.pending {
                bank.pending = false;

                let summary = bank.summary();
                each(&summary);
                delivered += self.notifier.publish(&summary);
            }
        }

        delivered
    }

    /// Rows for a bank, re-rendered only if its classification changed since
    /// the last call.
    pub fn render(&mut self, id: BankId) -> Result<&[Row], TracerError> {
        let bank = self
            .banks
            .get_mut(id)
            .ok_or_else(|| TracerError::UnknownBank(id.to_string()))?;

        if bank.dirty || bank.rows.is_none() {
            let range = bank.range();
            let view = BankView {
                start: range.start,
                bytes: self.memory.slice(range.clone()),
                trace: self.access.slice(range),
            };

            let rows = render_bank(view, &self.symbols, &self.config);
            log::trace!("rendered {}: {} rows", id, rows.len());

            bank.rows = Some(rows);
            bank.dirty = false;
        }

        Ok(bank.rows.as_deref().unwrap_or(&[]))
    }

    /// [`Tracer::render`] for a bank id spelled as a string.
    pub fn render_named(&mut self, name: &str) -> Result<&[Row], TracerError> {
        let id = name.parse::<BankId>()?;
        self.render(id)
    }

    /// Bank ids and display names, in display order.
    pub fn pages(&self) -> Vec<(BankId, String)> {
        self.banks.pages()
    }

    /// The bank containing `address`, if any.
    pub fn bank_for(&self, address: u32) -> Option<BankId> {
        self.banks.bank_for(address)
    }

    /// Index of the row of `bank` that covers `address`.
    pub fn row_index_for(&mut self, bank: BankId, address: u32) -> Result<Option<usize>, TracerError> {
        let rows = self.render(bank)?;
        let index = rows.partition_point(|row| row.end() <= address);

        Ok(rows.get(index).filter(|row| row.contains(address)).map(|_| index))
    }

    /// Row index of the instruction at `pc` with code bank `cb` selected.
    pub fn row_index_for_pc(&mut self, pc: u16, cb: u8) -> Result<Option<(BankId, usize)>, TracerError> {
        let address = memory::physical_pc(pc, cb);
        let bank = match self.bank_for(address) {
            Some(bank) => bank,
            None => return Ok(None),
        };

        Ok(self.row_index_for(bank, address)?.map(|index| (bank, index)))
    }

    pub fn label_for(&self, address: u32) -> Option<&str> {
        self.symbols.lookup(address)
    }

    /// Register `callback` to be told when `bank` changes.
    pub fn subscribe<F>(&mut self, bank: BankId, callback: F) -> SubscriptionId
    where
        F: FnMut(&BankSummary) + 'static,
    {
        self.notifier.subscribe(bank, callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    /// Rebuild the banks for the inserted cartridge.
    ///
    /// Classification and labels from RAM upward are forgotten; the BIOS
    /// keeps what it has learned. Every bank is invalidated.
    pub fn reset(&mut self) {
        self.access.clear_from(RAM_START);
        self.symbols.discard_from(RAM_START);
        self.banks.reset(self.memory.cartridge_end());

        log::debug!(
            "tracer reset: {} banks, {} labels kept",
            self.banks.len(),
            self.symbols.len()
        );
    }

    /// Insert a cartridge image and reset.
    pub fn load_cartridge(&mut self, bytes: &[u8]) -> Result<(), TracerError> {
        self.memory.load_cartridge(bytes)?;
        self.reset();
        Ok(())
    }

    /// Replace the BIOS image. Its classification is kept.
    pub fn load_bios(&mut self, bytes: &[u8]) -> Result<(), TracerError> {
        self.memory.load_bios(bytes)?;
        if let Some(bank) = self.banks.get_mut(BankId::Bios) {
            bank.invalidate();
        }
        Ok(())
    }

    /// Remove the cartridge and reset.
    pub fn eject(&mut self) {
        self.memory.eject();
        self.reset();
    }
}

impl Default for Tracer {
    fn default() -> Self {
        Self::new()
    }
}
