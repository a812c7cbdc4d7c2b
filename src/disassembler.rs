//! S1C88 Bank Disassembler
//!
//! Turns a bank's bytes and their access classification into display rows.
//! Only bytes the execution core has classified as instructions are decoded
//! as code; everything else becomes `DW`/`DB` data rows.

pub mod decoder;
pub mod formatter;

use std::fmt;

use crate::access::TraceAccess;
use crate::config::TracerConfig;
use crate::memory::PAGE_OFFSET_MASK;
use crate::opcodes::Condition;
use crate::symbols::SymbolTable;

use decoder::Cursor;

/// Mnemonic of an undecodable or truncated instruction.
pub const ILLEGAL_MNEMONIC: &str = "NDEF";

/// Pseudo-op for a run of data words.
pub const WORD_DATA_MNEMONIC: &str = "DW";

/// Pseudo-op for a run of data bytes.
pub const BYTE_DATA_MNEMONIC: &str = "DB";

/// Mnemonics that end a run of consecutive instruction rows.
pub const BREAK_MNEMONICS: [&str; 12] = [
    "CALL",
    "CARS",
    "CARL",
    "JRS",
    "JRL",
    "JP",
    "DJR",
    "INT",
    "RET",
    "RETE",
    "RETS",
    ILLEGAL_MNEMONIC,
];

/// What a row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// A decoded instruction.
    Instruction,
    /// An undefined opcode, or an instruction cut short by the end of the bank.
    Illegal,
    /// A `DW` run of little-endian words.
    Words,
    /// A `DB` run of bytes.
    Bytes,
}

/// A formatted operand token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// Branch condition of a conditional jump or call.
    Condition(Condition),
    /// Bare register or register group.
    Register(&'static str),
    /// `[HL]`, `[IX]`, `[IY]`
    Indirect(&'static str),
    /// `[IX+L]`, `[IY+L]`
    IndexedByL(&'static str),
    /// `[SP+dd]`, `[IX+dd]`, `[IY+dd]`
    Displaced(&'static str, i8),
    /// `[hhll]`
    Absolute(u16),
    /// `[BR:ll]`
    BrPage(u8),
    /// `[kk]`
    Vector(u8),
    /// `#nn`
    Immediate8(u8),
    /// `#mmnn`
    Immediate16(u16),
    /// Resolved relative branch destination.
    Target { address: u32, label: Option<String> },
    /// One `DW` element; vectors to labelled addresses carry the label.
    Word { value: u16, label: Option<String> },
    /// One `DB` element.
    Byte(u8),
}

impl Operand {
    /// Address this token points at, if it is an address reference.
    pub fn address(&self) -> Option<u32> {
        match self {
            Operand::Target { address, .. } => Some(*address),
            Operand::Word { value, .. } => Some(*value as u32),
            Operand::Absolute(address) => Some(*address as u32),
            _ => None,
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Operand::Condition(condition) => f.write_str(condition.name()),
            Operand::Register(name) => f.write_str(name),
            Operand::Indirect(name) => write!(f, "[{}]", name),
            Operand::IndexedByL(name) => write!(f, "[{}+L]", name),
            Operand::Displaced(name, disp) => write!(f, "[{}{:+}]", name, disp),
            Operand::Absolute(address) => write!(f, "[0{:04X}h]", address),
            Operand::BrPage(offset) => write!(f, "[BR:0{:02X}h]", offset),
            Operand::Vector(slot) => write!(f, "[0{:02X}h]", slot),
            Operand::Immediate8(value) => write!(f, "#0{:02X}h", value),
            Operand::Immediate16(value) => write!(f, "#0{:04X}h", value),
            Operand::Target {
                label: Some(label), ..
            } => f.write_str(label),
            Operand::Target { address, .. } => write!(f, "#{:06X}h", address),
            Operand::Word {
                label: Some(label), ..
            } => f.write_str(label),
            Operand::Word { value, .. } => write!(f, "0{:04X}h", value),
            Operand::Byte(value) => write!(f, "0{:02X}h", value),
        }
    }
}

/// One display row of a bank listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Address of the first byte covered by this row
    pub address: u32,

    pub kind: RowKind,

    /// Operation mnemonic, or `DW`/`DB`/`NDEF`
    pub mnemonic: &'static str,

    pub operands: Vec<Operand>,

    /// Bytes covered by this row, in address order
    pub raw: Vec<u8>,

    /// Label bound to `address`, if any
    pub label: Option<String>,
}

impl Row {
    /// Number of bytes this row covers.
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Always false: every row covers at least one byte.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// One past the last address covered by this row.
    pub fn end(&self) -> u32 {
        self.address + self.raw.len() as u32
    }

    /// True if `address` falls inside this row.
    pub fn contains(&self, address: u32) -> bool {
        (self.address..self.end()).contains(&address)
    }
}

/// The inputs of one bank walk: its bytes and the classification of each byte.
#[derive(Debug, Clone, Copy)]
pub struct BankView<'a> {
    /// Address of `bytes[0]`.
    pub start: u32,
    pub bytes: &'a [u8],
    /// Classification words, one per byte.
    pub trace: &'a [TraceAccess],
}

impl BankView<'_> {
    fn trace_at(&self, index: usize) -> TraceAccess {
        self.trace.get(index).copied().unwrap_or(TraceAccess::NONE)
    }
}

/// Disassemble a whole bank into rows.
///
/// The decode mode is chosen afresh at the start of every row from the
/// classification of the byte under the cursor:
///
/// 1. `INSTRUCTION`: decode instructions until a branch, call, return or
///    illegal opcode ends the run
/// 2. `WORD_LO` with at least two bytes left: one `DW` row
/// 3. anything else: one `DB` row
///
/// Rows never overlap and together cover every byte of the bank.
///
/// # Examples
///
/// ```
/// use minimon_trace::{render_bank, BankView, SymbolTable, TraceAccess, TracerConfig};
///
/// let bytes = [0xB0, 0x12, 0xF8];
/// let trace = [TraceAccess::INSTRUCTION, TraceAccess::NONE, TraceAccess::NONE];
/// let view = BankView { start: 0x1000, bytes: &bytes, trace: &trace };
///
/// let rows = render_bank(view, &SymbolTable::new(), &TracerConfig::default());
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].mnemonic, "LD");
/// assert_eq!(rows[1].mnemonic, "RET");
/// ```
pub fn render_bank(view: BankView, symbols: &SymbolTable, config: &TracerConfig) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut cursor = Cursor::new(view.start, view.bytes);

    // Page used for relative branches that land in the banked window
    let mut jump_page = view.start & !PAGE_OFFSET_MASK;

    while !cursor.is_empty() {
        let trace = view.trace_at(cursor.index());

        if trace.contains(TraceAccess::INSTRUCTION) {
            loop {
                let (row, terminate) =
                    decoder::decode_instruction(&mut cursor, &mut jump_page, symbols);
                rows.push(row);

                if terminate || cursor.is_empty() {
                    break;
                }
            }
        } else if cursor.remaining() >= 2 && trace.contains(TraceAccess::WORD_LO) {
            rows.push(word_row(&mut cursor, &view, symbols, config));
        } else {
            rows.push(byte_row(&mut cursor, &view, symbols, config));
        }
    }

    for row in rows.iter_mut() {
        row.label = symbols.lookup(row.address).map(str::to_string);
    }

    rows
}

fn word_row(cursor: &mut Cursor, view: &BankView, symbols: &SymbolTable, config: &TracerConfig) -> Row {
    let address = cursor.address();
    let start = cursor.index();
    let mut operands = Vec::new();

    loop {
        let trace = view.trace_at(cursor.index());
        let value = match cursor.next_u16() {
            Some(value) => value,
            None => break,
        };

        let label = if trace.contains(TraceAccess::VECTOR) {
            symbols.lookup(value as u32).map(str::to_string)
        } else {
            None
        };
        operands.push(Operand::Word { value, label });

        if operands.len() >= config.max_data_words
            || cursor.remaining() < 2
            || symbols.contains(cursor.address())
            || !view.trace_at(cursor.index()).contains(TraceAccess::WORD_LO)
        {
            break;
        }
    }

    Row {
        address,
        kind: RowKind::Words,
        mnemonic: WORD_DATA_MNEMONIC,
        operands,
        raw: cursor.consumed_since(start).to_vec(),
        label: None,
    }
}

fn byte_row(cursor: &mut Cursor, view: &BankView, symbols: &SymbolTable, config: &TracerConfig) -> Row {
    let address = cursor.address();
    let start = cursor.index();
    let mut operands = Vec::new();

    while let Some(value) = cursor.next_u8() {
        operands.push(Operand::Byte(value));

        if operands.len() >= config.max_data_bytes
            || cursor.is_empty()
            || symbols.contains(cursor.address())
            || view
                .trace_at(cursor.index())
                .intersects(TraceAccess::WORD_LO | TraceAccess::INSTRUCTION)
        {
            break;
        }
    }

    Row {
        address,
        kind: RowKind::Bytes,
        mnemonic: BYTE_DATA_MNEMONIC,
        operands,
        raw: cursor.consumed_since(start).to_vec(),
        label: None,
    }
}
