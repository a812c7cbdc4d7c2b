//! Instruction decoder for the bank disassembler

use crate::disassembler::{Operand, Row, RowKind, BREAK_MNEMONICS, ILLEGAL_MNEMONIC};
use crate::memory::{logical_address, PAGE_OFFSET_MASK, PAGE_SIZE};
use crate::opcodes::{Argument, OpcodeEntry, OpcodeMetadata, INSTRUCTION_TABLE};
use crate::symbols::SymbolTable;

/// Read position within a bank's bytes.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    start: u32,
    bytes: &'a [u8],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(start: u32, bytes: &'a [u8]) -> Self {
        Self {
            start,
            bytes,
            index: 0,
        }
    }

    /// Absolute address of the next byte.
    pub fn address(&self) -> u32 {
        self.start + self.index as u32
    }

    /// Offset of the next byte within the bank.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Bytes left before the end of the bank.
    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.index
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Consume one byte; `None` at the end of the bank.
    pub fn next_u8(&mut self) -> Option<u8> {
        let byte = *self.bytes.get(self.index)?;
        self.index += 1;
        Some(byte)
    }

    /// Consume a little-endian word.
    ///
    /// A lone trailing byte is still consumed so that truncated operands
    /// show up in the row's raw bytes.
    pub fn next_u16(&mut self) -> Option<u16> {
        let lo = self.next_u8()?;
        let hi = self.next_u8()?;
        Some(u16::from_le_bytes([lo, hi]))
    }

    /// Bytes consumed since `start` (an earlier [`Cursor::index`]).
    pub fn consumed_since(&self, start: usize) -> &'a [u8] {
        &self.bytes[start..self.index]
    }
}

/// Raw operand value pulled from the byte stream before formatting.
#[derive(Debug, Clone, Copy)]
enum RawOperand {
    None,
    Byte(u8),
    Word(u16),
}

/// Decode one instruction at the cursor.
///
/// Returns the row and whether the current instruction run ends here: after
/// any branch, call or return, and after an undefined or truncated opcode.
/// Truncated instructions keep the bytes that were actually read.
///
/// `jump_page` is the page base applied to relative branches landing in the
/// banked window; `LD NB,#nn` replaces it for the rest of the walk.
pub fn decode_instruction(
    cursor: &mut Cursor,
    jump_page: &mut u32,
    symbols: &SymbolTable,
) -> (Row, bool) {
    let address = cursor.address();
    let start = cursor.index();

    let decoded = walk_table(cursor).and_then(|meta| {
        let raw = read_operands(cursor, meta)?;
        Some((meta, raw))
    });

    let (meta, raw_operands) = match decoded {
        Some(decoded) => decoded,
        None => return (illegal_row(address, cursor.consumed_since(start)), true),
    };

    let next = cursor.address();
    let mut operands = Vec::with_capacity(meta.args.len() + 1);

    if let Some(condition) = meta.condition {
        operands.push(Operand::Condition(condition));
    }

    for (&arg, &raw) in meta.args.iter().zip(raw_operands.iter()) {
        operands.push(format_argument(arg, raw, next, *jump_page, symbols));
    }

    let terminate = BREAK_MNEMONICS.contains(&meta.mnemonic);
    if !terminate {
        if let Some(page) = page_load(meta, &raw_operands) {
            *jump_page = page;
        }
    }

    let row = Row {
        address,
        kind: RowKind::Instruction,
        mnemonic: meta.mnemonic,
        operands,
        raw: cursor.consumed_since(start).to_vec(),
        label: None,
    };

    (row, terminate)
}

/// Follow prefix bytes through the decode trie down to a leaf.
fn walk_table(cursor: &mut Cursor) -> Option<&'static OpcodeMetadata> {
    let mut table = &INSTRUCTION_TABLE;

    loop {
        match &table[cursor.next_u8()? as usize] {
            OpcodeEntry::Undefined => return None,
            OpcodeEntry::Op(meta) => return Some(meta),
            OpcodeEntry::Prefix(next) => table = *next,
        }
    }
}

fn read_operands(cursor: &mut Cursor, meta: &OpcodeMetadata) -> Option<Vec<RawOperand>> {
    meta.args
        .iter()
        .map(|arg| match arg.operand_size() {
            1 => cursor.next_u8().map(RawOperand::Byte),
            2 => cursor.next_u16().map(RawOperand::Word),
            _ => Some(RawOperand::None),
        })
        .collect()
}

/// `LD NB,#nn` selects the page the next far branch lands in.
fn page_load(meta: &OpcodeMetadata, raw: &[RawOperand]) -> Option<u32> {
    match (meta.mnemonic, meta.args, raw) {
        ("LD", [Argument::Nb, Argument::Imm8], [_, RawOperand::Byte(page)]) => {
            Some((*page as u32) << 15)
        }
        _ => None,
    }
}

/// Resolve a relative branch to a physical address.
///
/// The displacement is applied in the CPU's 16-bit logical space relative to
/// the next instruction. Logical targets in the banked window (bit 15 set)
/// take their page from `jump_page`.
pub fn resolve_relative(next: u32, displacement: i32, jump_page: u32) -> u32 {
    let target = (logical_address(next) as i32 + displacement) as u16 as u32;

    if target & PAGE_SIZE != 0 {
        jump_page | (target & PAGE_OFFSET_MASK)
    } else {
        target
    }
}

fn format_argument(
    arg: Argument,
    raw: RawOperand,
    next: u32,
    jump_page: u32,
    symbols: &SymbolTable,
) -> Operand {
    use Argument::*;

    let byte = match raw {
        RawOperand::Byte(value) => value,
        _ => 0,
    };
    let word = match raw {
        RawOperand::Word(value) => value,
        _ => 0,
    };

    match arg {
        IndHl => Operand::Indirect("HL"),
        IndIx => Operand::Indirect("IX"),
        IndIy => Operand::Indirect("IY"),
        IndIxL => Operand::IndexedByL("IX"),
        IndIyL => Operand::IndexedByL("IY"),
        DispSp => Operand::Displaced("SP", byte as i8),
        DispIx => Operand::Displaced("IX", byte as i8),
        DispIy => Operand::Displaced("IY", byte as i8),
        Abs16 => Operand::Absolute(word),
        BrPage => Operand::BrPage(byte),
        Vector => Operand::Vector(byte),
        Imm8 => Operand::Immediate8(byte),
        Imm16 => Operand::Immediate16(word),
        Rel8 => branch_target(resolve_relative(next, byte as i8 as i32, jump_page), symbols),
        Rel16 => branch_target(resolve_relative(next, word as i16 as i32, jump_page), symbols),
        register => Operand::Register(register.register_name().unwrap_or("?")),
    }
}

fn branch_target(address: u32, symbols: &SymbolTable) -> Operand {
    Operand::Target {
        address,
        label: symbols.lookup(address).map(str::to_string),
    }
}

fn illegal_row(address: u32, raw: &[u8]) -> Row {
    Row {
        address,
        kind: RowKind::Illegal,
        mnemonic: ILLEGAL_MNEMONIC,
        operands: Vec::new(),
        raw: raw.to_vec(),
        label: None,
    }
}
