//! # Opcode Decode Tables
//!
//! This module contains the S1C88 decode trie used by the disassembler.
//!
//! The trie is a 256-entry primary table indexed by the first opcode byte.
//! Each entry is one of:
//! - **Undefined** - the byte sequence is not a valid instruction
//! - **Op** - a leaf describing the operation, its branch condition and its arguments
//! - **Prefix** - a further 256-entry table indexed by the next byte (`0xCE`, `0xCF`)
//!
//! Operand bytes follow the opcode bytes in the order the arguments are
//! declared; 16-bit operands are little-endian.

use self::Argument::*;
use self::Condition::*;

/// Operand kinds an instruction can declare.
///
/// # Operand Sizes
///
/// - **0 bytes**: registers and register-indirect references
/// - **1 byte**: `Imm8`, `Rel8`, `BrPage`, `Vector`, `DispSp`, `DispIx`, `DispIy`
/// - **2 bytes**: `Imm16`, `Rel16`, `Abs16`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
    A,
    B,
    L,
    H,
    Ba,
    Hl,
    Ix,
    Iy,
    Nb,
    Br,
    Ep,
    Ip,
    Xp,
    Yp,
    Sc,
    Sp,
    Pc,
    /// Register group pushed by `PUSH ALL`.
    All,
    /// Register group pushed by `PUSH ALE`.
    Ale,

    /// `[HL]`
    IndHl,
    /// `[IX]`
    IndIx,
    /// `[IY]`
    IndIy,
    /// `[IX+L]`
    IndIxL,
    /// `[IY+L]`
    IndIyL,
    /// `[SP+dd]`, signed 8-bit displacement.
    DispSp,
    /// `[IX+dd]`, signed 8-bit displacement.
    DispIx,
    /// `[IY+dd]`, signed 8-bit displacement.
    DispIy,
    /// `[hhll]`, absolute 16-bit address.
    Abs16,
    /// `[BR:ll]`, 8-bit offset into the page selected by BR.
    BrPage,
    /// `[kk]`, 8-bit vector table slot.
    Vector,

    /// `#nn`
    Imm8,
    /// `#mmnn`
    Imm16,
    /// `rr`, signed 8-bit branch displacement.
    Rel8,
    /// `qqrr`, signed 16-bit branch displacement.
    Rel16,
}

impl Argument {
    /// Number of operand bytes this argument consumes.
    pub fn operand_size(self) -> usize {
        match self {
            Imm8 | Rel8 | BrPage | Vector | DispSp | DispIx | DispIy => 1,
            Imm16 | Rel16 | Abs16 => 2,
            _ => 0,
        }
    }

    /// Register name for register arguments, `None` for everything else.
    pub fn register_name(self) -> Option<&'static str> {
        let name = match self {
            A => "A",
            B => "B",
            L => "L",
            H => "H",
            Ba => "BA",
            Hl => "HL",
            Ix => "IX",
            Iy => "IY",
            Nb => "NB",
            Br => "BR",
            Ep => "EP",
            Ip => "IP",
            Xp => "XP",
            Yp => "YP",
            Sc => "SC",
            Sp => "SP",
            Pc => "PC",
            All => "ALL",
            Ale => "ALE",
            _ => return None,
        };

        Some(name)
    }
}

/// Branch conditions tested by conditional jumps and calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Condition {
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Overflow,
    NotOverflow,
    Positive,
    Minus,
    Carry,
    NotCarry,
    Zero,
    NotZero,
    Flag0,
    Flag1,
    Flag2,
    Flag3,
    NotFlag0,
    NotFlag1,
    NotFlag2,
    NotFlag3,
}

impl Condition {
    /// Assembler spelling of the condition.
    pub fn name(self) -> &'static str {
        match self {
            LessThan => "LT",
            LessEqual => "LE",
            GreaterThan => "GT",
            GreaterEqual => "GE",
            Overflow => "V",
            NotOverflow => "NV",
            Positive => "P",
            Minus => "M",
            Carry => "C",
            NotCarry => "NC",
            Zero => "Z",
            NotZero => "NZ",
            Flag0 => "F0",
            Flag1 => "F1",
            Flag2 => "F2",
            Flag3 => "F3",
            NotFlag0 => "NF0",
            NotFlag1 => "NF1",
            NotFlag2 => "NF2",
            NotFlag3 => "NF3",
        }
    }
}

/// Leaf descriptor for a decoded operation.
///
/// # Examples
///
/// ```
/// use minimon_trace::opcodes::{Argument, OpcodeEntry, INSTRUCTION_TABLE};
///
/// // LD A,#nn
/// match &INSTRUCTION_TABLE[0xB0] {
///     OpcodeEntry::Op(meta) => {
///         assert_eq!(meta.mnemonic, "LD");
///         assert_eq!(meta.args, &[Argument::A, Argument::Imm8]);
///         assert_eq!(meta.operand_size(), 1);
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Operation mnemonic (e.g., "LD", "JRS", "CARL").
    pub mnemonic: &'static str,

    /// Branch condition, rendered as the first operand when present.
    pub condition: Option<Condition>,

    /// Arguments in encoding order.
    pub args: &'static [Argument],
}

impl OpcodeMetadata {
    /// Total operand bytes following the opcode bytes.
    pub fn operand_size(&self) -> usize {
        self.args.iter().map(|arg| arg.operand_size()).sum()
    }
}

/// One slot of a decode table.
#[derive(Debug, Clone, Copy)]
pub enum OpcodeEntry {
    /// No instruction is encoded by this byte sequence.
    Undefined,
    /// A complete operation.
    Op(OpcodeMetadata),
    /// The byte is a prefix; decoding continues with the next byte.
    Prefix(&'static [OpcodeEntry; 256]),
}

impl OpcodeEntry {
    /// True for undefined slots.
    pub fn is_undefined(&self) -> bool {
        matches!(self, OpcodeEntry::Undefined)
    }
}

/// Number of opcode bytes (prefixes included) needed to reach the leaf for
/// `bytes`, together with the leaf itself.
///
/// Returns `None` if the walk hits an undefined slot or runs out of bytes.
pub fn lookup(bytes: &[u8]) -> Option<(usize, &'static OpcodeMetadata)> {
    let mut table = &INSTRUCTION_TABLE;

    for (depth, &byte) in bytes.iter().enumerate() {
        match &table[byte as usize] {
            OpcodeEntry::Undefined => return None,
            OpcodeEntry::Op(meta) => return Some((depth + 1, meta)),
            OpcodeEntry::Prefix(next) => table = *next,
        }
    }

    None
}

const UNDEFINED: OpcodeEntry = OpcodeEntry::Undefined;

const fn op(mnemonic: &'static str, args: &'static [Argument]) -> OpcodeEntry {
    OpcodeEntry::Op(OpcodeMetadata {
        mnemonic,
        condition: None,
        args,
    })
}

const fn cond(
    mnemonic: &'static str,
    condition: Condition,
    args: &'static [Argument],
) -> OpcodeEntry {
    OpcodeEntry::Op(OpcodeMetadata {
        mnemonic,
        condition: Some(condition),
        args,
    })
}

/// Primary decode table, indexed by the first opcode byte.
pub static INSTRUCTION_TABLE: [OpcodeEntry; 256] = [
    op("ADD", &[A, A]), // 0x00 ADD A,A
    op("ADD", &[A, B]), // 0x01 ADD A,B
    op("ADD", &[A, Imm8]), // 0x02 ADD A,#nn
    op("ADD", &[A, IndHl]), // 0x03 ADD A,[HL]
    op("ADD", &[A, BrPage]), // 0x04 ADD A,[BR:ll]
    op("ADD", &[A, Abs16]), // 0x05 ADD A,[hhll]
    op("ADD", &[A, IndIx]), // 0x06 ADD A,[IX]
    op("ADD", &[A, IndIy]), // 0x07 ADD A,[IY]
    op("ADC", &[A, A]), // 0x08 ADC A,A
    op("ADC", &[A, B]), // 0x09 ADC A,B
    op("ADC", &[A, Imm8]), // 0x0A ADC A,#nn
    op("ADC", &[A, IndHl]), // 0x0B ADC A,[HL]
    op("ADC", &[A, BrPage]), // 0x0C ADC A,[BR:ll]
    op("ADC", &[A, Abs16]), // 0x0D ADC A,[hhll]
    op("ADC", &[A, IndIx]), // 0x0E ADC A,[IX]
    op("ADC", &[A, IndIy]), // 0x0F ADC A,[IY]
    op("SUB", &[A, A]), // 0x10 SUB A,A
    op("SUB", &[A, B]), // 0x11 SUB A,B
    op("SUB", &[A, Imm8]), // 0x12 SUB A,#nn
    op("SUB", &[A, IndHl]), // 0x13 SUB A,[HL]
    op("SUB", &[A, BrPage]), // 0x14 SUB A,[BR:ll]
    op("SUB", &[A, Abs16]), // 0x15 SUB A,[hhll]
    op("SUB", &[A, IndIx]), // 0x16 SUB A,[IX]
    op("SUB", &[A, IndIy]), // 0x17 SUB A,[IY]
    op("SBC", &[A, A]), // 0x18 SBC A,A
    op("SBC", &[A, B]), // 0x19 SBC A,B
    op("SBC", &[A, Imm8]), // 0x1A SBC A,#nn
    op("SBC", &[A, IndHl]), // 0x1B SBC A,[HL]
    op("SBC", &[A, BrPage]), // 0x1C SBC A,[BR:ll]
    op("SBC", &[A, Abs16]), // 0x1D SBC A,[hhll]
    op("SBC", &[A, IndIx]), // 0x1E SBC A,[IX]
    op("SBC", &[A, IndIy]), // 0x1F SBC A,[IY]
    op("AND", &[A, A]), // 0x20 AND A,A
    op("AND", &[A, B]), // 0x21 AND A,B
    op("AND", &[A, Imm8]), // 0x22 AND A,#nn
    op("AND", &[A, IndHl]), // 0x23 AND A,[HL]
    op("AND", &[A, BrPage]), // 0x24 AND A,[BR:ll]
    op("AND", &[A, Abs16]), // 0x25 AND A,[hhll]
    op("AND", &[A, IndIx]), // 0x26 AND A,[IX]
    op("AND", &[A, IndIy]), // 0x27 AND A,[IY]
    op("OR", &[A, A]), // 0x28 OR A,A
    op("OR", &[A, B]), // 0x29 OR A,B
    op("OR", &[A, Imm8]), // 0x2A OR A,#nn
    op("OR", &[A, IndHl]), // 0x2B OR A,[HL]
    op("OR", &[A, BrPage]), // 0x2C OR A,[BR:ll]
    op("OR", &[A, Abs16]), // 0x2D OR A,[hhll]
    op("OR", &[A, IndIx]), // 0x2E OR A,[IX]
    op("OR", &[A, IndIy]), // 0x2F OR A,[IY]
    op("CP", &[A, A]), // 0x30 CP A,A
    op("CP", &[A, B]), // 0x31 CP A,B
    op("CP", &[A, Imm8]), // 0x32 CP A,#nn
    op("CP", &[A, IndHl]), // 0x33 CP A,[HL]
    op("CP", &[A, BrPage]), // 0x34 CP A,[BR:ll]
    op("CP", &[A, Abs16]), // 0x35 CP A,[hhll]
    op("CP", &[A, IndIx]), // 0x36 CP A,[IX]
    op("CP", &[A, IndIy]), // 0x37 CP A,[IY]
    op("XOR", &[A, A]), // 0x38 XOR A,A
    op("XOR", &[A, B]), // 0x39 XOR A,B
    op("XOR", &[A, Imm8]), // 0x3A XOR A,#nn
    op("XOR", &[A, IndHl]), // 0x3B XOR A,[HL]
    op("XOR", &[A, BrPage]), // 0x3C XOR A,[BR:ll]
    op("XOR", &[A, Abs16]), // 0x3D XOR A,[hhll]
    op("XOR", &[A, IndIx]), // 0x3E XOR A,[IX]
    op("XOR", &[A, IndIy]), // 0x3F XOR A,[IY]
    op("LD", &[A, A]), // 0x40 LD A,A
    op("LD", &[A, B]), // 0x41 LD A,B
    op("LD", &[A, L]), // 0x42 LD A,L
    op("LD", &[A, H]), // 0x43 LD A,H
    op("LD", &[A, BrPage]), // 0x44 LD A,[BR:ll]
    op("LD", &[A, IndHl]), // 0x45 LD A,[HL]
    op("LD", &[A, IndIx]), // 0x46 LD A,[IX]
    op("LD", &[A, IndIy]), // 0x47 LD A,[IY]
    op("LD", &[B, A]), // 0x48 LD B,A
    op("LD", &[B, B]), // 0x49 LD B,B
    op("LD", &[B, L]), // 0x4A LD B,L
    op("LD", &[B, H]), // 0x4B LD B,H
    op("LD", &[B, BrPage]), // 0x4C LD B,[BR:ll]
    op("LD", &[B, IndHl]), // 0x4D LD B,[HL]
    op("LD", &[B, IndIx]), // 0x4E LD B,[IX]
    op("LD", &[B, IndIy]), // 0x4F LD B,[IY]
    op("LD", &[L, A]), // 0x50 LD L,A
    op("LD", &[L, B]), // 0x51 LD L,B
    op("LD", &[L, L]), // 0x52 LD L,L
    op("LD", &[L, H]), // 0x53 LD L,H
    op("LD", &[L, BrPage]), // 0x54 LD L,[BR:ll]
    op("LD", &[L, IndHl]), // 0x55 LD L,[HL]
    op("LD", &[L, IndIx]), // 0x56 LD L,[IX]
    op("LD", &[L, IndIy]), // 0x57 LD L,[IY]
    op("LD", &[H, A]), // 0x58 LD H,A
    op("LD", &[H, B]), // 0x59 LD H,B
    op("LD", &[H, L]), // 0x5A LD H,L
    op("LD", &[H, H]), // 0x5B LD H,H
    op("LD", &[H, BrPage]), // 0x5C LD H,[BR:ll]
    op("LD", &[H, IndHl]), // 0x5D LD H,[HL]
    op("LD", &[H, IndIx]), // 0x5E LD H,[IX]
    op("LD", &[H, IndIy]), // 0x5F LD H,[IY]
    op("LD", &[IndIx, A]), // 0x60 LD [IX],A
    op("LD", &[IndIx, B]), // 0x61 LD [IX],B
    op("LD", &[IndIx, L]), // 0x62 LD [IX],L
    op("LD", &[IndIx, H]), // 0x63 LD [IX],H
    op("LD", &[IndIx, BrPage]), // 0x64 LD [IX],[BR:ll]
    op("LD", &[IndIx, IndHl]), // 0x65 LD [IX],[HL]
    op("LD", &[IndIx, IndIx]), // 0x66 LD [IX],[IX]
    op("LD", &[IndIx, IndIy]), // 0x67 LD [IX],[IY]
    op("LD", &[IndHl, A]), // 0x68 LD [HL],A
    op("LD", &[IndHl, B]), // 0x69 LD [HL],B
    op("LD", &[IndHl, L]), // 0x6A LD [HL],L
    op("LD", &[IndHl, H]), // 0x6B LD [HL],H
    op("LD", &[IndHl, BrPage]), // 0x6C LD [HL],[BR:ll]
    op("LD", &[IndHl, IndHl]), // 0x6D LD [HL],[HL]
    op("LD", &[IndHl, IndIx]), // 0x6E LD [HL],[IX]
    op("LD", &[IndHl, IndIy]), // 0x6F LD [HL],[IY]
    op("LD", &[IndIy, A]), // 0x70 LD [IY],A
    op("LD", &[IndIy, B]), // 0x71 LD [IY],B
    op("LD", &[IndIy, L]), // 0x72 LD [IY],L
    op("LD", &[IndIy, H]), // 0x73 LD [IY],H
    op("LD", &[IndIy, BrPage]), // 0x74 LD [IY],[BR:ll]
    op("LD", &[IndIy, IndHl]), // 0x75 LD [IY],[HL]
    op("LD", &[IndIy, IndIx]), // 0x76 LD [IY],[IX]
    op("LD", &[IndIy, IndIy]), // 0x77 LD [IY],[IY]
    op("LD", &[BrPage, A]), // 0x78 LD [BR:ll],A
    op("LD", &[BrPage, B]), // 0x79 LD [BR:ll],B
    op("LD", &[BrPage, L]), // 0x7A LD [BR:ll],L
    op("LD", &[BrPage, H]), // 0x7B LD [BR:ll],H
    op("LD", &[BrPage, BrPage]), // 0x7C LD [BR:ll],[BR:ll]
    op("LD", &[BrPage, IndHl]), // 0x7D LD [BR:ll],[HL]
    op("LD", &[BrPage, IndIx]), // 0x7E LD [BR:ll],[IX]
    op("LD", &[BrPage, IndIy]), // 0x7F LD [BR:ll],[IY]
    op("INC", &[A]), // 0x80 INC A
    op("INC", &[B]), // 0x81 INC B
    op("INC", &[L]), // 0x82 INC L
    op("INC", &[H]), // 0x83 INC H
    op("INC", &[Br]), // 0x84 INC BR
    op("INC", &[BrPage]), // 0x85 INC [BR:ll]
    op("INC", &[IndHl]), // 0x86 INC [HL]
    op("INC", &[Sp]), // 0x87 INC SP
    op("DEC", &[A]), // 0x88 DEC A
    op("DEC", &[B]), // 0x89 DEC B
    op("DEC", &[L]), // 0x8A DEC L
    op("DEC", &[H]), // 0x8B DEC H
    op("DEC", &[Br]), // 0x8C DEC BR
    op("DEC", &[BrPage]), // 0x8D DEC [BR:ll]
    op("DEC", &[IndHl]), // 0x8E DEC [HL]
    op("DEC", &[Sp]), // 0x8F DEC SP
    op("INC", &[Ba]), // 0x90 INC BA
    op("INC", &[Hl]), // 0x91 INC HL
    op("INC", &[Ix]), // 0x92 INC IX
    op("INC", &[Iy]), // 0x93 INC IY
    op("BIT", &[A, B]), // 0x94 BIT A,B
    op("BIT", &[IndHl, Imm8]), // 0x95 BIT [HL],#nn
    op("BIT", &[A, Imm8]), // 0x96 BIT A,#nn
    op("BIT", &[B, Imm8]), // 0x97 BIT B,#nn
    op("DEC", &[Ba]), // 0x98 DEC BA
    op("DEC", &[Hl]), // 0x99 DEC HL
    op("DEC", &[Ix]), // 0x9A DEC IX
    op("DEC", &[Iy]), // 0x9B DEC IY
    op("AND", &[Sc, Imm8]), // 0x9C AND SC,#nn
    op("OR", &[Sc, Imm8]), // 0x9D OR SC,#nn
    op("XOR", &[Sc, Imm8]), // 0x9E XOR SC,#nn
    op("LD", &[Sc, Imm8]), // 0x9F LD SC,#nn
    op("PUSH", &[Ba]), // 0xA0 PUSH BA
    op("PUSH", &[Hl]), // 0xA1 PUSH HL
    op("PUSH", &[Ix]), // 0xA2 PUSH IX
    op("PUSH", &[Iy]), // 0xA3 PUSH IY
    op("PUSH", &[Br]), // 0xA4 PUSH BR
    op("PUSH", &[Ep]), // 0xA5 PUSH EP
    op("PUSH", &[Ip]), // 0xA6 PUSH IP
    op("PUSH", &[Sc]), // 0xA7 PUSH SC
    op("POP", &[Ba]), // 0xA8 POP BA
    op("POP", &[Hl]), // 0xA9 POP HL
    op("POP", &[Ix]), // 0xAA POP IX
    op("POP", &[Iy]), // 0xAB POP IY
    op("POP", &[Br]), // 0xAC POP BR
    op("POP", &[Ep]), // 0xAD POP EP
    op("POP", &[Ip]), // 0xAE POP IP
    op("POP", &[Sc]), // 0xAF POP SC
    op("LD", &[A, Imm8]), // 0xB0 LD A,#nn
    op("LD", &[B, Imm8]), // 0xB1 LD B,#nn
    op("LD", &[L, Imm8]), // 0xB2 LD L,#nn
    op("LD", &[H, Imm8]), // 0xB3 LD H,#nn
    op("LD", &[Br, Imm8]), // 0xB4 LD BR,#nn
    op("LD", &[IndHl, Imm8]), // 0xB5 LD [HL],#nn
    op("LD", &[IndIx, Imm8]), // 0xB6 LD [IX],#nn
    op("LD", &[IndIy, Imm8]), // 0xB7 LD [IY],#nn
    op("LD", &[Ba, Abs16]), // 0xB8 LD BA,[hhll]
    op("LD", &[Hl, Abs16]), // 0xB9 LD HL,[hhll]
    op("LD", &[Ix, Abs16]), // 0xBA LD IX,[hhll]
    op("LD", &[Iy, Abs16]), // 0xBB LD IY,[hhll]
    op("LD", &[Abs16, Ba]), // 0xBC LD [hhll],BA
    op("LD", &[Abs16, Hl]), // 0xBD LD [hhll],HL
    op("LD", &[Abs16, Ix]), // 0xBE LD [hhll],IX
    op("LD", &[Abs16, Iy]), // 0xBF LD [hhll],IY
    op("ADD", &[Ba, Imm16]), // 0xC0 ADD BA,#mmnn
    op("ADD", &[Hl, Imm16]), // 0xC1 ADD HL,#mmnn
    op("ADD", &[Ix, Imm16]), // 0xC2 ADD IX,#mmnn
    op("ADD", &[Iy, Imm16]), // 0xC3 ADD IY,#mmnn
    op("LD", &[Ba, Imm16]), // 0xC4 LD BA,#mmnn
    op("LD", &[Hl, Imm16]), // 0xC5 LD HL,#mmnn
    op("LD", &[Ix, Imm16]), // 0xC6 LD IX,#mmnn
    op("LD", &[Iy, Imm16]), // 0xC7 LD IY,#mmnn
    op("EX", &[Ba, Hl]), // 0xC8 EX BA,HL
    op("EX", &[Ba, Ix]), // 0xC9 EX BA,IX
    op("EX", &[Ba, Iy]), // 0xCA EX BA,IY
    op("EX", &[Ba, Sp]), // 0xCB EX BA,SP
    op("EX", &[A, B]), // 0xCC EX A,B
    op("EX", &[A, IndHl]), // 0xCD EX A,[HL]
    OpcodeEntry::Prefix(&EXTENDED_TABLE_CE), // 0xCE
    OpcodeEntry::Prefix(&EXTENDED_TABLE_CF), // 0xCF
    op("SUB", &[Ba, Imm16]), // 0xD0 SUB BA,#mmnn
    op("SUB", &[Hl, Imm16]), // 0xD1 SUB HL,#mmnn
    op("SUB", &[Ix, Imm16]), // 0xD2 SUB IX,#mmnn
    op("SUB", &[Iy, Imm16]), // 0xD3 SUB IY,#mmnn
    op("CP", &[Ba, Imm16]), // 0xD4 CP BA,#mmnn
    op("CP", &[Hl, Imm16]), // 0xD5 CP HL,#mmnn
    op("CP", &[Ix, Imm16]), // 0xD6 CP IX,#mmnn
    op("CP", &[Iy, Imm16]), // 0xD7 CP IY,#mmnn
    op("AND", &[BrPage, Imm8]), // 0xD8 AND [BR:ll],#nn
    op("OR", &[BrPage, Imm8]), // 0xD9 OR [BR:ll],#nn
    op("XOR", &[BrPage, Imm8]), // 0xDA XOR [BR:ll],#nn
    op("CP", &[BrPage, Imm8]), // 0xDB CP [BR:ll],#nn
    op("BIT", &[BrPage, Imm8]), // 0xDC BIT [BR:ll],#nn
    op("LD", &[BrPage, Imm8]), // 0xDD LD [BR:ll],#nn
    op("PACK", &[]), // 0xDE PACK
    op("UPCK", &[]), // 0xDF UPCK
    cond("CARS", Carry, &[Rel8]), // 0xE0 CARS C,rr
    cond("CARS", NotCarry, &[Rel8]), // 0xE1 CARS NC,rr
    cond("CARS", Zero, &[Rel8]), // 0xE2 CARS Z,rr
    cond("CARS", NotZero, &[Rel8]), // 0xE3 CARS NZ,rr
    cond("JRS", Carry, &[Rel8]), // 0xE4 JRS C,rr
    cond("JRS", NotCarry, &[Rel8]), // 0xE5 JRS NC,rr
    cond("JRS", Zero, &[Rel8]), // 0xE6 JRS Z,rr
    cond("JRS", NotZero, &[Rel8]), // 0xE7 JRS NZ,rr
    cond("CARL", Carry, &[Rel16]), // 0xE8 CARL C,qqrr
    cond("CARL", NotCarry, &[Rel16]), // 0xE9 CARL NC,qqrr
    cond("CARL", Zero, &[Rel16]), // 0xEA CARL Z,qqrr
    cond("CARL", NotZero, &[Rel16]), // 0xEB CARL NZ,qqrr
    cond("JRL", Carry, &[Rel16]), // 0xEC JRL C,qqrr
    cond("JRL", NotCarry, &[Rel16]), // 0xED JRL NC,qqrr
    cond("JRL", Zero, &[Rel16]), // 0xEE JRL Z,qqrr
    cond("JRL", NotZero, &[Rel16]), // 0xEF JRL NZ,qqrr
    op("CARS", &[Rel8]), // 0xF0 CARS rr
    op("JRS", &[Rel8]), // 0xF1 JRS rr
    op("CARL", &[Rel16]), // 0xF2 CARL qqrr
    op("JRL", &[Rel16]), // 0xF3 JRL qqrr
    op("JP", &[Hl]), // 0xF4 JP HL
    cond("DJR", NotZero, &[Rel8]), // 0xF5 DJR NZ,rr
    op("SWAP", &[A]), // 0xF6 SWAP A
    op("SWAP", &[IndHl]), // 0xF7 SWAP [HL]
    op("RET", &[]), // 0xF8 RET
    op("RETE", &[]), // 0xF9 RETE
    op("RETS", &[]), // 0xFA RETS
    op("CALL", &[Abs16]), // 0xFB CALL [hhll]
    op("INT", &[Vector]), // 0xFC INT [kk]
    op("JP", &[Vector]), // 0xFD JP [kk]
    UNDEFINED, // 0xFE
    op("NOP", &[]), // 0xFF NOP
];

/// Extension table selected by the `0xCE` prefix.
pub static EXTENDED_TABLE_CE: [OpcodeEntry; 256] = [
    op("ADD", &[A, DispIx]), // 0x00 ADD A,[IX+dd]
    op("ADD", &[A, DispIy]), // 0x01 ADD A,[IY+dd]
    op("ADD", &[A, IndIxL]), // 0x02 ADD A,[IX+L]
    op("ADD", &[A, IndIyL]), // 0x03 ADD A,[IY+L]
    op("ADD", &[IndHl, A]), // 0x04 ADD [HL],A
    op("ADD", &[IndHl, Imm8]), // 0x05 ADD [HL],#nn
    op("ADD", &[IndHl, IndIx]), // 0x06 ADD [HL],[IX]
    op("ADD", &[IndHl, IndIy]), // 0x07 ADD [HL],[IY]
    op("ADC", &[A, DispIx]), // 0x08 ADC A,[IX+dd]
    op("ADC", &[A, DispIy]), // 0x09 ADC A,[IY+dd]
    op("ADC", &[A, IndIxL]), // 0x0A ADC A,[IX+L]
    op("ADC", &[A, IndIyL]), // 0x0B ADC A,[IY+L]
    op("ADC", &[IndHl, A]), // 0x0C ADC [HL],A
    op("ADC", &[IndHl, Imm8]), // 0x0D ADC [HL],#nn
    op("ADC", &[IndHl, IndIx]), // 0x0E ADC [HL],[IX]
    op("ADC", &[IndHl, IndIy]), // 0x0F ADC [HL],[IY]
    op("SUB", &[A, DispIx]), // 0x10 SUB A,[IX+dd]
    op("SUB", &[A, DispIy]), // 0x11 SUB A,[IY+dd]
    op("SUB", &[A, IndIxL]), // 0x12 SUB A,[IX+L]
    op("SUB", &[A, IndIyL]), // 0x13 SUB A,[IY+L]
    op("SUB", &[IndHl, A]), // 0x14 SUB [HL],A
    op("SUB", &[IndHl, Imm8]), // 0x15 SUB [HL],#nn
    op("SUB", &[IndHl, IndIx]), // 0x16 SUB [HL],[IX]
    op("SUB", &[IndHl, IndIy]), // 0x17 SUB [HL],[IY]
    op("SBC", &[A, DispIx]), // 0x18 SBC A,[IX+dd]
    op("SBC", &[A, DispIy]), // 0x19 SBC A,[IY+dd]
    op("SBC", &[A, IndIxL]), // 0x1A SBC A,[IX+L]
    op("SBC", &[A, IndIyL]), // 0x1B SBC A,[IY+L]
    op("SBC", &[IndHl, A]), // 0x1C SBC [HL],A
    op("SBC", &[IndHl, Imm8]), // 0x1D SBC [HL],#nn
    op("SBC", &[IndHl, IndIx]), // 0x1E SBC [HL],[IX]
    op("SBC", &[IndHl, IndIy]), // 0x1F SBC [HL],[IY]
    op("AND", &[A, DispIx]), // 0x20 AND A,[IX+dd]
    op("AND", &[A, DispIy]), // 0x21 AND A,[IY+dd]
    op("AND", &[A, IndIxL]), // 0x22 AND A,[IX+L]
    op("AND", &[A, IndIyL]), // 0x23 AND A,[IY+L]
    op("AND", &[IndHl, A]), // 0x24 AND [HL],A
    op("AND", &[IndHl, Imm8]), // 0x25 AND [HL],#nn
    op("AND", &[IndHl, IndIx]), // 0x26 AND [HL],[IX]
    op("AND", &[IndHl, IndIy]), // 0x27 AND [HL],[IY]
    op("OR", &[A, DispIx]), // 0x28 OR A,[IX+dd]
    op("OR", &[A, DispIy]), // 0x29 OR A,[IY+dd]
    op("OR", &[A, IndIxL]), // 0x2A OR A,[IX+L]
    op("OR", &[A, IndIyL]), // 0x2B OR A,[IY+L]
    op("OR", &[IndHl, A]), // 0x2C OR [HL],A
    op("OR", &[IndHl, Imm8]), // 0x2D OR [HL],#nn
    op("OR", &[IndHl, IndIx]), // 0x2E OR [HL],[IX]
    op("OR", &[IndHl, IndIy]), // 0x2F OR [HL],[IY]
    op("CP", &[A, DispIx]), // 0x30 CP A,[IX+dd]
    op("CP", &[A, DispIy]), // 0x31 CP A,[IY+dd]
    op("CP", &[A, IndIxL]), // 0x32 CP A,[IX+L]
    op("CP", &[A, IndIyL]), // 0x33 CP A,[IY+L]
    op("CP", &[IndHl, A]), // 0x34 CP [HL],A
    op("CP", &[IndHl, Imm8]), // 0x35 CP [HL],#nn
    op("CP", &[IndHl, IndIx]), // 0x36 CP [HL],[IX]
    op("CP", &[IndHl, IndIy]), // 0x37 CP [HL],[IY]
    op("XOR", &[A, DispIx]), // 0x38 XOR A,[IX+dd]
    op("XOR", &[A, DispIy]), // 0x39 XOR A,[IY+dd]
    op("XOR", &[A, IndIxL]), // 0x3A XOR A,[IX+L]
    op("XOR", &[A, IndIyL]), // 0x3B XOR A,[IY+L]
    op("XOR", &[IndHl, A]), // 0x3C XOR [HL],A
    op("XOR", &[IndHl, Imm8]), // 0x3D XOR [HL],#nn
    op("XOR", &[IndHl, IndIx]), // 0x3E XOR [HL],[IX]
    op("XOR", &[IndHl, IndIy]), // 0x3F XOR [HL],[IY]
    op("LD", &[A, DispIx]), // 0x40 LD A,[IX+dd]
    op("LD", &[A, DispIy]), // 0x41 LD A,[IY+dd]
    op("LD", &[A, IndIxL]), // 0x42 LD A,[IX+L]
    op("LD", &[A, IndIyL]), // 0x43 LD A,[IY+L]
    op("LD", &[DispIx, A]), // 0x44 LD [IX+dd],A
    op("LD", &[DispIy, A]), // 0x45 LD [IY+dd],A
    op("LD", &[IndIxL, A]), // 0x46 LD [IX+L],A
    op("LD", &[IndIyL, A]), // 0x47 LD [IY+L],A
    op("LD", &[B, DispIx]), // 0x48 LD B,[IX+dd]
    op("LD", &[B, DispIy]), // 0x49 LD B,[IY+dd]
    op("LD", &[B, IndIxL]), // 0x4A LD B,[IX+L]
    op("LD", &[B, IndIyL]), // 0x4B LD B,[IY+L]
    op("LD", &[DispIx, B]), // 0x4C LD [IX+dd],B
    op("LD", &[DispIy, B]), // 0x4D LD [IY+dd],B
    op("LD", &[IndIxL, B]), // 0x4E LD [IX+L],B
    op("LD", &[IndIyL, B]), // 0x4F LD [IY+L],B
    op("LD", &[L, DispIx]), // 0x50 LD L,[IX+dd]
    op("LD", &[L, DispIy]), // 0x51 LD L,[IY+dd]
    op("LD", &[L, IndIxL]), // 0x52 LD L,[IX+L]
    op("LD", &[L, IndIyL]), // 0x53 LD L,[IY+L]
    op("LD", &[DispIx, L]), // 0x54 LD [IX+dd],L
    op("LD", &[DispIy, L]), // 0x55 LD [IY+dd],L
    op("LD", &[IndIxL, L]), // 0x56 LD [IX+L],L
    op("LD", &[IndIyL, L]), // 0x57 LD [IY+L],L
    op("LD", &[H, DispIx]), // 0x58 LD H,[IX+dd]
    op("LD", &[H, DispIy]), // 0x59 LD H,[IY+dd]
    op("LD", &[H, IndIxL]), // 0x5A LD H,[IX+L]
    op("LD", &[H, IndIyL]), // 0x5B LD H,[IY+L]
    op("LD", &[DispIx, H]), // 0x5C LD [IX+dd],H
    op("LD", &[DispIy, H]), // 0x5D LD [IY+dd],H
    op("LD", &[IndIxL, H]), // 0x5E LD [IX+L],H
    op("LD", &[IndIyL, H]), // 0x5F LD [IY+L],H
    op("LD", &[IndHl, DispIx]), // 0x60 LD [HL],[IX+dd]
    op("LD", &[IndHl, DispIy]), // 0x61 LD [HL],[IY+dd]
    op("LD", &[IndHl, IndIxL]), // 0x62 LD [HL],[IX+L]
    op("LD", &[IndHl, IndIyL]), // 0x63 LD [HL],[IY+L]
    UNDEFINED, // 0x64
    UNDEFINED, // 0x65
    UNDEFINED, // 0x66
    UNDEFINED, // 0x67
    op("LD", &[IndIx, DispIx]), // 0x68 LD [IX],[IX+dd]
    op("LD", &[IndIx, DispIy]), // 0x69 LD [IX],[IY+dd]
    op("LD", &[IndIx, IndIxL]), // 0x6A LD [IX],[IX+L]
    op("LD", &[IndIx, IndIyL]), // 0x6B LD [IX],[IY+L]
    UNDEFINED, // 0x6C
    UNDEFINED, // 0x6D
    UNDEFINED, // 0x6E
    UNDEFINED, // 0x6F
    op("LD", &[IndIy, DispIx]), // 0x70 LD [IY],[IX+dd]
    op("LD", &[IndIy, DispIy]), // 0x71 LD [IY],[IY+dd]
    op("LD", &[IndIy, IndIxL]), // 0x72 LD [IY],[IX+L]
    op("LD", &[IndIy, IndIyL]), // 0x73 LD [IY],[IY+L]
    UNDEFINED, // 0x74
    UNDEFINED, // 0x75
    UNDEFINED, // 0x76
    UNDEFINED, // 0x77
    UNDEFINED, // 0x78
    UNDEFINED, // 0x79
    UNDEFINED, // 0x7A
    UNDEFINED, // 0x7B
    UNDEFINED, // 0x7C
    UNDEFINED, // 0x7D
    UNDEFINED, // 0x7E
    UNDEFINED, // 0x7F
    op("SLA", &[A]), // 0x80 SLA A
    op("SLA", &[B]), // 0x81 SLA B
    op("SLA", &[BrPage]), // 0x82 SLA [BR:ll]
    op("SLA", &[IndHl]), // 0x83 SLA [HL]
    op("SLL", &[A]), // 0x84 SLL A
    op("SLL", &[B]), // 0x85 SLL B
    op("SLL", &[BrPage]), // 0x86 SLL [BR:ll]
    op("SLL", &[IndHl]), // 0x87 SLL [HL]
    op("SRA", &[A]), // 0x88 SRA A
    op("SRA", &[B]), // 0x89 SRA B
    op("SRA", &[BrPage]), // 0x8A SRA [BR:ll]
    op("SRA", &[IndHl]), // 0x8B SRA [HL]
    op("SRL", &[A]), // 0x8C SRL A
    op("SRL", &[B]), // 0x8D SRL B
    op("SRL", &[BrPage]), // 0x8E SRL [BR:ll]
    op("SRL", &[IndHl]), // 0x8F SRL [HL]
    op("RL", &[A]), // 0x90 RL A
    op("RL", &[B]), // 0x91 RL B
    op("RL", &[BrPage]), // 0x92 RL [BR:ll]
    op("RL", &[IndHl]), // 0x93 RL [HL]
    op("RLC", &[A]), // 0x94 RLC A
    op("RLC", &[B]), // 0x95 RLC B
    op("RLC", &[BrPage]), // 0x96 RLC [BR:ll]
    op("RLC", &[IndHl]), // 0x97 RLC [HL]
    op("RR", &[A]), // 0x98 RR A
    op("RR", &[B]), // 0x99 RR B
    op("RR", &[BrPage]), // 0x9A RR [BR:ll]
    op("RR", &[IndHl]), // 0x9B RR [HL]
    op("RRC", &[A]), // 0x9C RRC A
    op("RRC", &[B]), // 0x9D RRC B
    op("RRC", &[BrPage]), // 0x9E RRC [BR:ll]
    op("RRC", &[IndHl]), // 0x9F RRC [HL]
    op("CPL", &[A]), // 0xA0 CPL A
    op("CPL", &[B]), // 0xA1 CPL B
    op("CPL", &[BrPage]), // 0xA2 CPL [BR:ll]
    op("CPL", &[IndHl]), // 0xA3 CPL [HL]
    op("NEG", &[A]), // 0xA4 NEG A
    op("NEG", &[B]), // 0xA5 NEG B
    op("NEG", &[BrPage]), // 0xA6 NEG [BR:ll]
    op("NEG", &[IndHl]), // 0xA7 NEG [HL]
    op("SEP", &[]), // 0xA8 SEP
    UNDEFINED, // 0xA9
    UNDEFINED, // 0xAA
    UNDEFINED, // 0xAB
    UNDEFINED, // 0xAC
    UNDEFINED, // 0xAD
    UNDEFINED, // 0xAE
    UNDEFINED, // 0xAF
    op("AND", &[B, Imm8]), // 0xB0 AND B,#nn
    op("AND", &[L, Imm8]), // 0xB1 AND L,#nn
    op("AND", &[H, Imm8]), // 0xB2 AND H,#nn
    UNDEFINED, // 0xB3
    op("OR", &[B, Imm8]), // 0xB4 OR B,#nn
    op("OR", &[L, Imm8]), // 0xB5 OR L,#nn
    op("OR", &[H, Imm8]), // 0xB6 OR H,#nn
    UNDEFINED, // 0xB7
    op("XOR", &[B, Imm8]), // 0xB8 XOR B,#nn
    op("XOR", &[L, Imm8]), // 0xB9 XOR L,#nn
    op("XOR", &[H, Imm8]), // 0xBA XOR H,#nn
    UNDEFINED, // 0xBB
    op("CP", &[B, Imm8]), // 0xBC CP B,#nn
    op("CP", &[L, Imm8]), // 0xBD CP L,#nn
    op("CP", &[H, Imm8]), // 0xBE CP H,#nn
    op("CP", &[Br, Imm8]), // 0xBF CP BR,#nn
    op("LD", &[A, Br]), // 0xC0 LD A,BR
    op("LD", &[A, Sc]), // 0xC1 LD A,SC
    op("LD", &[Br, A]), // 0xC2 LD BR,A
    op("LD", &[Sc, A]), // 0xC3 LD SC,A
    op("LD", &[Nb, Imm8]), // 0xC4 LD NB,#nn
    op("LD", &[Ep, Imm8]), // 0xC5 LD EP,#nn
    op("LD", &[Xp, Imm8]), // 0xC6 LD XP,#nn
    op("LD", &[Yp, Imm8]), // 0xC7 LD YP,#nn
    op("LD", &[A, Nb]), // 0xC8 LD A,NB
    op("LD", &[A, Ep]), // 0xC9 LD A,EP
    op("LD", &[A, Xp]), // 0xCA LD A,XP
    op("LD", &[A, Yp]), // 0xCB LD A,YP
    op("LD", &[Nb, A]), // 0xCC LD NB,A
    op("LD", &[Ep, A]), // 0xCD LD EP,A
    op("LD", &[Xp, A]), // 0xCE LD XP,A
    op("LD", &[Yp, A]), // 0xCF LD YP,A
    op("LD", &[A, Abs16]), // 0xD0 LD A,[hhll]
    op("LD", &[B, Abs16]), // 0xD1 LD B,[hhll]
    op("LD", &[L, Abs16]), // 0xD2 LD L,[hhll]
    op("LD", &[H, Abs16]), // 0xD3 LD H,[hhll]
    op("LD", &[Abs16, A]), // 0xD4 LD [hhll],A
    op("LD", &[Abs16, B]), // 0xD5 LD [hhll],B
    op("LD", &[Abs16, L]), // 0xD6 LD [hhll],L
    op("LD", &[Abs16, H]), // 0xD7 LD [hhll],H
    op("MLT", &[]), // 0xD8 MLT
    op("DIV", &[]), // 0xD9 DIV
    UNDEFINED, // 0xDA
    UNDEFINED, // 0xDB
    UNDEFINED, // 0xDC
    UNDEFINED, // 0xDD
    UNDEFINED, // 0xDE
    UNDEFINED, // 0xDF
    cond("JRS", LessThan, &[Rel8]), // 0xE0 JRS LT,rr
    cond("JRS", LessEqual, &[Rel8]), // 0xE1 JRS LE,rr
    cond("JRS", GreaterThan, &[Rel8]), // 0xE2 JRS GT,rr
    cond("JRS", GreaterEqual, &[Rel8]), // 0xE3 JRS GE,rr
    cond("JRS", Overflow, &[Rel8]), // 0xE4 JRS V,rr
    cond("JRS", NotOverflow, &[Rel8]), // 0xE5 JRS NV,rr
    cond("JRS", Positive, &[Rel8]), // 0xE6 JRS P,rr
    cond("JRS", Minus, &[Rel8]), // 0xE7 JRS M,rr
    cond("JRS", Flag0, &[Rel8]), // 0xE8 JRS F0,rr
    cond("JRS", Flag1, &[Rel8]), // 0xE9 JRS F1,rr
    cond("JRS", Flag2, &[Rel8]), // 0xEA JRS F2,rr
    cond("JRS", Flag3, &[Rel8]), // 0xEB JRS F3,rr
    cond("JRS", NotFlag0, &[Rel8]), // 0xEC JRS NF0,rr
    cond("JRS", NotFlag1, &[Rel8]), // 0xED JRS NF1,rr
    cond("JRS", NotFlag2, &[Rel8]), // 0xEE JRS NF2,rr
    cond("JRS", NotFlag3, &[Rel8]), // 0xEF JRS NF3,rr
    cond("CARS", LessThan, &[Rel8]), // 0xF0 CARS LT,rr
    cond("CARS", LessEqual, &[Rel8]), // 0xF1 CARS LE,rr
    cond("CARS", GreaterThan, &[Rel8]), // 0xF2 CARS GT,rr
    cond("CARS", GreaterEqual, &[Rel8]), // 0xF3 CARS GE,rr
    cond("CARS", Overflow, &[Rel8]), // 0xF4 CARS V,rr
    cond("CARS", NotOverflow, &[Rel8]), // 0xF5 CARS NV,rr
    cond("CARS", Positive, &[Rel8]), // 0xF6 CARS P,rr
    cond("CARS", Minus, &[Rel8]), // 0xF7 CARS M,rr
    cond("CARS", Flag0, &[Rel8]), // 0xF8 CARS F0,rr
    cond("CARS", Flag1, &[Rel8]), // 0xF9 CARS F1,rr
    cond("CARS", Flag2, &[Rel8]), // 0xFA CARS F2,rr
    cond("CARS", Flag3, &[Rel8]), // 0xFB CARS F3,rr
    cond("CARS", NotFlag0, &[Rel8]), // 0xFC CARS NF0,rr
    cond("CARS", NotFlag1, &[Rel8]), // 0xFD CARS NF1,rr
    cond("CARS", NotFlag2, &[Rel8]), // 0xFE CARS NF2,rr
    cond("CARS", NotFlag3, &[Rel8]), // 0xFF CARS NF3,rr
];

/// Extension table selected by the `0xCF` prefix.
pub static EXTENDED_TABLE_CF: [OpcodeEntry; 256] = [
    op("ADD", &[Ba, Ba]), // 0x00 ADD BA,BA
    op("ADD", &[Ba, Hl]), // 0x01 ADD BA,HL
    op("ADD", &[Ba, Ix]), // 0x02 ADD BA,IX
    op("ADD", &[Ba, Iy]), // 0x03 ADD BA,IY
    op("ADC", &[Ba, Ba]), // 0x04 ADC BA,BA
    op("ADC", &[Ba, Hl]), // 0x05 ADC BA,HL
    op("ADC", &[Ba, Ix]), // 0x06 ADC BA,IX
    op("ADC", &[Ba, Iy]), // 0x07 ADC BA,IY
    op("SUB", &[Ba, Ba]), // 0x08 SUB BA,BA
    op("SUB", &[Ba, Hl]), // 0x09 SUB BA,HL
    op("SUB", &[Ba, Ix]), // 0x0A SUB BA,IX
    op("SUB", &[Ba, Iy]), // 0x0B SUB BA,IY
    op("SBC", &[Ba, Ba]), // 0x0C SBC BA,BA
    op("SBC", &[Ba, Hl]), // 0x0D SBC BA,HL
    op("SBC", &[Ba, Ix]), // 0x0E SBC BA,IX
    op("SBC", &[Ba, Iy]), // 0x0F SBC BA,IY
    UNDEFINED, // 0x10
    UNDEFINED, // 0x11
    UNDEFINED, // 0x12
    UNDEFINED, // 0x13
    UNDEFINED, // 0x14
    UNDEFINED, // 0x15
    UNDEFINED, // 0x16
    UNDEFINED, // 0x17
    op("CP", &[Ba, Ba]), // 0x18 CP BA,BA
    op("CP", &[Ba, Hl]), // 0x19 CP BA,HL
    op("CP", &[Ba, Ix]), // 0x1A CP BA,IX
    op("CP", &[Ba, Iy]), // 0x1B CP BA,IY
    UNDEFINED, // 0x1C
    UNDEFINED, // 0x1D
    UNDEFINED, // 0x1E
    UNDEFINED, // 0x1F
    op("ADD", &[Hl, Ba]), // 0x20 ADD HL,BA
    op("ADD", &[Hl, Hl]), // 0x21 ADD HL,HL
    op("ADD", &[Hl, Ix]), // 0x22 ADD HL,IX
    op("ADD", &[Hl, Iy]), // 0x23 ADD HL,IY
    op("ADC", &[Hl, Ba]), // 0x24 ADC HL,BA
    op("ADC", &[Hl, Hl]), // 0x25 ADC HL,HL
    op("ADC", &[Hl, Ix]), // 0x26 ADC HL,IX
    op("ADC", &[Hl, Iy]), // 0x27 ADC HL,IY
    op("SUB", &[Hl, Ba]), // 0x28 SUB HL,BA
    op("SUB", &[Hl, Hl]), // 0x29 SUB HL,HL
    op("SUB", &[Hl, Ix]), // 0x2A SUB HL,IX
    op("SUB", &[Hl, Iy]), // 0x2B SUB HL,IY
    op("SBC", &[Hl, Ba]), // 0x2C SBC HL,BA
    op("SBC", &[Hl, Hl]), // 0x2D SBC HL,HL
    op("SBC", &[Hl, Ix]), // 0x2E SBC HL,IX
    op("SBC", &[Hl, Iy]), // 0x2F SBC HL,IY
    UNDEFINED, // 0x30
    UNDEFINED, // 0x31
    UNDEFINED, // 0x32
    UNDEFINED, // 0x33
    UNDEFINED, // 0x34
    UNDEFINED, // 0x35
    UNDEFINED, // 0x36
    UNDEFINED, // 0x37
    op("CP", &[Hl, Ba]), // 0x38 CP HL,BA
    op("CP", &[Hl, Hl]), // 0x39 CP HL,HL
    op("CP", &[Hl, Ix]), // 0x3A CP HL,IX
    op("CP", &[Hl, Iy]), // 0x3B CP HL,IY
    UNDEFINED, // 0x3C
    UNDEFINED, // 0x3D
    UNDEFINED, // 0x3E
    UNDEFINED, // 0x3F
    op("ADD", &[Ix, Ba]), // 0x40 ADD IX,BA
    op("ADD", &[Ix, Hl]), // 0x41 ADD IX,HL
    op("ADD", &[Iy, Ba]), // 0x42 ADD IY,BA
    op("ADD", &[Iy, Hl]), // 0x43 ADD IY,HL
    op("ADD", &[Sp, Ba]), // 0x44 ADD SP,BA
    op("ADD", &[Sp, Hl]), // 0x45 ADD SP,HL
    UNDEFINED, // 0x46
    UNDEFINED, // 0x47
    op("SUB", &[Ix, Ba]), // 0x48 SUB IX,BA
    op("SUB", &[Ix, Hl]), // 0x49 SUB IX,HL
    op("SUB", &[Iy, Ba]), // 0x4A SUB IY,BA
    op("SUB", &[Iy, Hl]), // 0x4B SUB IY,HL
    op("SUB", &[Sp, Ba]), // 0x4C SUB SP,BA
    op("SUB", &[Sp, Hl]), // 0x4D SUB SP,HL
    UNDEFINED, // 0x4E
    UNDEFINED, // 0x4F
    UNDEFINED, // 0x50
    UNDEFINED, // 0x51
    UNDEFINED, // 0x52
    UNDEFINED, // 0x53
    UNDEFINED, // 0x54
    UNDEFINED, // 0x55
    UNDEFINED, // 0x56
    UNDEFINED, // 0x57
    UNDEFINED, // 0x58
    UNDEFINED, // 0x59
    UNDEFINED, // 0x5A
    UNDEFINED, // 0x5B
    op("CP", &[Sp, Ba]), // 0x5C CP SP,BA
    op("CP", &[Sp, Hl]), // 0x5D CP SP,HL
    UNDEFINED, // 0x5E
    UNDEFINED, // 0x5F
    op("ADC", &[Ba, Imm16]), // 0x60 ADC BA,#mmnn
    op("ADC", &[Hl, Imm16]), // 0x61 ADC HL,#mmnn
    op("SBC", &[Ba, Imm16]), // 0x62 SBC BA,#mmnn
    op("SBC", &[Hl, Imm16]), // 0x63 SBC HL,#mmnn
    UNDEFINED, // 0x64
    UNDEFINED, // 0x65
    UNDEFINED, // 0x66
    UNDEFINED, // 0x67
    op("ADD", &[Sp, Imm16]), // 0x68 ADD SP,#mmnn
    UNDEFINED, // 0x69
    op("SUB", &[Sp, Imm16]), // 0x6A SUB SP,#mmnn
    UNDEFINED, // 0x6B
    op("CP", &[Sp, Imm16]), // 0x6C CP SP,#mmnn
    UNDEFINED, // 0x6D
    op("LD", &[Sp, Imm16]), // 0x6E LD SP,#mmnn
    UNDEFINED, // 0x6F
    op("LD", &[Ba, DispSp]), // 0x70 LD BA,[SP+dd]
    op("LD", &[Hl, DispSp]), // 0x71 LD HL,[SP+dd]
    op("LD", &[Ix, DispSp]), // 0x72 LD IX,[SP+dd]
    op("LD", &[Iy, DispSp]), // 0x73 LD IY,[SP+dd]
    op("LD", &[DispSp, Ba]), // 0x74 LD [SP+dd],BA
    op("LD", &[DispSp, Hl]), // 0x75 LD [SP+dd],HL
    op("LD", &[DispSp, Ix]), // 0x76 LD [SP+dd],IX
    op("LD", &[DispSp, Iy]), // 0x77 LD [SP+dd],IY
    op("LD", &[Sp, Abs16]), // 0x78 LD SP,[hhll]
    UNDEFINED, // 0x79
    UNDEFINED, // 0x7A
    UNDEFINED, // 0x7B
    op("LD", &[Abs16, Sp]), // 0x7C LD [hhll],SP
    UNDEFINED, // 0x7D
    UNDEFINED, // 0x7E
    UNDEFINED, // 0x7F
    UNDEFINED, // 0x80
    UNDEFINED, // 0x81
    UNDEFINED, // 0x82
    UNDEFINED, // 0x83
    UNDEFINED, // 0x84
    UNDEFINED, // 0x85
    UNDEFINED, // 0x86
    UNDEFINED, // 0x87
    UNDEFINED, // 0x88
    UNDEFINED, // 0x89
    UNDEFINED, // 0x8A
    UNDEFINED, // 0x8B
    UNDEFINED, // 0x8C
    UNDEFINED, // 0x8D
    UNDEFINED, // 0x8E
    UNDEFINED, // 0x8F
    UNDEFINED, // 0x90
    UNDEFINED, // 0x91
    UNDEFINED, // 0x92
    UNDEFINED, // 0x93
    UNDEFINED, // 0x94
    UNDEFINED, // 0x95
    UNDEFINED, // 0x96
    UNDEFINED, // 0x97
    UNDEFINED, // 0x98
    UNDEFINED, // 0x99
    UNDEFINED, // 0x9A
    UNDEFINED, // 0x9B
    UNDEFINED, // 0x9C
    UNDEFINED, // 0x9D
    UNDEFINED, // 0x9E
    UNDEFINED, // 0x9F
    UNDEFINED, // 0xA0
    UNDEFINED, // 0xA1
    UNDEFINED, // 0xA2
    UNDEFINED, // 0xA3
    UNDEFINED, // 0xA4
    UNDEFINED, // 0xA5
    UNDEFINED, // 0xA6
    UNDEFINED, // 0xA7
    UNDEFINED, // 0xA8
    UNDEFINED, // 0xA9
    UNDEFINED, // 0xAA
    UNDEFINED, // 0xAB
    UNDEFINED, // 0xAC
    UNDEFINED, // 0xAD
    UNDEFINED, // 0xAE
    UNDEFINED, // 0xAF
    op("PUSH", &[A]), // 0xB0 PUSH A
    op("PUSH", &[B]), // 0xB1 PUSH B
    op("PUSH", &[L]), // 0xB2 PUSH L
    op("PUSH", &[H]), // 0xB3 PUSH H
    op("POP", &[A]), // 0xB4 POP A
    op("POP", &[B]), // 0xB5 POP B
    op("POP", &[L]), // 0xB6 POP L
    op("POP", &[H]), // 0xB7 POP H
    op("PUSH", &[All]), // 0xB8 PUSH ALL
    op("PUSH", &[Ale]), // 0xB9 PUSH ALE
    UNDEFINED, // 0xBA
    UNDEFINED, // 0xBB
    op("POP", &[All]), // 0xBC POP ALL
    op("POP", &[Ale]), // 0xBD POP ALE
    UNDEFINED, // 0xBE
    UNDEFINED, // 0xBF
    op("LD", &[Ba, IndHl]), // 0xC0 LD BA,[HL]
    op("LD", &[Hl, IndHl]), // 0xC1 LD HL,[HL]
    op("LD", &[Ix, IndHl]), // 0xC2 LD IX,[HL]
    op("LD", &[Iy, IndHl]), // 0xC3 LD IY,[HL]
    op("LD", &[IndHl, Ba]), // 0xC4 LD [HL],BA
    op("LD", &[IndHl, Hl]), // 0xC5 LD [HL],HL
    op("LD", &[IndHl, Ix]), // 0xC6 LD [HL],IX
    op("LD", &[IndHl, Iy]), // 0xC7 LD [HL],IY
    UNDEFINED, // 0xC8
    UNDEFINED, // 0xC9
    UNDEFINED, // 0xCA
    UNDEFINED, // 0xCB
    UNDEFINED, // 0xCC
    UNDEFINED, // 0xCD
    UNDEFINED, // 0xCE
    UNDEFINED, // 0xCF
    op("LD", &[Ba, IndIx]), // 0xD0 LD BA,[IX]
    op("LD", &[Hl, IndIx]), // 0xD1 LD HL,[IX]
    op("LD", &[Ix, IndIx]), // 0xD2 LD IX,[IX]
    op("LD", &[Iy, IndIx]), // 0xD3 LD IY,[IX]
    op("LD", &[IndIx, Ba]), // 0xD4 LD [IX],BA
    op("LD", &[IndIx, Hl]), // 0xD5 LD [IX],HL
    op("LD", &[IndIx, Ix]), // 0xD6 LD [IX],IX
    op("LD", &[IndIx, Iy]), // 0xD7 LD [IX],IY
    op("LD", &[Ba, IndIy]), // 0xD8 LD BA,[IY]
    op("LD", &[Hl, IndIy]), // 0xD9 LD HL,[IY]
    op("LD", &[Ix, IndIy]), // 0xDA LD IX,[IY]
    op("LD", &[Iy, IndIy]), // 0xDB LD IY,[IY]
    op("LD", &[IndIy, Ba]), // 0xDC LD [IY],BA
    op("LD", &[IndIy, Hl]), // 0xDD LD [IY],HL
    op("LD", &[IndIy, Ix]), // 0xDE LD [IY],IX
    op("LD", &[IndIy, Iy]), // 0xDF LD [IY],IY
    op("LD", &[Ba, Ba]), // 0xE0 LD BA,BA
    op("LD", &[Ba, Hl]), // 0xE1 LD BA,HL
    op("LD", &[Ba, Ix]), // 0xE2 LD BA,IX
    op("LD", &[Ba, Iy]), // 0xE3 LD BA,IY
    op("LD", &[Hl, Ba]), // 0xE4 LD HL,BA
    op("LD", &[Hl, Hl]), // 0xE5 LD HL,HL
    op("LD", &[Hl, Ix]), // 0xE6 LD HL,IX
    op("LD", &[Hl, Iy]), // 0xE7 LD HL,IY
    op("LD", &[Ix, Ba]), // 0xE8 LD IX,BA
    op("LD", &[Ix, Hl]), // 0xE9 LD IX,HL
    op("LD", &[Ix, Ix]), // 0xEA LD IX,IX
    op("LD", &[Ix, Iy]), // 0xEB LD IX,IY
    op("LD", &[Iy, Ba]), // 0xEC LD IY,BA
    op("LD", &[Iy, Hl]), // 0xED LD IY,HL
    op("LD", &[Iy, Ix]), // 0xEE LD IY,IX
    op("LD", &[Iy, Iy]), // 0xEF LD IY,IY
    op("LD", &[Sp, Ba]), // 0xF0 LD SP,BA
    op("LD", &[Sp, Hl]), // 0xF1 LD SP,HL
    op("LD", &[Sp, Ix]), // 0xF2 LD SP,IX
    op("LD", &[Sp, Iy]), // 0xF3 LD SP,IY
    op("LD", &[Hl, Sp]), // 0xF4 LD HL,SP
    op("LD", &[Hl, Pc]), // 0xF5 LD HL,PC
    UNDEFINED, // 0xF6
    UNDEFINED, // 0xF7
    op("LD", &[Ba, Sp]), // 0xF8 LD BA,SP
    op("LD", &[Ba, Pc]), // 0xF9 LD BA,PC
    op("LD", &[Ix, Sp]), // 0xFA LD IX,SP
    UNDEFINED, // 0xFB
    UNDEFINED, // 0xFC
    UNDEFINED, // 0xFD
    op("LD", &[Iy, Sp]), // 0xFE LD IY,SP
    UNDEFINED, // 0xFF
];

#[cfg(test)]
mod tests {
    use super::*;

    fn defined(table: &[OpcodeEntry; 256]) -> usize {
        table.iter().filter(|entry| !entry.is_undefined()).count()
    }

    #[test]
    fn test_prefixes_point_at_extension_tables() {
        assert!(matches!(INSTRUCTION_TABLE[0xCE], OpcodeEntry::Prefix(_)));
        assert!(matches!(INSTRUCTION_TABLE[0xCF], OpcodeEntry::Prefix(_)));
        assert!(INSTRUCTION_TABLE[0xFE].is_undefined());
    }

    #[test]
    fn test_table_population() {
        assert_eq!(defined(&INSTRUCTION_TABLE), 255);
        assert!(defined(&EXTENDED_TABLE_CE) > 200);
        assert!(defined(&EXTENDED_TABLE_CF) > 100);
    }

    #[test]
    fn test_lookup_extended() {
        let (length, meta) = lookup(&[0xCE, 0xC4, 0x05]).unwrap();
        assert_eq!(length, 2);
        assert_eq!(meta.mnemonic, "LD");
        assert_eq!(meta.args, &[Nb, Imm8]);
    }

    #[test]
    fn test_lookup_conditional() {
        let (length, meta) = lookup(&[0xE7, 0x10]).unwrap();
        assert_eq!(length, 1);
        assert_eq!(meta.mnemonic, "JRS");
        assert_eq!(meta.condition, Some(NotZero));
        assert_eq!(meta.operand_size(), 1);
    }

    #[test]
    fn test_lookup_dead_ends() {
        assert!(lookup(&[0xFE]).is_none());
        assert!(lookup(&[0xCE]).is_none());
        assert!(lookup(&[0xCF, 0xFF]).is_none());
        assert!(lookup(&[]).is_none());
    }

    #[test]
    fn test_operand_sizes() {
        assert_eq!(Rel16.operand_size(), 2);
        assert_eq!(BrPage.operand_size(), 1);
        assert_eq!(IndIxL.operand_size(), 0);
        assert_eq!(Nb.register_name(), Some("NB"));
        assert_eq!(Abs16.register_name(), None);
    }
}
