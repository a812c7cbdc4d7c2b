//! # Pokemon mini Code/Data Tracer
//!
//! A tracing disassembler for the S1C88 CPU of the Nintendo Pokemon mini.
//!
//! The execution core reports every memory access it performs. Each address
//! accumulates a classification word describing how it has been used
//! (instruction, operand, data word, stack, branch target ...), and the
//! address space is split into banks that are disassembled on demand using
//! that classification: bytes that have executed are decoded as code, bytes
//! that have only been read as data are shown as `DW`/`DB` runs.
//!
//! ## Quick Start
//!
//! ```rust
//! use minimon_trace::{BankId, TraceAccess, Tracer};
//!
//! let mut tracer = Tracer::new();
//!
//! // Raw cartridge dump: "PM" magic, loaded at 0x2100
//! let mut image = b"PM".to_vec();
//! image.resize(0x100, 0xFF);
//! image[0x10] = 0xF8; // RET at 0x2110
//! tracer.load_cartridge(&image).unwrap();
//!
//! tracer.classify(0x2110, TraceAccess::INSTRUCTION | TraceAccess::READ, 0xF8);
//!
//! let rows = tracer.render(BankId::Rom(0)).unwrap();
//! let ret = rows.iter().find(|row| row.address == 0x2110).unwrap();
//! assert_eq!(ret.mnemonic, "RET");
//! ```
//!
//! ## Modules
//!
//! - `access` - Classification flags
//! - `memory` - Address map and memory image
//! - `opcodes` - S1C88 opcode tables
//! - `classifier` - Per-address classification store
//! - `bank` - Bank registry
//! - `disassembler` - Bank renderer and listing formatter
//! - `symbols` - Branch-target labels
//! - `notify` - Bank change subscriptions
//! - `tracer` - The tracer tying it all together

pub mod access;
pub mod bank;
pub mod classifier;
pub mod config;
pub mod disassembler;
pub mod memory;
pub mod notify;
pub mod opcodes;
pub mod symbols;
pub mod tracer;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use access::{TraceAccess, TraceOverride};
pub use bank::{BankId, BankSummary};
pub use config::TracerConfig;
pub use disassembler::{render_bank, BankView, Operand, Row, RowKind};
pub use memory::{MemoryBus, MemoryImage};
pub use notify::SubscriptionId;
pub use opcodes::{OpcodeMetadata, INSTRUCTION_TABLE};
pub use symbols::SymbolTable;
pub use tracer::Tracer;

use thiserror::Error;

/// Errors reported by the tracer.
///
/// Decoding itself never fails; these cover bad inputs from the host.
#[derive(Debug, Error)]
pub enum TracerError {
    /// A bank id string did not name a bank.
    #[error("unknown bank: {0}")]
    UnknownBank(String),

    #[error("cartridge image is empty")]
    CartridgeEmpty,

    /// BIOS image larger than 4KB; carries the offending size.
    #[error("BIOS image is {0} bytes, expected at most 4096")]
    BiosTooLarge(usize),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to parse configuration: {0}")]
    Config(#[from] serde_json::Error),
}
