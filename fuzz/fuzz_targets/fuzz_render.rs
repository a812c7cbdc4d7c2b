//! Fuzz target for the bank renderer.
//!
//! This target feeds arbitrary bytes and classification words to the
//! renderer to find edge cases and crashes in instruction decoding.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use minimon_trace::{render_bank, BankView, SymbolTable, TraceAccess, TracerConfig};

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    start: u32,
    bytes: Vec<u8>,
    trace: Vec<u32>,
    labels: Vec<u16>,
    max_data_words: u8,
    max_data_bytes: u8,
}

fuzz_target!(|input: FuzzInput| {
    // One bank at most
    if input.bytes.len() > 0x8000 {
        return;
    }

    let start = input.start & 0x1F_8000;
    let trace: Vec<TraceAccess> = input.trace.iter().map(|&raw| TraceAccess::from_raw(raw)).collect();

    let mut symbols = SymbolTable::new();
    for &offset in &input.labels {
        symbols.insert(start + offset as u32);
    }

    let config = TracerConfig {
        max_data_words: input.max_data_words.max(1) as usize,
        max_data_bytes: input.max_data_bytes.max(1) as usize,
        ..TracerConfig::default()
    };

    let view = BankView {
        start,
        bytes: &input.bytes,
        trace: &trace,
    };
    let rows = render_bank(view, &symbols, &config);

    // Rows tile the bank: contiguous, non-empty, covering every byte
    let mut expected = start;
    for row in &rows {
        assert_eq!(row.address, expected);
        assert!(!row.is_empty());
        expected = row.end();
    }
    assert_eq!(expected, start + input.bytes.len() as u32);
});
