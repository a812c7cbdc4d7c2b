//! Property-based tests for classification and bank rendering.
//!
//! These tests verify that:
//! - Rows tile a bank exactly, whatever the bytes and classification
//! - Rendering twice without a change yields the same rows
//! - Reads merge and writes replace, except in cartridge space

use minimon_trace::classifier::{AccessMap, Recorded};
use minimon_trace::{render_bank, BankId, BankView, SymbolTable, TraceAccess, Tracer, TracerConfig};
use proptest::prelude::*;

/// Classification words a real core produces for a byte.
fn trace_word() -> impl Strategy<Value = TraceAccess> {
    prop_oneof![
        Just(TraceAccess::NONE),
        Just(TraceAccess::INSTRUCTION),
        Just(TraceAccess::IMMEDIATE),
        Just(TraceAccess::DATA),
        Just(TraceAccess::DATA | TraceAccess::WORD_LO),
        Just(TraceAccess::DATA | TraceAccess::WORD_HI),
        Just(TraceAccess::WORD_LO | TraceAccess::VECTOR),
        Just(TraceAccess::INSTRUCTION | TraceAccess::BRANCH_TARGET),
    ]
}

fn bank_contents() -> impl Strategy<Value = (Vec<u8>, Vec<TraceAccess>)> {
    (1usize..512).prop_flat_map(|len| {
        (
            prop::collection::vec(any::<u8>(), len),
            prop::collection::vec(trace_word(), len),
        )
    })
}

fn access_kind() -> impl Strategy<Value = TraceAccess> {
    (trace_word(), any::<bool>()).prop_map(|(kind, write)| {
        if write {
            kind | TraceAccess::WRITE
        } else {
            kind | TraceAccess::READ
        }
    })
}

proptest! {
    #[test]
    fn prop_rows_tile_the_bank(
        (bytes, trace) in bank_contents(),
        start in prop_oneof![Just(0x1000u32), Just(0x8000u32), Just(0x1F8000u32)],
        labels in prop::collection::vec(0usize..512, 0..8),
    ) {
        let mut symbols = SymbolTable::new();
        for offset in labels {
            symbols.insert(start + offset as u32);
        }

        let view = BankView { start, bytes: &bytes, trace: &trace };
        let rows = render_bank(view, &symbols, &TracerConfig::default());

        let mut expected = start;
        for row in &rows {
            prop_assert_eq!(row.address, expected);
            prop_assert!(!row.is_empty());
            prop_assert_eq!(&row.raw[..], &bytes[(row.address - start) as usize..(row.end() - start) as usize]);
            expected = row.end();
        }
        prop_assert_eq!(expected, start + bytes.len() as u32);
    }

    #[test]
    fn prop_data_rows_respect_limits(
        (bytes, trace) in bank_contents(),
        max_words in 1usize..8,
        max_bytes in 1usize..16,
    ) {
        let config = TracerConfig { max_data_words: max_words, max_data_bytes: max_bytes, ..TracerConfig::default() };
        let view = BankView { start: 0x1000, bytes: &bytes, trace: &trace };

        for row in render_bank(view, &SymbolTable::new(), &config) {
            match row.mnemonic {
                "DW" => prop_assert!(row.operands.len() <= max_words),
                "DB" => prop_assert!(row.len() <= max_bytes),
                _ => {}
            }
        }
    }
}

proptest! {
    // Each case builds a whole tracer
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_render_is_idempotent(
        accesses in prop::collection::vec((0x1000u32..0x2000, access_kind()), 0..64),
    ) {
        let mut tracer = Tracer::new();
        for (address, kind) in accesses {
            tracer.classify(address, kind, 0);
        }

        let first = tracer.render(BankId::Ram).unwrap().to_vec();
        prop_assert!(!tracer.bank(BankId::Ram).unwrap().is_dirty());
        let second = tracer.render(BankId::Ram).unwrap().to_vec();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reads_merge_writes_replace(
        address in prop_oneof![0u32..0x2000, 0x2100u32..0x200000],
        before in trace_word(),
        kind in access_kind(),
    ) {
        let mut map = AccessMap::new();
        map.force(address, before);

        let result = map.record(address, kind);
        let stored = map.get(address);

        if kind.is_write() {
            if address >= 0x2100 {
                prop_assert_eq!(result, Recorded::Ignored);
                prop_assert_eq!(stored, before);
            } else {
                prop_assert_eq!(stored, kind.persistent());
            }
        } else {
            prop_assert_eq!(stored, before | kind.persistent());
        }

        prop_assert!(!stored.intersects(TraceAccess::DIRECTION));
    }

    #[test]
    fn prop_change_dirties_exactly_one_bank(
        address in prop_oneof![0u32..0x2000, 0x2100u32..0x20000],
        kind in access_kind(),
    ) {
        let mut tracer = Tracer::new();
        tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();
        let ids: Vec<BankId> = tracer.pages().into_iter().map(|(id, _)| id).collect();
        for &id in &ids {
            tracer.render(id).unwrap();
        }

        let before = tracer.trace_at(address);
        tracer.classify(address, kind, 0);
        let changed = tracer.trace_at(address) != before;

        let dirty: Vec<BankId> = tracer
            .banks()
            .iter()
            .filter(|bank| bank.is_dirty())
            .map(|bank| bank.id())
            .collect();

        if changed {
            prop_assert_eq!(dirty, vec![tracer.bank_for(address).unwrap()]);
        } else {
            prop_assert!(dirty.is_empty());
        }
    }
}
