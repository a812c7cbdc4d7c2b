//! Integration tests for access classification and dirty tracking

use minimon_trace::{BankId, TraceAccess, TraceOverride, Tracer};

/// A 128KB full cartridge image: ROM banks 0 through 3.
fn tracer_with_cartridge() -> Tracer {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();
    tracer
}

/// Render every bank so all dirty flags start cleared.
fn render_all(tracer: &mut Tracer) {
    let ids: Vec<BankId> = tracer.pages().into_iter().map(|(id, _)| id).collect();
    for id in ids {
        tracer.render(id).unwrap();
    }
}

fn dirty_banks(tracer: &Tracer) -> Vec<BankId> {
    tracer
        .banks()
        .iter()
        .filter(|bank| bank.is_dirty())
        .map(|bank| bank.id())
        .collect()
}

#[test]
fn test_read_merges_with_prior_classification() {
    let mut tracer = Tracer::new();

    tracer.classify(0x0200, TraceAccess::INSTRUCTION | TraceAccess::READ, 0);
    tracer.classify(0x0200, TraceAccess::DATA | TraceAccess::READ, 0);

    assert_eq!(tracer.trace_at(0x0200), TraceAccess::INSTRUCTION | TraceAccess::DATA);
}

#[test]
fn test_write_replaces_ram_classification() {
    let mut tracer = Tracer::new();

    tracer.classify(0x1100, TraceAccess::INSTRUCTION | TraceAccess::IMMEDIATE | TraceAccess::READ, 0);
    tracer.classify(0x1100, TraceAccess::STACK | TraceAccess::WRITE, 0x55);

    assert_eq!(tracer.trace_at(0x1100), TraceAccess::STACK);
}

#[test]
fn test_write_to_rom_is_ignored() {
    let mut tracer = tracer_with_cartridge();
    tracer.classify(0x9000, TraceAccess::INSTRUCTION | TraceAccess::READ, 0);
    render_all(&mut tracer);

    tracer.classify(0x9000, TraceAccess::DATA | TraceAccess::WRITE, 0);

    assert_eq!(tracer.trace_at(0x9000), TraceAccess::INSTRUCTION);
    assert!(dirty_banks(&tracer).is_empty());
}

#[test]
fn test_io_registers_are_never_classified() {
    let mut tracer = Tracer::new();
    render_all(&mut tracer);

    tracer.classify(0x2080, TraceAccess::DATA | TraceAccess::READ, 0);
    tracer.classify(0x20FF, TraceAccess::DATA | TraceAccess::WRITE, 0);

    assert_eq!(tracer.trace_at(0x2080), TraceAccess::NONE);
    assert_eq!(tracer.trace_at(0x20FF), TraceAccess::NONE);
    assert!(dirty_banks(&tracer).is_empty());
}

#[test]
fn test_direction_bits_are_not_stored() {
    let mut tracer = Tracer::new();

    tracer.classify(0x1200, TraceAccess::DATA | TraceAccess::READ, 0);
    tracer.classify(0x1300, TraceAccess::DATA | TraceAccess::WRITE, 0);

    assert!(!tracer.trace_at(0x1200).intersects(TraceAccess::DIRECTION));
    assert!(!tracer.trace_at(0x1300).intersects(TraceAccess::DIRECTION));
}

#[test]
fn test_change_marks_only_owning_bank() {
    let mut tracer = tracer_with_cartridge();
    render_all(&mut tracer);

    tracer.classify(0x0ABC, TraceAccess::DATA | TraceAccess::READ, 0);
    assert_eq!(dirty_banks(&tracer), vec![BankId::Bios]);

    render_all(&mut tracer);
    tracer.classify(0x12345, TraceAccess::WORD_LO | TraceAccess::READ, 0);
    assert_eq!(dirty_banks(&tracer), vec![BankId::Rom(2)]);
}

#[test]
fn test_unchanged_classification_leaves_banks_clean() {
    let mut tracer = tracer_with_cartridge();
    tracer.classify(0x4000, TraceAccess::INSTRUCTION | TraceAccess::READ, 0);
    render_all(&mut tracer);

    tracer.classify(0x4000, TraceAccess::INSTRUCTION | TraceAccess::READ, 0);

    assert!(dirty_banks(&tracer).is_empty());
}

#[test]
fn test_branch_target_label_is_permanent() {
    let mut tracer = Tracer::new();

    tracer.classify(0x1500, TraceAccess::INSTRUCTION | TraceAccess::BRANCH_TARGET | TraceAccess::READ, 0);
    assert_eq!(tracer.label_for(0x1500), Some("loc_1500"));

    // Overwriting the byte drops its classification but not its name
    tracer.classify(0x1500, TraceAccess::DATA | TraceAccess::WRITE, 0);
    assert_eq!(tracer.trace_at(0x1500), TraceAccess::DATA);
    assert_eq!(tracer.label_for(0x1500), Some("loc_1500"));
}

#[test]
fn test_labels_use_lowercase_hex() {
    let mut tracer = tracer_with_cartridge();

    tracer.classify(0x1ABCD, TraceAccess::BRANCH_TARGET | TraceAccess::READ, 0);

    assert_eq!(tracer.label_for(0x1ABCD), Some("loc_1abcd"));
    assert_eq!(tracer.symbols().len(), 1);
}

#[test]
fn test_classification_without_bank_is_kept() {
    // No cartridge: cartridge space has no bank but the access is still recorded
    let mut tracer = Tracer::new();

    tracer.classify(0x4000, TraceAccess::DATA | TraceAccess::READ, 0);

    assert_eq!(tracer.trace_at(0x4000), TraceAccess::DATA);
    assert_eq!(tracer.bank_for(0x4000), None);
}

#[test]
fn test_override_hot_keys() {
    let mut tracer = tracer_with_cartridge();
    tracer.classify(0x8000, TraceAccess::DATA | TraceAccess::READ, 0);

    assert!(tracer.override_trace(0x8000, TraceOverride::Code));
    assert_eq!(tracer.trace_at(0x8000), TraceAccess::INSTRUCTION);

    assert!(tracer.override_trace(0x8000, TraceOverride::Word));
    assert_eq!(tracer.trace_at(0x8000), TraceAccess::DATA | TraceAccess::WORD_LO);

    assert!(tracer.override_trace(0x8000, TraceOverride::Data));
    assert_eq!(tracer.trace_at(0x8000), TraceAccess::DATA);

    assert!(tracer.override_trace(0x8000, TraceOverride::Unknown));
    assert_eq!(tracer.trace_at(0x8000), TraceAccess::NONE);
}
