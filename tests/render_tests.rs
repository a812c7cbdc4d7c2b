//! Integration tests for bank rendering

use minimon_trace::disassembler::formatter::{format_line, format_row};
use minimon_trace::memory::MemoryBus;
use minimon_trace::opcodes::lookup;
use minimon_trace::{BankId, RowKind, TraceAccess, Tracer, TracerConfig};

fn code() -> TraceAccess {
    TraceAccess::INSTRUCTION | TraceAccess::READ
}

/// A 128KB full image with `code` copied in at `address`.
fn tracer_with_code(address: usize, code: &[u8]) -> Tracer {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut image = vec![0u8; 0x20000];
    image[address..address + code.len()].copy_from_slice(code);

    let mut tracer = Tracer::new();
    tracer.load_cartridge(&image).unwrap();
    tracer
}

#[test]
fn test_bios_instruction_row_matches_opcode_length() {
    let mut bios = vec![0u8; 0x20];
    bios[0x10..0x14].copy_from_slice(&[0xC4, 0x34, 0x12, 0xF8]); // LD BA,#1234h / RET

    let mut tracer = Tracer::new();
    tracer.load_bios(&bios).unwrap();
    tracer.classify(0x0010, code(), 0xC4);

    let (opcode_len, meta) = lookup(&bios[0x10..]).unwrap();
    let rows = tracer.render(BankId::Bios).unwrap();
    let row = rows.iter().find(|row| row.address == 0x0010).unwrap();

    assert_eq!(row.kind, RowKind::Instruction);
    assert_eq!(row.len(), opcode_len + meta.operand_size());
    assert_eq!(format_row(row), "LD BA, #01234h");

    let next = rows.iter().find(|row| row.address == 0x0013).unwrap();
    assert_eq!(next.mnemonic, "RET");
}

#[test]
fn test_word_classified_ram_renders_one_dw_row() {
    let mut tracer = Tracer::new();
    for (offset, &byte) in [0x34, 0x12, 0xCD, 0xAB].iter().enumerate() {
        let address = 0x1000 + offset as u32;
        tracer.memory_mut().write(address, byte);
        tracer.classify(address, TraceAccess::DATA | TraceAccess::WORD_LO | TraceAccess::READ, byte);
    }

    let rows = tracer.render(BankId::Ram).unwrap();

    assert_eq!(rows[0].address, 0x1000);
    assert_eq!(rows[0].kind, RowKind::Words);
    assert_eq!(rows[0].len(), 4);
    assert_eq!(format_row(&rows[0]), "DW 01234h, 0ABCDh");
    assert_eq!(rows[1].address, 0x1004);
    assert_eq!(rows[1].mnemonic, "DB");
}

#[test]
fn test_force_trace_in_rom_bank() {
    let mut tracer = tracer_with_code(0x8100, &[0xB0, 0x42, 0xF8]); // LD A,#42h / RET
    tracer.render(BankId::Rom(1)).unwrap();
    assert!(!tracer.bank(BankId::Rom(1)).unwrap().is_dirty());

    tracer.force_trace(0x8100, TraceAccess::INSTRUCTION);
    assert!(tracer.bank(BankId::Rom(1)).unwrap().is_dirty());

    let rows = tracer.render(BankId::Rom(1)).unwrap().to_vec();
    assert!(!tracer.bank(BankId::Rom(1)).unwrap().is_dirty());

    let row = rows.iter().find(|row| row.address == 0x8100).unwrap();
    assert_eq!(row.kind, RowKind::Instruction);
    assert_eq!(format_row(row), "LD A, #042h");
}

#[test]
fn test_page_load_redirects_banked_branch() {
    // ROM bank 2: LD NB,#03h / JRS +10h
    let mut tracer = tracer_with_code(0x10010, &[0xCE, 0xC4, 0x03, 0xF1, 0x10]);
    tracer.classify(0x10010, code(), 0xCE);

    let rows = tracer.render(BankId::Rom(2)).unwrap();
    let branch = rows.iter().find(|row| row.address == 0x10013).unwrap();

    assert_eq!(branch.mnemonic, "JRS");
    assert_eq!(branch.operands[0].address(), Some(0x18025));
    assert_eq!(format_row(branch), "JRS #018025h");
}

#[test]
fn test_branch_without_page_load_stays_in_bank() {
    let mut tracer = tracer_with_code(0x10013, &[0xF1, 0x10]);
    tracer.classify(0x10013, code(), 0xF1);

    let rows = tracer.render(BankId::Rom(2)).unwrap();
    let branch = rows.iter().find(|row| row.address == 0x10013).unwrap();

    assert_eq!(branch.operands[0].address(), Some(0x10025));
}

#[test]
fn test_branch_target_renders_label() {
    let mut tracer = tracer_with_code(0x2200, &[0xF1, 0x0E]); // JRS +0Eh -> 0x2210
    tracer.classify(0x2200, code(), 0xF1);
    tracer.classify(0x2210, code() | TraceAccess::BRANCH_TARGET, 0);

    let rows = tracer.render(BankId::Rom(0)).unwrap();

    let branch = rows.iter().find(|row| row.address == 0x2200).unwrap();
    assert_eq!(format_row(branch), "JRS loc_2210");

    let target = rows.iter().find(|row| row.address == 0x2210).unwrap();
    assert_eq!(target.label.as_deref(), Some("loc_2210"));
    assert!(format_line(target).contains("loc_2210:"));
}

#[test]
fn test_illegal_opcode_ends_run() {
    let mut tracer = tracer_with_code(0x3000, &[0xFF, 0xFE, 0xFF]); // NOP / undefined / NOP
    tracer.classify(0x3000, code(), 0xFF);

    let rows = tracer.render(BankId::Rom(0)).unwrap();
    let index = rows.iter().position(|row| row.address == 0x3000).unwrap();

    assert_eq!(rows[index].mnemonic, "NOP");
    assert_eq!(rows[index + 1].kind, RowKind::Illegal);
    assert_eq!(rows[index + 1].mnemonic, "NDEF");
    assert_eq!(rows[index + 1].len(), 1);
    // Not classified as code, so the trailing NOP is data
    assert_eq!(rows[index + 2].kind, RowKind::Bytes);
}

#[test]
fn test_code_and_data_interleave() {
    let mut tracer = tracer_with_code(0x4000, &[0xF8, 0x01, 0x02, 0x03, 0xF8]);
    tracer.classify(0x4000, code(), 0xF8);
    tracer.classify(0x4004, code(), 0xF8);

    let rows = tracer.render(BankId::Rom(0)).unwrap();
    let index = rows.iter().position(|row| row.address == 0x4000).unwrap();

    assert_eq!(rows[index].mnemonic, "RET");
    assert_eq!(rows[index + 1].mnemonic, "DB");
    assert_eq!(rows[index + 1].len(), 3);
    assert_eq!(rows[index + 2].mnemonic, "RET");
    assert_eq!(rows[index + 2].address, 0x4004);
}

#[test]
fn test_render_is_idempotent() {
    let mut tracer = tracer_with_code(0x2400, &[0xB0, 0x01, 0xF8]);
    tracer.classify(0x2400, code(), 0xB0);

    let first = tracer.render(BankId::Rom(0)).unwrap().to_vec();
    let second = tracer.render(BankId::Rom(0)).unwrap().to_vec();

    assert_eq!(first, second);
}

#[test]
fn test_rows_cover_bank_exactly() {
    let mut tracer = tracer_with_code(0x8000, &[0xB0, 0x01, 0xF2, 0x00, 0x00, 0xFE]);
    tracer.classify(0x8000, code(), 0xB0);
    tracer.classify(0x8010, TraceAccess::WORD_LO | TraceAccess::READ, 0);
    tracer.classify(0x8020, TraceAccess::DATA | TraceAccess::READ, 0);

    let range = tracer.bank(BankId::Rom(1)).unwrap().range();
    let rows = tracer.render(BankId::Rom(1)).unwrap();

    let mut expected = range.start;
    for row in rows {
        assert_eq!(row.address, expected);
        assert!(!row.is_empty());
        expected = row.end();
    }
    assert_eq!(expected, range.end);
}

#[test]
fn test_custom_row_limits() {
    let config = TracerConfig::from_json(r#"{ "max_data_bytes": 4 }"#).unwrap();
    let mut tracer = Tracer::with_config(config).unwrap();

    let rows = tracer.render(BankId::Ram).unwrap();

    assert_eq!(rows.len(), 0x1000 / 4);
    assert!(rows.iter().all(|row| row.len() == 4));
}

#[test]
fn test_row_index_for_address() {
    let mut tracer = tracer_with_code(0x2300, &[0xC4, 0x00, 0x10, 0xF8]);
    tracer.classify(0x2300, code(), 0xC4);

    let index = tracer.row_index_for(BankId::Rom(0), 0x2302).unwrap().unwrap();
    let rows = tracer.render(BankId::Rom(0)).unwrap();

    assert_eq!(rows[index].address, 0x2300);
    assert!(tracer.row_index_for(BankId::Rom(0), 0x1000).unwrap().is_none());
}
