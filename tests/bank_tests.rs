//! Integration tests for the bank registry as seen through the tracer

use minimon_trace::memory::{physical_pc, MemoryBus};
use minimon_trace::{BankId, TraceAccess, Tracer, TracerError};

/// Raw cartridge dump of `len` bytes including the "PM" magic.
fn raw_dump(len: usize) -> Vec<u8> {
    let mut image = b"PM".to_vec();
    image.resize(len, 0xFF);
    image
}

#[test]
fn test_pages_without_cartridge() {
    let tracer = Tracer::new();

    let pages = tracer.pages();
    assert_eq!(
        pages,
        vec![
            (BankId::Bios, "System BIOS (0000000h~0000FFFh)".to_string()),
            (BankId::Ram, "System RAM (0001000h~0001FFFh)".to_string()),
        ]
    );
}

#[test]
fn test_pages_follow_full_image() {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();

    let ids: Vec<String> = tracer.pages().iter().map(|(id, _)| id.to_string()).collect();
    assert_eq!(ids, vec!["bios", "ram", "rom:0", "rom:1", "rom:2", "rom:3"]);

    let names: Vec<String> = tracer.pages().into_iter().map(|(_, name)| name).collect();
    assert_eq!(names[2], "ROM Bank 0 (002100~007FFF)");
    assert_eq!(names[5], "ROM Bank 3 (018000~01FFFF)");
}

#[test]
fn test_raw_dump_is_loaded_after_io_window() {
    let mut tracer = Tracer::new();
    let mut image = raw_dump(0x100);
    image[2] = 0xAB;
    tracer.load_cartridge(&image).unwrap();

    assert_eq!(tracer.memory().read(0x2100), b'P');
    assert_eq!(tracer.memory().read(0x2102), 0xAB);

    let bank = tracer.bank(BankId::Rom(0)).unwrap();
    assert_eq!(bank.range(), 0x2100..0x2200);
}

#[test]
fn test_last_bank_is_clipped_to_image() {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x9000]).unwrap();

    let last = tracer.bank(BankId::Rom(1)).unwrap();
    assert_eq!(last.range(), 0x8000..0x9000);
    assert_eq!(tracer.bank_for(0x8FFF), Some(BankId::Rom(1)));
    assert_eq!(tracer.bank_for(0x9000), None);
}

#[test]
fn test_every_banked_address_has_exactly_one_bank() {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();

    for address in (0..0x20000).step_by(0x7F) {
        let owners = tracer
            .banks()
            .iter()
            .filter(|bank| bank.contains(address))
            .count();
        let expected = if (0x2000..0x2100).contains(&address) { 0 } else { 1 };
        assert_eq!(owners, expected, "address 0x{:05X}", address);
    }
}

#[test]
fn test_eject_drops_rom_banks() {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();
    tracer.eject();

    assert_eq!(tracer.pages().len(), 2);
    assert!(matches!(
        tracer.render(BankId::Rom(0)),
        Err(TracerError::UnknownBank(_))
    ));
}

#[test]
fn test_cartridge_swap_forgets_cartridge_classification() {
    let mut tracer = Tracer::new();
    tracer.load_cartridge(&vec![0u8; 0x20000]).unwrap();
    tracer.classify(0x4000, TraceAccess::INSTRUCTION | TraceAccess::BRANCH_TARGET, 0);
    tracer.classify(0x0040, TraceAccess::INSTRUCTION | TraceAccess::BRANCH_TARGET, 0);

    tracer.load_cartridge(&raw_dump(0x1000)).unwrap();

    assert_eq!(tracer.trace_at(0x4000), TraceAccess::NONE);
    assert_eq!(tracer.label_for(0x4000), None);
    assert_eq!(tracer.label_for(0x0040), Some("loc_40"));
    assert!(tracer.banks().iter().all(|bank| bank.is_dirty()));
}

#[test]
fn test_empty_cartridge_rejected() {
    let mut tracer = Tracer::new();

    assert!(matches!(
        tracer.load_cartridge(&[]),
        Err(TracerError::CartridgeEmpty)
    ));
}

#[test]
fn test_bios_too_large_rejected() {
    let mut tracer = Tracer::new();

    assert!(matches!(
        tracer.load_bios(&[0u8; 0x1001]),
        Err(TracerError::BiosTooLarge(0x1001))
    ));
}

#[test]
fn test_physical_pc_selects_code_bank() {
    assert_eq!(physical_pc(0x1234, 5), 0x1234);
    assert_eq!(physical_pc(0x8010, 3), 0x18010);
    assert_eq!(BankId::for_address(physical_pc(0x8010, 3)), Some(BankId::Rom(3)));
}

#[test]
fn test_bank_id_strings() {
    for id in [BankId::Bios, BankId::Ram, BankId::Rom(0), BankId::Rom(63)] {
        assert_eq!(id.to_string().parse::<BankId>().unwrap(), id);
    }

    assert!("rom:".parse::<BankId>().is_err());
    assert!("ROM:1".parse::<BankId>().is_err());
}
