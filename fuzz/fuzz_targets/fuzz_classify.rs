//! Fuzz target for classification and notification.
//!
//! Replays an arbitrary stream of accesses, forced traces and updates
//! against a tracer with a cartridge inserted, rendering as it goes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use minimon_trace::{TraceAccess, Tracer};

#[derive(Debug, Arbitrary)]
enum Step {
    Classify { address: u32, kind: u32, value: u8 },
    Force { address: u32, kind: u32 },
    Update,
    Render { address: u32 },
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cartridge: Vec<u8>,
    steps: Vec<Step>,
}

fuzz_target!(|input: FuzzInput| {
    let mut tracer = Tracer::new();
    if tracer.load_cartridge(&input.cartridge).is_err() {
        return;
    }

    for step in input.steps {
        match step {
            Step::Classify { address, kind, value } => {
                tracer.classify(address & 0x1F_FFFF, TraceAccess::from_raw(kind), value);
            }
            Step::Force { address, kind } => {
                tracer.force_trace(address & 0x1F_FFFF, TraceAccess::from_raw(kind));
            }
            Step::Update => {
                tracer.update();
            }
            Step::Render { address } => {
                if let Some(bank) = tracer.bank_for(address & 0x1F_FFFF) {
                    let rows = tracer.render(bank).unwrap();
                    assert!(!rows.is_empty());
                }
            }
        }
    }
});
