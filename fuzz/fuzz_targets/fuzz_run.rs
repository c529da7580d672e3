//! Loads an arbitrary program at an arbitrary origin and runs a bounded
//! number of instructions through `run_with`.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{EmulatorConfig, EmulatorError, FlatMemory, HaltReason, CPU};
use libfuzzer_sys::fuzz_target;

const MAX_STEPS: u64 = 10_000;

#[derive(Debug, Arbitrary)]
struct Input {
    origin: u16,
    pc: Option<u16>,
    continue_after_brk: bool,
    print_port: Option<u16>,
    program: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let config = EmulatorConfig {
        continue_after_brk: input.continue_after_brk,
        ..EmulatorConfig::default()
    };
    let mut cpu = CPU::with_config(FlatMemory::new(), config);
    if let Some(address) = input.print_port {
        cpu.set_print_port(address, true, Box::new(std::io::sink()));
    }

    match cpu.start(&input.program, input.origin, input.pc) {
        Ok(()) => {}
        Err(EmulatorError::LoadOverflow { .. }) => {
            assert!(input.origin as usize + input.program.len() > 0x10000);
            return;
        }
        Err(e) => panic!("unexpected load error: {e}"),
    }

    let handle = cpu.halt_handle();
    let mut steps = 0;
    let result = cpu.run_with(|_| {
        steps += 1;
        if steps >= MAX_STEPS {
            handle.request();
        }
    });

    match result {
        Ok(summary) => {
            assert_eq!(summary.instructions, steps);
            if summary.reason == HaltReason::Cancelled {
                assert_eq!(steps, MAX_STEPS);
            }
        }
        Err(EmulatorError::IllegalOpcode { .. }) => {}
        Err(e) => panic!("unexpected run error: {e}"),
    }
});
