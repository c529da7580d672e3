//! Tests for watched-address character output.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use emu6502::{FlatMemory, HaltReason, MemoryBus, CPU};

/// Writer that collects everything into a shared buffer.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// LDA #'H'; STA $F001; LDX #'i'; STX $F001; STA $F002; BRK
const HELLO: [u8; 14] = [
    0xA9, b'H', 0x8D, 0x01, 0xF0, 0xA2, b'i', 0x8E, 0x01, 0xF0, 0x8D, 0x02, 0xF0, 0x00,
];

fn setup_cpu(buffered: bool) -> (CPU<FlatMemory>, Capture) {
    let capture = Capture::default();
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_print_port(0xF001, buffered, Box::new(capture.clone()));
    cpu.start(&HELLO, 0x0200, Some(0x0200)).unwrap();
    (cpu, capture)
}

#[test]
fn test_unbuffered_output_is_immediate() {
    let (mut cpu, capture) = setup_cpu(false);

    cpu.step().unwrap();
    cpu.step().unwrap();

    assert_eq!(capture.text(), "H");
}

#[test]
fn test_buffered_output_waits_for_run_end() {
    let (mut cpu, capture) = setup_cpu(true);

    for _ in 0..4 {
        cpu.step().unwrap();
    }
    assert_eq!(capture.text(), "");
    assert_eq!(cpu.print_port().unwrap().pending(), b"Hi");

    let summary = cpu.run().unwrap();

    assert_eq!(summary.reason, HaltReason::Break);
    assert_eq!(capture.text(), "Hi");
    assert!(cpu.print_port().unwrap().pending().is_empty());
}

#[test]
fn test_other_addresses_are_not_echoed() {
    let (mut cpu, capture) = setup_cpu(false);

    cpu.run().unwrap();

    // The store to $F002 is ordinary memory
    assert_eq!(capture.text(), "Hi");
    assert_eq!(cpu.memory().read_range(0xF001, 2), vec![b'i', b'H']);
}

#[test]
fn test_buffered_output_flushed_on_illegal_opcode() {
    let capture = Capture::default();
    let mut cpu = CPU::new(FlatMemory::new());
    cpu.set_print_port(0x0300, true, Box::new(capture.clone()));

    // LDA #'!'; STA $0300; illegal
    let program = [0xA9, b'!', 0x8D, 0x00, 0x03, 0xFF];
    cpu.start(&program, 0x0200, Some(0x0200)).unwrap();

    assert!(cpu.run().is_err());
    assert_eq!(capture.text(), "!");
}
