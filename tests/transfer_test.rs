//! Tests for the register transfer instructions (TAX, TAY, TXA, TYA, TSX, TXS).

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_one(cpu: &mut CPU<FlatMemory>, opcode: u8) {
    cpu.memory_mut().write(0x8000, opcode);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn test_tax_copies_and_sets_flags() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x80);

    run_one(&mut cpu, 0xAA);

    assert_eq!(cpu.x(), 0x80);
    assert_eq!(cpu.a(), 0x80);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_tay_zero() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x00);
    cpu.set_y(0x33);
    cpu.set_flag_z(false);

    run_one(&mut cpu, 0xA8);

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_txa() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x42);

    run_one(&mut cpu, 0x8A);

    assert_eq!(cpu.a(), 0x42);
    assert!(!cpu.flag_z());
}

#[test]
fn test_tya() {
    let mut cpu = setup_cpu();
    cpu.set_y(0xF0);

    run_one(&mut cpu, 0x98);

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
}

#[test]
fn test_tsx_reads_stack_pointer() {
    let mut cpu = setup_cpu();
    cpu.set_sp(0xFD);

    run_one(&mut cpu, 0xBA);

    assert_eq!(cpu.x(), 0xFD);
    assert!(cpu.flag_n());
}

#[test]
fn test_txs_does_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x00);
    cpu.set_status(0xA4);

    run_one(&mut cpu, 0x9A);

    assert_eq!(cpu.sp(), 0x00);
    assert_eq!(cpu.status(), 0xA4);
}
