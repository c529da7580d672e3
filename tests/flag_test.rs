//! Tests for the flag instructions (CLC, SEC, CLD, SED, CLI, SEI, CLV).

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn run_one(cpu: &mut CPU<FlatMemory>, opcode: u8) {
    let cycles = cpu.cycles();
    cpu.memory_mut().write(0x8000, opcode);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8001);
    assert_eq!(cpu.cycles() - cycles, 2);
}

#[test]
fn test_sec_then_clc() {
    let mut cpu = setup_cpu();

    run_one(&mut cpu, 0x38);
    assert!(cpu.flag_c());

    cpu.set_pc(0x8000);
    run_one(&mut cpu, 0x18);
    assert!(!cpu.flag_c());
}

#[test]
fn test_sed_cld() {
    let mut cpu = setup_cpu();

    run_one(&mut cpu, 0xF8);
    assert!(cpu.flag_d());

    cpu.set_pc(0x8000);
    run_one(&mut cpu, 0xD8);
    assert!(!cpu.flag_d());
}

#[test]
fn test_cli_sei() {
    let mut cpu = setup_cpu();
    assert!(cpu.flag_i());

    run_one(&mut cpu, 0x58);
    assert!(!cpu.flag_i());

    cpu.set_pc(0x8000);
    run_one(&mut cpu, 0x78);
    assert!(cpu.flag_i());
}

#[test]
fn test_clv() {
    let mut cpu = setup_cpu();
    cpu.set_flag_v(true);

    run_one(&mut cpu, 0xB8);

    assert!(!cpu.flag_v());
}

#[test]
fn test_flag_instructions_leave_other_bits() {
    let mut cpu = setup_cpu();
    cpu.set_status(0xFF);

    run_one(&mut cpu, 0x18);

    assert_eq!(cpu.status(), 0xFE);
}

#[test]
fn test_break_and_unused_bits_survive_flag_changes() {
    let mut cpu = setup_cpu();

    run_one(&mut cpu, 0x38);

    assert!(cpu.flag_b());
    assert_eq!(cpu.status() & 0x30, 0x30);
}
