//! Tests for the conditional branches.
//!
//! Tests cover:
//! - Each branch taken and not taken
//! - Forward and backward offsets, including the extremes -128 and +127
//! - Targets wrapping around the 16-bit address space

use emu6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

fn branch(cpu: &mut CPU<FlatMemory>, opcode: u8, offset: u8) {
    let pc = cpu.pc();
    cpu.memory_mut().write(pc, opcode);
    cpu.memory_mut().write(pc.wrapping_add(1), offset);
    cpu.step().unwrap();
}

#[test]
fn test_each_branch_taken_and_not_taken() {
    // (opcode, setter, value that takes the branch)
    let cases: [(u8, fn(&mut CPU<FlatMemory>, bool), bool); 8] = [
        (0x10, CPU::<FlatMemory>::set_flag_n, false), // BPL
        (0x30, CPU::<FlatMemory>::set_flag_n, true),  // BMI
        (0x50, CPU::<FlatMemory>::set_flag_v, false), // BVC
        (0x70, CPU::<FlatMemory>::set_flag_v, true),  // BVS
        (0x90, CPU::<FlatMemory>::set_flag_c, false), // BCC
        (0xB0, CPU::<FlatMemory>::set_flag_c, true),  // BCS
        (0xD0, CPU::<FlatMemory>::set_flag_z, false), // BNE
        (0xF0, CPU::<FlatMemory>::set_flag_z, true),  // BEQ
    ];

    for (opcode, set_flag, taken_when) in cases {
        let mut cpu = setup_cpu();
        set_flag(&mut cpu, taken_when);
        branch(&mut cpu, opcode, 0x10);
        assert_eq!(cpu.pc(), 0x8012, "opcode {:02X} should branch", opcode);

        let mut cpu = setup_cpu();
        set_flag(&mut cpu, !taken_when);
        branch(&mut cpu, opcode, 0x10);
        assert_eq!(cpu.pc(), 0x8002, "opcode {:02X} should fall through", opcode);
        assert_eq!(cpu.cycles(), 2);
    }
}

#[test]
fn test_branch_backward() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(true);

    // BEQ -4
    branch(&mut cpu, 0xF0, 0xFC);

    assert_eq!(cpu.pc(), 0x7FFE);
}

#[test]
fn test_branch_offset_extremes() {
    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    branch(&mut cpu, 0xB0, 0x7F);
    assert_eq!(cpu.pc(), 0x8002 + 127);

    let mut cpu = setup_cpu();
    cpu.set_flag_c(true);
    branch(&mut cpu, 0xB0, 0x80);
    assert_eq!(cpu.pc(), 0x8002 - 128);
}

#[test]
fn test_branch_wraps_past_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFF0);
    cpu.set_flag_z(false);

    // BNE +$20 from $FFF0 lands at $0012
    branch(&mut cpu, 0xD0, 0x20);

    assert_eq!(cpu.pc(), 0x0012);
}

#[test]
fn test_branch_to_self_loops() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(false);

    // BNE -2
    branch(&mut cpu, 0xD0, 0xFE);
    assert_eq!(cpu.pc(), 0x8000);

    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x8000);
}
