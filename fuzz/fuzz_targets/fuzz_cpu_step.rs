//! Steps one instruction from an arbitrary register file and memory image.
//!
//! Every byte value at PC must either execute or report an illegal opcode;
//! nothing may panic, and a failed step must leave the registers untouched.

#![no_main]

use arbitrary::Arbitrary;
use emu6502::{FlatMemory, MemoryBus, CPU};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Registers {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u16,
    status: u8,
}

#[derive(Debug, Arbitrary)]
struct Input {
    regs: Registers,
    /// Opcode and operand bytes placed at PC (wrapping past 0xFFFF)
    instruction: [u8; 3],
    zero_page: [u8; 256],
    stack_page: [u8; 256],
    irq_vector: u16,
}

fuzz_target!(|input: Input| {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &input.zero_page);
    memory.load(0x0100, &input.stack_page);
    memory.load(0xFFFE, &input.irq_vector.to_le_bytes());
    memory.load(input.regs.pc, &input.instruction);

    let mut cpu = CPU::new(memory);
    cpu.set_a(input.regs.a);
    cpu.set_x(input.regs.x);
    cpu.set_y(input.regs.y);
    cpu.set_sp(input.regs.sp);
    cpu.set_pc(input.regs.pc);
    cpu.set_status(input.regs.status);

    let before = cpu.registers();
    match cpu.step() {
        Ok(report) => {
            assert_eq!(report.pc, before.pc);
            assert_eq!(report.registers, cpu.registers());
            assert_eq!(cpu.instructions(), 1);
        }
        Err(_) => {
            assert_eq!(cpu.registers(), before);
            assert_eq!(cpu.cycles(), 0);
        }
    }
});
