//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address (absolute or indirect)
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Interrupt
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! JSR pushes the address of its own last byte (PC+2), so RTS adds one to the
//! popped value. BRK pushes PC+2 as well, but RTI resumes at the popped value
//! as-is.

use crate::addressing::Resolved;
use crate::cpu::IRQ_VECTOR;
use crate::instructions::Control;
use crate::registers::StatusFlags;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234 - Jump to address $1234
/// - Indirect (0x6C): JMP ($1234) - Jump to address stored at $1234/$1235
///
/// The indirect form keeps the original hardware quirk: the pointer's high
/// byte is read from the same page, so JMP ($10FF) reads $10FF and $1000.
pub(crate) fn execute_jmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.pc = cpu.operand_target(resolved.operand);
    Ok(Control::Jumped)
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes PC+2 (high byte, then low byte) and jumps to the absolute target.
pub(crate) fn execute_jsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let target = cpu.operand_target(resolved.operand);
    let return_address = cpu.regs.pc.wrapping_add(2);

    cpu.push_word(return_address);
    cpu.regs.pc = target;

    Ok(Control::Jumped)
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pops the return address (low byte, then high byte) and resumes one past it,
/// i.e. at the instruction following the JSR.
pub(crate) fn execute_rts<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let return_address = cpu.pop_word();
    // JSR pushed the address of its last byte (PC+2), so resume one past it.
    cpu.regs.pc = return_address.wrapping_add(1);
    Ok(Control::Jumped)
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// 1. Pushes PC+2 (high byte, then low byte)
/// 2. Pushes the status byte
/// 3. Sets the I (interrupt disable) flag
/// 4. Loads PC from the IRQ vector at $FFFE (low) and $FFFF (high)
///
/// The run ends here unless the CPU is configured to continue after BRK, in
/// which case execution resumes at the vector target.
pub(crate) fn execute_brk<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let return_address = cpu.regs.pc.wrapping_add(2);
    cpu.push_word(return_address);

    let status = cpu.regs.status.to_byte();
    cpu.push(status);

    cpu.regs.status.interrupt_disable = true;
    cpu.regs.pc = cpu.memory.read_word(IRQ_VECTOR);

    if cpu.config.continue_after_brk {
        Ok(Control::Jumped)
    } else {
        Ok(Control::Break)
    }
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte (all eight bits), then the return address (low byte,
/// then high byte), and resumes exactly at that address.
pub(crate) fn execute_rti<M: MemoryBus>(
    cpu: &mut CPU<M>,
    _resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let status = cpu.pop();
    cpu.regs.status = StatusFlags::from_byte(status);
    cpu.regs.pc = cpu.pop_word();
    Ok(Control::Jumped)
}

/// Executes the NOP (No Operation) instruction.
pub(crate) fn execute_nop<M: MemoryBus>(
    _cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    Ok(Control::Advance(resolved.len))
}
