//! # Increment and Decrement Instructions
//!
//! INC/DEC adjust a memory byte, INX/INY/DEX/DEY a register. All wrap modulo
//! 256 and set N and Z from the result; C and V are untouched.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    step_memory(cpu, resolved, u8::wrapping_add)
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    step_memory(cpu, resolved, u8::wrapping_sub)
}

fn step_memory<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
    op: fn(u8, u8) -> u8,
) -> Result<Control, EmulatorError> {
    let location = cpu.operand_location(resolved.operand);
    let result = op(cpu.read_location(location), 1);
    cpu.write_location(location, result);
    cpu.regs.status.update_zn(result);
    Ok(Control::Advance(resolved.len))
}

/// Executes the INX (Increment X Register) instruction.
pub(crate) fn execute_inx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.x = cpu.regs.x.wrapping_add(1);
    cpu.regs.status.update_zn(cpu.regs.x);
    Ok(Control::Advance(resolved.len))
}

/// Executes the INY (Increment Y Register) instruction.
pub(crate) fn execute_iny<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.y = cpu.regs.y.wrapping_add(1);
    cpu.regs.status.update_zn(cpu.regs.y);
    Ok(Control::Advance(resolved.len))
}

/// Executes the DEX (Decrement X Register) instruction.
pub(crate) fn execute_dex<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.x = cpu.regs.x.wrapping_sub(1);
    cpu.regs.status.update_zn(cpu.regs.x);
    Ok(Control::Advance(resolved.len))
}

/// Executes the DEY (Decrement Y Register) instruction.
pub(crate) fn execute_dey<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.y = cpu.regs.y.wrapping_sub(1);
    cpu.regs.status.update_zn(cpu.regs.y);
    Ok(Control::Advance(resolved.len))
}
