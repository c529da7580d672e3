//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register; N and Z follow the loaded value
//! - STA, STX, STY: store a register; no flags. A store to the print-port
//!   address also emits the byte as a character.

use crate::addressing::{Location, Resolved};
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
pub(crate) fn execute_lda<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.a = value;
    cpu.regs.status.update_zn(value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the LDX (Load X Register) instruction.
pub(crate) fn execute_ldx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.x = value;
    cpu.regs.status.update_zn(value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the LDY (Load Y Register) instruction.
pub(crate) fn execute_ldy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.y = value;
    cpu.regs.status.update_zn(value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the STA (Store Accumulator) instruction.
pub(crate) fn execute_sta<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.regs.a;
    store(cpu, resolved, value)
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.regs.x;
    store(cpu, resolved, value)
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.regs.y;
    store(cpu, resolved, value)
}

fn store<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
    value: u8,
) -> Result<Control, EmulatorError> {
    let location = cpu.operand_location(resolved.operand);
    cpu.write_location(location, value);

    if let (Location::Memory(addr), Some(port)) = (location, cpu.print_port.as_mut()) {
        port.notify_store(addr, value)?;
    }

    Ok(Control::Advance(resolved.len))
}
