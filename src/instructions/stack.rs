//! # Stack Instructions
//!
//! The stack lives in page one (0x0100-0x01FF) and grows downward. A push
//! writes at 0x0100 + SP and then decrements SP; a pull increments SP and then
//! reads. SP wraps within the page.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::registers::StatusFlags;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the PHA (Push Accumulator) instruction.
pub(crate) fn execute_pha<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.regs.a;
    cpu.push(value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the PHP (Push Processor Status) instruction.
pub(crate) fn execute_php<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let status = cpu.regs.status.to_byte();
    cpu.push(status);
    Ok(Control::Advance(resolved.len))
}

/// Executes the PLA (Pull Accumulator) instruction. N and Z follow the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.pop();
    cpu.regs.a = value;
    cpu.regs.status.update_zn(value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// All eight bits are restored verbatim, including B and the unused bit.
pub(crate) fn execute_plp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let status = cpu.pop();
    cpu.regs.status = StatusFlags::from_byte(status);
    Ok(Control::Advance(resolved.len))
}
