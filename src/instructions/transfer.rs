//! # Register Transfer Instructions
//!
//! TAX, TAY, TXA, TYA and TSX copy one register into another and set N and Z
//! from the copied value. TXS copies X into the stack pointer and leaves the
//! flags alone.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.x = cpu.regs.a;
    cpu.regs.status.update_zn(cpu.regs.x);
    Ok(Control::Advance(resolved.len))
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.y = cpu.regs.a;
    cpu.regs.status.update_zn(cpu.regs.y);
    Ok(Control::Advance(resolved.len))
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.a = cpu.regs.x;
    cpu.regs.status.update_zn(cpu.regs.a);
    Ok(Control::Advance(resolved.len))
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.a = cpu.regs.y;
    cpu.regs.status.update_zn(cpu.regs.a);
    Ok(Control::Advance(resolved.len))
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.x = cpu.regs.sp;
    cpu.regs.status.update_zn(cpu.regs.x);
    Ok(Control::Advance(resolved.len))
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// Unlike the other transfers, TXS affects no flags.
pub(crate) fn execute_txs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.sp = cpu.regs.x;
    Ok(Control::Advance(resolved.len))
}
