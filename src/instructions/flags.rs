//! # Status Flag Manipulation Instructions
//!
//! This module implements instructions that directly modify processor status flags:
//! - CLC: Clear Carry Flag
//! - SEC: Set Carry Flag
//! - CLI: Clear Interrupt Disable
//! - SEI: Set Interrupt Disable
//! - CLV: Clear Overflow Flag
//! - CLD: Clear Decimal Mode
//! - SED: Set Decimal Mode
//!
//! Each touches exactly one flag. There is no SEV on the 6502.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory};
///
/// let mut cpu = CPU::new(FlatMemory::new());
/// cpu.start(&[0x18], 0x8000, Some(0x8000)).unwrap(); // CLC
/// cpu.set_flag_c(true);
///
/// cpu.step().unwrap();
///
/// assert_eq!(cpu.flag_c(), false);
/// assert_eq!(cpu.pc(), 0x8001);
/// ```
pub(crate) fn execute_clc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.carry = false;
    Ok(Control::Advance(resolved.len))
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.carry = true;
    Ok(Control::Advance(resolved.len))
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.interrupt_disable = false;
    Ok(Control::Advance(resolved.len))
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.interrupt_disable = true;
    Ok(Control::Advance(resolved.len))
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.decimal = false;
    Ok(Control::Advance(resolved.len))
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// Only the flag changes; ADC and SBC stay binary.
pub(crate) fn execute_sed<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.decimal = true;
    Ok(Control::Advance(resolved.len))
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    cpu.regs.status.overflow = false;
    Ok(Control::Advance(resolved.len))
}
