//! # Branch Instructions
//!
//! This module implements conditional branch operations:
//! - BPL/BMI: Negative clear/set
//! - BVC/BVS: Overflow clear/set
//! - BCC/BCS: Carry clear/set
//! - BNE/BEQ: Zero clear/set
//!
//! All branch instructions use relative addressing with a signed 8-bit offset
//! (-128..=127) measured from the address after the 2-byte instruction. The
//! resolver has already computed that target; a branch not taken just
//! advances past the instruction.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

fn branch_if<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
    condition: bool,
) -> Result<Control, EmulatorError> {
    if condition {
        cpu.regs.pc = cpu.operand_target(resolved.operand);
        Ok(Control::Jumped)
    } else {
        Ok(Control::Advance(resolved.len))
    }
}

/// Executes the BPL (Branch if Positive) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = !cpu.regs.status.negative;
    branch_if(cpu, resolved, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = cpu.regs.status.negative;
    branch_if(cpu, resolved, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = !cpu.regs.status.overflow;
    branch_if(cpu, resolved, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = cpu.regs.status.overflow;
    branch_if(cpu, resolved, condition)
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = !cpu.regs.status.carry;
    branch_if(cpu, resolved, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = cpu.regs.status.carry;
    branch_if(cpu, resolved, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = !cpu.regs.status.zero;
    branch_if(cpu, resolved, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let condition = cpu.regs.status.zero;
    branch_if(cpu, resolved, condition)
}
