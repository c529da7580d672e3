//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! All four operate on the accumulator or a memory byte. C receives the bit
//! shifted out; N and Z follow the result.

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 0 is set to 0 and bit 7 is placed in the carry flag.
pub(crate) fn execute_asl<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    shift(cpu, resolved, |value, _| (value << 1, value & 0x80 != 0))
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 7 is set to 0 and bit 0 is placed in the carry flag.
pub(crate) fn execute_lsr<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    shift(cpu, resolved, |value, _| (value >> 1, value & 0x01 != 0))
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry moves into bit 0 and bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    shift(cpu, resolved, |value, carry| {
        ((value << 1) | carry as u8, value & 0x80 != 0)
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry moves into bit 7 and bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    shift(cpu, resolved, |value, carry| {
        ((value >> 1) | ((carry as u8) << 7), value & 0x01 != 0)
    })
}

/// Read-modify-write on the operand location. `op` maps (value, carry in)
/// to (result, carry out).
fn shift<M, F>(cpu: &mut CPU<M>, resolved: Resolved, op: F) -> Result<Control, EmulatorError>
where
    M: MemoryBus,
    F: FnOnce(u8, bool) -> (u8, bool),
{
    let location = cpu.operand_location(resolved.operand);
    let value = cpu.read_location(location);

    let (result, carry) = op(value, cpu.regs.status.carry);

    cpu.write_location(location, result);
    cpu.regs.status.carry = carry;
    cpu.regs.status.update_zn(result);

    Ok(Control::Advance(resolved.len))
}
