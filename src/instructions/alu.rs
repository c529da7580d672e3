//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC, SBC: binary add/subtract with carry. The D flag can be set but does
//!   not switch to BCD arithmetic.
//! - AND, ORA, EOR: bitwise combine with the accumulator
//! - CMP, CPX, CPY: register minus operand, flags only
//! - BIT: test accumulator bits against memory

use crate::addressing::Resolved;
use crate::instructions::Control;
use crate::{EmulatorError, MemoryBus, CPU};

/// Executes the ADC (Add with Carry) instruction.
///
/// Flags affected:
/// - C: unsigned result exceeded 0xFF
/// - V: the signed sum of the operands fell outside -128..=127
/// - N, Z: from the result
pub(crate) fn execute_adc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    add_with_carry(cpu, value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Computes A - M - (1 - C). C is set when no borrow occurred (A >= M + borrow),
/// V when the signed difference fell outside -128..=127.
pub(crate) fn execute_sbc<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    let a = cpu.regs.a;
    let borrow = i16::from(!cpu.regs.status.carry);

    let unsigned = a as i16 - value as i16 - borrow;
    let signed = (a as i8) as i16 - (value as i8) as i16 - borrow;
    let result = unsigned as u8;

    cpu.regs.status.carry = unsigned >= 0;
    cpu.regs.status.overflow = !(-128..=127).contains(&signed);
    cpu.regs.status.update_zn(result);
    cpu.regs.a = result;

    Ok(Control::Advance(resolved.len))
}

fn add_with_carry<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let a = cpu.regs.a;
    let carry_in = u16::from(cpu.regs.status.carry);

    let unsigned = a as u16 + value as u16 + carry_in;
    let signed = (a as i8) as i16 + (value as i8) as i16 + carry_in as i16;
    let result = unsigned as u8;

    cpu.regs.status.carry = unsigned > 0xFF;
    cpu.regs.status.overflow = !(-128..=127).contains(&signed);
    cpu.regs.status.update_zn(result);
    cpu.regs.a = result;
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.a &= value;
    cpu.regs.status.update_zn(cpu.regs.a);
    Ok(Control::Advance(resolved.len))
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.a |= value;
    cpu.regs.status.update_zn(cpu.regs.a);
    Ok(Control::Advance(resolved.len))
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.a ^= value;
    cpu.regs.status.update_zn(cpu.regs.a);
    Ok(Control::Advance(resolved.len))
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    let register = cpu.regs.a;
    compare(cpu, register, value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    let register = cpu.regs.x;
    compare(cpu, register, value);
    Ok(Control::Advance(resolved.len))
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    let register = cpu.regs.y;
    compare(cpu, register, value);
    Ok(Control::Advance(resolved.len))
}

/// C = register >= value (unsigned); N and Z from register - value.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, register: u8, value: u8) {
    cpu.regs.status.carry = register >= value;
    cpu.regs.status.update_zn(register.wrapping_sub(value));
}

/// Executes the BIT (Bit Test) instruction.
///
/// N and V are copied from bits 7 and 6 of the operand; Z is set when
/// A AND operand is zero. The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(
    cpu: &mut CPU<M>,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    let value = cpu.operand_value(resolved.operand);
    cpu.regs.status.negative = value & 0x80 != 0;
    cpu.regs.status.overflow = value & 0x40 != 0;
    cpu.regs.status.zero = cpu.regs.a & value == 0;
    Ok(Control::Advance(resolved.len))
}
