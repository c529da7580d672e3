//! # Addressing Modes
//!
//! This module defines the addressing modes supported by the 6502 processor and
//! the resolver that turns an opcode's operand bytes into something an
//! instruction handler can consume.
//!
//! Resolution never fails: zero-page arithmetic wraps within a byte and
//! absolute arithmetic wraps within 16 bits.

use crate::memory::MemoryBus;
use crate::registers::Registers;

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X register, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y register, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions, relative to the address
    /// after the 2-byte branch.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}

impl AddressingMode {
    /// Total instruction length in bytes, opcode included.
    pub const fn instruction_len(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 1,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 2,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 3,
        }
    }
}

/// A writable operand: either the accumulator or one memory byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Accumulator,
    Memory(u16),
}

/// What an addressing mode resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// Implicit instructions carry no operand.
    None,
    /// A read-only literal (immediate mode).
    Value(u8),
    /// A readable and writable location.
    Location(Location),
    /// A control-flow target (relative branch or indirect jump).
    Target(u16),
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub operand: Operand,
    /// Bytes consumed, opcode included (1, 2 or 3).
    pub len: u8,
}

/// Resolves `mode` for the instruction at `regs.pc`, whose operand bytes are
/// `ops` (the two bytes following the opcode; unused bytes are ignored).
///
/// # Examples
///
/// ```
/// use emu6502::addressing::{resolve, AddressingMode, Location, Operand};
/// use emu6502::{FlatMemory, Registers};
///
/// let mem = FlatMemory::new();
/// let mut regs = Registers::new(0x8000);
/// regs.x = 0x10;
///
/// // $F8,X wraps inside the zero page
/// let r = resolve(AddressingMode::ZeroPageX, [0xF8, 0x00], &regs, &mem);
/// assert_eq!(r.operand, Operand::Location(Location::Memory(0x0008)));
/// assert_eq!(r.len, 2);
/// ```
pub fn resolve<M: MemoryBus>(
    mode: AddressingMode,
    ops: [u8; 2],
    regs: &Registers,
    memory: &M,
) -> Resolved {
    let [lo, hi] = ops;
    let absolute = u16::from_le_bytes([lo, hi]);

    let operand = match mode {
        AddressingMode::Implicit => Operand::None,
        AddressingMode::Accumulator => Operand::Location(Location::Accumulator),
        AddressingMode::Immediate => Operand::Value(lo),
        AddressingMode::ZeroPage => Operand::Location(Location::Memory(lo as u16)),
        AddressingMode::ZeroPageX => {
            Operand::Location(Location::Memory(lo.wrapping_add(regs.x) as u16))
        }
        AddressingMode::ZeroPageY => {
            Operand::Location(Location::Memory(lo.wrapping_add(regs.y) as u16))
        }
        AddressingMode::Absolute => Operand::Location(Location::Memory(absolute)),
        AddressingMode::AbsoluteX => {
            Operand::Location(Location::Memory(absolute.wrapping_add(regs.x as u16)))
        }
        AddressingMode::AbsoluteY => {
            Operand::Location(Location::Memory(absolute.wrapping_add(regs.y as u16)))
        }
        AddressingMode::Relative => {
            let next = regs.pc.wrapping_add(mode.instruction_len() as u16);
            Operand::Target(next.wrapping_add_signed(lo as i8 as i16))
        }
        AddressingMode::IndirectX => {
            let zp = lo.wrapping_add(regs.x);
            Operand::Location(Location::Memory(zero_page_pointer(memory, zp)))
        }
        AddressingMode::IndirectY => {
            let base = zero_page_pointer(memory, lo);
            Operand::Location(Location::Memory(base.wrapping_add(regs.y as u16)))
        }
        AddressingMode::Indirect => {
            // The high byte comes from the same page as the low byte:
            // JMP ($10FF) reads $10FF and $1000.
            let target_lo = memory.read(absolute);
            let target_hi = memory.read(u16::from_le_bytes([lo.wrapping_add(1), hi]));
            Operand::Target(u16::from_le_bytes([target_lo, target_hi]))
        }
    };

    Resolved {
        operand,
        len: mode.instruction_len(),
    }
}

/// Reads a little-endian pointer from the zero page, wrapping 0xFF -> 0x00.
fn zero_page_pointer<M: MemoryBus>(memory: &M, zp: u8) -> u16 {
    let lo = memory.read(zp as u16);
    let hi = memory.read(zp.wrapping_add(1) as u16);
    u16::from_le_bytes([lo, hi])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn regs_at(pc: u16) -> Registers {
        Registers::new(pc)
    }

    #[test]
    fn test_instruction_lengths() {
        assert_eq!(AddressingMode::Implicit.instruction_len(), 1);
        assert_eq!(AddressingMode::Accumulator.instruction_len(), 1);
        assert_eq!(AddressingMode::Immediate.instruction_len(), 2);
        assert_eq!(AddressingMode::IndirectY.instruction_len(), 2);
        assert_eq!(AddressingMode::AbsoluteX.instruction_len(), 3);
        assert_eq!(AddressingMode::Indirect.instruction_len(), 3);
    }

    #[test]
    fn test_immediate_is_literal() {
        let mem = FlatMemory::new();
        let r = resolve(AddressingMode::Immediate, [0x42, 0x99], &regs_at(0), &mem);
        assert_eq!(r.operand, Operand::Value(0x42));
        assert_eq!(r.len, 2);
    }

    #[test]
    fn test_zero_page_y_wraps() {
        let mem = FlatMemory::new();
        let mut regs = regs_at(0);
        regs.y = 0x02;
        let r = resolve(AddressingMode::ZeroPageY, [0xFF, 0x00], &regs, &mem);
        assert_eq!(r.operand, Operand::Location(Location::Memory(0x0001)));
    }

    #[test]
    fn test_absolute_x_wraps_at_top_of_memory() {
        let mem = FlatMemory::new();
        let mut regs = regs_at(0);
        regs.x = 0x02;
        let r = resolve(AddressingMode::AbsoluteX, [0xFF, 0xFF], &regs, &mem);
        assert_eq!(r.operand, Operand::Location(Location::Memory(0x0001)));
        assert_eq!(r.len, 3);
    }

    #[test]
    fn test_relative_offsets() {
        let mem = FlatMemory::new();
        let regs = regs_at(0x8000);

        let forward = resolve(AddressingMode::Relative, [0x7F, 0], &regs, &mem);
        assert_eq!(forward.operand, Operand::Target(0x8081));

        let backward = resolve(AddressingMode::Relative, [0x80, 0], &regs, &mem);
        assert_eq!(backward.operand, Operand::Target(0x7F82));
    }

    #[test]
    fn test_relative_wraps_below_zero() {
        let mem = FlatMemory::new();
        let regs = regs_at(0x0000);
        let r = resolve(AddressingMode::Relative, [0xFC, 0], &regs, &mem);
        assert_eq!(r.operand, Operand::Target(0xFFFE));
    }

    #[test]
    fn test_indexed_indirect_wraps_pointer_in_zero_page() {
        let mut mem = FlatMemory::new();
        mem.write(0x00FF, 0x34);
        mem.write(0x0000, 0x12);
        let mut regs = regs_at(0);
        regs.x = 0x01;

        let r = resolve(AddressingMode::IndirectX, [0xFE, 0x00], &regs, &mem);
        assert_eq!(r.operand, Operand::Location(Location::Memory(0x1234)));
    }

    #[test]
    fn test_indirect_indexed_adds_y_after_dereference() {
        let mut mem = FlatMemory::new();
        mem.write(0x0040, 0xF0);
        mem.write(0x0041, 0x20);
        let mut regs = regs_at(0);
        regs.y = 0x20;

        let r = resolve(AddressingMode::IndirectY, [0x40, 0x00], &regs, &mem);
        assert_eq!(r.operand, Operand::Location(Location::Memory(0x2110)));
    }

    #[test]
    fn test_indirect_page_wrap_quirk() {
        let mut mem = FlatMemory::new();
        mem.write(0x10FF, 0x34);
        mem.write(0x1000, 0x12);
        mem.write(0x1100, 0x99);

        let r = resolve(AddressingMode::Indirect, [0xFF, 0x10], &regs_at(0), &mem);
        assert_eq!(r.operand, Operand::Target(0x1234));
    }
}
