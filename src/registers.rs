//! # Register File
//!
//! Accumulator, index registers, stack pointer, program counter and the
//! packed processor status.

use std::fmt;

/// Processor status flags.
///
/// Bit layout when packed (NV-BDIZC):
/// - Bit 7: N (Negative)
/// - Bit 6: V (Overflow)
/// - Bit 5: Unused (reads as 1 after power-on)
/// - Bit 4: B (Break, held set after power-on)
/// - Bit 3: D (Decimal, settable but arithmetic ignores it)
/// - Bit 2: I (Interrupt Disable)
/// - Bit 1: Z (Zero)
/// - Bit 0: C (Carry)
///
/// Unused and Break are never cleared by an instruction; only PLP and RTI,
/// which restore all eight bits from the stack, can change them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusFlags {
    pub negative: bool,
    pub overflow: bool,
    pub unused: bool,
    pub brk: bool,
    pub decimal: bool,
    pub interrupt_disable: bool,
    pub zero: bool,
    pub carry: bool,
}

impl StatusFlags {
    pub const NEGATIVE: u8 = 0b1000_0000;
    pub const OVERFLOW: u8 = 0b0100_0000;
    pub const UNUSED: u8 = 0b0010_0000;
    pub const BREAK: u8 = 0b0001_0000;
    pub const DECIMAL: u8 = 0b0000_1000;
    pub const INTERRUPT_DISABLE: u8 = 0b0000_0100;
    pub const ZERO: u8 = 0b0000_0010;
    pub const CARRY: u8 = 0b0000_0001;

    /// Packs the flags into a status byte.
    ///
    /// ```
    /// use emu6502::StatusFlags;
    ///
    /// assert_eq!(StatusFlags::default().to_byte(), 0x36);
    /// ```
    pub fn to_byte(self) -> u8 {
        let mut status = 0;
        let bits = [
            (self.negative, Self::NEGATIVE),
            (self.overflow, Self::OVERFLOW),
            (self.unused, Self::UNUSED),
            (self.brk, Self::BREAK),
            (self.decimal, Self::DECIMAL),
            (self.interrupt_disable, Self::INTERRUPT_DISABLE),
            (self.zero, Self::ZERO),
            (self.carry, Self::CARRY),
        ];
        for (set, mask) in bits {
            if set {
                status |= mask;
            }
        }
        status
    }

    /// Unpacks a status byte, taking all eight bits verbatim.
    pub fn from_byte(status: u8) -> Self {
        Self {
            negative: status & Self::NEGATIVE != 0,
            overflow: status & Self::OVERFLOW != 0,
            unused: status & Self::UNUSED != 0,
            brk: status & Self::BREAK != 0,
            decimal: status & Self::DECIMAL != 0,
            interrupt_disable: status & Self::INTERRUPT_DISABLE != 0,
            zero: status & Self::ZERO != 0,
            carry: status & Self::CARRY != 0,
        }
    }

    /// Sets Zero and Negative from an 8-bit result.
    #[inline]
    pub fn update_zn(&mut self, result: u8) {
        self.zero = result == 0;
        self.negative = result & 0x80 != 0;
    }
}

impl Default for StatusFlags {
    /// Power-on status: Unused, Break, Interrupt Disable and Zero set (0x36).
    fn default() -> Self {
        Self {
            negative: false,
            overflow: false,
            unused: true,
            brk: true,
            decimal: false,
            interrupt_disable: true,
            zero: true,
            carry: false,
        }
    }
}

impl fmt::Display for StatusFlags {
    /// Renders the flags as eight digits in NV-BDIZC order, e.g. `00110110`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = [
            self.negative,
            self.overflow,
            self.unused,
            self.brk,
            self.decimal,
            self.interrupt_disable,
            self.zero,
            self.carry,
        ];
        for bit in bits {
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}

/// Snapshot-able register file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Registers {
    /// Accumulator
    pub a: u8,
    /// X index register
    pub x: u8,
    /// Y index register
    pub y: u8,
    /// Stack pointer, offset into page one (0x0100 + sp)
    pub sp: u8,
    /// Program counter
    pub pc: u16,
    pub status: StatusFlags,
}

impl Registers {
    /// Initial stack pointer; the stack starts at the top of page one.
    pub const INITIAL_SP: u8 = 0xFF;

    /// Power-on register file with the given program counter.
    pub fn new(pc: u16) -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            sp: Self::INITIAL_SP,
            pc,
            status: StatusFlags::default(),
        }
    }
}

impl Default for Registers {
    fn default() -> Self {
        Self::new(0x0000)
    }
}
