//! # Opcode Table
//!
//! The 256-entry opcode table is the single dispatch source for the emulator:
//! each opcode byte maps to the instruction it performs and the addressing mode
//! that locates its operand. The 151 documented NMOS opcodes are present; every
//! other byte is `None` and faults as an illegal opcode.
//!
//! ```
//! use emu6502::{decode, AddressingMode, Mnemonic};
//!
//! let lda_imm = decode(0xA9).unwrap();
//! assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
//! assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
//! assert_eq!(lda_imm.size_bytes, 2);
//!
//! assert!(decode(0x02).is_none());
//! ```

use std::fmt;

use crate::addressing::AddressingMode;

/// Instruction mnemonics of the documented 6502 instruction set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Mnemonic {
    /// Upper-case assembler name, e.g. `"LDA"`.
    pub const fn as_str(self) -> &'static str {
        use Mnemonic::*;
        match self {
            Adc => "ADC",
            And => "AND",
            Asl => "ASL",
            Bcc => "BCC",
            Bcs => "BCS",
            Beq => "BEQ",
            Bit => "BIT",
            Bmi => "BMI",
            Bne => "BNE",
            Bpl => "BPL",
            Brk => "BRK",
            Bvc => "BVC",
            Bvs => "BVS",
            Clc => "CLC",
            Cld => "CLD",
            Cli => "CLI",
            Clv => "CLV",
            Cmp => "CMP",
            Cpx => "CPX",
            Cpy => "CPY",
            Dec => "DEC",
            Dex => "DEX",
            Dey => "DEY",
            Eor => "EOR",
            Inc => "INC",
            Inx => "INX",
            Iny => "INY",
            Jmp => "JMP",
            Jsr => "JSR",
            Lda => "LDA",
            Ldx => "LDX",
            Ldy => "LDY",
            Lsr => "LSR",
            Nop => "NOP",
            Ora => "ORA",
            Pha => "PHA",
            Php => "PHP",
            Pla => "PLA",
            Plp => "PLP",
            Rol => "ROL",
            Ror => "ROR",
            Rti => "RTI",
            Rts => "RTS",
            Sbc => "SBC",
            Sec => "SEC",
            Sed => "SED",
            Sei => "SEI",
            Sta => "STA",
            Stx => "STX",
            Sty => "STY",
            Tax => "TAX",
            Tay => "TAY",
            Tsx => "TSX",
            Txa => "TXA",
            Txs => "TXS",
            Tya => "TYA",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Metadata for a single documented opcode.
///
/// # Fields
///
/// - `mnemonic`: Instruction performed
/// - `addressing_mode`: How the instruction interprets operand bytes
/// - `base_cycles`: Nominal cycle cost, without page-crossing or branch penalties
/// - `size_bytes`: Total instruction size including opcode and operands (1-3 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    pub mnemonic: Mnemonic,
    pub addressing_mode: AddressingMode,
    pub base_cycles: u8,
    pub size_bytes: u8,
}

const fn op(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> Option<OpcodeMetadata> {
    Some(OpcodeMetadata {
        mnemonic,
        addressing_mode,
        base_cycles,
        size_bytes: addressing_mode.instruction_len(),
    })
}

const ILLEGAL: Option<OpcodeMetadata> = None;

/// Looks up the metadata for `opcode`, or `None` for an illegal opcode.
#[inline]
pub fn decode(opcode: u8) -> Option<&'static OpcodeMetadata> {
    OPCODE_TABLE[opcode as usize].as_ref()
}

/// Complete 256-entry opcode table indexed by opcode byte value.
#[rustfmt::skip]
pub const OPCODE_TABLE: [Option<OpcodeMetadata>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;
    [
        op(Brk, Implicit, 7), // 0x00
        op(Ora, IndirectX, 6), // 0x01
        ILLEGAL, // 0x02
        ILLEGAL, // 0x03
        ILLEGAL, // 0x04
        op(Ora, ZeroPage, 3), // 0x05
        op(Asl, ZeroPage, 5), // 0x06
        ILLEGAL, // 0x07
        op(Php, Implicit, 3), // 0x08
        op(Ora, Immediate, 2), // 0x09
        op(Asl, Accumulator, 2), // 0x0A
        ILLEGAL, // 0x0B
        ILLEGAL, // 0x0C
        op(Ora, Absolute, 4), // 0x0D
        op(Asl, Absolute, 6), // 0x0E
        ILLEGAL, // 0x0F
        op(Bpl, Relative, 2), // 0x10
        op(Ora, IndirectY, 5), // 0x11
        ILLEGAL, // 0x12
        ILLEGAL, // 0x13
        ILLEGAL, // 0x14
        op(Ora, ZeroPageX, 4), // 0x15
        op(Asl, ZeroPageX, 6), // 0x16
        ILLEGAL, // 0x17
        op(Clc, Implicit, 2), // 0x18
        op(Ora, AbsoluteY, 4), // 0x19
        ILLEGAL, // 0x1A
        ILLEGAL, // 0x1B
        ILLEGAL, // 0x1C
        op(Ora, AbsoluteX, 4), // 0x1D
        op(Asl, AbsoluteX, 7), // 0x1E
        ILLEGAL, // 0x1F
        op(Jsr, Absolute, 6), // 0x20
        op(And, IndirectX, 6), // 0x21
        ILLEGAL, // 0x22
        ILLEGAL, // 0x23
        op(Bit, ZeroPage, 3), // 0x24
        op(And, ZeroPage, 3), // 0x25
        op(Rol, ZeroPage, 5), // 0x26
        ILLEGAL, // 0x27
        op(Plp, Implicit, 4), // 0x28
        op(And, Immediate, 2), // 0x29
        op(Rol, Accumulator, 2), // 0x2A
        ILLEGAL, // 0x2B
        op(Bit, Absolute, 4), // 0x2C
        op(And, Absolute, 4), // 0x2D
        op(Rol, Absolute, 6), // 0x2E
        ILLEGAL, // 0x2F
        op(Bmi, Relative, 2), // 0x30
        op(And, IndirectY, 5), // 0x31
        ILLEGAL, // 0x32
        ILLEGAL, // 0x33
        ILLEGAL, // 0x34
        op(And, ZeroPageX, 4), // 0x35
        op(Rol, ZeroPageX, 6), // 0x36
        ILLEGAL, // 0x37
        op(Sec, Implicit, 2), // 0x38
        op(And, AbsoluteY, 4), // 0x39
        ILLEGAL, // 0x3A
        ILLEGAL, // 0x3B
        ILLEGAL, // 0x3C
        op(And, AbsoluteX, 4), // 0x3D
        op(Rol, AbsoluteX, 7), // 0x3E
        ILLEGAL, // 0x3F
        op(Rti, Implicit, 6), // 0x40
        op(Eor, IndirectX, 6), // 0x41
        ILLEGAL, // 0x42
        ILLEGAL, // 0x43
        ILLEGAL, // 0x44
        op(Eor, ZeroPage, 3), // 0x45
        op(Lsr, ZeroPage, 5), // 0x46
        ILLEGAL, // 0x47
        op(Pha, Implicit, 3), // 0x48
        op(Eor, Immediate, 2), // 0x49
        op(Lsr, Accumulator, 2), // 0x4A
        ILLEGAL, // 0x4B
        op(Jmp, Absolute, 3), // 0x4C
        op(Eor, Absolute, 4), // 0x4D
        op(Lsr, Absolute, 6), // 0x4E
        ILLEGAL, // 0x4F
        op(Bvc, Relative, 2), // 0x50
        op(Eor, IndirectY, 5), // 0x51
        ILLEGAL, // 0x52
        ILLEGAL, // 0x53
        ILLEGAL, // 0x54
        op(Eor, ZeroPageX, 4), // 0x55
        op(Lsr, ZeroPageX, 6), // 0x56
        ILLEGAL, // 0x57
        op(Cli, Implicit, 2), // 0x58
        op(Eor, AbsoluteY, 4), // 0x59
        ILLEGAL, // 0x5A
        ILLEGAL, // 0x5B
        ILLEGAL, // 0x5C
        op(Eor, AbsoluteX, 4), // 0x5D
        op(Lsr, AbsoluteX, 7), // 0x5E
        ILLEGAL, // 0x5F
        op(Rts, Implicit, 6), // 0x60
        op(Adc, IndirectX, 6), // 0x61
        ILLEGAL, // 0x62
        ILLEGAL, // 0x63
        ILLEGAL, // 0x64
        op(Adc, ZeroPage, 3), // 0x65
        op(Ror, ZeroPage, 5), // 0x66
        ILLEGAL, // 0x67
        op(Pla, Implicit, 4), // 0x68
        op(Adc, Immediate, 2), // 0x69
        op(Ror, Accumulator, 2), // 0x6A
        ILLEGAL, // 0x6B
        op(Jmp, Indirect, 5), // 0x6C
        op(Adc, Absolute, 4), // 0x6D
        op(Ror, Absolute, 6), // 0x6E
        ILLEGAL, // 0x6F
        op(Bvs, Relative, 2), // 0x70
        op(Adc, IndirectY, 5), // 0x71
        ILLEGAL, // 0x72
        ILLEGAL, // 0x73
        ILLEGAL, // 0x74
        op(Adc, ZeroPageX, 4), // 0x75
        op(Ror, ZeroPageX, 6), // 0x76
        ILLEGAL, // 0x77
        op(Sei, Implicit, 2), // 0x78
        op(Adc, AbsoluteY, 4), // 0x79
        ILLEGAL, // 0x7A
        ILLEGAL, // 0x7B
        ILLEGAL, // 0x7C
        op(Adc, AbsoluteX, 4), // 0x7D
        op(Ror, AbsoluteX, 7), // 0x7E
        ILLEGAL, // 0x7F
        ILLEGAL, // 0x80
        op(Sta, IndirectX, 6), // 0x81
        ILLEGAL, // 0x82
        ILLEGAL, // 0x83
        op(Sty, ZeroPage, 3), // 0x84
        op(Sta, ZeroPage, 3), // 0x85
        op(Stx, ZeroPage, 3), // 0x86
        ILLEGAL, // 0x87
        op(Dey, Implicit, 2), // 0x88
        ILLEGAL, // 0x89
        op(Txa, Implicit, 2), // 0x8A
        ILLEGAL, // 0x8B
        op(Sty, Absolute, 4), // 0x8C
        op(Sta, Absolute, 4), // 0x8D
        op(Stx, Absolute, 4), // 0x8E
        ILLEGAL, // 0x8F
        op(Bcc, Relative, 2), // 0x90
        op(Sta, IndirectY, 6), // 0x91
        ILLEGAL, // 0x92
        ILLEGAL, // 0x93
        op(Sty, ZeroPageX, 4), // 0x94
        op(Sta, ZeroPageX, 4), // 0x95
        op(Stx, ZeroPageY, 4), // 0x96
        ILLEGAL, // 0x97
        op(Tya, Implicit, 2), // 0x98
        op(Sta, AbsoluteY, 5), // 0x99
        op(Txs, Implicit, 2), // 0x9A
        ILLEGAL, // 0x9B
        ILLEGAL, // 0x9C
        op(Sta, AbsoluteX, 5), // 0x9D
        ILLEGAL, // 0x9E
        ILLEGAL, // 0x9F
        op(Ldy, Immediate, 2), // 0xA0
        op(Lda, IndirectX, 6), // 0xA1
        op(Ldx, Immediate, 2), // 0xA2
        ILLEGAL, // 0xA3
        op(Ldy, ZeroPage, 3), // 0xA4
        op(Lda, ZeroPage, 3), // 0xA5
        op(Ldx, ZeroPage, 3), // 0xA6
        ILLEGAL, // 0xA7
        op(Tay, Implicit, 2), // 0xA8
        op(Lda, Immediate, 2), // 0xA9
        op(Tax, Implicit, 2), // 0xAA
        ILLEGAL, // 0xAB
        op(Ldy, Absolute, 4), // 0xAC
        op(Lda, Absolute, 4), // 0xAD
        op(Ldx, Absolute, 4), // 0xAE
        ILLEGAL, // 0xAF
        op(Bcs, Relative, 2), // 0xB0
        op(Lda, IndirectY, 5), // 0xB1
        ILLEGAL, // 0xB2
        ILLEGAL, // 0xB3
        op(Ldy, ZeroPageX, 4), // 0xB4
        op(Lda, ZeroPageX, 4), // 0xB5
        op(Ldx, ZeroPageY, 4), // 0xB6
        ILLEGAL, // 0xB7
        op(Clv, Implicit, 2), // 0xB8
        op(Lda, AbsoluteY, 4), // 0xB9
        op(Tsx, Implicit, 2), // 0xBA
        ILLEGAL, // 0xBB
        op(Ldy, AbsoluteX, 4), // 0xBC
        op(Lda, AbsoluteX, 4), // 0xBD
        op(Ldx, AbsoluteY, 4), // 0xBE
        ILLEGAL, // 0xBF
        op(Cpy, Immediate, 2), // 0xC0
        op(Cmp, IndirectX, 6), // 0xC1
        ILLEGAL, // 0xC2
        ILLEGAL, // 0xC3
        op(Cpy, ZeroPage, 3), // 0xC4
        op(Cmp, ZeroPage, 3), // 0xC5
        op(Dec, ZeroPage, 5), // 0xC6
        ILLEGAL, // 0xC7
        op(Iny, Implicit, 2), // 0xC8
        op(Cmp, Immediate, 2), // 0xC9
        op(Dex, Implicit, 2), // 0xCA
        ILLEGAL, // 0xCB
        op(Cpy, Absolute, 4), // 0xCC
        op(Cmp, Absolute, 4), // 0xCD
        op(Dec, Absolute, 6), // 0xCE
        ILLEGAL, // 0xCF
        op(Bne, Relative, 2), // 0xD0
        op(Cmp, IndirectY, 5), // 0xD1
        ILLEGAL, // 0xD2
        ILLEGAL, // 0xD3
        ILLEGAL, // 0xD4
        op(Cmp, ZeroPageX, 4), // 0xD5
        op(Dec, ZeroPageX, 6), // 0xD6
        ILLEGAL, // 0xD7
        op(Cld, Implicit, 2), // 0xD8
        op(Cmp, AbsoluteY, 4), // 0xD9
        ILLEGAL, // 0xDA
        ILLEGAL, // 0xDB
        ILLEGAL, // 0xDC
        op(Cmp, AbsoluteX, 4), // 0xDD
        op(Dec, AbsoluteX, 7), // 0xDE
        ILLEGAL, // 0xDF
        op(Cpx, Immediate, 2), // 0xE0
        op(Sbc, IndirectX, 6), // 0xE1
        ILLEGAL, // 0xE2
        ILLEGAL, // 0xE3
        op(Cpx, ZeroPage, 3), // 0xE4
        op(Sbc, ZeroPage, 3), // 0xE5
        op(Inc, ZeroPage, 5), // 0xE6
        ILLEGAL, // 0xE7
        op(Inx, Implicit, 2), // 0xE8
        op(Sbc, Immediate, 2), // 0xE9
        op(Nop, Implicit, 2), // 0xEA
        ILLEGAL, // 0xEB
        op(Cpx, Absolute, 4), // 0xEC
        op(Sbc, Absolute, 4), // 0xED
        op(Inc, Absolute, 6), // 0xEE
        ILLEGAL, // 0xEF
        op(Beq, Relative, 2), // 0xF0
        op(Sbc, IndirectY, 5), // 0xF1
        ILLEGAL, // 0xF2
        ILLEGAL, // 0xF3
        ILLEGAL, // 0xF4
        op(Sbc, ZeroPageX, 4), // 0xF5
        op(Inc, ZeroPageX, 6), // 0xF6
        ILLEGAL, // 0xF7
        op(Sed, Implicit, 2), // 0xF8
        op(Sbc, AbsoluteY, 4), // 0xF9
        ILLEGAL, // 0xFA
        ILLEGAL, // 0xFB
        ILLEGAL, // 0xFC
        op(Sbc, AbsoluteX, 4), // 0xFD
        op(Inc, AbsoluteX, 7), // 0xFE
        ILLEGAL, // 0xFF
    ]
};
