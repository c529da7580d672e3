//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all 6502 instructions, organized by category.
//! Each instruction is a standalone function that takes a mutable reference to the CPU and
//! the resolved operand, and returns a [`Control`] telling the loop how to move PC.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::addressing::{Location, Operand, Resolved};
use crate::opcodes::Mnemonic;
use crate::{EmulatorError, MemoryBus, CPU};

/// How the fetch-execute loop should move PC after an instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    /// Advance PC by the instruction length.
    Advance(u8),
    /// The instruction set PC itself; advance by 0.
    Jumped,
    /// BRK executed and the run ends here.
    Break,
}

/// Executes `mnemonic` against its resolved operand.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mnemonic: Mnemonic,
    resolved: Resolved,
) -> Result<Control, EmulatorError> {
    use Mnemonic::*;

    match mnemonic {
        Lda => load_store::execute_lda(cpu, resolved),
        Ldx => load_store::execute_ldx(cpu, resolved),
        Ldy => load_store::execute_ldy(cpu, resolved),
        Sta => load_store::execute_sta(cpu, resolved),
        Stx => load_store::execute_stx(cpu, resolved),
        Sty => load_store::execute_sty(cpu, resolved),

        Tax => transfer::execute_tax(cpu, resolved),
        Tay => transfer::execute_tay(cpu, resolved),
        Txa => transfer::execute_txa(cpu, resolved),
        Tya => transfer::execute_tya(cpu, resolved),
        Tsx => transfer::execute_tsx(cpu, resolved),
        Txs => transfer::execute_txs(cpu, resolved),

        Adc => alu::execute_adc(cpu, resolved),
        Sbc => alu::execute_sbc(cpu, resolved),
        And => alu::execute_and(cpu, resolved),
        Ora => alu::execute_ora(cpu, resolved),
        Eor => alu::execute_eor(cpu, resolved),
        Cmp => alu::execute_cmp(cpu, resolved),
        Cpx => alu::execute_cpx(cpu, resolved),
        Cpy => alu::execute_cpy(cpu, resolved),
        Bit => alu::execute_bit(cpu, resolved),

        Asl => shifts::execute_asl(cpu, resolved),
        Lsr => shifts::execute_lsr(cpu, resolved),
        Rol => shifts::execute_rol(cpu, resolved),
        Ror => shifts::execute_ror(cpu, resolved),

        Inc => inc_dec::execute_inc(cpu, resolved),
        Dec => inc_dec::execute_dec(cpu, resolved),
        Inx => inc_dec::execute_inx(cpu, resolved),
        Iny => inc_dec::execute_iny(cpu, resolved),
        Dex => inc_dec::execute_dex(cpu, resolved),
        Dey => inc_dec::execute_dey(cpu, resolved),

        Clc => flags::execute_clc(cpu, resolved),
        Sec => flags::execute_sec(cpu, resolved),
        Cli => flags::execute_cli(cpu, resolved),
        Sei => flags::execute_sei(cpu, resolved),
        Cld => flags::execute_cld(cpu, resolved),
        Sed => flags::execute_sed(cpu, resolved),
        Clv => flags::execute_clv(cpu, resolved),

        Bpl => branches::execute_bpl(cpu, resolved),
        Bmi => branches::execute_bmi(cpu, resolved),
        Bvc => branches::execute_bvc(cpu, resolved),
        Bvs => branches::execute_bvs(cpu, resolved),
        Bcc => branches::execute_bcc(cpu, resolved),
        Bcs => branches::execute_bcs(cpu, resolved),
        Bne => branches::execute_bne(cpu, resolved),
        Beq => branches::execute_beq(cpu, resolved),

        Jmp => control::execute_jmp(cpu, resolved),
        Jsr => control::execute_jsr(cpu, resolved),
        Rts => control::execute_rts(cpu, resolved),
        Brk => control::execute_brk(cpu, resolved),
        Rti => control::execute_rti(cpu, resolved),
        Nop => control::execute_nop(cpu, resolved),

        Pha => stack::execute_pha(cpu, resolved),
        Php => stack::execute_php(cpu, resolved),
        Pla => stack::execute_pla(cpu, resolved),
        Plp => stack::execute_plp(cpu, resolved),
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Reads the value of a read operand (immediate literal or location).
    ///
    /// The opcode table only pairs value-reading instructions with modes that
    /// resolve to `Value` or `Location`.
    pub(crate) fn operand_value(&self, operand: Operand) -> u8 {
        match operand {
            Operand::Value(value) => value,
            Operand::Location(location) => self.read_location(location),
            Operand::None | Operand::Target(_) => {
                unreachable!("operand {:?} has no value", operand)
            }
        }
    }

    /// Returns the writable location of a store or read-modify-write operand.
    pub(crate) fn operand_location(&self, operand: Operand) -> Location {
        match operand {
            Operand::Location(location) => location,
            _ => unreachable!("operand {:?} is not a location", operand),
        }
    }

    /// Returns the destination of a jump or branch operand.
    pub(crate) fn operand_target(&self, operand: Operand) -> u16 {
        match operand {
            Operand::Target(target) => target,
            Operand::Location(Location::Memory(addr)) => addr,
            _ => unreachable!("operand {:?} is not a jump target", operand),
        }
    }
}
