//! # 6502 Instruction-Set Emulator
//!
//! An instruction-level NMOS 6502 emulator: a 64KB flat address space, the A/X/Y
//! registers, stack pointer, program counter and status flags. It runs
//! externally supplied machine code and exposes the resulting register and
//! memory state for inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use emu6502::{CPU, FlatMemory, HaltReason};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$05; TAX; INX; BRK
//! cpu.start(&[0xA9, 0x05, 0xAA, 0xE8, 0x00], 0x0000, Some(0x0000)).unwrap();
//! let summary = cpu.run().unwrap();
//!
//! assert_eq!(summary.reason, HaltReason::Break);
//! assert_eq!(cpu.a(), 0x05);
//! assert_eq!(cpu.x(), 0x06);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: every opcode maps to a mnemonic and addressing mode
//!   in [`OPCODE_TABLE`]; anything absent is an illegal opcode
//! - **Explicit operand resolution**: [`addressing::resolve`] turns operand bytes
//!   into a value, a writable [`Location`] or a control-flow target
//! - **Owned state**: registers and memory live in the [`CPU`] value; there is
//!   no global state, so hosts can run several emulators side by side
//! - **Cooperative control**: a [`HaltHandle`] stops the run loop between
//!   instructions and an optional [`Throttle`] paces it to a target frequency
//!
//! ## Modules
//!
//! - `cpu` - CPU state, run control and the fetch-execute loop
//! - `memory` - MemoryBus trait and the flat 64KB store
//! - `registers` - register file and status flags
//! - `opcodes` - opcode table
//! - `addressing` - addressing modes and operand resolution
//! - `config` - run options and argument parsing
//! - `halt` - cross-thread run cancellation
//! - `throttle` - instruction-rate pacing
//! - `print_port` - watched-address character output
//! - `dump` - memory dump formatting

pub mod addressing;
pub mod config;
pub mod cpu;
pub mod dump;
pub mod halt;
pub mod memory;
pub mod opcodes;
pub mod print_port;
pub mod registers;
pub mod throttle;

// Instruction implementations (not part of public API)
mod instructions;

pub use addressing::{AddressingMode, Location, Operand};
pub use config::{ConfigError, EmulatorConfig};
pub use cpu::{HaltReason, RunSummary, StepOutcome, StepReport, CPU};
pub use halt::HaltHandle;
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{decode, Mnemonic, OpcodeMetadata, OPCODE_TABLE};
pub use print_port::PrintPort;
pub use registers::{Registers, StatusFlags};
pub use throttle::Throttle;

use thiserror::Error;

/// Errors that can occur while loading or executing a program.
#[derive(Debug, Error)]
pub enum EmulatorError {
    /// The byte at `pc` is not a documented opcode. The run stops with the
    /// machine state unchanged by the faulting fetch.
    #[error("illegal opcode 0x{opcode:02X} at 0x{pc:04X}")]
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The program does not fit between its origin and the end of memory.
    /// Nothing is written.
    #[error("program of {len} bytes at origin 0x{origin:04X} overflows the 64KB address space")]
    LoadOverflow { origin: u16, len: usize },

    /// Writing print-port output failed.
    #[error("print port output failed: {0}")]
    Output(#[from] std::io::Error),
}
