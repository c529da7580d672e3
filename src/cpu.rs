//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, -, B, D, I, Z, C
//! - **Counters**: instructions executed and nominal base cycles
//!
//! ## Execution Model
//!
//! - `step()`: Fetch the opcode at PC plus the two following bytes, resolve the
//!   operand and execute one instruction
//! - `run()`: Step until BRK ends the run, a halt is requested, or an illegal
//!   opcode faults
//!
//! The halt flag is polled between instructions only, so a cancelled run leaves
//! the machine exactly as the last completed instruction left it.

use std::fmt;
use std::io::Write;

use log::{debug, info, trace, warn};

use crate::addressing::{self, Location};
use crate::config::EmulatorConfig;
use crate::halt::HaltHandle;
use crate::instructions::{self, Control};
use crate::memory::{FlatMemory, MemoryBus};
use crate::opcodes::{decode, Mnemonic};
use crate::print_port::PrintPort;
use crate::registers::{Registers, StatusFlags};
use crate::throttle::Throttle;
use crate::EmulatorError;

/// Reset vector (low byte, high byte).
pub const RESET_VECTOR: u16 = 0xFFFC;
/// IRQ/BRK vector (low byte, high byte).
pub const IRQ_VECTOR: u16 = 0xFFFE;
/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// Whether the run should continue after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// BRK executed and the run should end.
    Break,
}

/// What a single `step()` executed and the state it left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepReport {
    /// Address the instruction was fetched from.
    pub pc: u16,
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    /// Register file after the instruction.
    pub registers: Registers,
    pub outcome: StepOutcome,
}

impl fmt::Display for StepReport {
    /// Trace line, e.g. `0002 AA - A: 05 X: 05 Y: 00 SR/NV-BDIZC: [00110100]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04X} {:02X} - A: {:02X} X: {:02X} Y: {:02X} SR/NV-BDIZC: [{}]",
            self.pc,
            self.opcode,
            self.registers.a,
            self.registers.x,
            self.registers.y,
            self.registers.status
        )
    }
}

/// Why `run()` stopped without an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HaltReason {
    Break,
    Cancelled,
}

/// Totals for one `run()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub instructions: u64,
    pub cycles: u64,
    pub reason: HaltReason,
}

/// 6502 CPU state and execution context.
///
/// The CPU owns its register file and memory. It is generic over the memory
/// implementation via the `MemoryBus` trait and defaults to [`FlatMemory`].
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Low byte
/// memory.write(0xFFFD, 0x80); // High byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
///
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.status(), 0x36);
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    pub(crate) regs: Registers,

    /// Nominal cycles executed (base cycles only)
    pub(crate) cycles: u64,

    /// Instructions executed
    pub(crate) instructions: u64,

    pub(crate) memory: M,

    pub(crate) config: EmulatorConfig,

    pub(crate) print_port: Option<PrintPort>,

    halt: HaltHandle,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU with default configuration.
    ///
    /// Registers take their power-on values and PC is loaded from the reset
    /// vector at 0xFFFC/0xFFFD.
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, EmulatorConfig::default())
    }

    /// Creates a CPU with the given run options.
    ///
    /// A configured print port writes to standard output; use
    /// [`set_print_port`](Self::set_print_port) to redirect it.
    pub fn with_config(memory: M, config: EmulatorConfig) -> Self {
        let pc = memory.read_word(RESET_VECTOR);
        let print_port = config
            .print_port
            .map(|addr| PrintPort::new(addr, config.buffer_output));

        Self {
            regs: Registers::new(pc),
            cycles: 0,
            instructions: 0,
            memory,
            config,
            print_port,
            halt: HaltHandle::new(),
        }
    }

    /// Copies `program` into memory at `origin`.
    ///
    /// Fails with `LoadOverflow`, leaving memory untouched, when the program
    /// would run past 0xFFFF.
    pub fn load(&mut self, program: &[u8], origin: u16) -> Result<(), EmulatorError> {
        if origin as usize + program.len() > FlatMemory::SIZE {
            return Err(EmulatorError::LoadOverflow {
                origin,
                len: program.len(),
            });
        }
        debug!("loading {} bytes at 0x{:04X}", program.len(), origin);
        self.memory.load(origin, program);
        Ok(())
    }

    /// Loads `program` at `origin` and resets the CPU for a new run.
    ///
    /// PC is set to `pc_override` if given, otherwise to the reset vector as
    /// it reads after the program is loaded. Counters are zeroed and any
    /// pending halt request is cleared.
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.start(&[0xEA], 0x0200, Some(0x0200)).unwrap();
    /// assert_eq!(cpu.pc(), 0x0200);
    /// ```
    pub fn start(
        &mut self,
        program: &[u8],
        origin: u16,
        pc_override: Option<u16>,
    ) -> Result<(), EmulatorError> {
        self.load(program, origin)?;
        self.reset();
        if let Some(pc) = pc_override {
            self.regs.pc = pc;
        }
        self.halt.clear();
        debug!("starting at 0x{:04X}", self.regs.pc);
        Ok(())
    }

    /// Restores power-on registers, PC from the reset vector, and zeroes the counters.
    pub fn reset(&mut self) {
        self.regs = Registers::new(self.memory.read_word(RESET_VECTOR));
        self.cycles = 0;
        self.instructions = 0;
    }

    /// Executes one instruction.
    ///
    /// # Returns
    ///
    /// - `Ok(report)` describing the instruction and the resulting registers
    /// - `Err(EmulatorError::IllegalOpcode)` if the byte at PC is not a
    ///   documented opcode; no state changes
    ///
    /// # Examples
    ///
    /// ```
    /// use emu6502::{CPU, FlatMemory, Mnemonic};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.start(&[0xA9, 0x80], 0x8000, Some(0x8000)).unwrap();
    ///
    /// let report = cpu.step().unwrap();
    /// assert_eq!(report.mnemonic, Mnemonic::Lda);
    /// assert_eq!(report.registers.a, 0x80);
    /// assert_eq!(cpu.pc(), 0x8002);
    /// assert!(cpu.flag_n());
    /// ```
    pub fn step(&mut self) -> Result<StepReport, EmulatorError> {
        let pc = self.regs.pc;
        let opcode = self.memory.read(pc);
        let ops = [
            self.memory.read(pc.wrapping_add(1)),
            self.memory.read(pc.wrapping_add(2)),
        ];

        let metadata = match decode(opcode) {
            Some(metadata) => metadata,
            None => {
                warn!("illegal opcode 0x{:02X} at 0x{:04X}", opcode, pc);
                return Err(EmulatorError::IllegalOpcode { opcode, pc });
            }
        };

        let resolved =
            addressing::resolve(metadata.addressing_mode, ops, &self.regs, &self.memory);
        trace!(
            "0x{:04X}: {:02X} {} {:?}",
            pc,
            opcode,
            metadata.mnemonic,
            resolved.operand
        );

        let control = instructions::execute(self, metadata.mnemonic, resolved)?;

        let outcome = match control {
            Control::Advance(len) => {
                self.regs.pc = self.regs.pc.wrapping_add(len as u16);
                StepOutcome::Continue
            }
            Control::Jumped => StepOutcome::Continue,
            Control::Break => StepOutcome::Break,
        };

        self.cycles += metadata.base_cycles as u64;
        self.instructions += 1;

        Ok(StepReport {
            pc,
            opcode,
            mnemonic: metadata.mnemonic,
            registers: self.regs,
            outcome,
        })
    }

    /// Steps until BRK ends the run or a halt is requested.
    ///
    /// Buffered print-port output is flushed when the run ends, including when
    /// it ends with an error.
    pub fn run(&mut self) -> Result<RunSummary, EmulatorError> {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), handing each step report to `observer`.
    pub fn run_with<F>(&mut self, mut observer: F) -> Result<RunSummary, EmulatorError>
    where
        F: FnMut(&StepReport),
    {
        let start_instructions = self.instructions;
        let start_cycles = self.cycles;
        let mut throttle = self.config.target_hz.map(Throttle::new);

        let result = loop {
            if self.halt.is_requested() {
                break Ok(HaltReason::Cancelled);
            }

            let report = match self.step() {
                Ok(report) => report,
                Err(e) => break Err(e),
            };
            observer(&report);

            if report.outcome == StepOutcome::Break {
                break Ok(HaltReason::Break);
            }
            if let Some(throttle) = throttle.as_mut() {
                throttle.pace();
            }
        };

        let flushed = self.flush_output();
        let reason = result?;
        flushed?;

        let summary = RunSummary {
            instructions: self.instructions - start_instructions,
            cycles: self.cycles - start_cycles,
            reason,
        };
        info!(
            "run ended ({:?}) after {} instructions, {} cycles",
            summary.reason, summary.instructions, summary.cycles
        );
        Ok(summary)
    }

    /// Writes out print-port characters held back in buffered mode.
    pub fn flush_output(&mut self) -> Result<(), EmulatorError> {
        if let Some(port) = self.print_port.as_mut() {
            port.flush()?;
        }
        Ok(())
    }

    // ========== Operand and Stack Helpers ==========

    /// Reads the byte at a resolved location.
    #[inline]
    pub(crate) fn read_location(&self, location: Location) -> u8 {
        match location {
            Location::Accumulator => self.regs.a,
            Location::Memory(addr) => self.memory.read(addr),
        }
    }

    /// Writes the byte at a resolved location.
    #[inline]
    pub(crate) fn write_location(&mut self, location: Location, value: u8) {
        match location {
            Location::Accumulator => self.regs.a = value,
            Location::Memory(addr) => self.memory.write(addr, value),
        }
    }

    /// Pushes a byte: write at 0x0100 + SP, then decrement SP (wrapping).
    pub(crate) fn push(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.regs.sp as u16, value);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment SP (wrapping), then read at 0x0100 + SP.
    pub(crate) fn pop(&mut self) -> u8 {
        self.regs.sp = self.regs.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.regs.sp as u16)
    }

    /// Pushes a 16-bit value, high byte first.
    pub(crate) fn push_word(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.push(hi);
        self.push(lo);
    }

    /// Pops a 16-bit value, low byte first.
    pub(crate) fn pop_word(&mut self) -> u16 {
        let lo = self.pop();
        let hi = self.pop();
        u16::from_le_bytes([lo, hi])
    }

    // ========== Run Control ==========

    /// Returns a handle that can stop a running loop from another thread.
    pub fn halt_handle(&self) -> HaltHandle {
        self.halt.clone()
    }

    /// Replaces the halt flag, e.g. with one shared with a signal handler.
    pub fn set_halt_handle(&mut self, handle: HaltHandle) {
        self.halt = handle;
    }

    pub fn request_halt(&self) {
        self.halt.request();
    }

    pub fn halt_requested(&self) -> bool {
        self.halt.is_requested()
    }

    pub fn config(&self) -> &EmulatorConfig {
        &self.config
    }

    /// Attaches a print port writing to `sink`, replacing any existing one.
    pub fn set_print_port(&mut self, address: u16, buffered: bool, sink: Box<dyn Write + Send>) {
        self.config.print_port = Some(address);
        self.config.buffer_output = buffered;
        self.print_port = Some(PrintPort::with_sink(address, buffered, sink));
    }

    pub fn print_port(&self) -> Option<&PrintPort> {
        self.print_port.as_ref()
    }

    // ========== Inspection ==========

    /// Returns a copy of the register file.
    pub fn registers(&self) -> Registers {
        self.regs
    }

    pub fn memory(&self) -> &M {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Copies `len` bytes of memory starting at `start`.
    pub fn read_range(&self, start: u16, len: usize) -> Vec<u8> {
        self.memory.read_range(start, len)
    }

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.regs.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.regs.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.regs.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.regs.pc
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP. The stack grows downward from 0x01FF.
    pub fn sp(&self) -> u8 {
        self.regs.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.regs.status.to_byte()
    }

    /// Returns the number of nominal cycles executed since the last reset.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of instructions executed since the last reset.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    // ========== Status Flag Getters ==========

    pub fn flag_n(&self) -> bool {
        self.regs.status.negative
    }

    pub fn flag_v(&self) -> bool {
        self.regs.status.overflow
    }

    pub fn flag_b(&self) -> bool {
        self.regs.status.brk
    }

    pub fn flag_d(&self) -> bool {
        self.regs.status.decimal
    }

    pub fn flag_i(&self) -> bool {
        self.regs.status.interrupt_disable
    }

    pub fn flag_z(&self) -> bool {
        self.regs.status.zero
    }

    pub fn flag_c(&self) -> bool {
        self.regs.status.carry
    }

    // ========== Register Setters ==========

    pub fn set_a(&mut self, value: u8) {
        self.regs.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.regs.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.regs.y = value;
    }

    pub fn set_pc(&mut self, value: u16) {
        self.regs.pc = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.regs.sp = value;
    }

    /// Sets all eight status bits from a packed byte.
    pub fn set_status(&mut self, value: u8) {
        self.regs.status = StatusFlags::from_byte(value);
    }

    pub fn set_flag_n(&mut self, value: bool) {
        self.regs.status.negative = value;
    }

    pub fn set_flag_v(&mut self, value: bool) {
        self.regs.status.overflow = value;
    }

    pub fn set_flag_d(&mut self, value: bool) {
        self.regs.status.decimal = value;
    }

    pub fn set_flag_i(&mut self, value: bool) {
        self.regs.status.interrupt_disable = value;
    }

    pub fn set_flag_z(&mut self, value: bool) {
        self.regs.status.zero = value;
    }

    pub fn set_flag_c(&mut self, value: bool) {
        self.regs.status.carry = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn cpu_with(program: &[u8]) -> CPU<FlatMemory> {
        let mut cpu = CPU::new(FlatMemory::new());
        cpu.start(program, 0x8000, Some(0x8000)).unwrap();
        cpu
    }

    #[test]
    fn test_cpu_initialization() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);

        let cpu = CPU::new(mem);

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.cycles(), 0);

        assert!(cpu.flag_i());
        assert!(cpu.flag_z());
        assert!(cpu.flag_b());
        assert!(!cpu.flag_n());
        assert!(!cpu.flag_v());
        assert!(!cpu.flag_d());
        assert!(!cpu.flag_c());
    }

    #[test]
    fn test_start_reads_reset_vector_after_loading() {
        let mut program = vec![0u8; 4];
        program[2] = 0x34;
        program[3] = 0x12;

        let mut cpu = CPU::new(FlatMemory::new());
        cpu.start(&program, 0xFFFA, None).unwrap();

        assert_eq!(cpu.pc(), 0x1234);
    }

    #[test]
    fn test_load_overflow_leaves_memory_untouched() {
        let mut cpu = CPU::new(FlatMemory::new());

        let err = cpu.load(&[0xAA, 0xBB, 0xCC], 0xFFFE).unwrap_err();
        assert!(matches!(
            err,
            EmulatorError::LoadOverflow {
                origin: 0xFFFE,
                len: 3
            }
        ));
        assert_eq!(cpu.memory().read(0xFFFE), 0x00);
        assert_eq!(cpu.memory().read(0xFFFF), 0x00);
    }

    #[test]
    fn test_load_exactly_fills_memory() {
        let mut cpu = CPU::new(FlatMemory::new());
        assert!(cpu.load(&[0xEA; 16], 0xFFF0).is_ok());
        assert_eq!(cpu.memory().read(0xFFFF), 0xEA);
    }

    #[test]
    fn test_step_illegal_opcode_changes_nothing() {
        let mut cpu = cpu_with(&[0x02]);
        let before = cpu.registers();

        let err = cpu.step().unwrap_err();
        assert!(matches!(
            err,
            EmulatorError::IllegalOpcode {
                opcode: 0x02,
                pc: 0x8000
            }
        ));
        assert_eq!(cpu.registers(), before);
        assert_eq!(cpu.instructions(), 0);
    }

    #[test]
    fn test_step_counts_cycles_and_instructions() {
        let mut cpu = cpu_with(&[0xEA, 0xA9, 0x01]);

        cpu.step().unwrap();
        cpu.step().unwrap();

        assert_eq!(cpu.instructions(), 2);
        assert_eq!(cpu.cycles(), 4);
        assert_eq!(cpu.pc(), 0x8003);
    }

    #[test]
    fn test_stack_push_pop_wraps() {
        let mut cpu = cpu_with(&[]);
        cpu.set_sp(0x00);

        cpu.push(0x42);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0x42);

        assert_eq!(cpu.pop(), 0x42);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_push_word_is_high_byte_first() {
        let mut cpu = cpu_with(&[]);
        cpu.push_word(0xABCD);

        assert_eq!(cpu.memory().read(0x01FF), 0xAB);
        assert_eq!(cpu.memory().read(0x01FE), 0xCD);
        assert_eq!(cpu.pop_word(), 0xABCD);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_trace_line_format() {
        let mut cpu = cpu_with(&[0xA9, 0x05]);
        let report = cpu.step().unwrap();

        assert_eq!(
            report.to_string(),
            "8000 A9 - A: 05 X: 00 Y: 00 SR/NV-BDIZC: [00110100]"
        );
    }

    #[test]
    fn test_run_stops_on_requested_halt() {
        // JMP $8000 forever
        let mut cpu = cpu_with(&[0x4C, 0x00, 0x80]);
        let handle = cpu.halt_handle();

        let mut steps = 0;
        let summary = cpu
            .run_with(|_| {
                steps += 1;
                if steps == 10 {
                    handle.request();
                }
            })
            .unwrap();

        assert_eq!(summary.reason, HaltReason::Cancelled);
        assert_eq!(summary.instructions, 10);
        assert_eq!(cpu.pc(), 0x8000);
    }
}
