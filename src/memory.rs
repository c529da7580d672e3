//! # Memory Bus Abstraction
//!
//! This module provides the `MemoryBus` trait that decouples the CPU from its
//! backing store, and `FlatMemory`, the 64KB flat store the emulator runs on.
//!
//! ## Design Principles
//!
//! The MemoryBus trait follows 6502 hardware behavior:
//! - No bus errors - reads/writes always succeed
//! - No protected regions - the vectors at 0xFFFA-0xFFFF are ordinary memory
//! - All addresses are 16-bit, so every access is implicitly modulo 65536

/// Memory bus trait for CPU to read/write bytes.
///
/// The CPU accesses all memory through this abstraction.
///
/// # Examples
///
/// ```
/// use emu6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
///
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// This method must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// This method must never panic.
    fn write(&mut self, addr: u16, value: u8);

    /// Reads a little-endian 16-bit word from `addr` and `addr + 1`.
    ///
    /// The second address wraps at 0xFFFF.
    ///
    /// ```
    /// use emu6502::{MemoryBus, FlatMemory};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.write(0xFFFC, 0x00);
    /// mem.write(0xFFFD, 0x80);
    /// assert_eq!(mem.read_word(0xFFFC), 0x8000);
    /// ```
    fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read(addr) as u16;
        let hi = self.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    /// Copies `bytes` into memory starting at `origin`.
    ///
    /// Callers are responsible for checking that the image fits; addresses
    /// past 0xFFFF wrap.
    fn load(&mut self, origin: u16, bytes: &[u8]) {
        for (offset, &byte) in bytes.iter().enumerate() {
            self.write(origin.wrapping_add(offset as u16), byte);
        }
    }

    /// Returns a copy of `len` bytes starting at `start`, wrapping at 0xFFFF.
    fn read_range(&self, start: u16, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.read(start.wrapping_add(offset as u16)))
            .collect()
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses (0x0000-0xFFFF) are mapped to a single contiguous
/// array initialized to 0x00.
///
/// # Examples
///
/// ```
/// use emu6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte (PC = 0x8000)
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; 65536]>,
}

impl FlatMemory {
    /// Total number of addressable bytes.
    pub const SIZE: usize = 0x10000;

    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    ///
    /// ```
    /// use emu6502::{FlatMemory, MemoryBus};
    ///
    /// let mem = FlatMemory::new();
    /// assert_eq!(mem.read(0x0000), 0x00);
    /// assert_eq!(mem.read(0xFFFF), 0x00);
    /// ```
    pub fn new() -> Self {
        Self {
            data: Box::new([0; 65536]),
        }
    }

    /// Borrows the whole address space.
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..]
    }

    /// Resets every byte to zero.
    pub fn clear(&mut self) {
        self.data.fill(0);
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }

    fn load(&mut self, origin: u16, bytes: &[u8]) {
        let start = origin as usize;
        let end = start + bytes.len();
        if end <= Self::SIZE {
            self.data[start..end].copy_from_slice(bytes);
        } else {
            let (head, tail) = bytes.split_at(Self::SIZE - start);
            self.data[start..].copy_from_slice(head);
            self.data[..tail.len()].copy_from_slice(tail);
        }
    }
}
