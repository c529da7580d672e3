//! Memory dump formatting.

use std::fmt;

use crate::memory::MemoryBus;

/// A rectangular view of memory: `rows` lines of `row_len` bytes from `start`.
///
/// Rows that would extend past 0xFFFF are omitted rather than wrapped.
///
/// ```
/// use emu6502::{dump::MemoryDump, FlatMemory, MemoryBus};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x0001, 0xAB);
///
/// let dump = MemoryDump::new(0x0000, 2, 4);
/// assert_eq!(dump.render(&mem), "0000: 00 AB 00 00\n0004: 00 00 00 00\n");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoryDump {
    pub start: u16,
    pub rows: usize,
    pub row_len: usize,
}

impl MemoryDump {
    pub fn new(start: u16, rows: usize, row_len: usize) -> Self {
        Self {
            start,
            rows,
            row_len,
        }
    }

    /// Start addresses of the rows that fit in the address space.
    pub fn row_starts(&self) -> impl Iterator<Item = u16> + '_ {
        let start = self.start as usize;
        (0..self.rows)
            .map(move |row| {
                let row_start = row.checked_mul(self.row_len)?.checked_add(start)?;
                let row_end = row_start.checked_add(self.row_len)?;
                (row_end <= 0x10000).then_some(row_start as u16)
            })
            .take_while(Option::is_some)
            .flatten()
    }

    /// Formats the dump, one `AAAA: BB BB ..` line per row.
    pub fn render<M: MemoryBus>(&self, memory: &M) -> String {
        let mut out = String::new();
        for row_start in self.row_starts() {
            let bytes = memory.read_range(row_start, self.row_len);
            // Writing to a String cannot fail.
            let _ = fmt::write(&mut out, format_args!("{}\n", Row(row_start, &bytes)));
        }
        out
    }
}

struct Row<'a>(u16, &'a [u8]);

impl fmt::Display for Row<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}:", self.0)?;
        for byte in self.1 {
            write!(f, " {:02X}", byte)?;
        }
        Ok(())
    }
}
