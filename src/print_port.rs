//! Watched-address character output.
//!
//! One memory address can be designated as a print port. Every store
//! instruction that targets exactly that address also emits the stored byte
//! as a character. In buffered mode the characters are held until the run
//! ends so they do not interleave with trace or dump output.

use std::fmt;
use std::io::{self, Write};

/// Print port attached to a single memory address.
pub struct PrintPort {
    address: u16,
    buffered: bool,
    pending: Vec<u8>,
    sink: Box<dyn Write + Send>,
}

impl PrintPort {
    /// Creates a port on `address` writing to standard output.
    pub fn new(address: u16, buffered: bool) -> Self {
        Self::with_sink(address, buffered, Box::new(io::stdout()))
    }

    pub fn with_sink(address: u16, buffered: bool, sink: Box<dyn Write + Send>) -> Self {
        Self {
            address,
            buffered,
            pending: Vec::new(),
            sink,
        }
    }

    pub fn address(&self) -> u16 {
        self.address
    }

    pub fn is_buffered(&self) -> bool {
        self.buffered
    }

    /// Bytes held back in buffered mode and not yet flushed.
    pub fn pending(&self) -> &[u8] {
        &self.pending
    }

    /// Handles a store of `value` to `addr`; ignored unless `addr` is the port.
    pub fn notify_store(&mut self, addr: u16, value: u8) -> io::Result<()> {
        if addr != self.address {
            return Ok(());
        }
        if self.buffered {
            self.pending.push(value);
            Ok(())
        } else {
            self.sink.write_all(&[value])?;
            self.sink.flush()
        }
    }

    /// Writes out any buffered characters.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        self.sink.write_all(&self.pending)?;
        self.pending.clear();
        self.sink.flush()
    }
}

impl fmt::Debug for PrintPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintPort")
            .field("address", &self.address)
            .field("buffered", &self.buffered)
            .field("pending", &self.pending.len())
            .finish()
    }
}
