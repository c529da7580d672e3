//! Cooperative cancellation.
//!
//! A [`HaltHandle`] wraps a shared atomic flag. Any thread (or a signal handler
//! installed by the host) may request a halt; the run loop polls the flag between
//! instructions, never mid-instruction, so the machine state always reflects the
//! last fully executed instruction.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle to a run loop's halt flag.
///
/// ```
/// use emu6502::HaltHandle;
///
/// let handle = HaltHandle::new();
/// let remote = handle.clone();
///
/// remote.request();
/// assert!(handle.is_requested());
///
/// handle.clear();
/// assert!(!remote.is_requested());
/// ```
#[derive(Debug, Clone, Default)]
pub struct HaltHandle {
    flag: Arc<AtomicBool>,
}

impl HaltHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asks the run loop to stop after the current instruction.
    pub fn request(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_requested(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    pub fn clear(&self) {
        self.flag.store(false, Ordering::Relaxed);
    }
}
