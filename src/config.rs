//! # Emulator Configuration
//!
//! [`EmulatorConfig`] carries the run options a host can set before starting a
//! program. The parsing helpers accept the argument formats of the command-line
//! runner: decimal or `0x`-prefixed hexadecimal numbers, and machine code
//! written as hex text.

use std::time::Duration;

use thiserror::Error;

/// Errors raised while interpreting configuration values.
///
/// These are reported before any emulation state is created.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid number: {value:?}")]
    InvalidNumber { value: String },

    #[error("{value} is out of range (maximum {max})")]
    OutOfRange { value: u64, max: u64 },

    #[error("invalid machine code at offset {offset}: {reason}")]
    InvalidHex { offset: usize, reason: &'static str },

    #[error("invalid frequency: {value:?}")]
    InvalidFrequency { value: String },
}

/// Run options for a [`CPU`](crate::CPU).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EmulatorConfig {
    /// Store address whose writes are echoed as characters.
    pub print_port: Option<u16>,

    /// When set, BRK vectors through 0xFFFE/0xFFFF and execution continues
    /// instead of ending the run.
    pub continue_after_brk: bool,

    /// Throttle the run loop to this many instructions per second.
    pub target_hz: Option<f64>,

    /// Hold print-port output until the run ends.
    pub buffer_output: bool,
}

/// Parses a decimal or `0x`-prefixed hexadecimal number.
///
/// ```
/// use emu6502::config::parse_number;
///
/// assert_eq!(parse_number("42"), Ok(42));
/// assert_eq!(parse_number("0xFFF9"), Ok(0xFFF9));
/// assert!(parse_number("0xZZ").is_err());
/// ```
pub fn parse_number(text: &str) -> Result<u64, ConfigError> {
    let trimmed = text.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|_| ConfigError::InvalidNumber {
        value: text.to_string(),
    })
}

/// Parses a 16-bit address.
pub fn parse_address(text: &str) -> Result<u16, ConfigError> {
    let value = parse_number(text)?;
    u16::try_from(value).map_err(|_| ConfigError::OutOfRange {
        value,
        max: u16::MAX as u64,
    })
}

/// Parses a count such as a dump row length.
pub fn parse_count(text: &str) -> Result<usize, ConfigError> {
    let value = parse_number(text)?;
    usize::try_from(value).map_err(|_| ConfigError::OutOfRange {
        value,
        max: usize::MAX as u64,
    })
}

/// Parses a positive, finite frequency in instructions per second.
///
/// Rates whose period does not fit in a `Duration` are rejected.
pub fn parse_frequency(text: &str) -> Result<f64, ConfigError> {
    match text.trim().parse::<f64>() {
        Ok(hz) if hz.is_finite() && hz > 0.0 && Duration::try_from_secs_f64(hz.recip()).is_ok() => {
            Ok(hz)
        }
        _ => Err(ConfigError::InvalidFrequency {
            value: text.to_string(),
        }),
    }
}

/// Parses machine code written as hex text.
///
/// Whitespace between bytes is optional: `"A9 05 AA"` and `"A905AA"` are the
/// same program.
///
/// ```
/// use emu6502::config::parse_hex_bytes;
///
/// assert_eq!(parse_hex_bytes("A9 05 aa"), Ok(vec![0xA9, 0x05, 0xAA]));
/// assert_eq!(parse_hex_bytes("E800"), Ok(vec![0xE8, 0x00]));
/// ```
pub fn parse_hex_bytes(text: &str) -> Result<Vec<u8>, ConfigError> {
    let digits: Vec<(usize, char)> = text
        .char_indices()
        .filter(|(_, c)| !c.is_whitespace())
        .collect();

    if digits.len() % 2 != 0 {
        return Err(ConfigError::InvalidHex {
            offset: text.len(),
            reason: "odd number of hex digits",
        });
    }

    digits
        .chunks(2)
        .map(|pair| {
            let mut byte = 0u8;
            for &(offset, c) in pair {
                let nibble = c.to_digit(16).ok_or(ConfigError::InvalidHex {
                    offset,
                    reason: "not a hex digit",
                })?;
                byte = (byte << 4) | nibble as u8;
            }
            Ok(byte)
        })
        .collect()
}
