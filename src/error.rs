//! Error types for block encoding and decoding.

use std::fmt;

/// Error returned when decoding a block fails
///
/// Every variant is a data-integrity problem in the input buffer, not a
/// transient condition: there is nothing to retry and no default to fall
/// back to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Width tag above 31 (the packed-block header supports widths 0-31)
    InvalidBitWidth { width: u8 },
    /// Buffer cannot supply the bytes the block header promised
    BufferTooShort { expected: usize, actual: usize },
    /// Var-uint encoding exceeds the 32-bit value range
    VarIntOverflow,
}

/// Error returned when encoding a block fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// Value does not fit in the requested bit width
    ValueTooLarge { value: u32, width: u8 },
    /// Requested width is 0 or above 31
    InvalidBitWidth { width: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBitWidth { width } => {
                write!(f, "invalid bit width {width}, packed blocks support 1-31")
            }
            Self::BufferTooShort { expected, actual } => {
                write!(f, "buffer too short: expected at least {expected} bytes, got {actual}")
            }
            Self::VarIntOverflow => write!(f, "var-uint exceeds 32-bit range"),
        }
    }
}

impl std::error::Error for DecodeError {}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ValueTooLarge { value, width } => {
                write!(f, "value {value} does not fit in {width} bits")
            }
            Self::InvalidBitWidth { width } => {
                write!(f, "invalid bit width {width}, packed blocks support 1-31")
            }
        }
    }
}

impl std::error::Error for EncodeError {}
