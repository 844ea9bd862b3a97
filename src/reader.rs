//! Forward-only cursor over an encoded byte buffer.

use crate::error::DecodeError;

/// Read cursor over encoded block data
///
/// Wraps a borrowed byte buffer (typically a slice of a memory-mapped
/// postings file) and advances strictly forward by the exact number of
/// bytes each read consumes. Every read is bounds-checked; running off the
/// end is `DecodeError::BufferTooShort`, never a partial result.
#[derive(Debug)]
pub struct BlockReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> BlockReader<'a> {
    /// Create a reader positioned at the start of `buf`
    #[inline]
    #[must_use]
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current byte offset from the start of the buffer
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Bytes left to read
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Check that `n` more bytes are available
    #[inline]
    fn require(&self, n: usize) -> Result<(), DecodeError> {
        let end = self.pos.saturating_add(n);
        if end > self.buf.len() {
            return Err(DecodeError::BufferTooShort {
                expected: end,
                actual: self.buf.len(),
            });
        }
        Ok(())
    }

    /// Read a single byte
    #[inline]
    pub fn read_byte(&mut self) -> Result<u8, DecodeError> {
        self.require(1)?;
        let b = self.buf[self.pos];
        self.pos += 1;
        Ok(b)
    }

    /// Read a base-128 var-uint (7 payload bits per byte, low group first,
    /// high bit = continuation)
    ///
    /// Rejects encodings that do not fit in 32 bits: a fifth byte with the
    /// continuation bit set, or with payload bits above the 32-bit boundary,
    /// is `DecodeError::VarIntOverflow`.
    pub fn read_vuint(&mut self) -> Result<u32, DecodeError> {
        let mut value = 0u32;
        for shift in [0u32, 7, 14, 21, 28] {
            let b = self.read_byte()?;
            if shift == 28 && b > 0x0F {
                return Err(DecodeError::VarIntOverflow);
            }
            value |= u32::from(b & 0x7F) << shift;
            if b & 0x80 == 0 {
                return Ok(value);
            }
        }
        // A fifth byte with the continuation bit set is caught above
        Err(DecodeError::VarIntOverflow)
    }

    /// Read `words.len()` consecutive 64-bit words
    ///
    /// Each word is stored as 8 bytes in big-endian order regardless of host
    /// byte order; `from_be_bytes` is the normalization, so the numeric
    /// values seen by the unpack routines are host-independent.
    pub fn read_words(&mut self, words: &mut [u64]) -> Result<(), DecodeError> {
        self.require(words.len() * 8)?;
        for w in words.iter_mut() {
            let b = &self.buf[self.pos..self.pos + 8];
            *w = u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]]);
            self.pos += 8;
        }
        Ok(())
    }
}
