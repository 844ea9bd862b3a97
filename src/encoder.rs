//! Block encoder producing the packed wire format.

use serde::{Deserialize, Serialize};

use crate::constants::{bits_needed, mask, words_per_block, BLOCK_SIZE, MAX_PACKED_WIDTH};
use crate::error::EncodeError;
use crate::unpack::pack;

/// Encoder for the `WordPack` block format
///
/// Appends encoded blocks to an internal byte buffer. Encoding is the exact
/// inverse of [`decode_block`](crate::decode_block): a buffer built here
/// decodes back to the same value blocks in the same order.
///
/// A thin wrapper around `Vec<u8>`, so it is cheap to clone, serialize, and
/// hand off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoder {
    /// Encoded block stream
    buf: Vec<u8>,
}

impl Encoder {
    /// Create an empty encoder
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Append a block, picking the cheapest encoding
    ///
    /// All 128 values equal becomes a uniform block; otherwise the block is
    /// packed at the smallest width that fits the largest value.
    ///
    /// # Errors
    /// Returns `EncodeError::InvalidBitWidth` if any value needs more than 31
    /// bits (the packed-block header cannot express width 32).
    pub fn write_block(&mut self, values: &[u32; BLOCK_SIZE]) -> Result<(), EncodeError> {
        let first = values[0];
        if values.iter().all(|&v| v == first) {
            self.write_uniform(first);
            return Ok(());
        }
        let max = values.iter().copied().max().unwrap_or(0);
        self.write_packed(values, bits_needed(max))
    }

    /// Append a uniform block: tag `0` plus the var-uint value
    pub fn write_uniform(&mut self, value: u32) {
        self.buf.push(0);
        self.write_vuint(value);
    }

    /// Append a packed block at an explicit width: tag `width` plus `2 * width`
    /// big-endian words
    ///
    /// # Errors
    /// - `EncodeError::InvalidBitWidth` if `width` is 0 or above 31
    /// - `EncodeError::ValueTooLarge` if any value does not fit in `width` bits
    pub fn write_packed(
        &mut self,
        values: &[u32; BLOCK_SIZE],
        width: u8,
    ) -> Result<(), EncodeError> {
        if width == 0 || width > MAX_PACKED_WIDTH {
            return Err(EncodeError::InvalidBitWidth { width });
        }
        let w = u32::from(width);
        for &v in values {
            if u64::from(v) & !mask(w) != 0 {
                return Err(EncodeError::ValueTooLarge { value: v, width });
            }
        }

        let mut words = [0u64; words_per_block(MAX_PACKED_WIDTH as u32)];
        let n = words_per_block(w);
        pack(values, w, &mut words[..n]);

        self.buf.push(width);
        self.buf.reserve(n * 8);
        for &word in &words[..n] {
            self.buf.extend_from_slice(&word.to_be_bytes());
        }
        Ok(())
    }

    /// Append a base-128 var-uint (low group first, high bit = continuation)
    fn write_vuint(&mut self, mut value: u32) {
        while value >= 0x80 {
            self.buf.push((value as u8 & 0x7F) | 0x80);
            value >>= 7;
        }
        self.buf.push(value as u8);
    }

    /// Encoded bytes so far
    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consume the encoder and take the buffer
    #[inline]
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    /// Encoded length in bytes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True if no blocks have been written
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Discard all encoded data, keeping the allocation
    #[inline]
    pub fn clear(&mut self) {
        self.buf.clear();
    }
}
