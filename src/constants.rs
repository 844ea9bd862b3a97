//! Internal constants and width math for the packed block layout.

/// Number of logical values in every block
pub const BLOCK_SIZE: usize = 128;

/// Bits per storage word
pub(crate) const WORD_BITS: u32 = 64;

/// Largest width a packed-block header may carry
pub const MAX_PACKED_WIDTH: u8 = 31;

/// Number of 64-bit words holding one packed block of the given width
///
/// `BLOCK_SIZE * width == WORD_BITS * 2 * width`, so a block always fills a
/// whole number of words with no padding.
#[inline]
pub(crate) const fn words_per_block(width: u32) -> usize {
    2 * width as usize
}

/// Low `width` bits set
#[inline]
pub(crate) const fn mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Reduced repeating unit of the bit-offset pattern for one width
///
/// The smallest `(blocks, values)` pair with `blocks * 64 == values * width`.
/// A full block is this cycle repeated `iters` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cycle {
    /// Words consumed per cycle
    pub blocks: usize,
    /// Values produced per cycle
    pub values: usize,
    /// Cycle repetitions per block (always integral)
    pub iters: usize,
}

/// Compute the reduced cycle for a width in `[1, 32]`
pub(crate) const fn cycle(width: u32) -> Cycle {
    let mut blocks = width as usize;
    let mut values = WORD_BITS as usize;
    while blocks % 2 == 0 && values % 2 == 0 {
        blocks /= 2;
        values /= 2;
    }
    Cycle {
        blocks,
        values,
        iters: BLOCK_SIZE / values,
    }
}

/// Number of bits needed to represent `max_val`, clamped to at least 1
///
/// A block of all zeros still needs a 1-bit encoding; width 0 is reserved
/// for the uniform-block tag.
#[inline]
#[must_use]
pub fn bits_needed(max_val: u32) -> u8 {
    if max_val == 0 {
        1
    } else {
        (32 - max_val.leading_zeros()) as u8
    }
}
