//! Block decoding: width-tag dispatch and the uniform fast path.

use crate::constants::{words_per_block, BLOCK_SIZE, MAX_PACKED_WIDTH};
use crate::error::DecodeError;
use crate::reader::BlockReader;
use crate::unpack::unpack;

/// Scratch capacity for the widest packed block (2 * 31 words)
const MAX_WORDS: usize = words_per_block(MAX_PACKED_WIDTH as u32);

/// Decode one block of 128 values, advancing the reader past it
///
/// Reads the one-byte width tag, then:
/// - tag `0`: reads a var-uint and fills `out` with it (the common case for
///   low-cardinality or highly repetitive blocks, checked first);
/// - tag `W` in `[1, 31]`: reads exactly `2W` words and dispatches to the
///   unpack routine monomorphized for `W`;
/// - tag above 31: `DecodeError::InvalidBitWidth`.
///
/// The reader advances by exactly `1 + 16W` bytes for a packed block, or by
/// 1 plus the var-uint's encoded length for a uniform block. On error the
/// contents of `out` are unspecified and must not be used.
///
/// # Errors
/// - `DecodeError::InvalidBitWidth` for a width tag above 31
/// - `DecodeError::BufferTooShort` if the buffer cannot supply the body
/// - `DecodeError::VarIntOverflow` for a uniform value above `u32::MAX`
///
/// # Example
/// ```
/// use wordpack::{decode_block, BlockReader, BLOCK_SIZE};
///
/// // Uniform block: tag 0, var-uint 300 (two bytes)
/// let bytes = [0x00, 0xAC, 0x02];
/// let mut reader = BlockReader::new(&bytes);
/// let mut out = [0u32; BLOCK_SIZE];
/// decode_block(&mut reader, &mut out).unwrap();
/// assert_eq!(out, [300u32; BLOCK_SIZE]);
/// assert_eq!(reader.position(), 3);
/// ```
pub fn decode_block(
    reader: &mut BlockReader<'_>,
    out: &mut [u32; BLOCK_SIZE],
) -> Result<(), DecodeError> {
    let width = reader.read_byte()?;

    // All values equal
    if width == 0 {
        let v = reader.read_vuint()?;
        out.fill(v);
        return Ok(());
    }

    if width > MAX_PACKED_WIDTH {
        return Err(DecodeError::InvalidBitWidth { width });
    }

    let mut words = [0u64; MAX_WORDS];
    let n = words_per_block(u32::from(width));
    reader.read_words(&mut words[..n])?;
    unpack_width(width, &words[..n], out);
    Ok(())
}

/// Width-to-routine table: every width in `[1, 31]` maps to its own
/// monomorphized `unpack::<W>`; a missing arm is a compile error, not a
/// runtime gap
fn unpack_width(width: u8, words: &[u64], out: &mut [u32; BLOCK_SIZE]) {
    match width {
        1 => unpack::<1>(words, out),
        2 => unpack::<2>(words, out),
        3 => unpack::<3>(words, out),
        4 => unpack::<4>(words, out),
        5 => unpack::<5>(words, out),
        6 => unpack::<6>(words, out),
        7 => unpack::<7>(words, out),
        8 => unpack::<8>(words, out),
        9 => unpack::<9>(words, out),
        10 => unpack::<10>(words, out),
        11 => unpack::<11>(words, out),
        12 => unpack::<12>(words, out),
        13 => unpack::<13>(words, out),
        14 => unpack::<14>(words, out),
        15 => unpack::<15>(words, out),
        16 => unpack::<16>(words, out),
        17 => unpack::<17>(words, out),
        18 => unpack::<18>(words, out),
        19 => unpack::<19>(words, out),
        20 => unpack::<20>(words, out),
        21 => unpack::<21>(words, out),
        22 => unpack::<22>(words, out),
        23 => unpack::<23>(words, out),
        24 => unpack::<24>(words, out),
        25 => unpack::<25>(words, out),
        26 => unpack::<26>(words, out),
        27 => unpack::<27>(words, out),
        28 => unpack::<28>(words, out),
        29 => unpack::<29>(words, out),
        30 => unpack::<30>(words, out),
        31 => unpack::<31>(words, out),
        _ => unreachable!("width validated by decode_block"),
    }
}
