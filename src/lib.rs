//! `WordPack` - fixed-width bit-packed integer block codec
//!
//! A block codec for sequences of small unsigned integers (postings-list
//! values such as term frequencies or positions). Values are packed 128 at a
//! time into a dense, zero-padding bit layout and unpacked by branch-free
//! per-width routines dispatched from a single width tag.
//!
//! # Features
//! - **Dense layout**: 128 values at `W` bits each fill exactly `2W` 64-bit
//!   words - `128 * W == 64 * 2W` for every width, so no padding is needed
//! - **Per-width specialization**: one monomorphized unpack routine per bit
//!   width with compile-time-constant shifts and masks
//! - **Uniform fast path**: a block whose 128 values are all equal stores the
//!   value once as a var-uint
//! - **Host-independent**: words are stored big-endian and normalized on read
//!
//! # Example
//! ```
//! use wordpack::{decode_block, BlockReader, Encoder, BLOCK_SIZE};
//!
//! let mut values = [0u32; BLOCK_SIZE];
//! for (i, v) in values.iter_mut().enumerate() {
//!     *v = (i as u32) % 8; // fits in 3 bits
//! }
//!
//! let mut enc = Encoder::new();
//! enc.write_block(&values).unwrap();
//!
//! let mut reader = BlockReader::new(enc.as_bytes());
//! let mut out = [0u32; BLOCK_SIZE];
//! decode_block(&mut reader, &mut out).unwrap();
//! assert_eq!(out, values);
//! ```
//!
//! # Wire Format
//!
//! Each block is self-contained: a one-byte width tag followed by the body.
//!
//! | Tag | Body | Size | Description |
//! |-----|------|------|-------------|
//! | `0` | var-uint `v` | 1-5 bytes | Uniform block: all 128 values equal `v`. |
//! | `W` in `[1, 31]` | `2W` big-endian 64-bit words | `16W` bytes | Packed block: 128 values at `W` bits each, MSB-first. |
//! | `32..=255` | - | - | Malformed; decoding fails. |
//!
//! Within a packed block, value `i` occupies bits `[i*W, i*W + W)` counting
//! from the most significant bit of word 0. A value lies either entirely
//! within one word or spans exactly two adjacent words (`W <= 32 < 64`).
//!
//! Var-uints use 7 payload bits per byte, least significant group first,
//! with the high bit as a continuation flag; encodings that would exceed
//! 32 bits are rejected.
//!
//! # Internal Implementation
//!
//! ## Width classes
//!
//! Power-of-two widths (1, 2, 4, 8, 16, 32) fit an integral number of values
//! per word, so unpacking is a plain shift-and-mask sweep over each word.
//! Every other width has values straddling word boundaries; the bit offset
//! pattern repeats with a per-width period, so the unpack routine iterates
//! one reduced cycle and repeats it until 128 values are produced. With the
//! width a const generic, the compiler unrolls the cycle into straight-line
//! code with constant shift amounts.
//!
//! ## Bit Accumulator
//!
//! The encoder accumulates bits in a 64-bit register and flushes it to the
//! output as a big-endian word whenever it fills. A value that does not fit
//! in the remaining space contributes its high bits to the current word and
//! carries its low bits into the next one.

#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]

mod constants;
mod decoder;
mod encoder;
mod error;
mod reader;
mod unpack;

#[cfg(test)]
mod tests;

// Re-export public API
pub use constants::{bits_needed, BLOCK_SIZE, MAX_PACKED_WIDTH};
pub use decoder::decode_block;
pub use encoder::Encoder;
pub use error::{DecodeError, EncodeError};
pub use reader::BlockReader;
pub use unpack::{pack, unpack};
