//! Per-width bit packing and unpacking over 64-bit words.
//!
//! `unpack::<W>` is monomorphized once per width by the dispatcher, so every
//! shift amount, mask, and the cycle shape below are compile-time constants
//! and the cycle loop unrolls into straight-line code. `pack` is the exact
//! inverse, runtime-width since encoding is off the query hot path.

use crate::constants::{cycle, mask, words_per_block, Cycle, BLOCK_SIZE};

/// Unpack 128 values of `W` bits each from `2W` words into `out`
///
/// `words` must hold exactly `2W` byte-order-normalized words; the
/// dispatcher validates the width and supplies the words, so this routine
/// performs no checks of its own beyond debug assertions.
///
/// Power-of-two widths sweep each word top group first; every other width
/// walks one reduced cycle of the bit-offset pattern, repeated until the
/// block is full. Each value either lies within one word or spans exactly
/// two, so the case split below is exhaustive.
pub fn unpack<const W: u32>(words: &[u64], out: &mut [u32; BLOCK_SIZE]) {
    debug_assert!(W >= 1 && W <= 32);
    debug_assert_eq!(words.len(), words_per_block(W));

    let m = mask(W);
    let Cycle { blocks, values, iters } = cycle(W);
    let mut wo = 0;
    let mut vo = 0;

    if W.is_power_of_two() {
        for _ in 0..iters {
            for _ in 0..blocks {
                let word = words[wo];
                wo += 1;
                let mut shift = 64 - W;
                loop {
                    out[vo] = ((word >> shift) & m) as u32;
                    vo += 1;
                    if shift == 0 {
                        break;
                    }
                    shift -= W;
                }
            }
        }
    } else {
        for _ in 0..iters {
            let mut cur = 0u64;
            for i in 0..values {
                let o = (i as u32 * W) % 64;
                if o == 0 {
                    // Value starts a fresh word
                    cur = words[wo];
                    wo += 1;
                    out[vo] = (cur >> (64 - W)) as u32;
                } else if o + W == 64 {
                    // Value ends exactly at the word's low bit
                    out[vo] = (cur & m) as u32;
                } else if o + W < 64 {
                    // Value fully interior to the current word
                    out[vo] = ((cur >> (64 - o - W)) & m) as u32;
                } else {
                    // Value spans the current word and the next
                    let low = o + W - 64;
                    let next = words[wo];
                    wo += 1;
                    out[vo] = (((cur & mask(64 - o)) << low) | (next >> (64 - low))) as u32;
                    cur = next;
                }
                vo += 1;
            }
        }
    }

    debug_assert_eq!(vo, BLOCK_SIZE);
    debug_assert_eq!(wo, words.len());
}

/// Pack 128 values of `width` bits each into `2 * width` words
///
/// Exact inverse of [`unpack`]: value `i` lands in bits `[i*width,
/// i*width + width)` counting from the most significant bit of word 0.
/// Values are accumulated MSB-first in a 64-bit register and flushed a word
/// at a time; a value that does not fit splits across two words.
///
/// The caller validates `width` in `[1, 32]` and that every value fits in
/// `width` bits; out-of-range bits here would corrupt neighboring values.
pub fn pack(values: &[u32; BLOCK_SIZE], width: u32, words: &mut [u64]) {
    debug_assert!(width >= 1 && width <= 32);
    debug_assert_eq!(words.len(), words_per_block(width));

    let mut acc = 0u64;
    let mut used = 0u32;
    let mut wo = 0;

    for &v in values {
        debug_assert_eq!(u64::from(v) & !mask(width), 0, "value exceeds width");
        let v = u64::from(v);
        if used + width <= 64 {
            acc = (acc << width) | v;
            used += width;
            if used == 64 {
                words[wo] = acc;
                wo += 1;
                acc = 0;
                used = 0;
            }
        } else {
            // Split: high bits finish the current word, low bits start the next
            let high = 64 - used;
            words[wo] = (acc << high) | (v >> (width - high));
            wo += 1;
            acc = v & mask(width - high);
            used = width - high;
        }
    }

    // 128 * width is a multiple of 64, so the accumulator always ends empty
    debug_assert_eq!(used, 0);
    debug_assert_eq!(wo, words.len());
}
