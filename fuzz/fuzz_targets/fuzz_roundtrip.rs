#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpack::{bits_needed, decode_block, BlockReader, Encoder, BLOCK_SIZE};

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks a width in [1, 31]; remaining bytes seed the values
    let width = data[0] % 31 + 1;
    let max = ((1u64 << width) - 1) as u32;

    let mut values = [0u32; BLOCK_SIZE];
    for (i, v) in values.iter_mut().enumerate() {
        let b = data.get(1 + i).copied().unwrap_or(0);
        *v = (u32::from(b).wrapping_mul(2_654_435_761)) & max;
    }

    let mut enc = Encoder::new();
    enc.write_packed(&values, width).unwrap();

    // Property 1: packed blocks are exactly 1 + 16W bytes
    assert_eq!(enc.len(), 1 + 16 * width as usize, "encoded length");

    // Property 2: decode inverts encode
    let mut reader = BlockReader::new(enc.as_bytes());
    let mut out = [0u32; BLOCK_SIZE];
    decode_block(&mut reader, &mut out).unwrap();
    assert_eq!(out, values, "round-trip mismatch");
    assert_eq!(reader.remaining(), 0, "cursor did not consume the block");

    // Property 3: auto block selection round-trips too
    let mut auto = Encoder::new();
    auto.write_block(&values).unwrap();
    assert!(u32::from(auto.as_bytes()[0]) <= u32::from(bits_needed(max)));
    let mut reader = BlockReader::new(auto.as_bytes());
    decode_block(&mut reader, &mut out).unwrap();
    assert_eq!(out, values, "auto round-trip mismatch");
});
