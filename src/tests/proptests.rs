use crate::{decode_block, BlockReader, Encoder, BLOCK_SIZE};
use proptest::prelude::*;

prop_compose! {
    /// Generate a width in [1, 31] and 128 values that fit it
    fn arb_packed_block()(width in 1u8..=31)(
        width in Just(width),
        values in prop::collection::vec(0u32..=((1u64 << width) - 1) as u32, BLOCK_SIZE),
    ) -> (u8, Vec<u32>) {
        (width, values)
    }
}

fn to_array(values: &[u32]) -> [u32; BLOCK_SIZE] {
    let mut out = [0u32; BLOCK_SIZE];
    out.copy_from_slice(values);
    out
}

proptest! {
    /// Property: packing then decoding reproduces the block for every width
    #[test]
    fn prop_packed_roundtrip((width, values) in arb_packed_block()) {
        let values = to_array(&values);
        let mut enc = Encoder::new();
        enc.write_packed(&values, width).unwrap();

        let mut reader = BlockReader::new(enc.as_bytes());
        let mut out = [0u32; BLOCK_SIZE];
        decode_block(&mut reader, &mut out).unwrap();
        prop_assert_eq!(out, values);
    }

    /// Property: a packed block consumes exactly 1 + 16W bytes
    #[test]
    fn prop_packed_length((width, values) in arb_packed_block()) {
        let values = to_array(&values);
        let mut enc = Encoder::new();
        enc.write_packed(&values, width).unwrap();
        prop_assert_eq!(enc.len(), 1 + 16 * width as usize);

        let mut reader = BlockReader::new(enc.as_bytes());
        let mut out = [0u32; BLOCK_SIZE];
        decode_block(&mut reader, &mut out).unwrap();
        prop_assert_eq!(reader.position(), 1 + 16 * width as usize);
        prop_assert_eq!(reader.remaining(), 0);
    }

    /// Property: a uniform block decodes to 128 copies and consumes
    /// 1 + var-uint-length bytes
    #[test]
    fn prop_uniform_roundtrip(value in any::<u32>()) {
        let mut enc = Encoder::new();
        enc.write_uniform(value);

        let vuint_len = match value {
            0..=0x7F => 1,
            0x80..=0x3FFF => 2,
            0x4000..=0x1F_FFFF => 3,
            0x20_0000..=0xFFF_FFFF => 4,
            _ => 5,
        };
        prop_assert_eq!(enc.len(), 1 + vuint_len);

        let mut reader = BlockReader::new(enc.as_bytes());
        let mut out = [0u32; BLOCK_SIZE];
        decode_block(&mut reader, &mut out).unwrap();
        prop_assert_eq!(out, [value; BLOCK_SIZE]);
        prop_assert_eq!(reader.remaining(), 0);
    }

    /// Property: write_block round-trips and never out-sizes explicit packing
    #[test]
    fn prop_auto_block_roundtrip((width, values) in arb_packed_block()) {
        let values = to_array(&values);
        let mut auto = Encoder::new();
        auto.write_block(&values).unwrap();

        let mut explicit = Encoder::new();
        explicit.write_packed(&values, width).unwrap();
        prop_assert!(auto.len() <= explicit.len());

        let mut reader = BlockReader::new(auto.as_bytes());
        let mut out = [0u32; BLOCK_SIZE];
        decode_block(&mut reader, &mut out).unwrap();
        prop_assert_eq!(out, values);
    }

    /// Property: consecutive blocks decode independently from one buffer
    #[test]
    fn prop_multi_block_stream(blocks in prop::collection::vec(arb_packed_block(), 1..8)) {
        let mut enc = Encoder::new();
        for (width, values) in &blocks {
            enc.write_packed(&to_array(values), *width).unwrap();
        }

        let mut reader = BlockReader::new(enc.as_bytes());
        let mut out = [0u32; BLOCK_SIZE];
        for (_, values) in &blocks {
            decode_block(&mut reader, &mut out).unwrap();
            prop_assert_eq!(out, to_array(values));
        }
        prop_assert_eq!(reader.remaining(), 0);
    }

    /// Property: decoding arbitrary bytes errors or consumes an exact block,
    /// never panics
    #[test]
    fn prop_decode_arbitrary_bytes(bytes in prop::collection::vec(any::<u8>(), 0..600)) {
        let mut reader = BlockReader::new(&bytes);
        let mut out = [0u32; BLOCK_SIZE];
        match decode_block(&mut reader, &mut out) {
            Ok(()) => {
                let tag = bytes[0];
                if tag >= 1 {
                    prop_assert_eq!(reader.position(), 1 + 16 * tag as usize);
                }
            }
            Err(_) => {}
        }
    }
}
