#![no_main]

use libfuzzer_sys::fuzz_target;
use wordpack::{decode_block, BlockReader, BLOCK_SIZE};

fuzz_target!(|data: &[u8]| {
    // Feed arbitrary bytes to decode_block() - should never panic.
    // Malformed input must surface as Err, never as garbage output or a
    // crash. Keep decoding blocks until the buffer runs out or errors.
    let mut reader = BlockReader::new(data);
    let mut out = [0u32; BLOCK_SIZE];
    loop {
        let before = reader.position();
        match decode_block(&mut reader, &mut out) {
            Ok(()) => {
                // The cursor must advance by exactly one block
                assert!(reader.position() > before, "cursor did not advance");
            }
            Err(_) => break,
        }
        if reader.remaining() == 0 {
            break;
        }
    }
});
