#![no_main]

use libfuzzer_sys::fuzz_target;
use lz4i::{lz4i_decode, lz4i_recompress};

fuzz_target!(|data: &[u8]| {
    // Neither path may panic, whatever the input
    let _ = lz4i_decode(data);
    let _ = lz4i_recompress(data);
});
