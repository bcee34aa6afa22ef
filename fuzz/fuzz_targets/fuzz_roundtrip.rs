#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lz4i::{lz4i_decode, lz4i_encode, BitDepth, Compression, EncodeOptions, PixelMatrix};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    width: u8,
    height: u8,
    depth: u8,
    policy: u8,
    pixels: Vec<u8>,
}

fuzz_target!(|input: FuzzInput| {
    let width = (input.width as usize).max(1).min(64);
    let height = (input.height as usize).max(1).min(64);
    let depth = match input.depth % 5 {
        0 => BitDepth::One,
        1 => BitDepth::Two,
        2 => BitDepth::Four,
        3 => BitDepth::Eight,
        _ => BitDepth::TwentyFour,
    };

    let expected_size = width * height * depth.channels();
    if input.pixels.len() < expected_size {
        return;
    }
    let samples = input.pixels[..expected_size]
        .iter()
        .map(|v| v & depth.max_sample())
        .collect();
    let image = match PixelMatrix::new(width, height, depth, samples) {
        Ok(image) => image,
        Err(_) => return,
    };

    let opts = EncodeOptions {
        compression: match input.policy % 3 {
            0 => Compression::Auto,
            1 => Compression::Uncompressed,
            _ => Compression::Always,
        },
    };
    let container = lz4i_encode(&image, &opts).expect("valid image must encode");
    let decoded = lz4i_decode(&container).expect("encoded image must decode");
    assert_eq!(decoded, image);
});
