use lz4i::*;
use pretty_assertions::assert_eq;

#[test]
fn test_smallest_image() {
    assert_eq!(packed_size(1, 1, BitDepth::One).unwrap(), 1);
    let image = PixelMatrix::new(1, 1, BitDepth::One, vec![1]).unwrap();
    let container = lz4i_encode(&image, &EncodeOptions::default()).unwrap();
    assert_eq!(container, vec![b'L', b'Z', b'4', b'I', 1, 0, 1, 0, 1, 0x01]);
    assert_eq!(lz4i_decode(&container).unwrap(), image);
}

#[test]
fn test_width_65535_rejected() {
    let opts = EncodeOptions::default();
    let result = lz4i_encode_packed(&[0; 8], 65535, 1, BitDepth::One, &opts);
    assert!(matches!(result, Err(Lz4iError::InvalidDimensions { .. })));
    assert!(matches!(
        packed_size(65535, 1, BitDepth::Eight),
        Err(Lz4iError::InvalidDimensions { .. })
    ));
}

#[test]
fn test_widest_image() {
    let samples = vec![1; MAX_DIMENSION];
    let image = PixelMatrix::new(MAX_DIMENSION, 1, BitDepth::One, samples).unwrap();
    let container = lz4i_encode(&image, &EncodeOptions::default()).unwrap();
    assert_eq!(&container[4..6], &[0xFF, 0x7F]);
    assert_eq!(lz4i_decode(&container).unwrap(), image);

    assert!(matches!(
        PixelMatrix::new(MAX_DIMENSION + 1, 1, BitDepth::One, vec![0; MAX_DIMENSION + 1]),
        Err(Lz4iError::InvalidDimensions { .. })
    ));
}

// The stride for 4 bpp rounds up to an even width; odd widths must not lose
// or gain a byte per row.
#[test]
fn test_4bpp_odd_widths() {
    for width in [1usize, 3, 5, 7, 33] {
        assert_eq!(
            packed_size(width, 2, BitDepth::Four).unwrap(),
            (width + 1) / 2 * 2
        );
        let samples: Vec<u8> = (0..width * 2).map(|i| (i % 16) as u8).collect();
        let image = PixelMatrix::new(width, 2, BitDepth::Four, samples).unwrap();
        let container = lz4i_encode(&image, &EncodeOptions::uncompressed()).unwrap();
        assert_eq!(lz4i_decode(&container).unwrap(), image);
    }
}

#[test]
fn test_padding_does_not_leak_between_rows() {
    // 9 px wide at 1 bpp: pixel 8 of row 0 must not land in row 1's byte
    let mut samples = vec![0u8; 18];
    samples[8] = 1;
    let image = PixelMatrix::new(9, 2, BitDepth::One, samples).unwrap();
    assert_eq!(pack(&image).unwrap(), vec![0x00, 0x01, 0x00, 0x00]);
}

#[test]
fn test_rgb_image_boundary() {
    let img = image::RgbImage::from_fn(13, 7, |x, y| {
        image::Rgb([(x * 19) as u8, (y * 31) as u8, ((x + y) % 2 * 255) as u8])
    });
    let (width, height) = img.dimensions();
    let depth = BitDepth::from_planes(8, 3).unwrap();
    let matrix =
        PixelMatrix::new(width as usize, height as usize, depth, img.as_raw().clone()).unwrap();

    let container = lz4i_encode(&matrix, &EncodeOptions::default()).unwrap();
    let decoded = lz4i_decode(&container).unwrap();
    let back = image::RgbImage::from_raw(width, height, decoded.into_samples()).unwrap();
    assert_eq!(back, img);
}

#[test]
fn test_gray_image_boundary() {
    let img = image::GrayImage::from_fn(10, 10, |x, y| image::Luma([u8::from(x == y)]));
    let matrix = PixelMatrix::new(10, 10, BitDepth::One, img.as_raw().clone()).unwrap();

    let container = lz4i_encode(&matrix, &EncodeOptions::default()).unwrap();
    let decoded = lz4i_decode(&container).unwrap();
    assert_eq!(decoded.samples(), img.as_raw().as_slice());
}

#[test]
fn test_mask_to_asm_pipeline() {
    let rgba: Vec<u8> = (0..16u8)
        .flat_map(|i| if i < 8 { [255, 0, 0, 255] } else { [0, 0, 0, 255] })
        .collect();
    let mask = threshold_mask(&rgba, 16, 1, false).unwrap();
    let container = lz4i_encode(&mask, &EncodeOptions::default()).unwrap();
    let asm = container_to_asm("mask", &container).unwrap();
    assert_eq!(
        asm,
        ".const mask; LZ4Image 16x1x1,  11 bytes, c-ratio: 0.2\n    .align 4\n    .byte 0x4c, 0x5a, 0x34, 0x49, 0x10, 0x00, 0x01\n    .byte 0x00, 0x01, 0xff, 0x00\n"
    );
}
