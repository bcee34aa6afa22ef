//! Monochrome threshold masks.

use crate::layout::{validate_dimensions, BitDepth};
use crate::{Lz4iError, PixelMatrix, Result};

/// Reduces RGBA pixels to a 1 bpp mask.
///
/// A pixel is set when any color channel is above zero, or, with `inverted`,
/// when any color channel is below 255. Alpha does not take part.
///
/// # Example
///
/// ```
/// use lz4i::threshold_mask;
///
/// let rgba = [0, 0, 0, 255, 255, 255, 255, 255, 0, 9, 0, 0];
/// assert_eq!(threshold_mask(&rgba, 3, 1, false)?.samples(), &[0, 1, 1]);
/// assert_eq!(threshold_mask(&rgba, 3, 1, true)?.samples(), &[1, 0, 1]);
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
pub fn threshold_mask(
    rgba: &[u8],
    width: usize,
    height: usize,
    inverted: bool,
) -> Result<PixelMatrix> {
    validate_dimensions(width, height)?;
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(Lz4iError::SizeMismatch {
            expected,
            actual: rgba.len(),
        });
    }

    let samples = rgba
        .chunks_exact(4)
        .map(|px| {
            let rgb = &px[..3];
            let set = if inverted {
                rgb.iter().any(|&c| c < 255)
            } else {
                rgb.iter().any(|&c| c > 0)
            };
            u8::from(set)
        })
        .collect();
    PixelMatrix::new(width, height, BitDepth::One, samples)
}
