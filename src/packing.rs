//! Conversion between pixel matrices and packed buffers.
//!
//! Bit order inside a byte for sub-byte depths is least significant first:
//! the leftmost pixel of a group lands in the low bits. A row that does not
//! fill its last byte is padded with zero pixels, never continued into the
//! next row.

use byteorder::{ByteOrder, LittleEndian};

use crate::layout::{packed_size, row_bytes, BitDepth};
use crate::{Lz4iError, PixelMatrix, Result};

const RGB565_RED_SHIFT: u32 = 11;
const RGB565_BLUE_SHIFT: u32 = 5;
const FIVE_BIT_MAX: u16 = 0x1F;
const SIX_BIT_MAX: u16 = 0x3F;

/// Packs a pixel matrix into its byte buffer.
///
/// The returned buffer is exactly [`packed_size`] bytes long.
///
/// # Errors
///
/// `DecodeOnlyDepth` for 16 bpp matrices, which have no packing rule.
///
/// # Example
///
/// ```
/// use lz4i::{pack, BitDepth, PixelMatrix};
///
/// let image = PixelMatrix::new(3, 1, BitDepth::Two, vec![1, 2, 3])?;
/// assert_eq!(pack(&image)?, vec![0b00_11_10_01]);
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
#[must_use = "this returns the packed buffer"]
pub fn pack(image: &PixelMatrix) -> Result<Vec<u8>> {
    let depth = image.depth();
    let size = packed_size(image.width(), image.height(), depth)?;
    let mut packed = Vec::with_capacity(size);

    match depth {
        BitDepth::One | BitDepth::Two | BitDepth::Four => {
            let bits = depth.bits() as usize;
            for row in image.rows() {
                // chunks() leaves a short trailing group, whose missing high
                // positions stay zero
                for group in row.chunks(depth.group_size()) {
                    let byte = group
                        .iter()
                        .enumerate()
                        .fold(0u8, |acc, (i, &v)| acc | (v << (i * bits)));
                    packed.push(byte);
                }
            }
        }
        BitDepth::Eight | BitDepth::TwentyFour => packed.extend_from_slice(image.samples()),
        BitDepth::Sixteen => return Err(Lz4iError::DecodeOnlyDepth(depth)),
    }

    tracing::trace!(
        "packed {}x{} @ {} bpp into {} bytes",
        image.width(),
        image.height(),
        depth,
        packed.len()
    );
    debug_assert_eq!(packed.len(), size);
    Ok(packed)
}

/// Unpacks a packed buffer into a pixel matrix.
///
/// Padding bits past `width` in each row are ignored. 16 bpp pixels are
/// widened to three 8-bit samples emitted as R, B, G.
///
/// # Errors
///
/// - `InvalidDimensions` for a zero or oversized width/height
/// - `SizeMismatch` if `packed` is not exactly [`packed_size`] bytes
#[must_use = "this returns the decoded PixelMatrix"]
pub fn unpack(packed: &[u8], width: usize, height: usize, depth: BitDepth) -> Result<PixelMatrix> {
    let expected = packed_size(width, height, depth)?;
    if packed.len() != expected {
        return Err(Lz4iError::SizeMismatch {
            expected,
            actual: packed.len(),
        });
    }

    let mut samples = Vec::with_capacity(width * height * depth.channels());
    match depth {
        BitDepth::One | BitDepth::Two | BitDepth::Four => {
            let bits = depth.bits() as usize;
            let group = depth.group_size();
            let mask = depth.max_sample();
            for row in packed.chunks_exact(row_bytes(width, depth)) {
                samples.extend(
                    (0..width).map(|x| (row[x / group] >> ((x % group) * bits)) & mask),
                );
            }
        }
        BitDepth::Eight | BitDepth::TwentyFour => samples.extend_from_slice(packed),
        BitDepth::Sixteen => {
            for px in packed.chunks_exact(2) {
                samples.extend_from_slice(&rgb565_to_rbg888(LittleEndian::read_u16(px)));
            }
        }
    }

    tracing::trace!(
        "unpacked {} bytes into {}x{} @ {} bpp",
        packed.len(),
        width,
        height,
        depth
    );
    Ok(PixelMatrix::from_raw_parts(width, height, depth, samples))
}

/// Splits a 16 bpp sample (G in bits 0..5, B in 5..11, R in 11..16) and
/// widens each channel to 8 bits.
///
/// Output order is R, B, G. Existing assets depend on this order.
#[inline]
fn rgb565_to_rbg888(v: u16) -> [u8; 3] {
    let g = v & FIVE_BIT_MAX;
    let b = (v >> RGB565_BLUE_SHIFT) & SIX_BIT_MAX;
    let r = (v >> RGB565_RED_SHIFT) & FIVE_BIT_MAX;
    [
        widen(r, FIVE_BIT_MAX),
        widen(b, SIX_BIT_MAX),
        widen(g, FIVE_BIT_MAX),
    ]
}

#[inline]
fn widen(raw: u16, max_raw: u16) -> u8 {
    (raw as u32 * 255 / max_raw as u32) as u8
}
