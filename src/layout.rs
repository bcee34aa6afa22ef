//! Bit depths and row layout.
//!
//! Every packed buffer size is derived here so the encoder and the decoder
//! can never disagree about how many bytes an image occupies.

use std::fmt;

use crate::{Lz4iError, Result, MAX_DIMENSION};

/// Bits per pixel of a packed image (planes multiplied in).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1 bpp, eight pixels per byte
    One,
    /// 2 bpp, four pixels per byte
    Two,
    /// 4 bpp, two pixels per byte
    Four,
    /// 8 bpp, one byte per pixel
    Eight,
    /// 16 bpp packed 5/6/5 sample, little-endian
    Sixteen,
    /// 24 bpp, three 8-bit planes
    TwentyFour,
}

impl BitDepth {
    pub const ALL: [BitDepth; 6] = [
        BitDepth::One,
        BitDepth::Two,
        BitDepth::Four,
        BitDepth::Eight,
        BitDepth::Sixteen,
        BitDepth::TwentyFour,
    ];

    /// Total bits per pixel as stored in the format byte.
    #[inline]
    pub const fn bits(self) -> u8 {
        match self {
            BitDepth::One => 1,
            BitDepth::Two => 2,
            BitDepth::Four => 4,
            BitDepth::Eight => 8,
            BitDepth::Sixteen => 16,
            BitDepth::TwentyFour => 24,
        }
    }

    /// Number of planes multiplied into the format byte.
    #[inline]
    pub const fn planes(self) -> u8 {
        match self {
            BitDepth::TwentyFour => 3,
            _ => 1,
        }
    }

    /// Samples per pixel in a [`PixelMatrix`](crate::PixelMatrix).
    ///
    /// 16 bpp pixels decode to three 8-bit samples.
    #[inline]
    pub const fn channels(self) -> usize {
        match self {
            BitDepth::Sixteen | BitDepth::TwentyFour => 3,
            _ => 1,
        }
    }

    /// Pixels sharing one byte for sub-byte depths, 1 otherwise.
    #[inline]
    pub const fn group_size(self) -> usize {
        match self {
            BitDepth::One => 8,
            BitDepth::Two => 4,
            BitDepth::Four => 2,
            _ => 1,
        }
    }

    /// Largest sample value a pixel matrix of this depth may hold.
    #[inline]
    pub const fn max_sample(self) -> u8 {
        match self {
            BitDepth::One => 0x01,
            BitDepth::Two => 0x03,
            BitDepth::Four => 0x0F,
            _ => 0xFF,
        }
    }

    /// Builds a depth from per-plane bits and plane count, the shape raster
    /// readers usually report.
    pub fn from_planes(bits_per_plane: u8, planes: u8) -> Result<Self> {
        let bits = bits_per_plane
            .checked_mul(planes)
            .ok_or(Lz4iError::UnsupportedDepth(bits_per_plane))?;
        Self::try_from(bits)
    }
}

impl TryFrom<u8> for BitDepth {
    type Error = Lz4iError;

    fn try_from(bits: u8) -> Result<Self> {
        match bits {
            1 => Ok(BitDepth::One),
            2 => Ok(BitDepth::Two),
            4 => Ok(BitDepth::Four),
            8 => Ok(BitDepth::Eight),
            16 => Ok(BitDepth::Sixteen),
            24 => Ok(BitDepth::TwentyFour),
            other => Err(Lz4iError::UnsupportedDepth(other)),
        }
    }
}

impl From<BitDepth> for u8 {
    fn from(depth: BitDepth) -> u8 {
        depth.bits()
    }
}

impl fmt::Display for BitDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

/// Checks that both dimensions are positive and fit the header fields.
pub(crate) fn validate_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(Lz4iError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        });
    }
    Ok(())
}

/// Row width in pixels after padding to a whole number of bytes.
///
/// Sub-byte depths round up to their packing group (8, 4 or 2 pixels), the
/// padding pixels being zero. Byte-aligned depths use the width unchanged.
#[inline]
pub fn stride(width: usize, depth: BitDepth) -> usize {
    match depth {
        BitDepth::One => (width + 7) & !7,
        BitDepth::Two => (width + 3) & !3,
        BitDepth::Four => (width + 1) & !1,
        _ => width,
    }
}

/// Size in bytes of the uncompressed packed buffer.
///
/// # Errors
///
/// `InvalidDimensions` if width or height is zero or above [`MAX_DIMENSION`],
/// or if the size does not fit a `usize`.
pub fn packed_size(width: usize, height: usize, depth: BitDepth) -> Result<usize> {
    validate_dimensions(width, height)?;
    row_bytes(width, depth)
        .checked_mul(height)
        .ok_or(Lz4iError::InvalidDimensions {
            width: width as i64,
            height: height as i64,
        })
}

/// Bytes per packed row.
#[inline]
pub(crate) fn row_bytes(width: usize, depth: BitDepth) -> usize {
    stride(width, depth) * depth.bits() as usize / 8
}
