use crate::layout::{validate_dimensions, BitDepth};
use crate::{Lz4iError, Result};

/// A row-major matrix of pixel samples at a fixed bit depth.
///
/// Samples are stored flat, `depth.channels()` per pixel:
/// - 1/2/4/8 bpp: one index or gray value per pixel, `0..=depth.max_sample()`
/// - 16 bpp: three 8-bit samples per pixel in R, B, G order (decode only)
/// - 24 bpp: three 8-bit samples per pixel, order preserved as given
///
/// Width, height and depth are fixed for the lifetime of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: usize,
    height: usize,
    depth: BitDepth,
    samples: Vec<u8>,
}

impl PixelMatrix {
    /// Wraps flat row-major samples.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` for a zero or oversized width/height
    /// - `SizeMismatch` if `samples` is not `width * height * channels` long
    /// - `SampleOutOfRange` if a sample exceeds the depth's maximum
    pub fn new(width: usize, height: usize, depth: BitDepth, samples: Vec<u8>) -> Result<Self> {
        validate_dimensions(width, height)?;
        let expected = width * height * depth.channels();
        if samples.len() != expected {
            return Err(Lz4iError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }
        let max = depth.max_sample();
        if let Some(&value) = samples.iter().find(|&&v| v > max) {
            return Err(Lz4iError::SampleOutOfRange { value, depth });
        }
        Ok(Self {
            width,
            height,
            depth,
            samples,
        })
    }

    /// Builds a matrix from one sample vector per row.
    pub fn from_rows(rows: &[Vec<u8>], depth: BitDepth) -> Result<Self> {
        let height = rows.len();
        let row_len = rows.first().map_or(0, Vec::len);
        if let Some(bad) = rows.iter().find(|r| r.len() != row_len) {
            return Err(Lz4iError::SizeMismatch {
                expected: row_len,
                actual: bad.len(),
            });
        }
        let width = row_len / depth.channels();
        let samples: Vec<u8> = rows.iter().flatten().copied().collect();
        Self::new(width, height, depth, samples)
    }

    /// Used by the unpacker, which produces in-range samples by construction.
    pub(crate) fn from_raw_parts(
        width: usize,
        height: usize,
        depth: BitDepth,
        samples: Vec<u8>,
    ) -> Self {
        debug_assert_eq!(samples.len(), width * height * depth.channels());
        Self {
            width,
            height,
            depth,
            samples,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> BitDepth {
        self.depth
    }

    /// All samples, row-major.
    #[inline]
    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Samples of row `y`.
    ///
    /// # Panics
    ///
    /// If `y >= height`.
    pub fn row(&self, y: usize) -> &[u8] {
        let len = self.row_len();
        &self.samples[y * len..(y + 1) * len]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.samples.chunks_exact(self.row_len())
    }

    /// Samples of the pixel at `(x, y)`, or `None` outside the matrix.
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let channels = self.depth.channels();
        let start = (y * self.width + x) * channels;
        Some(&self.samples[start..start + channels])
    }

    #[inline]
    fn row_len(&self) -> usize {
        self.width * self.depth.channels()
    }
}
