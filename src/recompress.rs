//! Container recompression.
//!
//! Rewrites an existing container with an LZ4 compressed payload, whatever
//! the source used. Pixel content is unchanged.

use crate::decoder::lz4i_decode_packed;
use crate::encoder::{lz4i_encode_packed, Compression, EncodeOptions};
use crate::Result;

/// Decodes `data` and re-encodes it with [`Compression::Always`].
///
/// The output is always compressed, even when the block ends up larger than
/// the raw payload. Running it on its own output yields identical bytes.
///
/// # Example
///
/// ```
/// use lz4i::{lz4i_encode_packed, lz4i_recompress, BitDepth, EncodeOptions};
///
/// let opts = EncodeOptions::uncompressed();
/// let raw = lz4i_encode_packed(&[0; 256], 16, 16, BitDepth::Eight, &opts)?;
/// let optimized = lz4i_recompress(&raw)?;
/// assert_eq!(optimized[8], 0x80 | 8);
/// assert!(optimized.len() < raw.len());
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
#[must_use = "this returns the recompressed container"]
pub fn lz4i_recompress(data: &[u8]) -> Result<Vec<u8>> {
    let image = lz4i_decode_packed(data)?;
    let opts = EncodeOptions {
        compression: Compression::Always,
    };
    let out = lz4i_encode_packed(&image.packed, image.width, image.height, image.depth, &opts)?;
    tracing::debug!(
        "recompressed {}x{} @ {} bpp: {} -> {} bytes",
        image.width,
        image.height,
        image.depth,
        data.len(),
        out.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::BitDepth;

    #[test]
    fn test_recompress_is_idempotent() {
        let packed: Vec<u8> = (0..300u32).map(|i| (i % 5) as u8).collect();
        let opts = EncodeOptions::uncompressed();
        let raw = lz4i_encode_packed(&packed, 20, 15, BitDepth::Eight, &opts).unwrap();
        let once = lz4i_recompress(&raw).unwrap();
        let twice = lz4i_recompress(&once).unwrap();
        assert_eq!(once, twice);
        assert_eq!(lz4i_decode_packed(&once).unwrap().packed, packed);
    }

    #[test]
    fn test_recompress_tiny_image_still_compresses() {
        let raw = lz4i_encode_packed(&[0x5A], 1, 1, BitDepth::One, &EncodeOptions::default())
            .unwrap();
        assert_eq!(raw[8], 1);
        let out = lz4i_recompress(&raw).unwrap();
        assert_eq!(out[8], 0x81);
        assert!(out.len() > raw.len());
    }

    #[test]
    fn test_recompress_propagates_errors() {
        assert!(lz4i_recompress(b"LZ4X\x01\x00\x01\x00\x08\x00").is_err());
    }
}
