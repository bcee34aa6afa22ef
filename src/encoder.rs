//! LZ4I container encoder.
//!
//! Wraps a packed buffer in the container header and decides whether the
//! payload is stored raw or as an LZ4 block.

use crate::block::compress_block;
use crate::header::Header;
use crate::layout::{packed_size, BitDepth};
use crate::packing::pack;
use crate::{Lz4iError, PixelMatrix, Result};

/// When the payload gets LZ4 compressed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Compress, but keep the raw payload unless the block is strictly smaller.
    #[default]
    Auto,
    /// Always store the raw payload.
    Uncompressed,
    /// Always store the LZ4 block, even if it is larger than the raw payload.
    Always,
}

/// Options for the LZ4I encoder.
#[derive(Clone, Debug, Default)]
pub struct EncodeOptions {
    /// Payload compression policy.
    pub compression: Compression,
}

impl EncodeOptions {
    /// Options that never compress, for targets without an LZ4 decoder.
    pub fn uncompressed() -> Self {
        Self {
            compression: Compression::Uncompressed,
        }
    }
}

/// Encodes a pixel matrix into LZ4I container bytes.
///
/// # Example
///
/// ```
/// use lz4i::{lz4i_encode, BitDepth, EncodeOptions, PixelMatrix};
///
/// let image = PixelMatrix::new(64, 64, BitDepth::Eight, vec![0; 64 * 64])?;
/// let container = lz4i_encode(&image, &EncodeOptions::default())?;
/// assert!(container.len() < 64 * 64);
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
#[must_use = "this returns the encoded container"]
pub fn lz4i_encode(image: &PixelMatrix, opts: &EncodeOptions) -> Result<Vec<u8>> {
    let packed = pack(image)?;
    lz4i_encode_packed(&packed, image.width(), image.height(), image.depth(), opts)
}

/// Encodes an already packed buffer into LZ4I container bytes.
///
/// # Arguments
/// * `packed` - Packed pixel data, exactly [`packed_size`] bytes
/// * `width` - Image width in pixels, `1..=32767`
/// * `height` - Image height in pixels, `1..=32767`
/// * `depth` - Bits per pixel, planes included
/// * `opts` - Encoding options
///
/// # Errors
///
/// - `InvalidDimensions` if width or height is out of range
/// - `SizeMismatch` if `packed` has the wrong length
/// - `Io` if the LZ4 HC compressor fails
#[must_use = "this returns the encoded container"]
pub fn lz4i_encode_packed(
    packed: &[u8],
    width: usize,
    height: usize,
    depth: BitDepth,
    opts: &EncodeOptions,
) -> Result<Vec<u8>> {
    let expected = packed_size(width, height, depth)?;
    if packed.len() != expected {
        return Err(Lz4iError::SizeMismatch {
            expected,
            actual: packed.len(),
        });
    }

    let block = match opts.compression {
        Compression::Uncompressed => None,
        Compression::Auto => Some(compress_block(packed)?).filter(|b| b.len() < packed.len()),
        Compression::Always => Some(compress_block(packed)?),
    };

    let payload = block.as_deref().unwrap_or(packed);
    // 32767 * 32767 * 3 bytes plus LZ4 worst-case growth still fits in u32
    let compressed_len = block.as_ref().map(|b| b.len() as u32);
    let header = Header {
        width,
        height,
        depth,
        compressed_len,
    };

    let mut out = Vec::with_capacity(header.encoded_len() + payload.len());
    header.write_to(&mut out)?;
    out.extend_from_slice(payload);

    tracing::debug!(
        "encoded {}x{} @ {} bpp: {} packed bytes -> {} container bytes ({:?}, {})",
        width,
        height,
        depth,
        packed.len(),
        out.len(),
        opts.compression,
        if header.is_compressed() { "lz4" } else { "raw" }
    );
    Ok(out)
}
