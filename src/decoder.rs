use std::io::Cursor;

use crate::block::decompress_block;
use crate::header::Header;
use crate::layout::BitDepth;
use crate::packing::unpack;
use crate::{Lz4iError, PixelMatrix, Result};

/// A decoded container payload in its canonical, uncompressed packed form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    /// Image width in pixels
    pub width: usize,
    /// Image height in pixels
    pub height: usize,
    /// Bits per pixel, planes included
    pub depth: BitDepth,
    /// Whether the container stored the payload as an LZ4 block
    pub was_compressed: bool,
    /// Packed pixel data, exactly `packed_size(width, height, depth)` bytes
    pub packed: Vec<u8>,
}

impl PackedImage {
    /// Unpacks the payload into a pixel matrix.
    pub fn unpack(&self) -> Result<PixelMatrix> {
        unpack(&self.packed, self.width, self.height, self.depth)
    }
}

/// Decodes LZ4I container bytes into a pixel matrix.
///
/// # Example
///
/// ```
/// use lz4i::{lz4i_decode, BitDepth};
///
/// // 2x1, 8 bpp, stored raw
/// let data = b"LZ4I\x02\x00\x01\x00\x08\x10\x20";
/// let image = lz4i_decode(data)?;
/// assert_eq!(image.depth(), BitDepth::Eight);
/// assert_eq!(image.samples(), &[0x10, 0x20]);
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
///
/// # Errors
///
/// See [`lz4i_decode_packed`]; the unpack step itself cannot fail on a
/// payload that passed those checks.
#[must_use = "this returns the decoded PixelMatrix"]
pub fn lz4i_decode(data: &[u8]) -> Result<PixelMatrix> {
    lz4i_decode_packed(data)?.unpack()
}

/// Decodes LZ4I container bytes into the uncompressed packed buffer.
///
/// The whole input must be one container: the payload has to be exactly as
/// long as the header says, with no bytes missing or left over.
///
/// # Errors
///
/// - `BadMagic` if the input does not start with `LZ4I`
/// - `InvalidDimensions` if width or height is not positive
/// - `UnsupportedDepth` if the format byte names an unknown depth
/// - `TruncatedInput` if the header or payload is cut short
/// - `SizeMismatch` if bytes follow the payload
/// - `Decompress` / `CompressionSizeMismatch` if the LZ4 block is corrupt or
///   does not expand to the size implied by the header
#[must_use = "this returns the decoded PackedImage"]
pub fn lz4i_decode_packed(data: &[u8]) -> Result<PackedImage> {
    let mut reader = Cursor::new(data);
    let header = Header::read_from(&mut reader)?;
    let expected = header.packed_size()?;

    let start = reader.position() as usize;
    let payload_len = header.payload_len()?;
    let available = data.len() - start;
    if available < payload_len {
        return Err(Lz4iError::TruncatedInput {
            needed: payload_len,
            available,
        });
    }
    if available > payload_len {
        return Err(Lz4iError::SizeMismatch {
            expected: start + payload_len,
            actual: data.len(),
        });
    }
    let payload = &data[start..];

    let packed = if header.is_compressed() {
        decompress_block(payload, expected)?
    } else {
        payload.to_vec()
    };

    Ok(PackedImage {
        width: header.width,
        height: header.height,
        depth: header.depth,
        was_compressed: header.is_compressed(),
        packed,
    })
}
