//! # lz4i
//!
//! Encoder and decoder for LZ4I, a compact raster container meant for
//! embedding bitmaps into firmware and other size-constrained targets.
//!
//! ## Features
//!
//! - **Packing**: 1, 2, 4 and 8 bpp indexed/grayscale, 16 bpp (decode only)
//!   and 24 bpp RGB, with byte-aligned rows
//! - **Compression**: optional LZ4 HC block compression, chosen only when it
//!   actually saves space
//! - **Recompression**: normalize existing containers to always-compressed form
//!
//! ## Quick Start
//!
//! ### Encoding a bitmap
//!
//! ```
//! use lz4i::{lz4i_encode, BitDepth, EncodeOptions, PixelMatrix};
//!
//! let pixels = vec![1, 0, 1, 0, 1, 0, 1, 0, 0, 1, 0, 1, 0, 1, 0, 1];
//! let image = PixelMatrix::new(16, 1, BitDepth::One, pixels)?;
//! let container = lz4i_encode(&image, &EncodeOptions::default())?;
//! assert_eq!(&container[..4], b"LZ4I");
//! # Ok::<(), lz4i::Lz4iError>(())
//! ```
//!
//! ### Decoding a container
//!
//! ```
//! use lz4i::{lz4i_decode, lz4i_encode, BitDepth, EncodeOptions, PixelMatrix};
//!
//! # let image = PixelMatrix::new(2, 2, BitDepth::Eight, vec![1, 2, 3, 4])?;
//! # let container = lz4i_encode(&image, &EncodeOptions::default())?;
//! let decoded = lz4i_decode(&container)?;
//! println!("{}x{} @ {} bpp", decoded.width(), decoded.height(), decoded.depth());
//! # assert_eq!(decoded, image);
//! # Ok::<(), lz4i::Lz4iError>(())
//! ```

use thiserror::Error;

pub mod asm;
mod block;
pub mod decoder;
pub mod encoder;
pub mod header;
pub mod layout;
pub mod mono;
pub mod packing;
pub mod pixels;
pub mod recompress;

pub use asm::container_to_asm;
pub use decoder::{lz4i_decode, lz4i_decode_packed, PackedImage};
pub use encoder::{lz4i_encode, lz4i_encode_packed, Compression, EncodeOptions};
pub use header::{read_header, Header};
pub use layout::{packed_size, stride, BitDepth};
pub use mono::threshold_mask;
pub use packing::{pack, unpack};
pub use pixels::PixelMatrix;
pub use recompress::lz4i_recompress;

/// Errors that can occur during LZ4I encoding or decoding.
#[derive(Debug, Error)]
pub enum Lz4iError {
    /// Width or height is not positive, or does not fit the 16-bit header field
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Bits per pixel outside of {1, 2, 4, 8, 16, 24}
    #[error("unsupported bit depth: {0} bpp")]
    UnsupportedDepth(u8),

    /// Container does not start with the `LZ4I` tag
    #[error("bad magic: expected \"LZ4I\", got {0:02x?}")]
    BadMagic([u8; 4]),

    /// Buffer length disagrees with the size computed from the dimensions
    #[error("buffer size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Input ended before a field or payload could be read completely
    #[error("truncated input: needed {needed} bytes, {available} available")]
    TruncatedInput { needed: usize, available: usize },

    /// Decompressed payload length differs from the header-derived size
    #[error("decompressed size mismatch: expected {expected} bytes, got {actual}")]
    CompressionSizeMismatch { expected: usize, actual: usize },

    /// The header asks for more output than the block could ever expand to
    #[error("LZ4 block of {block_len} bytes expands to at most {limit}, header needs {expected}")]
    BlockTooShort {
        expected: usize,
        block_len: usize,
        limit: usize,
    },

    /// The LZ4 block stream is malformed
    #[error("LZ4 block error: {0}")]
    Decompress(#[from] lz4_flex::block::DecompressError),

    /// The depth can be decoded but has no packing rule for encoding
    #[error("{0} bpp images can only be decoded")]
    DecodeOnlyDepth(BitDepth),

    /// Writing the container or running the LZ4 compressor failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A pixel value does not fit in the declared depth
    #[error("sample value {value} does not fit in {depth} bpp")]
    SampleOutOfRange { value: u8, depth: BitDepth },
}

/// Result type for LZ4I operations.
pub type Result<T> = core::result::Result<T, Lz4iError>;

/// Tag at offset 0 of every container.
pub const LZ4I_MAGIC: [u8; 4] = *b"LZ4I";

/// Largest width or height the signed 16-bit header fields can carry.
pub const MAX_DIMENSION: usize = i16::MAX as usize;

/// Format byte flag marking an LZ4 compressed payload.
pub(crate) const COMPRESSED_FLAG: u8 = 0x80;
