//! Container header.
//!
//! ```text
//! offset  size  field
//! 0       4     magic "LZ4I"
//! 4       2     width, i16 LE, > 0
//! 6       2     height, i16 LE, > 0
//! 8       1     format: bits 0-6 planes * bpp, bit 7 compressed
//! 9       4     compressed length, u32 LE (only when bit 7 is set)
//! ```

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::layout::{packed_size, validate_dimensions, BitDepth};
use crate::{Lz4iError, Result, COMPRESSED_FLAG, LZ4I_MAGIC};

/// Header length without the compressed length field.
pub const BASE_HEADER_LEN: usize = 9;
/// Header length of a compressed container.
pub const COMPRESSED_HEADER_LEN: usize = BASE_HEADER_LEN + 4;

/// Parsed container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    pub width: usize,
    pub height: usize,
    pub depth: BitDepth,
    /// Length of the LZ4 block following the header, `None` for raw payloads
    pub compressed_len: Option<u32>,
}

impl Header {
    #[inline]
    pub fn is_compressed(&self) -> bool {
        self.compressed_len.is_some()
    }

    /// Bytes taken by the header itself.
    #[inline]
    pub fn encoded_len(&self) -> usize {
        if self.is_compressed() {
            COMPRESSED_HEADER_LEN
        } else {
            BASE_HEADER_LEN
        }
    }

    /// Size of the uncompressed packed buffer this header describes.
    pub fn packed_size(&self) -> Result<usize> {
        packed_size(self.width, self.height, self.depth)
    }

    /// Bytes expected after the header.
    pub fn payload_len(&self) -> Result<usize> {
        match self.compressed_len {
            Some(len) => Ok(len as usize),
            None => self.packed_size(),
        }
    }

    pub fn format_byte(&self) -> u8 {
        let bits = self.depth.bits();
        if self.is_compressed() {
            bits | COMPRESSED_FLAG
        } else {
            bits
        }
    }

    /// Serializes the header.
    ///
    /// # Errors
    ///
    /// `InvalidDimensions` if either dimension does not fit an `i16`.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        validate_dimensions(self.width, self.height)?;
        out.write_all(&LZ4I_MAGIC)?;
        out.write_i16::<LittleEndian>(self.width as i16)?;
        out.write_i16::<LittleEndian>(self.height as i16)?;
        out.write_u8(self.format_byte())?;
        if let Some(len) = self.compressed_len {
            out.write_u32::<LittleEndian>(len)?;
        }
        Ok(())
    }

    /// Parses a header from the front of `reader`.
    ///
    /// The magic is checked before anything else is read.
    pub fn read_from(reader: &mut Cursor<&[u8]>) -> Result<Self> {
        let mut magic = [0u8; 4];
        read_field(reader, 4, |r| r.read_exact(&mut magic))?;
        if magic != LZ4I_MAGIC {
            return Err(Lz4iError::BadMagic(magic));
        }

        let width = read_field(reader, 2, |r| r.read_i16::<LittleEndian>())?;
        let height = read_field(reader, 2, |r| r.read_i16::<LittleEndian>())?;
        if width <= 0 || height <= 0 {
            return Err(Lz4iError::InvalidDimensions {
                width: width as i64,
                height: height as i64,
            });
        }

        let format = read_field(reader, 1, |r| r.read_u8())?;
        let depth = BitDepth::try_from(format & !COMPRESSED_FLAG)?;
        let compressed_len = if format & COMPRESSED_FLAG != 0 {
            Some(read_field(reader, 4, |r| r.read_u32::<LittleEndian>())?)
        } else {
            None
        };

        let header = Self {
            width: width as usize,
            height: height as usize,
            depth,
            compressed_len,
        };
        tracing::debug!(
            "LZ4I header: {}x{} @ {} bpp, {}",
            header.width,
            header.height,
            header.depth,
            match header.compressed_len {
                Some(len) => format!("compressed {len} bytes"),
                None => "raw".to_string(),
            }
        );
        Ok(header)
    }
}

/// Reads one fixed-size field, reporting a short read as `TruncatedInput`.
fn read_field<T>(
    reader: &mut Cursor<&[u8]>,
    needed: usize,
    read: impl FnOnce(&mut Cursor<&[u8]>) -> std::io::Result<T>,
) -> Result<T> {
    let available = reader
        .get_ref()
        .len()
        .saturating_sub(reader.position() as usize);
    read(reader).map_err(|_| Lz4iError::TruncatedInput { needed, available })
}

/// Parses and validates only the header of a container.
///
/// # Example
///
/// ```
/// use lz4i::{lz4i_encode_packed, read_header, BitDepth, EncodeOptions};
///
/// let container = lz4i_encode_packed(&[0; 8], 8, 8, BitDepth::One, &EncodeOptions::default())?;
/// let header = read_header(&container)?;
/// assert_eq!((header.width, header.height, header.depth), (8, 8, BitDepth::One));
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
pub fn read_header(data: &[u8]) -> Result<Header> {
    Header::read_from(&mut Cursor::new(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_header(width: i16, height: i16, format: u8) -> Vec<u8> {
        let mut out = b"LZ4I".to_vec();
        out.extend_from_slice(&width.to_le_bytes());
        out.extend_from_slice(&height.to_le_bytes());
        out.push(format);
        out
    }

    #[test]
    fn test_write_uncompressed() {
        let header = Header {
            width: 300,
            height: 2,
            depth: BitDepth::TwentyFour,
            compressed_len: None,
        };
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        assert_eq!(out, vec![b'L', b'Z', b'4', b'I', 0x2C, 0x01, 0x02, 0x00, 24]);
        assert_eq!(header.encoded_len(), out.len());
    }

    #[test]
    fn test_write_compressed() {
        let header = Header {
            width: 1,
            height: 1,
            depth: BitDepth::Four,
            compressed_len: Some(0x0102_0304),
        };
        let mut out = Vec::new();
        header.write_to(&mut out).unwrap();
        assert_eq!(&out[8..], &[0x84, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(read_header(&out).unwrap(), header);
    }

    #[test]
    fn test_bad_magic() {
        let mut data = raw_header(4, 4, 8);
        data[0] = b'X';
        assert!(matches!(read_header(&data), Err(Lz4iError::BadMagic(m)) if &m == b"XZ4I"));
    }

    #[test]
    fn test_non_positive_dimensions() {
        assert!(matches!(
            read_header(&raw_header(0, 4, 8)),
            Err(Lz4iError::InvalidDimensions {
                width: 0,
                height: 4
            })
        ));
        assert!(matches!(
            read_header(&raw_header(4, -3, 8)),
            Err(Lz4iError::InvalidDimensions {
                width: 4,
                height: -3
            })
        ));
    }

    #[test]
    fn test_unsupported_depth() {
        assert!(matches!(
            read_header(&raw_header(4, 4, 12)),
            Err(Lz4iError::UnsupportedDepth(12))
        ));
        assert!(matches!(
            read_header(&raw_header(4, 4, 0x80 | 3)),
            Err(Lz4iError::UnsupportedDepth(3))
        ));
    }

    #[test]
    fn test_truncated_header() {
        assert!(matches!(
            read_header(b"LZ"),
            Err(Lz4iError::TruncatedInput { .. })
        ));
        let data = raw_header(4, 4, 0x88);
        assert!(matches!(
            read_header(&data[..7]),
            Err(Lz4iError::TruncatedInput { .. })
        ));
        assert!(matches!(
            read_header(&data),
            Err(Lz4iError::TruncatedInput {
                needed: 4,
                available: 0
            })
        ));
    }

    #[test]
    fn test_write_rejects_oversized() {
        let header = Header {
            width: 65535,
            height: 1,
            depth: BitDepth::Eight,
            compressed_len: None,
        };
        assert!(matches!(
            header.write_to(&mut Vec::new()),
            Err(Lz4iError::InvalidDimensions { .. })
        ));
    }
}
