//! LZ4 block-mode adapter.
//!
//! Blocks carry no size prefix; the decompressed size always comes from the
//! container header via [`packed_size`](crate::packed_size).

use lz4::block::CompressionMode;

use crate::{Lz4iError, Result};

/// Upper bound on how far one LZ4 block byte can expand.
const MAX_EXPANSION: usize = 255;

/// LZ4 HC level used for every block; the highest the library accepts.
const HC_LEVEL: i32 = 12;

/// Compresses `data` into a raw LZ4 block in high-compression mode.
pub(crate) fn compress_block(data: &[u8]) -> Result<Vec<u8>> {
    let mode = Some(CompressionMode::HIGHCOMPRESSION(HC_LEVEL));
    Ok(lz4::block::compress(data, mode, false)?)
}

/// Decompresses a raw LZ4 block that must expand to exactly `expected` bytes.
pub(crate) fn decompress_block(block: &[u8], expected: usize) -> Result<Vec<u8>> {
    // Reject before allocating `expected` bytes for a block that cannot fill them
    let limit = block.len().saturating_mul(MAX_EXPANSION);
    if expected > limit {
        return Err(Lz4iError::BlockTooShort {
            expected,
            block_len: block.len(),
            limit,
        });
    }
    let data = lz4_flex::block::decompress(block, expected)?;
    if data.len() != expected {
        return Err(Lz4iError::CompressionSizeMismatch {
            expected,
            actual: data.len(),
        });
    }
    Ok(data)
}
