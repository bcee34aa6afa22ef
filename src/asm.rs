//! Assembler source output.
//!
//! Renders container bytes as a `.byte` table so an image can be linked
//! straight into firmware.

use crate::header::read_header;
use crate::Result;

const BYTES_PER_LINE: usize = 7;

/// Renders `data` as `.byte` directives, seven values per line.
///
/// ```
/// let table = lz4i::asm::byte_table(&[1, 2, 3]);
/// assert_eq!(table, "    .byte 0x01, 0x02, 0x03\n");
/// ```
pub fn byte_table(data: &[u8]) -> String {
    let mut out = String::with_capacity(data.len() * 6 + 16);
    for line in data.chunks(BYTES_PER_LINE) {
        out.push_str("    .byte ");
        let values: Vec<String> = line.iter().map(|v| format!("0x{v:02x}")).collect();
        out.push_str(&values.join(", "));
        out.push('\n');
    }
    out
}

/// Renders an LZ4I container as an aligned assembler constant.
///
/// The leading comment records the dimensions, the container size and the
/// compression ratio against the uncompressed packed buffer. Spaces in
/// `name` become underscores.
///
/// # Errors
///
/// Any header error from [`read_header`]; the payload itself is not checked.
///
/// # Example
///
/// ```
/// use lz4i::{container_to_asm, lz4i_encode_packed, BitDepth, EncodeOptions};
///
/// let opts = EncodeOptions::uncompressed();
/// let container = lz4i_encode_packed(&[0xFF], 1, 1, BitDepth::Eight, &opts)?;
/// let asm = container_to_asm("dot", &container)?;
/// assert!(asm.starts_with(".const dot; LZ4Image 1x1x8,  10 bytes, c-ratio: 0.1\n"));
/// # Ok::<(), lz4i::Lz4iError>(())
/// ```
pub fn container_to_asm(name: &str, container: &[u8]) -> Result<String> {
    let header = read_header(container)?;
    let packed_len = header.packed_size()?;
    let ratio = packed_len as f64 / container.len() as f64;

    let mut out = format!(
        ".const {}; LZ4Image {}x{}x{},  {} bytes, c-ratio: {:.1}\n",
        name.replace(' ', "_"),
        header.width,
        header.height,
        header.depth,
        container.len(),
        ratio
    );
    out.push_str("    .align 4\n");
    out.push_str(&byte_table(container));
    Ok(out)
}
