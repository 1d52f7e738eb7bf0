//! Bounded Brotli decompression
//!
//! Decompression output is capped. When a stream would inflate past the cap
//! the decoder fails closed: it stops reading and returns
//! [`SIZE_LIMIT_EXCEEDED`] as the output instead of the partial data.

use std::io::Read;
use tracing::warn;

/// Output returned in place of content that inflates past the ceiling
pub const SIZE_LIMIT_EXCEEDED: &[u8] = b"Decompressed size exceeds allowed limit";

/// Default decompression ceiling (10 MiB)
pub const DEFAULT_MAX_DECOMPRESSED_SIZE: usize = 10 * 1024 * 1024;

const BUFFER_SIZE: usize = 4096;

/// Brotli decoding errors
#[derive(Debug, thiserror::Error)]
pub enum BrotliError {
    #[error("Corrupt Brotli stream: {0}")]
    Corrupt(#[from] std::io::Error),
}

/// Decompress `compressed`, producing at most `max_size` bytes
pub fn decode(compressed: &[u8], max_size: usize) -> Result<Vec<u8>, BrotliError> {
    let mut decoder = ::brotli::Decompressor::new(compressed, BUFFER_SIZE);
    let mut output = Vec::new();

    // one extra byte tells "exactly at the limit" apart from "past it"
    decoder
        .by_ref()
        .take((max_size as u64).saturating_add(1))
        .read_to_end(&mut output)?;

    if output.len() > max_size {
        warn!(
            "Brotli output exceeds {} byte ceiling ({} compressed bytes)",
            max_size,
            compressed.len()
        );
        return Ok(SIZE_LIMIT_EXCEEDED.to_vec());
    }

    Ok(output)
}

#[cfg(test)]
pub(crate) fn compress(data: &[u8]) -> Vec<u8> {
    use std::io::Write;

    let mut writer = ::brotli::CompressorWriter::new(Vec::new(), BUFFER_SIZE, 11, 22);
    writer.write_all(data).unwrap();
    writer.into_inner()
}
