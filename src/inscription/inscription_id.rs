//! Inscription id references carried in parent and delegate fields
//!
//! A reference is the 32-byte txid in internal byte order followed by the
//! little-endian inscription index. The index may be shortened to fewer than
//! four bytes; missing bytes are zero.

use bitcoin::hashes::Hash;
use bitcoin::Txid;

const TXID_LEN: usize = 32;
const INDEX_LEN: usize = 4;

/// Format an inscription id as `<txid>i<index>`
pub fn format_inscription_id(txid: &str, index: usize) -> String {
    format!("{}i{}", txid, index)
}

/// Decode a parent/delegate field value into `<txid>i<index>`
pub fn decode_inscription_id(value: &[u8]) -> Option<String> {
    if value.len() < TXID_LEN || value.len() > TXID_LEN + INDEX_LEN {
        return None;
    }

    let (txid, index) = value.split_at(TXID_LEN);
    let txid = Txid::from_slice(txid).ok()?;

    let mut buffer = [0u8; INDEX_LEN];
    buffer[..index.len()].copy_from_slice(index);

    Some(format_inscription_id(
        &txid.to_string(),
        u32::from_le_bytes(buffer) as usize,
    ))
}
