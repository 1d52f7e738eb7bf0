//! LEB128-style variable-length integers (u128)
//!
//! Seven bits per byte, least-significant group first, continuation bit
//! `0x80` set on every byte except the last.
//!
//! Decoding is strict: an encoding that uses more bytes than necessary
//! (a terminating `0x00` after a continuation byte) is rejected with
//! [`Error::NonCanonical`]. A u128 never needs more than 19 bytes.

/// Varint decoding failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("varint longer than 19 bytes")]
    Overlong,

    #[error("varint overflows u128")]
    Overflow,

    #[error("varint ends before a terminating byte")]
    Unterminated,

    #[error("varint uses more bytes than necessary")]
    NonCanonical,
}

const MAX_LENGTH: usize = 19;

/// Append the encoding of `n` to `v`
pub fn encode_to_vec(mut n: u128, v: &mut Vec<u8>) {
    while n >> 7 > 0 {
        v.push(n.to_le_bytes()[0] | 0b1000_0000);
        n >>= 7;
    }

    v.push(n.to_le_bytes()[0]);
}

pub fn encode(n: u128) -> Vec<u8> {
    let mut v = Vec::new();
    encode_to_vec(n, &mut v);
    v
}

/// Decode one varint from the front of `buffer`
///
/// Returns the value and the number of bytes consumed.
pub fn decode(buffer: &[u8]) -> Result<(u128, usize), Error> {
    let mut n = 0u128;

    for (i, &byte) in buffer.iter().enumerate() {
        if i >= MAX_LENGTH {
            return Err(Error::Overlong);
        }

        let value = u128::from(byte) & 0b0111_1111;

        // the 19th byte only has room for the top two bits
        if i == MAX_LENGTH - 1 && value & 0b0111_1100 != 0 {
            return Err(Error::Overflow);
        }

        n |= value << (7 * i);

        if byte & 0b1000_0000 == 0 {
            if i > 0 && value == 0 {
                return Err(Error::NonCanonical);
            }
            return Ok((n, i + 1));
        }
    }

    Err(Error::Unterminated)
}

/// Decode consecutive varints until `payload` is exhausted
pub fn decode_all(payload: &[u8]) -> Result<Vec<u128>, Error> {
    let mut integers = Vec::new();
    let mut i = 0;

    while i < payload.len() {
        let (integer, length) = decode(&payload[i..])?;
        integers.push(integer);
        i += length;
    }

    Ok(integers)
}
