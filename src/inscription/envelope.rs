//! Inscription envelope parser
//!
//! Works directly on witness bytes rather than decompiled tapscript:
//!
//! 1. find `OP_FALSE OP_IF OP_PUSHBYTES_3 "ord"`
//! 2. read `(tag, value)` push pairs until `OP_0` (body) or `OP_ENDIF` (no body)
//! 3. concatenate body pushes until `OP_ENDIF`
//!
//! Several envelopes may follow each other in one witness. Scanning for the
//! next mark resumes where the previous envelope ended, so envelopes never
//! overlap. A malformed envelope is dropped and scanning resumes right after
//! its mark.

use super::Field;
use crate::script::opcodes::{OP_0, OP_ENDIF, OP_IF};
use crate::script::{read_complete_push_data, PushDataError};
use tracing::debug;

/// `OP_FALSE OP_IF OP_PUSHBYTES_3 "ord"`
pub const INSCRIPTION_MARK: [u8; 6] = [OP_0, OP_IF, 0x03, b'o', b'r', b'd'];

/// Tags wider than this many bytes cannot be represented
const MAX_TAG_BYTES: usize = 16;

/// Envelope parsing failure (the envelope is dropped)
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EnvelopeError {
    #[error("Push data error: {0}")]
    PushData(#[from] PushDataError),

    #[error("Witness ended inside envelope at position {0}")]
    UnexpectedEnd(usize),

    #[error("Field tag at position {0} does not fit in 128 bits")]
    TagTooLarge(usize),
}

/// One envelope found in a witness
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Byte offset of the inscription mark within the witness
    pub offset: usize,
    /// Byte offset just past the closing `OP_ENDIF`
    pub end: usize,
    pub fields: Vec<Field>,
    /// `None` when the envelope closes without a body marker
    pub body: Option<Vec<u8>>,
}

/// Extract every well-formed envelope from `witness`, in byte order
pub fn parse_envelopes(witness: &[u8]) -> Vec<Envelope> {
    let mut envelopes = Vec::new();
    let mut search_from = 0;

    while let Some(offset) = find_mark(witness, search_from) {
        let start = offset + INSCRIPTION_MARK.len();

        match parse_envelope(witness, start) {
            Ok((fields, body, end)) => {
                envelopes.push(Envelope {
                    offset,
                    end,
                    fields,
                    body,
                });
                search_from = end;
            }
            Err(e) => {
                debug!("Dropping inscription envelope at offset {}: {}", offset, e);
                search_from = start;
            }
        }
    }

    envelopes
}

/// Position of the next inscription mark at or after `from`
pub fn find_mark(bytes: &[u8], from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .windows(INSCRIPTION_MARK.len())
        .position(|window| window == INSCRIPTION_MARK)
        .map(|position| position + from)
}

type EnvelopeParts = (Vec<Field>, Option<Vec<u8>>, usize);

fn parse_envelope(bytes: &[u8], start: usize) -> Result<EnvelopeParts, EnvelopeError> {
    let mut pointer = start;
    let mut fields = Vec::new();

    loop {
        match bytes.get(pointer) {
            None => return Err(EnvelopeError::UnexpectedEnd(pointer)),
            Some(&OP_0) => break,
            // delegate-style envelope without a body
            Some(&OP_ENDIF) => return Ok((fields, None, pointer + 1)),
            Some(_) => {}
        }

        let (tag, next) = read_complete_push_data(bytes, pointer)?;
        let tag = decode_tag(tag).ok_or(EnvelopeError::TagTooLarge(pointer))?;
        let (value, next) = read_complete_push_data(bytes, next)?;

        fields.push(Field {
            tag,
            value: value.to_vec(),
        });
        pointer = next;
    }

    // skip the body marker
    pointer += 1;

    let mut body = Vec::new();
    loop {
        match bytes.get(pointer) {
            None => return Err(EnvelopeError::UnexpectedEnd(pointer)),
            Some(&OP_ENDIF) => break,
            Some(_) => {}
        }

        let (data, next) = read_complete_push_data(bytes, pointer)?;
        body.extend_from_slice(data);
        pointer = next;
    }

    Ok((fields, Some(body), pointer + 1))
}

/// Interpret tag bytes as a little-endian integer
fn decode_tag(bytes: &[u8]) -> Option<u128> {
    if bytes.len() > MAX_TAG_BYTES && bytes[MAX_TAG_BYTES..].iter().any(|&b| b != 0) {
        return None;
    }

    let mut buffer = [0u8; MAX_TAG_BYTES];
    let width = bytes.len().min(MAX_TAG_BYTES);
    buffer[..width].copy_from_slice(&bytes[..width]);

    Some(u128::from_le_bytes(buffer))
}
