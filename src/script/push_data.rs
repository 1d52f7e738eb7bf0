//! Push-data reader
//!
//! Reads a single push instruction (`OP_PUSHBYTES_1..=75`, `OP_PUSHDATA1/2/4`)
//! starting at a cursor position. Lengths follow the declared size, so trailing
//! opcodes after the pushed bytes are never swallowed.

use super::opcodes::{OP_PUSHBYTES_75, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use byteorder::{ByteOrder, LittleEndian};

/// Push-data reader errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PushDataError {
    /// The byte at `position` is not a push opcode
    #[error("Invalid push opcode {opcode:#04x} at position {position}")]
    InvalidPushOpcode { opcode: u8, position: usize },

    /// The buffer ended before the opcode or its length header
    #[error("Unexpected end of data at position {0}")]
    UnexpectedEnd(usize),

    /// The declared push length runs past the end of the buffer
    #[error("Push at position {position} declares {declared} bytes but only {available} remain")]
    Truncated {
        position: usize,
        declared: usize,
        available: usize,
    },
}

/// Read one push instruction at `cursor`
///
/// Returns the pushed bytes and the cursor just past the declared push. When
/// the declared length runs past the end of `bytes` the returned slice is
/// clamped to what is available and the returned cursor lies beyond
/// `bytes.len()`; use [`read_complete_push_data`] to reject that case.
pub fn read_push_data(bytes: &[u8], cursor: usize) -> Result<(&[u8], usize), PushDataError> {
    let opcode = *bytes.get(cursor).ok_or(PushDataError::UnexpectedEnd(cursor))?;
    let mut pointer = cursor + 1;

    let size = match opcode {
        1..=OP_PUSHBYTES_75 => opcode as usize,
        OP_PUSHDATA1 => {
            let header = length_header(bytes, pointer, 1)?;
            pointer += 1;
            header[0] as usize
        }
        OP_PUSHDATA2 => {
            let header = length_header(bytes, pointer, 2)?;
            pointer += 2;
            LittleEndian::read_u16(header) as usize
        }
        OP_PUSHDATA4 => {
            let header = length_header(bytes, pointer, 4)?;
            pointer += 4;
            LittleEndian::read_u32(header) as usize
        }
        _ => {
            return Err(PushDataError::InvalidPushOpcode {
                opcode,
                position: cursor,
            })
        }
    };

    let end = pointer.saturating_add(size);
    let start = pointer.min(bytes.len());
    let data = &bytes[start..end.min(bytes.len())];

    Ok((data, end))
}

/// Read one push instruction at `cursor`, failing if it is truncated
pub fn read_complete_push_data(
    bytes: &[u8],
    cursor: usize,
) -> Result<(&[u8], usize), PushDataError> {
    let (data, next) = read_push_data(bytes, cursor)?;

    if next > bytes.len() {
        return Err(PushDataError::Truncated {
            position: cursor,
            declared: next - (bytes.len() - data.len()),
            available: data.len(),
        });
    }

    Ok((data, next))
}

/// Append a minimal push of `data` to `script`
///
/// Pushes longer than `u16::MAX` use `OP_PUSHDATA4`. An empty slice is
/// written as `OP_0`.
pub fn write_push_data(script: &mut Vec<u8>, data: &[u8]) {
    let len = data.len();

    if len <= OP_PUSHBYTES_75 as usize {
        script.push(len as u8);
    } else if len <= u8::MAX as usize {
        script.push(OP_PUSHDATA1);
        script.push(len as u8);
    } else if len <= u16::MAX as usize {
        script.push(OP_PUSHDATA2);
        let mut header = [0u8; 2];
        LittleEndian::write_u16(&mut header, len as u16);
        script.extend_from_slice(&header);
    } else {
        script.push(OP_PUSHDATA4);
        let mut header = [0u8; 4];
        LittleEndian::write_u32(&mut header, len as u32);
        script.extend_from_slice(&header);
    }

    script.extend_from_slice(data);
}

fn length_header(bytes: &[u8], pointer: usize, width: usize) -> Result<&[u8], PushDataError> {
    bytes
        .get(pointer..pointer + width)
        .ok_or(PushDataError::UnexpectedEnd(pointer))
}
