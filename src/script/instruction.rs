//! Script decompiler
//!
//! Splits a scriptPubKey into a lazy sequence of [`Instruction`]s. Each call to
//! [`decompile`] starts a fresh walk from the first byte.

use super::opcodes::{OP_0, OP_PUSHBYTES_75, OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};
use super::push_data::read_push_data;
use std::fmt;

/// A single decompiled script instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction<'a> {
    /// A non-push opcode
    Opcode(u8),
    /// Bytes placed on the stack by a push opcode (`OP_0` pushes an empty slice)
    Data(&'a [u8]),
}

impl<'a> Instruction<'a> {
    pub fn is_push(&self) -> bool {
        matches!(self, Instruction::Data(_))
    }

    pub fn opcode(&self) -> Option<u8> {
        match self {
            Instruction::Opcode(op) => Some(*op),
            Instruction::Data(_) => None,
        }
    }

    pub fn data(&self) -> Option<&'a [u8]> {
        match self {
            Instruction::Opcode(_) => None,
            Instruction::Data(data) => Some(data),
        }
    }
}

/// Assembly form of the instruction
///
/// Pushes are written with the minimal push opcode for their length, so a
/// non-minimal push in the source script is shown in its normalised form.
impl fmt::Display for Instruction<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Opcode(op) => write!(f, "{}", bitcoin::opcodes::Opcode::from(*op)),
            Instruction::Data(data) if data.is_empty() => write!(f, "OP_0"),
            Instruction::Data(data) if data.len() <= OP_PUSHBYTES_75 as usize => {
                write!(f, "OP_PUSHBYTES_{} {}", data.len(), hex::encode(data))
            }
            Instruction::Data(data) if data.len() <= u8::MAX as usize => {
                write!(f, "OP_PUSHDATA1 {}", hex::encode(data))
            }
            Instruction::Data(data) if data.len() <= u16::MAX as usize => {
                write!(f, "OP_PUSHDATA2 {}", hex::encode(data))
            }
            Instruction::Data(data) => write!(f, "OP_PUSHDATA4 {}", hex::encode(data)),
        }
    }
}

/// Decompilation failure
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecompileError {
    #[error("unable to decompile: push at position {position} runs past the end of the script")]
    EarlyEndOfScript { position: usize },
}

/// Lazy instruction iterator returned by [`decompile`]
///
/// Yields `Err` at most once, after which the iterator is exhausted.
#[derive(Debug, Clone)]
pub struct Instructions<'a> {
    script: &'a [u8],
    cursor: usize,
    failed: bool,
}

/// Decompile `script` into instructions
pub fn decompile(script: &[u8]) -> Instructions<'_> {
    Instructions {
        script,
        cursor: 0,
        failed: false,
    }
}

impl<'a> Instructions<'a> {
    fn fail(&mut self, position: usize) -> Option<Result<Instruction<'a>, DecompileError>> {
        self.failed = true;
        Some(Err(DecompileError::EarlyEndOfScript { position }))
    }
}

impl<'a> Iterator for Instructions<'a> {
    type Item = Result<Instruction<'a>, DecompileError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let position = self.cursor;
        let opcode = *self.script.get(position)?;

        match opcode {
            OP_0 => {
                self.cursor += 1;
                Some(Ok(Instruction::Data(&[])))
            }
            1..=OP_PUSHBYTES_75 | OP_PUSHDATA1 | OP_PUSHDATA2 | OP_PUSHDATA4 => {
                match read_push_data(self.script, position) {
                    Ok((data, next)) if next <= self.script.len() => {
                        self.cursor = next;
                        Some(Ok(Instruction::Data(data)))
                    }
                    _ => self.fail(position),
                }
            }
            _ => {
                self.cursor += 1;
                Some(Ok(Instruction::Opcode(opcode)))
            }
        }
    }
}

impl std::iter::FusedIterator for Instructions<'_> {}
