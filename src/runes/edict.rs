use super::RuneId;
use crate::integers::U32;
use serde::{Deserialize, Serialize};

/// Transfer of `amount` units of rune `id` to output `output`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edict {
    pub id: RuneId,
    pub amount: u128,
    pub output: u32,
}

impl Edict {
    /// Build an edict, rejecting outputs past the transaction's outputs
    ///
    /// `output == output_count` is allowed and addresses every
    /// non-`OP_RETURN` output at once.
    pub fn from_integers(output_count: usize, id: RuneId, amount: u128, output: u128) -> Option<Self> {
        let output = U32::try_from(output).ok()?;

        if u64::from(output.get()) > output_count as u64 {
            return None;
        }

        Some(Self {
            id,
            amount,
            output: output.get(),
        })
    }
}
