use crate::integers::{U32, U64};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Position of a rune's etching transaction: block height and index in block
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuneId {
    pub block: u64,
    pub tx: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuneIdError {
    #[error("missing `:` separator")]
    Separator,

    #[error("invalid block height: {0}")]
    Block(ParseIntError),

    #[error("invalid transaction index: {0}")]
    Transaction(ParseIntError),

    #[error("block 0 cannot have a non-zero transaction index")]
    Invalid,
}

impl RuneId {
    /// Only the genesis id `0:0` may use block 0
    pub fn new(block: u64, tx: u32) -> Option<RuneId> {
        let id = RuneId { block, tx };

        if id.block == 0 && id.tx > 0 {
            return None;
        }

        Some(id)
    }

    /// Delta encoding of `next` relative to `self`
    ///
    /// The transaction index is relative only when the block is unchanged.
    pub fn delta(self, next: RuneId) -> Option<(u128, u128)> {
        let block = U64(next.block).checked_sub(U64(self.block))?;

        let tx = if block == U64::MIN {
            U32(next.tx).checked_sub(U32(self.tx))?
        } else {
            U32(next.tx)
        };

        Some((block.get().into(), tx.get().into()))
    }

    /// Apply a `(block, tx)` delta, failing on overflow or an invalid id
    pub fn next(self, block: u128, tx: u128) -> Option<RuneId> {
        let block_delta = U64::try_from(block).ok()?;
        let tx_delta = U32::try_from(tx).ok()?;

        let block = U64(self.block).checked_add(block_delta)?;

        let tx = if block_delta == U64::MIN {
            U32(self.tx).checked_add(tx_delta)?
        } else {
            tx_delta
        };

        RuneId::new(block.get(), tx.get())
    }
}

impl fmt::Display for RuneId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{}", self.block, self.tx)
    }
}

impl FromStr for RuneId {
    type Err = RuneIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (block, tx) = s.split_once(':').ok_or(RuneIdError::Separator)?;

        let block = block.parse().map_err(RuneIdError::Block)?;
        let tx = tx.parse().map_err(RuneIdError::Transaction)?;

        RuneId::new(block, tx).ok_or(RuneIdError::Invalid)
    }
}

impl Serialize for RuneId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RuneId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
