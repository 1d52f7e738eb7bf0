use serde::{Deserialize, Serialize};
use std::fmt;

/// Reason a runestone is a cenotaph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Flaw {
    EdictOutput,
    EdictRuneId,
    InvalidScript,
    Opcode,
    SupplyOverflow,
    TrailingIntegers,
    TruncatedField,
    UnrecognizedEvenTag,
    UnrecognizedFlag,
    Varint,
}

impl fmt::Display for Flaw {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::EdictOutput => write!(f, "edict output greater than transaction output count"),
            Self::EdictRuneId => write!(f, "invalid rune ID in edict"),
            Self::InvalidScript => write!(f, "invalid script in OP_RETURN"),
            Self::Opcode => write!(f, "non-pushdata opcode in OP_RETURN"),
            Self::SupplyOverflow => write!(f, "supply overflows u128"),
            Self::TrailingIntegers => write!(f, "field tag without a value"),
            Self::TruncatedField => write!(f, "incomplete edict in body"),
            Self::UnrecognizedEvenTag => write!(f, "unrecognized even tag"),
            Self::UnrecognizedFlag => write!(f, "unrecognized flag"),
            Self::Varint => write!(f, "invalid varint"),
        }
    }
}
