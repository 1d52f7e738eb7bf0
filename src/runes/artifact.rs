use super::{Cenotaph, RuneId, Runestone};
use serde::{Deserialize, Serialize};

/// Outcome of deciphering a transaction that carries a runes payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Artifact {
    Cenotaph(Cenotaph),
    Runestone(Runestone),
}

impl Artifact {
    pub fn mint(&self) -> Option<RuneId> {
        match self {
            Self::Cenotaph(cenotaph) => cenotaph.mint,
            Self::Runestone(runestone) => runestone.mint,
        }
    }

    pub fn is_cenotaph(&self) -> bool {
        matches!(self, Self::Cenotaph(_))
    }
}
