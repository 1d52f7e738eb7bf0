use super::{Flaw, Rune, RuneId};
use serde::{Deserialize, Serialize};

/// A malformed runestone
///
/// Carries every flaw found, in detection order, plus the etched rune name
/// and mint id when those could still be recovered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cenotaph {
    pub etching: Option<Rune>,
    pub flaws: Vec<Flaw>,
    pub mint: Option<RuneId>,
}

impl Cenotaph {
    pub(super) fn from_flaw(flaw: Flaw) -> Self {
        Self {
            flaws: vec![flaw],
            ..Self::default()
        }
    }

    /// The first flaw detected
    pub fn flaw(&self) -> Option<Flaw> {
        self.flaws.first().copied()
    }

    pub fn has_flaw(&self, flaw: Flaw) -> bool {
        self.flaws.contains(&flaw)
    }
}
