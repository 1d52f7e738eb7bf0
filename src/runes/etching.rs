use super::{Rune, SpacedRune, Terms};
use crate::integers::U128;
use serde::{Deserialize, Serialize};

/// Declaration of a new rune
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Etching {
    pub divisibility: Option<u8>,
    pub premine: Option<u128>,
    pub rune: Option<Rune>,
    pub spacers: Option<u32>,
    pub symbol: Option<char>,
    pub terms: Option<Terms>,
    pub turbo: bool,
}

impl Etching {
    pub const MAX_DIVISIBILITY: u8 = 38;
    pub const MAX_SPACERS: u32 = 0b00000111_11111111_11111111_11111111;

    /// `premine + cap * amount`, or `None` on overflow
    pub fn supply(&self) -> Option<u128> {
        let premine = U128(self.premine.unwrap_or_default());
        let cap = U128(self.terms.and_then(|terms| terms.cap).unwrap_or_default());
        let amount = U128(self.terms.and_then(|terms| terms.amount).unwrap_or_default());

        premine
            .checked_add(cap.checked_mul(amount)?)
            .map(U128::get)
    }

    pub fn spaced_rune(&self) -> Option<SpacedRune> {
        self.rune
            .map(|rune| SpacedRune::new(rune, self.spacers.unwrap_or_default()))
    }
}
