//! Rune names
//!
//! A rune name is a `u128` written in bijective base 26 with the letters
//! `A`-`Z`: `A` = 0, `Z` = 25, `AA` = 26, `AB` = 27, and so on.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Spacer glyph used when displaying spaced rune names
pub const SPACER: char = '•';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rune(pub u128);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuneError {
    #[error("invalid character `{0}`")]
    Character(char),

    #[error("name out of range")]
    Range,
}

impl fmt::Display for Rune {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut n = self.0;
        if n == u128::MAX {
            return write!(f, "BCGDENLQRQWDSLRUGSNLBTMFIJAV");
        }

        n += 1;
        let mut symbol = Vec::new();
        while n > 0 {
            symbol.push(ALPHABET[((n - 1) % 26) as usize]);
            n = (n - 1) / 26;
        }

        for &c in symbol.iter().rev() {
            write!(f, "{}", c as char)?;
        }

        Ok(())
    }
}

impl FromStr for Rune {
    type Err = RuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut x = 0u128;

        for (i, c) in s.chars().enumerate() {
            if i > 0 {
                x = x.checked_add(1).ok_or(RuneError::Range)?;
            }
            x = x.checked_mul(26).ok_or(RuneError::Range)?;
            match c {
                'A'..='Z' => {
                    x = x
                        .checked_add(c as u128 - 'A' as u128)
                        .ok_or(RuneError::Range)?;
                }
                _ => return Err(RuneError::Character(c)),
            }
        }

        Ok(Rune(x))
    }
}

impl Serialize for Rune {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rune {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A rune name with spacer bits
///
/// Bit `i` of `spacers` places a spacer after the `i`-th letter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SpacedRune {
    pub rune: Rune,
    pub spacers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SpacedRuneError {
    #[error("leading spacer")]
    LeadingSpacer,

    #[error("trailing spacer")]
    TrailingSpacer,

    #[error("double spacer")]
    DoubleSpacer,

    #[error("spacer after the 32nd letter")]
    SpacerOutOfRange,

    #[error("invalid character `{0}`")]
    Character(char),

    #[error("{0}")]
    Rune(#[from] RuneError),
}

impl SpacedRune {
    pub fn new(rune: Rune, spacers: u32) -> Self {
        Self { rune, spacers }
    }
}

impl fmt::Display for SpacedRune {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let rune = self.rune.to_string();

        for (i, c) in rune.chars().enumerate() {
            write!(f, "{}", c)?;

            if i < rune.len() - 1 && i < 32 && self.spacers & (1 << i) != 0 {
                write!(f, "{}", SPACER)?;
            }
        }

        Ok(())
    }
}

impl FromStr for SpacedRune {
    type Err = SpacedRuneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rune = String::new();
        let mut spacers = 0u32;

        for c in s.chars() {
            match c {
                'A'..='Z' => rune.push(c),
                '.' | SPACER => {
                    let position = rune
                        .len()
                        .checked_sub(1)
                        .ok_or(SpacedRuneError::LeadingSpacer)?;
                    let flag = u32::try_from(position)
                        .ok()
                        .and_then(|position| 1u32.checked_shl(position))
                        .ok_or(SpacedRuneError::SpacerOutOfRange)?;
                    if spacers & flag != 0 {
                        return Err(SpacedRuneError::DoubleSpacer);
                    }
                    spacers |= flag;
                }
                _ => return Err(SpacedRuneError::Character(c)),
            }
        }

        if (32 - spacers.leading_zeros()) as usize >= rune.len() {
            return Err(SpacedRuneError::TrailingSpacer);
        }

        Ok(SpacedRune {
            rune: rune.parse()?,
            spacers,
        })
    }
}

impl Serialize for SpacedRune {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
