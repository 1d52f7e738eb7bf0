//! Runes protocol decoder
//!
//! A runestone is the first transaction output whose script starts with
//! `OP_RETURN OP_PUSHNUM_13`. The concatenated data pushes that follow are a
//! sequence of varint-encoded integers grouped into `(tag, value)` fields and,
//! after the body tag, into edicts.
//!
//! Decoding never fails. A structurally invalid message is a [`Cenotaph`]
//! carrying the [`Flaw`]s that were found.

mod artifact;
mod cenotaph;
mod edict;
mod etching;
mod flag;
mod flaw;
mod message;
mod rune;
mod rune_id;
mod runestone;
mod tag;
mod terms;

pub use artifact::Artifact;
pub use cenotaph::Cenotaph;
pub use edict::Edict;
pub use etching::Etching;
pub use flaw::Flaw;
pub use rune::{Rune, RuneError, SpacedRune, SpacedRuneError, SPACER};
pub use rune_id::{RuneId, RuneIdError};
pub use runestone::Runestone;
pub use terms::Terms;
