//! Inscription envelope parsing
//!
//! Inscriptions live in taproot witness data inside an
//! `OP_FALSE OP_IF "ord" ... OP_ENDIF` envelope. Each envelope carries
//! `(tag, value)` fields followed by an optional body:
//!
//! | tag | field |
//! |-----|-------|
//! | 1   | content type |
//! | 2   | pointer |
//! | 3   | parent (repeatable) |
//! | 5   | CBOR metadata (chunked) |
//! | 7   | metaprotocol |
//! | 9   | content encoding |
//! | 11  | delegate (repeatable) |
//!
//! Malformed envelopes are dropped; parsing never fails as a whole.

pub mod envelope;
pub mod inscription_id;
pub mod parsed;
pub mod tag;

pub use envelope::{parse_envelopes, Envelope, EnvelopeError, INSCRIPTION_MARK};
pub use inscription_id::{decode_inscription_id, format_inscription_id};
pub use parsed::{
    ContentLimits, InscriptionSummary, ParsedInscription, DEFAULT_MAX_METADATA_SIZE,
    UNDEFINED_CONTENT_TYPE,
};
pub use tag::Tag;

use crate::transaction::Transaction;
use tracing::debug;

/// A single `(tag, value)` envelope field
///
/// Order is preserved and duplicate tags are kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub tag: u128,
    pub value: Vec<u8>,
}

/// Parse every envelope in one input's witness bytes
///
/// The returned inscriptions have no inscription or transaction id yet.
pub fn parse_witness(witness: &[u8], input: usize) -> Vec<ParsedInscription> {
    parse_envelopes(witness)
        .into_iter()
        .map(|envelope| ParsedInscription::from_envelope(envelope, witness, input))
        .collect()
}

/// Parse all inscriptions of a transaction
///
/// Inscriptions are returned in input order, then witness order, and numbered
/// `<txid>i0`, `<txid>i1`, ... across the whole transaction.
pub fn parse_inscriptions(transaction: &Transaction) -> Vec<ParsedInscription> {
    let mut inscriptions = Vec::new();

    for (input, txin) in transaction.vin.iter().enumerate() {
        let Some(witness) = txin.witness_bytes() else {
            continue;
        };

        for mut inscription in parse_witness(&witness, input) {
            inscription.inscription_id =
                format_inscription_id(&transaction.txid, inscriptions.len());
            inscription.transaction_id = transaction.txid.clone();
            inscriptions.push(inscription);
        }
    }

    debug!(
        "Found {} inscription(s) in transaction {}",
        inscriptions.len(),
        transaction.txid
    );

    inscriptions
}
