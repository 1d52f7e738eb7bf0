//! Per-transaction entry points
//!
//! Combines inscription parsing and runestone deciphering for one
//! transaction. These functions never fail; input that is not a usable
//! transaction simply yields no artifacts.

use crate::inscription::{self, ContentLimits, InscriptionSummary, ParsedInscription};
use crate::runes::{Artifact, Runestone};
use crate::transaction::Transaction;
use serde::Serialize;
use tracing::{debug, info};

/// Everything recovered from one transaction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionArtifacts {
    pub txid: String,
    pub inscriptions: Vec<ParsedInscription>,
    pub runestone: Option<Artifact>,
}

/// Serialisable report of a [`TransactionArtifacts`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactReport {
    pub txid: String,
    pub inscriptions: Vec<InscriptionSummary>,
    pub runestone: Option<Artifact>,
}

impl TransactionArtifacts {
    pub fn is_empty(&self) -> bool {
        self.inscriptions.is_empty() && self.runestone.is_none()
    }

    pub fn report(&self, limits: &ContentLimits) -> ArtifactReport {
        ArtifactReport {
            txid: self.txid.clone(),
            inscriptions: self
                .inscriptions
                .iter()
                .map(|inscription| inscription.summary_with(limits))
                .collect(),
            runestone: self.runestone.clone(),
        }
    }
}

/// Extract inscriptions and the runes artifact from `transaction`
pub fn parse_transaction(transaction: &Transaction) -> TransactionArtifacts {
    let inscriptions = inscription::parse_inscriptions(transaction);
    let runestone = Runestone::decipher(transaction);

    info!(
        "Transaction {}: {} inscription(s), runestone: {}",
        transaction.txid,
        inscriptions.len(),
        match &runestone {
            Some(Artifact::Runestone(_)) => "valid",
            Some(Artifact::Cenotaph(_)) => "cenotaph",
            None => "none",
        }
    );

    TransactionArtifacts {
        txid: transaction.txid.clone(),
        inscriptions,
        runestone,
    }
}

/// Parse an esplora-style transaction JSON document
///
/// Malformed JSON or a document of the wrong shape yields empty artifacts.
pub fn parse_transaction_json(json: &str) -> TransactionArtifacts {
    match Transaction::from_json(json) {
        Ok(transaction) => parse_transaction(&transaction),
        Err(e) => {
            debug!("Ignoring malformed transaction: {}", e);
            TransactionArtifacts::default()
        }
    }
}
