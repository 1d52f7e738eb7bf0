//! Input transaction model
//!
//! Mirrors the esplora-style JSON shape the decoders consume:
//!
//! ```json
//! { "txid": "...", "vin": [{ "witness": ["hex", ...] }],
//!   "vout": [{ "scriptpubkey": "hex", "scriptpubkey_type": "op_return" }] }
//! ```
//!
//! Any other fields in the JSON are ignored. A transaction can also be built
//! from consensus-encoded bytes via the `bitcoin` crate.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub txid: String,
    #[serde(default)]
    pub vin: Vec<TxInput>,
    #[serde(default)]
    pub vout: Vec<TxOutput>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Witness stack elements as hex strings
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub witness: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    pub scriptpubkey: String,
    #[serde(default)]
    pub scriptpubkey_type: String,
}

impl Transaction {
    /// Parse an esplora-style transaction JSON document
    pub fn from_json(json: &str) -> AppResult<Self> {
        let transaction: Self = serde_json::from_str(json)?;
        Ok(transaction)
    }

    /// Decode a consensus-encoded transaction from hex
    pub fn from_raw_hex(raw: &str) -> AppResult<Self> {
        let bytes = hex::decode(raw.trim())?;
        if bytes.is_empty() {
            return Err(AppError::InvalidTransaction(
                "empty transaction hex".to_string(),
            ));
        }

        let transaction: bitcoin::Transaction = bitcoin::consensus::deserialize(&bytes)?;
        Ok(Self::from(&transaction))
    }
}

impl TxInput {
    /// Concatenated witness bytes, or `None` without a witness
    ///
    /// Elements that are not valid hex make the whole witness unusable.
    pub fn witness_bytes(&self) -> Option<Vec<u8>> {
        let witness = self.witness.as_ref()?;
        let mut bytes = Vec::new();

        for element in witness {
            match hex::decode(element) {
                Ok(decoded) => bytes.extend_from_slice(&decoded),
                Err(e) => {
                    debug!("Skipping witness with undecodable element: {}", e);
                    return None;
                }
            }
        }

        Some(bytes)
    }
}

impl TxOutput {
    /// Decoded scriptPubKey bytes, or `None` if the hex is invalid
    pub fn script_bytes(&self) -> Option<Vec<u8>> {
        match hex::decode(&self.scriptpubkey) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                debug!("Skipping output with undecodable scriptpubkey: {}", e);
                None
            }
        }
    }
}

impl From<&bitcoin::Transaction> for Transaction {
    fn from(transaction: &bitcoin::Transaction) -> Self {
        let vin = transaction
            .input
            .iter()
            .map(|input| TxInput {
                witness: (!input.witness.is_empty())
                    .then(|| input.witness.iter().map(hex::encode).collect()),
            })
            .collect();

        let vout = transaction
            .output
            .iter()
            .map(|output| TxOutput {
                scriptpubkey: hex::encode(output.script_pubkey.as_bytes()),
                scriptpubkey_type: script_type(&output.script_pubkey).to_string(),
            })
            .collect();

        Self {
            txid: transaction.compute_txid().to_string(),
            vin,
            vout,
        }
    }
}

/// Esplora name for the output script template
fn script_type(script: &bitcoin::Script) -> &'static str {
    if script.is_op_return() {
        "op_return"
    } else if script.is_p2pkh() {
        "p2pkh"
    } else if script.is_p2sh() {
        "p2sh"
    } else if script.is_p2wpkh() {
        "v0_p2wpkh"
    } else if script.is_p2wsh() {
        "v0_p2wsh"
    } else if script.is_p2tr() {
        "v1_p2tr"
    } else if script.is_p2pk() {
        "p2pk"
    } else {
        "unknown"
    }
}
