//! Parsed inscription model and its derived accessors

use super::envelope::Envelope;
use super::inscription_id::decode_inscription_id;
use super::tag::Tag;
use super::Field;
use crate::codec::brotli::{self, DEFAULT_MAX_DECOMPRESSED_SIZE};
use crate::codec::cbor;
use base64::{engine::general_purpose, Engine as _};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

/// Content type reported for envelopes without a content-type field
pub const UNDEFINED_CONTENT_TYPE: &str = "undefined";

/// Default ceiling for concatenated CBOR metadata (1 MiB)
pub const DEFAULT_MAX_METADATA_SIZE: usize = 1024 * 1024;

/// Largest pointer field, in bytes
const MAX_POINTER_BYTES: usize = 8;

/// Size ceilings applied by the content and metadata accessors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentLimits {
    pub max_decompressed_size: usize,
    pub max_metadata_size: usize,
}

impl Default for ContentLimits {
    fn default() -> Self {
        Self {
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            max_metadata_size: DEFAULT_MAX_METADATA_SIZE,
        }
    }
}

/// One inscription recovered from a witness envelope
///
/// `inscription_id` and `transaction_id` are empty until the caller that
/// knows the transaction assigns them (see [`super::parse_inscriptions`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInscription {
    pub inscription_id: String,
    pub transaction_id: String,
    /// Hex SHA-256 over input index (LE u64), envelope offset (LE u64) and
    /// envelope bytes
    pub unique_id: String,
    pub content_type: String,
    pub fields: Vec<Field>,
    /// Index of the input whose witness carried the envelope
    pub input: usize,
    /// Byte offset of the envelope within that witness
    pub offset: usize,
    body: Option<Vec<u8>>,
}

/// Serialisable view of an inscription
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InscriptionSummary {
    pub inscription_id: String,
    pub transaction_id: String,
    pub unique_id: String,
    pub input: usize,
    pub offset: usize,
    pub content_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_encoding: Option<String>,
    pub has_body: bool,
    pub content_size: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pointer: Option<u64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parents: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub delegates: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metaprotocol: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Decoded content for textual content types
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ParsedInscription {
    /// Build an inscription from an envelope found in `witness`
    pub fn from_envelope(envelope: Envelope, witness: &[u8], input: usize) -> Self {
        let content_type = Tag::ContentType
            .first(&envelope.fields)
            .map(|value| String::from_utf8_lossy(value).into_owned())
            .unwrap_or_else(|| UNDEFINED_CONTENT_TYPE.to_string());

        let raw = witness.get(envelope.offset..envelope.end).unwrap_or_default();

        Self {
            inscription_id: String::new(),
            transaction_id: String::new(),
            unique_id: unique_id(input, envelope.offset, raw),
            content_type,
            fields: envelope.fields,
            input,
            offset: envelope.offset,
            body: envelope.body,
        }
    }

    /// Body bytes exactly as pushed, before any content decoding
    pub fn raw_body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }

    /// Content encoding from tag 9, e.g. `br`
    pub fn content_encoding(&self) -> Option<String> {
        Tag::ContentEncoding
            .first(&self.fields)
            .map(|value| String::from_utf8_lossy(value).into_owned())
    }

    /// Decoded content bytes using default limits
    pub fn content_bytes(&self) -> Vec<u8> {
        self.content_bytes_with(&ContentLimits::default())
    }

    /// Decoded content bytes
    ///
    /// Brotli-encoded bodies are decompressed up to the configured ceiling. A
    /// body that inflates past it yields the size-limit sentinel as content.
    /// A corrupt Brotli stream falls back to the raw body.
    pub fn content_bytes_with(&self, limits: &ContentLimits) -> Vec<u8> {
        let body = self.raw_body().unwrap_or_default();

        if self.content_encoding().as_deref() != Some("br") {
            return body.to_vec();
        }

        match brotli::decode(body, limits.max_decompressed_size) {
            Ok(content) => content,
            Err(e) => {
                warn!(
                    "Inscription {} has undecodable brotli content: {}",
                    self.inscription_id, e
                );
                body.to_vec()
            }
        }
    }

    pub fn content_size(&self) -> usize {
        self.content_bytes().len()
    }

    /// Content decoded as UTF-8, replacing invalid sequences
    pub fn content(&self) -> String {
        String::from_utf8_lossy(&self.content_bytes()).into_owned()
    }

    /// Content as standard base64
    pub fn data(&self) -> String {
        general_purpose::STANDARD.encode(self.content_bytes())
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.data())
    }

    /// Output pointer from tag 2 (little-endian, at most 8 bytes)
    pub fn pointer(&self) -> Option<u64> {
        let value = Tag::Pointer.first(&self.fields)?;
        if value.len() > MAX_POINTER_BYTES {
            return None;
        }

        let mut buffer = [0u8; MAX_POINTER_BYTES];
        buffer[..value.len()].copy_from_slice(value);
        Some(u64::from_le_bytes(buffer))
    }

    /// Every parent reference (tag 3), in field order
    pub fn parents(&self) -> Vec<String> {
        Tag::Parent
            .all(&self.fields)
            .filter_map(decode_inscription_id)
            .collect()
    }

    /// Every delegate reference (tag 11), in field order
    pub fn delegates(&self) -> Vec<String> {
        Tag::Delegate
            .all(&self.fields)
            .filter_map(decode_inscription_id)
            .collect()
    }

    pub fn metaprotocol(&self) -> Option<String> {
        Tag::Metaprotocol
            .first(&self.fields)
            .map(|value| String::from_utf8_lossy(value).into_owned())
    }

    pub fn metadata(&self) -> Option<cbor::Value> {
        self.metadata_with(&ContentLimits::default())
    }

    /// CBOR metadata from the concatenation of every tag 5 field
    pub fn metadata_with(&self, limits: &ContentLimits) -> Option<cbor::Value> {
        let bytes: Vec<u8> = Tag::Metadata.all(&self.fields).flatten().copied().collect();

        if bytes.is_empty() {
            return None;
        }

        if bytes.len() > limits.max_metadata_size {
            warn!(
                "Inscription {} metadata of {} bytes exceeds {} byte ceiling",
                self.inscription_id,
                bytes.len(),
                limits.max_metadata_size
            );
            return None;
        }

        match cbor::decode(&bytes) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!("Inscription {} metadata: {}", self.inscription_id, e);
                None
            }
        }
    }

    pub fn summary(&self) -> InscriptionSummary {
        self.summary_with(&ContentLimits::default())
    }

    pub fn summary_with(&self, limits: &ContentLimits) -> InscriptionSummary {
        let content = self.content_bytes_with(limits);

        let text = is_textual(&self.content_type)
            .then(|| String::from_utf8_lossy(&content).into_owned());

        InscriptionSummary {
            inscription_id: self.inscription_id.clone(),
            transaction_id: self.transaction_id.clone(),
            unique_id: self.unique_id.clone(),
            input: self.input,
            offset: self.offset,
            content_type: self.content_type.clone(),
            content_encoding: self.content_encoding(),
            has_body: self.has_body(),
            content_size: content.len(),
            pointer: self.pointer(),
            parents: self.parents(),
            delegates: self.delegates(),
            metaprotocol: self.metaprotocol(),
            metadata: self.metadata_with(limits).as_ref().map(cbor::to_json),
            text,
        }
    }
}

fn is_textual(content_type: &str) -> bool {
    content_type.starts_with("text/")
        || content_type.starts_with("application/json")
        || content_type.starts_with("image/svg+xml")
}

fn unique_id(input: usize, offset: usize, envelope: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((input as u64).to_le_bytes());
    hasher.update((offset as u64).to_le_bytes());
    hasher.update(envelope);
    hex::encode(hasher.finalize())
}
