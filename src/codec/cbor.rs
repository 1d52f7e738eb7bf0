//! CBOR metadata codec
//!
//! Thin wrapper over `ciborium` covering all major types 0-7, indefinite-length
//! items, half/single/double floats and tags. Tags and simple values are kept
//! in the decoded [`Value`] so callers can interpret them.

pub use ciborium::Value;

/// CBOR codec errors
#[derive(Debug, thiserror::Error)]
pub enum CborError {
    #[error("CBOR decode error: {0}")]
    Decode(String),

    #[error("CBOR encode error: {0}")]
    Encode(String),
}

/// Decode the first CBOR item in `bytes`
pub fn decode(bytes: &[u8]) -> Result<Value, CborError> {
    ciborium::de::from_reader(bytes).map_err(|e| CborError::Decode(format!("{:?}", e)))
}

/// Encode `value` as CBOR
pub fn encode(value: &Value) -> Result<Vec<u8>, CborError> {
    let mut bytes = Vec::new();
    ciborium::ser::into_writer(value, &mut bytes)
        .map_err(|e| CborError::Encode(format!("{:?}", e)))?;
    Ok(bytes)
}

/// Convert a decoded value into JSON for display
///
/// Byte strings become hex, tags are unwrapped, non-finite floats become
/// `null` and integers outside the i64/u64 range become decimal strings.
pub fn to_json(value: &Value) -> serde_json::Value {
    use serde_json::Value as Json;

    match value {
        Value::Integer(integer) => {
            let n = i128::from(*integer);
            if let Ok(n) = u64::try_from(n) {
                Json::from(n)
            } else if let Ok(n) = i64::try_from(n) {
                Json::from(n)
            } else {
                Json::String(n.to_string())
            }
        }
        Value::Bytes(bytes) => Json::String(hex::encode(bytes)),
        Value::Float(f) => serde_json::Number::from_f64(*f)
            .map(Json::Number)
            .unwrap_or(Json::Null),
        Value::Text(text) => Json::String(text.clone()),
        Value::Bool(b) => Json::Bool(*b),
        Value::Null => Json::Null,
        Value::Tag(_, inner) => to_json(inner),
        Value::Array(items) => Json::Array(items.iter().map(to_json).collect()),
        Value::Map(entries) => Json::Object(
            entries
                .iter()
                .map(|(key, value)| {
                    let key = match key {
                        Value::Text(text) => text.clone(),
                        other => to_json(other).to_string(),
                    };
                    (key, to_json(value))
                })
                .collect(),
        ),
        _ => Json::Null,
    }
}
