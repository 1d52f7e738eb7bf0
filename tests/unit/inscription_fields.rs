//! Envelope field accessors against the hello-world batch fixture

use digital_artifacts_parser::codec::cbor::Value;
use digital_artifacts_parser::inscription::{parse_inscriptions, ParsedInscription};
use pretty_assertions::assert_eq;

use crate::common::fixture_registry::inscriptions::HELLO_WORLD_BATCH;
use crate::common::load_transaction;

fn batch() -> Vec<ParsedInscription> {
    parse_inscriptions(&load_transaction(&HELLO_WORLD_BATCH))
}

#[test]
fn test_batch_ids_positions_and_unique_ids() {
    let inscriptions = batch();

    let positions: Vec<_> = inscriptions
        .iter()
        .map(|i| (i.inscription_id.as_str(), i.input, i.offset, i.unique_id.as_str()))
        .collect();

    assert_eq!(
        positions,
        vec![
            (
                "42cbeafe4a29c4e0eb9099669e649f48ec0191847293f5f27d8b8bc7c4c6c9ebi0",
                0,
                98,
                "1de8b2801d7b9ee1e5815f221ffae3b80f76a74e9d211a0048eb39b6ecf77f95",
            ),
            (
                "42cbeafe4a29c4e0eb9099669e649f48ec0191847293f5f27d8b8bc7c4c6c9ebi1",
                0,
                147,
                "a6e741dc2b793bd41423402900736daac2c574c856f4a5c678be2a8d6b158d33",
            ),
            (
                "42cbeafe4a29c4e0eb9099669e649f48ec0191847293f5f27d8b8bc7c4c6c9ebi2",
                1,
                98,
                "ac2ad72036df55bfd0ae9a74865050676084edea303db62a137ab2471412168e",
            ),
        ]
    );

    for inscription in &inscriptions {
        assert_eq!(inscription.transaction_id, HELLO_WORLD_BATCH.txid);
    }
}

#[test]
fn test_plain_text_inscription() {
    let inscriptions = batch();
    let hello = &inscriptions[0];

    assert_eq!(hello.content_type, "text/plain;charset=utf-8");
    assert_eq!(hello.content(), "Hello, world!");
    assert_eq!(hello.content_size(), 13);
    assert_eq!(hello.data(), "SGVsbG8sIHdvcmxkIQ==");
    assert_eq!(
        hello.data_uri(),
        "data:text/plain;charset=utf-8;base64,SGVsbG8sIHdvcmxkIQ=="
    );
    assert_eq!(hello.pointer(), None);
    assert_eq!(hello.metadata(), None);
    assert_eq!(hello.content_encoding(), None);
}

#[test]
fn test_pointer_metaprotocol_and_chunked_metadata() {
    let inscriptions = batch();
    let mint = &inscriptions[1];

    assert_eq!(mint.content_type, "application/json");
    assert_eq!(mint.pointer(), Some(1));
    assert_eq!(mint.metaprotocol().as_deref(), Some("brc-20"));
    assert_eq!(
        mint.content(),
        r#"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1000"}"#
    );

    assert_eq!(
        mint.metadata(),
        Some(Value::Map(vec![
            (Value::Text("name".into()), Value::Text("Hello World".into())),
            (Value::Text("series".into()), Value::Integer(42.into())),
        ]))
    );
}

#[test]
fn test_parent_and_delegate_without_body() {
    let inscriptions = batch();
    let child = &inscriptions[2];

    assert!(!child.has_body());
    assert_eq!(child.raw_body(), None);
    assert_eq!(child.content_type, "undefined");
    assert_eq!(child.content(), "");
    assert_eq!(
        child.parents(),
        vec!["1111111111111111111111111111111111111111111111111111111111111111i2".to_string()]
    );
    assert_eq!(
        child.delegates(),
        vec!["2222222222222222222222222222222222222222222222222222222222222222i0".to_string()]
    );
}

#[test]
fn test_summary_serialisation() {
    let inscriptions = batch();

    let summary = serde_json::to_value(inscriptions[1].summary()).unwrap();
    assert_eq!(summary["metadata"], serde_json::json!({ "name": "Hello World", "series": 42 }));
    assert_eq!(summary["pointer"], 1);
    assert_eq!(summary["metaprotocol"], "brc-20");
    assert_eq!(summary["text"], r#"{"p":"brc-20","op":"mint","tick":"ordi","amt":"1000"}"#);

    let summary = serde_json::to_value(inscriptions[2].summary()).unwrap();
    assert_eq!(summary["has_body"], false);
    assert!(summary.get("text").is_none());
    assert!(summary.get("pointer").is_none());
}
