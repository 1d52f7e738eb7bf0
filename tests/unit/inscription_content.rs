//! Content decoding and size ceilings

use digital_artifacts_parser::codec::brotli::SIZE_LIMIT_EXCEEDED;
use digital_artifacts_parser::inscription::{parse_witness, ContentLimits};
use std::io::Write;

fn push(data: &[u8]) -> Vec<u8> {
    let mut script = Vec::new();
    digital_artifacts_parser::script::write_push_data(&mut script, data);
    script
}

/// Envelope with the given fields and a body split into 520-byte pushes
fn envelope(fields: &[(u8, &[u8])], body: &[u8]) -> Vec<u8> {
    let mut script = digital_artifacts_parser::inscription::INSCRIPTION_MARK.to_vec();
    for (tag, value) in fields {
        script.extend(push(&[*tag]));
        script.extend(push(value));
    }
    script.push(0x00);
    for chunk in body.chunks(520) {
        script.extend(push(chunk));
    }
    script.push(0x68);
    script
}

fn compress(data: &[u8]) -> Vec<u8> {
    let mut writer = brotli::CompressorWriter::new(Vec::new(), 4096, 11, 22);
    writer.write_all(data).unwrap();
    writer.into_inner()
}

#[test]
fn test_brotli_html_is_decompressed() {
    let html = "<html><body>".to_string() + &"<p>ordinals</p>".repeat(200) + "</body></html>";
    let witness = envelope(
        &[(1, &b"text/html;charset=utf-8"[..]), (9, &b"br"[..])],
        &compress(html.as_bytes()),
    );

    let inscriptions = parse_witness(&witness, 0);
    assert_eq!(inscriptions.len(), 1);

    let inscription = &inscriptions[0];
    assert_eq!(inscription.content_encoding().as_deref(), Some("br"));
    assert!(inscription.raw_body().unwrap().len() < html.len());
    assert_eq!(inscription.content(), html);
    assert_eq!(inscription.content_size(), html.len());
}

#[test]
fn test_brotli_bomb_returns_sentinel() {
    let witness = envelope(
        &[(1, &b"text/plain"[..]), (9, &b"br"[..])],
        &compress(&vec![b'a'; 1 << 20]),
    );
    let inscription = &parse_witness(&witness, 0)[0];

    let limits = ContentLimits {
        max_decompressed_size: 4096,
        ..ContentLimits::default()
    };

    assert_eq!(inscription.content_bytes_with(&limits), SIZE_LIMIT_EXCEEDED.to_vec());
    assert_eq!(inscription.content_bytes().len(), 1 << 20);
}

#[test]
fn test_unknown_encoding_returns_raw_body() {
    let witness = envelope(&[(1, &b"text/plain"[..]), (9, &b"gzip"[..])], b"not gzip at all");
    assert_eq!(parse_witness(&witness, 0)[0].content(), "not gzip at all");
}

#[test]
fn test_large_body_spans_many_pushes() {
    let body: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
    let witness = envelope(&[(1, &b"application/octet-stream"[..])], &body);

    let inscription = &parse_witness(&witness, 3)[0];
    assert_eq!(inscription.input, 3);
    assert_eq!(inscription.raw_body(), Some(body.as_slice()));
}

#[test]
fn test_metadata_over_ceiling_is_ignored() {
    // {"k": "vvvv..."} split over two tag 5 pushes
    let mut metadata = vec![0xa1, 0x61, b'k', 0x78, 100];
    metadata.extend(vec![b'v'; 100]);
    let witness = envelope(
        &[(1, &b"text/plain"[..]), (5, &metadata[..50]), (5, &metadata[50..])],
        b"x",
    );
    let inscription = &parse_witness(&witness, 0)[0];

    assert!(inscription.metadata().is_some());

    let limits = ContentLimits {
        max_metadata_size: 64,
        ..ContentLimits::default()
    };
    assert_eq!(inscription.metadata_with(&limits), None);
}
