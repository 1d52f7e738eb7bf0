//! Full transaction decoding from JSON and raw consensus bytes

use digital_artifacts_parser::inscription::ContentLimits;
use digital_artifacts_parser::parser::{parse_transaction, parse_transaction_json};
use digital_artifacts_parser::runes::Artifact;
use pretty_assertions::assert_eq;

use crate::common::fixture_registry::{inscriptions, runes, ArtifactFixture};
use crate::common::{load_fixture, load_raw_transaction, load_transaction};

const REAL_FIXTURES: [ArtifactFixture; 2] = [runes::ZZZZZ_FEHU, runes::MYNUMBERTWO];

#[test]
fn test_raw_and_json_forms_agree() {
    for fixture in REAL_FIXTURES {
        let json = load_transaction(&fixture);
        let raw = load_raw_transaction(&fixture).unwrap();

        assert_eq!(raw.txid, fixture.txid, "{}", fixture.description);
        assert_eq!(raw, json, "{}", fixture.description);
        assert_eq!(parse_transaction(&raw), parse_transaction(&json));
    }
}

#[test]
fn test_commit_envelope_alongside_etching() {
    let artifacts = parse_transaction(&load_transaction(&runes::ZZZZZ_FEHU));

    assert!(matches!(artifacts.runestone, Some(Artifact::Runestone(_))));
    assert_eq!(artifacts.inscriptions.len(), 1);

    let inscription = &artifacts.inscriptions[0];
    assert_eq!(
        inscription.inscription_id,
        format!("{}i0", runes::ZZZZZ_FEHU.txid)
    );
    assert_eq!(inscription.content_type, "undefined");
    assert!(!inscription.has_body());
    assert_eq!(inscription.offset, 98);
    assert_eq!(
        inscription.unique_id,
        "6d826df045af25bd9b41f5e6271f044a9d4ec5638350c4985d9a6988b5e50160"
    );
    assert_eq!(
        inscription.delegates(),
        vec!["e16b8b872584112c6e84c5a941e8ad91f9e428458605a0e9f582305dd12ef247i0".to_string()]
    );
    // tag 13 is carried through even though nothing interprets it
    assert!(inscription.fields.iter().any(|field| field.tag == 13));
}

#[test]
fn test_empty_body_envelope() {
    let artifacts = parse_transaction(&load_transaction(&runes::MYNUMBERTWO));
    let inscription = &artifacts.inscriptions[0];

    assert_eq!(inscription.content_type, "image/webp");
    assert!(inscription.has_body());
    assert_eq!(inscription.content_size(), 0);
    assert_eq!(inscription.data_uri(), "data:image/webp;base64,");
    assert_eq!(
        inscription.unique_id,
        "bbc76e07697e32ada93fa1fbaeb7527aac2f24452abcb0ba3668e2dd92a3c25e"
    );
}

#[test]
fn test_report_for_batch() -> anyhow::Result<()> {
    let json = load_fixture(inscriptions::HELLO_WORLD_BATCH.path);
    let report = parse_transaction_json(&json).report(&ContentLimits::default());
    let report = serde_json::to_value(report)?;

    assert_eq!(report["txid"], inscriptions::HELLO_WORLD_BATCH.txid);
    assert_eq!(report["inscriptions"].as_array().unwrap().len(), 3);
    assert_eq!(report["inscriptions"][0]["text"], "Hello, world!");
    assert_eq!(
        report["runestone"],
        serde_json::json!({
            "cenotaph": {
                "etching": null,
                "flaws": ["unrecognized_even_tag"],
                "mint": "840000:3"
            }
        })
    );

    Ok(())
}

#[test]
fn test_report_for_etching() -> anyhow::Result<()> {
    let report = parse_transaction(&load_transaction(&runes::MYNUMBERTWO))
        .report(&ContentLimits::default());
    let report = serde_json::to_value(report)?;

    let etching = &report["runestone"]["runestone"]["etching"];
    assert_eq!(etching["rune"], "MYNUMBERTWOUXIUY");
    assert_eq!(etching["symbol"], "M");
    assert_eq!(etching["terms"]["height"], serde_json::json!([2588000, 2589000]));
    assert_eq!(report["runestone"]["runestone"]["pointer"], 1);

    Ok(())
}
