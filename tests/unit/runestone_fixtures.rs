//! Runestone deciphering against real etchings

use digital_artifacts_parser::runes::{
    Artifact, Cenotaph, Etching, Flaw, Rune, RuneId, Runestone, SpacedRune, Terms,
};
use digital_artifacts_parser::transaction::{Transaction, TxOutput};
use pretty_assertions::assert_eq;

use crate::common::fixture_registry::{inscriptions, runes};
use crate::common::load_transaction;

fn runestone(transaction: &Transaction) -> Runestone {
    match Runestone::decipher(transaction) {
        Some(Artifact::Runestone(runestone)) => runestone,
        other => panic!("expected runestone, got {:?}", other),
    }
}

#[test]
fn test_zzzzz_fehu_etching() {
    let transaction = load_transaction(&runes::ZZZZZ_FEHU);

    assert_eq!(
        runestone(&transaction),
        Runestone {
            edicts: Vec::new(),
            etching: Some(Etching {
                divisibility: Some(2),
                premine: Some(11_000_000_000),
                rune: Some(Rune(67090369340599840949)),
                spacers: Some(7967),
                symbol: Some('ᚠ'),
                terms: Some(Terms {
                    amount: Some(100),
                    cap: Some(1_111_111),
                    height: (None, None),
                    offset: (None, None),
                }),
                turbo: true,
            }),
            mint: None,
            pointer: None,
        }
    );
}

#[test]
fn test_zzzzz_fehu_names() {
    let etching = runestone(&load_transaction(&runes::ZZZZZ_FEHU))
        .etching
        .unwrap();

    assert_eq!(etching.rune.unwrap().to_string(), "ZZZZZFEHUZZZZZ");
    assert_eq!(
        etching.spaced_rune().unwrap().to_string(),
        "Z•Z•Z•Z•Z•FEHU•Z•Z•Z•Z•Z"
    );
    assert_eq!(
        "Z•Z•Z•Z•Z•FEHU•Z•Z•Z•Z•Z".parse::<SpacedRune>().unwrap(),
        etching.spaced_rune().unwrap()
    );
    assert_eq!(etching.supply(), Some(11_000_000_000 + 1_111_111 * 100));
}

#[test]
fn test_etching_with_heights_offsets_and_pointer() {
    let transaction = load_transaction(&runes::MYNUMBERTWO);
    let runestone = runestone(&transaction);

    assert_eq!(runestone.pointer, Some(1));
    assert_eq!(runestone.mint, None);

    let etching = runestone.etching.unwrap();
    assert_eq!(etching.rune, Some(Rune(23453908993498470659118)));
    assert_eq!(etching.spaced_rune().unwrap().to_string(), "MYN•UMBE•RTWOUXIUY");
    assert_eq!(etching.symbol, Some('M'));
    assert_eq!(etching.divisibility, Some(2));
    assert_eq!(etching.premine, Some(100_000));
    assert_eq!(
        etching.terms,
        Some(Terms {
            amount: Some(10_000),
            cap: Some(90),
            height: (Some(2_588_000), Some(2_589_000)),
            offset: (Some(10), Some(90)),
        })
    );
    assert!(etching.turbo);
}

#[test]
fn test_reenciphered_etching_deciphers_identically() {
    let original = runestone(&load_transaction(&runes::MYNUMBERTWO));

    let script = original.encipher();
    assert_eq!(&script[..2], &[0x6a, 0x5d]);

    let transaction = Transaction {
        txid: "00".repeat(32),
        vin: Vec::new(),
        vout: vec![
            TxOutput::default(),
            TxOutput {
                scriptpubkey: hex::encode(&script),
                scriptpubkey_type: "op_return".to_string(),
            },
            TxOutput::default(),
        ],
    };

    assert_eq!(runestone(&transaction), original);
}

#[test]
fn test_unrecognized_even_tag_keeps_mint() {
    let transaction = load_transaction(&inscriptions::HELLO_WORLD_BATCH);

    let artifact = Runestone::decipher(&transaction).unwrap();
    assert!(artifact.is_cenotaph());
    assert_eq!(artifact.mint(), RuneId::new(840_000, 3));
    assert_eq!(
        artifact,
        Artifact::Cenotaph(Cenotaph {
            etching: None,
            flaws: vec![Flaw::UnrecognizedEvenTag],
            mint: RuneId::new(840_000, 3),
        })
    );
}
