//! Fixture Registry
//!
//! Every transaction fixture under `tests/test_data/` with the values the
//! suites assert against.

/// Metadata for a transaction fixture
#[derive(Debug, Clone)]
pub struct ArtifactFixture {
    /// Esplora-style JSON (relative to project root)
    pub path: &'static str,
    /// Consensus-encoded hex, when the transaction is a real one
    pub raw_path: Option<&'static str>,
    pub txid: &'static str,
    pub description: &'static str,
}

/// Mainnet rune etchings
pub mod runes {
    use super::*;

    pub const ZZZZZ_FEHU: ArtifactFixture = ArtifactFixture {
        path: "tests/test_data/runes/zzzzz_fehu_etching_tx.json",
        raw_path: Some("tests/test_data/runes/zzzzz_fehu_etching_tx.hex"),
        txid: "2bb85f4b004be6da54f766c17c1e855187327112c231ef2ff35ebad0ea67c69e",
        description: "Etching of Z•Z•Z•Z•Z•FEHU•Z•Z•Z•Z•Z with a delegate-only commit envelope",
    };

    pub const MYNUMBERTWO: ArtifactFixture = ArtifactFixture {
        path: "tests/test_data/runes/mynumbertwo_etching_tx.json",
        raw_path: Some("tests/test_data/runes/mynumbertwo_etching_tx.hex"),
        txid: "8c7c94ae98f9e8e15dfa932689f1230f2afe75285729bc2536af3adb7c083764",
        description: "Etching with full mint terms, a pointer and an empty image/webp envelope",
    };
}

/// Synthetic inscription transactions
pub mod inscriptions {
    use super::*;

    pub const HELLO_WORLD_BATCH: ArtifactFixture = ArtifactFixture {
        path: "tests/test_data/inscriptions/hello_world_batch_tx.json",
        raw_path: None,
        txid: "42cbeafe4a29c4e0eb9099669e649f48ec0191847293f5f27d8b8bc7c4c6c9eb",
        description: "Three envelopes over two inputs plus a cenotaph mint",
    };
}
