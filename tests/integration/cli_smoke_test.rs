//! CLI Smoke Test
//!
//! Drives each command's `execute` with fixture input and checks the rendered
//! output, the same text `run` prints.

use digital_artifacts_parser::cli::commands::decode::{DecodeCommand, DecodeRawCommand};
use digital_artifacts_parser::cli::commands::script::ScriptCommand;
use digital_artifacts_parser::config::AppConfig;
use serial_test::serial;
use std::io::Write;

use crate::common::fixture_registry::{inscriptions, runes};
use crate::common::{fixture_path, load_fixture};

#[test]
fn test_decode_fixture_file() -> anyhow::Result<()> {
    let command = DecodeCommand {
        input: fixture_path(inscriptions::HELLO_WORLD_BATCH.path),
        pretty: true,
    };

    let output = command.execute(&AppConfig::default())?;
    assert!(output.contains('\n'));

    let report: serde_json::Value = serde_json::from_str(&output)?;
    assert_eq!(report["txid"], inscriptions::HELLO_WORLD_BATCH.txid);
    assert_eq!(report["inscriptions"][1]["metaprotocol"], "brc-20");

    Ok(())
}

#[test]
fn test_decode_raw_hex() {
    let command = DecodeRawCommand {
        hex: load_fixture(runes::ZZZZZ_FEHU.raw_path.unwrap()),
        pretty: false,
    };

    let output = command.execute(&AppConfig::default()).unwrap();
    assert!(!output.contains('\n'));

    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(report["txid"], runes::ZZZZZ_FEHU.txid);
    assert_eq!(
        report["runestone"]["runestone"]["etching"]["rune"],
        "ZZZZZFEHUZZZZZ"
    );
}

#[test]
fn test_decode_errors_are_reported() {
    let missing = DecodeCommand {
        input: "/nonexistent/tx.json".into(),
        pretty: false,
    };
    assert!(missing.execute(&AppConfig::default()).is_err());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    let malformed = DecodeCommand {
        input: file.path().to_path_buf(),
        pretty: false,
    };
    assert!(malformed.execute(&AppConfig::default()).is_err());

    let raw = DecodeRawCommand {
        hex: "0200".to_string(),
        pretty: false,
    };
    assert!(raw.execute(&AppConfig::default()).is_err());
}

#[test]
#[serial]
fn test_config_file_limits_reach_the_report() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(file, "[limits]\nmax_metadata_size = 16").unwrap();
    let config = AppConfig::load_from(file.path()).unwrap();

    let command = DecodeCommand {
        input: fixture_path(inscriptions::HELLO_WORLD_BATCH.path),
        pretty: false,
    };
    let report: serde_json::Value =
        serde_json::from_str(&command.execute(&config).unwrap()).unwrap();

    // the 27-byte metadata no longer fits
    assert!(report["inscriptions"][1].get("metadata").is_none());

    let report: serde_json::Value =
        serde_json::from_str(&command.execute(&AppConfig::default()).unwrap()).unwrap();
    assert_eq!(report["inscriptions"][1]["metadata"]["series"], 42);
}

#[test]
fn test_script_command_lists_runestone_instructions() {
    let command = ScriptCommand {
        hex: "6a5d0814c0a23314031801".to_string(),
    };

    assert_eq!(
        command.execute().unwrap(),
        "OP_RETURN\nOP_PUSHNUM_13\nOP_PUSHBYTES_8 14c0a23314031801\n"
    );
}
