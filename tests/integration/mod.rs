//! Integration Tests Module
//!
//! End-to-end decoding of fixture transactions through the library entry
//! points and the CLI commands.

pub mod cli_smoke_test;
pub mod decode_pipeline;
