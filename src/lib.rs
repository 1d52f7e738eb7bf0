//! Bitcoin Digital Artifact Parser
//!
//! Extracts Ordinals inscriptions and Runes runestones from transactions.

pub mod cli;
pub mod codec;
pub mod config;
pub mod errors;
pub mod inscription;
pub mod integers;
pub mod parser;
pub mod runes;
pub mod script;
pub mod transaction;
pub mod varint;
