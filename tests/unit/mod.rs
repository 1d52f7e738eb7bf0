//! Unit Tests Module
//!
//! Fixture-driven checks of the inscription and runes decoders.

pub mod inscription_fields;
pub mod inscription_content;
pub mod runestone_fixtures;
