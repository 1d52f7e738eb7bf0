//! Byte-transform collaborators used by inscription accessors
//!
//! Both are pure functions over an input buffer with a caller-imposed size
//! ceiling; neither keeps state between calls.

pub mod brotli;
pub mod cbor;
