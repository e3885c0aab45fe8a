//! Encoders for output formats backed by external libraries.

pub mod cbor;
pub mod toml;
pub mod yaml;
