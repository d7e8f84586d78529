//! Purpose: Library crate behind the `ltjson` CLI and its tests.
//! Exports: `core` (errors), `decode`, `config`, `report`.
//! Role: Decode the embedded LanguageTool client settings and render the outcome.
//! Invariants: Decoding is pure; only `report` and `report_error` write output.
//! Invariants: Decode failures are values (`DecodeError`), never panics.
pub mod config;
pub mod core;
pub mod decode;
mod json;
pub mod report;

pub use crate::core::error::{DecodeError, Error, ErrorKind, to_exit_code};
pub use crate::decode::{EMBEDDED_PAYLOAD, decode, decode_bytes};
