//! Purpose: Decode JSON text into a `serde_json::Value` with structured failures.
//! Exports: `EMBEDDED_PAYLOAD`, `decode`, `decode_bytes`.
//! Role: The parse step between the fixed literal and the reporter.
//! Invariants: The decoded value mirrors the text's shape; key order is preserved.
//! Invariants: Failures carry kind `Decode`, the decoder message and a 1-based position.
//! Invariants: Invalid UTF-8 in raw bytes is a decode failure, not an I/O failure.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::core::error::{DecodeError, Error, ErrorKind};
use crate::json::parse;

/// LanguageTool client settings baked into the binary.
pub const EMBEDDED_PAYLOAD: &str = concat!(
    "\n",
    "{\n",
    "    \"lt_enabled\": true, \n",
    "    \"lt_api_hostname\": \"http://127.0.0.1\", \n",
    "    \"lt_api_port\": \"8081\" \n",
    "}\n",
);

pub fn decode(text: &str) -> Result<Value, DecodeError> {
    decode_as(text, "decode")
}

/// Decodes raw file contents; UTF-8 validation is left to the decoder.
pub fn decode_bytes(bytes: &[u8]) -> Result<Value, DecodeError> {
    decode_slice_as(bytes, "decode")
}

pub(crate) fn decode_as<T: DeserializeOwned>(text: &str, context: &str) -> Result<T, DecodeError> {
    tracing::debug!(context, len = text.len(), "decoding json");
    parse::from_str(text).map_err(|err| decode_error(err, context))
}

pub(crate) fn decode_slice_as<T: DeserializeOwned>(
    bytes: &[u8],
    context: &str,
) -> Result<T, DecodeError> {
    tracing::debug!(context, len = bytes.len(), "decoding json bytes");
    parse::from_slice(bytes).map_err(|err| decode_error(err, context))
}

fn decode_error(err: serde_json::Error, context: &str) -> Error {
    let category = parse::categorize_error(&err);
    tracing::debug!(context, category = category.label(), "json decode failed");
    Error::new(ErrorKind::Decode)
        .with_message(err.to_string())
        .with_hint(parse::hint_for_error(&err, context))
        .with_position(err.line(), err.column())
        .with_source(err)
}
