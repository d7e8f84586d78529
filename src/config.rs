//! Purpose: Typed view of the LanguageTool client settings.
//! Exports: `RootConfig`.
//! Role: Decode the settings record from the embedded payload or a file on disk.
//! Invariants: Missing keys fall back to `RootConfig::default()`; unknown keys are ignored.
//! Invariants: `lt_api_port` stays textual; no coercion or validation is applied.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{Error, ErrorKind};
use crate::decode::{EMBEDDED_PAYLOAD, decode_as, decode_slice_as};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct RootConfig {
    pub lt_enabled: bool,
    pub lt_api_hostname: String,
    pub lt_api_port: String,
}

impl Default for RootConfig {
    fn default() -> Self {
        Self {
            lt_enabled: true,
            lt_api_hostname: "http://127.0.0.1".to_string(),
            lt_api_port: "8081".to_string(),
        }
    }
}

impl RootConfig {
    pub fn embedded() -> Result<Self, Error> {
        Self::from_json(EMBEDDED_PAYLOAD)
    }

    pub fn from_json(text: &str) -> Result<Self, Error> {
        decode_as(text, "config")
    }

    pub fn init_from_file(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path).map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read config file")
                .with_path(path)
                .with_source(err)
        })?;
        decode_slice_as(&bytes, "config").map_err(|err| err.with_path(path))
    }
}
