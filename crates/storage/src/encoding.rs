//! Text encoding for report files
//!
//! Report files are JSON text. The bytes on disk follow a configurable
//! encoding so hosts with a non-UTF-8 filesystem convention can still share
//! files with other tooling.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Failure converting between text and bytes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    /// Character has no representation in the target encoding
    #[error("character {ch:?} at byte {offset} cannot be encoded as {encoding}")]
    Unencodable {
        /// Offending character
        ch: char,
        /// Byte offset of the character in the source text
        offset: usize,
        /// Target encoding
        encoding: TextEncoding,
    },

    /// Bytes are not valid in the source encoding
    #[error("invalid {encoding} data at byte {offset}")]
    InvalidData {
        /// Byte offset of the first invalid sequence
        offset: usize,
        /// Source encoding
        encoding: TextEncoding,
    },
}

/// Encoding used for report file contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextEncoding {
    /// UTF-8, the filesystem text encoding on every platform Rust targets
    #[default]
    #[serde(alias = "utf-8")]
    Utf8,
    /// ISO-8859-1, one byte per code point up to U+00FF
    #[serde(alias = "latin-1")]
    Latin1,
}

impl TextEncoding {
    /// Canonical name (`utf-8`, `latin-1`)
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin-1",
        }
    }

    /// Whether `ch` has a representation in this encoding
    pub fn can_encode(&self, ch: char) -> bool {
        match self {
            TextEncoding::Utf8 => true,
            TextEncoding::Latin1 => u32::from(ch) <= 0xFF,
        }
    }

    /// Encode text to bytes
    pub fn encode(&self, text: &str) -> Result<Vec<u8>, EncodingError> {
        match self {
            TextEncoding::Utf8 => Ok(text.as_bytes().to_vec()),
            TextEncoding::Latin1 => {
                let mut out = Vec::with_capacity(text.len());
                for (offset, ch) in text.char_indices() {
                    let byte = u8::try_from(u32::from(ch)).map_err(|_| {
                        EncodingError::Unencodable {
                            ch,
                            offset,
                            encoding: *self,
                        }
                    })?;
                    out.push(byte);
                }
                Ok(out)
            }
        }
    }

    /// Decode bytes to text
    pub fn decode(&self, bytes: &[u8]) -> Result<String, EncodingError> {
        match self {
            TextEncoding::Utf8 => std::str::from_utf8(bytes)
                .map(str::to_owned)
                .map_err(|e| EncodingError::InvalidData {
                    offset: e.valid_up_to(),
                    encoding: *self,
                }),
            TextEncoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
        }
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = String;

    /// Accepts `utf-8`/`utf8` and `latin-1`/`latin1`/`iso-8859-1`,
    /// case-insensitive, with `_` treated as `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "utf-8" | "utf8" => Ok(TextEncoding::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Ok(TextEncoding::Latin1),
            _ => Err(format!(
                "unknown text encoding '{}', expected \"utf-8\" or \"latin-1\"",
                s
            )),
        }
    }
}
