//! Reporter configuration
//!
//! Resolves where the file backend keeps reports and how it encodes them.
//! The configuration is a plain value threaded into constructors; only
//! [`ReporterConfig::from_env`] looks at the process environment.

use reporter_core::{ReporterError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::encoding::TextEncoding;

/// Environment variable naming the default report directory.
pub const REPORTER_DIR_ENV: &str = "REPORTER_DIR";

/// Environment variable naming the report file encoding.
pub const REPORTER_ENCODING_ENV: &str = "REPORTER_ENCODING";

/// Directory used when nothing else is configured.
pub const DEFAULT_REPORTER_DIR: &str = ".";

/// Configuration for the file backend
///
/// # Example
///
/// ```
/// use reporter_storage::{ReporterConfig, TextEncoding};
///
/// let config = ReporterConfig::default()
///     .with_reporter_dir("/tmp/reports")
///     .with_encoding(TextEncoding::Latin1);
/// assert_eq!(config.reporter_dir.to_str(), Some("/tmp/reports"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReporterConfig {
    /// Directory holding report files; created on backend construction.
    #[serde(default = "default_reporter_dir")]
    pub reporter_dir: PathBuf,
    /// Encoding of report file contents.
    #[serde(default)]
    pub encoding: TextEncoding,
}

fn default_reporter_dir() -> PathBuf {
    PathBuf::from(DEFAULT_REPORTER_DIR)
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            reporter_dir: default_reporter_dir(),
            encoding: TextEncoding::default(),
        }
    }
}

impl ReporterConfig {
    /// Read `REPORTER_DIR` and `REPORTER_ENCODING` from the environment.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `REPORTER_ENCODING` names an unknown
    /// encoding or is not valid Unicode.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var_os(REPORTER_DIR_ENV),
            std::env::var_os(REPORTER_ENCODING_ENV),
        )
    }

    /// Build a config from raw optional settings.
    ///
    /// Missing values fall back to the defaults: the current directory and
    /// UTF-8. An empty directory value counts as missing.
    pub fn resolve(dir: Option<OsString>, encoding: Option<OsString>) -> Result<Self> {
        let reporter_dir = match dir {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => default_reporter_dir(),
        };

        let encoding = match encoding {
            None => TextEncoding::default(),
            Some(raw) => {
                let raw = raw.into_string().map_err(|raw| {
                    ReporterError::invalid_config(format!(
                        "{} is not valid unicode: {:?}",
                        REPORTER_ENCODING_ENV, raw
                    ))
                })?;
                raw.parse::<TextEncoding>()
                    .map_err(|e| ReporterError::invalid_config(format!("{}: {}", REPORTER_ENCODING_ENV, e)))?
            }
        };

        Ok(Self {
            reporter_dir,
            encoding,
        })
    }

    /// Set the report directory
    pub fn with_reporter_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.reporter_dir = dir.into();
        self
    }

    /// Set the file encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }
}
