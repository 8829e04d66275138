//! Configuration for stream checksumming and the `polycrc` tool.
//!
//! All configuration is loaded from environment variables. Unset or
//! unparsable values fall back to defaults.

use polycrc_core::STREAM_CHUNK_SIZE;

/// Algorithm used when `POLYCRC_ALGORITHM` is unset.
pub const DEFAULT_ALGORITHM: &str = "CRC-32/ISO-HDLC";

/// How results are printed by the command-line tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `<checksum>  <bytes>  <input>` per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Runtime configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Catalog name or alias of the CRC variant
    pub algorithm: String,

    /// Bytes read per chunk (default: 4096)
    pub chunk_size: usize,

    /// Print checksum bytes most-significant first (default: little-endian)
    pub big_endian: bool,

    /// Output format (default: text)
    pub output: OutputFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            algorithm: std::env::var("POLYCRC_ALGORITHM")
                .ok()
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| DEFAULT_ALGORITHM.to_string()),
            chunk_size: std::env::var("POLYCRC_CHUNK_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|&n: &usize| n > 0)
                .unwrap_or(STREAM_CHUNK_SIZE),
            big_endian: std::env::var("POLYCRC_BIG_ENDIAN")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
            output: std::env::var("POLYCRC_OUTPUT")
                .map(|v| match v.to_ascii_lowercase().as_str() {
                    "json" => OutputFormat::Json,
                    _ => OutputFormat::Text,
                })
                .unwrap_or_default(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
