//! Per-input results printed by the `polycrc` tool.

use crate::config::OutputFormat;
use polycrc_core::AnyCrc;
use serde::Serialize;

/// Checksum of one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecksumReport {
    /// Canonical catalog name of the algorithm.
    pub algorithm: &'static str,
    /// Input label (path, or `-` for stdin).
    pub input: String,
    /// Checksum as a number, zero-padded hex of the algorithm width.
    pub checksum: String,
    /// Checksum bytes in the configured byte order, hex encoded.
    pub bytes: String,
}

impl ChecksumReport {
    /// Build a report for `value` computed with `crc`.
    pub fn new(
        algorithm: &'static str,
        crc: &AnyCrc,
        input: impl Into<String>,
        value: u64,
        big_endian: bool,
    ) -> Self {
        let digits = (crc.width() / 4) as usize;
        Self {
            algorithm,
            input: input.into(),
            checksum: format!("{value:0digits$x}"),
            bytes: hex::encode(crc.to_bytes(value, big_endian)),
        }
    }

    /// Render as a single output line.
    pub fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Text => format!("{}  {}  {}", self.checksum, self.bytes, self.input),
            OutputFormat::Json => serde_json::to_string(self)
                .unwrap_or_else(|e| format!("{{\"error\":\"{e}\"}}")),
        }
    }
}
