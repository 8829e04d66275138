//! Error types for polycrc-core.
//!
//! Table generation and register updates are total functions and never fail.
//! Errors only arise at the edges: reading streams, catalog lookups and
//! byte conversion.

/// Result type alias for polycrc-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while computing or converting checksums.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading from the input stream failed.
    ///
    /// The register is left at whatever the bytes before the failure
    /// produced; callers should discard the computation.
    #[error("stream read failed: {0}")]
    Io(#[from] std::io::Error),

    /// The computation was cancelled between two chunk reads.
    #[error("checksum computation cancelled")]
    Cancelled,

    /// No catalog entry matches the requested name.
    #[error("unknown CRC algorithm: {name}")]
    UnknownAlgorithm {
        /// The name that was looked up.
        name: String,
    },

    /// A byte slice does not have the width of the target register.
    #[error("invalid length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Register width in bytes.
        expected: usize,
        /// Length of the slice provided.
        actual: usize,
    },

    /// Stream chunks must hold at least one byte.
    #[error("chunk size must be non-zero")]
    InvalidChunkSize,
}

impl Error {
    /// Whether this error signals cancellation rather than a failure.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = Error::UnknownAlgorithm {
            name: "CRC-7/NOPE".to_string(),
        };
        assert_eq!(err.to_string(), "unknown CRC algorithm: CRC-7/NOPE");

        let err = Error::InvalidLength {
            expected: 4,
            actual: 3,
        };
        assert_eq!(err.to_string(), "invalid length: expected 4 bytes, got 3");

        assert_eq!(
            Error::Cancelled.to_string(),
            "checksum computation cancelled"
        );
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "short read");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("short read"));
        assert!(!err.is_cancelled());
    }

    #[test]
    fn error_implements_std_error() {
        let err = Error::Cancelled;
        let _: &dyn std::error::Error = &err;
        assert!(err.is_cancelled());
    }
}
