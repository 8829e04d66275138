//! # polycrc stream
//!
//! Asynchronous stream overloads for polycrc checksums, plus the pieces of
//! the `polycrc` command-line tool.
//!
//! ## Design Principles
//!
//! - **Same result as sync**: async and sync stream overloads agree with the
//!   one-shot checksum for the same bytes
//! - **Coarse cancellation**: a [`CancellationToken`] is observed between
//!   chunk reads, never in the middle of folding a chunk
//! - **No payload logging**: only sizes and chunk counts are traced
//!
//! ## Example
//!
//! ```no_run
//! use polycrc_core::{catalog, CrcAlgorithm};
//! use polycrc_stream::{compute_checksum_async, CancellationToken};
//!
//! # async fn run() -> polycrc_core::Result<()> {
//! let crc = CrcAlgorithm::new(catalog::CRC_32_ISCSI);
//! let file = tokio::fs::File::open("data.bin").await?;
//! let value = compute_checksum_async(&crc, file, &CancellationToken::new()).await?;
//! println!("{value:08x}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod reader;
pub mod report;

pub use config::{Config, OutputFormat};
pub use reader::{compute_checksum_async, compute_checksum_async_chunked};
pub use report::ChecksumReport;
pub use tokio_util::sync::CancellationToken;
