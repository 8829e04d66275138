//! polycrc core - declarative, table-driven CRC computation.
//!
//! A CRC variant is described by five values (polynomial, initial value,
//! input reflection, output reflection, output XOR) and a register type
//! whose width is the checksum width. This crate turns such a description
//! into an efficient, incremental checksum:
//!
//! - [`Table`]: the 256-entry lookup table for a polynomial and bit order
//! - [`TableCache`]: process-wide, weakly-held deduplication of tables
//! - [`CrcEngine`]: the register update and finalization rules
//! - [`CrcIterator`]: restartable streaming state
//! - [`CrcAlgorithm`]: one-shot, stream and hash-adapter façade
//! - [`catalog`]: named parameter sets from the CRC RevEng catalogue
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Correct errors, only detect them
//! - Support widths other than 8, 16, 32 and 64 bits
//! - Provide a cryptographic digest
//!
//! # Example
//!
//! ```
//! use polycrc_core::{
//!     catalog, BigEndian, ChecksumAlgorithm, ChecksumIterator, CrcAlgorithm, CrcParams,
//!     HashAlgorithm,
//! };
//!
//! // Any parameter set, written out by hand...
//! let arc = CrcAlgorithm::new(CrcParams::new(0x8005u16, 0x0000, true, true, 0x0000));
//! assert_eq!(arc.compute_checksum(b"123456789"), 0xBB3D);
//!
//! // ...or taken from the catalog.
//! let crc32 = CrcAlgorithm::new(catalog::CRC_32_ISO_HDLC);
//! let mut iterator = crc32.create_iterator();
//! iterator.compute_block(b"12345");
//! iterator.compute_block(b"6789");
//! assert_eq!(iterator.compute_final(), 0xCBF4_3926);
//!
//! // Streams are read in 4096-byte chunks.
//! let from_reader = crc32.compute_checksum_reader(&b"123456789"[..]).unwrap();
//! assert_eq!(from_reader, 0xCBF4_3926);
//!
//! // Block/finalize adapter with configurable byte order.
//! let mut hash = arc.create_hash_algorithm_with(BigEndian);
//! assert_eq!(hash.compute_hash(b"123456789"), vec![0xBB, 0x3D]);
//! ```

#![warn(clippy::all)]

pub mod algorithm;
pub mod cache;
pub mod catalog;
pub mod convert;
pub mod engine;
pub mod error;
pub mod hasher;
pub mod iterator;
pub mod params;
pub mod register;
pub mod table;

pub use algorithm::{ChecksumAlgorithm, ChecksumIterator, CrcAlgorithm, STREAM_CHUNK_SIZE};
pub use cache::TableCache;
pub use catalog::{AnyCrc, AnyIterator, AnyParams};
pub use convert::{BigEndian, BitConverter, LittleEndian};
pub use engine::CrcEngine;
pub use error::{Error, Result};
pub use hasher::{ChecksumHashAlgorithm, HashAlgorithm};
pub use iterator::CrcIterator;
pub use params::CrcParams;
pub use register::Register;
pub use table::Table;
