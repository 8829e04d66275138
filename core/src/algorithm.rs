//! Generic checksum algorithm façade.
//!
//! [`ChecksumAlgorithm`] turns any [`ChecksumIterator`] into the one-shot and
//! stream APIs. [`CrcAlgorithm`] is the CRC implementation, parameterized by
//! its register type.

use crate::cache::TableCache;
use crate::convert::{BitConverter, LittleEndian};
use crate::engine::CrcEngine;
use crate::error::{Error, Result};
use crate::hasher::ChecksumHashAlgorithm;
use crate::iterator::CrcIterator;
use crate::params::CrcParams;
use crate::register::Register;
use crate::table::Table;
use std::io::{ErrorKind, Read};
use std::sync::Arc;

/// Bytes read per chunk by the stream overloads.
pub const STREAM_CHUNK_SIZE: usize = 4096;

/// Incremental checksum state.
///
/// For any split of a byte sequence into `a` then `b`, feeding `a` and `b` in
/// order must finalize to the same value as feeding `a ++ b` at once.
pub trait ChecksumIterator {
    /// Checksum value type.
    type Output: Copy;

    /// Return to the initial register.
    fn reset(&mut self);

    /// Fold `data` into the running state. Empty slices are a no-op.
    fn compute_block(&mut self, data: &[u8]);

    /// Produce the checksum and reset for a new computation.
    fn compute_final(&mut self) -> Self::Output;
}

/// Width-agnostic checksum algorithm.
///
/// Implementors only provide [`create_iterator`](Self::create_iterator); the
/// one-shot and stream overloads are built on top of it.
pub trait ChecksumAlgorithm {
    /// Checksum value type.
    type Output: Copy;

    /// Iterator type produced by this algorithm.
    type Iterator: ChecksumIterator<Output = Self::Output>;

    /// Start a new computation.
    fn create_iterator(&self) -> Self::Iterator;

    /// Checksum of a byte slice.
    fn compute_checksum(&self, data: &[u8]) -> Self::Output {
        let mut iterator = self.create_iterator();
        iterator.compute_block(data);
        iterator.compute_final()
    }

    /// Checksum of everything `reader` yields, read in
    /// [`STREAM_CHUNK_SIZE`]-byte chunks.
    fn compute_checksum_reader<R: Read>(&self, reader: R) -> Result<Self::Output> {
        self.compute_checksum_reader_chunked(reader, STREAM_CHUNK_SIZE)
    }

    /// Like [`compute_checksum_reader`](Self::compute_checksum_reader) with an
    /// explicit chunk size.
    fn compute_checksum_reader_chunked<R: Read>(
        &self,
        mut reader: R,
        chunk_size: usize,
    ) -> Result<Self::Output> {
        if chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }

        let mut iterator = self.create_iterator();
        let mut buf = vec![0u8; chunk_size];
        loop {
            match reader.read(&mut buf) {
                Ok(0) => break,
                Ok(n) => iterator.compute_block(&buf[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
        Ok(iterator.compute_final())
    }
}

/// Table-driven CRC over registers of type `T`.
///
/// Cloning is cheap: clones share the lookup table.
///
/// # Example
///
/// ```
/// use polycrc_core::{catalog, ChecksumAlgorithm, ChecksumIterator, CrcAlgorithm};
///
/// let crc = CrcAlgorithm::new(catalog::CRC_16_ARC);
/// assert_eq!(crc.compute_checksum(b"123456789"), 0xBB3D);
///
/// let mut iterator = crc.create_iterator();
/// iterator.compute_block(b"1234");
/// iterator.compute_block(b"56789");
/// assert_eq!(iterator.compute_final(), 0xBB3D);
/// ```
#[derive(Clone, Debug)]
pub struct CrcAlgorithm<T: Register> {
    params: CrcParams<T>,
    engine: CrcEngine<T>,
}

impl<T: Register> CrcAlgorithm<T> {
    /// Create an algorithm, sharing its table through the process-wide cache.
    pub fn new(params: CrcParams<T>) -> Self {
        Self::with_cache(params, T::table_cache())
    }

    /// Create an algorithm whose table comes from a specific cache.
    pub fn with_cache(params: CrcParams<T>, cache: &TableCache<T>) -> Self {
        let table = cache.get_table(params.polynomial, params.reflected_input);
        Self::with_table(params, table)
    }

    fn with_table(params: CrcParams<T>, table: Arc<Table<T>>) -> Self {
        let engine = CrcEngine::new(&params, table);
        Self { params, engine }
    }

    /// The parameter set this algorithm was built from.
    pub fn params(&self) -> &CrcParams<T> {
        &self.params
    }

    /// The shared lookup table.
    pub fn table(&self) -> &Arc<Table<T>> {
        self.engine.table()
    }

    /// Checksum width in bits.
    pub fn width(&self) -> u32 {
        T::BITS
    }

    /// Hash-algorithm adapter emitting little-endian checksum bytes.
    pub fn create_hash_algorithm(&self) -> ChecksumHashAlgorithm<T, LittleEndian> {
        ChecksumHashAlgorithm::new(self.create_iterator(), LittleEndian)
    }

    /// Hash-algorithm adapter emitting checksum bytes through `converter`.
    pub fn create_hash_algorithm_with<C: BitConverter<T>>(
        &self,
        converter: C,
    ) -> ChecksumHashAlgorithm<T, C> {
        ChecksumHashAlgorithm::new(self.create_iterator(), converter)
    }
}

impl<T: Register> ChecksumAlgorithm for CrcAlgorithm<T> {
    type Output = T;
    type Iterator = CrcIterator<T>;

    fn create_iterator(&self) -> CrcIterator<T> {
        CrcIterator::new(self.engine.clone())
    }
}
