//! Adapter onto the conventional block/finalize hashing interface.
//!
//! Frameworks written against a synchronous hash-algorithm abstraction
//! expect `initialize`, `hash_core` and `hash_final`. These map 1:1 onto
//! an iterator's `reset`, `compute_block` and `compute_final`, with the
//! checksum turned into bytes by a [`BitConverter`].

use crate::algorithm::ChecksumIterator;
use crate::convert::BitConverter;
use crate::iterator::CrcIterator;
use crate::register::Register;
use std::hash::Hasher;
use std::io::{self, Write};

/// Synchronous block-oriented hash algorithm.
pub trait HashAlgorithm {
    /// Size of the hash output in bytes.
    fn hash_size(&self) -> usize;

    /// Discard any accumulated state.
    fn initialize(&mut self);

    /// Absorb a block of input.
    fn hash_core(&mut self, data: &[u8]);

    /// Produce the hash and return to the initial state.
    fn hash_final(&mut self) -> Vec<u8>;

    /// Hash `data` from a clean state.
    fn compute_hash(&mut self, data: &[u8]) -> Vec<u8> {
        self.initialize();
        self.hash_core(data);
        self.hash_final()
    }
}

/// [`HashAlgorithm`] backed by a CRC iterator.
///
/// Also usable as an [`io::Write`] sink and as a [`Hasher`].
#[derive(Clone, Debug)]
pub struct ChecksumHashAlgorithm<T: Register, C> {
    iterator: CrcIterator<T>,
    converter: C,
}

impl<T: Register, C: BitConverter<T>> ChecksumHashAlgorithm<T, C> {
    /// Wrap an iterator. The iterator's accumulated state is discarded.
    pub fn new(mut iterator: CrcIterator<T>, converter: C) -> Self {
        iterator.reset();
        Self {
            iterator,
            converter,
        }
    }

    /// Checksum of the bytes absorbed so far, as a number.
    pub fn checksum(&self) -> T {
        self.iterator.peek()
    }

    /// The converter used by [`HashAlgorithm::hash_final`].
    pub fn converter(&self) -> &C {
        &self.converter
    }
}

impl<T: Register, C: BitConverter<T>> HashAlgorithm for ChecksumHashAlgorithm<T, C> {
    fn hash_size(&self) -> usize {
        T::BYTES
    }

    fn initialize(&mut self) {
        self.iterator.reset();
    }

    fn hash_core(&mut self, data: &[u8]) {
        self.iterator.compute_block(data);
    }

    fn hash_final(&mut self) -> Vec<u8> {
        let checksum = self.iterator.compute_final();
        self.converter.to_bytes(checksum)
    }
}

impl<T: Register, C: BitConverter<T>> Write for ChecksumHashAlgorithm<T, C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.hash_core(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: Register, C: BitConverter<T>> Hasher for ChecksumHashAlgorithm<T, C> {
    fn finish(&self) -> u64 {
        self.checksum().into()
    }

    fn write(&mut self, bytes: &[u8]) {
        self.hash_core(bytes);
    }
}
