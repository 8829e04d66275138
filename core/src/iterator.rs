//! Restartable streaming checksum state.

use crate::algorithm::ChecksumIterator;
use crate::engine::CrcEngine;
use crate::register::Register;

/// Running CRC computation.
///
/// Feed bytes with [`compute_block`](ChecksumIterator::compute_block) as
/// many times as needed; [`compute_final`](ChecksumIterator::compute_final)
/// returns the checksum and rewinds the iterator so it can start over
/// immediately. There is no terminal state.
///
/// The iterator holds its own handle to the lookup table, so it outlives the
/// algorithm that created it.
#[derive(Clone, Debug)]
pub struct CrcIterator<T: Register> {
    engine: CrcEngine<T>,
    register: T,
}

impl<T: Register> CrcIterator<T> {
    pub(crate) fn new(engine: CrcEngine<T>) -> Self {
        let register = engine.initial_register();
        Self { engine, register }
    }

    /// Current register value (not the checksum).
    pub fn register(&self) -> T {
        self.register
    }

    /// Checksum of the bytes fed so far, without resetting.
    pub fn peek(&self) -> T {
        self.engine.compute_final(self.register)
    }
}

impl<T: Register> ChecksumIterator for CrcIterator<T> {
    type Output = T;

    fn reset(&mut self) {
        self.register = self.engine.initial_register();
    }

    fn compute_block(&mut self, data: &[u8]) {
        self.register = self.engine.compute_block(self.register, data);
    }

    fn compute_final(&mut self) -> T {
        let checksum = self.engine.compute_final(self.register);
        self.reset();
        checksum
    }
}
