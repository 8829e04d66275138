//! Lookup-table generation.
//!
//! A table holds, for every byte value, the effect of eight steps of
//! polynomial division on the register. It depends only on the polynomial
//! and on the input bit order, never on the initial value or output XOR.

use crate::register::Register;

/// Number of entries in a lookup table (one per byte value).
pub const TABLE_SIZE: usize = 256;

/// Immutable 256-entry lookup table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table<T> {
    entries: [T; TABLE_SIZE],
}

impl<T: Register> Table<T> {
    /// Derive the table for `polynomial` in the given input bit order.
    ///
    /// Pure and deterministic; every call computes its own array, so it may
    /// run concurrently without synchronization.
    ///
    /// # Algorithm
    ///
    /// - Normal order: the byte enters at the top of the register and the
    ///   division shifts left, folding in `polynomial` when the top bit falls
    ///   out.
    /// - Reflected order: the polynomial is bit-reversed across the full
    ///   register width, the byte enters at the bottom and the division
    ///   shifts right.
    pub fn build(polynomial: T, reflected_input: bool) -> Self {
        let mut entries = [T::ZERO; TABLE_SIZE];

        if reflected_input {
            let reversed = polynomial.reflect();
            for (byte, slot) in (0..=u8::MAX).zip(entries.iter_mut()) {
                let mut crc = T::from_byte(byte);
                for _ in 0..8 {
                    crc = if crc.low_bit() {
                        (crc >> 1) ^ reversed
                    } else {
                        crc >> 1
                    };
                }
                *slot = crc;
            }
        } else {
            for (byte, slot) in (0..=u8::MAX).zip(entries.iter_mut()) {
                let mut crc = T::from_byte(byte) << (T::BITS - 8);
                for _ in 0..8 {
                    crc = if crc.top_bit() {
                        (crc << 1) ^ polynomial
                    } else {
                        crc << 1
                    };
                }
                *slot = crc;
            }
        }

        Self { entries }
    }

    /// Entry for a byte value.
    #[inline]
    pub fn get(&self, index: u8) -> T {
        self.entries[usize::from(index)]
    }

    /// All entries in byte-value order.
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }
}
