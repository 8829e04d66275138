//! Table-driven register update.
//!
//! The engine runs the register in a single bit order fixed at construction:
//! reflected variants shift right and index the table with the low byte,
//! normal variants shift left and index with the top byte. The initial value
//! is reflected once, up front, for reflected variants, so no per-byte or
//! per-block reflection is ever needed.
//!
//! When input and output reflection disagree the register is reflected once
//! more at finalization, before the output XOR.

use crate::params::CrcParams;
use crate::register::Register;
use crate::table::Table;
use std::sync::Arc;

/// Folds bytes into a register using a shared lookup table.
#[derive(Clone, Debug)]
pub struct CrcEngine<T: Register> {
    table: Arc<Table<T>>,
    reflected: bool,
    reflect_result: bool,
    initial_register: T,
    xor_output: T,
}

impl<T: Register> CrcEngine<T> {
    /// Bind `params` to a table built for `(params.polynomial, params.reflected_input)`.
    pub fn new(params: &CrcParams<T>, table: Arc<Table<T>>) -> Self {
        let reflected = params.reflected_input;
        let initial_register = if reflected {
            params.initial_value.reflect()
        } else {
            params.initial_value
        };

        Self {
            table,
            reflected,
            reflect_result: params.reflected_input != params.reflected_output,
            initial_register,
            xor_output: params.xor_output,
        }
    }

    /// Register value at the start of every computation.
    #[inline]
    pub fn initial_register(&self) -> T {
        self.initial_register
    }

    /// The lookup table this engine reads from.
    pub fn table(&self) -> &Arc<Table<T>> {
        &self.table
    }

    /// Fold `data` into `register`.
    #[inline]
    pub fn compute_block(&self, mut register: T, data: &[u8]) -> T {
        let table = &*self.table;
        if self.reflected {
            for &byte in data {
                register = register.shr_byte() ^ table.get(register.low_byte() ^ byte);
            }
        } else {
            for &byte in data {
                register = register.shl_byte() ^ table.get(register.top_byte() ^ byte);
            }
        }
        register
    }

    /// Turn a register into the published checksum.
    #[inline]
    pub fn compute_final(&self, register: T) -> T {
        let register = if self.reflect_result {
            register.reflect()
        } else {
            register
        };
        register ^ self.xor_output
    }
}
