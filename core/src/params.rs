//! CRC parameter sets.
//!
//! Parameters follow the Rocksoft model used by the CRC RevEng catalogue.
//! The width is implied by the register type.

use crate::register::Register;

/// Immutable description of one CRC variant.
///
/// Two variants that share `polynomial` and `reflected_input` share a lookup
/// table, whatever their initial value and output XOR.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrcParams<T> {
    /// Generator polynomial, top bit omitted, in normal (MSB-first) form.
    pub polynomial: T,
    /// Register value before the first byte.
    pub initial_value: T,
    /// Process the bits of each input byte least-significant first.
    pub reflected_input: bool,
    /// Reflect the register before the final XOR.
    pub reflected_output: bool,
    /// Value XORed into the register to produce the checksum.
    pub xor_output: T,
}

impl<T: Register> CrcParams<T> {
    /// Build a parameter set.
    pub const fn new(
        polynomial: T,
        initial_value: T,
        reflected_input: bool,
        reflected_output: bool,
        xor_output: T,
    ) -> Self {
        Self {
            polynomial,
            initial_value,
            reflected_input,
            reflected_output,
            xor_output,
        }
    }

    /// Checksum width in bits.
    pub fn width(&self) -> u32 {
        T::BITS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_follows_register_type() {
        let p8 = CrcParams::new(0x07u8, 0, false, false, 0);
        let p64 = CrcParams::new(0x42F0_E1EB_A9EA_3693u64, 0, false, false, 0);
        assert_eq!(p8.width(), 8);
        assert_eq!(p64.width(), 64);
    }

    #[test]
    fn params_are_value_types() {
        let a = CrcParams::new(0x8005u16, 0, true, true, 0);
        let b = a;
        assert_eq!(a, b);
        assert_ne!(a, CrcParams { xor_output: 0xFFFF, ..a });
    }
}
