//! Checksum ↔ byte conversion.

use crate::error::{Error, Result};
use crate::register::Register;

/// Converts a checksum value to bytes and back.
pub trait BitConverter<T: Register> {
    /// Serialize `value` into exactly `T::BYTES` bytes.
    fn to_bytes(&self, value: T) -> Vec<u8>;

    /// Parse exactly `T::BYTES` bytes.
    fn from_bytes(&self, bytes: &[u8]) -> Result<T>;
}

/// Least-significant byte first. Default for hash adapters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LittleEndian;

/// Most-significant byte first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BigEndian;

fn invalid_length<T: Register>(bytes: &[u8]) -> Error {
    Error::InvalidLength {
        expected: T::BYTES,
        actual: bytes.len(),
    }
}

impl<T: Register> BitConverter<T> for LittleEndian {
    fn to_bytes(&self, value: T) -> Vec<u8> {
        value.to_le_vec()
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<T> {
        T::from_le_slice(bytes).ok_or_else(|| invalid_length::<T>(bytes))
    }
}

impl<T: Register> BitConverter<T> for BigEndian {
    fn to_bytes(&self, value: T) -> Vec<u8> {
        value.to_be_vec()
    }

    fn from_bytes(&self, bytes: &[u8]) -> Result<T> {
        T::from_be_slice(bytes).ok_or_else(|| invalid_length::<T>(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_order() {
        assert_eq!(LittleEndian.to_bytes(0xBB3Du16), vec![0x3D, 0xBB]);
        assert_eq!(BigEndian.to_bytes(0xBB3Du16), vec![0xBB, 0x3D]);
        assert_eq!(LittleEndian.to_bytes(0xF4u8), vec![0xF4]);
    }

    #[test]
    fn parses_its_own_output() {
        let value = 0x995D_C9BB_DF19_39FAu64;
        let bytes = BigEndian.to_bytes(value);
        assert_eq!(BitConverter::<u64>::from_bytes(&BigEndian, &bytes).unwrap(), value);
        let swapped: u64 = LittleEndian.from_bytes(&bytes).unwrap();
        assert_eq!(swapped, value.swap_bytes());
    }

    #[test]
    fn wrong_length_is_rejected() {
        let err = BitConverter::<u32>::from_bytes(&LittleEndian, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidLength {
                expected: 4,
                actual: 2
            }
        ));
    }
}
