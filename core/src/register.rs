//! Register types a CRC can run in.
//!
//! A CRC register is an unsigned integer whose width equals the checksum
//! width. Only `u8`, `u16`, `u32` and `u64` implement [`Register`]; the
//! width constraint is therefore enforced by the type system.

use crate::cache::TableCache;
use std::fmt::{Debug, LowerHex};
use std::hash::Hash;
use std::ops::{BitAnd, BitXor, Shl, Shr};
use std::sync::OnceLock;

/// Unsigned integer usable as a CRC register.
///
/// The byte-shift helpers never overflow: shifting an 8-bit register by a
/// full byte yields zero, which is what the table-driven update expects.
pub trait Register:
    Copy
    + Eq
    + Hash
    + Debug
    + Default
    + LowerHex
    + Send
    + Sync
    + 'static
    + BitXor<Output = Self>
    + BitAnd<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
    + Into<u64>
{
    /// Register width in bits.
    const BITS: u32;

    /// Register width in bytes.
    const BYTES: usize;

    /// The all-zero register.
    const ZERO: Self;

    /// Widen a byte into the low bits of a register.
    fn from_byte(byte: u8) -> Self;

    /// Least-significant byte.
    fn low_byte(self) -> u8;

    /// Most-significant byte.
    fn top_byte(self) -> u8;

    /// Shift left by eight bits, discarding the top byte.
    fn shl_byte(self) -> Self;

    /// Shift right by eight bits, discarding the low byte.
    fn shr_byte(self) -> Self;

    /// Whether the most-significant bit is set.
    fn top_bit(self) -> bool;

    /// Whether the least-significant bit is set.
    fn low_bit(self) -> bool;

    /// Reverse the bit order across the full register width.
    fn reflect(self) -> Self;

    /// Little-endian byte representation.
    fn to_le_vec(self) -> Vec<u8>;

    /// Big-endian byte representation.
    fn to_be_vec(self) -> Vec<u8>;

    /// Parse a little-endian slice of exactly [`Self::BYTES`] bytes.
    fn from_le_slice(bytes: &[u8]) -> Option<Self>;

    /// Parse a big-endian slice of exactly [`Self::BYTES`] bytes.
    fn from_be_slice(bytes: &[u8]) -> Option<Self>;

    /// Process-wide lookup-table cache for this register width.
    fn table_cache() -> &'static TableCache<Self>;
}

macro_rules! impl_register {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Register for $ty {
                const BITS: u32 = <$ty>::BITS;
                const BYTES: usize = std::mem::size_of::<$ty>();
                const ZERO: Self = 0;

                #[inline]
                fn from_byte(byte: u8) -> Self {
                    Self::from(byte)
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn low_byte(self) -> u8 {
                    self as u8
                }

                #[inline]
                #[allow(clippy::cast_possible_truncation)]
                fn top_byte(self) -> u8 {
                    (self >> (Self::BITS - 8)) as u8
                }

                #[inline]
                fn shl_byte(self) -> Self {
                    self.checked_shl(8).unwrap_or(0)
                }

                #[inline]
                fn shr_byte(self) -> Self {
                    self.checked_shr(8).unwrap_or(0)
                }

                #[inline]
                fn top_bit(self) -> bool {
                    self >> (Self::BITS - 1) != 0
                }

                #[inline]
                fn low_bit(self) -> bool {
                    self & 1 != 0
                }

                #[inline]
                fn reflect(self) -> Self {
                    self.reverse_bits()
                }

                fn to_le_vec(self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn to_be_vec(self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }

                fn from_le_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(Self::from_le_bytes)
                }

                fn from_be_slice(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(Self::from_be_bytes)
                }

                fn table_cache() -> &'static TableCache<Self> {
                    static CACHE: OnceLock<TableCache<$ty>> = OnceLock::new();
                    CACHE.get_or_init(TableCache::new)
                }
            }
        )*
    };
}

impl_register!(u8, u16, u32, u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_shifts_do_not_overflow_narrow_registers() {
        assert_eq!(0xABu8.shl_byte(), 0);
        assert_eq!(0xABu8.shr_byte(), 0);
        assert_eq!(0xABCDu16.shl_byte(), 0xCD00);
        assert_eq!(0xABCDu16.shr_byte(), 0x00AB);
        assert_eq!(0x1234_5678u32.shl_byte(), 0x3456_7800);
        assert_eq!(0x1234_5678_9ABC_DEF0u64.shr_byte(), 0x0012_3456_789A_BCDE);
    }

    #[test]
    fn byte_extraction() {
        assert_eq!(0xA5u8.low_byte(), 0xA5);
        assert_eq!(0xA5u8.top_byte(), 0xA5);
        assert_eq!(0x1234u16.low_byte(), 0x34);
        assert_eq!(0x1234u16.top_byte(), 0x12);
        assert_eq!(0xDEAD_BEEFu32.top_byte(), 0xDE);
        assert_eq!(0x0102_0304_0506_0708u64.top_byte(), 0x01);
    }

    #[test]
    fn reflection_spans_full_width() {
        assert_eq!(0x01u8.reflect(), 0x80);
        assert_eq!(0x8005u16.reflect(), 0xA001);
        assert_eq!(0x1021u16.reflect(), 0x8408);
        assert_eq!(0x04C1_1DB7u32.reflect(), 0xEDB8_8320);
        assert_eq!(0x42F0_E1EB_A9EA_3693u64.reflect(), 0xC96C_5795_D787_0F42);
    }

    #[test]
    fn top_and_low_bits() {
        assert!(0x80u8.top_bit());
        assert!(!0x7Fu8.top_bit());
        assert!(0x8000_0000u32.top_bit());
        assert!(1u64.low_bit());
        assert!(!2u16.low_bit());
    }

    #[test]
    fn slice_conversion_checks_length() {
        assert_eq!(u16::from_le_slice(&[0x3D, 0xBB]), Some(0xBB3D));
        assert_eq!(u16::from_be_slice(&[0xBB, 0x3D]), Some(0xBB3D));
        assert_eq!(u32::from_le_slice(&[1, 2, 3]), None);
        assert_eq!(0xCBF4_3926u32.to_le_vec(), vec![0x26, 0x39, 0xF4, 0xCB]);
        assert_eq!(0xCBF4_3926u32.to_be_vec(), vec![0xCB, 0xF4, 0x39, 0x26]);
    }

    #[test]
    fn table_cache_is_a_singleton_per_width() {
        let a = <u16 as Register>::table_cache();
        let b = <u16 as Register>::table_cache();
        assert!(std::ptr::eq(a, b));
    }
}
