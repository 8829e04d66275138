//! Named CRC parameter sets.
//!
//! Names follow the CRC RevEng catalogue. Every entry records its check
//! value: the checksum of the ASCII bytes `"123456789"`.

use crate::algorithm::{ChecksumAlgorithm, ChecksumIterator};
use crate::convert::{BigEndian, BitConverter, LittleEndian};
use crate::error::{Error, Result};
use crate::iterator::CrcIterator;
use crate::params::CrcParams;
use crate::CrcAlgorithm;

// ==================== CRC-8 ====================

pub const CRC_8_SMBUS: CrcParams<u8> = CrcParams::new(0x07, 0x00, false, false, 0x00);
pub const CRC_8_AUTOSAR: CrcParams<u8> = CrcParams::new(0x2F, 0xFF, false, false, 0xFF);
pub const CRC_8_BLUETOOTH: CrcParams<u8> = CrcParams::new(0xA7, 0x00, true, true, 0x00);
pub const CRC_8_CDMA2000: CrcParams<u8> = CrcParams::new(0x9B, 0xFF, false, false, 0x00);
pub const CRC_8_DVB_S2: CrcParams<u8> = CrcParams::new(0xD5, 0x00, false, false, 0x00);
pub const CRC_8_I_432_1: CrcParams<u8> = CrcParams::new(0x07, 0x00, false, false, 0x55);
pub const CRC_8_MAXIM_DOW: CrcParams<u8> = CrcParams::new(0x31, 0x00, true, true, 0x00);
pub const CRC_8_ROHC: CrcParams<u8> = CrcParams::new(0x07, 0xFF, true, true, 0x00);
pub const CRC_8_SAE_J1850: CrcParams<u8> = CrcParams::new(0x1D, 0xFF, false, false, 0xFF);
pub const CRC_8_WCDMA: CrcParams<u8> = CrcParams::new(0x9B, 0x00, true, true, 0x00);

// ==================== CRC-16 ====================

pub const CRC_16_ARC: CrcParams<u16> = CrcParams::new(0x8005, 0x0000, true, true, 0x0000);
pub const CRC_16_DNP: CrcParams<u16> = CrcParams::new(0x3D65, 0x0000, true, true, 0xFFFF);
pub const CRC_16_GENIBUS: CrcParams<u16> = CrcParams::new(0x1021, 0xFFFF, false, false, 0xFFFF);
pub const CRC_16_IBM_3740: CrcParams<u16> = CrcParams::new(0x1021, 0xFFFF, false, false, 0x0000);
pub const CRC_16_IBM_SDLC: CrcParams<u16> = CrcParams::new(0x1021, 0xFFFF, true, true, 0xFFFF);
pub const CRC_16_KERMIT: CrcParams<u16> = CrcParams::new(0x1021, 0x0000, true, true, 0x0000);
pub const CRC_16_MAXIM_DOW: CrcParams<u16> = CrcParams::new(0x8005, 0x0000, true, true, 0xFFFF);
pub const CRC_16_MCRF4XX: CrcParams<u16> = CrcParams::new(0x1021, 0xFFFF, true, true, 0x0000);
pub const CRC_16_MODBUS: CrcParams<u16> = CrcParams::new(0x8005, 0xFFFF, true, true, 0x0000);
pub const CRC_16_SPI_FUJITSU: CrcParams<u16> =
    CrcParams::new(0x1021, 0x1D0F, false, false, 0x0000);
pub const CRC_16_UMTS: CrcParams<u16> = CrcParams::new(0x8005, 0x0000, false, false, 0x0000);
pub const CRC_16_USB: CrcParams<u16> = CrcParams::new(0x8005, 0xFFFF, true, true, 0xFFFF);
pub const CRC_16_XMODEM: CrcParams<u16> = CrcParams::new(0x1021, 0x0000, false, false, 0x0000);

// ==================== CRC-32 ====================

pub const CRC_32_ISO_HDLC: CrcParams<u32> =
    CrcParams::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
pub const CRC_32_ISCSI: CrcParams<u32> =
    CrcParams::new(0x1EDC_6F41, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
pub const CRC_32_AUTOSAR: CrcParams<u32> =
    CrcParams::new(0xF4AC_FB13, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF);
pub const CRC_32_BZIP2: CrcParams<u32> =
    CrcParams::new(0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0xFFFF_FFFF);
pub const CRC_32_CKSUM: CrcParams<u32> =
    CrcParams::new(0x04C1_1DB7, 0x0000_0000, false, false, 0xFFFF_FFFF);
pub const CRC_32_JAMCRC: CrcParams<u32> =
    CrcParams::new(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0x0000_0000);
pub const CRC_32_MPEG_2: CrcParams<u32> =
    CrcParams::new(0x04C1_1DB7, 0xFFFF_FFFF, false, false, 0x0000_0000);
pub const CRC_32_XFER: CrcParams<u32> =
    CrcParams::new(0x0000_00AF, 0x0000_0000, false, false, 0x0000_0000);

// ==================== CRC-64 ====================

pub const CRC_64_ECMA_182: CrcParams<u64> =
    CrcParams::new(0x42F0_E1EB_A9EA_3693, 0, false, false, 0);
pub const CRC_64_GO_ISO: CrcParams<u64> =
    CrcParams::new(0x0000_0000_0000_001B, u64::MAX, true, true, u64::MAX);
pub const CRC_64_MS: CrcParams<u64> =
    CrcParams::new(0x259C_84CB_A642_6349, u64::MAX, true, true, 0);
pub const CRC_64_NVME: CrcParams<u64> =
    CrcParams::new(0xAD93_D235_94C9_3659, u64::MAX, true, true, u64::MAX);
pub const CRC_64_REDIS: CrcParams<u64> = CrcParams::new(0xAD93_D235_94C9_35A9, 0, true, true, 0);
pub const CRC_64_WE: CrcParams<u64> =
    CrcParams::new(0x42F0_E1EB_A9EA_3693, u64::MAX, false, false, u64::MAX);
pub const CRC_64_XZ: CrcParams<u64> =
    CrcParams::new(0x42F0_E1EB_A9EA_3693, u64::MAX, true, true, u64::MAX);

/// Parameter set of any supported width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnyParams {
    Crc8(CrcParams<u8>),
    Crc16(CrcParams<u16>),
    Crc32(CrcParams<u32>),
    Crc64(CrcParams<u64>),
}

impl AnyParams {
    /// Checksum width in bits.
    pub fn width(&self) -> u32 {
        match self {
            AnyParams::Crc8(p) => p.width(),
            AnyParams::Crc16(p) => p.width(),
            AnyParams::Crc32(p) => p.width(),
            AnyParams::Crc64(p) => p.width(),
        }
    }

    /// Instantiate the algorithm, sharing tables through the global cache.
    pub fn algorithm(&self) -> AnyCrc {
        match *self {
            AnyParams::Crc8(p) => AnyCrc::Crc8(CrcAlgorithm::new(p)),
            AnyParams::Crc16(p) => AnyCrc::Crc16(CrcAlgorithm::new(p)),
            AnyParams::Crc32(p) => AnyCrc::Crc32(CrcAlgorithm::new(p)),
            AnyParams::Crc64(p) => AnyCrc::Crc64(CrcAlgorithm::new(p)),
        }
    }
}

/// Catalog entry.
#[derive(Clone, Copy, Debug)]
pub struct Entry {
    /// Canonical RevEng name.
    pub name: &'static str,
    /// Alternative names accepted by [`find`].
    pub aliases: &'static [&'static str],
    /// Parameter set.
    pub params: AnyParams,
    /// Checksum of `"123456789"`.
    pub check: u64,
}

macro_rules! entry {
    ($name:literal, $width:ident, $params:expr, $check:literal $(, $alias:literal)*) => {
        Entry {
            name: $name,
            aliases: &[$($alias),*],
            params: AnyParams::$width($params),
            check: $check,
        }
    };
}

/// Every named variant, grouped by width.
pub static CATALOG: &[Entry] = &[
    entry!("CRC-8/SMBUS", Crc8, CRC_8_SMBUS, 0xF4, "CRC-8"),
    entry!("CRC-8/AUTOSAR", Crc8, CRC_8_AUTOSAR, 0xDF),
    entry!("CRC-8/BLUETOOTH", Crc8, CRC_8_BLUETOOTH, 0x26),
    entry!("CRC-8/CDMA2000", Crc8, CRC_8_CDMA2000, 0xDA),
    entry!("CRC-8/DVB-S2", Crc8, CRC_8_DVB_S2, 0xBC),
    entry!("CRC-8/I-432-1", Crc8, CRC_8_I_432_1, 0xA1, "CRC-8/ITU"),
    entry!("CRC-8/MAXIM-DOW", Crc8, CRC_8_MAXIM_DOW, 0xA1, "CRC-8/MAXIM", "DOW-CRC"),
    entry!("CRC-8/ROHC", Crc8, CRC_8_ROHC, 0xD0),
    entry!("CRC-8/SAE-J1850", Crc8, CRC_8_SAE_J1850, 0x4B),
    entry!("CRC-8/WCDMA", Crc8, CRC_8_WCDMA, 0x25),
    entry!("CRC-16/ARC", Crc16, CRC_16_ARC, 0xBB3D, "CRC-16", "CRC-16/LHA", "CRC-IBM"),
    entry!("CRC-16/DNP", Crc16, CRC_16_DNP, 0xEA82),
    entry!("CRC-16/GENIBUS", Crc16, CRC_16_GENIBUS, 0xD64E, "CRC-16/DARC", "CRC-16/EPC"),
    entry!(
        "CRC-16/IBM-3740",
        Crc16,
        CRC_16_IBM_3740,
        0x29B1,
        "CRC-16/CCITT-FALSE",
        "CRC-16/AUTOSAR"
    ),
    entry!("CRC-16/IBM-SDLC", Crc16, CRC_16_IBM_SDLC, 0x906E, "CRC-16/X-25", "X-25", "CRC-B"),
    entry!("CRC-16/KERMIT", Crc16, CRC_16_KERMIT, 0x2189, "CRC-16/CCITT", "KERMIT"),
    entry!("CRC-16/MAXIM-DOW", Crc16, CRC_16_MAXIM_DOW, 0x44C2, "CRC-16/MAXIM"),
    entry!("CRC-16/MCRF4XX", Crc16, CRC_16_MCRF4XX, 0x6F91),
    entry!("CRC-16/MODBUS", Crc16, CRC_16_MODBUS, 0x4B37, "MODBUS"),
    entry!(
        "CRC-16/SPI-FUJITSU",
        Crc16,
        CRC_16_SPI_FUJITSU,
        0xE5CC,
        "CRC-16/AUG-CCITT"
    ),
    entry!("CRC-16/UMTS", Crc16, CRC_16_UMTS, 0xFEE8, "CRC-16/BUYPASS", "CRC-16/VERIFONE"),
    entry!("CRC-16/USB", Crc16, CRC_16_USB, 0xB4C8),
    entry!("CRC-16/XMODEM", Crc16, CRC_16_XMODEM, 0x31C3, "XMODEM", "ZMODEM", "CRC-16/ACORN"),
    entry!(
        "CRC-32/ISO-HDLC",
        Crc32,
        CRC_32_ISO_HDLC,
        0xCBF4_3926,
        "CRC-32",
        "CRC-32/ADCCP",
        "PKZIP"
    ),
    entry!("CRC-32/ISCSI", Crc32, CRC_32_ISCSI, 0xE306_9283, "CRC-32C", "CRC-32/CASTAGNOLI"),
    entry!("CRC-32/AUTOSAR", Crc32, CRC_32_AUTOSAR, 0x1697_D06A),
    entry!("CRC-32/BZIP2", Crc32, CRC_32_BZIP2, 0xFC89_1918, "CRC-32/AAL5"),
    entry!("CRC-32/CKSUM", Crc32, CRC_32_CKSUM, 0x765E_7680, "CKSUM", "CRC-32/POSIX"),
    entry!("CRC-32/JAMCRC", Crc32, CRC_32_JAMCRC, 0x340B_C6D9, "JAMCRC"),
    entry!("CRC-32/MPEG-2", Crc32, CRC_32_MPEG_2, 0x0376_E6E7),
    entry!("CRC-32/XFER", Crc32, CRC_32_XFER, 0xBD0B_E338, "XFER"),
    entry!("CRC-64/ECMA-182", Crc64, CRC_64_ECMA_182, 0x6C40_DF5F_0B49_7347, "CRC-64"),
    entry!("CRC-64/GO-ISO", Crc64, CRC_64_GO_ISO, 0xB909_56C7_75A4_1001),
    entry!("CRC-64/MS", Crc64, CRC_64_MS, 0x75D4_B74F_024E_CEEA),
    entry!("CRC-64/NVME", Crc64, CRC_64_NVME, 0xAE8B_1486_0A79_9888),
    entry!("CRC-64/REDIS", Crc64, CRC_64_REDIS, 0xE9C6_D914_C4B8_D9CA),
    entry!("CRC-64/WE", Crc64, CRC_64_WE, 0x62EC_59E3_F1A4_F00A),
    entry!("CRC-64/XZ", Crc64, CRC_64_XZ, 0x995D_C9BB_DF19_39FA, "CRC-64/GO-ECMA"),
];

/// Look up a variant by canonical name or alias, ignoring ASCII case.
pub fn find(name: &str) -> Option<&'static Entry> {
    let name = name.trim();
    CATALOG.iter().find(|entry| {
        entry.name.eq_ignore_ascii_case(name)
            || entry.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    })
}

/// Like [`find`], failing with [`Error::UnknownAlgorithm`].
pub fn lookup(name: &str) -> Result<&'static Entry> {
    find(name).ok_or_else(|| Error::UnknownAlgorithm {
        name: name.to_string(),
    })
}

/// CRC algorithm of a width chosen at runtime.
///
/// Checksums are widened to `u64`.
#[derive(Clone, Debug)]
pub enum AnyCrc {
    Crc8(CrcAlgorithm<u8>),
    Crc16(CrcAlgorithm<u16>),
    Crc32(CrcAlgorithm<u32>),
    Crc64(CrcAlgorithm<u64>),
}

macro_rules! dispatch {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyCrc::Crc8($inner) => $body,
            AnyCrc::Crc16($inner) => $body,
            AnyCrc::Crc32($inner) => $body,
            AnyCrc::Crc64($inner) => $body,
        }
    };
}

impl AnyCrc {
    /// Instantiate a catalog variant by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Ok(lookup(name)?.params.algorithm())
    }

    /// Checksum width in bits.
    pub fn width(&self) -> u32 {
        dispatch!(self, crc => crc.width())
    }

    /// Serialize a checksum produced by this algorithm into `width / 8` bytes.
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_bytes(&self, checksum: u64, big_endian: bool) -> Vec<u8> {
        match (self, big_endian) {
            (AnyCrc::Crc8(_), _) => vec![checksum as u8],
            (AnyCrc::Crc16(_), false) => LittleEndian.to_bytes(checksum as u16),
            (AnyCrc::Crc16(_), true) => BigEndian.to_bytes(checksum as u16),
            (AnyCrc::Crc32(_), false) => LittleEndian.to_bytes(checksum as u32),
            (AnyCrc::Crc32(_), true) => BigEndian.to_bytes(checksum as u32),
            (AnyCrc::Crc64(_), false) => LittleEndian.to_bytes(checksum),
            (AnyCrc::Crc64(_), true) => BigEndian.to_bytes(checksum),
        }
    }
}

impl ChecksumAlgorithm for AnyCrc {
    type Output = u64;
    type Iterator = AnyIterator;

    fn create_iterator(&self) -> AnyIterator {
        match self {
            AnyCrc::Crc8(crc) => AnyIterator::Crc8(crc.create_iterator()),
            AnyCrc::Crc16(crc) => AnyIterator::Crc16(crc.create_iterator()),
            AnyCrc::Crc32(crc) => AnyIterator::Crc32(crc.create_iterator()),
            AnyCrc::Crc64(crc) => AnyIterator::Crc64(crc.create_iterator()),
        }
    }
}

/// Iterator of an [`AnyCrc`].
#[derive(Clone, Debug)]
pub enum AnyIterator {
    Crc8(CrcIterator<u8>),
    Crc16(CrcIterator<u16>),
    Crc32(CrcIterator<u32>),
    Crc64(CrcIterator<u64>),
}

macro_rules! dispatch_iter {
    ($value:expr, $inner:ident => $body:expr) => {
        match $value {
            AnyIterator::Crc8($inner) => $body,
            AnyIterator::Crc16($inner) => $body,
            AnyIterator::Crc32($inner) => $body,
            AnyIterator::Crc64($inner) => $body,
        }
    };
}

impl ChecksumIterator for AnyIterator {
    type Output = u64;

    fn reset(&mut self) {
        dispatch_iter!(self, it => it.reset());
    }

    fn compute_block(&mut self, data: &[u8]) {
        dispatch_iter!(self, it => it.compute_block(data));
    }

    fn compute_final(&mut self) -> u64 {
        dispatch_iter!(self, it => it.compute_final().into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::register::Register;
    use proptest::prelude::*;

    const CHECK_INPUT: &[u8] = b"123456789";

    /// Bit-at-a-time Rocksoft model: reflects every input byte and the final
    /// register explicitly instead of folding reflection into the table.
    fn bitwise_reference<T: Register>(params: &CrcParams<T>, data: &[u8]) -> T {
        let mut crc = params.initial_value;
        for &byte in data {
            let byte = if params.reflected_input {
                byte.reverse_bits()
            } else {
                byte
            };
            crc = crc ^ (T::from_byte(byte) << (T::BITS - 8));
            for _ in 0..8 {
                crc = if crc.top_bit() {
                    (crc << 1) ^ params.polynomial
                } else {
                    crc << 1
                };
            }
        }
        if params.reflected_output {
            crc = crc.reflect();
        }
        crc ^ params.xor_output
    }

    fn reference_any(params: &AnyParams, data: &[u8]) -> u64 {
        match params {
            AnyParams::Crc8(p) => bitwise_reference(p, data).into(),
            AnyParams::Crc16(p) => bitwise_reference(p, data).into(),
            AnyParams::Crc32(p) => bitwise_reference(p, data).into(),
            AnyParams::Crc64(p) => bitwise_reference(p, data).into(),
        }
    }

    #[test]
    fn every_entry_matches_its_check_value() {
        for entry in CATALOG {
            let crc = entry.params.algorithm();
            assert_eq!(
                crc.compute_checksum(CHECK_INPUT),
                entry.check,
                "{} check value",
                entry.name
            );
        }
    }

    #[test]
    fn reference_model_agrees_on_check_values() {
        for entry in CATALOG {
            assert_eq!(
                reference_any(&entry.params, CHECK_INPUT),
                entry.check,
                "{} reference",
                entry.name
            );
        }
    }

    #[test]
    fn lookup_by_alias_and_case() {
        assert_eq!(find("crc-16/ccitt-false").unwrap().name, "CRC-16/IBM-3740");
        assert_eq!(find("MODBUS").unwrap().name, "CRC-16/MODBUS");
        assert_eq!(find(" CRC-32C ").unwrap().name, "CRC-32/ISCSI");
        assert!(find("CRC-7/MMC").is_none());
        assert!(matches!(
            lookup("CRC-7/MMC"),
            Err(Error::UnknownAlgorithm { .. })
        ));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<String> = CATALOG
            .iter()
            .flat_map(|e| std::iter::once(e.name).chain(e.aliases.iter().copied()))
            .map(str::to_ascii_uppercase)
            .collect();
        let total = names.len();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), total);
    }

    #[test]
    fn any_crc_widths_and_bytes() {
        let crc = AnyCrc::from_name("CRC-16/ARC").unwrap();
        assert_eq!(crc.width(), 16);
        let value = crc.compute_checksum(CHECK_INPUT);
        assert_eq!(crc.to_bytes(value, false), vec![0x3D, 0xBB]);
        assert_eq!(crc.to_bytes(value, true), vec![0xBB, 0x3D]);

        let crc = AnyCrc::from_name("CRC-8").unwrap();
        assert_eq!(crc.to_bytes(0xF4, true), vec![0xF4]);
        assert_eq!(AnyParams::Crc64(CRC_64_XZ).width(), 64);
    }

    #[test]
    fn any_iterator_streams() {
        let crc = AnyCrc::from_name("CRC-64/NVME").unwrap();
        let mut iterator = crc.create_iterator();
        iterator.compute_block(b"1234");
        iterator.compute_block(b"56789");
        assert_eq!(iterator.compute_final(), 0xAE8B_1486_0A79_9888);
        iterator.compute_block(b"123456789");
        assert_eq!(iterator.compute_final(), 0xAE8B_1486_0A79_9888);
    }

    #[test]
    fn unknown_name_fails() {
        let err = AnyCrc::from_name("nope").unwrap_err();
        assert_eq!(err.to_string(), "unknown CRC algorithm: nope");
    }

    fn catalog_index() -> impl Strategy<Value = usize> {
        0..CATALOG.len()
    }

    proptest! {
        #[test]
        fn table_engine_matches_bitwise_reference(
            index in catalog_index(),
            data in proptest::collection::vec(any::<u8>(), 0..=512),
        ) {
            let entry = &CATALOG[index];
            let ours = entry.params.algorithm().compute_checksum(&data);
            prop_assert_eq!(ours, reference_any(&entry.params, &data));
        }

        #[test]
        fn chunking_is_invisible(
            index in catalog_index(),
            data in proptest::collection::vec(any::<u8>(), 0..=1024),
            cuts in proptest::collection::vec(any::<prop::sample::Index>(), 0..8),
        ) {
            let crc = CATALOG[index].params.algorithm();
            let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
            points.sort_unstable();

            let mut iterator = crc.create_iterator();
            let mut start = 0;
            for point in points {
                iterator.compute_block(&data[start..point]);
                start = point;
            }
            iterator.compute_block(&data[start..]);
            prop_assert_eq!(iterator.compute_final(), crc.compute_checksum(&data));
        }

        #[test]
        fn mismatched_reflection_matches_reference(
            poly in any::<u16>(),
            init in any::<u16>(),
            xor in any::<u16>(),
            reflected_input in any::<bool>(),
            data in proptest::collection::vec(any::<u8>(), 0..=256),
        ) {
            let params = CrcParams::new(poly, init, reflected_input, !reflected_input, xor);
            let ours = CrcAlgorithm::new(params).compute_checksum(&data);
            prop_assert_eq!(ours, bitwise_reference(&params, &data));
        }
    }
}
