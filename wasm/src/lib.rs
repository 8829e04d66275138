//! WebAssembly bindings for polycrc checksums.
//!
//! Exposes catalog CRCs to JavaScript, both one-shot and as a streaming
//! `Crc` object. Checksums cross the boundary as `BigInt` (u64) so every
//! width fits.

use polycrc_core::{catalog, AnyCrc, AnyIterator, ChecksumAlgorithm, ChecksumIterator};
use wasm_bindgen::prelude::*;

fn algorithm(name: &str) -> Result<AnyCrc, JsError> {
    AnyCrc::from_name(name).map_err(|e| JsError::new(&e.to_string()))
}

// === One-shot ===

/// Compute a checksum with a catalog algorithm.
///
/// # Arguments
/// * `name` - Catalog name or alias, e.g. `"CRC-16/MODBUS"` or `"CRC-32C"`
/// * `data` - Bytes to checksum
///
/// # Returns
/// The checksum, or throws for an unknown algorithm.
#[wasm_bindgen]
pub fn checksum(name: &str, data: &[u8]) -> Result<u64, JsError> {
    Ok(algorithm(name)?.compute_checksum(data))
}

/// Compute a checksum and return its bytes.
#[wasm_bindgen]
pub fn checksum_bytes(name: &str, data: &[u8], big_endian: bool) -> Result<Vec<u8>, JsError> {
    let crc = algorithm(name)?;
    let value = crc.compute_checksum(data);
    Ok(crc.to_bytes(value, big_endian))
}

/// Verify data against an expected checksum.
#[wasm_bindgen]
pub fn verify(name: &str, data: &[u8], expected: u64) -> Result<bool, JsError> {
    Ok(algorithm(name)?.compute_checksum(data) == expected)
}

// === Catalog ===

/// Canonical names of every catalog algorithm.
#[wasm_bindgen]
pub fn algorithms() -> Vec<String> {
    catalog::CATALOG
        .iter()
        .map(|entry| entry.name.to_string())
        .collect()
}

/// Width in bits of a catalog algorithm.
#[wasm_bindgen]
pub fn algorithm_width(name: &str) -> Result<u32, JsError> {
    Ok(algorithm(name)?.width())
}

// === Streaming ===

/// Incremental checksum for data that arrives in pieces.
#[wasm_bindgen]
pub struct Crc {
    iterator: AnyIterator,
}

#[wasm_bindgen]
impl Crc {
    /// Start a computation with a catalog algorithm.
    #[wasm_bindgen(constructor)]
    pub fn new(name: &str) -> Result<Crc, JsError> {
        Ok(Crc {
            iterator: algorithm(name)?.create_iterator(),
        })
    }

    /// Feed more bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.iterator.compute_block(data);
    }

    /// Return the checksum and start over.
    pub fn finalize(&mut self) -> u64 {
        self.iterator.compute_final()
    }

    /// Discard everything fed so far.
    pub fn reset(&mut self) {
        self.iterator.reset();
    }
}
