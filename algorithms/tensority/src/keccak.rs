//! Keccak-256 helper.
//!
//! Tensority uses *original* Keccak (multi-rate padding byte `0x01`), not
//! FIPS-202 SHA3-256 (`0x06`). The two differ in every digest; swapping in
//! `sha3::Sha3_256` here would silently break interoperability.

use sha3::{Digest, Keccak256};

/// One-shot Keccak-256 over a contiguous byte range.
#[inline]
pub(crate) fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}
