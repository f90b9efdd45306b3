//! Low-level wire-format helpers: big-endian integers, Base58Check, fingerprints.

use crate::{Error, Result};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Encodes `value` as 4 big-endian bytes (network byte order), per BIP-32.
pub fn u32_be(value: u32) -> [u8; 4] {
    value.to_be_bytes()
}

/// Decodes 4 big-endian bytes into a `u32`.
pub fn u32_from_be(bytes: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*bytes)
}

/// Base58Check-encodes `payload`: Base58 of `payload || checksum(payload)[..4]`.
pub fn base58check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decodes and verifies a Base58Check string, returning the payload (without checksum).
pub fn base58check_decode(s: &str) -> Result<Vec<u8>> {
    bs58::decode(s)
        .with_check(None)
        .into_vec()
        .map_err(Error::from)
}

/// `RIPEMD160(SHA256(compressed_public_key))[0..4]`, interpreted big-endian.
pub fn fingerprint(compressed_public_key: &[u8]) -> [u8; 4] {
    let sha256 = Sha256::digest(compressed_public_key);
    let ripemd = Ripemd160::digest(sha256);
    let mut out = [0u8; 4];
    out.copy_from_slice(&ripemd[0..4]);
    out
}
