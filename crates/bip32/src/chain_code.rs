//! The 32-byte chain code that accompanies every BIP-32/SLIP-10 key.

use crate::{Error, Result};
use zeroize::Zeroize;

/// A 32-byte chain code.
///
/// Not secret on its own, but combined with a private key it lets an
/// attacker derive every hardened-free descendant, so it is zeroized on
/// drop along with the keys it travels with.
#[derive(Clone, PartialEq, Eq)]
pub struct ChainCode([u8; 32]);

impl ChainCode {
    pub const LENGTH: usize = 32;

    /// Wraps a 32-byte array directly.
    pub fn new(bytes: [u8; 32]) -> Self {
        ChainCode(bytes)
    }

    /// Parses a chain code from a byte slice, requiring exactly 32 bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::InvalidChainCode {
                reason: format!("expected {} bytes, got {}", Self::LENGTH, bytes.len()),
            });
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(bytes);
        Ok(ChainCode(array))
    }

    /// Returns the raw bytes.
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl std::fmt::Debug for ChainCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ChainCode").field(&"[REDACTED]").finish()
    }
}

impl Drop for ChainCode {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
