//! secp256k1 public key wrapper used by the extended-key (xprv/xpub) wire format.

use crate::{Error, PrivateKey, Result};
use secp256k1::{PublicKey as Secp256k1PublicKey, Scalar, SECP256K1};

/// A compressed secp256k1 public key, as carried inside an extended key.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    inner: Secp256k1PublicKey,
}

impl PublicKey {
    /// Compressed encoding length.
    pub const LENGTH: usize = 33;

    /// Derives the public key corresponding to a private key.
    pub fn from_private_key(private_key: &PrivateKey) -> Self {
        PublicKey {
            inner: private_key.secret_key().public_key(SECP256K1),
        }
    }

    /// Parses a compressed (33-byte) or uncompressed (65-byte) public key.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = Secp256k1PublicKey::from_slice(bytes).map_err(|e| Error::InvalidPublicKey {
            reason: e.to_string(),
        })?;
        Ok(PublicKey { inner })
    }

    /// Returns the compressed (33-byte) encoding.
    pub fn to_bytes(&self) -> [u8; 33] {
        self.inner.serialize()
    }

    /// Returns the uncompressed (65-byte, `0x04`-prefixed) encoding.
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        self.inner.serialize_uncompressed()
    }

    /// Adds `tweak * G` to this point (BIP-32 public derivation step).
    pub fn tweak_add(&self, tweak: &[u8]) -> Result<Self> {
        if tweak.len() != 32 {
            return Err(Error::InvalidTweak);
        }
        let scalar = Scalar::from_be_bytes(tweak.try_into().unwrap()).map_err(|_| Error::InvalidTweak)?;
        let inner = self
            .inner
            .add_exp_tweak(SECP256K1, &scalar)
            .map_err(|_| Error::InvalidCurvePoint)?;
        Ok(PublicKey { inner })
    }

    pub(crate) fn inner(&self) -> &Secp256k1PublicKey {
        &self.inner
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&hex::encode(self.to_bytes()))
            .finish()
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}
