//! Private key implementation for BIP32 hierarchical deterministic wallets.
//!
//! This module provides a wrapper around secp256k1 private keys for use in
//! BIP32 extended key derivation.

use crate::{Error, Result};
use secp256k1::{scalar::Scalar, PublicKey as Secp256k1PublicKey, SecretKey, SECP256K1};
use zeroize::Zeroize;

/// A 32-byte secp256k1 private key used in BIP32 hierarchical deterministic wallets.
///
/// Private keys are scalar values on the secp256k1 elliptic curve. They must be
/// non-zero and less than the curve order to be valid.
///
/// # Security
///
/// Private keys must be kept secret. Anyone with access to a private key can
/// spend funds and derive child keys. Always store private keys securely and
/// never expose them in logs or error messages.
///
/// This type implements `Drop` to securely zeroize memory when the key is dropped.
///
/// # Examples
///
/// ```rust
/// use hdkey_bip32::PrivateKey;
///
/// // Create from raw bytes
/// let bytes = [1u8; 32];
/// let private_key = PrivateKey::from_bytes(&bytes)?;
///
/// // Get the bytes back
/// let key_bytes = private_key.to_bytes();
/// assert_eq!(key_bytes.len(), 32);
/// # Ok::<(), hdkey_bip32::Error>(())
/// ```
#[derive(Clone)]
pub struct PrivateKey {
    /// The underlying secp256k1 secret key
    inner: SecretKey,
}

impl PrivateKey {
    /// The length of a private key in bytes.
    pub const LENGTH: usize = 32;

    /// Creates a new `PrivateKey` from a secp256k1 `SecretKey`.
    ///
    /// # Arguments
    ///
    /// * `secret_key` - A valid secp256k1 secret key
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    /// use secp256k1::SecretKey;
    ///
    /// let secret_key = SecretKey::from_slice(&[1u8; 32]).unwrap();
    /// let private_key = PrivateKey::new(secret_key);
    /// ```
    pub fn new(secret_key: SecretKey) -> Self {
        PrivateKey { inner: secret_key }
    }

    /// Creates a `PrivateKey` from a byte slice.
    ///
    /// # Arguments
    ///
    /// * `bytes` - A byte slice that must be exactly 32 bytes and represent a valid
    ///   secp256k1 private key (non-zero and less than the curve order)
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrivateKey`] if:
    /// - The slice is not exactly 32 bytes
    /// - The bytes represent an invalid secp256k1 key (zero or >= curve order)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// // Valid key
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_bytes(&bytes)?;
    ///
    /// // Invalid length
    /// let invalid = [0u8; 16];
    /// assert!(PrivateKey::from_bytes(&invalid).is_err());
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != Self::LENGTH {
            return Err(Error::InvalidPrivateKey {
                reason: format!(
                    "Private key must be {} bytes, got {}",
                    Self::LENGTH,
                    bytes.len()
                ),
            });
        }

        let secret_key = SecretKey::from_slice(bytes).map_err(|e| Error::InvalidPrivateKey {
            reason: format!("Invalid secp256k1 private key: {}", e),
        })?;

        Ok(PrivateKey { inner: secret_key })
    }

    /// Creates a `PrivateKey` from a 32-byte array.
    ///
    /// # Arguments
    ///
    /// * `bytes` - A 32-byte array representing a valid secp256k1 private key
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrivateKey`] if the bytes represent an invalid
    /// secp256k1 key (zero or >= curve order)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_array(bytes)?;
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn from_array(bytes: [u8; 32]) -> Result<Self> {
        Self::from_bytes(&bytes)
    }

    /// Returns the private key as a 32-byte array.
    ///
    /// # Security Warning
    ///
    /// The returned bytes are secret key material. Handle with care and avoid
    /// logging or exposing them.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_bytes(&bytes)?;
    /// let key_bytes = private_key.to_bytes();
    /// assert_eq!(key_bytes.len(), 32);
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn to_bytes(&self) -> [u8; 32] {
        self.inner.secret_bytes()
    }

    /// Returns a reference to the underlying secp256k1 `SecretKey`.
    ///
    /// This is useful for performing secp256k1 operations directly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_bytes(&bytes)?;
    /// let secret_key = private_key.secret_key();
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn secret_key(&self) -> &SecretKey {
        &self.inner
    }

    /// Derives the corresponding secp256k1 public key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_bytes(&bytes)?;
    /// let public_key = private_key.public_key();
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn public_key(&self) -> Secp256k1PublicKey {
        Secp256k1PublicKey::from_secret_key(SECP256K1, &self.inner)
    }

    /// Adds a scalar value to this private key (for BIP32 child key derivation).
    ///
    /// This performs the operation: `new_key = (self + tweak) mod n` where `n` is
    /// the secp256k1 curve order. This is a core operation in BIP32 child key derivation.
    ///
    /// # Arguments
    ///
    /// * `tweak` - A 32-byte scalar value to add to this key
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPrivateKey`] if:
    /// - The tweak is not exactly 32 bytes
    /// - The resulting key would be invalid (>= curve order)
    ///
    /// Returns [`Error::KeyOverflow`] if the addition results in an invalid key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hdkey_bip32::PrivateKey;
    ///
    /// let bytes = [1u8; 32];
    /// let private_key = PrivateKey::from_bytes(&bytes)?;
    ///
    /// let tweak = [2u8; 32];
    /// let derived_key = private_key.tweak_add(&tweak)?;
    /// # Ok::<(), hdkey_bip32::Error>(())
    /// ```
    pub fn tweak_add(&self, tweak: &[u8]) -> Result<Self> {
        if tweak.len() != 32 {
            return Err(Error::InvalidPrivateKey {
                reason: format!("Tweak must be 32 bytes, got {}", tweak.len()),
            });
        }

        // Convert tweak bytes to Scalar
        let mut tweak_array = [0u8; 32];
        tweak_array.copy_from_slice(tweak);
        let scalar = Scalar::from_be_bytes(tweak_array).map_err(|_| Error::InvalidPrivateKey {
            reason: "Invalid tweak scalar".to_string(),
        })?;

        let tweaked = self.inner.add_tweak(&scalar)
            .map_err(|_| Error::KeyOverflow)?;

        Ok(PrivateKey { inner: tweaked })
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        self.inner.secret_bytes() == other.inner.secret_bytes()
    }
}

impl Eq for PrivateKey {}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl From<SecretKey> for PrivateKey {
    fn from(secret_key: SecretKey) -> Self {
        PrivateKey::new(secret_key)
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        PrivateKey::from_bytes(bytes)
    }
}

impl TryFrom<[u8; 32]> for PrivateKey {
    type Error = Error;

    fn try_from(bytes: [u8; 32]) -> Result<Self> {
        PrivateKey::from_array(bytes)
    }
}

impl Drop for PrivateKey {
    fn drop(&mut self) {
        // Zeroize the secret key bytes when dropping
        let mut bytes = self.inner.secret_bytes();
        bytes.zeroize();
    }
}
