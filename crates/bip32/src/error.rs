//! Error handling for BIP32/SLIP-10 hierarchical deterministic key operations.
//!
//! The main [`enum@Error`] covers seed validation, key validation, derivation,
//! extended-key serialization, and the underlying curve/cryptographic
//! libraries this crate delegates to.

use thiserror::Error;

/// Comprehensive error type for BIP32/SLIP-10 operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The provided seed has an invalid length.
    ///
    /// Both BIP32 and SLIP-10 require seeds between 128 and 512 bits (16-64 bytes).
    #[error("Invalid seed length: {length} bytes. Seed must be between 16 and 64 bytes")]
    InvalidSeedLength {
        /// The actual length of the invalid seed in bytes
        length: usize,
    },

    /// The provided private key data is invalid.
    #[error("Invalid private key: {reason}")]
    InvalidPrivateKey {
        /// Detailed reason why the private key is invalid
        reason: String,
    },

    /// The provided public key data is invalid.
    #[error("Invalid public key: {reason}")]
    InvalidPublicKey {
        /// Detailed reason why the public key is invalid
        reason: String,
    },

    /// The provided or derived chain code is invalid (wrong length or all-zero).
    #[error("Invalid chain code: {reason}")]
    InvalidChainCode {
        /// Detailed reason why the chain code is invalid
        reason: String,
    },

    /// A derived key resulted in a zero value.
    #[error("Derived key is zero (invalid)")]
    ZeroKey,

    /// A derived key value is greater than or equal to the curve order.
    #[error("Derived key exceeds curve order")]
    KeyOverflow,

    /// A tweak value passed to scalar addition is invalid (wrong length or `>= n`).
    #[error("Invalid tweak value for scalar addition")]
    InvalidTweak,

    /// The provided derivation path is invalid.
    ///
    /// Valid format: `"m/0'/1/2'/3"` where `'` indicates hardened derivation.
    #[error("Invalid derivation path '{path}': {reason}")]
    InvalidDerivationPath {
        /// The invalid path string
        path: String,
        /// Detailed reason why the path is invalid
        reason: String,
    },

    /// The provided child number is invalid.
    #[error("Invalid child number: {number}")]
    InvalidChildNumber {
        /// The invalid child number
        number: u64,
    },

    /// Attempted to derive a hardened child from a public-only key.
    #[error("Cannot perform hardened derivation (index {index}) from public key")]
    HardenedDerivationFromPublicKey {
        /// The hardened index that was attempted (>= 2^31)
        index: u32,
    },

    /// The derivation depth exceeds the maximum allowed depth (255).
    #[error("Maximum derivation depth exceeded: {depth}")]
    MaxDepthExceeded {
        /// The depth that was attempted
        depth: u8,
    },

    /// The BIP-32 index-advance retry loop exhausted its index space.
    #[error("Derivation exhausted the available child index space")]
    DerivationExhausted,

    /// The extended key string is invalid.
    #[error("Invalid extended key format: {reason}")]
    InvalidExtendedKey {
        /// Detailed reason why the extended key is invalid
        reason: String,
    },

    /// The extended key has an invalid checksum.
    #[error("Invalid checksum in extended key")]
    InvalidChecksum,

    /// The extended key has invalid version bytes.
    #[error("Invalid version bytes: expected {expected:#x}, got {got:#x}")]
    InvalidVersionBytes {
        /// The expected version bytes
        expected: u32,
        /// The actual version bytes found
        got: u32,
    },

    /// The public key point is not on the curve, or point addition hit infinity.
    #[error("Invalid elliptic curve point")]
    InvalidCurvePoint,

    /// An operation is not supported by the node's curve (e.g. unhardened
    /// derivation, or extended-key encoding, under ed25519).
    #[error("Unsupported operation for this curve: {reason}")]
    UnsupportedCurveOperation {
        /// Detailed reason the operation cannot proceed
        reason: String,
    },

    /// An unknown or mismatched specification/curve combination was requested.
    #[error("Invalid specification: {reason}")]
    InvalidSpecification {
        /// Detailed reason the specification is invalid
        reason: String,
    },

    /// Error from the secp256k1 cryptographic library.
    #[error("secp256k1 error: {message}")]
    Secp256k1Error {
        /// Error message from the secp256k1 crate
        message: String,
    },

    /// Error from the ed25519 cryptographic library.
    #[error("ed25519 error: {message}")]
    Ed25519Error {
        /// Error message from the ed25519-dalek crate
        message: String,
    },

    /// Error from the BIP39 library (mnemonic-to-seed conversion).
    #[error("BIP39 error: {0}")]
    Bip39Error(#[from] hdkey_bip39::Error),

    /// Base58 decoding error.
    #[error("Base58 decode error: {message}")]
    Base58DecodeError {
        /// Error message from the base58 decoder
        message: String,
    },
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::InvalidSeedLength { length: l1 }, Error::InvalidSeedLength { length: l2 }) => {
                l1 == l2
            }
            (Error::InvalidPrivateKey { reason: r1 }, Error::InvalidPrivateKey { reason: r2 }) => {
                r1 == r2
            }
            (Error::InvalidPublicKey { reason: r1 }, Error::InvalidPublicKey { reason: r2 }) => {
                r1 == r2
            }
            (Error::InvalidChainCode { reason: r1 }, Error::InvalidChainCode { reason: r2 }) => {
                r1 == r2
            }
            (Error::ZeroKey, Error::ZeroKey) => true,
            (Error::KeyOverflow, Error::KeyOverflow) => true,
            (Error::InvalidTweak, Error::InvalidTweak) => true,
            (
                Error::InvalidDerivationPath { path: p1, reason: r1 },
                Error::InvalidDerivationPath { path: p2, reason: r2 },
            ) => p1 == p2 && r1 == r2,
            (Error::InvalidChildNumber { number: n1 }, Error::InvalidChildNumber { number: n2 }) => {
                n1 == n2
            }
            (
                Error::HardenedDerivationFromPublicKey { index: i1 },
                Error::HardenedDerivationFromPublicKey { index: i2 },
            ) => i1 == i2,
            (Error::MaxDepthExceeded { depth: d1 }, Error::MaxDepthExceeded { depth: d2 }) => {
                d1 == d2
            }
            (Error::DerivationExhausted, Error::DerivationExhausted) => true,
            (Error::InvalidExtendedKey { reason: r1 }, Error::InvalidExtendedKey { reason: r2 }) => {
                r1 == r2
            }
            (Error::InvalidChecksum, Error::InvalidChecksum) => true,
            (
                Error::InvalidVersionBytes { expected: e1, got: g1 },
                Error::InvalidVersionBytes { expected: e2, got: g2 },
            ) => e1 == e2 && g1 == g2,
            (Error::InvalidCurvePoint, Error::InvalidCurvePoint) => true,
            (
                Error::UnsupportedCurveOperation { reason: r1 },
                Error::UnsupportedCurveOperation { reason: r2 },
            ) => r1 == r2,
            (
                Error::InvalidSpecification { reason: r1 },
                Error::InvalidSpecification { reason: r2 },
            ) => r1 == r2,
            (Error::Secp256k1Error { message: m1 }, Error::Secp256k1Error { message: m2 }) => {
                m1 == m2
            }
            (Error::Ed25519Error { message: m1 }, Error::Ed25519Error { message: m2 }) => {
                m1 == m2
            }
            (Error::Bip39Error(e1), Error::Bip39Error(e2)) => e1 == e2,
            (
                Error::Base58DecodeError { message: m1 },
                Error::Base58DecodeError { message: m2 },
            ) => m1 == m2,
            _ => false,
        }
    }
}

impl Eq for Error {}

impl From<secp256k1::Error> for Error {
    fn from(error: secp256k1::Error) -> Self {
        Error::Secp256k1Error {
            message: error.to_string(),
        }
    }
}

impl From<ed25519_dalek::SignatureError> for Error {
    fn from(error: ed25519_dalek::SignatureError) -> Self {
        Error::Ed25519Error {
            message: error.to_string(),
        }
    }
}

impl From<bs58::decode::Error> for Error {
    fn from(error: bs58::decode::Error) -> Self {
        Error::Base58DecodeError {
            message: error.to_string(),
        }
    }
}

/// Convenience alias for fallible BIP32/SLIP-10 operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_seed_length_error() {
        let error = Error::InvalidSeedLength { length: 10 };
        assert_eq!(
            error.to_string(),
            "Invalid seed length: 10 bytes. Seed must be between 16 and 64 bytes"
        );
    }

    #[test]
    fn test_error_equality() {
        let error1 = Error::InvalidSeedLength { length: 10 };
        let error2 = Error::InvalidSeedLength { length: 10 };
        let error3 = Error::InvalidSeedLength { length: 20 };

        assert_eq!(error1, error2);
        assert_ne!(error1, error3);
    }

    #[test]
    fn test_hardened_derivation_from_public_key_error() {
        let error = Error::HardenedDerivationFromPublicKey { index: 2147483648 };
        assert_eq!(
            error.to_string(),
            "Cannot perform hardened derivation (index 2147483648) from public key"
        );
    }

    #[test]
    fn test_unsupported_curve_operation_error() {
        let error = Error::UnsupportedCurveOperation {
            reason: "ed25519 does not support unhardened derivation".to_string(),
        };
        assert!(error.to_string().contains("ed25519"));
    }

    #[test]
    fn test_invalid_version_bytes_error() {
        let error = Error::InvalidVersionBytes {
            expected: 0x0488ADE4,
            got: 0x0488B21E,
        };
        assert!(error.to_string().contains("0x488ade4"));
        assert!(error.to_string().contains("0x488b21e"));
    }
}
