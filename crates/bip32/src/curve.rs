//! Uniform interface over the elliptic curves this crate derives keys on.
//!
//! [`Secp256k1Curve`] backs BIP-32; [`Ed25519Curve`] backs the SLIP-10
//! ed25519 profile. The derivation engine in [`crate::node`] is written
//! once against the [`Curve`] trait and never branches on curve identity
//! outside this module.

use crate::{Error, Result};
use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::scalar::Scalar as DalekScalar;
use ed25519_dalek::SigningKey;
use secp256k1::{PublicKey as Secp256k1PublicKey, Scalar as Secp256k1Scalar, SecretKey, SECP256K1};

/// Which elliptic curve a node's keys live on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Secp256k1,
    Ed25519,
}

/// The cryptographic operations the derivation engine needs from a curve.
///
/// Every method works over raw byte buffers rather than curve-specific
/// types, so [`crate::node::SLIP10Node`] can stay curve-agnostic and hold
/// a `&dyn Curve` (or the corresponding [`CurveKind`]) without generics
/// leaking into its public API.
pub trait Curve: Send + Sync {
    /// Human-readable curve name, used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Which [`CurveKind`] this implementation is.
    fn kind(&self) -> CurveKind;

    /// Length of an uncompressed public key, in bytes.
    fn public_key_len(&self) -> usize;

    /// Length of a compressed public key, in bytes.
    fn compressed_public_key_len(&self) -> usize;

    /// Whether this curve permits unhardened (public-parent) derivation.
    ///
    /// `false` for ed25519: there is no safe non-hardened child derivation
    /// defined by SLIP-10 for twisted Edwards curves.
    fn supports_unhardened_derivation(&self) -> bool;

    /// Whether `bytes` is a valid private scalar for this curve.
    fn is_valid_scalar(&self, bytes: &[u8]) -> bool;

    /// Computes the compressed public key for a private scalar.
    fn scalar_to_public_key(&self, scalar: &[u8]) -> Result<Vec<u8>>;

    /// `(scalar + tweak) mod n`. Secp256k1-only; ed25519 assigns the HMAC
    /// output directly as the child key and never calls this.
    fn private_add(&self, scalar: &[u8], tweak: &[u8]) -> Result<[u8; 32]>;

    /// Adds `tweak * G` to a compressed public key (BIP-32 public derivation).
    fn public_key_add(&self, point: &[u8], tweak: &[u8]) -> Result<Vec<u8>>;
}

/// The curve behind Bitcoin-style BIP-32 derivation.
#[derive(Debug, Clone, Copy, Default)]
pub struct Secp256k1Curve;

impl Curve for Secp256k1Curve {
    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Secp256k1
    }

    fn public_key_len(&self) -> usize {
        65
    }

    fn compressed_public_key_len(&self) -> usize {
        33
    }

    fn supports_unhardened_derivation(&self) -> bool {
        true
    }

    fn is_valid_scalar(&self, bytes: &[u8]) -> bool {
        bytes.len() == 32 && SecretKey::from_slice(bytes).is_ok()
    }

    fn scalar_to_public_key(&self, scalar: &[u8]) -> Result<Vec<u8>> {
        let secret = SecretKey::from_slice(scalar).map_err(|e| Error::InvalidPrivateKey {
            reason: e.to_string(),
        })?;
        Ok(secret.public_key(SECP256K1).serialize().to_vec())
    }

    fn private_add(&self, scalar: &[u8], tweak: &[u8]) -> Result<[u8; 32]> {
        if tweak.len() != 32 {
            return Err(Error::InvalidTweak);
        }
        let secret = SecretKey::from_slice(scalar).map_err(|e| Error::InvalidPrivateKey {
            reason: e.to_string(),
        })?;
        let tweak_scalar =
            Secp256k1Scalar::from_be_bytes(tweak.try_into().unwrap()).map_err(|_| Error::InvalidTweak)?;
        let added = secret.add_tweak(&tweak_scalar).map_err(|_| Error::KeyOverflow)?;
        Ok(added.secret_bytes())
    }

    fn public_key_add(&self, point: &[u8], tweak: &[u8]) -> Result<Vec<u8>> {
        if tweak.len() != 32 {
            return Err(Error::InvalidTweak);
        }
        let public = Secp256k1PublicKey::from_slice(point).map_err(|e| Error::InvalidPublicKey {
            reason: e.to_string(),
        })?;
        let tweak_scalar =
            Secp256k1Scalar::from_be_bytes(tweak.try_into().unwrap()).map_err(|_| Error::InvalidTweak)?;
        let added = public
            .add_exp_tweak(SECP256K1, &tweak_scalar)
            .map_err(|_| Error::InvalidCurvePoint)?;
        Ok(added.serialize().to_vec())
    }
}

/// The curve behind the SLIP-10 ed25519 profile.
///
/// Only hardened derivation is meaningful here: [`Curve::private_add`] and
/// [`Curve::public_key_add`] both return [`Error::UnsupportedCurveOperation`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519Curve;

impl Curve for Ed25519Curve {
    fn name(&self) -> &'static str {
        "ed25519"
    }

    fn kind(&self) -> CurveKind {
        CurveKind::Ed25519
    }

    fn public_key_len(&self) -> usize {
        32
    }

    fn compressed_public_key_len(&self) -> usize {
        32
    }

    fn supports_unhardened_derivation(&self) -> bool {
        false
    }

    fn is_valid_scalar(&self, bytes: &[u8]) -> bool {
        // Every 32-byte seed is a valid ed25519 private key; RFC 8032 clamping
        // guarantees a well-formed scalar regardless of the seed's value.
        bytes.len() == 32
    }

    fn scalar_to_public_key(&self, scalar: &[u8]) -> Result<Vec<u8>> {
        let seed: [u8; 32] = scalar.try_into().map_err(|_| Error::InvalidPrivateKey {
            reason: "ed25519 seed must be 32 bytes".to_string(),
        })?;
        let signing_key = SigningKey::from_bytes(&seed);
        Ok(signing_key.verifying_key().to_bytes().to_vec())
    }

    fn private_add(&self, _scalar: &[u8], _tweak: &[u8]) -> Result<[u8; 32]> {
        Err(Error::UnsupportedCurveOperation {
            reason: "ed25519 child keys are assigned directly from HMAC output, not added"
                .to_string(),
        })
    }

    fn public_key_add(&self, _point: &[u8], _tweak: &[u8]) -> Result<Vec<u8>> {
        Err(Error::UnsupportedCurveOperation {
            reason: "ed25519 does not support unhardened (public-parent) derivation".to_string(),
        })
    }
}

/// Validates that `bytes` decodes to a point on the ed25519 curve.
pub(crate) fn ed25519_decompress(bytes: &[u8]) -> Result<()> {
    let array: [u8; 32] = bytes.try_into().map_err(|_| Error::InvalidPublicKey {
        reason: "ed25519 public key must be 32 bytes".to_string(),
    })?;
    CompressedEdwardsY(array)
        .decompress()
        .map(|_| ())
        .ok_or(Error::InvalidCurvePoint)
}

/// Reduces arbitrary bytes into a canonical ed25519 scalar (used by callers
/// that need Curve25519 scalar arithmetic outside the derivation engine).
pub(crate) fn ed25519_scalar_from_bytes_mod_order_wide(bytes: &[u8; 64]) -> DalekScalar {
    DalekScalar::from_bytes_mod_order_wide(bytes)
}

/// Returns the [`Curve`] implementation for a [`CurveKind`].
pub fn curve_for(kind: CurveKind) -> &'static dyn Curve {
    match kind {
        CurveKind::Secp256k1 => &Secp256k1Curve,
        CurveKind::Ed25519 => &Ed25519Curve,
    }
}
