//! The canonical hierarchical-deterministic node: [`SLIP10Node`].
//!
//! A node is the single internal representation both BIP-32 (secp256k1)
//! and SLIP-10 (secp256k1 or ed25519) derivation produce and consume. It
//! holds either a private key (from which the public key follows) or only
//! a public key, modeled as [`Key`] rather than two optional fields, so a
//! public-only node cannot be asked to derive a hardened child without
//! going through a `Result`.

use crate::child_number::ChildNumber;
use crate::codec::{self, base58check_decode, base58check_encode};
use crate::curve::{curve_for, Curve, CurveKind};
use crate::network::{KeyType, Network};
use crate::{Error, Result};
use hmac::{Hmac, Mac};
use sha2::Sha512;
use sha3::{Digest, Keccak256};
use tracing::debug;
use zeroize::Zeroize;

type HmacSha512 = Hmac<Sha512>;

const MASTER_HMAC_KEY_SECP256K1: &[u8] = b"Bitcoin seed";
const MASTER_HMAC_KEY_ED25519: &[u8] = b"ed25519 seed";
const MAX_DEPTH: u8 = 255;

/// Which derivation algorithm produced (or governs derivation from) a node.
///
/// Ed25519 only ever appears paired with `Slip10`; the BIP-32 retry rule
/// (advance the index) does not apply to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Specification {
    Bip32,
    Slip10,
}

/// A node's key material: either a private key (public key follows from it)
/// or only a public key.
#[derive(Clone)]
pub enum Key {
    Private { private: Vec<u8>, public: Vec<u8> },
    Public { public: Vec<u8> },
}

impl Key {
    fn public(&self) -> &[u8] {
        match self {
            Key::Private { public, .. } => public,
            Key::Public { public } => public,
        }
    }

    fn private(&self) -> Option<&[u8]> {
        match self {
            Key::Private { private, .. } => Some(private),
            Key::Public { .. } => None,
        }
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        if let Key::Private { private, .. } = self {
            private.zeroize();
        }
    }
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Private { .. } => f.write_str("Key::Private([REDACTED])"),
            Key::Public { public } => f
                .debug_struct("Key::Public")
                .field("public", &hex::encode(public))
                .finish(),
        }
    }
}

/// A JSON-compatible plain record of a node's fields. Binary key/chain-code
/// material is hex-encoded; fingerprints are plain non-negative integers,
/// matching their `u32` internal representation. Produced by
/// [`SLIP10Node::to_record`]; never round-tripped back into a node, since
/// that would let a deserialized record silently smuggle a private key
/// through a path that skips construction validation.
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "camelCase")
)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRecord {
    pub depth: u8,
    pub master_fingerprint: Option<u32>,
    pub parent_fingerprint: u32,
    pub index: u32,
    pub private_key: Option<String>,
    pub public_key: String,
    pub chain_code: String,
}

/// The canonical hierarchical-deterministic node.
#[derive(Debug, Clone)]
pub struct SLIP10Node {
    curve: CurveKind,
    specification: Specification,
    depth: u8,
    index: u32,
    parent_fingerprint: u32,
    master_fingerprint: Option<u32>,
    chain_code: [u8; 32],
    key: Key,
}

impl SLIP10Node {
    /// Derives a master node from a raw seed (16-64 bytes).
    pub fn from_seed(seed: &[u8], curve: CurveKind, specification: Specification) -> Result<Self> {
        if curve == CurveKind::Ed25519 && specification != Specification::Slip10 {
            return Err(Error::InvalidSpecification {
                reason: "ed25519 requires the slip10 specification".to_string(),
            });
        }
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidSeedLength { length: seed.len() });
        }

        let hmac_key = match curve {
            CurveKind::Secp256k1 => MASTER_HMAC_KEY_SECP256K1,
            CurveKind::Ed25519 => MASTER_HMAC_KEY_ED25519,
        };

        let curve_impl = curve_for(curve);
        let mut mac = HmacSha512::new_from_slice(hmac_key).expect("HMAC accepts any key length");
        mac.update(seed);
        let mut i = mac.finalize().into_bytes();

        loop {
            let (il, ir) = i.split_at(32);
            if curve_impl.is_valid_scalar(il) {
                let public = curve_impl.scalar_to_public_key(il)?;
                let mut chain_code = [0u8; 32];
                chain_code.copy_from_slice(ir);

                let mut node = SLIP10Node {
                    curve,
                    specification,
                    depth: 0,
                    index: 0,
                    parent_fingerprint: 0,
                    master_fingerprint: None,
                    chain_code,
                    key: Key::Private {
                        private: il.to_vec(),
                        public,
                    },
                };
                let own_fingerprint = node.fingerprint();
                node.master_fingerprint = Some(own_fingerprint);
                debug!(curve = curve_impl.name(), ?specification, "derived master node");
                return Ok(node);
            }

            match specification {
                Specification::Bip32 => {
                    return Err(Error::InvalidPrivateKey {
                        reason: "master key derived from seed is invalid (astronomically rare); retry with a different seed".to_string(),
                    })
                }
                Specification::Slip10 => {
                    let mut mac =
                        HmacSha512::new_from_slice(hmac_key).expect("HMAC accepts any key length");
                    mac.update(&i);
                    i = mac.finalize().into_bytes();
                }
            }
        }
    }

    /// Derives a master node from a BIP-39 seed phrase.
    pub fn from_mnemonic(
        mnemonic: &hdkey_bip39::Mnemonic,
        passphrase: &str,
        curve: CurveKind,
        specification: Specification,
    ) -> Result<Self> {
        let seed = mnemonic.to_seed(passphrase);
        Self::from_seed(&seed, curve, specification)
    }

    /// Parses a secp256k1 extended key (xprv/xpub/tprv/tpub) string.
    ///
    /// Extended keys are a BIP-32/secp256k1-only wire format; SLIP-10
    /// ed25519 nodes have no extended-key representation.
    pub fn from_extended_key_str(s: &str) -> Result<Self> {
        let data = base58check_decode(s)?;
        if data.len() != 78 {
            return Err(Error::InvalidExtendedKey {
                reason: format!("expected 78 bytes, got {}", data.len()),
            });
        }

        let version = codec::u32_from_be(&data[0..4].try_into().unwrap());
        let (_network, key_type) = Network::from_version_bytes(version).ok_or_else(|| {
            Error::InvalidVersionBytes {
                expected: 0x0488ADE4,
                got: version,
            }
        })?;

        let depth = data[4];
        let parent_fingerprint = codec::u32_from_be(&data[5..9].try_into().unwrap());
        let index = codec::u32_from_be(&data[9..13].try_into().unwrap());
        let chain_code: [u8; 32] = data[13..45].try_into().unwrap();
        if chain_code == [0u8; 32] {
            return Err(Error::InvalidChainCode {
                reason: "chain code must not be all-zero".to_string(),
            });
        }
        let key_payload = &data[45..78];

        let curve_impl = curve_for(CurveKind::Secp256k1);
        let key = match key_type {
            KeyType::Private => {
                if key_payload[0] != 0x00 {
                    return Err(Error::InvalidExtendedKey {
                        reason: "private key payload must start with 0x00".to_string(),
                    });
                }
                let scalar = &key_payload[1..33];
                if !curve_impl.is_valid_scalar(scalar) {
                    return Err(Error::InvalidPrivateKey {
                        reason: "scalar is zero or exceeds curve order".to_string(),
                    });
                }
                let public = curve_impl.scalar_to_public_key(scalar)?;
                Key::Private {
                    private: scalar.to_vec(),
                    public,
                }
            }
            KeyType::Public => {
                if key_payload[0] != 0x02 && key_payload[0] != 0x03 {
                    return Err(Error::InvalidExtendedKey {
                        reason: "public key payload must start with 0x02 or 0x03".to_string(),
                    });
                }
                Key::Public {
                    public: key_payload.to_vec(),
                }
            }
        };

        Ok(SLIP10Node {
            curve: CurveKind::Secp256k1,
            specification: Specification::Bip32,
            depth,
            index,
            parent_fingerprint,
            master_fingerprint: None,
            chain_code,
            key,
        })
    }

    /// Serializes this node to its Base58Check extended-key string.
    ///
    /// Only defined for secp256k1 nodes; SLIP-10 ed25519 nodes return
    /// [`Error::UnsupportedCurveOperation`].
    pub fn to_extended_key_string(&self, network: Network) -> Result<String> {
        if self.curve != CurveKind::Secp256k1 {
            return Err(Error::UnsupportedCurveOperation {
                reason: "extended keys are only defined for secp256k1 nodes".to_string(),
            });
        }

        let key_type = if self.key.private().is_some() {
            KeyType::Private
        } else {
            KeyType::Public
        };

        let mut payload = Vec::with_capacity(78);
        payload.extend_from_slice(&codec::u32_be(network.version_bytes(key_type)));
        payload.push(self.depth);
        payload.extend_from_slice(&codec::u32_be(self.parent_fingerprint));
        payload.extend_from_slice(&codec::u32_be(self.index));
        payload.extend_from_slice(&self.chain_code);

        match key_type {
            KeyType::Private => {
                payload.push(0x00);
                payload.extend_from_slice(self.key.private().unwrap());
            }
            KeyType::Public => {
                payload.extend_from_slice(self.key.public());
            }
        }

        Ok(base58check_encode(&payload))
    }

    /// Returns a public-only copy of this node.
    pub fn neuter(&self) -> Self {
        SLIP10Node {
            curve: self.curve,
            specification: self.specification,
            depth: self.depth,
            index: self.index,
            parent_fingerprint: self.parent_fingerprint,
            master_fingerprint: self.master_fingerprint,
            chain_code: self.chain_code,
            key: Key::Public {
                public: self.key.public().to_vec(),
            },
        }
    }

    /// Derives a single child at `child_number`.
    pub fn derive_child(&self, child_number: ChildNumber) -> Result<Self> {
        if self.depth == MAX_DEPTH {
            return Err(Error::MaxDepthExceeded { depth: MAX_DEPTH });
        }
        if child_number.is_hardened() && self.key.private().is_none() {
            return Err(Error::HardenedDerivationFromPublicKey {
                index: child_number.to_index(),
            });
        }
        if !child_number.is_hardened() && !curve_for(self.curve).supports_unhardened_derivation() {
            return Err(Error::UnsupportedCurveOperation {
                reason: format!("{} does not support unhardened derivation", self.curve_name()),
            });
        }

        let curve_impl = curve_for(self.curve);
        let parent_fingerprint = self.fingerprint();
        let mut index = child_number.to_index();

        let mut extension = self.build_extension(index)?;
        let mut mac = HmacSha512::new_from_slice(&self.chain_code).expect("HMAC accepts any key");
        mac.update(&extension);
        let mut i = mac.finalize().into_bytes();

        loop {
            let (il, ir) = i.split_at(32);

            let result = if let Some(private) = self.key.private() {
                if curve_impl.is_valid_scalar(il) {
                    let child_private = match self.curve {
                        CurveKind::Ed25519 => il.to_vec(),
                        CurveKind::Secp256k1 => curve_impl.private_add(private, il)?.to_vec(),
                    };
                    if child_private.iter().all(|&b| b == 0) {
                        None
                    } else {
                        let public = curve_impl.scalar_to_public_key(&child_private)?;
                        Some(Key::Private {
                            private: child_private,
                            public,
                        })
                    }
                } else {
                    None
                }
            } else if curve_impl.is_valid_scalar(il) {
                match curve_impl.public_key_add(self.key.public(), il) {
                    Ok(public) => Some(Key::Public { public }),
                    Err(_) => None,
                }
            } else {
                None
            };

            if let Some(key) = result {
                let mut chain_code = [0u8; 32];
                chain_code.copy_from_slice(ir);
                debug!(depth = self.depth + 1, index, "derived child node");
                return Ok(SLIP10Node {
                    curve: self.curve,
                    specification: self.specification,
                    depth: self.depth + 1,
                    index,
                    parent_fingerprint,
                    master_fingerprint: self.master_fingerprint,
                    chain_code,
                    key,
                });
            }

            match self.specification {
                Specification::Bip32 => {
                    index = index
                        .checked_add(1)
                        .ok_or(Error::DerivationExhausted)?;
                    extension = self.build_extension(index)?;
                    let mut mac =
                        HmacSha512::new_from_slice(&self.chain_code).expect("HMAC accepts any key");
                    mac.update(&extension);
                    i = mac.finalize().into_bytes();
                }
                Specification::Slip10 => {
                    let mut mac =
                        HmacSha512::new_from_slice(&self.chain_code).expect("HMAC accepts any key");
                    mac.update([0x01]);
                    mac.update(ir);
                    mac.update(codec::u32_be(index));
                    i = mac.finalize().into_bytes();
                }
            }
        }
    }

    /// Derives through a sequence of child numbers, left to right.
    pub fn derive(&self, path: &[ChildNumber]) -> Result<Self> {
        let mut node = self.clone();
        for &child in path {
            node = node.derive_child(child)?;
        }
        Ok(node)
    }

    fn build_extension(&self, index: u32) -> Result<Vec<u8>> {
        let hardened = index & ChildNumber::HARDENED_BIT != 0;
        let mut extension = Vec::with_capacity(37);
        if hardened {
            let private = self.key.private().ok_or(Error::HardenedDerivationFromPublicKey { index })?;
            extension.push(0x00);
            extension.extend_from_slice(private);
        } else {
            extension.extend_from_slice(self.key.public());
        }
        extension.extend_from_slice(&codec::u32_be(index));
        Ok(extension)
    }

    fn curve_name(&self) -> &'static str {
        curve_for(self.curve).name()
    }

    pub fn curve(&self) -> CurveKind {
        self.curve
    }

    pub fn specification(&self) -> Specification {
        self.specification
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn is_hardened(&self) -> bool {
        self.index & ChildNumber::HARDENED_BIT != 0
    }

    pub fn parent_fingerprint(&self) -> u32 {
        self.parent_fingerprint
    }

    pub fn master_fingerprint(&self) -> Option<u32> {
        self.master_fingerprint
    }

    pub fn chain_code_hex(&self) -> String {
        hex::encode(self.chain_code)
    }

    pub fn private_key_hex(&self) -> Option<String> {
        self.key.private().map(hex::encode)
    }

    /// Uncompressed public key, hex-encoded (65 bytes, `0x04`-prefixed, for
    /// secp256k1). ed25519 has no distinct uncompressed point encoding, so
    /// this returns the same 32-byte form as [`Self::compressed_public_key_hex`].
    pub fn public_key_hex(&self) -> String {
        match self.curve {
            CurveKind::Secp256k1 => {
                let public = crate::PublicKey::from_bytes(self.key.public())
                    .expect("node always holds a valid secp256k1 public key");
                hex::encode(public.to_uncompressed_bytes())
            }
            CurveKind::Ed25519 => hex::encode(self.key.public()),
        }
    }

    /// Compressed public key, hex-encoded (33 bytes for secp256k1, the
    /// canonical 32-byte point for ed25519).
    pub fn compressed_public_key_hex(&self) -> String {
        hex::encode(self.key.public())
    }

    /// `RIPEMD160(SHA256(compressed_public_key))[0..4]`, as a big-endian `u32`.
    ///
    /// For ed25519 the "compressed" public key is already a 32-byte point,
    /// which is used in place of a secp256k1-compressed key.
    pub fn fingerprint(&self) -> u32 {
        codec::u32_from_be(&codec::fingerprint(self.key.public()))
    }

    /// Derives the Ethereum address (last 20 bytes of Keccak-256 of the
    /// uncompressed public key, minus its `0x04` prefix). Secp256k1-only.
    pub fn ethereum_address(&self) -> Result<String> {
        if self.curve != CurveKind::Secp256k1 {
            return Err(Error::UnsupportedCurveOperation {
                reason: "Ethereum addresses are only defined for secp256k1 keys".to_string(),
            });
        }
        let public = crate::PublicKey::from_bytes(self.key.public())?;
        let uncompressed = public.to_uncompressed_bytes();
        let hash = Keccak256::digest(&uncompressed[1..]);
        Ok(format!("0x{}", hex::encode(&hash[12..])))
    }

    /// A JSON-compatible plain record of this node, all binary fields hex-encoded.
    pub fn to_record(&self) -> NodeRecord {
        NodeRecord {
            depth: self.depth,
            master_fingerprint: self.master_fingerprint,
            parent_fingerprint: self.parent_fingerprint,
            index: self.index,
            private_key: self.private_key_hex(),
            public_key: self.public_key_hex(),
            chain_code: self.chain_code_hex(),
        }
    }
}
