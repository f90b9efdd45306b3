//! Extended public key implementation for BIP32 hierarchical deterministic wallets.
//!
//! This module provides the ExtendedPublicKey type which combines a public key
//! with metadata necessary for hierarchical key derivation according to BIP-32.

use crate::codec::{self, base58check_decode, base58check_encode};
use crate::network::KeyType;
use crate::{ChainCode, ChildNumber, Error, Network, PublicKey, Result};

/// An extended public key for BIP32 hierarchical deterministic wallets.
///
/// Extended public keys combine a public key with additional metadata required for
/// hierarchical key derivation. Unlike extended private keys, extended public keys
/// can only derive non-hardened (normal) child keys.
///
/// # Structure
///
/// An extended public key contains:
/// - **Public Key**: The 33-byte compressed secp256k1 public key
/// - **Chain Code**: 32 bytes of entropy used in child key derivation
/// - **Depth**: The depth in the derivation tree (0 for master, 1 for level-1, etc.)
/// - **Parent Fingerprint**: First 4 bytes of parent public key hash (for identification)
/// - **Child Number**: The index of this key in its parent's children
/// - **Network**: The network this key is for (mainnet, testnet, etc.)
///
/// # Serialization Format
///
/// Extended public keys serialize to 78 bytes before Base58Check encoding:
/// ```text
/// [4 bytes]  version        (network-dependent, e.g., 0x0488B21E for mainnet)
/// [1 byte]   depth          (0x00 for master)
/// [4 bytes]  fingerprint    (0x00000000 for master)
/// [4 bytes]  child_number   (0x00000000 for master)
/// [32 bytes] chain_code     (entropy for derivation)
/// [33 bytes] key_data       (33-byte compressed public key)
/// ```
///
/// After Base58Check encoding, this becomes the familiar `xpub...` or `tpub...` string.
///
/// # Limitations
///
/// Extended public keys can only derive **normal (non-hardened)** child keys.
/// Hardened derivation requires the private key and cannot be performed with
/// only the public key. This is a security feature of BIP-32.
#[derive(Clone, PartialEq, Eq)]
pub struct ExtendedPublicKey {
    network: Network,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: ChildNumber,
    chain_code: ChainCode,
    public_key: PublicKey,
}

impl ExtendedPublicKey {
    /// The maximum allowed depth in the derivation tree.
    pub const MAX_DEPTH: u8 = 255;

    /// Creates a new `ExtendedPublicKey`.
    pub fn new(
        network: Network,
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: ChildNumber,
        chain_code: ChainCode,
        public_key: PublicKey,
    ) -> Self {
        ExtendedPublicKey {
            network,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            public_key,
        }
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    pub fn parent_fingerprint(&self) -> &[u8; 4] {
        &self.parent_fingerprint
    }

    pub fn child_number(&self) -> ChildNumber {
        self.child_number
    }

    pub fn chain_code(&self) -> &ChainCode {
        &self.chain_code
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// `RIPEMD160(SHA256(compressed_public_key))[0..4]`, used as the parent
    /// fingerprint of any child derived from this key.
    pub fn fingerprint(&self) -> [u8; 4] {
        codec::fingerprint(&self.public_key.to_bytes())
    }

    /// Derives a normal (non-hardened) child public key.
    ///
    /// Returns [`Error::HardenedDerivationFromPublicKey`] if `child` is hardened.
    pub fn derive_child(&self, child: ChildNumber) -> Result<Self> {
        if child.is_hardened() {
            return Err(Error::HardenedDerivationFromPublicKey {
                index: child.to_index(),
            });
        }
        if self.depth == Self::MAX_DEPTH {
            return Err(Error::MaxDepthExceeded { depth: Self::MAX_DEPTH });
        }

        let mut extension = Vec::with_capacity(37);
        extension.extend_from_slice(&self.public_key.to_bytes());
        extension.extend_from_slice(&codec::u32_be(child.to_index()));

        use hmac::{Hmac, Mac};
        use sha2::Sha512;
        let mut mac = Hmac::<Sha512>::new_from_slice(self.chain_code.as_bytes())
            .expect("HMAC accepts any key length");
        mac.update(&extension);
        let i = mac.finalize().into_bytes();
        let (il, ir) = i.split_at(32);

        let child_public = self.public_key.tweak_add(il)?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);

        Ok(ExtendedPublicKey {
            network: self.network,
            depth: self.depth + 1,
            parent_fingerprint: self.fingerprint(),
            child_number: child,
            chain_code: ChainCode::new(chain_code),
            public_key: child_public,
        })
    }

    /// Serializes this key to its Base58Check `xpub`/`tpub` string.
    pub fn to_extended_key_string(&self) -> String {
        let mut payload = Vec::with_capacity(78);
        payload.extend_from_slice(&codec::u32_be(self.network.version_bytes(KeyType::Public)));
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&codec::u32_be(self.child_number.to_index()));
        payload.extend_from_slice(self.chain_code.as_bytes());
        payload.extend_from_slice(&self.public_key.to_bytes());
        base58check_encode(&payload)
    }

    /// Parses an `xpub`/`tpub` Base58Check string.
    pub fn from_extended_key_str(s: &str) -> Result<Self> {
        let data = base58check_decode(s)?;
        if data.len() != 78 {
            return Err(Error::InvalidExtendedKey {
                reason: format!("expected 78 bytes, got {}", data.len()),
            });
        }

        let version = codec::u32_from_be(&data[0..4].try_into().unwrap());
        let (network, key_type) = Network::from_version_bytes(version).ok_or(
            Error::InvalidVersionBytes {
                expected: Network::BitcoinMainnet.version_bytes(KeyType::Public),
                got: version,
            },
        )?;
        if key_type != KeyType::Public {
            return Err(Error::InvalidVersionBytes {
                expected: network.version_bytes(KeyType::Public),
                got: version,
            });
        }

        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let child_number = ChildNumber::from_index(codec::u32_from_be(&data[9..13].try_into().unwrap()));
        let chain_code = ChainCode::from_bytes(&data[13..45])?;
        let public_key = PublicKey::from_bytes(&data[45..78])?;

        Ok(ExtendedPublicKey {
            network,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            public_key,
        })
    }
}

impl std::fmt::Display for ExtendedPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_extended_key_string())
    }
}

impl std::str::FromStr for ExtendedPublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extended_key_str(s)
    }
}

impl std::fmt::Debug for ExtendedPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedPublicKey")
            .field("network", &self.network)
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number)
            .field("chain_code", &hex::encode(self.chain_code.as_bytes()))
            .field("public_key", &self.public_key)
            .finish()
    }
}
