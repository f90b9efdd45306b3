//! Extended private key implementation for BIP32 hierarchical deterministic wallets.
//!
//! This module provides the [`ExtendedPrivateKey`] type: a secp256k1 private
//! key bundled with the chain code and tree-position metadata BIP-32 needs
//! to derive an entire wallet from a single seed.

use crate::codec::{self, base58check_decode, base58check_encode};
use crate::network::KeyType;
use crate::{
    ChainCode, ChildNumber, DerivationPath, Error, ExtendedPublicKey, Network, PrivateKey,
    PublicKey, Result,
};
use hmac::{Hmac, Mac};
use sha2::Sha512;

type HmacSha512 = Hmac<Sha512>;

const MASTER_HMAC_KEY: &[u8] = b"Bitcoin seed";

/// An extended private key for BIP32 hierarchical deterministic wallets.
///
/// Bundles a secp256k1 private key with the chain code and tree-position
/// metadata (depth, parent fingerprint, child number) needed to derive
/// further children and to serialize to the familiar `xprv`/`tprv` format.
///
/// # Examples
///
/// ```rust
/// use hdkey_bip32::{ExtendedPrivateKey, Network};
///
/// let seed = [0u8; 64];
/// let master = ExtendedPrivateKey::from_seed(&seed, Network::BitcoinMainnet)?;
/// let account = master.derive_path(&"m/44'/0'/0'".parse()?)?;
/// assert_eq!(account.depth(), 3);
/// # Ok::<(), hdkey_bip32::Error>(())
/// ```
#[derive(Clone)]
pub struct ExtendedPrivateKey {
    network: Network,
    depth: u8,
    parent_fingerprint: [u8; 4],
    child_number: ChildNumber,
    chain_code: ChainCode,
    private_key: PrivateKey,
}

impl ExtendedPrivateKey {
    /// The maximum allowed depth in the derivation tree.
    pub const MAX_DEPTH: u8 = 255;

    /// Builds a master extended private key directly from its parts.
    pub fn new(
        network: Network,
        depth: u8,
        parent_fingerprint: [u8; 4],
        child_number: ChildNumber,
        chain_code: ChainCode,
        private_key: PrivateKey,
    ) -> Self {
        ExtendedPrivateKey {
            network,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            private_key,
        }
    }

    /// Derives the master extended private key from a raw seed (16-64 bytes).
    pub fn from_seed(seed: &[u8], network: Network) -> Result<Self> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(Error::InvalidSeedLength { length: seed.len() });
        }

        let mut mac = HmacSha512::new_from_slice(MASTER_HMAC_KEY)
            .expect("HMAC accepts any key length");
        mac.update(seed);
        let i = mac.finalize().into_bytes();
        let (il, ir) = i.split_at(32);

        let private_key = PrivateKey::from_bytes(il)?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(ir);

        Ok(ExtendedPrivateKey {
            network,
            depth: 0,
            parent_fingerprint: [0, 0, 0, 0],
            child_number: ChildNumber::Normal(0),
            chain_code: ChainCode::new(chain_code),
            private_key,
        })
    }

    /// Derives the master extended private key from a BIP-39 mnemonic.
    pub fn from_mnemonic(
        mnemonic: &hdkey_bip39::Mnemonic,
        passphrase: Option<&str>,
        network: Network,
    ) -> Result<Self> {
        let seed = mnemonic.to_seed(passphrase.unwrap_or(""));
        Self::from_seed(&seed, network)
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

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// The public key corresponding to this private key.
    pub fn public_key(&self) -> PublicKey {
        PublicKey::from_private_key(&self.private_key)
    }

    /// `RIPEMD160(SHA256(compressed_public_key))[0..4]`, used as the parent
    /// fingerprint of any child derived from this key.
    pub fn fingerprint(&self) -> [u8; 4] {
        codec::fingerprint(&self.public_key().to_bytes())
    }

    /// Derives the corresponding extended public key (watch-only, normal-derivation-only).
    pub fn to_extended_public_key(&self) -> ExtendedPublicKey {
        ExtendedPublicKey::new(
            self.network,
            self.depth,
            self.parent_fingerprint,
            self.child_number,
            self.chain_code.clone(),
            self.public_key(),
        )
    }

    /// Derives a single child key (CKDpriv), per BIP-32.
    ///
    /// When the HMAC output yields an invalid scalar or a zero child key
    /// (astronomically rare), retries by advancing the child index, per
    /// the BIP-32 reference implementation.
    pub fn derive_child(&self, child: ChildNumber) -> Result<Self> {
        if self.depth == Self::MAX_DEPTH {
            return Err(Error::MaxDepthExceeded { depth: Self::MAX_DEPTH });
        }

        let mut index = child.to_index();
        loop {
            let extension = self.build_extension(index)?;
            let mut mac = HmacSha512::new_from_slice(self.chain_code.as_bytes())
                .expect("HMAC accepts any key length");
            mac.update(&extension);
            let i = mac.finalize().into_bytes();
            let (il, ir) = i.split_at(32);

            match self.private_key.tweak_add(il) {
                Ok(child_private) => {
                    let mut chain_code = [0u8; 32];
                    chain_code.copy_from_slice(ir);
                    return Ok(ExtendedPrivateKey {
                        network: self.network,
                        depth: self.depth + 1,
                        parent_fingerprint: self.fingerprint(),
                        child_number: ChildNumber::from_index(index),
                        chain_code: ChainCode::new(chain_code),
                        private_key: child_private,
                    });
                }
                Err(_) => {
                    index = index.checked_add(1).ok_or(Error::DerivationExhausted)?;
                }
            }
        }
    }

    /// Derives through a full path, applying each child number in order.
    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self> {
        let mut key = self.clone();
        for &child in path.children() {
            key = key.derive_child(child)?;
        }
        Ok(key)
    }

    fn build_extension(&self, index: u32) -> Result<Vec<u8>> {
        let hardened = index & ChildNumber::HARDENED_BIT != 0;
        let mut extension = Vec::with_capacity(37);
        if hardened {
            extension.push(0x00);
            extension.extend_from_slice(&self.private_key.to_bytes());
        } else {
            extension.extend_from_slice(&self.public_key().to_bytes());
        }
        extension.extend_from_slice(&codec::u32_be(index));
        Ok(extension)
    }

    /// Serializes this key to its Base58Check `xprv`/`tprv` string.
    pub fn to_extended_key_string(&self) -> String {
        let mut payload = Vec::with_capacity(78);
        payload.extend_from_slice(&codec::u32_be(self.network.version_bytes(KeyType::Private)));
        payload.push(self.depth);
        payload.extend_from_slice(&self.parent_fingerprint);
        payload.extend_from_slice(&codec::u32_be(self.child_number.to_index()));
        payload.extend_from_slice(self.chain_code.as_bytes());
        payload.push(0x00);
        payload.extend_from_slice(&self.private_key.to_bytes());
        base58check_encode(&payload)
    }

    /// Parses an `xprv`/`tprv` Base58Check string.
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
                expected: Network::BitcoinMainnet.version_bytes(KeyType::Private),
                got: version,
            },
        )?;
        if key_type != KeyType::Private {
            return Err(Error::InvalidVersionBytes {
                expected: network.version_bytes(KeyType::Private),
                got: version,
            });
        }

        let depth = data[4];
        let mut parent_fingerprint = [0u8; 4];
        parent_fingerprint.copy_from_slice(&data[5..9]);
        let child_number = ChildNumber::from_index(codec::u32_from_be(&data[9..13].try_into().unwrap()));
        let chain_code = ChainCode::from_bytes(&data[13..45])?;

        if data[45] != 0x00 {
            return Err(Error::InvalidExtendedKey {
                reason: "private key payload must start with 0x00".to_string(),
            });
        }
        let private_key = PrivateKey::from_bytes(&data[46..78])?;

        Ok(ExtendedPrivateKey {
            network,
            depth,
            parent_fingerprint,
            child_number,
            chain_code,
            private_key,
        })
    }
}

impl std::fmt::Display for ExtendedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_extended_key_string())
    }
}

impl std::str::FromStr for ExtendedPrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_extended_key_str(s)
    }
}

impl std::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExtendedPrivateKey")
            .field("network", &self.network)
            .field("depth", &self.depth)
            .field("parent_fingerprint", &hex::encode(self.parent_fingerprint))
            .field("child_number", &self.child_number)
            .field("chain_code", &self.chain_code)
            .field("private_key", &self.private_key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<u8> {
        hex::decode("000102030405060708090a0b0c0d0e0f").unwrap()
    }

    #[test]
    fn from_seed_matches_bip32_vector_1() {
        let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        assert_eq!(
            master.to_extended_key_string(),
            "xprv9s21ZrQH143K3QTDL4LXw2F7HEK3wJUD2nW2nRk4stbPy6cq3jPPqjiChkVvvNKmPGJxWUtg6LnF5kejMRNNU3TGtRBeJgk33yuGBxrMPHi"
        );
    }

    #[test]
    fn to_extended_public_key_matches_bip32_vector_1() {
        let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        let xpub = master.to_extended_public_key();
        assert_eq!(
            xpub.to_extended_key_string(),
            "xpub661MyMwAqRbcFtXgS5sYJABqqG9YLmC4Q1Rdap9gSE8NqtwybGhePY2gZ29ESFjqJoCu1Rupje8YtGqsefD265TMg7usUDFdp6W1EGMcet8"
        );
    }

    #[test]
    fn derive_hardened_then_normal_child() {
        let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        let path: DerivationPath = "m/0'/1".parse().unwrap();
        let derived = master.derive_path(&path).unwrap();
        assert_eq!(derived.depth(), 2);
        assert_eq!(derived.child_number(), ChildNumber::Normal(1));
    }

    #[test]
    fn extended_key_round_trips() {
        let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        let xprv = master.to_extended_key_string();
        let parsed = ExtendedPrivateKey::from_extended_key_str(&xprv).unwrap();
        assert_eq!(parsed.private_key().to_bytes(), master.private_key().to_bytes());
        assert_eq!(parsed.chain_code().as_bytes(), master.chain_code().as_bytes());
    }

    #[test]
    fn wrong_version_bytes_rejected_as_private() {
        let master = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        let xpub = master.to_extended_public_key().to_extended_key_string();
        assert!(ExtendedPrivateKey::from_extended_key_str(&xpub).is_err());
    }

    #[test]
    fn max_depth_exceeded_rejected() {
        let mut key = ExtendedPrivateKey::from_seed(&seed(), Network::BitcoinMainnet).unwrap();
        key.depth = ExtendedPrivateKey::MAX_DEPTH;
        let result = key.derive_child(ChildNumber::Normal(0));
        assert!(matches!(result, Err(Error::MaxDepthExceeded { .. })));
    }
}
