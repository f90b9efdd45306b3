//! [`BIP44Node`]: a [`hdkey_bip32::SLIP10Node`] pinned to secp256k1 and
//! constrained to the BIP-44 path shape at every depth.

use crate::path;
use crate::{Error, Result};
use hdkey_bip32::{ChildNumber, CurveKind, Network, Specification};
use tracing::debug;

/// A BIP-44 hierarchy node: secp256k1 only, depth 0-5, each step validated
/// against the canonical `purpose'/coin_type'/account'/change/address_index`
/// shape.
#[derive(Debug, Clone)]
pub struct BIP44Node {
    inner: hdkey_bip32::SLIP10Node,
}

impl BIP44Node {
    /// Builds the master node (depth 0) from a raw seed.
    pub fn master_from_seed(seed: &[u8]) -> Result<Self> {
        let inner = hdkey_bip32::SLIP10Node::from_seed(seed, CurveKind::Secp256k1, Specification::Bip32)?;
        Ok(BIP44Node { inner })
    }

    /// Builds the master node (depth 0) from a BIP-39 mnemonic.
    pub fn master_from_mnemonic(mnemonic: &hdkey_bip39::Mnemonic, passphrase: &str) -> Result<Self> {
        let inner = hdkey_bip32::SLIP10Node::from_mnemonic(
            mnemonic,
            passphrase,
            CurveKind::Secp256k1,
            Specification::Bip32,
        )?;
        Ok(BIP44Node { inner })
    }

    /// Wraps an already-derived node, checking it is secp256k1 and depth <= 5.
    pub fn from_node(inner: hdkey_bip32::SLIP10Node) -> Result<Self> {
        if inner.curve() != CurveKind::Secp256k1 {
            return Err(Error::InvalidPath {
                depth: inner.depth(),
                reason: "BIP-44 nodes must use the secp256k1 curve".to_string(),
            });
        }
        if inner.depth() > 5 {
            return Err(Error::UnexpectedDepth {
                expected: 5,
                found: inner.depth(),
            });
        }
        Ok(BIP44Node { inner })
    }

    /// Derives a single child, validating the resulting depth's path shape.
    pub fn derive_child(&self, child: ChildNumber) -> Result<Self> {
        if self.inner.depth() == 5 {
            return Err(Error::LeafNodeAlready);
        }
        let resulting_depth = self.inner.depth() + 1;
        path::validate_segment(resulting_depth, child)?;
        let inner = self.inner.derive_child(child)?;
        debug!(depth = resulting_depth, "derived bip44 node");
        Ok(BIP44Node { inner })
    }

    /// Derives through a sequence of child numbers, validating each step.
    pub fn derive(&self, path: &[ChildNumber]) -> Result<Self> {
        let mut node = self.clone();
        for &child in path {
            node = node.derive_child(child)?;
        }
        Ok(node)
    }

    pub fn depth(&self) -> u8 {
        self.inner.depth()
    }

    pub fn index(&self) -> u32 {
        self.inner.index()
    }

    pub fn is_hardened(&self) -> bool {
        self.inner.is_hardened()
    }

    /// Returns a public-only copy of this node.
    pub fn neuter(&self) -> Self {
        BIP44Node {
            inner: self.inner.neuter(),
        }
    }

    /// The Ethereum address for this node's public key.
    pub fn ethereum_address(&self) -> Result<String> {
        Ok(self.inner.ethereum_address()?)
    }

    /// Serializes this node to its Base58Check extended-key string.
    pub fn to_extended_key_string(&self, network: Network) -> Result<String> {
        Ok(self.inner.to_extended_key_string(network)?)
    }

    /// The underlying curve-agnostic node.
    pub fn inner(&self) -> &hdkey_bip32::SLIP10Node {
        &self.inner
    }

    /// A JSON-compatible plain record of this node, all binary fields hex-encoded.
    pub fn to_record(&self) -> hdkey_bip32::NodeRecord {
        self.inner.to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed() -> Vec<u8> {
        hex::decode(
            "000102030405060708090a0b0c0d0e0f000102030405060708090a0b0c0d0e0f",
        )
        .unwrap()
    }

    #[test]
    fn derives_canonical_ethereum_path() {
        let master = BIP44Node::master_from_seed(&seed()).unwrap();
        let node = master
            .derive(&[
                ChildNumber::Hardened(44),
                ChildNumber::Hardened(60),
                ChildNumber::Hardened(0),
                ChildNumber::Normal(0),
                ChildNumber::Normal(0),
            ])
            .unwrap();
        assert_eq!(node.depth(), 5);
    }

    #[test]
    fn rejects_wrong_purpose() {
        let master = BIP44Node::master_from_seed(&seed()).unwrap();
        let result = master.derive_child(ChildNumber::Hardened(49));
        assert!(matches!(result, Err(Error::InvalidPath { depth: 1, .. })));
    }

    #[test]
    fn rejects_derivation_past_leaf() {
        let master = BIP44Node::master_from_seed(&seed()).unwrap();
        let leaf = master
            .derive(&[
                ChildNumber::Hardened(44),
                ChildNumber::Hardened(60),
                ChildNumber::Hardened(0),
                ChildNumber::Normal(0),
                ChildNumber::Normal(0),
            ])
            .unwrap();
        assert!(matches!(
            leaf.derive_child(ChildNumber::Normal(0)),
            Err(Error::LeafNodeAlready)
        ));
    }

    #[test]
    fn neuter_strips_private_key() {
        let master = BIP44Node::master_from_seed(&seed()).unwrap();
        let pub_node = master.neuter();
        assert_eq!(pub_node.depth(), 0);
    }

    #[test]
    fn to_record_reflects_depth_and_key_presence() {
        let master = BIP44Node::master_from_seed(&seed()).unwrap();
        let record = master.to_record();
        assert_eq!(record.depth, 0);
        assert!(record.private_key.is_some());

        let neutered_record = master.neuter().to_record();
        assert!(neutered_record.private_key.is_none());
    }
}
