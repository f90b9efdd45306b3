//! Network and key-type discrimination for extended key version bytes.

/// The network an extended key is serialized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Network {
    BitcoinMainnet,
    BitcoinTestnet,
}

/// Whether an extended key carries a private or public key payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Private,
    Public,
}

impl Network {
    /// The 4-byte version prefix for this network and key type, per BIP-32.
    pub fn version_bytes(self, key_type: KeyType) -> u32 {
        match (self, key_type) {
            (Network::BitcoinMainnet, KeyType::Private) => 0x0488ADE4,
            (Network::BitcoinMainnet, KeyType::Public) => 0x0488B21E,
            (Network::BitcoinTestnet, KeyType::Private) => 0x04358394,
            (Network::BitcoinTestnet, KeyType::Public) => 0x043587CF,
        }
    }

    /// Resolves a 4-byte version prefix to its `(Network, KeyType)`, if recognized.
    pub fn from_version_bytes(version: u32) -> Option<(Network, KeyType)> {
        match version {
            0x0488ADE4 => Some((Network::BitcoinMainnet, KeyType::Private)),
            0x0488B21E => Some((Network::BitcoinMainnet, KeyType::Public)),
            0x04358394 => Some((Network::BitcoinTestnet, KeyType::Private)),
            0x043587CF => Some((Network::BitcoinTestnet, KeyType::Public)),
            _ => None,
        }
    }
}
