//! [`BIP44CoinTypeNode`]: a depth-2 [`BIP44Node`] pinned to one coin type,
//! plus the address-key deriver helpers built on top of it.

use crate::node::BIP44Node;
use crate::{Error, Result};
use hdkey_bip32::ChildNumber;

/// A BIP-44 node fixed at depth 2 (`m/44'/coin_type'`), remembering the
/// coin type it was derived for.
#[derive(Debug, Clone)]
pub struct BIP44CoinTypeNode {
    node: BIP44Node,
    coin_type: u32,
}

/// Parameters for deriving a single address key under a coin type node.
#[derive(Debug, Clone, Copy)]
pub struct AddressKeyOptions {
    /// Account index (defaults to 0 if not given by the caller).
    pub account: u32,
    /// Change chain: 0 external, 1 internal (defaults to 0).
    pub change: u32,
    /// Address index within the change chain.
    pub address_index: u32,
    /// Whether `address_index` itself should be hardened (rare; defaults to false).
    pub hardened: bool,
}

impl Default for AddressKeyOptions {
    fn default() -> Self {
        AddressKeyOptions {
            account: 0,
            change: 0,
            address_index: 0,
            hardened: false,
        }
    }
}

impl BIP44CoinTypeNode {
    /// Derives `m/44'/coin_type'` from a master node.
    pub fn derive(master: &BIP44Node, coin_type: u32) -> Result<Self> {
        let node = master.derive(&[ChildNumber::Hardened(44), ChildNumber::Hardened(coin_type)])?;
        Ok(BIP44CoinTypeNode { node, coin_type })
    }

    /// Wraps a node already at depth 2, verifying its depth.
    pub fn from_node(node: BIP44Node, coin_type: u32) -> Result<Self> {
        if node.depth() != 2 {
            return Err(Error::UnexpectedDepth {
                expected: 2,
                found: node.depth(),
            });
        }
        Ok(BIP44CoinTypeNode { node, coin_type })
    }

    pub fn coin_type(&self) -> u32 {
        self.coin_type
    }

    pub fn node(&self) -> &BIP44Node {
        &self.node
    }

    /// Derives `m/44'/coin_type'/account'/change/address_index[']`.
    pub fn derive_bip44_address_key(&self, options: AddressKeyOptions) -> Result<BIP44Node> {
        let address_index = if options.hardened {
            ChildNumber::Hardened(options.address_index)
        } else {
            ChildNumber::Normal(options.address_index)
        };
        self.node.derive(&[
            ChildNumber::Hardened(options.account),
            ChildNumber::Normal(options.change),
            address_index,
        ])
    }

    /// Returns a closure that only needs `address_index`, with `account` and
    /// `change` already memoised.
    pub fn address_key_deriver(
        &self,
        account: u32,
        change: u32,
    ) -> impl Fn(u32) -> Result<BIP44Node> + '_ {
        move |address_index| {
            self.derive_bip44_address_key(AddressKeyOptions {
                account,
                change,
                address_index,
                hardened: false,
            })
        }
    }
}
