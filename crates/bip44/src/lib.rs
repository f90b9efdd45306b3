//! # BIP44 - Multi-Account Hierarchy for Deterministic Wallets
//!
//! A production-ready Rust implementation of the BIP44 standard, built on top
//! of [`hdkey_bip32`]'s SLIP-10 node and [`hdkey_bip39`]'s mnemonic handling.
//!
//! ## Overview
//!
//! BIP44 fixes the shape of a derivation path to
//! `m / purpose' / coin_type' / account' / change / address_index`, letting
//! a single seed support many coins and accounts without path collisions.
//!
//! ## Quick Start
//!
//! ```rust
//! use hdkey_bip44::{AddressKeyOptions, Wallet};
//! use hdkey_bip32::Network;
//!
//! let seed = [0u8; 64];
//! let wallet = Wallet::from_seed(&seed, Network::BitcoinMainnet).unwrap();
//! let account = wallet.derive_coin_type(60).unwrap();
//! let address_key = account
//!     .derive_bip44_address_key(AddressKeyOptions::default())
//!     .unwrap();
//! assert_eq!(address_key.depth(), 5);
//! ```

mod coin_type_node;
mod error;
mod node;
mod path;
mod wallet;

pub use coin_type_node::{AddressKeyOptions, BIP44CoinTypeNode};
pub use error::{Error, Result};
pub use node::BIP44Node;
pub use path::PURPOSE;
pub use wallet::Wallet;
