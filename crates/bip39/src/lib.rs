//! # BIP39 - Mnemonic Code for Generating Deterministic Keys
//!
//! An implementation of BIP39 mnemonic phrases: generation from entropy,
//! parsing and validation of existing phrases, and PBKDF2-based seed
//! derivation for use by [`bip32`](https://docs.rs/hdkey-bip32)-compatible
//! hierarchical deterministic wallets.
//!
//! ## Quick start
//!
//! ```rust
//! use hdkey_bip39::{Language, Mnemonic, WordCount};
//!
//! let mnemonic = Mnemonic::generate(WordCount::Twelve, Language::English).unwrap();
//! let seed = mnemonic.to_seed("");
//! assert_eq!(seed.len(), 64);
//! ```

mod error;
mod language;
mod mnemonic;
mod word_count;

pub use error::{Error, Result};
pub use language::Language;
pub use mnemonic::{validate_phrase_in_language, Mnemonic};
pub use word_count::WordCount;
