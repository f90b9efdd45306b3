//! Error types for BIP-44 multi-account hierarchy operations.

use thiserror::Error;

/// Errors that can occur while building or deriving a BIP-44 wallet.
#[derive(Debug, Error)]
pub enum Error {
    /// The supplied mnemonic phrase could not be parsed or used.
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    /// The supplied or derived seed was invalid.
    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    /// Key derivation failed partway through the hierarchy.
    #[error("Key derivation failed: {0}")]
    KeyDerivation(String),

    /// A derivation path segment did not match the BIP-44 shape for its depth.
    ///
    /// Valid shape: `m / 44' / coin_type' / account' / change / address_index`.
    #[error("Invalid BIP-44 path at depth {depth}: {reason}")]
    InvalidPath {
        /// The depth (0-5) at which the path diverged from the BIP-44 shape
        depth: u8,
        /// Detailed reason the segment is invalid
        reason: String,
    },

    /// A node already at depth 5 (an address key) cannot derive further.
    #[error("Cannot derive past the address-index leaf (depth 5)")]
    LeafNodeAlready,

    /// A coin type node was expected but the node's depth does not match.
    #[error("Expected a depth-{expected} node, found depth {found}")]
    UnexpectedDepth {
        /// The depth required for this operation
        expected: u8,
        /// The depth the node actually has
        found: u8,
    },

    /// Error propagated from the underlying BIP-32/SLIP-10 engine.
    #[error("BIP32 error: {0}")]
    Bip32Error(#[from] hdkey_bip32::Error),

    /// Error propagated from the underlying BIP-39 mnemonic layer.
    #[error("BIP39 error: {0}")]
    Bip39Error(#[from] hdkey_bip39::Error),
}

/// Convenience alias for fallible BIP-44 operations.
pub type Result<T> = std::result::Result<T, Error>;
