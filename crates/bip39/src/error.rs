//! Error types for BIP39 mnemonic operations.

use thiserror::Error;

/// Errors that can occur while constructing or validating a mnemonic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Entropy was not one of the five BIP39-valid lengths (16, 20, 24, 28, 32 bytes).
    #[error("invalid entropy length: {length} bytes (expected 16, 20, 24, 28, or 32)")]
    InvalidEntropyLength { length: usize },

    /// A word count was requested that does not correspond to a valid entropy length.
    #[error("invalid word count: {count} (expected 12, 15, 18, 21, or 24)")]
    InvalidWordCount { count: usize },

    /// The phrase failed upstream validation (bad word, bad checksum, wrong word count).
    #[error("invalid mnemonic phrase: {reason}")]
    InvalidPhrase { reason: String },

    /// An empty passphrase-derived seed was requested.
    #[error("seed derivation failed: {reason}")]
    SeedDerivation { reason: String },
}

/// Convenience alias for fallible BIP39 operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<bip39_upstream::Error> for Error {
    fn from(err: bip39_upstream::Error) -> Self {
        Error::InvalidPhrase {
            reason: err.to_string(),
        }
    }
}
