//! Utility functions and convenience methods for common BIP32 operations.
//!
//! This module provides ergonomic wrappers around common patterns to reduce
//! boilerplate in application code.

use crate::{ExtendedPrivateKey, ExtendedPublicKey, Network, Result};

/// Generates a master keypair (both private and public) from a seed.
///
/// This is a convenience function that combines [`ExtendedPrivateKey::from_seed()`]
/// and [`ExtendedPrivateKey::to_extended_public_key()`] into a single call.
///
/// # Use Case
///
/// Most wallet applications need both the private key (for signing) and public key
/// (for address generation and watch-only mode). This function returns both in one call.
///
/// # Parameters
///
/// * `seed` - A cryptographic seed (typically 512 bits / 64 bytes from BIP39)
/// * `network` - The cryptocurrency network (Bitcoin mainnet, testnet, etc.)
///
/// # Returns
///
/// A tuple containing:
/// - `ExtendedPrivateKey` - Master private key for signing and private key derivation
/// - `ExtendedPublicKey` - Master public key for address generation and watch-only mode
///
/// Both keys have:
/// - `depth` = 0 (master keys)
/// - `parent_fingerprint` = [0, 0, 0, 0]
/// - `child_number` = 0
/// - Same chain code (required for key derivation)
///
/// # Errors
///
/// Returns an error if:
/// - The seed is too short (minimum 16 bytes recommended)
/// - The derived private key is invalid (extremely rare, < 2^-127 probability)
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust
/// use hdkey_bip32::{utils::generate_master_keypair, Network};
///
/// let seed = [0x01; 64];
/// let (master_priv, master_pub) = generate_master_keypair(&seed, Network::BitcoinMainnet)?;
///
/// // Both keys are ready to use
/// assert_eq!(master_priv.depth(), 0);
/// assert_eq!(master_pub.depth(), 0);
/// assert_eq!(master_priv.fingerprint(), master_pub.fingerprint());
/// # Ok::<(), hdkey_bip32::Error>(())
/// ```
///
/// ## Complete Wallet Setup
///
/// ```rust
/// use hdkey_bip32::{utils::generate_master_keypair, Network, DerivationPath};
/// use hdkey_bip39::{Mnemonic, WordCount, Language};
/// use std::str::FromStr;
///
/// // 1. Generate mnemonic
/// let mnemonic = Mnemonic::generate(WordCount::Twelve, Language::English)?;
/// let seed = mnemonic.to_seed("");
///
/// // 2. Generate both keys at once
/// let (master_priv, master_pub) = generate_master_keypair(&seed, Network::BitcoinMainnet)?;
///
/// // 3. Export for backup
/// let xprv = master_priv.to_string();  // Store securely
/// let xpub = master_pub.to_string();   // Can share for watch-only
///
/// assert!(xprv.starts_with("xprv"));
/// assert!(xpub.starts_with("xpub"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
///
/// ## Equivalent to Manual Approach
///
/// ```rust
/// use hdkey_bip32::{ExtendedPrivateKey, Network, utils::generate_master_keypair};
///
/// let seed = [0x02; 64];
///
/// // Using utility function
/// let (priv1, pub1) = generate_master_keypair(&seed, Network::BitcoinMainnet)?;
///
/// // Equivalent manual approach
/// let priv2 = ExtendedPrivateKey::from_seed(&seed, Network::BitcoinMainnet)?;
/// let pub2 = priv2.to_extended_public_key();
///
/// // Results are identical
/// assert_eq!(priv1.private_key().to_bytes(), priv2.private_key().to_bytes());
/// assert_eq!(pub1.public_key().to_bytes(), pub2.public_key().to_bytes());
/// # Ok::<(), hdkey_bip32::Error>(())
/// ```
pub fn generate_master_keypair(
    seed: &[u8],
    network: Network,
) -> Result<(ExtendedPrivateKey, ExtendedPublicKey)> {
    let private_key = ExtendedPrivateKey::from_seed(seed, network)?;
    let public_key = private_key.to_extended_public_key();
    Ok((private_key, public_key))
}
