//! BIP-44 path shape validation.
//!
//! The canonical path is `m / purpose' / coin_type' / account' / change / address_index`,
//! i.e. three hardened segments followed by two normal ones. This module
//! checks a single step against the shape required for the depth it lands on.

use crate::{Error, Result};
use hdkey_bip32::ChildNumber;

/// The BIP-44 purpose constant (the first path segment, always hardened).
pub const PURPOSE: u32 = 44;

/// Validates that `child` is an acceptable segment to reach `resulting_depth`.
///
/// `resulting_depth` is the depth of the node *after* applying `child`
/// (1 through 5); depth 0 is the master node and is never validated here.
pub fn validate_segment(resulting_depth: u8, child: ChildNumber) -> Result<()> {
    match resulting_depth {
        1 => require_hardened(resulting_depth, child, "purpose").and_then(|index| {
            if index != PURPOSE {
                Err(Error::InvalidPath {
                    depth: resulting_depth,
                    reason: format!("purpose must be {PURPOSE}', got {index}'"),
                })
            } else {
                Ok(())
            }
        }),
        2 => require_hardened(resulting_depth, child, "coin type").map(|_| ()),
        3 => require_hardened(resulting_depth, child, "account").map(|_| ()),
        4 => require_normal(resulting_depth, child, "change").map(|_| ()),
        // address_index may optionally be hardened (deriveBIP44AddressKey's
        // `hardened` option), unlike every other normal-only segment.
        5 => Ok(()),
        other => Err(Error::InvalidPath {
            depth: other,
            reason: "BIP-44 nodes do not derive past depth 5".to_string(),
        }),
    }
}

fn require_hardened(depth: u8, child: ChildNumber, label: &str) -> Result<u32> {
    match child {
        ChildNumber::Hardened(index) => Ok(index),
        ChildNumber::Normal(index) => Err(Error::InvalidPath {
            depth,
            reason: format!("{label} must be hardened, got unhardened index {index}"),
        }),
    }
}

fn require_normal(depth: u8, child: ChildNumber, label: &str) -> Result<u32> {
    match child {
        ChildNumber::Normal(index) => Ok(index),
        ChildNumber::Hardened(index) => Err(Error::InvalidPath {
            depth,
            reason: format!("{label} must not be hardened, got hardened index {index}"),
        }),
    }
}
