//! Child index representation for a single derivation step.

use crate::{Error, Result};
use std::fmt;

/// A single derivation step's child index.
///
/// `Normal(n)` derives an unhardened child at raw index `n`; `Hardened(n)`
/// derives a hardened child at raw index `n`, recorded on the wire as
/// `n + 2^31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChildNumber {
    Normal(u32),
    Hardened(u32),
}

impl ChildNumber {
    /// The bit that marks a wire-format index as hardened (2^31).
    pub const HARDENED_BIT: u32 = 0x8000_0000;

    /// The largest raw index usable for either a normal or hardened child.
    pub const MAX_NORMAL_INDEX: u32 = Self::HARDENED_BIT - 1;

    /// Builds a `ChildNumber` from a full 32-bit wire-format index.
    pub fn from_index(index: u32) -> Self {
        if index & Self::HARDENED_BIT != 0 {
            ChildNumber::Hardened(index & !Self::HARDENED_BIT)
        } else {
            ChildNumber::Normal(index)
        }
    }

    /// Returns the full 32-bit wire-format index.
    pub fn to_index(self) -> u32 {
        match self {
            ChildNumber::Normal(n) => n,
            ChildNumber::Hardened(n) => n | Self::HARDENED_BIT,
        }
    }

    /// Returns `true` for `Hardened` child numbers.
    pub fn is_hardened(self) -> bool {
        matches!(self, ChildNumber::Hardened(_))
    }

    /// Parses a single path segment such as `"44'"` or `"0"`.
    pub fn parse(segment: &str) -> Result<Self> {
        let hardened = segment.ends_with('\'') || segment.ends_with('h') || segment.ends_with('H');
        let digits = segment.trim_end_matches(['\'', 'h', 'H']);

        let raw: u32 = digits.parse().map_err(|_| Error::InvalidDerivationPath {
            path: segment.to_string(),
            reason: "child index is not a valid non-negative integer".to_string(),
        })?;

        if raw > Self::MAX_NORMAL_INDEX {
            return Err(Error::InvalidChildNumber { number: raw as u64 });
        }

        Ok(if hardened {
            ChildNumber::Hardened(raw)
        } else {
            ChildNumber::Normal(raw)
        })
    }
}

impl fmt::Display for ChildNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildNumber::Normal(n) => write!(f, "{n}"),
            ChildNumber::Hardened(n) => write!(f, "{n}'"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trips() {
        assert_eq!(ChildNumber::from_index(0), ChildNumber::Normal(0));
        assert_eq!(
            ChildNumber::from_index(ChildNumber::HARDENED_BIT),
            ChildNumber::Hardened(0)
        );
        assert_eq!(ChildNumber::Hardened(44).to_index(), 0x8000_002C);
    }

    #[test]
    fn parse_hardened_and_normal() {
        assert_eq!(ChildNumber::parse("44'").unwrap(), ChildNumber::Hardened(44));
        assert_eq!(ChildNumber::parse("0").unwrap(), ChildNumber::Normal(0));
    }

    #[test]
    fn parse_rejects_out_of_range() {
        assert!(ChildNumber::parse("4294967295").is_err());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(ChildNumber::parse("abc").is_err());
    }

    #[test]
    fn display_matches_notation() {
        assert_eq!(ChildNumber::Hardened(0).to_string(), "0'");
        assert_eq!(ChildNumber::Normal(5).to_string(), "5");
    }
}
