//! Classic `"m/44'/0'/0'/0/0"`-style derivation path parsing.

use crate::{ChildNumber, Error, Result};
use std::str::FromStr;

/// A parsed BIP-32 derivation path: a sequence of child indices applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivationPath {
    children: Vec<ChildNumber>,
}

impl DerivationPath {
    /// An empty path (derives nothing, i.e. the master key itself).
    pub fn master() -> Self {
        DerivationPath { children: Vec::new() }
    }

    /// The child numbers to apply, in order from parent to leaf.
    pub fn children(&self) -> &[ChildNumber] {
        &self.children
    }

    /// The depth this path descends to, relative to its starting node.
    pub fn depth(&self) -> usize {
        self.children.len()
    }

    /// `true` for the empty (master) path.
    pub fn is_master(&self) -> bool {
        self.children.is_empty()
    }

    /// `true` if any segment is hardened.
    pub fn contains_hardened(&self) -> bool {
        self.children.iter().any(|c| c.is_hardened())
    }

    /// `true` if the whole path can be derived from a public key alone,
    /// i.e. it contains no hardened segments.
    pub fn is_public_derivable(&self) -> bool {
        !self.contains_hardened()
    }

    /// The child number at `index`, or `None` if `index >= depth()`.
    pub fn child_number_at(&self, index: usize) -> Option<ChildNumber> {
        self.children.get(index).copied()
    }

    /// This path with its last segment removed, or `None` for the master path.
    pub fn parent(&self) -> Option<Self> {
        if self.children.is_empty() {
            return None;
        }
        let mut children = self.children.clone();
        children.pop();
        Some(DerivationPath { children })
    }
}

impl FromStr for DerivationPath {
    type Err = Error;

    fn from_str(path: &str) -> Result<Self> {
        let mut segments = path.split('/');

        match segments.next() {
            Some("m") | Some("M") => {}
            _ => {
                return Err(Error::InvalidDerivationPath {
                    path: path.to_string(),
                    reason: "path must start with 'm'".to_string(),
                })
            }
        }

        let mut children = Vec::new();
        for segment in segments {
            if segment.is_empty() {
                return Err(Error::InvalidDerivationPath {
                    path: path.to_string(),
                    reason: "empty path segment".to_string(),
                });
            }
            children.push(ChildNumber::parse(segment)?);
        }

        Ok(DerivationPath { children })
    }
}

impl std::fmt::Display for DerivationPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "m")?;
        for child in &self.children {
            write!(f, "/{child}")?;
        }
        Ok(())
    }
}
