//! Word count and entropy length conversions for BIP39 mnemonics.

use crate::{Error, Result};

/// The number of words in a BIP39 mnemonic phrase.
///
/// Each variant corresponds to a specific entropy length: the checksum is
/// `entropy_bits / 32` bits, appended to the entropy before splitting into
/// 11-bit word indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WordCount {
    Twelve,
    Fifteen,
    Eighteen,
    TwentyOne,
    TwentyFour,
}

impl WordCount {
    /// Maps a raw entropy length in bytes to its corresponding word count.
    ///
    /// Valid lengths are 16, 20, 24, 28, and 32 bytes (128-256 bits in steps
    /// of 32). Any other length is rejected.
    pub fn from_entropy_length(length: usize) -> Result<Self> {
        match length {
            16 => Ok(WordCount::Twelve),
            20 => Ok(WordCount::Fifteen),
            24 => Ok(WordCount::Eighteen),
            28 => Ok(WordCount::TwentyOne),
            32 => Ok(WordCount::TwentyFour),
            _ => Err(Error::InvalidEntropyLength { length }),
        }
    }

    /// Returns the entropy length in bytes for this word count.
    pub fn entropy_length(self) -> usize {
        match self {
            WordCount::Twelve => 16,
            WordCount::Fifteen => 20,
            WordCount::Eighteen => 24,
            WordCount::TwentyOne => 28,
            WordCount::TwentyFour => 32,
        }
    }

    /// Returns the number of words as an integer.
    pub fn word_count(self) -> usize {
        match self {
            WordCount::Twelve => 12,
            WordCount::Fifteen => 15,
            WordCount::Eighteen => 18,
            WordCount::TwentyOne => 21,
            WordCount::TwentyFour => 24,
        }
    }

    /// Maps a word count (12, 15, 18, 21, 24) back to a `WordCount`.
    pub fn from_word_count(count: usize) -> Result<Self> {
        match count {
            12 => Ok(WordCount::Twelve),
            15 => Ok(WordCount::Fifteen),
            18 => Ok(WordCount::Eighteen),
            21 => Ok(WordCount::TwentyOne),
            24 => Ok(WordCount::TwentyFour),
            _ => Err(Error::InvalidWordCount { count }),
        }
    }
}
