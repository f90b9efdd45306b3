//! Wordlist language selection for BIP39 mnemonics.

/// A BIP39 wordlist language.
///
/// Validation and generation both require a language, since each wordlist
/// assigns different words to the same 11-bit indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    English,
    SimplifiedChinese,
    TraditionalChinese,
    Czech,
    French,
    Italian,
    Japanese,
    Korean,
    Portuguese,
    Spanish,
}

impl Language {
    /// All supported languages, in a fixed order.
    pub fn all_variants() -> &'static [Language] {
        &[
            Language::English,
            Language::SimplifiedChinese,
            Language::TraditionalChinese,
            Language::Czech,
            Language::French,
            Language::Italian,
            Language::Japanese,
            Language::Korean,
            Language::Portuguese,
            Language::Spanish,
        ]
    }

    /// Converts to the upstream crate's language representation.
    pub fn to_upstream(self) -> bip39_upstream::Language {
        match self {
            Language::English => bip39_upstream::Language::English,
            Language::SimplifiedChinese => bip39_upstream::Language::SimplifiedChinese,
            Language::TraditionalChinese => bip39_upstream::Language::TraditionalChinese,
            Language::Czech => bip39_upstream::Language::Czech,
            Language::French => bip39_upstream::Language::French,
            Language::Italian => bip39_upstream::Language::Italian,
            Language::Japanese => bip39_upstream::Language::Japanese,
            Language::Korean => bip39_upstream::Language::Korean,
            Language::Portuguese => bip39_upstream::Language::Portuguese,
            Language::Spanish => bip39_upstream::Language::Spanish,
        }
    }

    /// Converts from the upstream crate's language representation.
    pub fn from_upstream(language: bip39_upstream::Language) -> Self {
        match language {
            bip39_upstream::Language::English => Language::English,
            bip39_upstream::Language::SimplifiedChinese => Language::SimplifiedChinese,
            bip39_upstream::Language::TraditionalChinese => Language::TraditionalChinese,
            bip39_upstream::Language::Czech => Language::Czech,
            bip39_upstream::Language::French => Language::French,
            bip39_upstream::Language::Italian => Language::Italian,
            bip39_upstream::Language::Japanese => Language::Japanese,
            bip39_upstream::Language::Korean => Language::Korean,
            bip39_upstream::Language::Portuguese => Language::Portuguese,
            bip39_upstream::Language::Spanish => Language::Spanish,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::English
    }
}
