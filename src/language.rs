use serde::{Deserialize, Serialize};

/// A supported translation language.
///
/// Languages are identified by their canonical English name, mirroring
/// platform system-language tags. The name also drives resource file
/// naming: each language loads from a file named after the first two
/// letters of its canonical name (see [`Language::file_stem`]).
///
/// # Example
///
/// ```rust
/// use bevy_strings::Language;
///
/// assert_eq!(Language::English.name(), "English");
/// assert_eq!(Language::English.file_stem(), "En");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    Arabic,
    Chinese,
    Czech,
    Danish,
    Dutch,
    English,
    Finnish,
    French,
    German,
    Greek,
    Hebrew,
    Hungarian,
    Italian,
    Japanese,
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    Russian,
    Spanish,
    Swedish,
    Turkish,
    Ukrainian,
}

impl Language {
    /// Canonical name of the language.
    pub fn name(self) -> &'static str {
        match self {
            Language::Arabic => "Arabic",
            Language::Chinese => "Chinese",
            Language::Czech => "Czech",
            Language::Danish => "Danish",
            Language::Dutch => "Dutch",
            Language::English => "English",
            Language::Finnish => "Finnish",
            Language::French => "French",
            Language::German => "German",
            Language::Greek => "Greek",
            Language::Hebrew => "Hebrew",
            Language::Hungarian => "Hungarian",
            Language::Italian => "Italian",
            Language::Japanese => "Japanese",
            Language::Korean => "Korean",
            Language::Norwegian => "Norwegian",
            Language::Polish => "Polish",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
            Language::Turkish => "Turkish",
            Language::Ukrainian => "Ukrainian",
        }
    }

    /// Resource file stem for this language: the first two letters of the
    /// canonical name, so `English` loads from `En` and `German` from `Ge`.
    ///
    /// Note this is a name prefix, not an ISO code.
    pub fn file_stem(self) -> &'static str {
        &self.name()[..2]
    }
}
