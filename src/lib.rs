#![doc = include_str!("../README.md")]

//! # bevy-strings
//!
//! Runtime text localization for [Bevy](https://bevyengine.org/):
//!
//! - **Flat `.strings` format**: `"key" = "value";` statements extracted
//!   from plain text files, one file per language
//! - **Fallback system**: requested language, then default language, then
//!   empty
//! - **No globals**: the [`Localizer`] is an ordinary Bevy resource
//! - **Pluggable loading**: the [`StringsSource`] seam separates parsing
//!   from resource I/O
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_strings::{Language, Localize, Localizer, LocalizerConfig, LocalizerPlugin};
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(LocalizerPlugin::with_config(LocalizerConfig {
//!             languages: vec![Language::English, Language::French],
//!             current_language: Language::French,
//!             ..Default::default()
//!         }))
//!         .add_systems(Startup, greet)
//!         .run();
//! }
//!
//! fn greet(localizer: Res<Localizer>) {
//!     println!("{}", "hello".localize(&localizer));
//! }
//! ```

use bevy::prelude::*;

mod catalog;
mod language;
mod parse;
mod source;
mod table;

pub use catalog::LocalizationCatalog;
pub use language::Language;
pub use parse::{SkeletonScanner, StatementScanner};
pub use source::{FsStringsSource, MemorySource, SourceError, StringsSource};
pub use table::{LocalizationItem, LocalizationTable};

/// Configuration for the localizer plugin.
///
/// # Example
///
/// ```rust
/// use bevy_strings::{Language, LocalizerConfig};
///
/// let config = LocalizerConfig {
///     languages: vec![Language::English, Language::Ukrainian],
///     strings_folder: "assets/localization".to_string(),
///     default_language: Language::English,
///     current_language: Language::Ukrainian,
/// };
/// ```
#[derive(Debug, Clone, Resource)]
pub struct LocalizerConfig {
    /// Languages to load tables for, in load order.
    pub languages: Vec<Language>,
    /// Folder holding the per-language strings files.
    /// Default: "localization"
    pub strings_folder: String,
    /// Fallback language when the current language lacks a translation.
    /// Default: English
    pub default_language: Language,
    /// Language used by [`Localizer::resolve`].
    /// Default: English
    pub current_language: Language,
}

impl Default for LocalizerConfig {
    fn default() -> Self {
        Self {
            languages: vec![Language::English],
            strings_folder: "localization".to_string(),
            default_language: Language::English,
            current_language: Language::English,
        }
    }
}

// ---------- Bevy Plugin ----------

/// Plugin that loads the configured strings files at startup and exposes
/// the [`Localizer`] resource.
///
/// # Example
///
/// ```rust,no_run
/// use bevy::prelude::*;
/// use bevy_strings::{Language, LocalizerConfig, LocalizerPlugin};
///
/// // Default configuration
/// App::new().add_plugins(LocalizerPlugin::default());
///
/// // Custom configuration
/// App::new().add_plugins(LocalizerPlugin::with_config(LocalizerConfig {
///     languages: vec![Language::English, Language::German],
///     ..Default::default()
/// }));
/// ```
#[derive(Default)]
pub struct LocalizerPlugin {
    pub config: LocalizerConfig,
}

impl LocalizerPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: LocalizerConfig) -> Self {
        Self { config }
    }
}

impl Plugin for LocalizerPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_resource::<Localizer>();
    }
}

// ---------- Localizer resource ----------

/// Main resource for resolving localized text in Bevy systems.
///
/// Built from [`LocalizerConfig`] at startup; owns the per-language
/// [`LocalizationCatalog`] plus the current language used by the
/// single-argument [`resolve`](Self::resolve).
///
/// # Example
///
/// ```rust
/// use bevy_strings::{Language, Localizer, LocalizerConfig, MemorySource};
///
/// let config = LocalizerConfig {
///     languages: vec![Language::English],
///     ..Default::default()
/// };
/// let source = MemorySource::new().with("En", r#""hello" = "Hello";"#);
/// let localizer = Localizer::from_source(&config, &source);
///
/// assert_eq!(localizer.resolve("hello"), "Hello");
/// ```
#[derive(Resource)]
pub struct Localizer {
    catalog: LocalizationCatalog,
    current_language: Language,
    strings_folder: String,
}

impl Localizer {
    /// Builds a localizer loading from the config's strings folder.
    pub fn new(config: &LocalizerConfig) -> Self {
        let source = FsStringsSource::new(&config.strings_folder);
        Self::from_source(config, &source)
    }

    /// Builds a localizer loading from an explicit [`StringsSource`].
    pub fn from_source(config: &LocalizerConfig, source: &dyn StringsSource) -> Self {
        let mut catalog = LocalizationCatalog::new(config.default_language);
        catalog.init(&config.languages, source);
        Self {
            catalog,
            current_language: config.current_language,
            strings_folder: config.strings_folder.clone(),
        }
    }

    /// Discards all tables and reloads for `languages` from the strings
    /// folder. Logs and keeps existing tables when `languages` is empty;
    /// logs and skips languages whose file is missing.
    pub fn init(&mut self, languages: &[Language]) {
        let source = FsStringsSource::new(&self.strings_folder);
        self.catalog.init(languages, &source);
    }

    /// Resolves `key` in the current language, falling back to the default
    /// language, then to an empty string.
    pub fn resolve(&self, key: &str) -> String {
        self.catalog.resolve_in(key, self.current_language)
    }

    /// Resolves `key` in an explicit language with the same fallback
    /// behavior as [`resolve`](Self::resolve).
    pub fn resolve_in(&self, key: &str, language: Language) -> String {
        self.catalog.resolve_in(key, language)
    }

    /// Sets the current language.
    ///
    /// Warns and keeps the previous language when no table is loaded for
    /// `language`.
    pub fn set_language(&mut self, language: Language) {
        if self.catalog.table(language).is_none() {
            warn!("language {} has no loaded strings table", language.name());
            return;
        }
        self.current_language = language;
    }

    /// The language used by [`resolve`](Self::resolve).
    pub fn language(&self) -> Language {
        self.current_language
    }

    /// Languages with a loaded table.
    pub fn loaded_languages(&self) -> Vec<Language> {
        self.catalog.languages().collect()
    }

    /// The underlying catalog.
    pub fn catalog(&self) -> &LocalizationCatalog {
        &self.catalog
    }
}

impl FromWorld for Localizer {
    fn from_world(world: &mut World) -> Self {
        let config = world
            .get_resource::<LocalizerConfig>()
            .cloned()
            .unwrap_or_default();
        Self::new(&config)
    }
}

// ---------- Extension sugar ----------

/// Key-first resolution sugar: `"hello".localize(&localizer)`.
pub trait Localize {
    /// Resolves `self` as a translation key, returning the key unchanged
    /// when resolution comes back empty. Untranslated UI stays readable
    /// instead of going blank.
    fn localize(&self, localizer: &Localizer) -> String;
}

impl Localize for str {
    fn localize(&self, localizer: &Localizer) -> String {
        let result = localizer.resolve(self);
        if result.is_empty() {
            self.to_string()
        } else {
            result
        }
    }
}
