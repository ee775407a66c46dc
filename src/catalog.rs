//! The per-language table catalog and its fallback resolution.

use std::collections::HashMap;

use bevy::log::{error, info};

use crate::language::Language;
use crate::parse::{SkeletonScanner, StatementScanner};
use crate::source::StringsSource;
use crate::table::LocalizationTable;

/// One [`LocalizationTable`] per successfully loaded language.
///
/// The catalog has two macro-states: empty (nothing loaded) and ready.
/// [`init`](Self::init) is the only transition and is also how a ready
/// catalog is rebuilt; there is no incremental update. Lookups are
/// read-only; callers in multi-threaded hosts must not overlap an `init`
/// with concurrent resolves.
#[derive(Debug)]
pub struct LocalizationCatalog {
    tables: HashMap<Language, LocalizationTable>,
    default_language: Language,
}

impl LocalizationCatalog {
    pub fn new(default_language: Language) -> Self {
        Self {
            tables: HashMap::new(),
            default_language,
        }
    }

    /// The designated fallback language.
    pub fn default_language(&self) -> Language {
        self.default_language
    }

    /// Clears the catalog and loads one table per language from `source`.
    ///
    /// An empty language list is a configuration error: it is logged and
    /// nothing changes, existing tables included. A language whose
    /// resource fails to load is logged and left out of the catalog;
    /// loading continues with the rest.
    pub fn init(&mut self, languages: &[Language], source: &dyn StringsSource) {
        let mut scanner = SkeletonScanner::new();
        self.init_with_scanner(languages, source, &mut scanner);
    }

    /// [`init`](Self::init) with a caller-provided scanner, for hosts that
    /// substitute a stricter statement tokenizer.
    pub fn init_with_scanner(
        &mut self,
        languages: &[Language],
        source: &dyn StringsSource,
        scanner: &mut dyn StatementScanner,
    ) {
        if languages.is_empty() {
            error!("localization init: no languages configured");
            return;
        }

        self.tables.clear();
        scanner.reset();

        for &language in languages {
            self.load_language(language, source, scanner);
        }

        info!("localization init: {} table(s) loaded", self.tables.len());
    }

    fn load_language(
        &mut self,
        language: Language,
        source: &dyn StringsSource,
        scanner: &mut dyn StatementScanner,
    ) {
        let name = language.file_stem();
        let text = match source.load(name) {
            Ok(text) => text,
            Err(err) => {
                error!("localization init: {} ({name}): {err}", language.name());
                return;
            }
        };

        let mut table = LocalizationTable::new();
        scanner.scan(&text, &mut table);
        self.tables.insert(language, table);
    }

    /// Resolves `key` in `language`, falling back to the default language,
    /// then to an empty string.
    ///
    /// "Found" is decided by non-emptiness of the table lookup. Because a
    /// table miss returns the key itself, a key absent from an existing
    /// requested-language table resolves to the key without consulting the
    /// fallback, while a key stored with an empty value does fall through.
    pub fn resolve_in(&self, key: &str, language: Language) -> String {
        if let Some(table) = self.tables.get(&language) {
            let result = table.lookup(key);
            if !result.is_empty() {
                return result.to_string();
            }
        }

        if let Some(table) = self.tables.get(&self.default_language) {
            let result = table.lookup(key);
            if !result.is_empty() {
                return result.to_string();
            }
        }

        String::new()
    }

    /// The table loaded for `language`, if its resource loaded.
    pub fn table(&self, language: Language) -> Option<&LocalizationTable> {
        self.tables.get(&language)
    }

    /// Languages with a loaded table, in no particular order.
    pub fn languages(&self) -> impl Iterator<Item = Language> + '_ {
        self.tables.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}
