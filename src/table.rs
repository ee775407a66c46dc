/// One parsed `"key" = "value";` entry. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizationItem {
    pub key: String,
    pub value: String,
}

impl LocalizationItem {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// All translations for a single language, in file order.
///
/// Lookup is a linear scan over insertion order, so when a file contains
/// duplicate keys the first one wins.
#[derive(Debug, Default, Clone)]
pub struct LocalizationTable {
    items: Vec<LocalizationItem>,
}

impl LocalizationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry. No de-duplication.
    pub fn push(&mut self, item: LocalizationItem) {
        self.items.push(item);
    }

    /// Returns the value stored for `key`, or `key` itself when the table
    /// has no matching entry.
    ///
    /// The key-as-sentinel miss value is load-bearing: the catalog layer
    /// detects "no translation" by checking for emptiness, not by comparing
    /// against the key, so a miss here reads as a hit there (see
    /// [`LocalizationCatalog::resolve_in`](crate::LocalizationCatalog::resolve_in)).
    pub fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        for item in &self.items {
            if item.key == key {
                return &item.value;
            }
        }
        key
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalizationItem> {
        self.items.iter()
    }
}
