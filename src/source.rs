//! Where raw `.strings` text comes from.
//!
//! The catalog never touches the filesystem directly; it asks a
//! [`StringsSource`] for the text of a named resource. Desktop builds use
//! [`FsStringsSource`]; [`MemorySource`] serves preloaded text, which also
//! makes it the natural test double.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to produce the text of a named strings resource.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("strings resource `{0}` not found")]
    NotFound(String),
    #[error("failed to read strings resource `{name}`: {source}")]
    Io {
        name: String,
        #[source]
        source: io::Error,
    },
}

/// Supplies the full text of a named strings resource.
pub trait StringsSource {
    fn load(&self, name: &str) -> Result<String, SourceError>;
}

/// Loads strings files from a folder on disk.
///
/// For a resource named `En` this tries `<folder>/En.strings` first and
/// then the extension-less `<folder>/En`.
#[derive(Debug, Clone)]
pub struct FsStringsSource {
    folder: PathBuf,
}

impl FsStringsSource {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
        }
    }

    fn candidates(&self, name: &str) -> [PathBuf; 2] {
        [
            self.folder.join(format!("{name}.strings")),
            self.folder.join(name),
        ]
    }
}

impl StringsSource for FsStringsSource {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        for path in self.candidates(name) {
            if path.is_file() {
                return fs::read_to_string(&path).map_err(|source| SourceError::Io {
                    name: name.to_string(),
                    source,
                });
            }
        }
        Err(SourceError::NotFound(name.to_string()))
    }
}

/// In-memory strings resources keyed by name.
#[derive(Debug, Default, Clone)]
pub struct MemorySource {
    entries: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(name.into(), text.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.insert(name, text);
        self
    }
}

impl StringsSource for MemorySource {
    fn load(&self, name: &str) -> Result<String, SourceError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(name.to_string()))
    }
}
