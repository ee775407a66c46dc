//! End-to-end loading from a strings folder on disk.

use std::fs;
use std::path::Path;

use bevy_strings::{Language, Localize, Localizer, LocalizerConfig};
use tempfile::TempDir;

fn write_strings(dir: &Path, name: &str, text: &str) {
    fs::write(dir.join(name), text).unwrap();
}

fn strings_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_strings(
        dir.path(),
        "En.strings",
        "-- greetings --\n\"hello\" = \"Hello\";\n\"bye\" = \"Goodbye\";\n",
    );
    write_strings(
        dir.path(),
        "Fr.strings",
        "\"hello\" = \"Bonjour\";\n\"bye\" = \"Au revoir\";\n",
    );
    dir
}

fn config_for(dir: &TempDir, languages: Vec<Language>) -> LocalizerConfig {
    LocalizerConfig {
        languages,
        strings_folder: dir.path().to_str().unwrap().to_string(),
        ..Default::default()
    }
}

#[test]
fn loads_tables_from_strings_files() {
    let dir = strings_dir();
    let config = config_for(&dir, vec![Language::English, Language::French]);
    let localizer = Localizer::new(&config);

    assert_eq!(localizer.loaded_languages().len(), 2);
    assert_eq!(localizer.resolve("hello"), "Hello");
    assert_eq!(localizer.resolve_in("bye", Language::French), "Au revoir");
}

#[test]
fn missing_file_leaves_other_languages_loaded() {
    let dir = strings_dir();
    let config = config_for(
        &dir,
        vec![Language::English, Language::Russian, Language::French],
    );
    let localizer = Localizer::new(&config);

    let loaded = localizer.loaded_languages();
    assert_eq!(loaded.len(), 2);
    assert!(!loaded.contains(&Language::Russian));

    // Russian falls back to the English default.
    assert_eq!(localizer.resolve_in("hello", Language::Russian), "Hello");
}

#[test]
fn extension_less_files_are_picked_up() {
    let dir = tempfile::tempdir().unwrap();
    write_strings(dir.path(), "En", "\"hello\" = \"Hello\";\n");
    let config = config_for(&dir, vec![Language::English]);
    let localizer = Localizer::new(&config);

    assert_eq!(localizer.resolve("hello"), "Hello");
}

#[test]
fn reinit_swaps_the_loaded_language_set() {
    let dir = strings_dir();
    let config = config_for(&dir, vec![Language::English]);
    let mut localizer = Localizer::new(&config);
    assert_eq!(localizer.loaded_languages(), vec![Language::English]);

    localizer.init(&[Language::French]);
    assert_eq!(localizer.loaded_languages(), vec![Language::French]);
    assert_eq!(localizer.resolve_in("hello", Language::French), "Bonjour");
    // English is gone, so the default-language fallback has nothing.
    assert_eq!(localizer.resolve("missing_key_everywhere"), "");
}

#[test]
fn localize_keeps_untranslated_keys_readable() {
    let dir = strings_dir();
    let config = config_for(&dir, vec![Language::English]);
    let localizer = Localizer::new(&config);

    assert_eq!("hello".localize(&localizer), "Hello");
    assert_eq!("not_a_key".localize(&localizer), "not_a_key");
}
