//! The `.strings` statement parser.
//!
//! Extraction happens in two stages. A scanner walks the raw text once,
//! character by character, hunting for the punctuation skeleton
//! `"" = "";` and accumulating everything from the first quote of a
//! candidate statement up to its terminating semicolon. Each accumulated
//! statement is then split into its key and value halves.
//!
//! The scanner matches the *template* characters positionally, not the
//! actual statement content: the match cursor only advances when the input
//! character happens to equal the skeleton character the cursor currently
//! points at. Ordinary keys and values never collide with the punctuation
//! the cursor is waiting for, so in practice this extracts exactly the
//! well-formed statements, but an unescaped `"` in surrounding text can
//! desynchronize extraction of the following statement. There is no
//! backtracking and no escaping; statements that fail to split are
//! silently dropped.

use crate::table::{LocalizationItem, LocalizationTable};

/// The literal punctuation template a statement must produce:
/// quote, quote, space, equals, space, quote, quote, semicolon.
const SKELETON: &str = "\"\" = \"\";";

/// The key/value separator inside an accumulated statement.
const SEPARATOR: &str = " = ";

/// A source of parsed statements feeding a [`LocalizationTable`].
///
/// The skeleton-hunting [`SkeletonScanner`] is the stock implementation;
/// the seam exists so a stricter tokenizer (quote-aware, escape-aware)
/// can be substituted without touching the catalog.
pub trait StatementScanner {
    /// Scans `text` and appends every extracted entry to `table`.
    ///
    /// Match state carries over between calls, so a statement split
    /// across two `scan` calls is still extracted.
    fn scan(&mut self, text: &str, table: &mut LocalizationTable);

    /// Discards any partial match in progress.
    fn reset(&mut self);
}

/// Single-pass scanner matching the fixed `"" = "";` template.
#[derive(Debug, Default)]
pub struct SkeletonScanner {
    /// Index into [`SKELETON`] of the next template character to match.
    cursor: usize,
    /// Accumulated statement text, collected once the first quote matched.
    pending: String,
}

impl SkeletonScanner {
    pub fn new() -> Self {
        Self::default()
    }

    fn skeleton_char(index: usize) -> char {
        // The skeleton is pure ASCII.
        SKELETON.as_bytes()[index] as char
    }
}

impl StatementScanner for SkeletonScanner {
    fn scan(&mut self, text: &str, table: &mut LocalizationTable) {
        for c in text.chars() {
            if c == Self::skeleton_char(self.cursor) {
                self.cursor += 1;
            }

            if self.cursor != 0 {
                self.pending.push(c);
            }

            if self.cursor >= SKELETON.len() {
                if let Some(item) = split_statement(&self.pending) {
                    table.push(item);
                }
                self.reset();
            }
        }
    }

    fn reset(&mut self) {
        self.cursor = 0;
        self.pending.clear();
    }
}

/// Splits an accumulated statement of the shape `"<key>" = "<value>";`
/// into a clean entry.
///
/// The sole validation is that splitting on [`SEPARATOR`] yields exactly
/// two halves; anything else is discarded. The right half loses its
/// trailing `;`, then both halves lose their outer quote pair.
pub(crate) fn split_statement(statement: &str) -> Option<LocalizationItem> {
    let halves: Vec<&str> = statement.split(SEPARATOR).collect();
    if halves.len() != 2 {
        return None;
    }

    let key = strip_ends(halves[0])?;
    let value = strip_ends(drop_last(halves[1])?)?;
    Some(LocalizationItem::new(key, value))
}

/// Drops the first and last character; `None` when fewer than two remain.
fn strip_ends(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next()?;
    chars.next_back()?;
    Some(chars.as_str())
}

fn drop_last(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    chars.next_back()?;
    Some(chars.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan_all(text: &str) -> Vec<(String, String)> {
        let mut table = LocalizationTable::new();
        let mut scanner = SkeletonScanner::new();
        scanner.scan(text, &mut table);
        table
            .iter()
            .map(|item| (item.key.clone(), item.value.clone()))
            .collect()
    }

    #[test]
    fn extracts_statements_in_order() {
        let items = scan_all("\"hello\" = \"Hello\";\n\"bye\" = \"Bye\";");
        assert_eq!(
            items,
            vec![
                ("hello".to_string(), "Hello".to_string()),
                ("bye".to_string(), "Bye".to_string()),
            ]
        );
    }

    #[test]
    fn ignores_surrounding_text() {
        let text = "-- menu section --\n\"play\" = \"Play\";\nsome note\n\"quit\" = \"Quit\";\n";
        let items = scan_all(text);
        assert_eq!(
            items,
            vec![
                ("play".to_string(), "Play".to_string()),
                ("quit".to_string(), "Quit".to_string()),
            ]
        );
    }

    #[test]
    fn no_matches_yields_empty_table() {
        assert!(scan_all("nothing to see here").is_empty());
        assert!(scan_all("").is_empty());
    }

    #[test]
    fn handles_unicode_values() {
        let items = scan_all("\"greeting\" = \"Привет, мир\";");
        assert_eq!(
            items,
            vec![("greeting".to_string(), "Привет, мир".to_string())]
        );
    }

    #[test]
    fn empty_key_and_value_are_accepted() {
        let items = scan_all("\"\" = \"\";");
        assert_eq!(items, vec![(String::new(), String::new())]);
    }

    #[test]
    fn statement_with_extra_separator_is_dropped() {
        // The value itself contains " = ", so the split yields three halves.
        let items = scan_all("\"eq\" = \"a = b\";");
        assert!(items.is_empty());
    }

    #[test]
    fn stray_quote_desynchronizes_the_next_statement() {
        // The lone quote starts a match attempt early, so the accumulated
        // statement carries the garbage prefix and fails to split cleanly.
        let items = scan_all("a stray \" quote\n\"hello\" = \"Hello\";");
        assert_ne!(
            items,
            vec![("hello".to_string(), "Hello".to_string())],
            "desync on stray quotes is expected scanner behavior"
        );
    }

    #[test]
    fn match_state_carries_across_scan_calls() {
        let mut table = LocalizationTable::new();
        let mut scanner = SkeletonScanner::new();
        scanner.scan("\"hello\" = \"He", &mut table);
        scanner.scan("llo\";", &mut table);
        assert_eq!(table.lookup("hello"), "Hello");
    }

    #[test]
    fn reset_discards_partial_match() {
        let mut table = LocalizationTable::new();
        let mut scanner = SkeletonScanner::new();
        scanner.scan("\"hello\" = \"He", &mut table);
        scanner.reset();
        scanner.scan("llo\";", &mut table);
        assert!(table.is_empty());
    }

    #[test]
    fn split_statement_rejects_wrong_half_count() {
        assert!(split_statement("\"no separator\";").is_none());
        assert!(split_statement("\"a\" = \"b\" = \"c\";").is_none());
    }

    #[test]
    fn split_statement_strips_quotes_and_terminator() {
        let item = split_statement("\"key\" = \"value\";").unwrap();
        assert_eq!(item.key, "key");
        assert_eq!(item.value, "value");
    }

    #[test]
    fn split_statement_never_panics_on_short_halves() {
        assert!(split_statement(" = ").is_none());
        assert!(split_statement("\" = \"").is_none());
        assert!(split_statement("").is_none());
    }
}
